use clap::Parser;
use vendo::{build, derive, lookup};

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The binary sequence to run through the vending machine
    #[clap(short, long)]
    sequence: String,

    /// Emit the automaton and lookup result as JSON instead of the report
    #[clap(short, long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let automaton = match build(&cli.sequence) {
        Ok(automaton) => automaton,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let product = lookup(&cli.sequence);

    if cli.json {
        let payload = serde_json::json!({
            "automaton": automaton,
            "product": product,
        });
        println!("{}", serde_json::to_string_pretty(&payload).unwrap());
        return;
    }

    println!("{}", automaton);

    match derive(&automaton) {
        Ok(derivation) => println!("{}", derivation),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    match product {
        Some(product) => println!("\nAccepted ✅ {} - {}", product.name, product.price),
        None => println!("\nNot in the product catalog ❌"),
    }
}
