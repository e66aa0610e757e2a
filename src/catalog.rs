//! This module holds the fixed product catalog of the vending machine, keyed
//! by the exact binary sequence that dispenses each product, and the lookup
//! over it.

use serde::Serialize;
use std::collections::HashMap;

/// A catalog record: the product image shown by the presentation layer, its
/// display name, and its price tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// File name of the product image. Loading it is the caller's concern.
    pub image: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Formatted price tag.
    pub price: &'static str,
}

const fn product(image: &'static str, name: &'static str, price: &'static str) -> Product {
    Product { image, name, price }
}

lazy_static::lazy_static! {
    /// The fixed catalog. Keys are sequences of length 2 or 3 over `{0, 1}`.
    pub static ref PRODUCTS: HashMap<&'static str, Product> = HashMap::from([
        ("01", product("galletas.jpg", "Galletas", "$1500")),
        ("10", product("gaseosa.jpg", "Gaseosa", "$1500")),
        ("00", product("agua.jpg", "Agua", "$1000")),
        ("11", product("papas.jpg", "Papitas", "$2000")),
        ("000", product("chicle.jpg", "Chicle", "$1500")),
        ("111", product("chocolate.jpg", "Chocolate", "$3000")),
        ("010", product("mani.jpg", "Maní", "$2000")),
        ("101", product("jugo.jpg", "Jugo", "$2000")),
        ("011", product("tostacos.jpg", "Tostacos", "$2500")),
    ]);
}

/// Looks up `input` in the catalog by exact match.
///
/// An absent key is a normal outcome (the sequence buys nothing), not an
/// error; malformed input is likewise simply absent here and only rejected
/// by the builder.
pub fn lookup(input: &str) -> Option<&'static Product> {
    PRODUCTS.get(input)
}
