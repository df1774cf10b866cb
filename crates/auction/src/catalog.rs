//! Ordered product catalog.

use auctionhouse_core::Amount;

use crate::product::Product;

/// All products of an auction session, in insertion order.
///
/// The catalog only grows. Names are not required to be unique: lookups
/// resolve to the first product added under a name, so later duplicates are
/// shadowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new product with no bids.
    ///
    /// Neither the price sign nor name uniqueness is checked.
    pub fn add(&mut self, name: impl Into<String>, starting_price: Amount) -> &Product {
        let index = self.products.len();
        self.products.push(Product::new(name, starting_price));
        &self.products[index]
    }

    /// First product whose name equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.name() == name)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
