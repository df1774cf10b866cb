//! Auction session: the three operations a front end calls.

use auctionhouse_core::Amount;

use crate::catalog::Catalog;
use crate::engine::{BidOutcome, BiddingEngine, LotResult};
use crate::product::Product;

/// One auction, owned by whichever front end drives it.
///
/// Not synchronized; callers sharing a session across threads must wrap it
/// in their own lock.
#[derive(Debug, Clone, Default)]
pub struct Auction {
    catalog: Catalog,
    engine: BiddingEngine,
}

impl Auction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn add_product(&mut self, name: &str, starting_price: Amount) -> &Product {
        tracing::info!(product = name, %starting_price, "product added");
        self.catalog.add(name, starting_price)
    }

    pub fn place_bid(&mut self, product_name: &str, bidder_name: &str, amount: Amount) -> BidOutcome {
        let outcome = self
            .engine
            .place_bid(&mut self.catalog, product_name, bidder_name, amount);

        match outcome {
            BidOutcome::Accepted => {
                tracing::info!(product = product_name, bidder = bidder_name, %amount, "bid accepted");
            }
            BidOutcome::Rejected(reason) => {
                tracing::debug!(
                    product = product_name,
                    bidder = bidder_name,
                    %amount,
                    ?reason,
                    "bid rejected"
                );
            }
        }

        outcome
    }

    pub fn results(&self) -> Vec<LotResult> {
        self.engine.results(&self.catalog)
    }

    pub fn close_and_report(&self) -> String {
        tracing::info!(products = self.catalog.len(), "auction report generated");
        self.engine.close_and_report(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Rejection;

    #[test]
    fn add_product_returns_created_product() {
        let mut auction = Auction::new();
        let product = auction.add_product("Vase", Amount::new(10.0));
        assert_eq!(product.name(), "Vase");
        assert_eq!(auction.catalog().len(), 1);
    }

    #[test]
    fn place_bid_delegates_to_engine() {
        let mut auction = Auction::new();
        auction.add_product("Vase", Amount::new(10.0));

        assert_eq!(
            auction.place_bid("Vase", "Alice", Amount::new(15.0)),
            BidOutcome::Accepted
        );
        assert_eq!(
            auction.place_bid("Vase", "Bob", Amount::new(12.0)),
            BidOutcome::Rejected(Rejection::TooLow)
        );
        assert_eq!(auction.close_and_report(), "Vase: Sold to Alice for $15.0");
    }
}
