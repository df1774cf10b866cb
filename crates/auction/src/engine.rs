//! Bid evaluation and results reporting.

use serde::Serialize;
use thiserror::Error;

use auctionhouse_core::Amount;

use crate::catalog::Catalog;
use crate::product::Product;

/// Result of evaluating a single bid.
///
/// Rejections are ordinary outcomes; nothing in the engine fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOutcome {
    /// The bid became the product's new highest bid.
    Accepted,
    Rejected(Rejection),
}

impl BidOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, BidOutcome::Accepted)
    }
}

/// Why a bid was turned away.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The amount does not exceed the current highest bid.
    #[error("Bid too low. Please place a higher bid.")]
    TooLow,

    /// No product in the catalog has the requested name.
    #[error("Product not found.")]
    NotFound,
}

/// How a product ended up when the auction was reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SaleOutcome {
    Sold { bidder: String, amount: Amount },
    Unsold,
}

/// Report entry for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotResult {
    pub name: String,
    #[serde(flatten)]
    pub outcome: SaleOutcome,
}

impl LotResult {
    fn from_product(product: &Product) -> Self {
        let outcome = match product.highest_bidder() {
            Some(bidder) => SaleOutcome::Sold {
                bidder: bidder.to_string(),
                amount: product.current_highest_bid(),
            },
            None => SaleOutcome::Unsold,
        };
        Self {
            name: product.name().to_string(),
            outcome,
        }
    }
}

impl core::fmt::Display for LotResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.outcome {
            SaleOutcome::Sold { bidder, amount } => {
                write!(f, "{}: Sold to {} for ${}", self.name, bidder, amount)
            }
            SaleOutcome::Unsold => write!(f, "{}: No bids. Unsold.", self.name),
        }
    }
}

/// Stateless bid evaluator over a [`Catalog`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BiddingEngine;

impl BiddingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a bid against the first product named `product_name`.
    ///
    /// The bid wins only if it strictly exceeds the current highest bid, so a
    /// first bid equal to the starting price is rejected.
    pub fn place_bid(
        &self,
        catalog: &mut Catalog,
        product_name: &str,
        bidder_name: &str,
        amount: Amount,
    ) -> BidOutcome {
        let Some(product) = catalog.find_by_name_mut(product_name) else {
            return BidOutcome::Rejected(Rejection::NotFound);
        };

        if !product.accepts(amount) {
            return BidOutcome::Rejected(Rejection::TooLow);
        }

        product.record_winning_bid(bidder_name, amount);
        BidOutcome::Accepted
    }

    /// Per-product results in catalog order.
    pub fn results(&self, catalog: &Catalog) -> Vec<LotResult> {
        catalog.products().map(LotResult::from_product).collect()
    }

    /// Render the results report, one line per product.
    ///
    /// Pure read: it can be called any number of times and does not stop
    /// further bidding.
    pub fn close_and_report(&self, catalog: &Catalog) -> String {
        self.results(catalog)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
