use serde::Serialize;

use auctionhouse_core::Amount;

/// An item up for auction.
///
/// `current_highest_bid` starts at `starting_price` and only ever moves up;
/// `highest_bidder` is set by the first accepted bid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    starting_price: Amount,
    current_highest_bid: Amount,
    highest_bidder: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, starting_price: Amount) -> Self {
        Self {
            name: name.into(),
            starting_price,
            current_highest_bid: starting_price,
            highest_bidder: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn starting_price(&self) -> Amount {
        self.starting_price
    }

    pub fn current_highest_bid(&self) -> Amount {
        self.current_highest_bid
    }

    pub fn highest_bidder(&self) -> Option<&str> {
        self.highest_bidder.as_deref()
    }

    /// Whether `amount` would outbid the current highest bid.
    pub fn accepts(&self, amount: Amount) -> bool {
        amount.exceeds(self.current_highest_bid)
    }

    /// Record a winning bid. Callers must check [`Product::accepts`] first.
    pub(crate) fn record_winning_bid(&mut self, bidder: impl Into<String>, amount: Amount) {
        debug_assert!(self.accepts(amount));
        self.current_highest_bid = amount;
        self.highest_bidder = Some(bidder.into());
    }
}
