//! Auction domain module.
//!
//! This crate contains the business rules for a single-process auction: the
//! product catalog, bid evaluation and the results report. It is purely
//! in-memory, deterministic domain logic (no IO, no storage).

pub mod catalog;
pub mod engine;
pub mod product;
pub mod session;

pub use catalog::Catalog;
pub use engine::{BidOutcome, BiddingEngine, LotResult, Rejection, SaleOutcome};
pub use product::Product;
pub use session::Auction;
