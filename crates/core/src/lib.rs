//! `auctionhouse-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod amount;
pub mod error;
pub mod value_object;

pub use amount::Amount;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
