//! Terminal front end for an auction session.
//!
//! Reads one command per line, calls into the auction core and renders the
//! outcome. All business rules live in `auctionhouse-auction`.

pub mod command;
pub mod config;
pub mod repl;

pub use command::{Command, CommandError};
pub use config::Config;
pub use repl::run;
