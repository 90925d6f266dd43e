//! Core types and logic for a single-item ascending auction.
//!
//! This crate provides:
//! - The [`Auction`] entity and its bid validation rules
//! - Bidder name normalization
//! - Configuration structures
//! - Common error types
//! - Argument conversion for dynamically typed callers

pub mod auction;
pub mod config;
pub mod error;
pub mod normalize;
pub mod types;
pub mod untyped;

pub use auction::Auction;
pub use config::AuctionConfig;
pub use error::{Error, ErrorKind, Result};
pub use normalize::normalize_name;
pub use types::*;
pub use untyped::UntypedArg;
