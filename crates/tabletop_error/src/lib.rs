//! Error types for the Tabletop campaign bot.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use tabletop_error::{EntityError, EntityErrorKind, TabletopResult};
//!
//! fn check(id: &str) -> TabletopResult<()> {
//!     Err(EntityError::new(EntityErrorKind::InvalidIdentifier(id.to_string())))?
//! }
//!
//! assert!(check("abc").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod entity;
mod error;
mod json;

pub use config::{ConfigError, ConfigErrorKind};
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use entity::{EntityError, EntityErrorKind};
pub use error::{TabletopError, TabletopErrorKind, TabletopResult};
pub use json::JsonError;
