//! Core value types for the Tabletop campaign bot.
//!
//! This crate holds the pieces of the entity model that need no storage:
//! - [`Snowflake`] and [`is_valid`] for platform identifiers
//! - [`PlayerType`] and [`CharacterType`], the closed type registries
//! - [`TypeCandidate`] and [`resolve`], which turn either a registry tag or
//!   its canonical string into the tag

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod registry;
mod snowflake;

pub use registry::{CharacterType, PlayerType, TypeCandidate, TypeRegistry, resolve};
pub use snowflake::{Snowflake, is_valid, is_valid_value};
