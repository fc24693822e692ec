//! rnd core — entropy sources and the shared, re-seeding generator.
//!
//! This crate defines the building blocks the `rnd` facade is assembled
//! from. It never hands out a way to choose the seed of the process-wide
//! source; that lives in `rnd` and stays private there.

pub mod entropy;
pub mod error;
pub mod source;
