//! Common utilities for Kestrel.
//!
//! This crate provides shared infrastructure for the Kestrel tools:
//! - **Warning System** - deduplicated, colored terminal warnings for input
//!   that is accepted but probably not what the user meant

pub mod warning;
