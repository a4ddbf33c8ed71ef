//! CLI functionality for the nits tool
//!
//! This module contains all CLI-related functionality including:
//! - Casting values
//! - Checking the identity law
//! - Listing registered casts
//! - Logging setup
//! - Output formatting

pub mod cast;
pub mod check;
pub mod list;
pub mod logging;
pub mod output;
