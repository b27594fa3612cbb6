//! Utility functions module.
//!
//! This module contains helpers shared by the state and the UI, such as
//! timestamp formatting.

pub mod dates;
