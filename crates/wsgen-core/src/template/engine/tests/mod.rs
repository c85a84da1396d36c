//! Tests for template engine
//!
//! Organized into focused submodules per feature.

use super::*;

// Test helper functions
mod helpers;


mod render_loops;

// Error and edge case tests
mod errors;
