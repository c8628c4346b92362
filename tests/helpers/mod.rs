//! Test helpers module
//!
//! This module provides utilities and helpers for testing the admin console:
//! a mock achievements API and JSON test data.

#![allow(dead_code)]

pub mod api_mock;
pub mod test_data;

pub use api_mock::*;
pub use test_data::*;
