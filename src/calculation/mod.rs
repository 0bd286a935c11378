//! Calculation logic for the aguinaldo receipt generator.
//!
//! This module contains the bonus formula applied to each employee's
//! monthly earnings.

mod aguinaldo;

pub use aguinaldo::{aguinaldo_divisor, calculate_aguinaldo};
