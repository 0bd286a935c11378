//! Aguinaldo receipt generator
//!
//! This crate computes the Costa Rican statutory year-end bonus (aguinaldo)
//! for each employee in a payroll file and renders a print-ready text
//! receipt per employee.

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod receipt;
