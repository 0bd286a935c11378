//! Loading payroll input files.
//!
//! # Example
//!
//! ```no_run
//! use aguinaldo::input::InputLoader;
//!
//! let input = InputLoader::load("./nomina.json").unwrap();
//! println!("Loaded {} employees for {}", input.employees.len(), input.company.name);
//! ```

mod loader;

pub use loader::InputLoader;
