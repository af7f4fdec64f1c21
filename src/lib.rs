// src/lib.rs

// Macro modules first: s!/join! and the log macros are used crate-wide.
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalog;
pub mod core;
pub mod error;
pub mod menu;
pub mod nav;
pub mod params;
pub mod scrape;
