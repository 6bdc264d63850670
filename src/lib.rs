//! alza-tools library — product-listing scraper for alza.cz and a
//! CSV-to-HTML catalogue builder.
//!
//! This library crate exposes the pipeline modules for integration testing.

pub mod browser;
pub mod catalogue;
pub mod cli;
pub mod record;
pub mod scrape;
