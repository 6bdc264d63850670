//! CLI subcommand implementations for the alza binary.

pub mod catalogue_cmd;
pub mod doctor;
pub mod prompt;
pub mod scrape_cmd;
