// Adapters layer: parse the input files into domain types and render results.

pub mod exclusions;
pub mod last_year;
pub mod names;
pub mod output;

pub use exclusions::parse_exclusions;
pub use last_year::parse_last_year;
pub use names::parse_names;
pub use output::{render, OutputFormat};
