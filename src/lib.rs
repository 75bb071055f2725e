pub mod formatter;
pub mod parser;
pub mod settings;
pub mod types;

mod approximation;
mod cmp;
mod normalize;
mod ops;

// Main API exports
pub use formatter::{format_fraction, format_mixed};
pub use parser::parse_rational;
pub use settings::{ApproximationSettings, SettingsError};
pub use types::*;
