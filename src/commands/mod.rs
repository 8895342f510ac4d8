pub mod export;
pub mod pull;

pub use export::{handle_export, Destination, ExportConfig, Selection};
