pub mod toml_loader;

pub use toml_loader::{load_record_from_toml, parse_record};
