pub mod toml_loader;

pub use toml_loader::{load_canonical_order, load_canonical_order_or_default};
