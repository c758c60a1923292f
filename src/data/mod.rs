mod loader;

pub use loader::{LoadError, bundled_catalog, load_catalog_from_json, parse_catalog};
