//! Helper functions for URL and tag identity derivation

mod url;

pub use url::*;
