//! Place catalog adapters
//!
//! - [`HttpPlaceCatalog`]: the remote catalog service over HTTP
//! - [`StaticCatalog`]: the catalog bundled with the binary

mod http;
mod static_catalog;

pub use http::HttpPlaceCatalog;
pub use static_catalog::StaticCatalog;
