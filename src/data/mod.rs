//! Catalog access: archive queries and the dated local cache.

pub mod archive;
pub mod cache;

pub use archive::{ArchiveClient, small_warm_worlds_query};
pub use cache::{CatalogFile, CatalogOrigin, cache_file_name, resolve_catalog};
