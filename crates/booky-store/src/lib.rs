//! booky-store: Storage layer for the Booky book catalog
//!
//! This crate provides:
//! - [`Catalog`]: keyed in-memory collections of books, authors, and
//!   publications with cascading cross-reference maintenance
//! - [`Store`]: the catalog behind an async lock, shared by request handlers
//! - JSON snapshot persistence ([`snapshot::load`], [`snapshot::save`])
//!
//! # Usage
//!
//! ```rust,ignore
//! use booky_store::{Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::from_env())?;
//!
//! store.mutate(|catalog| catalog.add_book(book)).await?;
//!
//! let books = store.read().await.list_books();
//! ```

pub mod catalog;
pub mod error;
pub mod snapshot;
pub mod store;

pub use catalog::Catalog;
pub use error::{StoreError, StoreResult};
pub use snapshot::Snapshot;
pub use store::{Store, StoreConfig};

// Re-export booky-core for downstream crates
pub use booky_core;
