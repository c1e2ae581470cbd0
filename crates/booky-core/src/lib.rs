//! booky-core: Core types for the Booky book catalog
//!
//! This crate provides the catalog's domain types:
//! - Key newtypes: [`Isbn`], [`AuthorId`], [`PublicationId`]
//! - Records: [`Book`], [`Author`], [`Publication`]
//!
//! The records serialize with the field names the HTTP API has always
//! exposed (`ISBN`, `pubDate`, `numPage`, ...), so they are used directly
//! as request and response payloads.

pub mod types;

pub use types::*;
