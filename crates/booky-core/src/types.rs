//! Core data types for the book catalog.
//!
//! The catalog holds three record kinds, each with a unique key:
//!
//! - [`Book`], keyed by [`Isbn`]
//! - [`Author`], keyed by [`AuthorId`]
//! - [`Publication`], keyed by [`PublicationId`]
//!
//! Books reference their authors and publication by key; authors and
//! publications reference books by ISBN. Keeping both directions in sync
//! is the job of the store, not of these types.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

// ============================================================================
// Key Types
// ============================================================================

/// International Standard Book Number, the unique key of a [`Book`].
///
/// Stored verbatim. No checksum validation is applied; the catalog treats
/// the ISBN as an opaque string key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(pub String);

impl Isbn {
    /// Creates an ISBN from anything string-like.
    #[must_use]
    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }

    /// Returns the ISBN as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Isbn {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for Isbn {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Isbn {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Unique identifier for an [`Author`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub u32);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AuthorId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a [`Publication`].
///
/// The value `0` is reserved: a book whose publication is
/// [`PublicationId::UNPUBLISHED`] has not been published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicationId(pub u32);

impl PublicationId {
    /// Marker for books without a publication.
    pub const UNPUBLISHED: Self = Self(0);

    /// Returns true if this id is the unpublished marker.
    #[must_use]
    pub const fn is_unpublished(&self) -> bool {
        self.0 == 0
    }
}

impl Default for PublicationId {
    fn default() -> Self {
        Self::UNPUBLISHED
    }
}

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PublicationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

// ============================================================================
// Records
// ============================================================================

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique key.
    #[serde(rename = "ISBN")]
    pub isbn: Isbn,
    pub title: String,
    /// Publication date, free-form (e.g. "2021-07-07").
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
    #[serde(default)]
    pub language: String,
    /// Number of pages.
    #[serde(rename = "numPage", default)]
    pub num_page: u32,
    /// Ids of the authors who wrote this book.
    #[serde(rename = "author", default)]
    pub authors: Vec<AuthorId>,
    /// Publication that published this book, or `0` when unpublished.
    #[serde(rename = "publications", default)]
    pub publication: PublicationId,
    /// Category tags.
    #[serde(rename = "category", default)]
    pub categories: Vec<String>,
}

impl Book {
    /// Creates an unpublished book with no authors or categories.
    #[must_use]
    pub fn new(isbn: impl Into<Isbn>, title: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            pub_date: String::new(),
            language: String::new(),
            num_page: 0,
            authors: Vec::new(),
            publication: PublicationId::UNPUBLISHED,
            categories: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: AuthorId) -> Self {
        self.authors.push(author);
        self
    }

    #[must_use]
    pub fn with_publication(mut self, publication: PublicationId) -> Self {
        self.publication = publication;
        self
    }

    /// Returns true if the book carries the given category tag.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Returns true if the book was written (in part) by `author`.
    #[must_use]
    pub fn has_author(&self, author: AuthorId) -> bool {
        self.authors.contains(&author)
    }
}

/// An author in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Unique key.
    pub id: AuthorId,
    pub name: String,
    /// ISBNs of the books this author wrote.
    #[serde(default)]
    pub books: Vec<Isbn>,
}

impl Author {
    /// Creates an author with no books.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: AuthorId(id),
            name: name.into(),
            books: Vec::new(),
        }
    }

    /// Returns true if the author lists `isbn` among their books.
    #[must_use]
    pub fn wrote(&self, isbn: &Isbn) -> bool {
        self.books.contains(isbn)
    }
}

/// A publisher in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Unique key. Never `0`.
    pub id: PublicationId,
    pub name: String,
    /// ISBNs of the books this publication published.
    #[serde(default)]
    pub books: Vec<Isbn>,
}

impl Publication {
    /// Creates a publication with no books.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: PublicationId(id),
            name: name.into(),
            books: Vec::new(),
        }
    }

    /// Returns true if the publication lists `isbn` among its books.
    #[must_use]
    pub fn published(&self, isbn: &Isbn) -> bool {
        self.books.contains(isbn)
    }
}

// ============================================================================
// Tests
// ============================================================================
