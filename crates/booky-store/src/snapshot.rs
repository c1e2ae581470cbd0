//! JSON snapshot persistence for the catalog.
//!
//! A snapshot is the whole catalog as one JSON document:
//!
//! ```json
//! { "books": [...], "authors": [...], "publications": [...] }
//! ```
//!
//! Loading rebuilds the catalog through the regular insert operations, so a
//! snapshot edited by hand is validated the same way API input is. The
//! book side of every cross-reference is authoritative: an author listing a
//! book that does not list the author back is repaired, with a warning.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use booky_core::{Author, Book, Isbn, Publication};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::StoreResult;

/// Serialized form of a [`Catalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub publications: Vec<Publication>,
}

impl Catalog {
    /// Capture the catalog as a snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            books: self.list_books(),
            authors: self.list_authors(),
            publications: self.list_publications(),
        }
    }

    /// Rebuild a catalog from a snapshot.
    ///
    /// Fails on duplicate keys or references to records the snapshot does
    /// not contain.
    pub fn from_snapshot(snapshot: Snapshot) -> StoreResult<Self> {
        let mut catalog = Catalog::new();

        let mut author_order = Vec::with_capacity(snapshot.authors.len());
        for mut author in snapshot.authors {
            author_order.push((author.id, std::mem::take(&mut author.books)));
            catalog.add_author(author)?;
        }

        let mut publication_order = Vec::with_capacity(snapshot.publications.len());
        for mut publication in snapshot.publications {
            publication_order.push((publication.id, std::mem::take(&mut publication.books)));
            catalog.add_publication(publication)?;
        }

        for book in snapshot.books {
            catalog.add_book(book)?;
        }

        // Linking re-derived every back-reference in ISBN order; put them
        // back in the order the snapshot listed them.
        for (id, original) in author_order {
            if let Some(author) = catalog.author_mut(id) {
                reconcile("author", &id.to_string(), &mut author.books, &original);
            }
        }
        for (id, original) in publication_order {
            if let Some(publication) = catalog.publication_mut(id) {
                reconcile("publication", &id.to_string(), &mut publication.books, &original);
            }
        }

        Ok(catalog)
    }
}

/// Restore the snapshot's ordering of `rebuilt`, warning if the two differ
/// in content.
fn reconcile(kind: &str, key: &str, rebuilt: &mut [Isbn], original: &[Isbn]) {
    let consistent =
        rebuilt.len() == original.len() && original.iter().all(|isbn| rebuilt.contains(isbn));
    if !consistent {
        tracing::warn!(
            kind,
            key,
            listed = original.len(),
            linked = rebuilt.len(),
            "Snapshot back-references disagree with books; using the books' view"
        );
    }

    rebuilt.sort_by_key(|isbn| {
        original
            .iter()
            .position(|o| o == isbn)
            .unwrap_or(usize::MAX)
    });
}

/// Load a catalog from `path`. A missing file yields an empty catalog.
pub fn load(path: &Path) -> StoreResult<Catalog> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No snapshot found, starting with an empty catalog");
            return Ok(Catalog::new());
        }
        Err(e) => return Err(e.into()),
    };

    let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
    let catalog = Catalog::from_snapshot(snapshot)?;

    tracing::info!(path = %path.display(), "Loaded catalog snapshot");
    Ok(catalog)
}

/// Write `catalog` to `path`, replacing any previous snapshot atomically.
pub fn save(catalog: &Catalog, path: &Path) -> StoreResult<()> {
    let bytes = serde_json::to_vec_pretty(&catalog.snapshot())?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;

    tracing::debug!(path = %path.display(), "Saved catalog snapshot");
    Ok(())
}
