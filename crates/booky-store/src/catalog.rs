//! The in-memory book catalog.
//!
//! [`Catalog`] holds books, authors, and publications in maps keyed by
//! their unique key and keeps the references between them consistent:
//!
//! - a book's `authors` and each author's `books` always agree
//! - a book's `publication` and the publication's `books` always agree
//! - deleting a record removes every reference to it
//!
//! All operations are synchronous. Validation happens before any field is
//! touched, so a failed operation leaves the catalog unchanged.

use std::collections::BTreeMap;

use booky_core::{Author, AuthorId, Book, Isbn, Publication, PublicationId};

use crate::error::{StoreError, StoreResult};

/// Books, authors, and publications with bidirectional cross-references.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: BTreeMap<Isbn, Book>,
    authors: BTreeMap<AuthorId, Author>,
    publications: BTreeMap<PublicationId, Publication>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the catalog holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.authors.is_empty() && self.publications.is_empty()
    }

    // ==================== Listing ====================

    /// All books, ordered by ISBN.
    pub fn list_books(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    /// All authors, ordered by id.
    pub fn list_authors(&self) -> Vec<Author> {
        self.authors.values().cloned().collect()
    }

    /// All publications, ordered by id.
    pub fn list_publications(&self) -> Vec<Publication> {
        self.publications.values().cloned().collect()
    }

    // ==================== Lookups ====================

    /// Get a book by ISBN.
    pub fn find_book(&self, isbn: &Isbn) -> StoreResult<&Book> {
        self.books
            .get(isbn)
            .ok_or_else(|| StoreError::BookNotFound(isbn.clone()))
    }

    /// Get an author by id.
    pub fn find_author(&self, id: AuthorId) -> StoreResult<&Author> {
        self.authors.get(&id).ok_or(StoreError::AuthorNotFound(id))
    }

    /// Get a publication by id.
    pub fn find_publication(&self, id: PublicationId) -> StoreResult<&Publication> {
        self.publications
            .get(&id)
            .ok_or(StoreError::PublicationNotFound(id))
    }

    /// Books tagged with `category`. Errors if there are none.
    pub fn find_books_by_category(&self, category: &str) -> StoreResult<Vec<Book>> {
        let books: Vec<Book> = self
            .books
            .values()
            .filter(|book| book.has_category(category))
            .cloned()
            .collect();

        if books.is_empty() {
            return Err(StoreError::no_matches("book", "category", category));
        }
        Ok(books)
    }

    /// Books written in `language`. Errors if there are none.
    pub fn find_books_by_language(&self, language: &str) -> StoreResult<Vec<Book>> {
        let books: Vec<Book> = self
            .books
            .values()
            .filter(|book| book.language == language)
            .cloned()
            .collect();

        if books.is_empty() {
            return Err(StoreError::no_matches("book", "language", language));
        }
        Ok(books)
    }

    /// Authors of the book with `isbn`.
    ///
    /// Errors if the book does not exist or has no authors.
    pub fn find_authors_by_book(&self, isbn: &Isbn) -> StoreResult<Vec<Author>> {
        let book = self.find_book(isbn)?;
        let authors: Vec<Author> = book
            .authors
            .iter()
            .filter_map(|id| self.authors.get(id))
            .cloned()
            .collect();

        if authors.is_empty() {
            return Err(StoreError::no_matches("author", "ISBN", isbn.as_str()));
        }
        Ok(authors)
    }

    /// Publications of the book with `isbn` (at most one).
    ///
    /// Errors if the book does not exist or is unpublished.
    pub fn find_publications_by_book(&self, isbn: &Isbn) -> StoreResult<Vec<Publication>> {
        let book = self.find_book(isbn)?;
        match self.publications.get(&book.publication) {
            Some(publication) => Ok(vec![publication.clone()]),
            None => Err(StoreError::no_matches("publication", "ISBN", isbn.as_str())),
        }
    }

    // ==================== Inserts ====================

    /// Add a new book and link it into the authors and publication it names.
    pub fn add_book(&mut self, mut book: Book) -> StoreResult<()> {
        if self.books.contains_key(&book.isbn) {
            return Err(StoreError::Conflict {
                kind: "book",
                key: book.isbn.to_string(),
            });
        }

        dedup_in_order(&mut book.authors);
        if let Some(missing) = book.authors.iter().find(|id| !self.authors.contains_key(*id)) {
            return Err(StoreError::InvalidReference {
                kind: "author",
                key: missing.to_string(),
            });
        }
        if !book.publication.is_unpublished() && !self.publications.contains_key(&book.publication)
        {
            return Err(StoreError::InvalidReference {
                kind: "publication",
                key: book.publication.to_string(),
            });
        }

        for id in &book.authors {
            if let Some(author) = self.authors.get_mut(id) {
                push_unique(&mut author.books, book.isbn.clone());
            }
        }
        if let Some(publication) = self.publications.get_mut(&book.publication) {
            push_unique(&mut publication.books, book.isbn.clone());
        }

        tracing::debug!(isbn = %book.isbn, "Book added to catalog");
        self.books.insert(book.isbn.clone(), book);
        Ok(())
    }

    /// Add a new author and link it into the books it names.
    pub fn add_author(&mut self, mut author: Author) -> StoreResult<()> {
        if self.authors.contains_key(&author.id) {
            return Err(StoreError::Conflict {
                kind: "author",
                key: author.id.to_string(),
            });
        }

        dedup_in_order(&mut author.books);
        self.ensure_books_exist(&author.books)?;

        for isbn in &author.books {
            if let Some(book) = self.books.get_mut(isbn) {
                push_unique(&mut book.authors, author.id);
            }
        }

        tracing::debug!(author_id = %author.id, "Author added to catalog");
        self.authors.insert(author.id, author);
        Ok(())
    }

    /// Add a new publication and move the books it names onto it.
    ///
    /// A listed book that was published elsewhere is removed from its
    /// previous publication.
    pub fn add_publication(&mut self, mut publication: Publication) -> StoreResult<()> {
        if publication.id.is_unpublished() {
            return Err(StoreError::InvalidRecord(
                "publication id 0 is reserved for unpublished books".to_string(),
            ));
        }
        if self.publications.contains_key(&publication.id) {
            return Err(StoreError::Conflict {
                kind: "publication",
                key: publication.id.to_string(),
            });
        }

        dedup_in_order(&mut publication.books);
        self.ensure_books_exist(&publication.books)?;

        for isbn in &publication.books {
            let Some(book) = self.books.get_mut(isbn) else {
                continue;
            };
            let previous = std::mem::replace(&mut book.publication, publication.id);
            if let Some(old) = self.publications.get_mut(&previous) {
                old.books.retain(|i| i != isbn);
            }
        }

        tracing::debug!(publication_id = %publication.id, "Publication added to catalog");
        self.publications.insert(publication.id, publication);
        Ok(())
    }

    // ==================== Updates ====================

    /// Replace the title of a book. No other field changes.
    pub fn update_book_title(&mut self, isbn: &Isbn, title: impl Into<String>) -> StoreResult<()> {
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| StoreError::BookNotFound(isbn.clone()))?;
        book.title = title.into();
        Ok(())
    }

    /// Record `author_id` as an author of the book, on both sides. Idempotent.
    pub fn add_author_to_book(&mut self, isbn: &Isbn, author_id: AuthorId) -> StoreResult<()> {
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| StoreError::BookNotFound(isbn.clone()))?;
        let author = self
            .authors
            .get_mut(&author_id)
            .ok_or(StoreError::AuthorNotFound(author_id))?;

        push_unique(&mut book.authors, author_id);
        push_unique(&mut author.books, isbn.clone());
        Ok(())
    }

    /// Remove the link between a book and one of its authors, on both sides.
    pub fn remove_author_from_book(&mut self, isbn: &Isbn, author_id: AuthorId) -> StoreResult<()> {
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| StoreError::BookNotFound(isbn.clone()))?;
        let author = self
            .authors
            .get_mut(&author_id)
            .ok_or(StoreError::AuthorNotFound(author_id))?;

        book.authors.retain(|id| *id != author_id);
        author.books.retain(|i| i != isbn);
        Ok(())
    }

    /// Move a book onto `publication_id`, or unpublish it when the id is `0`.
    pub fn set_book_publication(
        &mut self,
        isbn: &Isbn,
        publication_id: PublicationId,
    ) -> StoreResult<()> {
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| StoreError::BookNotFound(isbn.clone()))?;
        if !publication_id.is_unpublished() && !self.publications.contains_key(&publication_id) {
            return Err(StoreError::PublicationNotFound(publication_id));
        }

        let previous = std::mem::replace(&mut book.publication, publication_id);
        if previous != publication_id {
            if let Some(old) = self.publications.get_mut(&previous) {
                old.books.retain(|i| i != isbn);
            }
        }
        if let Some(publication) = self.publications.get_mut(&publication_id) {
            push_unique(&mut publication.books, isbn.clone());
        }
        Ok(())
    }

    /// Remove a book from a publication, leaving the book unpublished.
    pub fn remove_book_from_publication(
        &mut self,
        isbn: &Isbn,
        publication_id: PublicationId,
    ) -> StoreResult<()> {
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| StoreError::BookNotFound(isbn.clone()))?;
        let publication = self
            .publications
            .get_mut(&publication_id)
            .ok_or(StoreError::PublicationNotFound(publication_id))?;

        if book.publication == publication_id {
            book.publication = PublicationId::UNPUBLISHED;
        }
        publication.books.retain(|i| i != isbn);
        Ok(())
    }

    // ==================== Deletes ====================

    /// Delete a book and every reference to it.
    pub fn delete_book(&mut self, isbn: &Isbn) -> StoreResult<Book> {
        let book = self
            .books
            .remove(isbn)
            .ok_or_else(|| StoreError::BookNotFound(isbn.clone()))?;

        for author in self.authors.values_mut() {
            author.books.retain(|i| i != isbn);
        }
        for publication in self.publications.values_mut() {
            publication.books.retain(|i| i != isbn);
        }

        tracing::debug!(isbn = %isbn, "Book removed from catalog");
        Ok(book)
    }

    /// Delete an author and remove it from every book.
    pub fn delete_author(&mut self, id: AuthorId) -> StoreResult<Author> {
        let author = self
            .authors
            .remove(&id)
            .ok_or(StoreError::AuthorNotFound(id))?;

        for book in self.books.values_mut() {
            book.authors.retain(|a| *a != id);
        }

        tracing::debug!(author_id = %id, "Author removed from catalog");
        Ok(author)
    }

    /// Delete a publication. Books it published become unpublished.
    pub fn delete_publication(&mut self, id: PublicationId) -> StoreResult<Publication> {
        let publication = self
            .publications
            .remove(&id)
            .ok_or(StoreError::PublicationNotFound(id))?;

        for book in self.books.values_mut() {
            if book.publication == id {
                book.publication = PublicationId::UNPUBLISHED;
            }
        }

        tracing::debug!(publication_id = %id, "Publication removed from catalog");
        Ok(publication)
    }

    pub(crate) fn author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.authors.get_mut(&id)
    }

    pub(crate) fn publication_mut(&mut self, id: PublicationId) -> Option<&mut Publication> {
        self.publications.get_mut(&id)
    }

    fn ensure_books_exist(&self, isbns: &[Isbn]) -> StoreResult<()> {
        match isbns.iter().find(|isbn| !self.books.contains_key(*isbn)) {
            Some(missing) => Err(StoreError::InvalidReference {
                kind: "book",
                key: missing.to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if !list.contains(&item) {
        list.push(item);
    }
}

/// Drop repeated elements, keeping the first occurrence of each.
fn dedup_in_order<T: PartialEq + Clone>(list: &mut Vec<T>) {
    let mut seen: Vec<T> = Vec::with_capacity(list.len());
    list.retain(|item| {
        if seen.contains(item) {
            false
        } else {
            seen.push(item.clone());
            true
        }
    });
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn isbn(s: &str) -> Isbn {
        Isbn::new(s)
    }

    /// Two authors, one publication, two books.
    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_author(Author::new(1, "Aradhana")).unwrap();
        catalog.add_author(Author::new(2, "Elon Musk")).unwrap();
        catalog.add_publication(Publication::new(1, "Writex")).unwrap();
        catalog
            .add_book(
                Book::new("12345Book", "Getting started with MERN")
                    .with_language("en")
                    .with_category("tech")
                    .with_category("programming")
                    .with_author(AuthorId(1))
                    .with_author(AuthorId(2))
                    .with_publication(PublicationId(1)),
            )
            .unwrap();
        catalog
            .add_book(
                Book::new("99999Book", "Le Petit Prince")
                    .with_language("fr")
                    .with_category("fiction")
                    .with_author(AuthorId(1)),
            )
            .unwrap();
        catalog
    }

    #[test]
    fn add_book_then_find_by_isbn() {
        let catalog = sample();
        let book = catalog.find_book(&isbn("12345Book")).unwrap();
        assert_eq!(book.title, "Getting started with MERN");
        assert_eq!(book.authors, vec![AuthorId(1), AuthorId(2)]);
    }

    #[test]
    fn add_book_links_authors_and_publication() {
        let catalog = sample();
        assert!(catalog.find_author(AuthorId(1)).unwrap().wrote(&isbn("12345Book")));
        assert!(catalog.find_author(AuthorId(1)).unwrap().wrote(&isbn("99999Book")));
        assert!(catalog.find_author(AuthorId(2)).unwrap().wrote(&isbn("12345Book")));
        assert_eq!(
            catalog.find_publication(PublicationId(1)).unwrap().books,
            vec![isbn("12345Book")]
        );
    }

    #[test]
    fn add_book_rejects_duplicate_isbn() {
        let mut catalog = sample();
        let err = catalog
            .add_book(Book::new("12345Book", "Another"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict { kind: "book", .. }));
        assert_eq!(
            catalog.find_book(&isbn("12345Book")).unwrap().title,
            "Getting started with MERN"
        );
    }

    #[test]
    fn add_book_rejects_unknown_references_without_side_effects() {
        let mut catalog = sample();

        let err = catalog
            .add_book(Book::new("new", "T").with_author(AuthorId(1)).with_author(AuthorId(42)))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidReference { kind: "author", .. }));
        assert!(!catalog.find_author(AuthorId(1)).unwrap().wrote(&isbn("new")));

        let err = catalog
            .add_book(Book::new("new", "T").with_publication(PublicationId(9)))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidReference { kind: "publication", .. }));
        assert!(catalog.find_book(&isbn("new")).is_err());
    }

    #[test]
    fn add_book_collapses_repeated_authors() {
        let mut catalog = sample();
        catalog
            .add_book(Book::new("dup", "T").with_author(AuthorId(2)).with_author(AuthorId(2)))
            .unwrap();
        assert_eq!(catalog.find_book(&isbn("dup")).unwrap().authors, vec![AuthorId(2)]);
    }

    #[test]
    fn add_author_links_listed_books() {
        let mut catalog = sample();
        let mut author = Author::new(3, "Ada");
        author.books.push(isbn("99999Book"));
        catalog.add_author(author).unwrap();

        let book = catalog.find_book(&isbn("99999Book")).unwrap();
        assert_eq!(book.authors, vec![AuthorId(1), AuthorId(3)]);
    }

    #[test]
    fn add_author_rejects_unknown_book() {
        let mut catalog = sample();
        let mut author = Author::new(3, "Ada");
        author.books.push(isbn("missing"));
        let err = catalog.add_author(author).unwrap_err();
        assert!(matches!(err, StoreError::InvalidReference { kind: "book", .. }));
        assert!(catalog.find_author(AuthorId(3)).is_err());
    }

    #[test]
    fn add_publication_moves_books_from_previous_publication() {
        let mut catalog = sample();
        let mut publication = Publication::new(2, "Penguin");
        publication.books.push(isbn("12345Book"));
        catalog.add_publication(publication).unwrap();

        assert_eq!(
            catalog.find_book(&isbn("12345Book")).unwrap().publication,
            PublicationId(2)
        );
        assert!(catalog.find_publication(PublicationId(1)).unwrap().books.is_empty());
    }

    #[test]
    fn add_publication_rejects_reserved_id() {
        let mut catalog = Catalog::new();
        let err = catalog
            .add_publication(Publication::new(0, "Nobody"))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord(_)));
    }

    #[test]
    fn filter_by_category_and_language() {
        let catalog = sample();

        let tech = catalog.find_books_by_category("tech").unwrap();
        assert_eq!(tech.len(), 1);
        assert_eq!(tech[0].isbn, isbn("12345Book"));

        let french = catalog.find_books_by_language("fr").unwrap();
        assert_eq!(french.len(), 1);
        assert_eq!(french[0].isbn, isbn("99999Book"));
    }

    #[test]
    fn filter_without_matches_is_not_found() {
        let catalog = sample();

        let err = catalog.find_books_by_category("poetry").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No book found for the category of poetry");

        let err = catalog.find_books_by_language("de").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn authors_and_publications_by_book() {
        let catalog = sample();

        let authors = catalog.find_authors_by_book(&isbn("12345Book")).unwrap();
        let names: Vec<_> = authors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Aradhana", "Elon Musk"]);

        let publications = catalog.find_publications_by_book(&isbn("12345Book")).unwrap();
        assert_eq!(publications.len(), 1);
        assert_eq!(publications[0].name, "Writex");

        // Unpublished book.
        let err = catalog
            .find_publications_by_book(&isbn("99999Book"))
            .unwrap_err();
        assert!(err.is_not_found());

        // Unknown book.
        let err = catalog.find_authors_by_book(&isbn("nope")).unwrap_err();
        assert!(matches!(err, StoreError::BookNotFound(_)));
    }

    #[test]
    fn update_title_changes_only_the_title() {
        let mut catalog = sample();
        let before = catalog.find_book(&isbn("12345Book")).unwrap().clone();
        let other_before = catalog.find_book(&isbn("99999Book")).unwrap().clone();

        catalog
            .update_book_title(&isbn("12345Book"), "MERN in Depth")
            .unwrap();

        let after = catalog.find_book(&isbn("12345Book")).unwrap();
        assert_eq!(after.title, "MERN in Depth");
        assert_eq!(
            Book {
                title: before.title.clone(),
                ..after.clone()
            },
            before
        );
        assert_eq!(catalog.find_book(&isbn("99999Book")).unwrap(), &other_before);
    }

    #[test]
    fn update_title_of_unknown_book_is_not_found() {
        let mut catalog = sample();
        let err = catalog.update_book_title(&isbn("nope"), "X").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn add_author_to_book_is_bidirectional_and_idempotent() {
        let mut catalog = sample();
        catalog.add_author_to_book(&isbn("99999Book"), AuthorId(2)).unwrap();
        catalog.add_author_to_book(&isbn("99999Book"), AuthorId(2)).unwrap();

        assert_eq!(
            catalog.find_book(&isbn("99999Book")).unwrap().authors,
            vec![AuthorId(1), AuthorId(2)]
        );
        assert_eq!(
            catalog.find_author(AuthorId(2)).unwrap().books,
            vec![isbn("12345Book"), isbn("99999Book")]
        );

        let err = catalog
            .add_author_to_book(&isbn("99999Book"), AuthorId(7))
            .unwrap_err();
        assert!(matches!(err, StoreError::AuthorNotFound(AuthorId(7))));
    }

    #[test]
    fn remove_author_from_book_unlinks_both_sides() {
        let mut catalog = sample();
        catalog
            .remove_author_from_book(&isbn("12345Book"), AuthorId(2))
            .unwrap();

        assert_eq!(
            catalog.find_book(&isbn("12345Book")).unwrap().authors,
            vec![AuthorId(1)]
        );
        assert!(catalog.find_author(AuthorId(2)).unwrap().books.is_empty());
    }

    #[test]
    fn set_book_publication_moves_and_unpublishes() {
        let mut catalog = sample();
        catalog.add_publication(Publication::new(2, "Penguin")).unwrap();

        catalog
            .set_book_publication(&isbn("12345Book"), PublicationId(2))
            .unwrap();
        assert_eq!(
            catalog.find_book(&isbn("12345Book")).unwrap().publication,
            PublicationId(2)
        );
        assert!(catalog.find_publication(PublicationId(1)).unwrap().books.is_empty());
        assert_eq!(
            catalog.find_publication(PublicationId(2)).unwrap().books,
            vec![isbn("12345Book")]
        );

        catalog
            .set_book_publication(&isbn("12345Book"), PublicationId::UNPUBLISHED)
            .unwrap();
        assert!(catalog
            .find_book(&isbn("12345Book"))
            .unwrap()
            .publication
            .is_unpublished());
        assert!(catalog.find_publication(PublicationId(2)).unwrap().books.is_empty());

        let err = catalog
            .set_book_publication(&isbn("12345Book"), PublicationId(5))
            .unwrap_err();
        assert!(matches!(err, StoreError::PublicationNotFound(PublicationId(5))));
    }

    #[test]
    fn remove_book_from_publication_leaves_book_unpublished() {
        let mut catalog = sample();
        catalog
            .remove_book_from_publication(&isbn("12345Book"), PublicationId(1))
            .unwrap();

        assert!(catalog
            .find_book(&isbn("12345Book"))
            .unwrap()
            .publication
            .is_unpublished());
        assert!(catalog.find_publication(PublicationId(1)).unwrap().books.is_empty());
    }

    #[test]
    fn delete_book_cascades() {
        let mut catalog = sample();
        let removed = catalog.delete_book(&isbn("12345Book")).unwrap();
        assert_eq!(removed.isbn, isbn("12345Book"));

        assert!(catalog
            .list_books()
            .iter()
            .all(|b| b.isbn != isbn("12345Book")));
        assert_eq!(
            catalog.find_author(AuthorId(1)).unwrap().books,
            vec![isbn("99999Book")]
        );
        assert!(catalog.find_author(AuthorId(2)).unwrap().books.is_empty());
        assert!(catalog.find_publication(PublicationId(1)).unwrap().books.is_empty());

        let err = catalog.delete_book(&isbn("12345Book")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn delete_author_cascades() {
        let mut catalog = sample();
        catalog.delete_author(AuthorId(1)).unwrap();

        assert_eq!(
            catalog.find_book(&isbn("12345Book")).unwrap().authors,
            vec![AuthorId(2)]
        );
        assert!(catalog.find_book(&isbn("99999Book")).unwrap().authors.is_empty());
        assert_eq!(catalog.list_authors().len(), 1);
    }

    #[test]
    fn delete_publication_unpublishes_its_books() {
        let mut catalog = sample();
        catalog.delete_publication(PublicationId(1)).unwrap();

        assert!(catalog
            .find_book(&isbn("12345Book"))
            .unwrap()
            .publication
            .is_unpublished());
        assert!(catalog.list_publications().is_empty());

        let err = catalog.delete_publication(PublicationId(1)).unwrap_err();
        assert!(matches!(err, StoreError::PublicationNotFound(_)));
    }

    #[test]
    fn listings_are_ordered_by_key() {
        let catalog = sample();
        let isbns: Vec<_> = catalog.list_books().into_iter().map(|b| b.isbn).collect();
        assert_eq!(isbns, vec![isbn("12345Book"), isbn("99999Book")]);
        assert!(!catalog.is_empty());
        assert!(Catalog::new().is_empty());
    }
}
