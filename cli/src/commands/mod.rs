//! Command implementations and shared HTTP/output helpers.

pub mod authors;
pub mod books;
pub mod publications;

use anyhow::Result;
use booky_core::{Author, Book, Publication};
use colored::Colorize;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Errors reported by the server or while talking to it.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The server answered with an error status.
    #[error("{message} (HTTP {status})")]
    Api { status: StatusCode, message: String },

    /// The server answered `200 OK` with an `{"error": ...}` body, which is
    /// how it reports unknown keys and empty filters.
    #[error("{0}")]
    NotFound(String),

    /// The base URL cannot carry path segments.
    #[error("invalid server URL: {0}")]
    InvalidUrl(String),
}

/// Output that can be rendered for humans as well as JSON.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Build the shared HTTP client.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(concat!("booky-cli/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Join `segments` onto `base`, percent-encoding each one.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| CliError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send a request and decode the JSON body, turning `{"error": ...}`
/// responses into [`CliError`].
pub async fn make_request<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body: serde_json::Value = response.json().await?;
        return decode_body(body);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    Err(CliError::Api { status, message }.into())
}

/// Decode a successful response body, which may still carry an error.
fn decode_body<T: DeserializeOwned>(body: serde_json::Value) -> Result<T> {
    if let Some(message) = body.get("error").and_then(|e| e.as_str()) {
        return Err(CliError::NotFound(message.to_string()).into());
    }
    Ok(serde_json::from_value(body)?)
}

/// Print `value` as pretty JSON, or via [`HumanReadable`] when `human` is set.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Error body returned by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

// ============================================================================
// Response types shared by several commands
// ============================================================================

#[derive(Debug, Deserialize, Serialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AuthorsResponse {
    pub authors: Vec<Author>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PublicationsResponse {
    pub publications: Vec<Publication>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BooksAndAuthorsResponse {
    pub books: Vec<Book>,
    pub authors: Vec<Author>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BooksAndPublicationsResponse {
    pub books: Vec<Book>,
    pub publications: Vec<Publication>,
}

pub(crate) fn print_book(book: &Book) {
    println!("  {} {}", book.isbn.to_string().yellow(), book.title.bold());
    if !book.language.is_empty() {
        println!("    {} {}", "Language:".cyan(), book.language);
    }
    if !book.pub_date.is_empty() {
        println!("    {} {}", "Published:".cyan(), book.pub_date);
    }
    if book.num_page > 0 {
        println!("    {} {}", "Pages:".cyan(), book.num_page);
    }
    if !book.authors.is_empty() {
        let ids: Vec<String> = book.authors.iter().map(ToString::to_string).collect();
        println!("    {} {}", "Authors:".cyan(), ids.join(", "));
    }
    if book.publication.is_unpublished() {
        println!("    {} {}", "Publication:".cyan(), "(unpublished)".dimmed());
    } else {
        println!("    {} {}", "Publication:".cyan(), book.publication);
    }
    if !book.categories.is_empty() {
        println!("    {} {}", "Categories:".cyan(), book.categories.join(", "));
    }
}

fn print_isbn_list(label: &str, isbns: &[booky_core::Isbn]) {
    if isbns.is_empty() {
        println!("    {} {}", label.cyan(), "(none)".dimmed());
    } else {
        let list: Vec<&str> = isbns.iter().map(|i| i.as_str()).collect();
        println!("    {} {}", label.cyan(), list.join(", "));
    }
}

fn print_books(books: &[Book]) {
    println!("{}", "Books".green().bold());
    println!("{}", "=".repeat(60));
    if books.is_empty() {
        println!("  {}", "(No books)".dimmed());
    }
    for book in books {
        print_book(book);
        println!();
    }
    println!("  {} {}", "Total:".cyan(), books.len());
}

fn print_authors(authors: &[Author]) {
    println!("{}", "Authors".green().bold());
    println!("{}", "=".repeat(60));
    if authors.is_empty() {
        println!("  {}", "(No authors)".dimmed());
    }
    for author in authors {
        println!("  {} {}", author.id.to_string().yellow(), author.name.bold());
        print_isbn_list("Books:", &author.books);
    }
}

fn print_publications(publications: &[Publication]) {
    println!("{}", "Publications".green().bold());
    println!("{}", "=".repeat(60));
    if publications.is_empty() {
        println!("  {}", "(No publications)".dimmed());
    }
    for publication in publications {
        println!(
            "  {} {}",
            publication.id.to_string().yellow(),
            publication.name.bold()
        );
        print_isbn_list("Books:", &publication.books);
    }
}

impl HumanReadable for BooksResponse {
    fn print_human(&self) {
        print_books(&self.books);
    }
}

impl HumanReadable for AuthorsResponse {
    fn print_human(&self) {
        print_authors(&self.authors);
    }
}

impl HumanReadable for PublicationsResponse {
    fn print_human(&self) {
        print_publications(&self.publications);
    }
}

impl HumanReadable for BooksAndAuthorsResponse {
    fn print_human(&self) {
        print_books(&self.books);
        println!();
        print_authors(&self.authors);
    }
}

impl HumanReadable for BooksAndPublicationsResponse {
    fn print_human(&self) {
        print_books(&self.books);
        println!();
        print_publications(&self.publications);
    }
}
