//! Book commands: list, show, add, retitle, link/unlink authors, delete.

use anyhow::Result;
use booky_core::{AuthorId, Book, PublicationId};
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{
    endpoint, make_request, output, print_book, BooksAndAuthorsResponse, BooksResponse,
    HumanReadable,
};

/// Arguments for `booky books`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only books tagged with this category
    #[arg(long, conflicts_with = "language")]
    pub category: Option<String>,

    /// Only books written in this language
    #[arg(long)]
    pub language: Option<String>,
}

/// Arguments for `booky book`.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// ISBN of the book
    pub isbn: String,
}

/// Arguments for `booky add-book`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// ISBN of the new book
    pub isbn: String,

    /// Title of the new book
    pub title: String,

    /// Publication date
    #[arg(long, default_value = "")]
    pub pub_date: String,

    /// Language the book is written in
    #[arg(long, default_value = "")]
    pub language: String,

    /// Number of pages
    #[arg(long, default_value_t = 0)]
    pub pages: u32,

    /// Author id (repeatable); the author must already exist
    #[arg(long = "author")]
    pub authors: Vec<u32>,

    /// Publication id; 0 for unpublished
    #[arg(long, default_value_t = 0)]
    pub publication: u32,

    /// Category tag (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,
}

impl AddArgs {
    fn into_book(self) -> Book {
        Book {
            isbn: self.isbn.into(),
            title: self.title,
            pub_date: self.pub_date,
            language: self.language,
            num_page: self.pages,
            authors: self.authors.into_iter().map(AuthorId).collect(),
            publication: PublicationId(self.publication),
            categories: self.categories,
        }
    }
}

/// Arguments for `booky retitle`.
#[derive(Args, Debug)]
pub struct RetitleArgs {
    /// ISBN of the book
    pub isbn: String,

    /// New title
    pub title: String,
}

/// Arguments for `booky link-author` and `booky unlink-author`.
#[derive(Args, Debug)]
pub struct AuthorLinkArgs {
    /// ISBN of the book
    pub isbn: String,

    /// Author id
    pub author_id: u32,
}

/// Arguments for `booky delete-book`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// ISBN of the book to delete
    pub isbn: String,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Response for a single book lookup.
#[derive(Debug, Deserialize, Serialize)]
pub struct BookResponse {
    pub book: Book,
}

impl HumanReadable for BookResponse {
    fn print_human(&self) {
        print_book(&self.book);
    }
}

/// Execute `booky books`.
pub async fn list(client: &Client, base_url: &str, human: bool, args: ListArgs) -> Result<()> {
    let url = match (&args.category, &args.language) {
        (Some(category), _) => endpoint(base_url, &["c", category])?,
        (None, Some(language)) => endpoint(base_url, &["l", language])?,
        (None, None) => endpoint(base_url, &[])?,
    };

    let response: BooksResponse = make_request(client.get(url)).await?;
    output(&response, human)
}

/// Execute `booky book`.
pub async fn get(client: &Client, base_url: &str, human: bool, args: GetArgs) -> Result<()> {
    let url = endpoint(base_url, &["is", &args.isbn])?;
    let response: BookResponse = make_request(client.get(url)).await?;
    output(&response, human)
}

/// Execute `booky add-book`.
pub async fn add(client: &Client, base_url: &str, human: bool, args: AddArgs) -> Result<()> {
    let url = endpoint(base_url, &["book", "add"])?;
    let body = json!({ "newBook": args.into_book() });

    let response: BooksResponse = make_request(client.post(url).json(&body)).await?;
    output(&response, human)
}

/// Execute `booky retitle`.
pub async fn retitle(
    client: &Client,
    base_url: &str,
    human: bool,
    args: RetitleArgs,
) -> Result<()> {
    let url = endpoint(base_url, &["book", "update", "title", &args.isbn])?;
    let body = json!({ "newBookTitle": args.title });

    let response: BooksResponse = make_request(client.put(url).json(&body)).await?;
    output(&response, human)
}

/// Execute `booky link-author`.
pub async fn link_author(
    client: &Client,
    base_url: &str,
    human: bool,
    args: AuthorLinkArgs,
) -> Result<()> {
    let author_id = args.author_id.to_string();
    let url = endpoint(base_url, &["book", "update", "author", &args.isbn, &author_id])?;

    let response: BooksAndAuthorsResponse = make_request(client.put(url)).await?;
    output(&response, human)
}

/// Execute `booky unlink-author`.
pub async fn unlink_author(
    client: &Client,
    base_url: &str,
    human: bool,
    args: AuthorLinkArgs,
) -> Result<()> {
    let author_id = args.author_id.to_string();
    let url = endpoint(base_url, &["book", "delete", "author", &args.isbn, &author_id])?;

    let response: BooksAndAuthorsResponse = make_request(client.delete(url)).await?;
    output(&response, human)
}

/// Execute `booky delete-book`.
pub async fn delete(client: &Client, base_url: &str, human: bool, args: DeleteArgs) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete book {}? [y/N] ",
            "Warning:".yellow().bold(),
            args.isbn
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let url = endpoint(base_url, &["book", "delete", &args.isbn])?;
    let response: BooksResponse = make_request(client.delete(url)).await?;
    output(&response, human)
}
