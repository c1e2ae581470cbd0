//! Publication commands: list, add, publish/unpublish a book, delete.

use anyhow::Result;
use booky_core::{Publication, PublicationId};
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde_json::json;

use super::{endpoint, make_request, output, BooksAndPublicationsResponse, PublicationsResponse};

/// Arguments for `booky publications`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only the publication of this book
    #[arg(long)]
    pub book: Option<String>,
}

/// Arguments for `booky add-publication`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Numeric id of the new publication (must not be 0)
    pub id: u32,

    /// Display name
    pub name: String,

    /// ISBN of a book it publishes (repeatable)
    #[arg(long = "book")]
    pub books: Vec<String>,
}

/// Arguments for `booky publish`.
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// ISBN of the book
    pub isbn: String,

    /// Target publication id
    pub publication_id: u32,
}

/// Arguments for `booky unpublish`.
#[derive(Args, Debug)]
pub struct UnpublishArgs {
    /// ISBN of the book
    pub isbn: String,

    /// Publication the book currently belongs to
    pub publication_id: u32,
}

/// Arguments for `booky delete-publication`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the publication to delete
    pub id: u32,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Execute `booky publications`.
pub async fn list(client: &Client, base_url: &str, human: bool, args: ListArgs) -> Result<()> {
    let url = match &args.book {
        Some(isbn) => endpoint(base_url, &["publications", "book", isbn])?,
        None => endpoint(base_url, &["publications"])?,
    };

    let response: PublicationsResponse = make_request(client.get(url)).await?;
    output(&response, human)
}

/// Execute `booky add-publication`.
pub async fn add(client: &Client, base_url: &str, human: bool, args: AddArgs) -> Result<()> {
    let url = endpoint(base_url, &["publication", "add"])?;
    let publication = Publication {
        id: PublicationId(args.id),
        name: args.name,
        books: args.books.into_iter().map(Into::into).collect(),
    };
    let body = json!({ "newPublication": publication });

    let response: PublicationsResponse = make_request(client.post(url).json(&body)).await?;
    output(&response, human)
}

/// Execute `booky publish`.
pub async fn publish(
    client: &Client,
    base_url: &str,
    human: bool,
    args: PublishArgs,
) -> Result<()> {
    let url = endpoint(base_url, &["publication", "update", "book", &args.isbn])?;
    let body = json!({ "pubId": args.publication_id });

    let response: BooksAndPublicationsResponse =
        make_request(client.put(url).json(&body)).await?;
    output(&response, human)
}

/// Execute `booky unpublish`.
pub async fn unpublish(
    client: &Client,
    base_url: &str,
    human: bool,
    args: UnpublishArgs,
) -> Result<()> {
    let publication_id = args.publication_id.to_string();
    let url = endpoint(
        base_url,
        &["publication", "delete", "book", &args.isbn, &publication_id],
    )?;

    let response: BooksAndPublicationsResponse = make_request(client.delete(url)).await?;
    output(&response, human)
}

/// Execute `booky delete-publication`.
pub async fn delete(client: &Client, base_url: &str, human: bool, args: DeleteArgs) -> Result<()> {
    if human && !args.yes {
        eprint!(
            "{} Delete publication {}? Its books become unpublished. [y/N] ",
            "Warning:".yellow().bold(),
            args.id
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

    let id = args.id.to_string();
    let url = endpoint(base_url, &["publication", "delete", &id])?;
    let response: PublicationsResponse = make_request(client.delete(url)).await?;
    output(&response, human)
}
