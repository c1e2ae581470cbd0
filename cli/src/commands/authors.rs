//! Author commands.

use anyhow::Result;
use booky_core::{Author, AuthorId};
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde_json::json;

use super::{endpoint, make_request, output, AuthorsResponse};

/// Arguments for `booky authors`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only the authors of this book
    #[arg(long)]
    pub book: Option<String>,
}

/// Arguments for `booky add-author`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Numeric id of the new author
    pub id: u32,

    /// Display name
    pub name: String,

    /// ISBN of a book the author wrote (repeatable)
    #[arg(long = "book")]
    pub books: Vec<String>,
}

/// Arguments for `booky delete-author`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the author to delete
    pub id: u32,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Execute `booky authors`.
pub async fn list(client: &Client, base_url: &str, human: bool, args: ListArgs) -> Result<()> {
    let url = match &args.book {
        Some(isbn) => endpoint(base_url, &["author", "book", isbn])?,
        None => endpoint(base_url, &["author"])?,
    };

    let response: AuthorsResponse = make_request(client.get(url)).await?;
    output(&response, human)
}

/// Execute `booky add-author`.
pub async fn add(client: &Client, base_url: &str, human: bool, args: AddArgs) -> Result<()> {
    let url = endpoint(base_url, &["author", "add"])?;
    let author = Author {
        id: AuthorId(args.id),
        name: args.name,
        books: args.books.into_iter().map(Into::into).collect(),
    };
    let body = json!({ "newAuthor": author });

    let response: AuthorsResponse = make_request(client.post(url).json(&body)).await?;
    output(&response, human)
}

/// Execute `booky delete-author`.
pub async fn delete(client: &Client, base_url: &str, human: bool, args: DeleteArgs) -> Result<()> {
    if human && !args.yes {
        eprint!(
            "{} Delete author {} and unlink them from their books? [y/N] ",
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
    let url = endpoint(base_url, &["author", "delete", &id])?;
    let response: AuthorsResponse = make_request(client.delete(url)).await?;
    output(&response, human)
}
