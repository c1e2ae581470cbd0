//! Command-line client for the booky catalog service.
//!
//! Subcommands map onto the server's HTTP routes:
//! - books, book: browse books by category, language or ISBN
//! - authors, publications: browse the other collections
//! - add-book, add-author, add-publication: create records
//! - retitle, link-author, unlink-author, publish, unpublish: edit links
//! - delete-book, delete-author, delete-publication: remove records
//!
//! Configuration via environment:
//! - BOOKY_URL: Base URL of the catalog server (default: http://localhost:3000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{authors, books, publications};

/// Booky catalog CLI
///
/// Manage books, authors and publications from the command line. Prints
/// JSON by default, or formatted text with --human.
#[derive(Parser)]
#[command(name = "booky")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Catalog server URL
    #[arg(
        long,
        env = "BOOKY_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books, optionally filtered by category or language
    Books(books::ListArgs),

    /// Show one book by ISBN
    Book(books::GetArgs),

    /// List authors, optionally only those of one book
    Authors(authors::ListArgs),

    /// List publications, optionally only the one of a book
    Publications(publications::ListArgs),

    /// Add a book
    AddBook(books::AddArgs),

    /// Add an author
    AddAuthor(authors::AddArgs),

    /// Add a publication
    AddPublication(publications::AddArgs),

    /// Change a book's title
    Retitle(books::RetitleArgs),

    /// Link an author to a book
    LinkAuthor(books::AuthorLinkArgs),

    /// Unlink an author from a book
    UnlinkAuthor(books::AuthorLinkArgs),

    /// Move a book to a publication
    Publish(publications::PublishArgs),

    /// Remove a book from its publication
    Unpublish(publications::UnpublishArgs),

    /// Delete a book
    DeleteBook(books::DeleteArgs),

    /// Delete an author
    DeleteAuthor(authors::DeleteArgs),

    /// Delete a publication
    DeletePublication(publications::DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let (url, human) = (cli.url.as_str(), cli.human);
    let result = match cli.command {
        Commands::Books(args) => books::list(&client, url, human, args).await,
        Commands::Book(args) => books::get(&client, url, human, args).await,
        Commands::Authors(args) => authors::list(&client, url, human, args).await,
        Commands::Publications(args) => publications::list(&client, url, human, args).await,
        Commands::AddBook(args) => books::add(&client, url, human, args).await,
        Commands::AddAuthor(args) => authors::add(&client, url, human, args).await,
        Commands::AddPublication(args) => publications::add(&client, url, human, args).await,
        Commands::Retitle(args) => books::retitle(&client, url, human, args).await,
        Commands::LinkAuthor(args) => books::link_author(&client, url, human, args).await,
        Commands::UnlinkAuthor(args) => books::unlink_author(&client, url, human, args).await,
        Commands::Publish(args) => publications::publish(&client, url, human, args).await,
        Commands::Unpublish(args) => publications::unpublish(&client, url, human, args).await,
        Commands::DeleteBook(args) => books::delete(&client, url, human, args).await,
        Commands::DeleteAuthor(args) => authors::delete(&client, url, human, args).await,
        Commands::DeletePublication(args) => {
            publications::delete(&client, url, human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
