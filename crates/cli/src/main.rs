//! Craftica CLI - browse the marketplace and manage a session from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Log in and persist the session
//! craftica auth login -e user@example.com -p secret
//!
//! # Who is logged in?
//! craftica auth whoami
//!
//! # Browse stores in Madrid, twelve per page
//! craftica stores list --city Madrid --limit 12
//!
//! # Show one post with its comments and reactions
//! craftica posts show 6650a1f2c9e77c0012ab34cd
//! ```
//!
//! # Commands
//!
//! - `auth` - Log in, log out, inspect the stored session
//! - `stores` - List and show stores
//! - `products` - List and show products
//! - `posts` - List and show posts, with comments and reactions

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "craftica")]
#[command(author, version, about = "Craftica marketplace CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the authenticated session
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Browse stores
    Stores {
        #[command(subcommand)]
        action: StoresAction,
    },
    /// Browse products
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Browse posts
    Posts {
        #[command(subcommand)]
        action: PostsAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Log in and persist the session to disk
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the currently logged-in user
    Whoami,
}

#[derive(Subcommand)]
enum StoresAction {
    /// List stores, optionally filtered by city and country
    List {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Items per page
        #[arg(long)]
        limit: Option<u32>,

        /// Filter by city
        #[arg(long)]
        city: Option<String>,

        /// Filter by country
        #[arg(long)]
        country: Option<String>,
    },
    /// Show one store by id
    Show {
        /// Store id
        id: String,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products, optionally filtered by category and store
    List {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Items per page
        #[arg(long)]
        limit: Option<u32>,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Filter by owning store id
        #[arg(long)]
        store: Option<String>,
    },
    /// Show one product by id
    Show {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum PostsAction {
    /// List posts
    List {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Items per page
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one post, with its comments and reactions
    Show {
        /// Post id
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Login { email, password } => {
                commands::auth::login(&email, &password).await?;
            }
            AuthAction::Logout => commands::auth::logout()?,
            AuthAction::Whoami => commands::auth::whoami()?,
        },
        Commands::Stores { action } => match action {
            StoresAction::List {
                page,
                limit,
                city,
                country,
            } => commands::stores::list(page, limit, city, country).await?,
            StoresAction::Show { id } => commands::stores::show(&id).await?,
        },
        Commands::Products { action } => match action {
            ProductsAction::List {
                page,
                limit,
                category,
                store,
            } => commands::products::list(page, limit, category, store).await?,
            ProductsAction::Show { id } => commands::products::show(&id).await?,
        },
        Commands::Posts { action } => match action {
            PostsAction::List { page, limit } => commands::posts::list(page, limit).await?,
            PostsAction::Show { id } => commands::posts::show(&id).await?,
        },
    }
    Ok(())
}
