use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use catalog_admin::application::{
    CategoryListRequest, CategoryOutput, DeleteCategory, GetCategoryById, ListCategories,
    SaveCategory,
};
use catalog_admin::config::CatalogConfig;
use catalog_admin::domain::DomainError;
use catalog_admin::infrastructure::models::CategoryDto;
use catalog_admin::infrastructure::persistence::SqliteCategoryGateway;

#[derive(Parser, Debug)]
#[command(name = "catalog-admin", about = "Administer catalog categories")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create or replace a category from its JSON representation
    Save { json: String },
    /// Print one category
    Get { id: String },
    /// Delete a category; unknown ids are ignored
    Delete { id: String },
    /// Search categories page by page
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        direction: Option<String>,
    },
}

fn main() -> Result<()> {
    let config = CatalogConfig::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    let gateway = SqliteCategoryGateway::open(&config).with_context(|| {
        format!("Failed to open category store at {}", config.database_path)
    })?;

    match cli.command {
        Command::Save { json } => {
            let dto: CategoryDto =
                serde_json::from_str(&json).context("Category JSON is malformed")?;
            let category = dto.to_category().map_err(report)?;
            let saved = SaveCategory::new(&gateway)
                .execute(Some(category))
                .map_err(report)?;
            print_json(&CategoryOutput::from(&saved))?;
        }
        Command::Get { id } => {
            match GetCategoryById::new(&gateway).execute(&id).map_err(report)? {
                Some(category) => print_json(&category)?,
                None => warn!("Category {} not found", id),
            }
        }
        Command::Delete { id } => {
            DeleteCategory::new(&gateway)
                .execute(Some(&id))
                .map_err(report)?;
        }
        Command::List {
            search,
            page,
            per_page,
            sort,
            direction,
        } => {
            let request = CategoryListRequest {
                search,
                page,
                per_page,
                sort,
                direction,
            };
            let query = request.into_search_query().map_err(report)?;
            let result = ListCategories::new(&gateway)
                .execute(&query)
                .map_err(report)?;
            print_json(&result)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print validation errors as a structured list before giving up
fn report(error: DomainError) -> anyhow::Error {
    if error.is_validation() {
        for e in error.errors() {
            warn!("{}", e);
        }
        match serde_json::to_string_pretty(&serde_json::json!({
            "message": error.to_string(),
            "errors": error.errors(),
        })) {
            Ok(body) => eprintln!("{body}"),
            Err(e) => warn!("Could not render validation errors: {}", e),
        }
    }
    anyhow::Error::new(error)
}
