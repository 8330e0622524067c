use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use bookdex_core::CatalogueRecord;
use bookdex_scraper::CatalogueClient;
use bookdex_table::{export_csv, filter_by_name, sort_records, SortKey, SortOrder};

#[derive(Debug, Parser)]
#[command(name = "bookdex")]
#[command(about = "Catalogue crawler with tabular filter, sort, and export")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Crawl the whole catalogue and print or export the records
    Crawl {
        /// Keep only records whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Sort records by this field
        #[arg(long, value_enum)]
        sort_by: Option<SortField>,

        /// Sort in descending order
        #[arg(long, requires = "sort_by")]
        descending: bool,

        /// Write semicolon-separated CSV here instead of printing a table
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortField {
    Name,
    Rating,
    Price,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Name => SortKey::Name,
            SortField::Rating => SortKey::Rating,
            SortField::Price => SortKey::Price,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Crawl {
            search,
            sort_by,
            descending,
            output,
        } => {
            let config = bookdex_core::load_app_config()?;
            let client = CatalogueClient::new(
                &config.base_url,
                config.request_timeout_secs,
                &config.user_agent,
            )?;

            tracing::info!(base_url = %config.base_url, "starting catalogue crawl");
            let records =
                bookdex_scraper::crawl_catalogue(client, config.inter_request_delay_ms).await?;
            tracing::info!(records = records.len(), "crawl finished");

            let mut records = match search {
                Some(query) => filter_by_name(records, &query),
                None => records,
            };

            if let Some(field) = sort_by {
                let order = if descending {
                    SortOrder::Descending
                } else {
                    SortOrder::Ascending
                };
                sort_records(&mut records, field.into(), order);
            }

            match output {
                Some(path) => {
                    export_csv(&path, &records)?;
                    println!("Wrote {} records to {}", records.len(), path.display());
                }
                None => print_table(&records),
            }

            Ok(())
        }
    }
}

fn print_table(records: &[CatalogueRecord]) {
    if records.is_empty() {
        println!("No records.");
        return;
    }

    println!(
        "{:>4} | {:<40} | {:<6} | {:>9} | {:<24}",
        "#", "Name", "Rating", "Price", "Availability"
    );
    println!("{}", "-".repeat(95));

    for (i, record) in records.iter().enumerate() {
        println!(
            "{:>4} | {:<40} | {:<6} | {:>9} | {:<24}",
            i + 1,
            truncate(&record.name, 40),
            record.rating.as_str(),
            record.price,
            truncate(&record.detail.availability, 24),
        );
    }

    println!("\n{} records", records.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{truncated}...")
    }
}
