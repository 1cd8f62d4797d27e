//! CLI binary for querying ADS.
//!
//! Usage: pads -a "doe, j" -b apj -y 2000-2001 --print_row

use clap::{ArgGroup, Parser};
use pads::format::{format_abstract, format_row, url_abs, url_pdf, Formatter};
use pads::{AdsClient, Backend, OutputFlags, QueryParams, Sandbox};

#[derive(Parser)]
#[command(name = "pads", about = "Query the ADS database.", version)]
#[command(group = ArgGroup::new("output").required(true).multiple(true))]
struct Cli {
    /// Author search string, e.g. "doe, john"
    #[arg(short, long, help_heading = "Query arguments")]
    author: Option<String>,

    /// Bibstem search string, e.g. apj
    #[arg(short, long, help_heading = "Query arguments")]
    bibstem: Option<String>,

    /// ADS bibcode search string
    #[arg(short = 'c', long, help_heading = "Query arguments")]
    bibcode: Option<String>,

    /// Full text search, e.g. gravity
    #[arg(short, long, help_heading = "Query arguments")]
    full: Option<String>,

    /// Number of rows to show
    #[arg(short = 'n', long, default_value_t = 10, help_heading = "Query arguments")]
    rows: u32,

    /// Sort string, e.g. "citation_count desc"
    #[arg(
        short,
        long,
        default_value = "citation_count desc",
        help_heading = "Query arguments"
    )]
    sort: String,

    /// Year search string, e.g. 2000-2001
    #[arg(short, long, help_heading = "Query arguments")]
    year: Option<String>,

    /// Print a formatted row (bibcode, first author, year, title) per result
    #[arg(long = "print_row", group = "output", help_heading = "Output arguments")]
    print_row: bool,

    /// Print the full abstract
    #[arg(long = "print_abstract", group = "output", help_heading = "Output arguments")]
    print_abstract: bool,

    /// Print the BibTeX entry
    #[arg(long = "print_bibtex", group = "output", help_heading = "Output arguments")]
    print_bibtex: bool,

    /// Print the ADS URL for the abstract
    #[arg(long = "print_url_abs", group = "output", help_heading = "Output arguments")]
    print_url_abs: bool,

    /// Print the ADS link-gateway URL for the downloadables
    #[arg(long = "print_url_pdf", group = "output", help_heading = "Output arguments")]
    print_url_pdf: bool,

    /// Use the offline sandbox backend (no network, no token)
    #[arg(long)]
    debug: bool,

    /// API token (overrides ADS_API_TOKEN / ADS_DEV_KEY env var)
    #[arg(long)]
    token: Option<String>,
}

impl Cli {
    fn query_params(&self) -> QueryParams {
        QueryParams {
            author: self.author.clone(),
            bibstem: self.bibstem.clone(),
            bibcode: self.bibcode.clone(),
            full: self.full.clone(),
            year: self.year.clone(),
            rows: self.rows,
            sort: self.sort.clone(),
        }
    }

    fn output_flags(&self) -> OutputFlags {
        OutputFlags {
            row: self.print_row,
            abstract_text: self.print_abstract,
            bibtex: self.print_bibtex,
            url_abs: self.print_url_abs,
            url_pdf: self.print_url_pdf,
        }
    }
}

fn make_client(token: Option<String>) -> pads::error::Result<AdsClient> {
    match token {
        Some(t) => Ok(AdsClient::new(t)),
        None => AdsClient::from_env(),
    }
}

async fn run() -> pads::error::Result<()> {
    let cli = Cli::parse();
    let params = cli.query_params();
    let flags = cli.output_flags();

    if params.is_empty() {
        eprintln!("No search parameters provided; see --help for the query flags.");
        return Ok(());
    }

    let backend = if cli.debug {
        Backend::Sandbox(Sandbox::new())
    } else {
        Backend::Live(make_client(cli.token)?)
    };

    eprintln!("Query: {}", params.query_string());
    let results = backend.search(&params).await?;

    for paper in &results.papers {
        for formatter in flags.enabled() {
            match formatter {
                Formatter::Row => println!("{}", format_row(paper)),
                Formatter::Abstract => println!("{}", format_abstract(paper)),
                Formatter::Bibtex => {
                    // Records without a bibcode cannot be exported; skip.
                    if let Some(bibcode) = paper.bibcode.as_deref() {
                        println!("{}", backend.export_bibtex(bibcode).await?);
                    }
                }
                Formatter::UrlAbs => {
                    if let Some(url) = url_abs(paper) {
                        println!("{}", url);
                    }
                }
                Formatter::UrlPdf => {
                    if let Some(url) = url_pdf(paper) {
                        println!("{}", url);
                    }
                }
            }
        }
    }

    let snapshot = backend.rate_limit();
    eprintln!(
        "Remaining (limit): {:>4} ({:>4})",
        snapshot.remaining.as_deref().unwrap_or("?"),
        snapshot.limit.as_deref().unwrap_or("?")
    );
    eprintln!("Reset (UTC): {}", snapshot.reset_time_string());

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
