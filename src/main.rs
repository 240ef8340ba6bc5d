//! Arachne - fuzzable-URL discovery crawler CLI

use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;

use arachne::config;
use arachne::crawler::Crawler;
use arachne::models::{CrawlConfig, CrawlResult};
use arachne::report;

/// Arachne - discovers parameterized URLs and emails on a single host
#[derive(Parser)]
#[command(name = "arachne", version, about, long_about = None)]
struct Cli {
    /// Target host to crawl (bare hostname, no scheme)
    host: String,

    /// Maximum crawl depth
    #[arg(short, long)]
    depth: Option<u32>,

    /// Number of concurrent fetch tasks
    #[arg(long)]
    threads: Option<usize>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Custom User-Agent header value
    #[arg(long)]
    user_agent: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write results as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn print_banner() {
    let banner = r#"
    ╔═══════════════════════════════════════╗
    ║  ARACHNE v0.1.0                       ║
    ║  Fuzzable-URL Discovery Crawler       ║
    ╚═══════════════════════════════════════╝
    "#;
    println!("{}", banner.cyan());
}

fn print_summary(result: &CrawlResult) {
    println!("\n{}", "  Crawl Summary".bold());
    println!("  {}", "─".repeat(35));

    let mut builder = Builder::default();
    builder.push_record(["Discovered", "Count"]);
    builder.push_record([
        "Fuzzable URLs".to_string(),
        result.fuzzable_urls.len().to_string(),
    ]);
    builder.push_record(["Emails".to_string(), result.emails.len().to_string()]);
    builder.push_record(["Requests".to_string(), result.total_requests.to_string()]);

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{table}");

    if !result.fuzzable_urls.is_empty() {
        println!("\n  {}", "Fuzzable URLs:".bold());
        for url in &result.fuzzable_urls {
            println!("    {}", url.cyan());
        }
    }

    if !result.emails.is_empty() {
        println!("\n  {}", "Emails:".bold());
        for email in &result.emails {
            println!("    {}", email.yellow());
        }
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "arachne=debug"
    } else {
        "arachne=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    print_banner();

    let mut crawl_config = if let Some(ref path) = cli.config {
        config::load_config(path)?
    } else {
        let default_path = Path::new("config/default.toml");
        if default_path.exists() {
            config::load_config(default_path)?
        } else {
            CrawlConfig::default()
        }
    };

    config::merge_cli_args(
        &mut crawl_config,
        cli.host,
        cli.depth,
        cli.threads,
        cli.timeout,
        cli.user_agent,
    );

    println!("  {} {}", "Target:".bold(), crawl_config.target.green());
    println!(
        "  {} {}",
        "Depth:".bold(),
        crawl_config.max_depth.to_string().cyan()
    );
    println!(
        "  {} {}\n",
        "Threads:".bold(),
        crawl_config.threads.to_string().cyan()
    );

    let crawler = Crawler::new(&crawl_config)?;
    let result = crawler.run().await;

    print_summary(&result);

    if let Some(ref output) = cli.output {
        report::json::export(&result, output)?;
        println!(
            "\n  {} {}",
            "Report saved to:".bold(),
            output.display().to_string().green()
        );
    }

    Ok(())
}
