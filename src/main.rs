use analytics::SalesAnalytics;
use anyhow::Context;
use charts::CardRenderer;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use configuration::Config;
use core_types::{DateRange, QuickFilter};
use filters::FilterState;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Vantage dashboard application.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = configuration::load_config().context("Failed to load configuration")?;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Dashboard(args) => handle_dashboard(args, config),
        Commands::Resolve(args) => handle_resolve(args, config),
        Commands::Filters => {
            handle_filters();
            Ok(())
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A sales-analytics dashboard with quick date-range filters.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dashboard cards for a quick-filter period.
    Dashboard(DashboardArgs),
    /// Resolve one quick filter to its concrete date range.
    Resolve(ResolveArgs),
    /// List the available quick filters.
    Filters,
}

#[derive(Parser)]
struct DashboardArgs {
    /// The quick-filter key (e.g. "thisQuarter"). Defaults to the
    /// configured filter; unknown keys fall back to a single-day range.
    #[arg(long)]
    filter: Option<String>,

    /// The reference "today" date (format: YYYY-MM-DD). Defaults to the
    /// local calendar date.
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Parser)]
struct ResolveArgs {
    /// The quick-filter key to resolve (e.g. "lastQuarter").
    #[arg(long)]
    filter: String,

    /// The reference "today" date (format: YYYY-MM-DD). Defaults to the
    /// local calendar date.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print the resolved range as JSON instead of text.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Renders the dashboard: resolves the filter, prints the range header, and
/// draws each enabled card as a table.
fn handle_dashboard(args: DashboardArgs, config: Config) -> anyhow::Result<()> {
    let today = reference_date(args.today);
    let mut state = FilterState::new();
    state.set_filter_observer(|filter| tracing::info!(filter = filter.key(), "quick filter applied"));

    // Unknown keys degrade to a single-day range instead of failing.
    match args.filter.as_deref() {
        Some(key) => match key.parse::<QuickFilter>() {
            Ok(filter) => {
                state.apply_quick_filter(filter, today);
            }
            Err(_) => {
                tracing::warn!(key, "unknown quick filter key, defaulting to today");
                state.select_range(filters::resolve_key(key, today));
            }
        },
        None => {
            state.apply_quick_filter(config.dashboard.default_filter, today);
        }
    }

    println!("{}", config.dashboard.title);
    println!(
        "Selected Range: {}\n",
        filters::range_label_with(&state.range(), &config.display.date_format)
    );

    let engine = SalesAnalytics::new();
    let renderer = CardRenderer::new(config.display.currency_symbol);
    let monthly = datasets::monthly_sales();

    if config.cards.metrics {
        let summary = engine.summarize(&datasets::region_sales(), &datasets::product_sales())?;
        let growth = engine.month_over_month_growth(&monthly);
        println!("{}\n", renderer.metrics_table(&summary, growth));
    }
    if config.cards.monthly {
        let attainment = engine.target_attainment(&monthly)?;
        println!("{}\n", renderer.monthly_table(&attainment));
    }
    if config.cards.regions {
        let slices = charts::region_distribution(&datasets::region_sales())?;
        println!("{}\n", renderer.region_table(&slices));
    }
    if config.cards.trends {
        let lines = charts::product_trend_lines(&datasets::product_trends())?;
        println!("{}\n", renderer.trend_table(&lines));
    }

    Ok(())
}

/// Resolves a single filter key and prints the range and its label.
fn handle_resolve(args: ResolveArgs, config: Config) -> anyhow::Result<()> {
    let today = reference_date(args.today);
    let range = filters::resolve_key(&args.filter, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&range)?);
    } else {
        print!("{}", resolve_output(&range, &config.display.date_format));
    }

    Ok(())
}

/// Text output for the `resolve` subcommand: the concrete bounds plus the
/// display label.
fn resolve_output(range: &DateRange, date_format: &str) -> String {
    let bound = |b: Option<NaiveDate>| b.map_or_else(|| "-".to_string(), |d| d.to_string());
    format!(
        "From:  {}\nTo:    {}\nLabel: {}\n",
        bound(range.from),
        bound(range.to),
        filters::range_label_with(range, date_format)
    )
}

/// Prints the quick filters in dropdown order, key and label.
fn handle_filters() {
    for filter in QuickFilter::ALL {
        println!("{:<12} {}", filter.key(), filter);
    }
}

fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}
