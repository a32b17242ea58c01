use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use arxiv_stats::charts::{Category, ChartKind};
use arxiv_stats::config::Config;
use arxiv_stats::loader::{ChartLoader, LoadOutcome, LoadState};
use arxiv_stats::navigation::{parse_timezone, DateNavigator};
use arxiv_stats::render::RenderContext;
use arxiv_stats::source::HttpDataSource;

#[derive(Parser)]
#[command(name = "arxiv-stats-cli")]
#[command(about = "Load arXiv usage charts from the statistics API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available charts
    List,
    /// Load one chart and print its data
    Chart {
        /// Chart identifier (see `list`)
        id: String,
        /// Day to show for the hourly chart (YYYY-MM-DD)
        #[arg(long, conflicts_with = "days_ago")]
        date: Option<String>,
        /// Show the hourly chart for N days before today
        #[arg(long)]
        days_ago: Option<u32>,
        /// Timezone for the hourly chart (defaults to DEFAULT_TIMEZONE)
        #[arg(long)]
        timezone: Option<String>,
        /// Print the Plotly spec as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for category in Category::ALL {
                println!("{}", category.title());
                let charts = category.charts();
                if charts.is_empty() {
                    println!("  (published at {})", category.href());
                }
                for chart in charts {
                    println!("  {:<24} {}", chart.id(), chart.description());
                }
            }
        }
        Commands::Chart {
            id,
            date,
            days_ago,
            timezone,
            json,
        } => {
            let kind = ChartKind::from_id(&id)
                .with_context(|| format!("unknown chart '{id}', run `list` to see the charts"))?;

            let config = Config::from_env()?;
            let tz = match timezone {
                Some(name) => parse_timezone(&name)?,
                None => config.display.timezone()?,
            };
            let navigator = DateNavigator::for_timezone(tz);

            let date = match (date, days_ago) {
                (Some(input), _) => Some(navigator.parse_input(&input)?),
                (None, Some(days)) => {
                    Some(navigator.shift(navigator.today(), -i64::from(days)))
                }
                (None, None) => None,
            };
            if date.is_some() && !kind.is_date_navigable() {
                bail!("chart '{}' does not take a date", kind.id());
            }

            let source = Arc::new(HttpDataSource::new(&config.upstream)?);
            let loader = ChartLoader::new(source);

            match loader.load(kind.query(tz.name(), date)).await {
                LoadOutcome::Committed(LoadState::Loaded(records)) => {
                    if json {
                        let ctx = RenderContext::new(tz.name(), date);
                        let spec = kind.renderer().render(&records, &ctx);
                        println!("{}", serde_json::to_string_pretty(&spec)?);
                    } else {
                        println!("{}", kind.heading());
                        for record in &records {
                            println!("  {:<32} {:>12}", record.label, record.total);
                        }
                    }
                }
                LoadOutcome::Committed(LoadState::Empty) => println!("{}", kind.empty_message()),
                LoadOutcome::Committed(LoadState::Failed(message)) => bail!(message),
                LoadOutcome::Committed(other) => bail!("load ended in state {other:?}"),
                LoadOutcome::Superseded => bail!("load was superseded"),
            }
        }
    }

    Ok(())
}
