//! Command-line front end: pick a company and history span, run one
//! forecast to completion, and review previously saved predictions.

use clap::{Parser, Subcommand};
use stock_forecast::fetch::YahooFinanceClient;
use stock_forecast::forecast::{TrendForecaster, DEFAULT_HORIZON_DAYS};
use stock_forecast::ledger::PredictionLedger;
use stock_forecast::pipeline::run_forecast;
use stock_forecast::range::{DateRange, HistorySpan};
use stock_forecast::render::{Presenter, TextPresenter};
use stock_forecast::{ForecastError, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Companies offered by default, as exchange-qualified tickers.
const COMPANIES: &[(&str, &str)] = &[
    ("Tata Consultancy Services", "TCS.NS"),
    ("Reliance Industries", "RELIANCE.NS"),
    ("Infosys", "INFY.NS"),
    ("HDFC Bank", "HDFCBANK.NS"),
    ("ICICI Bank", "ICICIBANK.NS"),
    ("State Bank of India", "SBIN.NS"),
    ("Larsen & Toubro", "LT.NS"),
    ("Mahindra & Mahindra", "M&M.NS"),
    ("Bharti Airtel", "BHARTIARTL.NS"),
    ("Hindustan Unilever", "HINDUNILVR.NS"),
    ("Asian Paints", "ASIANPAINT.NS"),
    ("Maruti Suzuki", "MARUTI.NS"),
    ("Wipro", "WIPRO.NS"),
    ("Sun Pharmaceuticals", "SUNPHARMA.NS"),
    ("Tata Motors", "TATAMOTORS.NS"),
];

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path of the prediction ledger file
    #[arg(long, default_value = "predictions.csv")]
    ledger: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch history, fit the trend, and save a forecast
    Forecast {
        /// Company name from the built-in list (see `companies`)
        #[arg(long, conflicts_with = "ticker")]
        company: Option<String>,

        /// Exchange-qualified ticker symbol (e.g. "INFY.NS")
        #[arg(long)]
        ticker: Option<String>,

        /// History span: "1 year", "2 years", or "5 years"
        #[arg(long, default_value = "1 year")]
        span: String,

        /// Days of future prices to extrapolate
        #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
        horizon: usize,
    },

    /// Show previously saved predictions for a ticker
    History {
        /// Exchange-qualified ticker symbol
        #[arg(long)]
        ticker: String,
    },

    /// List the built-in companies and their tickers
    Companies,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        // Errors end this invocation, not the tool
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let ledger = PredictionLedger::new(&cli.ledger);

    match cli.command {
        Commands::Forecast {
            company,
            ticker,
            span,
            horizon,
        } => {
            let ticker = resolve_ticker(company.as_deref(), ticker)?;
            let span: HistorySpan = span.parse()?;
            let forecaster = TrendForecaster::new(horizon)?;
            let source = YahooFinanceClient::new()?;
            let mut presenter = TextPresenter::new(std::io::stdout());

            run_forecast(
                &source,
                &ledger,
                &mut presenter,
                &ticker,
                DateRange::ending_today(span),
                forecaster,
            )?;
        }
        Commands::History { ticker } => {
            let records = ledger.query(&ticker)?;
            let mut presenter = TextPresenter::new(std::io::stdout());
            let heading = format!("Previous predictions for {}:", ticker);
            presenter.show_predictions(&heading, &records)?;
        }
        Commands::Companies => {
            for (name, ticker) in COMPANIES {
                println!("{}: {}", name, ticker);
            }
        }
    }

    Ok(())
}

fn resolve_ticker(company: Option<&str>, ticker: Option<String>) -> Result<String> {
    if let Some(ticker) = ticker {
        return Ok(ticker);
    }

    let company = company.ok_or_else(|| {
        ForecastError::Data("Pass either --company or --ticker".to_string())
    })?;

    COMPANIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(company))
        .map(|(_, ticker)| (*ticker).to_string())
        .ok_or_else(|| ForecastError::Data(format!("Unknown company '{}'", company)))
}
