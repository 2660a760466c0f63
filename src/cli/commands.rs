use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "collarboard", about = "Equity collar calculator with premium analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Collar form inputs shared by every pricing command.
#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    #[arg(long, default_value = "AAPL")]
    pub ticker: String,
    #[arg(long, default_value = "100")]
    pub shares: u64,
    #[arg(long, default_value = "220")]
    pub entry_price: f64,
    #[arg(long, default_value = "180")]
    pub put_strike: f64,
    #[arg(long, default_value = "250")]
    pub call_strike: f64,
    /// Expiration date (YYYY-MM-DD); defaults to the first listed expiration
    #[arg(long)]
    pub expiration: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List option expirations for a ticker
    Expirations { ticker: String },
    /// Price a collar and show KPIs, table and payoff chart
    Calculate {
        #[command(flatten)]
        form: FormArgs,
        /// Also load the premium panel
        #[arg(long)]
        premium: bool,
        /// Premium API key (otherwise the saved key or COLLAR_PREMIUM_KEY)
        #[arg(long)]
        key: Option<String>,
        /// Print raw JSON instead of the dashboard
        #[arg(long)]
        json: bool,
    },
    /// Load greeks, AnchorLock score and assumptions
    Premium {
        #[command(flatten)]
        form: FormArgs,
        #[arg(long)]
        key: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Dump every known premium response location
    PremiumDebug {
        #[command(flatten)]
        form: FormArgs,
        #[arg(long)]
        key: Option<String>,
    },
}
