use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `stocktake=debug`.
pub const LOG_ENV: &str = "STOCKTAKE_LOG";

/// Returns the version string, with git hash and commit date when built from a checkout.
/// Format: "0.3.1" or "0.3.1@abc1234 2024-01-15"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stocktake", bin_name = "stocktake", version = get_version())]
#[command(about = "Single-user inventory manager backed by SQLite", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ./stocktake.json)
    #[arg(long, global = true, env = "STOCKTAKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite database file
    #[arg(long, global = true, env = "STOCKTAKE_DB")]
    pub db: Option<PathBuf>,

    /// CSV file loaded at startup
    #[arg(long = "seed-file", global = true)]
    pub seed_file: Option<PathBuf>,

    /// Where the backup action writes
    #[arg(long = "backup-file", global = true)]
    pub backup_file: Option<PathBuf>,

    /// Skip loading the seed file at startup
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive menu (the default)
    #[command(alias = "m")]
    Menu,

    /// Load the seed file and report what changed
    Seed,

    /// Print one product
    #[command(alias = "v")]
    View {
        /// Product id
        id: i64,
    },

    /// Add a product, or update it if the name exists
    #[command(alias = "a")]
    Add {
        /// Product name
        #[arg(long)]
        name: String,

        /// Unit price, e.g. $5.99
        #[arg(long)]
        price: String,

        /// Units on hand (must be positive)
        #[arg(long, allow_hyphen_values = true)]
        quantity: String,
    },

    /// Write every product to a CSV backup
    #[command(alias = "b")]
    Export {
        /// Output file (defaults to the configured backup file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Install the stderr log subscriber. `STOCKTAKE_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
