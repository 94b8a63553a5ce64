mod cmd;
mod output;
mod settings;

use clap::{Parser, Subcommand};
use cmd::{past_work::PastWorkSubcommand, product::ProductSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "showcase",
    about = "Manage the products and past work catalogs and serve them over HTTP",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding products.json and past_work.json (default: current directory)
    #[arg(long, global = true, env = "SHOWCASE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Config file (default: showcase.yaml in the data directory, if present)
    #[arg(long, global = true, env = "SHOWCASE_CONFIG")]
    config: Option<PathBuf>,

    /// Identity allowed to add and remove entries
    #[arg(long, global = true, env = "SHOWCASE_OPERATOR_ID")]
    operator_id: Option<u64>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create empty catalog documents if they are missing
    Init,

    /// Manage academy shop products
    Product {
        #[command(subcommand)]
        subcommand: ProductSubcommand,
    },

    /// Manage past work projects
    PastWork {
        #[command(subcommand)]
        subcommand: PastWorkSubcommand,
    },

    /// Serve the read-only catalog API
    Serve {
        /// Port to listen on (0 = OS-assigned; default from config, else 5000)
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },

    /// Show the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = settings::resolve(&settings::Overrides {
        data_dir: cli.data_dir,
        config: cli.config,
        operator_id: cli.operator_id,
    })
    .and_then(|config| match cli.command {
        Commands::Init => cmd::init::run(&config, cli.json),
        Commands::Product { subcommand } => cmd::product::run(&config, subcommand, cli.json),
        Commands::PastWork { subcommand } => cmd::past_work::run(&config, subcommand, cli.json),
        Commands::Serve { port } => cmd::serve::run(&config, port),
        Commands::Config => cmd::config::run(&config, cli.json),
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
