// AlgoBench CLI - empirical time-complexity measurement service
use anyhow::Result;
use clap::{Parser, Subcommand};

// Macro for conditional printing based on quiet flag
macro_rules! qprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            println!($($arg)*);
        }
    };
}

use algobench::{
    harness, init_logging_with_level, start_server, Algorithm, AnalysisStore, ClampedMaxN,
    ClampedSteps,
};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "AlgoBench - measure real running times of textbook algorithms",
    long_about = None,
    after_help = "QUICK START:
  1. Start the server:        algobench serve --port 3000
  2. Run an analysis:         curl 'localhost:3000/analyze?algo=binary&n=1000&steps=5'
  3. One-shot from the CLI:   algobench measure bubble --n 2000 --steps 8

EXAMPLES:
  # Serve with persistence enabled
  algobench serve --port 3000 --db-url postgres://localhost/algobench

  # Create the analysis table
  algobench init-db --db-url postgres://localhost/algobench"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP analysis server
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Postgres connection string; persistence is disabled when absent
        #[arg(long, env = "DATABASE_URL")]
        db_url: Option<String>,
    },

    /// Run one measurement from the command line and print the series
    Measure {
        /// Algorithm name (e.g. linear, bubble, binary, nested)
        algo: String,

        /// Maximum input size (clamped to [100, 20000])
        #[arg(long, default_value_t = 1000)]
        n: i64,

        /// Number of sampled sizes (clamped to [4, 30])
        #[arg(long, default_value_t = 10)]
        steps: i64,
    },

    /// Create the analysis table in the configured database
    InitDb {
        /// Postgres connection string
        #[arg(long, env = "DATABASE_URL")]
        db_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging_with_level(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Serve { port, db_url } => {
            let store = match db_url {
                Some(url) => match AnalysisStore::connect(&url).await {
                    Ok(store) => {
                        store.init_schema().await?;
                        qprintln!(cli.quiet, "Persistence enabled");
                        Some(store)
                    }
                    Err(e) => {
                        // measurement still works without a database
                        tracing::warn!(error = %e, "Database unavailable; running measurement-only");
                        qprintln!(cli.quiet, "Database unavailable; running measurement-only");
                        None
                    }
                },
                None => None,
            };

            qprintln!(cli.quiet, "Starting AlgoBench server on port {port}");
            start_server(store, port).await
        }

        Commands::Measure { algo, n, steps } => {
            let algorithm = Algorithm::parse(&algo).map_err(|e| anyhow::anyhow!(e))?;
            let max_n = ClampedMaxN::new(n);
            let steps = ClampedSteps::new(steps);

            qprintln!(
                cli.quiet,
                "Measuring {} up to n={} in {} steps...",
                algorithm.display_name(),
                max_n.get(),
                steps.get()
            );

            let series = tokio::task::spawn_blocking(move || {
                harness::measure(algorithm, max_n.get(), steps.get())
            })
            .await?;

            let report = serde_json::json!({
                "algorithm": algorithm.display_name(),
                "complexity": algorithm.complexity_label(),
                "input_sizes": series.sizes,
                "times_seconds": series.durations,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }

        Commands::InitDb { db_url } => {
            let store = AnalysisStore::connect(&db_url).await?;
            store.init_schema().await?;
            qprintln!(cli.quiet, "Analysis table ready");
            Ok(())
        }
    }
}
