use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::commands::analyze::{self, AnalyzeOptions};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    // Initialize tracing with appropriate verbosity
    let filter = if cli.verbose > 0 {
        match cli.verbose {
            1 => "debug",
            2.. => "trace",
            _ => "info",
        }
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let options = AnalyzeOptions {
        config: cli.config,
        use_grounding: !cli.no_grounding,
        format: cli.format,
    };

    // Process commands
    match cli.command {
        Commands::Text(args) => {
            info!("Text analysis: {:?}", args);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(analyze::execute_text(args, options))?;
        }
        Commands::Image(args) => {
            info!("Image analysis: {:?}", args);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(analyze::execute_image(args, options))?;
        }
        Commands::Multimodal(args) => {
            info!("Multimodal analysis: {:?}", args);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(analyze::execute_multimodal(args, options))?;
        }
        Commands::Batch(args) => {
            info!("Batch analysis: {:?}", args);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(analyze::execute_batch(args, options))?;
        }
    }

    Ok(())
}
