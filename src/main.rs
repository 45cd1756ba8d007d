use clap::Parser;
use stash_extractor::ExtractorBuilder;
use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

mod args;
use args::{Args, Command};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut builder = ExtractorBuilder::new();
    if let Some(path) = &args.config {
        ::log::info!("Loading configuration from {}", path.display());
        builder = builder.with_config_file(path)?;
    }
    if let Some(timeout) = args.timeout {
        builder = builder.with_timeout(timeout);
    }

    let bind = builder.config().server.bind.clone();
    let extractor = builder.build()?;

    match args.command {
        Command::Extract { url } => {
            let start_time = std::time::Instant::now();
            let result = extractor.extract(&url).await?;
            ::log::info!(
                "Extraction complete in {:.2} seconds",
                start_time.elapsed().as_secs_f64()
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Serve { bind: override_bind } => {
            let addr = override_bind.unwrap_or(bind);
            stash_extractor::server::serve(Arc::new(extractor), &addr).await?;
        }
    }

    Ok(())
}
