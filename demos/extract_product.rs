use clap::Parser;
use stash_extractor::{ExtractorBuilder, ProductDraft};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Marketplace product link, as pasted into the product form
    link: String,

    /// Path to extractor configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Name typed by the user before pasting the link
    #[arg(long)]
    name: Option<String>,

    /// Brand typed by the user before pasting the link
    #[arg(long)]
    brand: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    let mut builder = ExtractorBuilder::new();
    if let Some(path) = &args.config {
        builder = builder.with_config_file(path)?;
    }
    if let Some(timeout) = args.timeout {
        println!("Overriding timeout: {}s", timeout);
        builder = builder.with_timeout(timeout);
    }
    let extractor = builder.build()?;

    // What the form holds before the link is pasted
    let mut draft = ProductDraft::from_link(&args.link);
    draft.name = args.name;
    draft.brand = args.brand;

    // The form only triggers extraction for marketplace links
    if !extractor.filter().is_marketplace_url(&args.link) {
        println!("Not a marketplace link, fill in the fields manually.");
        println!("{}", serde_json::to_string_pretty(&draft)?);
        return Ok(());
    }

    println!("Fetching product details...");
    match extractor.extract(&args.link).await {
        Ok(result) => {
            println!("Found fields: {:?}", result.found_fields());
            draft.merge(&result);
        }
        Err(e) => {
            // Not fatal: the user can still type the fields
            println!("{}", e);
        }
    }

    println!("{}", serde_json::to_string_pretty(&draft)?);
    println!("Ready to submit: {}", draft.is_submittable());

    Ok(())
}
