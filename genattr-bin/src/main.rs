use std::io::Read;
use std::path::PathBuf;

use genattr_core::{config::Config, AttributeSet, ModelAttributeExtractor, ModelFamily};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "genattr: Bedrock body → gen_ai span attributes", long_about = None)]
struct Cli {
    /// Alias/disable configuration (JSON or TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BodyArgs {
    /// Bedrock model id, e.g. amazon.titan-text-express-v1
    #[arg(long)]
    model: String,
    /// File holding the JSON body; reads stdin when omitted
    #[arg(long)]
    body: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract attributes from an InvokeModel request body
    Request(BodyArgs),
    /// Extract attributes from an InvokeModel response body
    Response(BodyArgs),
    /// List supported model families
    Families,
}

fn read_body(path: Option<&PathBuf>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(p) => Ok(std::fs::read(p)?),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    let extractor = ModelAttributeExtractor::from_config(&cfg)?;

    let (args, is_request) = match cli.command {
        Commands::Request(args) => (args, true),
        Commands::Response(args) => (args, false),
        Commands::Families => {
            let registered = extractor.registry().families();
            for family in ModelFamily::ALL {
                let state = if registered.contains(&family) { "enabled" } else { "disabled" };
                println!("{family}\t{state}");
            }
            return Ok(());
        }
    };

    if extractor.family_of(&args.model).is_none() {
        tracing::warn!(model = %args.model, "model id does not match any supported family");
    }

    let raw = read_body(args.body.as_ref())?;
    let mut set = AttributeSet::new();
    if is_request {
        extractor.extract_request_attributes(&mut set, &args.model, Some(raw.as_slice()));
    } else {
        extractor.extract_response_attributes(&mut set, &args.model, Some(raw.as_slice()));
    }
    println!("{}", serde_json::to_string_pretty(&set)?);

    Ok(())
}
