mod config;
mod errors;
mod llm_client;
mod pipeline;
mod portfolio;
mod resume;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::pipeline::PortfolioPipeline;
use crate::portfolio::generator::PortfolioGenerator;
use crate::portfolio::themes::{DEFAULT_THEME, THEMES};

/// Turn a résumé (PDF or DOCX) into a single-page HTML portfolio.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Résumé file to convert (.pdf or .docx)
    #[arg(required_unless_present = "list_themes")]
    resume: Option<PathBuf>,

    /// Color theme for the generated page
    #[arg(long, short, default_value = DEFAULT_THEME)]
    theme: String,

    /// Where to write the page (default: <GENERATED_DIR>/<uuid>_portfolio.html)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print the parse and generation result as JSON
    #[arg(long)]
    json: bool,

    /// List available themes and exit
    #[arg(long)]
    list_themes: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.list_themes {
        for (name, theme) in THEMES {
            println!(
                "{name:<20} primary {} secondary {} accent {}",
                theme.primary, theme.secondary, theme.accent
            );
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::with_timeout(
        config.api_key.clone(),
        config.api_url.clone(),
        config.model.clone(),
        config.generation_timeout,
    )?;
    info!(
        "LLM client initialized (model: {}, timeout: {:?})",
        llm.model(),
        config.generation_timeout
    );

    let pipeline = PortfolioPipeline::new(
        PortfolioGenerator::new(llm),
        config.generated_dir.clone(),
        config.max_upload_bytes,
    );

    let Some(resume) = cli.resume else {
        return Ok(ExitCode::FAILURE);
    };

    match pipeline.run(&resume, &cli.theme, cli.output).await {
        Ok(output) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", output.path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(code = e.code(), "Portfolio generation failed: {e}");
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
