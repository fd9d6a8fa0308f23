//! concussion-tracker: ten-day concussion symptom tracker.
//!
//! - `serve` runs the HTTP API
//! - `report` turns a saved form (JSON) into CSV / PDF reports

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use concussion_tracker::config;
use concussion_tracker::export;
use concussion_tracker::intake::{SymptomForm, SymptomFormInput};
use concussion_tracker::simulation::RecoveryModel;
use concussion_tracker::tracker;

#[derive(Parser)]
#[command(name = "concussion-tracker")]
#[command(version, about = "Ten-day concussion symptom tracker with CSV/PDF reports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the tracker API
    Serve {
        /// Address to bind
        #[arg(long, env = config::BIND_ADDR_ENV, default_value = config::DEFAULT_BIND_ADDR)]
        addr: SocketAddr,
    },
    /// Build reports from a saved form
    Report {
        /// Form JSON: {"patient_name": "...", "selections": {"headache_1": "Mild", ...}}
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (defaults to ~/ConcussionTracker/exports)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Also generate the PDF report
        #[arg(long)]
        pdf: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    concussion_tracker::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { addr } => concussion_tracker::run_server(addr)
            .await
            .context("API server failed")?,
        Command::Report {
            input,
            out_dir,
            pdf,
        } => report(&input, out_dir.unwrap_or_else(config::exports_dir), pdf)?,
    }

    Ok(())
}

fn report(input: &Path, out_dir: PathBuf, pdf: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("Cannot read form file {}", input.display()))?;
    let input: SymptomFormInput =
        serde_json::from_str(&raw).context("Form file is not valid form JSON")?;
    let form = SymptomForm::try_from(input).context("Form file has invalid selections")?;

    let view = tracker::build_view(&form, &RecoveryModel::default());
    if let Some(greeting) = &view.greeting {
        println!("{greeting}");
    }
    println!(
        "[{}] {} (last 3 days average: {:.2})",
        view.recommendation.banner, view.recommendation.message, view.recommendation.final_score
    );

    let csv = tracker::csv_download(&form).context("CSV export failed")?;
    let path = export::write_artifact(&out_dir, &csv).context("Cannot save CSV report")?;
    println!("CSV report: {}", path.display());

    if pdf {
        let artifact = tracker::pdf_download(&form).context("PDF export failed")?;
        let path =
            export::write_artifact(&out_dir, &artifact).context("Cannot save PDF report")?;
        println!("PDF report: {}", path.display());
    }

    Ok(())
}
