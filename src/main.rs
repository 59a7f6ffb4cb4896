use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use krant_core::Spelerslijst;

#[derive(Parser)]
#[command(name = "krant-intake", about = "Intake processor for krant submissions")]
struct Cli {
    /// Raw submission text to process.
    #[arg(long)]
    input: PathBuf,

    /// Where the JSON intake record is written.
    #[arg(long)]
    output: PathBuf,

    /// Player list JSON; when given, the submitted Minecraft name is
    /// canonicalised against it.
    #[arg(long)]
    spelers: Option<PathBuf>,

    /// Date stamp override (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    datum: Option<NaiveDate>,

    /// Write debug logs to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let raw = krant_core::io::read_lossy(&cli.input)?;
    let spelers = cli.spelers.as_deref().map(Spelerslijst::load).transpose()?;
    let datum = cli.datum.unwrap_or_else(|| chrono::Local::now().date_naive());

    let record = krant_core::process(&raw, spelers.as_ref(), datum);
    tracing::debug!(
        onderwerp = %record.onderwerp,
        verdacht = record.veiligheids_flags.prompt_injectie_verdacht,
        "record assembled"
    );

    krant_core::io::write_record(&cli.output, &record)?;
    println!("{}", cli.output.display());
    Ok(())
}
