use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Score a site inspection session and produce its compliance report
#[derive(Parser, Debug)]
#[command(name = "site-inspector")]
#[command(version)]
#[command(
    about = "Score a site inspection session and produce its compliance report",
    long_about = None
)]
pub struct Args {
    /// Path to the exported inspection session (JSON)
    #[arg(short, long, value_name = "PATH")]
    pub session: PathBuf,

    /// Report format: docx or markdown [default: docx]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (overrides --output-dir and the suggested file name)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory for the suggested report file name (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Config file path (defaults to site-inspector.config.yml next to the session)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the compliance snapshot as JSON instead of writing a report
    #[arg(long)]
    pub summary: bool,

    /// POST the headline metrics to this webhook after the report is produced
    #[arg(long, value_name = "URL")]
    pub publish_url: Option<String>,

    /// SIS above which an alert is raised (overrides config file and session)
    #[arg(long, value_name = "SCORE")]
    pub sis_threshold: Option<f64>,

    /// Compliance percentage below which an alert is raised (overrides config file and session)
    #[arg(long, value_name = "PERCENT")]
    pub compliance_threshold: Option<f64>,

    /// Exit with code 1 when an SIS or compliance alert is raised
    #[arg(long)]
    pub fail_on_alert: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
