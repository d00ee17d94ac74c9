mod adapters;
mod application;
mod cli;
mod config;
mod inspection;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::JsonSessionReader;
use adapters::outbound::network::WebhookMetricsPublisher;
use application::dto::{ReportRequest, ReportResponse};
use application::factories::{PresenterFactory, PresenterType, SerializerFactory};
use application::use_cases::{GenerateReportUseCase, PublishMetricsUseCase};
use cli::Args;
use config::ConfigFile;
use owo_colors::OwoColorize;
use shared::error::ExitCode;
use shared::Result;
use std::path::Path;
use std::process;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };
    process::exit(code.as_i32());
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();
    let config = load_config(&args)?;

    // CLI > config file > default
    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };

    let use_case = GenerateReportUseCase::new(
        JsonSessionReader::new(),
        StderrProgressReporter::new(),
        SerializerFactory::create(format),
    );

    let session = use_case.load_session(&args.session)?;

    init_tracing(args.verbose || config.debug_mode.unwrap_or(false) || session.config.debug_mode);
    tracing::debug!(?format, session = %args.session.display(), "starting report generation");

    let request = ReportRequest::new(args.session.clone())
        .with_summary_only(args.summary)
        .with_thresholds(
            args.sis_threshold.or(config.sis_threshold),
            args.compliance_threshold.or(config.compliance_threshold),
        );

    if !args.summary {
        eprintln!("{}", SerializerFactory::progress_message(format));
    }
    let response = use_case.generate(session, &request).await?;

    match response.document.as_deref() {
        Some(bytes) => {
            let output_dir = args.output_dir.as_deref().or(config.output_dir.as_deref());
            let target = PresenterType::resolve(
                args.output.as_deref(),
                output_dir,
                format,
                &response.file_name,
            );
            PresenterFactory::create(target).present(bytes)?;
        }
        None => {
            let json = serde_json::to_string_pretty(&response.snapshot)?;
            println!("{}", json);
        }
    }

    print_summary(&response);

    let mut code = if args.fail_on_alert && response.alerts.any() {
        ExitCode::AlertThresholdBreached
    } else {
        ExitCode::Success
    };

    let webhook_url = args.publish_url.as_deref().or(config.webhook_url.as_deref());
    if let Some(url) = webhook_url {
        // The report is already delivered; a failed publish only changes the exit code
        if let Err(e) = publish_metrics(url, &response).await {
            eprintln!("\n❌ Failed to publish metrics:\n");
            eprintln!("{}", e);
            code = ExitCode::ApplicationError;
        }
    }

    Ok(code)
}

/// Loads `--config`, or the config file next to the session when there is one.
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = args.config.as_deref() {
        let config = config::load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(config);
    }

    let session_dir = match args.session.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    match config::discover_config(session_dir)? {
        Some(config) => {
            eprintln!(
                "📄 Auto-discovered config file: {}",
                session_dir.join(config::CONFIG_FILENAME).display()
            );
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

async fn publish_metrics(url: &str, response: &ReportResponse) -> Result<()> {
    let publisher = WebhookMetricsPublisher::new(url)?;
    let use_case = PublishMetricsUseCase::new(publisher, StderrProgressReporter::new());
    let outcome = use_case.execute(&response.session).await?;
    tracing::debug!(endpoint = %outcome.endpoint, "metrics published");
    Ok(())
}

fn print_summary(response: &ReportResponse) {
    let snapshot = &response.snapshot;
    let alerts = response.alerts;

    let sis = if alerts.sis_alert {
        format!("{} ⚠️", snapshot.site_issue_score.red().bold())
    } else {
        snapshot.site_issue_score.green().to_string()
    };
    let compliance = format!("{}%", snapshot.compliance_percentage);
    let compliance = if alerts.compliance_alert {
        format!("{} ⚠️", compliance.red().bold())
    } else {
        compliance.green().to_string()
    };

    eprintln!();
    eprintln!("{}", "📋 Audit summary".bold());
    eprintln!("   Total assets checked:  {}", snapshot.total_assets_checked);
    eprintln!("   Maintenance defects:   {}", snapshot.maintenance_defect_total);
    eprintln!("   Mechanical SIS:        {}", sis);
    eprintln!("   Compliance:            {}", compliance);
    if response.document.is_some() {
        eprintln!("   Photos embedded:       {}", response.embedded_photos);
    }
}
