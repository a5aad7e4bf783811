// Rust guideline compliant 2026-10-16

//! Command-line surface: the form, the submit action, the inline error
//! region, and the result region.

use crate::adapters::demo_prediction::DemoPredictionService;
use crate::adapters::http_prediction::HttpPredictionService;
use crate::config::AppConfig;
use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use controller::{ControllerConfig, FormSession, SubmissionController};
use domain::{FormField, PredictionService};
use presenter::RiskDisplay;
use std::io::{BufRead, Write};
use std::process::ExitCode;

/// Cells of the text risk indicator.
const BAR_WIDTH: u32 = 30;

#[derive(Parser, Debug)]
#[command(
    name = "fraud_check",
    about = "Score a transaction against a fraud-prediction service",
    version
)]
struct Cli {
    /// Base URL of the prediction service (overrides FRAUD_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Seconds to wait for a prediction; 0 waits indefinitely (overrides FRAUD_API_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    /// Score offline with the built-in demo model instead of calling the service
    #[arg(long, global = true)]
    demo: bool,
    /// Seed for the demo model
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check one transaction given as flags
    Check(TransactionArgs),
    /// Fill the form field by field, then analyze as many transactions as needed
    Interactive,
    /// Probe the prediction service
    Health,
}

/// The 8 form fields. Omitted flags stay empty and fail validation.
#[derive(Args, Debug, Default)]
struct TransactionArgs {
    /// Transaction amount
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<String>,
    /// Customer age in years
    #[arg(long)]
    customer_age: Option<String>,
    /// Hour of day (0-23)
    #[arg(long)]
    hour: Option<String>,
    /// e.g. purchase, transfer
    #[arg(long)]
    transaction_type: Option<String>,
    /// e.g. grocery, telecom, travel, unknown
    #[arg(long)]
    merchant_category: Option<String>,
    /// e.g. debit, credit
    #[arg(long)]
    card_type: Option<String>,
    /// e.g. somalia, kenya, ethiopia, djibouti
    #[arg(long)]
    country: Option<String>,
    /// e.g. web, mobile
    #[arg(long)]
    device: Option<String>,
}

impl TransactionArgs {
    fn fields(&self) -> [(FormField, &str); 8] {
        [
            (FormField::Amount, self.amount.as_deref().unwrap_or_default()),
            (FormField::CustomerAge, self.customer_age.as_deref().unwrap_or_default()),
            (FormField::Hour, self.hour.as_deref().unwrap_or_default()),
            (FormField::TransactionType, self.transaction_type.as_deref().unwrap_or_default()),
            (FormField::MerchantCategory, self.merchant_category.as_deref().unwrap_or_default()),
            (FormField::CardType, self.card_type.as_deref().unwrap_or_default()),
            (FormField::Country, self.country.as_deref().unwrap_or_default()),
            (FormField::Device, self.device.as_deref().unwrap_or_default()),
        ]
    }
}

/// Parse the command line, load configuration, and run the chosen command.
///
/// # Errors
///
/// Returns an error for unusable configuration or I/O failures. A failed
/// prediction is not an error here; it yields [`ExitCode::FAILURE`].
pub async fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = AppConfig::load()
        .context("failed to load configuration")?
        .with_overrides(cli.api_url, cli.timeout_secs)
        .context("invalid command-line override")?;
    crate::telemetry::init(&config.log_level).context("failed to initialise tracing")?;

    let mut builder = ControllerConfig::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let controller_config = builder.build().context("failed to build controller config")?;

    if cli.demo {
        tracing::info!(seed = ?cli.seed, "cli.start: demo model");
        let service = DemoPredictionService::new(cli.seed);
        return dispatch(cli.command, controller_config, service, None).await;
    }

    tracing::info!(api_url = %config.api_url, "cli.start");
    let service = HttpPredictionService::new(&config.api_url);
    let probe = match config.timeout {
        Some(timeout) => service.clone().with_health_timeout(timeout),
        None => service.clone(),
    };
    dispatch(cli.command, controller_config, service, Some(probe)).await
}

async fn dispatch<P: PredictionService>(
    command: Command,
    config: ControllerConfig,
    service: P,
    probe: Option<HttpPredictionService>,
) -> anyhow::Result<ExitCode> {
    let session = FormSession::new(SubmissionController::new(config, service));
    let stdout = std::io::stdout();
    match command {
        Command::Check(args) => check(&session, &args, &mut stdout.lock()).await,
        Command::Interactive => {
            interactive(&session, std::io::stdin().lock(), &mut stdout.lock()).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Health => health(probe.as_ref(), &mut stdout.lock()).await,
    }
}

/// Fill the form from flags, submit once, print the outcome.
async fn check<P: PredictionService, W: Write>(
    session: &FormSession<P>,
    args: &TransactionArgs,
    out: &mut W,
) -> anyhow::Result<ExitCode> {
    for (field, value) in args.fields() {
        session.set_field(field, value);
    }
    submit_and_print(session, out).await?;
    Ok(if session.state().result().is_some() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Prompt for every field, submit, show the outcome; repeat on request.
async fn interactive<P: PredictionService, R: BufRead, W: Write>(
    session: &FormSession<P>,
    mut input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "Fraud Detection -- analyze transaction risk")?;
    loop {
        for field in FormField::ALL {
            let options = field.options();
            if options.is_empty() {
                write!(out, "{}: ", field.label())?;
            } else {
                write!(out, "{} [{}]: ", field.label(), options.join("/"))?;
            }
            out.flush()?;
            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };
            session.set_field(field, line);
        }

        submit_and_print(session, out).await?;
        write!(out, "Analyze another transaction? [y/N]: ")?;
        out.flush()?;
        match read_line(&mut input)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => session.reset(),
            _ => return Ok(()),
        }
    }
}

/// One trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

async fn submit_and_print<P: PredictionService, W: Write>(
    session: &FormSession<P>,
    out: &mut W,
) -> std::io::Result<()> {
    if !session.can_submit() {
        writeln!(out, "Analyzing... a request is already in flight")?;
        return Ok(());
    }
    writeln!(out, "Analyzing...")?;
    match session.submit().await {
        Ok(result) => write!(out, "{}", render_result(&presenter::render(&result))),
        Err(err) => writeln!(out, "Error: {err}"),
    }
}

/// Text form of the result region.
fn render_result(display: &RiskDisplay) -> String {
    let mut text = format!(
        "\nAnalysis Result\n  Risk Level:        {} ({})\n  Fraud Probability: {}\n  Risk Indicator:    {}\n",
        display.label,
        display.tier_color.name(),
        display.percentage,
        display.bar(BAR_WIDTH),
    );
    if let Some(is_fraud) = display.is_fraud {
        let verdict = if is_fraud { "flagged as fraud" } else { "not flagged" };
        text.push_str(&format!("  Verdict:           {verdict}\n"));
    }
    text
}

async fn health<W: Write>(
    probe: Option<&HttpPredictionService>,
    out: &mut W,
) -> anyhow::Result<ExitCode> {
    let Some(service) = probe else {
        writeln!(out, "demo model: always available")?;
        return Ok(ExitCode::SUCCESS);
    };
    match service.health().await {
        Ok(status) => {
            writeln!(out, "{}: {status}", service.base_url())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::warn!(error = %err, "cli.health.failed");
            writeln!(out, "{}: unreachable ({err})", service.base_url())?;
            Ok(ExitCode::FAILURE)
        }
    }
}
