//! Utility CLI: inspect sample payloads and smoke-test a target before
//! pointing a full goose attack at it.

use clap::{Parser, Subcommand, ValueEnum};
use stampede::client::ApiClient;
use stampede::config::{PaymentConfig, ProbeConfig};
use stampede::{payload, smoke};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stampede")]
#[command(about = "Event & payments API load-test utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one randomized sample payload as pretty JSON
    Payload {
        #[arg(value_enum)]
        kind: PayloadKind,
    },
    /// One-pass sweep of every endpoint against a live target
    Smoke {
        /// Base URL of the target API
        #[arg(long)]
        base_url: String,

        /// Also exercise the tokenize/charge payment flow
        #[arg(long, default_value_t = false)]
        payments: bool,

        /// Emit the full report as JSON instead of a summary
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PayloadKind {
    Event,
    Ticket,
    Category,
    Search,
    Tokenize,
    Charge,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Payload { kind } => {
            let body = match kind {
                PayloadKind::Event => payload::event(),
                PayloadKind::Ticket => payload::ticket(),
                PayloadKind::Category => payload::category(),
                PayloadKind::Search => payload::search_request(),
                PayloadKind::Tokenize => payload::tokenize(&PaymentConfig::from_env()),
                PayloadKind::Charge => {
                    payload::charge(&PaymentConfig::from_env(), "tok_sample")
                }
            };
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Commands::Smoke {
            base_url,
            payments,
            json,
        } => {
            let client = ApiClient::new(&base_url)?;
            let probes = ProbeConfig::from_env();
            let payment_config = payments.then(PaymentConfig::from_env);
            let report = smoke::run(&client, &probes, payment_config.as_ref()).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for step in &report.steps {
                    let status = step
                        .status
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    let outcome = format!("{:?}", step.outcome);
                    println!("{outcome:<8} {status:>4}  {}", step.name);
                }
                println!(
                    "{} passed, {} failed, {} skipped",
                    report.passed(),
                    report.failed(),
                    report.skipped()
                );
            }

            if !report.is_success() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
