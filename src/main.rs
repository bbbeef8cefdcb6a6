//! main.rs

use anyhow::Context;
use simple_form::configuration::get_configuration;
use simple_form::domain::SimpleForm;
use simple_form::error::FormResult;
use simple_form::form::{FormClient, FormOutcome};
use simple_form::telemetry::{get_subscriber, init_subscriber};

/// Reads one form as JSON from stdin and prints the outcome as JSON to stdout.
#[tokio::main]
async fn main() -> FormResult<()> {
    // stdout carries the outcome, logs go to stderr
    let subscriber = get_subscriber("simple_form".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let client = FormClient::from_settings(&configuration);

    let form: SimpleForm = serde_json::from_reader(std::io::stdin().lock())?;
    let outcome = client.submit(&form).await?;
    match &outcome {
        FormOutcome::Submitted => tracing::info!("Form has been submitted"),
        FormOutcome::Rejected(errors) => {
            tracing::info!(rejected_fields = errors.len(), "Form has been rejected")
        }
    }

    let output = serde_json::to_string_pretty(&outcome)
        .context("Failed to serialize form outcome.")?;
    println!("{}", output);
    Ok(())
}
