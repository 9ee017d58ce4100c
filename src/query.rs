//! One-shot `rlens query`: a single submission without the TUI
//!
//! Drives the same [`Engine`] the TUI uses, so input validation, the
//! single-flight guard and response normalization behave identically.

use color_eyre::eyre::{bail, eyre};
use color_eyre::Result;
use rlens_app::{Engine, Message, RequestStatus};
use rlens_core::{PanelId, PanelResult};
use rlens_gateway::AnalysisGateway;
use tracing::info;

/// Parse a `field=value` command-line pair
pub fn parse_field(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected FIELD=VALUE, got '{raw}'")),
    }
}

/// Submit `fields` to `panel` and wait for the normalized result
pub async fn run_query<G>(
    engine: &mut Engine<G>,
    panel: PanelId,
    fields: &[(String, String)],
) -> Result<PanelResult>
where
    G: AnalysisGateway + Send + Sync + 'static,
{
    let descriptor = panel.descriptor();
    for (field, _) in fields {
        if descriptor.input(field).is_none() {
            let expected: Vec<&str> = descriptor.required_inputs.iter().map(|f| f.name).collect();
            bail!(
                "{} has no input '{}' (expected: {})",
                descriptor.label,
                field,
                expected.join(", ")
            );
        }
    }

    engine.process_message(Message::SelectPanel(panel));
    for (field, value) in fields {
        engine.process_message(Message::SetInput {
            field: field.clone(),
            value: value.clone(),
        });
    }
    engine.process_message(Message::Submit);

    let machine = engine
        .state
        .view
        .mounted()
        .ok_or_else(|| eyre!("{} is not mounted", descriptor.label))?;
    if let Some(rejection) = machine.rejection() {
        bail!("{rejection}");
    }

    info!("Querying {} at {}", panel, descriptor.endpoint_path);
    engine.wait_for_completion().await;

    let machine = engine
        .state
        .view
        .mounted()
        .ok_or_else(|| eyre!("{} is not mounted", descriptor.label))?;
    match machine.status() {
        RequestStatus::Succeeded { result, .. } => Ok(result.as_ref().clone()),
        RequestStatus::Failed { message, .. } => Err(eyre!("{message}")),
        RequestStatus::Submitting { .. } => Err(eyre!("Interrupted before the service replied")),
        RequestStatus::Idle => Err(eyre!("No request was sent")),
    }
}

/// Render a result for stdout
pub fn format_result(result: &PanelResult, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(rlens_tui::plain_text(result))
    }
}

/// `rlens panels` listing
pub fn panel_listing() -> String {
    let mut out = String::new();
    for id in PanelId::ALL {
        let d = id.descriptor();
        let inputs: Vec<&str> = d.required_inputs.iter().map(|f| f.name).collect();
        out.push_str(&format!(
            "{:<22} {:<26} POST {:<22} {}\n",
            id.key(),
            d.label,
            d.endpoint_path,
            inputs.join(", ")
        ));
    }
    out
}
