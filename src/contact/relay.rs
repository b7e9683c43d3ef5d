use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use super::form::ContactSubmission;
use crate::config;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("We couldn't prepare your message: {0}")]
    Encode(String),
    #[error("We couldn't reach our inbox ({0}). Check your connection and try again.")]
    Network(String),
    #[error("{0}")]
    Rejected(String),
}

#[derive(Deserialize)]
struct RelayErrors {
    errors: Vec<RelayError>,
}

#[derive(Deserialize)]
struct RelayError {
    message: String,
}

/// Human-readable reason from a relay error body such as
/// `{"errors":[{"message":"..."}]}`.
pub fn rejection_message(body: &str) -> Option<String> {
    let parsed: RelayErrors = serde_json::from_str(body).ok()?;
    let messages: Vec<String> = parsed
        .errors
        .into_iter()
        .map(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join(" "))
    }
}

pub async fn submit(submission: &ContactSubmission) -> Result<(), SubmitError> {
    info!("Sending contact enquiry for {}", submission.service);

    let request = Request::post(config::form_relay_url())
        .header("Accept", "application/json")
        .json(submission)
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

    let response = request.send().await.map_err(|e| {
        warn!("Contact relay unreachable: {}", e);
        SubmitError::Network(e.to_string())
    })?;

    if response.ok() {
        info!("Contact enquiry delivered");
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!("Contact relay rejected enquiry with status {}", status);
    Err(SubmitError::Rejected(rejection_message(&body).unwrap_or_else(|| {
        format!("Something went wrong on our side (status {}). Please try again.", status)
    })))
}
