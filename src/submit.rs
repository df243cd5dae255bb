//! Best-effort remote notification of a new review (form endpoint such as Formspree).
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use leptos::logging::log;
use serde::Deserialize;
use thiserror::Error;

use crate::config::FormMethod;
use crate::models::review::Review;

pub const GENERIC_FAILURE_MESSAGE: &str = "Oops! There was a problem submitting your review.";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("could not build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Status and body of the endpoint's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitResponse {
    pub status: u16,
    pub body: String,
}

/// Form fields sent to the endpoint, in form order.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPayload {
    pub fields: Vec<(&'static str, String)>,
}

impl From<&Review> for FormPayload {
    fn from(review: &Review) -> Self {
        FormPayload {
            fields: vec![
                ("name", review.name.clone()),
                ("email", review.email.clone()),
                ("company", review.company.clone().unwrap_or_default()),
                ("rating", review.rating.value().to_string()),
                ("message", review.comment.clone()),
            ],
        }
    }
}

impl FormPayload {
    pub fn urlencoded(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub trait ReviewSubmitter {
    fn submit(&self, payload: FormPayload) -> LocalBoxFuture<'static, Result<SubmitResponse, SubmitError>>;
}

/// Sends the payload over HTTP with `Accept: application/json`.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    endpoint: String,
    method: FormMethod,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>, method: FormMethod) -> Self {
        HttpSubmitter {
            endpoint: endpoint.into(),
            method,
        }
    }
}

impl ReviewSubmitter for HttpSubmitter {
    fn submit(&self, payload: FormPayload) -> LocalBoxFuture<'static, Result<SubmitResponse, SubmitError>> {
        let endpoint = self.endpoint.clone();
        let method = self.method;
        Box::pin(async move {
            log!("[SUBMIT] {:?} {}", method, endpoint);
            let encoded = payload.urlencoded();
            let request = match method {
                FormMethod::Post => Request::post(&endpoint)
                    .header("Accept", "application/json")
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(encoded),
                FormMethod::Get => {
                    let separator = if endpoint.contains('?') { '&' } else { '?' };
                    Request::get(&format!("{}{}{}", endpoint, separator, encoded))
                        .header("Accept", "application/json")
                        .build()
                }
            }
            .map_err(|e| SubmitError::Request(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;
            // An unreadable body is handled like an unparseable one.
            let body = response.text().await.unwrap_or_default();
            Ok(SubmitResponse {
                status: response.status(),
                body,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Maps the endpoint's answer (or transport failure) to what the user is told.
pub fn interpret_response(result: Result<SubmitResponse, SubmitError>) -> SubmitOutcome {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            log!("[SUBMIT] Request failed: {}", err);
            return SubmitOutcome::Rejected(GENERIC_FAILURE_MESSAGE.to_string());
        }
    };
    if (200..300).contains(&response.status) {
        return SubmitOutcome::Accepted;
    }
    match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(body) => SubmitOutcome::Rejected(
            body.errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Err(_) => SubmitOutcome::Rejected(GENERIC_FAILURE_MESSAGE.to_string()),
    }
}
