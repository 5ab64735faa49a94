use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailJsConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not reach the email service: {0}")]
    Request(String),
    #[error("email service rejected the submission ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<gloo_net::Error> for SubmitError {
    fn from(err: gloo_net::Error) -> Self {
        SubmitError::Request(err.to_string())
    }
}

#[derive(Serialize)]
struct SendRequest<'a, T: Serialize> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a T,
}

impl<'a, T: Serialize> SendRequest<'a, T> {
    fn new(config: &'a EmailJsConfig, params: &'a T) -> Self {
        Self {
            service_id: config.service_id,
            template_id: config.template_id,
            user_id: config.public_key,
            template_params: params,
        }
    }
}

/// Sends one templated email. There is no retry; the caller tells the user.
pub async fn send_email<T: Serialize>(config: &EmailJsConfig, params: &T) -> Result<(), SubmitError> {
    let response = Request::post(config.endpoint)
        .json(&SendRequest::new(config, params))?
        .send()
        .await?;

    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_wraps_template_params() {
        let config = EmailJsConfig {
            endpoint: "https://example.test/send",
            service_id: "service_x",
            template_id: "template_y",
            public_key: "key_z",
        };
        let params = json!({ "fullName": "Asha Rao" });
        let body = serde_json::to_value(SendRequest::new(&config, &params)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "key_z",
                "template_params": { "fullName": "Asha Rao" }
            })
        );
    }

    #[test]
    fn rejection_message_includes_status() {
        let err = SubmitError::Rejected {
            status: 400,
            body: "The Public Key is invalid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "email service rejected the submission (400): The Public Key is invalid"
        );
    }
}
