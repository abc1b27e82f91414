//! Contact-form submission via the EmailJS REST relay
//!
//! A single opaque external call: build the JSON payload, POST it, report
//! success or failure. Failures surface to the user as a retry message -
//! nothing here retries automatically.

use serde::Serialize;
use thiserror::Error;

/// EmailJS REST endpoint
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
/// EmailJS service ID
pub const SERVICE_ID: &str = "service_1go09ca";
/// EmailJS template ID
pub const TEMPLATE_ID: &str = "template_8h42845";
/// EmailJS public key
pub const PUBLIC_KEY: &str = "ySH2WUlutvJlB5DTS";

/// Fields collected from the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Template variables the relay substitutes into the email
#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    to_name: &'a str,
}

/// Request body for the EmailJS send API
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Ways the relay call can fail
#[derive(Debug, Error)]
pub enum SendError {
    /// The request never completed (network down, CORS, aborted)
    #[error("request failed: {0}")]
    Request(String),
    /// The relay answered with a non-success status
    #[error("relay rejected the message (status {0})")]
    Relay(u16),
}

/// Serialize the relay payload for a message
pub fn payload(msg: &ContactMessage) -> serde_json::Value {
    let request = SendRequest {
        service_id: SERVICE_ID,
        template_id: TEMPLATE_ID,
        user_id: PUBLIC_KEY,
        template_params: TemplateParams {
            from_name: &msg.name,
            from_email: &msg.email,
            message: &msg.message,
            to_name: "ClickFix.cloud Team",
        },
    };
    // Serialization of a struct of strings cannot fail
    serde_json::to_value(&request).unwrap_or(serde_json::Value::Null)
}

/// POST the message to the relay (WASM only)
#[cfg(target_arch = "wasm32")]
pub async fn send(msg: &ContactMessage) -> Result<(), SendError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let body = payload(msg).to_string();

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(EMAILJS_ENDPOINT, &opts)
        .map_err(|e| SendError::Request(format!("{:?}", e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| SendError::Request(format!("{:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| SendError::Request("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| SendError::Request(format!("{:?}", e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| SendError::Request("unexpected fetch result".into()))?;

    if response.ok() {
        log::info!("Contact message relayed");
        Ok(())
    } else {
        log::error!("Email relay returned status {}", response.status());
        Err(SendError::Relay(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let msg = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "My printer is on fire".into(),
        };
        let value = payload(&msg);

        assert_eq!(value["service_id"], SERVICE_ID);
        assert_eq!(value["template_id"], TEMPLATE_ID);
        assert_eq!(value["user_id"], PUBLIC_KEY);
        assert_eq!(value["template_params"]["from_name"], "Ada");
        assert_eq!(value["template_params"]["from_email"], "ada@example.com");
        assert_eq!(value["template_params"]["message"], "My printer is on fire");
        assert_eq!(value["template_params"]["to_name"], "ClickFix.cloud Team");
    }

    #[test]
    fn test_send_error_messages() {
        let err = SendError::Relay(422);
        assert_eq!(err.to_string(), "relay rejected the message (status 422)");
        let err = SendError::Request("network down".into());
        assert_eq!(err.to_string(), "request failed: network down");
    }
}
