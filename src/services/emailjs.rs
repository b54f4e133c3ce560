use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;

use super::{EmailParams, EmailRelay};
use crate::config::{config, required};
use crate::error::AppError;

pub const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const FALLBACK_ERROR: &str = "Failed to send message. Please try again later.";

#[derive(Debug, Clone)]
pub struct EmailJsClient {
    service_id: Option<&'static str>,
    template_id: Option<&'static str>,
    public_key: Option<&'static str>,
}

#[derive(Serialize, Debug)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailParams,
}

impl EmailJsClient {
    pub fn new(
        service_id: Option<&'static str>,
        template_id: Option<&'static str>,
        public_key: Option<&'static str>,
    ) -> Self {
        Self {
            service_id,
            template_id,
            public_key,
        }
    }

    pub fn from_config() -> Self {
        let conf = config();
        Self::new(
            conf.emailjs_service_id,
            conf.emailjs_template_id,
            conf.emailjs_public_key,
        )
    }

    fn body<'a>(&'a self, params: &'a EmailParams) -> Result<SendBody<'a>, AppError> {
        Ok(SendBody {
            service_id: required(self.service_id, "PORTFOLIO_EMAILJS_SERVICE_ID")?,
            template_id: required(self.template_id, "PORTFOLIO_EMAILJS_TEMPLATE_ID")?,
            user_id: required(self.public_key, "PORTFOLIO_EMAILJS_PUBLIC_KEY")?,
            template_params: params,
        })
    }
}

/// EmailJS answers failures with a plain text reason.
fn relay_message(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        body.to_string()
    }
}

#[async_trait(?Send)]
impl EmailRelay for EmailJsClient {
    async fn send(&self, params: &EmailParams) -> Result<(), AppError> {
        let body = self.body(params)?;
        let res = Request::post(SEND_ENDPOINT).json(&body)?.send().await?;
        if !res.ok() {
            let text = res.text().await.unwrap_or_default();
            return Err(AppError::Relay(relay_message(&text)));
        }
        Ok(())
    }
}
