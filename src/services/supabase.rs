use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use http::StatusCode;
use serde::Deserialize;

use super::{ImageFile, MessageRecord, MessageStore, ObjectStore, UploadOptions};
use crate::config::{config, required};
use crate::error::AppError;

pub const MESSAGES_TABLE: &str = "messages";

/// Supabase storage and PostgREST over plain HTTP.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    url: Option<&'static str>,
    anon_key: Option<&'static str>,
}

#[derive(Deserialize, Debug, Default)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    msg: Option<String>,
}

impl SupabaseClient {
    pub fn new(url: Option<&'static str>, anon_key: Option<&'static str>) -> Self {
        Self { url, anon_key }
    }

    pub fn from_config() -> Self {
        let conf = config();
        Self::new(conf.supabase_url, conf.supabase_anon_key)
    }

    fn url(&self) -> Result<&'static str, AppError> {
        required(self.url, "PORTFOLIO_SUPABASE_URL")
    }

    fn anon_key(&self) -> Result<&'static str, AppError> {
        required(self.anon_key, "PORTFOLIO_SUPABASE_ANON_KEY")
    }

    fn auth_headers(key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", key.to_string()),
            ("Authorization", format!("Bearer {key}")),
        ]
    }

    fn upload_headers(key: &str, options: &UploadOptions) -> Vec<(&'static str, String)> {
        let mut headers = Self::auth_headers(key);
        headers.push(("x-upsert", options.upsert.to_string()));
        headers.push(("cache-control", format!("max-age={}", options.cache_control)));
        headers.push(("content-type", options.content_type.clone()));
        headers
    }
}

pub fn public_object_url(base: &str, bucket: &str, key: &str) -> String {
    format!("{base}/storage/v1/object/public/{bucket}/{key}")
}

pub fn object_url(base: &str, bucket: &str, key: &str) -> String {
    format!("{base}/storage/v1/object/{bucket}/{key}")
}

pub fn table_url(base: &str, table: &str) -> String {
    format!("{base}/rest/v1/{table}")
}

/// Best human readable message out of a failed Supabase response body.
fn error_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
    parsed
        .message
        .or(parsed.error)
        .or(parsed.msg)
        .filter(|m| !m.trim().is_empty())
        .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
        .unwrap_or_else(|| match StatusCode::from_u16(status) {
            Ok(code) => format!("Request failed with status {code}"),
            Err(_) => format!("Request failed with status {status}"),
        })
}

async fn failure_text(res: Response) -> String {
    let status = res.status();
    let body = res.text().await.unwrap_or_default();
    error_message(status, &body)
}

#[async_trait(?Send)]
impl ObjectStore for SupabaseClient {
    /// Public buckets are addressable without a round trip.
    async fn public_url(&self, bucket: &str, key: &str) -> Result<String, AppError> {
        Ok(public_object_url(self.url()?, bucket, key))
    }

    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        file: &ImageFile,
        options: &UploadOptions,
    ) -> Result<(), AppError> {
        let url = object_url(self.url()?, bucket, key);
        let headers = Self::upload_headers(self.anon_key()?, options);
        let mut req = Request::post(&url);
        for (name, value) in headers {
            req = req.header(name, &value);
        }
        let res = req
            .body(js_sys::Uint8Array::from(file.bytes.as_slice()))?
            .send()
            .await?;
        if !res.ok() {
            return Err(AppError::Storage(failure_text(res).await));
        }
        log::info!("uploaded {} ({} bytes) to {bucket}/{key}", file.name, file.bytes.len());
        Ok(())
    }
}

#[async_trait(?Send)]
impl MessageStore for SupabaseClient {
    async fn insert(&self, record: &MessageRecord) -> Result<(), AppError> {
        let url = table_url(self.url()?, MESSAGES_TABLE);
        let headers = Self::auth_headers(self.anon_key()?);
        let mut req = Request::post(&url).header("Prefer", "return=minimal");
        for (name, value) in headers {
            req = req.header(name, &value);
        }
        let res = req.json(record)?.send().await?;
        if !res.ok() {
            return Err(AppError::Datastore(failure_text(res).await));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let base = "https://abc.supabase.co";
        assert_eq!(
            public_object_url(base, "portfolio", "profile.jpg"),
            "https://abc.supabase.co/storage/v1/object/public/portfolio/profile.jpg"
        );
        assert_eq!(
            object_url(base, "portfolio", "profile.jpg"),
            "https://abc.supabase.co/storage/v1/object/portfolio/profile.jpg"
        );
        assert_eq!(
            table_url(base, MESSAGES_TABLE),
            "https://abc.supabase.co/rest/v1/messages"
        );
    }

    #[test]
    fn test_upload_headers() {
        let options = UploadOptions {
            upsert: true,
            cache_control: 3600,
            content_type: "image/png".to_string(),
        };
        let headers = SupabaseClient::upload_headers("anon", &options);
        let find = |name: &str| {
            headers
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(find("apikey"), Some("anon"));
        assert_eq!(find("Authorization"), Some("Bearer anon"));
        assert_eq!(find("x-upsert"), Some("true"));
        assert_eq!(find("cache-control"), Some("max-age=3600"));
        assert_eq!(find("content-type"), Some("image/png"));
    }

    #[test]
    fn test_error_message_prefers_backend_text() {
        let body = r#"{"statusCode":"403","error":"Unauthorized","message":"new row violates row-level security policy"}"#;
        assert_eq!(
            error_message(400, body),
            "new row violates row-level security policy"
        );
        assert_eq!(error_message(400, r#"{"error":"Bucket not found"}"#), "Bucket not found");
        assert_eq!(error_message(502, "Bad gateway\n"), "Bad gateway");
        assert_eq!(
            error_message(500, ""),
            "Request failed with status 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_client_reports_variable() {
        let client = SupabaseClient::new(None, None);
        let err = client.public_url("portfolio", "profile.jpg").await.unwrap_err();
        assert_eq!(err, AppError::NotConfigured("PORTFOLIO_SUPABASE_URL"));

        let client = SupabaseClient::new(Some("https://abc.supabase.co"), None);
        let record = MessageRecord {
            name: "a".to_string(),
            email: "b@c.d".to_string(),
            message: "hi".to_string(),
        };
        let err = client.insert(&record).await.unwrap_err();
        assert_eq!(err, AppError::NotConfigured("PORTFOLIO_SUPABASE_ANON_KEY"));
    }
}
