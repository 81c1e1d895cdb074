//! HTTP client implementation for the COROS web API.
//!
//! This module provides a reqwest-based implementation of the
//! [`CorosClient`](crate::CorosClient) trait.

use crate::{CorosClient, CorosError, extension_for_file_type};
use async_trait::async_trait;
use md5::{Digest, Md5};
use secrecy::{ExposeSecret, SecretString};

/// Account-type discriminator for email-based login, per the vendor
/// contract.
const EMAIL_ACCOUNT_TYPE: u8 = 2;

/// Session client for the COROS API using reqwest.
///
/// Holds one persistent `reqwest::Client` for its lifetime. The
/// connection pool is released when the value is dropped, on every exit
/// path; no requests can be issued afterwards.
#[derive(Clone, Debug)]
pub struct ReqwestCorosClient {
    base_url: String,
    email: String,
    password: SecretString,
    access_token: Option<String>,
    client: reqwest::Client,
}

impl ReqwestCorosClient {
    /// Create a new session client.
    ///
    /// # Arguments
    /// * `base_url` - Regional endpoint origin (e.g. "https://teameuapi.coros.com")
    /// * `email` - COROS account email
    /// * `password` - COROS account password, held in memory only
    pub fn new(base_url: &str, email: impl Into<String>, password: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            email: email.into(),
            password,
            access_token: None,
            client,
        }
    }

    pub fn from_config(config: crate::config::Config) -> Self {
        Self::new(&config.base_url, config.email, config.password)
    }

    /// Token stored by the last successful login, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Hex MD5 digest of the raw password bytes. This is the vendor's
    /// required submission format (unsalted) and must match bit-for-bit;
    /// it is not a locally chosen security control.
    fn password_digest(&self) -> String {
        hex::encode(Md5::digest(self.password.expose_secret().as_bytes()))
    }

    /// Guard for operations that require a completed login. Local check,
    /// no network call.
    fn require_token(&self) -> Result<&str, CorosError> {
        self.access_token
            .as_deref()
            .ok_or(CorosError::NotAuthenticated)
    }

    /// Build a GET request, attaching the session token when present.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_token(self.client.get(url))
    }

    /// Build a POST request, attaching the session token when present.
    fn post_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_token(self.client.post(url))
    }

    fn with_token(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.access_token {
            Some(token) => req.header("accessToken", token),
            None => req,
        }
    }

    /// Check the status and parse the body as loose JSON.
    async fn handle_json(&self, resp: reqwest::Response) -> Result<serde_json::Value, CorosError> {
        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// Extract status and a body snippet from a failed response.
    async fn error_from_response(resp: reqwest::Response) -> CorosError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body: String = body.chars().take(256).collect();
        CorosError::Transport { status, body }
    }
}

/// Vendor error payloads carry a top-level `message`; fall back to a
/// placeholder when it is absent.
fn message_or_unknown(payload: &serde_json::Value) -> String {
    payload
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("unknown error")
        .to_string()
}

#[async_trait]
impl CorosClient for ReqwestCorosClient {
    async fn login(&mut self) -> Result<(), CorosError> {
        let url = format!("{}/account/login", self.base_url);
        let body = serde_json::json!({
            "account": self.email,
            "accountType": EMAIL_ACCOUNT_TYPE,
            "pwd": self.password_digest(),
        });
        let resp = self.post_request(&url).json(&body).send().await?;
        let payload = self.handle_json(resp).await?;

        let token = payload
            .get("data")
            .and_then(|d| d.get("accessToken"))
            .and_then(|t| t.as_str());
        let Some(token) = token else {
            return Err(CorosError::Auth(message_or_unknown(&payload)));
        };
        self.access_token = Some(token.to_string());
        tracing::debug!(account = %self.email, "login succeeded");
        Ok(())
    }

    async fn get_activities(
        &self,
        size: u32,
        page_number: u32,
    ) -> Result<serde_json::Value, CorosError> {
        self.require_token()?;
        let url = format!("{}/activity/query", self.base_url);
        let qp = [
            ("size", size.to_string()),
            ("pageNumber", page_number.to_string()),
            // Empty mode filter means "all modes".
            ("modeList", String::new()),
        ];
        let resp = self.get_request(&url).query(&qp).send().await?;
        self.handle_json(resp).await
    }

    async fn download_activity(
        &self,
        label_id: &str,
        sport_type: i64,
        file_type: &str,
    ) -> Result<(Vec<u8>, &'static str), CorosError> {
        self.require_token()?;

        // Resolution is a POST despite being read-only, and the
        // parameters travel as query parameters. Upstream contract.
        let url = format!("{}/activity/detail/download", self.base_url);
        let qp = [
            ("labelId", label_id.to_string()),
            ("sportType", sport_type.to_string()),
            ("fileType", file_type.to_string()),
        ];
        let resp = self.post_request(&url).query(&qp).send().await?;
        let payload = self.handle_json(resp).await?;

        let file_url = payload
            .get("data")
            .and_then(|d| d.get("fileUrl"))
            .and_then(|u| u.as_str());
        let Some(file_url) = file_url else {
            return Err(CorosError::DownloadResolution(message_or_unknown(&payload)));
        };

        // The resolved URL is signed and time-limited; fetch it right away.
        let file_resp = self.get_request(file_url).send().await?;
        if !file_resp.status().is_success() {
            return Err(Self::error_from_response(file_resp).await);
        }
        let bytes = file_resp.bytes().await?.to_vec();
        tracing::debug!(label_id, len = bytes.len(), "downloaded activity file");
        Ok((bytes, extension_for_file_type(file_type)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_password(pwd: &str) -> ReqwestCorosClient {
        ReqwestCorosClient::new(
            "http://localhost",
            "rider@example.com",
            SecretString::new(pwd.into()),
        )
    }

    #[test]
    fn password_digest_matches_reference_md5() {
        // Standard 32-char lowercase hex MD5 of the raw bytes.
        assert_eq!(
            client_with_password("password").password_digest(),
            "5f4dcc3b5aa765d61d8327deb882cf99"
        );
        assert_eq!(
            client_with_password("").password_digest(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn password_digest_is_lowercase_hex() {
        let digest = client_with_password("s3cret!").password_digest();
        assert_eq!(digest.len(), 32);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn new_trims_trailing_slash() {
        let client = ReqwestCorosClient::new(
            "http://localhost/",
            "rider@example.com",
            SecretString::new("pwd".into()),
        );
        assert_eq!(client.base_url, "http://localhost");
    }

    #[test]
    fn require_token_fails_before_login() {
        let client = client_with_password("pwd");
        assert!(matches!(
            client.require_token(),
            Err(CorosError::NotAuthenticated)
        ));
    }

    #[test]
    fn message_or_unknown_prefers_body_message() {
        let with_message = serde_json::json!({"message": "wrong password"});
        assert_eq!(message_or_unknown(&with_message), "wrong password");
        let without = serde_json::json!({"data": {}});
        assert_eq!(message_or_unknown(&without), "unknown error");
    }
}
