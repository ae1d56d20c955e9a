//! HTTP access to the Warranty Tracker REST API.

use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use session::{AuthError, Credentials, Role};

use crate::CliError;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: Option<String>,
    username: Option<String>,
    role: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Exchange email/password for a credential triple.
    pub async fn login(&self, email: &str, password: &str, role: Role) -> Result<Credentials, CliError> {
        let body = serde_json::json!({ "email": email, "password": password, "role": role });
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await
            .map_err(|error| {
                tracing::debug!(%error, "login request failed");
                AuthError::NetworkUnavailable
            })?;
        let status = response.status();
        let raw = response.text().await.map_err(|_| AuthError::NetworkUnavailable)?;
        if !status.is_success() {
            return Err(AuthError::rejected(status.as_u16(), &raw).into());
        }
        let parsed: LoginResponse = serde_json::from_str(&raw)?;
        Credentials::from_parts(parsed.token, parsed.username, parsed.role).ok_or(CliError::MalformedLoginResponse)
    }

    /// Register a new account.
    pub async fn signup(&self, body: Value) -> Result<Value, CliError> {
        let response = self
            .http
            .post(self.url("/api/auth/signup"))
            .json(&body)
            .send()
            .await
            .map_err(|_| AuthError::NetworkUnavailable)?;
        let status = response.status();
        let raw = response.text().await.map_err(|_| AuthError::NetworkUnavailable)?;
        if !status.is_success() {
            return Err(AuthError::rejected(status.as_u16(), &raw).into());
        }
        Ok(parse_body(&raw))
    }

    /// Authenticated JSON request. Empty success bodies come back as `null`.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, CliError> {
        let token = self.token.as_deref().ok_or(CliError::NotLoggedIn)?;
        let mut request = self.http.request(method.clone(), self.url(path)).bearer_auth(token);
        if let Some(body) = body {
            request = request.json(&body);
        }
        tracing::debug!(%method, path, "api request");
        let response = request.send().await?;
        let status = response.status();
        let raw = response.text().await?;
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CliError::SessionExpired);
        }
        if !status.is_success() {
            return Err(CliError::Api {
                status: status.as_u16(),
                message: failure_message(&raw),
            });
        }
        Ok(parse_body(&raw))
    }
}

fn parse_body(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

fn failure_message(raw: &str) -> String {
    session::ApiFailure::from_body(raw)
        .and_then(|failure| failure.message.or(failure.error))
        .unwrap_or_else(|| "request failed".to_owned())
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
