//! REST API helpers for communicating with the Warranty Tracker backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs returning `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Auth endpoints return `session::AuthError` so the login and signup pages
//! show the backend's message or a generic fallback. Every other call returns
//! `ApiError`; `ApiError::Unauthorized` tells the page to log the user out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
#[cfg(any(test, feature = "csr"))]
use session::ApiFailure;
use session::{AuthError, Credentials, Role};

#[cfg(any(test, feature = "csr"))]
use super::types::LoginResponse;
use super::types::{
    Appliance, ApplianceInput, Assignment, Completion, ExpiryNotice, NewServiceRequest, NotificationReport,
    ServiceRequest, SignupRequest, Technician,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The bearer token was rejected; the session is no longer valid.
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Unable to reach the server. Please try again later.")]
    Network,
    #[error("unexpected response from server: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

fn appliance_endpoint(id: &str) -> String {
    format!("/api/appliances/{id}")
}

fn request_status_endpoint(id: &str) -> String {
    format!("/api/service-requests/{id}/status")
}

fn request_complete_endpoint(id: &str) -> String {
    format!("/api/service-requests/{id}/complete")
}

fn assign_endpoint(id: &str) -> String {
    format!("/api/admin/service-requests/{id}/assign")
}

fn expiring_endpoint(days: u32) -> String {
    format!("/api/notifications/expiring?days={days}")
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(status: u16) -> String {
    format!("Request failed ({status}).")
}

/// Map a finished HTTP exchange onto the body text or an `ApiError`.
#[cfg(any(test, feature = "csr"))]
fn classify_response(status: u16, body: String) -> Result<String, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        let message = ApiFailure::from_body(&body)
            .and_then(|failure| failure.message.or(failure.error))
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| request_failed_message(status));
        return Err(ApiError::Server { status, message });
    }
    Ok(body)
}

/// Decode a success body; empty bodies decode as JSON `null`.
#[cfg(any(test, feature = "csr"))]
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let raw = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Turn a successful login body into credentials.
#[cfg(any(test, feature = "csr"))]
fn credentials_from_login_body(status: u16, body: &str) -> Result<Credentials, AuthError> {
    let parsed: LoginResponse = serde_json::from_str(body).unwrap_or_default();
    Credentials::from_parts(parsed.token, parsed.username, parsed.role).ok_or_else(|| {
        log::warn!("login response missing token, username, or a known role");
        AuthError::Rejected { status, message: None }
    })
}

/// Exchange email, password, and selected role for a credential triple.
///
/// # Errors
///
/// `AuthError::NetworkUnavailable` when no response arrives, otherwise
/// `AuthError::Rejected` carrying the backend message when it sent one.
pub async fn login(base_url: &str, email: &str, password: &str, role: Role) -> Result<Credentials, AuthError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password, "role": role });
        let (status, body) = post_public(base_url, "/api/auth/login", &payload).await?;
        if !(200..300).contains(&status) {
            return Err(AuthError::rejected(status, &body));
        }
        credentials_from_login_body(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base_url, email, password, role);
        Err(AuthError::NetworkUnavailable)
    }
}

/// Register a new account. Success carries no session; the user logs in next.
///
/// # Errors
///
/// Same taxonomy as [`login`].
pub async fn signup(base_url: &str, request: &SignupRequest) -> Result<(), AuthError> {
    #[cfg(feature = "csr")]
    {
        let (status, body) = post_public(base_url, "/api/auth/signup", request).await?;
        if !(200..300).contains(&status) {
            return Err(AuthError::rejected(status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base_url, request);
        Err(AuthError::NetworkUnavailable)
    }
}

#[cfg(feature = "csr")]
async fn post_public<B: Serialize + ?Sized>(base_url: &str, path: &str, body: &B) -> Result<(u16, String), AuthError> {
    let url = format!("{base_url}{path}");
    let resp = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|e| {
            log::error!("encode {path} body: {e}");
            AuthError::NetworkUnavailable
        })?
        .send()
        .await
        .map_err(|e| {
            log::warn!("{path} request failed: {e}");
            AuthError::NetworkUnavailable
        })?;
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    Ok((status, text))
}

/// Authenticated REST client bound to one session token.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: &'static str,
    token: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &'static str, token: impl Into<String>) -> Self {
        Self {
            base_url,
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.url(path);
            let builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            }
            .header("Authorization", &format!("Bearer {}", self.token));
            let request = match body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Decode(e.to_string()))?;
            log::debug!("{} {path}", method.as_str());
            let resp = request.send().await.map_err(|e| {
                log::warn!("{} {path} failed: {e}", method.as_str());
                ApiError::Network
            })?;
            let status = resp.status();
            let text = resp.text().await.map_err(|_| ApiError::Network)?;
            let text = classify_response(status, text)?;
            decode_body(&text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, self.url(path), &self.token, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send::<T, ()>(Method::Get, path, None).await
    }

    // Homeowner

    pub async fn list_appliances(&self) -> Result<Vec<Appliance>, ApiError> {
        self.get("/api/appliances").await
    }

    pub async fn create_appliance(&self, input: &ApplianceInput) -> Result<Appliance, ApiError> {
        self.send(Method::Post, "/api/appliances", Some(input)).await
    }

    pub async fn update_appliance(&self, id: &str, input: &ApplianceInput) -> Result<Appliance, ApiError> {
        self.send(Method::Put, &appliance_endpoint(id), Some(input)).await
    }

    pub async fn delete_appliance(&self, id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.send::<_, ()>(Method::Delete, &appliance_endpoint(id), None).await?;
        Ok(())
    }

    pub async fn list_my_requests(&self) -> Result<Vec<ServiceRequest>, ApiError> {
        self.get("/api/service-requests").await
    }

    pub async fn open_request(&self, request: &NewServiceRequest) -> Result<ServiceRequest, ApiError> {
        self.send(Method::Post, "/api/service-requests", Some(request)).await
    }

    pub async fn expiring(&self, days: u32) -> Result<Vec<ExpiryNotice>, ApiError> {
        self.get(&expiring_endpoint(days)).await
    }

    // Technician

    pub async fn list_assigned(&self) -> Result<Vec<ServiceRequest>, ApiError> {
        self.get("/api/service-requests/assigned").await
    }

    pub async fn start_request(&self, id: &str) -> Result<ServiceRequest, ApiError> {
        let body = serde_json::json!({ "status": "IN_PROGRESS" });
        self.send(Method::Put, &request_status_endpoint(id), Some(&body)).await
    }

    pub async fn complete_request(&self, id: &str, completion: &Completion) -> Result<ServiceRequest, ApiError> {
        self.send(Method::Post, &request_complete_endpoint(id), Some(completion))
            .await
    }

    // Admin

    pub async fn list_all_requests(&self) -> Result<Vec<ServiceRequest>, ApiError> {
        self.get("/api/admin/service-requests").await
    }

    pub async fn list_technicians(&self) -> Result<Vec<Technician>, ApiError> {
        self.get("/api/admin/technicians").await
    }

    pub async fn assign_technician(&self, request_id: &str, technician_id: &str) -> Result<ServiceRequest, ApiError> {
        let body = Assignment {
            technician_id: technician_id.to_owned(),
        };
        self.send(Method::Put, &assign_endpoint(request_id), Some(&body)).await
    }

    pub async fn list_all_appliances(&self) -> Result<Vec<Appliance>, ApiError> {
        self.get("/api/admin/appliances").await
    }

    pub async fn send_expiry_notifications(&self, days: u32) -> Result<NotificationReport, ApiError> {
        let body = serde_json::json!({ "days": days });
        let report: Option<NotificationReport> = self
            .send(Method::Post, "/api/admin/notifications/send", Some(&body))
            .await?;
        Ok(report.unwrap_or_default())
    }
}
