use super::*;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(appliance_endpoint("5"), "/api/appliances/5");
    assert_eq!(request_status_endpoint("r1"), "/api/service-requests/r1/status");
    assert_eq!(request_complete_endpoint("r1"), "/api/service-requests/r1/complete");
    assert_eq!(assign_endpoint("9"), "/api/admin/service-requests/9/assign");
    assert_eq!(expiring_endpoint(30), "/api/notifications/expiring?days=30");
}

#[test]
fn classify_response_passes_success_body_through() {
    assert_eq!(classify_response(200, "[]".to_owned()), Ok("[]".to_owned()));
    assert_eq!(classify_response(204, String::new()), Ok(String::new()));
}

#[test]
fn classify_response_maps_401_to_unauthorized() {
    assert_eq!(
        classify_response(401, r#"{"message":"expired"}"#.to_owned()),
        Err(ApiError::Unauthorized)
    );
}

#[test]
fn classify_response_prefers_backend_message() {
    let err = classify_response(
        400,
        r#"{"error":"Bad Request","status":400,"message":"Serial number already registered"}"#.to_owned(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Serial number already registered");
}

#[test]
fn classify_response_falls_back_to_error_then_status() {
    let err = classify_response(403, r#"{"error":"Forbidden"}"#.to_owned()).unwrap_err();
    assert_eq!(err.to_string(), "Forbidden");
    let err = classify_response(502, "<html>bad gateway</html>".to_owned()).unwrap_err();
    assert_eq!(
        err,
        ApiError::Server {
            status: 502,
            message: "Request failed (502).".to_owned()
        }
    );
}

#[test]
fn decode_body_treats_empty_as_null() {
    let v: Option<NotificationReport> = decode_body("  ").unwrap();
    assert_eq!(v, None);
    let v: NotificationReport = decode_body(r#"{"sent":3}"#).unwrap();
    assert_eq!(v.sent, 3);
    assert!(matches!(decode_body::<Vec<Appliance>>("{"), Err(ApiError::Decode(_))));
}

#[test]
fn credentials_from_login_body_accepts_full_triple() {
    let creds =
        credentials_from_login_body(200, r#"{"token":"tok1","username":"alice","role":"ROLE_TECHNICIAN"}"#).unwrap();
    assert_eq!(creds.token(), "tok1");
    assert_eq!(creds.username(), "alice");
    assert_eq!(creds.role(), Role::Technician);
}

#[test]
fn credentials_from_login_body_rejects_partial_or_unknown_role() {
    for body in [
        r#"{"token":"tok1","username":"alice"}"#,
        r#"{"token":"tok1","username":"alice","role":"ROLE_JANITOR"}"#,
        "not json",
    ] {
        let err = credentials_from_login_body(200, body).unwrap_err();
        assert_eq!(err.user_message(), session::error::AUTH_REJECTED_FALLBACK, "body: {body}");
    }
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_unavailable() {
    let client = ApiClient::new("", "tok");
    let result = block_on(client.list_appliances());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that never suspends.
#[cfg(not(feature = "csr"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
