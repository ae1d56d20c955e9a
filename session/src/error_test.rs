use super::*;

#[test]
fn api_failure_parses_full_body() {
    let failure = ApiFailure::from_body(r#"{"error":"Unauthorized","status":401,"message":"Bad credentials"}"#);
    assert_eq!(
        failure,
        Some(ApiFailure {
            error: Some("Unauthorized".to_owned()),
            status: Some(401),
            message: Some("Bad credentials".to_owned()),
        })
    );
}

#[test]
fn api_failure_tolerates_missing_fields_and_garbage() {
    assert_eq!(ApiFailure::from_body("{}"), Some(ApiFailure::default()));
    assert_eq!(ApiFailure::from_body("<html>502</html>"), None);
    assert_eq!(ApiFailure::from_body(""), None);
}

#[test]
fn rejected_passes_backend_message_through() {
    let err = AuthError::rejected(401, r#"{"message":"Invalid email or password"}"#);
    assert_eq!(err.user_message(), "Invalid email or password");
}

#[test]
fn rejected_falls_back_to_generic_message() {
    for body in ["", "not json", r#"{"error":"x"}"#, r#"{"message":"   "}"#] {
        let err = AuthError::rejected(500, body);
        assert_eq!(err.user_message(), AUTH_REJECTED_FALLBACK, "body: {body:?}");
    }
}

#[test]
fn network_unavailable_uses_retry_message() {
    assert_eq!(AuthError::NetworkUnavailable.user_message(), NETWORK_UNAVAILABLE_MESSAGE);
}
