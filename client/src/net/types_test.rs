use super::*;
use serde_json::json;

#[test]
fn appliance_decodes_camel_case_with_numeric_id() {
    let a: Appliance = serde_json::from_value(json!({
        "id": 7,
        "name": "Dishwasher",
        "brand": "Bosch",
        "model": "SMS46",
        "serialNumber": "SN-1",
        "purchaseDate": "2024-01-10",
        "warrantyExpiryDate": "2026-01-10"
    }))
    .unwrap();
    assert_eq!(a.id, "7");
    assert_eq!(a.serial_number, "SN-1");
    assert_eq!(a.warranty_expiry_date, "2026-01-10");
    assert_eq!(a.owner_username, None);
}

#[test]
fn appliance_input_serializes_camel_case() {
    let input = ApplianceInput {
        name: "Fridge".to_owned(),
        serial_number: "X".to_owned(),
        purchase_date: "2024-02-01".to_owned(),
        warranty_expiry_date: "2025-02-01".to_owned(),
        ..ApplianceInput::default()
    };
    let v = serde_json::to_value(&input).unwrap();
    assert_eq!(v["serialNumber"], "X");
    assert_eq!(v["warrantyExpiryDate"], "2025-02-01");
    assert!(v.get("serial_number").is_none());
}

#[test]
fn request_status_parses_wire_names_and_unknown() {
    let s: RequestStatus = serde_json::from_value(json!("IN_PROGRESS")).unwrap();
    assert_eq!(s, RequestStatus::InProgress);
    let s: RequestStatus = serde_json::from_value(json!("ON_HOLD")).unwrap();
    assert_eq!(s, RequestStatus::Unknown);
    assert_eq!(serde_json::to_value(RequestStatus::InProgress).unwrap(), json!("IN_PROGRESS"));
}

#[test]
fn request_status_actions() {
    assert!(RequestStatus::Pending.is_assignable());
    assert!(!RequestStatus::Completed.is_assignable());
    assert!(RequestStatus::Assigned.can_start());
    assert!(!RequestStatus::InProgress.can_start());
    assert!(RequestStatus::InProgress.can_complete());
    assert!(!RequestStatus::Cancelled.can_complete());
}

#[test]
fn service_request_tolerates_missing_optionals() {
    let r: ServiceRequest = serde_json::from_value(json!({
        "id": "r1",
        "applianceId": 3,
        "description": "Leaks"
    }))
    .unwrap();
    assert_eq!(r.appliance_id, "3");
    assert_eq!(r.status, RequestStatus::Pending);
    assert!(r.completion.is_none());
}

#[test]
fn signup_request_omits_missing_phone_and_uses_role_wire_name() {
    let body = SignupRequest {
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "hunter22".to_owned(),
        role: session::Role::Homeowner,
        phone: None,
    };
    let v = serde_json::to_value(&body).unwrap();
    assert_eq!(v["role"], "ROLE_HOMEOWNER");
    assert!(v.get("phone").is_none());
}

#[test]
fn assignment_sends_numeric_ids_as_numbers() {
    let v = serde_json::to_value(Assignment { technician_id: "12".to_owned() }).unwrap();
    assert_eq!(v, json!({ "technicianId": 12 }));
    let v = serde_json::to_value(Assignment { technician_id: "t-9".to_owned() }).unwrap();
    assert_eq!(v, json!({ "technicianId": "t-9" }));
}

#[test]
fn invalid_id_type_is_rejected() {
    let err = serde_json::from_value::<Technician>(json!({ "id": true, "username": "t" }));
    assert!(err.is_err());
}
