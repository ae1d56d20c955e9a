//! Client-side form validation, applied before any request is sent.
//!
//! Validators trim input and return the cleaned value or a message ready to
//! show beside the form.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{ApplianceInput, Completion};
use crate::util::warranty::parse_date;

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn required(raw: &str, message: &'static str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(message);
    }
    Ok(value.to_owned())
}

pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = required(raw, "Enter your email.")?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.ends_with('.') => Ok(email),
        _ => Err("Enter a valid email address."),
    }
}

pub fn validate_date(raw: &str, message: &'static str) -> Result<String, &'static str> {
    let value = raw.trim();
    parse_date(value).map(|_| value.to_owned()).ok_or(message)
}

pub fn non_negative(raw: &str, message: &'static str) -> Result<f64, &'static str> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or(message)
}

/// Raw appliance form fields, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplianceDraft {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub warranty_expiry_date: String,
}

impl From<&ApplianceInput> for ApplianceDraft {
    fn from(input: &ApplianceInput) -> Self {
        Self {
            name: input.name.clone(),
            brand: input.brand.clone(),
            model: input.model.clone(),
            serial_number: input.serial_number.clone(),
            purchase_date: input.purchase_date.clone(),
            warranty_expiry_date: input.warranty_expiry_date.clone(),
        }
    }
}

pub fn validate_appliance(draft: &ApplianceDraft) -> Result<ApplianceInput, &'static str> {
    let name = required(&draft.name, "Enter the appliance name.")?;
    let brand = required(&draft.brand, "Enter the brand.")?;
    let model = required(&draft.model, "Enter the model.")?;
    let serial_number = required(&draft.serial_number, "Enter the serial number.")?;
    let purchase_date = validate_date(&draft.purchase_date, "Purchase date must be YYYY-MM-DD.")?;
    let warranty_expiry_date =
        validate_date(&draft.warranty_expiry_date, "Warranty expiry date must be YYYY-MM-DD.")?;
    if parse_date(&warranty_expiry_date) < parse_date(&purchase_date) {
        return Err("Warranty expiry cannot be before the purchase date.");
    }
    Ok(ApplianceInput {
        name,
        brand,
        model,
        serial_number,
        purchase_date,
        warranty_expiry_date,
    })
}

/// Raw completion form fields, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompletionDraft {
    pub notes: String,
    pub labor_hours: String,
    pub parts_cost: String,
    pub completed_on: String,
}

pub fn validate_completion(draft: &CompletionDraft) -> Result<Completion, &'static str> {
    Ok(Completion {
        notes: required(&draft.notes, "Describe the work performed.")?,
        labor_hours: non_negative(&draft.labor_hours, "Labor hours must be a non-negative number.")?,
        parts_cost: non_negative(&draft.parts_cost, "Parts cost must be a non-negative number.")?,
        completed_on: validate_date(&draft.completed_on, "Completion date must be YYYY-MM-DD.")?,
    })
}
