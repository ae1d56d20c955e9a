//! Warranty status arithmetic for appliance badges.

#[cfg(test)]
#[path = "warranty_test.rs"]
mod warranty_test;

use time::Date;
use time::macros::format_description;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarrantyStatus {
    /// More than the window remains.
    Active,
    /// Expires within the window; carries the days left (0 = today).
    ExpiringSoon(u32),
    Expired,
    /// Missing or malformed expiry date.
    Unknown,
}

impl WarrantyStatus {
    pub fn label(self) -> String {
        match self {
            Self::Active => "Active".to_owned(),
            Self::ExpiringSoon(0) => "Expires today".to_owned(),
            Self::ExpiringSoon(1) => "Expires in 1 day".to_owned(),
            Self::ExpiringSoon(days) => format!("Expires in {days} days"),
            Self::Expired => "Expired".to_owned(),
            Self::Unknown => "Unknown".to_owned(),
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Active => "badge badge--ok",
            Self::ExpiringSoon(_) => "badge badge--warn",
            Self::Expired => "badge badge--expired",
            Self::Unknown => "badge badge--muted",
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Classify `expiry` relative to `today` with an "expiring soon" window of `window_days`.
pub fn classify(expiry: &str, today: Option<Date>, window_days: u32) -> WarrantyStatus {
    let (Some(expiry), Some(today)) = (parse_date(expiry), today) else {
        return WarrantyStatus::Unknown;
    };
    let remaining = (expiry - today).whole_days();
    match u32::try_from(remaining) {
        Err(_) => WarrantyStatus::Expired,
        Ok(days) if days <= window_days => WarrantyStatus::ExpiringSoon(days),
        Ok(_) => WarrantyStatus::Active,
    }
}

/// The user's local calendar date.
pub fn today() -> Option<Date> {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1).ok()?;
        let month = time::Month::try_from(month).ok()?;
        let day = u8::try_from(now.get_date()).ok()?;
        let year = i32::try_from(now.get_full_year()).ok()?;
        Date::from_calendar_date(year, month, day).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        Some(time::OffsetDateTime::now_utc().date())
    }
}
