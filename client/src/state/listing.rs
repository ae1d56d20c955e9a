//! Load/error bookkeeping for a dashboard list section.
//!
//! DESIGN
//! ======
//! Each dashboard section owns one `RwSignal<Listing<T>>` so a failed fetch in
//! one section leaves the others rendering their data.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

/// Records for one section plus fetch status.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> Listing<T> {
    /// Mark a fetch as started. Existing items stay visible until replaced.
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch result. On error the previous items are kept.
    pub fn finish(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}
