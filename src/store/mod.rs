//! In-memory stores backing the roster and training views.
//!
//! Nothing here is persisted; the stores live as long as the window.

pub mod catalog;
pub mod roster;

pub use catalog::TrainingCatalog;
pub use roster::EmployeeRoster;

use chrono::Utc;

/// Generate an id from the current time in milliseconds.
///
/// Bumps the value until `taken` reports it free, so two records created
/// in the same millisecond still get distinct ids.
pub(crate) fn timestamp_id(taken: impl Fn(&str) -> bool) -> String {
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let id = millis.to_string();
        if !taken(&id) {
            return id;
        }
        millis += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_id_is_numeric() {
        let id = timestamp_id(|_| false);
        assert!(id.parse::<i64>().is_ok());
    }

    #[test]
    fn test_timestamp_id_skips_taken() {
        let first = timestamp_id(|_| false);
        let second = timestamp_id(|id| id == first);
        assert_ne!(first, second);
    }
}
