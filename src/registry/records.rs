//! Provides the in-memory record store for adoption records.
//!
//! Includes capabilities for validating and appending new records and for
//! looking up an adoption fee by animal name. The store is append-only:
//! there is no update or delete, and contents are discarded on process exit.
//! Also contains the unit tests for the store's validation and lookup rules.

use crate::error::{AppError, Result};
use crate::models::AdoptionRecord;
use tracing::{debug, info};

/// The ordered, in-memory collection of adoption records.
///
/// Every stored element satisfies the add-time validity rules (non-empty
/// name, finite non-negative fee); the rules are enforced at insertion and
/// never re-checked afterwards.
#[derive(Debug, Default)]
pub struct Registry {
    records: Vec<AdoptionRecord>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        debug!("Creating empty adoption record registry");
        Self {
            records: Vec::new(),
        }
    }

    /// Validates and appends a new record.
    ///
    /// The name must contain at least one non-whitespace character and the
    /// fee must be a finite, non-negative number. The name is stored exactly
    /// as entered; the trim here only classifies whitespace-only input as
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidRecord` if either field is invalid; the
    /// store is left unmodified in that case.
    pub fn add(&mut self, name: &str, fee: f64) -> Result<()> {
        if name.trim().is_empty() || !fee.is_finite() || fee < 0.0 {
            debug!(
                "Rejected registration: name={:?}, fee={} (invalid name or fee)",
                name, fee
            );
            return Err(AppError::InvalidRecord);
        }

        let record = AdoptionRecord::new(name, fee);
        info!(
            "Registered {:?} with fee ${} at {}",
            record.name, record.fee, record.registered_at
        );
        self.records.push(record);
        Ok(())
    }

    /// Returns the adoption fee for `name`.
    ///
    /// Scans in insertion order and returns the fee of the first record
    /// whose name is an exact, case-sensitive match.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no record matches. This is an
    /// expected, recoverable outcome; callers display a message and carry
    /// on.
    pub fn adoption_fee(&self, name: &str) -> Result<f64> {
        self.records
            .iter()
            .find(|record| record.name == name)
            .map(|record| record.fee)
            .ok_or(AppError::NotFound)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_add_then_lookup_returns_exact_fee() {
        let mut registry = Registry::new();

        registry.add("Cat", 50.0).expect("valid record should add");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.adoption_fee("Cat").unwrap(), 50.0);
    }

    #[rstest]
    #[case("", 10.0)]
    #[case("   ", 10.0)]
    #[case("Dog", -5.0)]
    #[case("Dog", f64::NAN)]
    #[case("Dog", f64::INFINITY)]
    fn test_add_rejects_invalid_input(#[case] name: &str, #[case] fee: f64) {
        let mut registry = Registry::new();

        let result = registry.add(name, fee);

        assert!(matches!(result, Err(AppError::InvalidRecord)));
        // No partial insertion on failure.
        assert!(registry.is_empty());
    }

    #[test]
    fn test_failed_add_leaves_existing_records_untouched() {
        let mut registry = Registry::new();
        registry.add("Cat", 50.0).unwrap();

        let result = registry.add("", 10.0);

        assert!(matches!(result, Err(AppError::InvalidRecord)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.adoption_fee("Cat").unwrap(), 50.0);
    }

    #[test]
    fn test_lookup_on_empty_registry_is_not_found() {
        let registry = Registry::new();

        let result = registry.adoption_fee("Nonexistent");

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[test]
    fn test_lookup_with_no_matching_name_is_not_found() {
        let mut registry = Registry::new();
        registry.add("Cat", 50.0).unwrap();

        let result = registry.adoption_fee("Dog");

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[test]
    fn test_duplicate_names_return_first_inserted_fee() {
        let mut registry = Registry::new();
        registry.add("Cat", 50.0).unwrap();
        registry.add("Cat", 75.0).unwrap();

        // First match in insertion order wins.
        assert_eq!(registry.adoption_fee("Cat").unwrap(), 50.0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_name_matching_is_exact_and_case_sensitive() {
        let mut registry = Registry::new();
        registry.add("Cat", 50.0).unwrap();

        assert!(matches!(
            registry.adoption_fee("cat"),
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            registry.adoption_fee("Cat "),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_zero_fee_is_valid() {
        let mut registry = Registry::new();

        registry.add("Gerbil", 0.0).unwrap();

        assert_eq!(registry.adoption_fee("Gerbil").unwrap(), 0.0);
    }
}
