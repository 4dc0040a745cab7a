//! Defines the data structure for a single adoption record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One registered animal: its name paired with the adoption fee.
///
/// Names are not unique: a later registration with the same name creates a
/// second, independent record, and lookups return the first match in
/// insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdoptionRecord {
    /// Animal name exactly as entered (no trimming or case normalization).
    pub name: String,
    /// Adoption fee in dollars. Always finite and non-negative once stored.
    pub fee: f64,
    /// Timestamp of registration (set at insertion).
    pub registered_at: DateTime<Utc>,
}

impl AdoptionRecord {
    /// Creates a record for `name` and `fee`, stamped with the current time.
    ///
    /// Validity of the fields is the registry's concern; this constructor
    /// only assembles the struct.
    pub fn new(name: &str, fee: f64) -> Self {
        Self {
            name: name.to_string(),
            fee,
            registered_at: Utc::now(),
        }
    }
}
