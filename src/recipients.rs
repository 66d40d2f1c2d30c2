use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::RecipientError;

// @module: Recipient list management

/// Maximum number of addresses a dispatch may target
pub const MAX_RECIPIENTS: usize = 10;

// Conventional local@domain.tld shape: non-whitespace local part, "@",
// non-whitespace domain containing a dot, non-whitespace TLD.
// No DNS or deliverability check.
static ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid address pattern"));

/// Check whether a candidate string has the shape of an email address
pub fn validate_address(candidate: &str) -> bool {
    ADDRESS_PATTERN.is_match(candidate)
}

/// Ordered, deduplicated, capacity-bounded set of destination addresses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientList {
    entries: Vec<String>,
}

impl RecipientList {
    /// Create an empty recipient list
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a candidate address.
    ///
    /// The candidate is trimmed first; an input that is empty after trimming
    /// is a no-op and returns `Ok(false)`. Otherwise the candidate must have
    /// a valid shape, must not already be present (case-sensitive exact
    /// match) and the list must be below capacity. Insertion order is
    /// preserved.
    pub fn add(&mut self, candidate: &str) -> Result<bool, RecipientError> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return Ok(false);
        }
        if !validate_address(candidate) {
            return Err(RecipientError::InvalidFormat);
        }
        if self.entries.iter().any(|entry| entry == candidate) {
            return Err(RecipientError::Duplicate);
        }
        if self.entries.len() >= MAX_RECIPIENTS {
            return Err(RecipientError::CapacityExceeded);
        }
        self.entries.push(candidate.to_string());
        Ok(true)
    }

    /// Remove an address by exact match; absent targets are a no-op
    pub fn remove(&mut self, target: &str) {
        if let Some(position) = self.entries.iter().position(|entry| entry == target) {
            self.entries.remove(position);
        }
    }

    /// Drop all addresses
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of addresses in the list
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no addresses
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Addresses in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Iterate over the addresses in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }
}
