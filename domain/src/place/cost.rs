//! Free-text cost value object

use serde::{Deserialize, Serialize};

/// Marker that a place costs nothing
pub const FREE_MARKER: &str = "무료";

/// Cost as the catalog writes it, e.g. `성인 3,000원` or `무료`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EstimatedCost(String);

impl EstimatedCost {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mentions the free marker anywhere
    pub fn is_free(&self) -> bool {
        self.0.contains(FREE_MARKER)
    }

    /// All digits of the text read as one number
    ///
    /// `성인 3,000원` reads as 3000. Several prices in one text run together
    /// (`3,000원, 1,500원` reads as 30001500). `None` when the text has no
    /// digits or the number does not fit.
    pub fn amount(&self) -> Option<u64> {
        let digits: String = self.0.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            None
        } else {
            digits.parse().ok()
        }
    }
}

impl std::fmt::Display for EstimatedCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EstimatedCost {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_strips_non_digits() {
        assert_eq!(EstimatedCost::new("성인 3,000원").amount(), Some(3000));
        assert_eq!(EstimatedCost::new("성인 29,000원").amount(), Some(29000));
        assert_eq!(EstimatedCost::new("무료").amount(), None);
        assert_eq!(
            EstimatedCost::new("성인 3,000원, 청소년 1,500원").amount(),
            Some(30001500)
        );
    }

    #[test]
    fn test_is_free() {
        assert!(EstimatedCost::new("무료 (체험 프로그램 별도)").is_free());
        assert!(!EstimatedCost::new("성인 16,000원").is_free());
    }
}
