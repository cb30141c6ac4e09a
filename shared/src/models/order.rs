//! Order status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status, an ordered progression
///
/// Serialized with the display labels used by the POS frontend
/// (`"In Progress"`, `"Ready"`, `"Completed"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Ready")]
    Ready,
    #[serde(rename = "Completed")]
    Completed,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Ready => "Ready",
            Self::Completed => "Completed",
        }
    }

    /// Completed orders are locked and release their table
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Forward-only progression; skipping `Ready` and re-applying the
    /// current status are both allowed.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        next >= *self
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_labels() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        let status: OrderStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(status, OrderStatus::Completed);
        assert!(serde_json::from_str::<OrderStatus>("\"Cancelled\"").is_err());
    }

    #[test]
    fn test_default_is_in_progress() {
        assert_eq!(OrderStatus::default(), OrderStatus::InProgress);
    }

    #[test]
    fn test_forward_transitions() {
        use OrderStatus::*;
        assert!(InProgress.can_transition_to(Ready));
        assert!(InProgress.can_transition_to(Completed));
        assert!(Ready.can_transition_to(Completed));
        assert!(Ready.can_transition_to(Ready));
        assert!(Completed.can_transition_to(Completed));
    }

    #[test]
    fn test_backward_transitions_rejected() {
        use OrderStatus::*;
        assert!(!Completed.can_transition_to(InProgress));
        assert!(!Completed.can_transition_to(Ready));
        assert!(!Ready.can_transition_to(InProgress));
    }
}
