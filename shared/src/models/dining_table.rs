//! Dining table status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Table occupancy state (桌台占用状态)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TableStatus {
    #[default]
    Available,
    Booked,
}

impl TableStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Booked => "Booked",
        }
    }
}

impl fmt::Display for TableStatus {
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
            serde_json::to_string(&TableStatus::Booked).unwrap(),
            "\"Booked\""
        );
        let status: TableStatus = serde_json::from_str("\"Available\"").unwrap();
        assert_eq!(status, TableStatus::Available);
    }
}
