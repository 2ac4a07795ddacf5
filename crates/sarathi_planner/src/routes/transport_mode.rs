use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bus,
    Train,
    Metro,
    Walking,
    Cycling,
}

impl TransportMode {
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Metro,
        TransportMode::Walking,
        TransportMode::Cycling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Metro => "metro",
            TransportMode::Walking => "walking",
            TransportMode::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Bus => "Bus",
            TransportMode::Train => "Train",
            TransportMode::Metro => "Metro",
            TransportMode::Walking => "Walking",
            TransportMode::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TransportMode::Bus => "🚌",
            TransportMode::Train => "🚆",
            TransportMode::Metro => "🚇",
            TransportMode::Walking => "🚶",
            TransportMode::Cycling => "🚲",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        TransportMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized || mode.label().to_lowercase() == normalized)
            .ok_or_else(|| PlannerError::UnknownMode(value.to_string()))
    }
}
