//! Processing mode selection.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The three ways a thought can be processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMode {
    /// Associative processing: spreads a thought into co-occurring pairs.
    Divergent,

    /// Analytical processing: narrows a thought to its dominant terms.
    Convergent,

    /// Both modes run concurrently and are merged.
    #[default]
    Bilateral,
}

impl ProcessingMode {
    /// All modes, in declaration order.
    pub const ALL: [ProcessingMode; 3] = [
        ProcessingMode::Divergent,
        ProcessingMode::Convergent,
        ProcessingMode::Bilateral,
    ];

    /// Returns the lowercase name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingMode::Divergent => "divergent",
            ProcessingMode::Convergent => "convergent",
            ProcessingMode::Bilateral => "bilateral",
        }
    }
}

impl std::fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProcessingMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "divergent" => Ok(ProcessingMode::Divergent),
            "convergent" => Ok(ProcessingMode::Convergent),
            "bilateral" => Ok(ProcessingMode::Bilateral),
            other => Err(Error::validation_field(
                "mode",
                format!("unknown processing mode '{other}' (expected divergent, convergent or bilateral)"),
            )),
        }
    }
}
