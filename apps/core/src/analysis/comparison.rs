use serde::{Deserialize, Serialize};

use super::improvements::ImprovementItem;
use super::structure::ComplexityReport;

pub const DEFAULT_TIME_COMPLEXITY: &str = "O(n)";
pub const DEFAULT_SPACE_COMPLEXITY: &str = "O(1)";
pub const DEFAULT_RUNTIME: &str = "N/A";

/// Complexity estimate reported by the model for one side of the comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityEstimate {
    pub time_complexity: String,
    pub space_complexity: String,
    /// Free-form runtime estimate, e.g. `~2ms per 10k inputs`
    pub runtime_per_n: String,
}

impl Default for ComplexityEstimate {
    fn default() -> Self {
        Self {
            time_complexity: DEFAULT_TIME_COMPLEXITY.to_string(),
            space_complexity: DEFAULT_SPACE_COMPLEXITY.to_string(),
            runtime_per_n: DEFAULT_RUNTIME.to_string(),
        }
    }
}

/// Model estimates for the original and the evolved code
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EstimatePair {
    pub original: ComplexityEstimate,
    pub evolved: ComplexityEstimate,
}

/// Side-by-side result of one evolve request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub original: ComplexityReport,
    pub evolved: ComplexityReport,
    /// Only present when the response carried labeled analysis sections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimates: Option<EstimatePair>,
    pub improvements: Vec<ImprovementItem>,
}

impl ComparisonResult {
    /// Line delta, negative when the evolved code is shorter
    pub fn line_delta(&self) -> i64 {
        self.evolved.lines as i64 - self.original.lines as i64
    }
}
