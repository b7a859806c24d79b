//! Canned improvement messages.
//!
//! Each entry in the catalog is triggered by a plain substring or line-count
//! comparison between the original and the suggested code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Area of the code an improvement refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementCategory {
    Performance,
    Conciseness,
    Simplicity,
    Structure,
    Maintainability,
}

impl fmt::Display for ImprovementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImprovementCategory::Performance => "Performance",
            ImprovementCategory::Conciseness => "Conciseness",
            ImprovementCategory::Simplicity => "Simplicity",
            ImprovementCategory::Structure => "Structure",
            ImprovementCategory::Maintainability => "Maintainability",
        };
        f.write_str(label)
    }
}

/// Perceived impact of an improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::High => "High",
        };
        f.write_str(label)
    }
}

/// A single canned improvement message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementItem {
    pub category: ImprovementCategory,
    pub title: String,
    pub description: String,
    pub impact: ImpactLevel,
    /// Icon name for front-ends that render one
    pub icon: String,
}

struct CatalogEntry {
    category: ImprovementCategory,
    title: &'static str,
    description: &'static str,
    impact: ImpactLevel,
    icon: &'static str,
    applies: fn(&str, &str) -> bool,
}

impl CatalogEntry {
    fn to_item(&self) -> ImprovementItem {
        ImprovementItem {
            category: self.category,
            title: self.title.to_string(),
            description: self.description.to_string(),
            impact: self.impact,
            icon: self.icon.to_string(),
        }
    }
}

fn uses_reversal_idiom(_original: &str, evolved: &str) -> bool {
    evolved.contains("reversed(") || evolved.contains("[::-1]")
}

fn is_shorter(original: &str, evolved: &str) -> bool {
    original.split('\n').count() > evolved.split('\n').count()
}

fn removed_explicit_loop(original: &str, evolved: &str) -> bool {
    !evolved.contains("for ") && original.contains("for ")
}

fn has_single_return(_original: &str, evolved: &str) -> bool {
    evolved.matches("return ").count() == 1
}

fn always(_original: &str, _evolved: &str) -> bool {
    true
}

/// Ordered catalog; every entry whose predicate holds is emitted
const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        category: ImprovementCategory::Performance,
        title: "Built-in Functions",
        description: "Uses built-in Python functions for better performance",
        impact: ImpactLevel::High,
        icon: "zap",
        applies: uses_reversal_idiom,
    },
    CatalogEntry {
        category: ImprovementCategory::Conciseness,
        title: "Shorter Code",
        description: "Reduced code length and complexity",
        impact: ImpactLevel::Medium,
        icon: "file-text",
        applies: is_shorter,
    },
    CatalogEntry {
        category: ImprovementCategory::Simplicity,
        title: "No Explicit Loops",
        description: "Eliminated explicit loops for cleaner code",
        impact: ImpactLevel::High,
        icon: "trending-up",
        applies: removed_explicit_loop,
    },
    CatalogEntry {
        category: ImprovementCategory::Structure,
        title: "Single Return",
        description: "Simplified to single return statement",
        impact: ImpactLevel::Low,
        icon: "check-circle",
        applies: has_single_return,
    },
];

const FALLBACK: CatalogEntry = CatalogEntry {
    category: ImprovementCategory::Maintainability,
    title: "Optimized Structure",
    description: "Code structure optimized for better maintainability",
    impact: ImpactLevel::Low,
    icon: "activity",
    applies: always,
};

/// Evaluate the catalog against an (original, evolved) pair.
///
/// Never returns an empty list: when nothing applies, the maintainability
/// fallback is the only entry.
pub fn generate_improvements(original: &str, evolved: &str) -> Vec<ImprovementItem> {
    let items: Vec<ImprovementItem> = CATALOG
        .iter()
        .filter(|entry| (entry.applies)(original, evolved))
        .map(CatalogEntry::to_item)
        .collect();

    if items.is_empty() {
        vec![FALLBACK.to_item()]
    } else {
        items
    }
}

/// Plain message list, one description per item
pub fn descriptions(items: &[ImprovementItem]) -> Vec<String> {
    items.iter().map(|item| item.description.clone()).collect()
}
