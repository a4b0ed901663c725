//! Taxonomy dimension value object
//!
//! Five independent classification axes. Trees in different dimensions
//! never share nodes or parent/child links.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed taxonomy axes.
///
/// Declaration order is the display order, so `Ord` sorts dimensions the
/// way they are shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxonomyDimension {
    Industry,
    JobCategory,
    Position,
    Situation,
    SkillKnowledge,
}

impl TaxonomyDimension {
    /// All dimensions in display order
    pub const ALL: [TaxonomyDimension; 5] = [
        TaxonomyDimension::Industry,
        TaxonomyDimension::JobCategory,
        TaxonomyDimension::Position,
        TaxonomyDimension::Situation,
        TaxonomyDimension::SkillKnowledge,
    ];

    /// Stable display position (1-based)
    pub fn sort_order(&self) -> u8 {
        match self {
            TaxonomyDimension::Industry => 1,
            TaxonomyDimension::JobCategory => 2,
            TaxonomyDimension::Position => 3,
            TaxonomyDimension::Situation => 4,
            TaxonomyDimension::SkillKnowledge => 5,
        }
    }

    /// Human label shown above the dimension's trees
    pub fn label(&self) -> &'static str {
        match self {
            TaxonomyDimension::Industry => "業界",
            TaxonomyDimension::JobCategory => "職種",
            TaxonomyDimension::Position => "役職",
            TaxonomyDimension::Situation => "状況",
            TaxonomyDimension::SkillKnowledge => "スキル・知識",
        }
    }

    /// Wire name, as stored by the data layer
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonomyDimension::Industry => "INDUSTRY",
            TaxonomyDimension::JobCategory => "JOB_CATEGORY",
            TaxonomyDimension::Position => "POSITION",
            TaxonomyDimension::Situation => "SITUATION",
            TaxonomyDimension::SkillKnowledge => "SKILL_KNOWLEDGE",
        }
    }
}

impl std::fmt::Display for TaxonomyDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaxonomyDimension {
    type Err = String;

    /// Accepts wire names and kebab/lowercase spellings (`job-category`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        TaxonomyDimension::ALL
            .into_iter()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown dimension '{}' (expected one of: industry, job-category, position, situation, skill-knowledge)",
                    s
                )
            })
    }
}
