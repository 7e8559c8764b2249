use serde::{Deserialize, Serialize};

/// The fixed set of per-hole shot outcomes published by the stats table.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ShotCategory {
    Eagle,
    Birdie,
    Par,
    Bogey,
    Double,
    Other,
}

impl ShotCategory {
    /// Iteration order used by the differ; event ordering within a hole
    /// follows this order.
    pub const ALL: [ShotCategory; 6] = [
        ShotCategory::Eagle,
        ShotCategory::Birdie,
        ShotCategory::Par,
        ShotCategory::Bogey,
        ShotCategory::Double,
        ShotCategory::Other,
    ];

    /// Scalar published for one shot moving through this category. Lowest is best.
    #[must_use]
    pub fn weight(self) -> i32 {
        match self {
            ShotCategory::Eagle => -2,
            ShotCategory::Birdie => -1,
            ShotCategory::Par => 0,
            ShotCategory::Bogey => 1,
            ShotCategory::Double => 2,
            ShotCategory::Other => 3,
        }
    }

    /// Row label as rendered in the stats table. Matching is case-sensitive.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ShotCategory::Eagle => "EAGLES",
            ShotCategory::Birdie => "BIRDIES",
            ShotCategory::Par => "PARS",
            ShotCategory::Bogey => "BOGEYS",
            ShotCategory::Double => "DOUBLES",
            ShotCategory::Other => "OTHERS",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// Cumulative shot counts for one hole. One field per category, so a stored
/// record can never carry a partial schema.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShotCounts {
    pub eagles: u32,
    pub birdies: u32,
    pub pars: u32,
    pub bogeys: u32,
    pub doubles: u32,
    pub others: u32,
}

impl ShotCounts {
    #[must_use]
    pub fn get(&self, category: ShotCategory) -> u32 {
        match category {
            ShotCategory::Eagle => self.eagles,
            ShotCategory::Birdie => self.birdies,
            ShotCategory::Par => self.pars,
            ShotCategory::Bogey => self.bogeys,
            ShotCategory::Double => self.doubles,
            ShotCategory::Other => self.others,
        }
    }

    pub fn set(&mut self, category: ShotCategory, count: u32) {
        match category {
            ShotCategory::Eagle => self.eagles = count,
            ShotCategory::Birdie => self.birdies = count,
            ShotCategory::Par => self.pars = count,
            ShotCategory::Bogey => self.bogeys = count,
            ShotCategory::Double => self.doubles = count,
            ShotCategory::Other => self.others = count,
        }
    }
}

/// One hole's snapshot row, identified by (tournament, course, hole).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleRecord {
    pub tournament: String,
    pub course: String,
    pub hole: u32,
    pub shots: ShotCounts,
}

impl HoleRecord {
    #[must_use]
    pub fn same_identity(&self, other: &HoleRecord) -> bool {
        self.tournament == other.tournament
            && self.course == other.course
            && self.hole == other.hole
    }
}

/// Diff output for one hole: where its events go, and the ordered weight
/// values to publish there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoleEvents {
    pub tournament: String,
    pub course: String,
    pub hole: u32,
    pub stream_name: String,
    pub write_key: String,
    pub values: Vec<i32>,
}
