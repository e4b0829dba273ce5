//! Capability boundary towards the host game client.
//!
//! The host answers two kinds of questions: whether a quest has been
//! completed, and which starting city and grand company the character
//! belongs to. Both are injected into the resolver, catalog, and filters as
//! trait objects so they can be driven by scripted fakes.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::Deserialize;

/// Read-only quest completion query. Must be cheap: it is called once per
/// quest variant on every read.
pub trait CompletionOracle {
    fn is_quest_complete(&self, quest_id: u32) -> bool;
}

/// Read-only character attributes.
pub trait PlayerAttributes {
    fn start_city(&self) -> StartCity;
    fn grand_company(&self) -> Option<GrandCompany>;
}

impl CompletionOracle for HashSet<u32> {
    fn is_quest_complete(&self, quest_id: u32) -> bool {
        self.contains(&quest_id)
    }
}

impl CompletionOracle for BTreeSet<u32> {
    fn is_quest_complete(&self, quest_id: u32) -> bool {
        self.contains(&quest_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartCity {
    Gridania,
    LimsaLominsa,
    Uldah,
}

/// "Close to Home" variants per city, in detection order.
const CLOSE_TO_HOME: [(StartCity, &[u32]); 3] = [
    (StartCity::Gridania, &[65621, 65659, 65660]),
    (StartCity::LimsaLominsa, &[65644, 65645]),
    (StartCity::Uldah, &[66104, 66105, 66106]),
];

impl StartCity {
    /// Name as written in drawer `Start` fields.
    pub fn name(&self) -> &'static str {
        match self {
            StartCity::Gridania => "Gridania",
            StartCity::LimsaLominsa => "Limsa Lominsa",
            StartCity::Uldah => "Ul'dah",
        }
    }

    /// Case-insensitive match against a drawer `Start` value.
    pub fn matches(&self, raw: &str) -> bool {
        raw.trim().to_lowercase() == self.name().to_lowercase()
    }
}

impl fmt::Display for StartCity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Infer the starting city from which tutorial quest variant was completed.
/// Characters that have not finished any of them count as Gridania.
pub fn detect_start_city(oracle: &dyn CompletionOracle) -> StartCity {
    CLOSE_TO_HOME
        .iter()
        .find(|(_, ids)| ids.iter().any(|&id| oracle.is_quest_complete(id)))
        .map(|(city, _)| *city)
        .unwrap_or(StartCity::Gridania)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrandCompany {
    Maelstrom,
    TwinAdder,
    ImmortalFlames,
}

impl GrandCompany {
    /// Map the host's grand company row id. Row 0 and anything unknown mean
    /// the character has not enlisted yet.
    pub fn from_row_id(row_id: u32) -> Option<Self> {
        match row_id {
            1 => Some(GrandCompany::Maelstrom),
            2 => Some(GrandCompany::TwinAdder),
            3 => Some(GrandCompany::ImmortalFlames),
            _ => None,
        }
    }

    /// Name as written in drawer `Gc` fields.
    pub fn name(&self) -> &'static str {
        match self {
            GrandCompany::Maelstrom => "Maelstrom",
            GrandCompany::TwinAdder => "Twin Adder",
            GrandCompany::ImmortalFlames => "Immortal Flames",
        }
    }
}

impl fmt::Display for GrandCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Player progress exported from the client, used when the core runs outside
/// the host (the CLI, tests).
///
/// ```json
/// { "completed": [65621, 65564], "grandCompany": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct ProgressSnapshot {
    pub completed: BTreeSet<u32>,
    #[serde(rename = "grandcompany")]
    pub grand_company: u32,
}

impl ProgressSnapshot {
    pub fn new<I: IntoIterator<Item = u32>>(completed: I, grand_company: u32) -> Self {
        Self {
            completed: completed.into_iter().collect(),
            grand_company,
        }
    }
}

impl CompletionOracle for ProgressSnapshot {
    fn is_quest_complete(&self, quest_id: u32) -> bool {
        self.completed.contains(&quest_id)
    }
}

impl PlayerAttributes for ProgressSnapshot {
    fn start_city(&self) -> StartCity {
        detect_start_city(self)
    }

    fn grand_company(&self) -> Option<GrandCompany> {
        GrandCompany::from_row_id(self.grand_company)
    }
}
