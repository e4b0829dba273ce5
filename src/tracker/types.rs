//! Data model for the bundled quest, table-of-contents, and news files.
//!
//! Every record here is loaded once and never mutated afterwards. Field names
//! are matched case-insensitively by the loader, which lowercases every object
//! key before deserializing, so the serde names below are all lowercase.

use serde::Deserialize;

use crate::tracker::player::CompletionOracle;

/// Role a table-of-contents entry plays within its patch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TocRole {
    Start,
    Final,
    Other(String),
}

impl From<String> for TocRole {
    fn from(raw: String) -> Self {
        if raw.eq_ignore_ascii_case("final") {
            TocRole::Final
        } else if raw.eq_ignore_ascii_case("start") {
            TocRole::Start
        } else {
            TocRole::Other(raw)
        }
    }
}

impl Default for TocRole {
    fn default() -> Self {
        TocRole::Other(String::new())
    }
}

/// One row of `toc.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct TocEntry {
    pub patch: String, // "2.0".."2.5"
    pub expansion: String,
    pub role: TocRole,
    pub name: String,
    pub ids: Vec<u32>,
}

/// A per-patch bundle of quests ("drawer").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct DrawerFile {
    pub expansion: String, // "2.0"
    pub drawer: String,    // "1-msq"
    pub title: String,
    pub quests: Vec<DrawerQuest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct DrawerQuest {
    pub title: String,
    /// Class/job variants of one logical quest. Never empty once loaded.
    pub id: Vec<u32>,
    pub area: String,
    pub start: Option<String>,
    pub level: u32,
    pub gc: Option<String>,
}

/// Top-level quest taxonomy shown by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestCategory {
    MainScenario,
    Chronicles,
    Side,
    AlliedSocieties,
    ClassJob,
    Other,
}

impl QuestCategory {
    pub const ALL: [QuestCategory; 6] = [
        QuestCategory::MainScenario,
        QuestCategory::Chronicles,
        QuestCategory::Side,
        QuestCategory::AlliedSocieties,
        QuestCategory::ClassJob,
        QuestCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuestCategory::MainScenario => "Main Scenario",
            QuestCategory::Chronicles => "Chronicles of a New Era",
            QuestCategory::Side => "Sidequests",
            QuestCategory::AlliedSocieties => "Allied Society Quests",
            QuestCategory::ClassJob => "Class & Job Quests",
            QuestCategory::Other => "Other",
        }
    }

    /// Parse a short CLI-friendly key (`msq`, `chronicles`, ...) or a full label.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        match key.as_str() {
            "msq" | "main" | "mainscenario" | "main scenario" => Some(QuestCategory::MainScenario),
            "chronicles" | "chronicles of a new era" => Some(QuestCategory::Chronicles),
            "side" | "sidequests" => Some(QuestCategory::Side),
            "allied" | "alliedsocieties" | "allied society quests" => {
                Some(QuestCategory::AlliedSocieties)
            }
            "classjob" | "job" | "class & job quests" => Some(QuestCategory::ClassJob),
            "other" => Some(QuestCategory::Other),
            _ => None,
        }
    }
}

/// A quest merged from a drawer, ready for filtering.
///
/// Completion is deliberately not stored: ask [`QuestEntry::is_completed`]
/// against the live oracle every time it is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestEntry {
    ids: Vec<u32>,
    pub title: String,
    pub area: String,
    pub level: u32,
    pub expansion: String,
    pub category: QuestCategory,
    /// Starting city restriction; empty means any city.
    pub start: String,
    /// Grand company restriction; empty means any company.
    pub gc: String,
}

impl QuestEntry {
    /// Build an entry from a drawer quest. Returns `None` when the quest has no ids.
    pub fn from_drawer(quest: &DrawerQuest, expansion: &str, category: QuestCategory) -> Option<Self> {
        if quest.id.is_empty() {
            return None;
        }
        Some(Self {
            ids: quest.id.clone(),
            title: quest.title.clone(),
            area: quest.area.clone(),
            level: quest.level,
            expansion: expansion.to_string(),
            category,
            start: quest.start.clone().unwrap_or_default(),
            gc: quest.gc.clone().unwrap_or_default(),
        })
    }

    /// Representative id: the first variant.
    pub fn id(&self) -> u32 {
        self.ids[0]
    }

    pub fn variant_ids(&self) -> &[u32] {
        &self.ids
    }

    /// True when any variant of the quest has been completed.
    pub fn is_completed(&self, oracle: &dyn CompletionOracle) -> bool {
        self.ids.iter().any(|&id| oracle.is_quest_complete(id))
    }
}

/// A quest paired with its completion state at the moment it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestRow<'a> {
    pub entry: &'a QuestEntry,
    pub completed: bool,
}

// ============================================================================
// news.json
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct NewsRoot {
    pub maintenance: Option<MaintenanceInfo>,
    #[serde(rename = "latestcountdownid")]
    pub latest_countdown_id: i64,
    pub countdowns: Vec<CountdownEntry>,
    #[serde(rename = "latestid")]
    pub latest_id: i64,
    pub news: Vec<NewsEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct MaintenanceInfo {
    /// Set when the entry describes a live, announced window.
    pub updated: bool,
    pub start: i64, // Unix timestamp
    pub end: i64,   // Unix timestamp
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CountdownKind {
    Patch,
    Event,
    Other(String),
}

impl From<String> for CountdownKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "patch" => CountdownKind::Patch,
            "event" => CountdownKind::Event,
            _ => CountdownKind::Other(raw),
        }
    }
}

impl Default for CountdownKind {
    fn default() -> Self {
        CountdownKind::Other(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct CountdownEntry {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: CountdownKind,
    pub url: Option<String>,
    pub start: i64,
    /// Absent for open-ended entries such as patches.
    pub end: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct NewsEntry {
    pub id: i64,
    pub title: String,
    pub published: String,
    pub content: String,
}
