//! Quest catalog: drawer records merged into filterable quest entries.

use std::path::{Path, PathBuf};

use log::info;

use crate::tracker::loader::load_drawer;
use crate::tracker::player::CompletionOracle;
use crate::tracker::types::{DrawerFile, QuestCategory, QuestEntry, QuestRow};

/// ARR main scenario drawers, relative to the data root. Only 2.0 is
/// authored so far.
pub const ARR_MSQ_DRAWERS: &[&str] = &["2.x/2.0/1-msq.json"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestCatalog {
    entries: Vec<QuestEntry>,
}

impl QuestCatalog {
    /// Merge drawers in the order given, preserving each file's quest order.
    pub fn from_drawers<I>(drawers: I, category: QuestCategory) -> Self
    where
        I: IntoIterator<Item = DrawerFile>,
    {
        let mut entries = Vec::new();
        for drawer in drawers {
            entries.extend(
                drawer
                    .quests
                    .iter()
                    .filter_map(|q| QuestEntry::from_drawer(q, &drawer.expansion, category)),
            );
        }
        Self { entries }
    }

    /// Load the main scenario drawers that exist under `data_dir`. Missing
    /// files are skipped.
    pub fn load_main_scenario<P, S>(data_dir: P, drawers: &[S]) -> Self
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let paths: Vec<PathBuf> = drawers
            .iter()
            .map(|rel| data_dir.as_ref().join(rel.as_ref()))
            .collect();
        let catalog = Self::from_drawers(
            paths.iter().filter_map(|p| load_drawer(p)),
            QuestCategory::MainScenario,
        );
        info!("Quest catalog loaded {} main scenario quests", catalog.len());
        catalog
    }

    pub fn entries(&self) -> &[QuestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn in_category(&self, category: QuestCategory) -> impl Iterator<Item = &QuestEntry> {
        self.entries.iter().filter(move |q| q.category == category)
    }

    /// Every quest with completion read from the oracle right now.
    pub fn rows<'a>(&'a self, oracle: &dyn CompletionOracle) -> Vec<QuestRow<'a>> {
        self.entries
            .iter()
            .map(|entry| QuestRow {
                entry,
                completed: entry.is_completed(oracle),
            })
            .collect()
    }

    /// `(completed, total)` for one category.
    pub fn progress(&self, category: QuestCategory, oracle: &dyn CompletionOracle) -> (usize, usize) {
        self.in_category(category).fold((0, 0), |(done, total), q| {
            (done + usize::from(q.is_completed(oracle)), total + 1)
        })
    }
}
