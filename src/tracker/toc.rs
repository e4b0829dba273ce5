//! Table of contents and the "highest completed patch" inference.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::tracker::player::CompletionOracle;
use crate::tracker::types::{TocEntry, TocRole};
use crate::tracker::TrackerError;

/// Patch reported when the table of contents has no gating quests at all.
pub const DEFAULT_PATCH: &str = "2.0";

/// Dotted numeric patch version ("2.0", "2.55", "7.0.1").
///
/// Components compare numerically, so "2.5" < "2.10" and "2.0" < "2.0.1".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatchVersion(Vec<u32>);

impl FromStr for PatchVersion {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .trim()
            .split('.')
            .map(|p| p.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| TrackerError::InvalidPatch(s.to_string()))?;
        if parts.len() < 2 {
            return Err(TrackerError::InvalidPatch(s.to_string()));
        }
        Ok(PatchVersion(parts))
    }
}

impl Ord for PatchVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for PatchVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PatchVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|p| p.to_string()).collect();
        f.write_str(&parts.join("."))
    }
}

/// Gating quests of one patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchGate {
    /// Patch tag exactly as written in the file.
    pub patch: String,
    pub version: PatchVersion,
    /// Distinct "Final" quest ids, in first-seen order.
    pub final_ids: Vec<u32>,
}

impl PatchGate {
    pub fn is_reached(&self, oracle: &dyn CompletionOracle) -> bool {
        self.final_ids.iter().all(|&id| oracle.is_quest_complete(id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOfContents {
    entries: Vec<TocEntry>,
}

impl TableOfContents {
    pub fn new(entries: Vec<TocEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct "Final" quest ids grouped by patch tag.
    pub fn final_ids_by_patch(&self) -> BTreeMap<String, Vec<u32>> {
        let mut grouped: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.role == TocRole::Final) {
            let ids = grouped.entry(entry.patch.clone()).or_default();
            for &id in &entry.ids {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        grouped
    }

    /// Patch gates in ascending version order. Patches whose tag is not a
    /// version are skipped with a warning.
    pub fn patch_gates(&self) -> Vec<PatchGate> {
        let mut gates: Vec<PatchGate> = self
            .final_ids_by_patch()
            .into_iter()
            .filter_map(|(patch, final_ids)| match patch.parse::<PatchVersion>() {
                Ok(version) => Some(PatchGate {
                    patch,
                    version,
                    final_ids,
                }),
                Err(e) => {
                    warn!("Skipping table-of-contents patch: {}", e);
                    None
                }
            })
            .collect();
        gates.sort_by(|a, b| a.version.cmp(&b.version));
        gates
    }

    /// Highest patch reached without gaps, starting from the lowest known one.
    ///
    /// Walking stops at the first patch whose gating quests are not all
    /// complete, even if a later patch happens to be. The lowest patch is
    /// reported when nothing is complete, and [`DEFAULT_PATCH`] when no patch
    /// has gating quests.
    pub fn highest_completed_patch(&self, oracle: &dyn CompletionOracle) -> String {
        let gates = self.patch_gates();
        let Some(first) = gates.first() else {
            return DEFAULT_PATCH.to_string();
        };

        let mut highest = &first.patch;
        for gate in &gates {
            if !gate.is_reached(oracle) {
                debug!("Patch {} not reached", gate.patch);
                break;
            }
            highest = &gate.patch;
        }
        highest.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> PatchVersion {
        s.parse().unwrap()
    }

    #[test]
    fn versions_order_numerically() {
        assert!(v("2.0") < v("2.5"));
        assert!(v("2.5") < v("2.10"));
        assert!(v("2.55") < v("3.0"));
        assert!(v("2.0") < v("2.0.1"));
        assert_eq!(v("2.1").to_string(), "2.1");
    }

    #[test]
    fn rejects_non_versions() {
        assert!("ARR".parse::<PatchVersion>().is_err());
        assert!("2".parse::<PatchVersion>().is_err());
        assert!("2.x".parse::<PatchVersion>().is_err());
        assert!("".parse::<PatchVersion>().is_err());
    }
}
