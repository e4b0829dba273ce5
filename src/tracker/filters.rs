//! Category and sub-category filters for the quest list.
//!
//! One table maps every (category, sub-category) pair to its label and the
//! rule that selects its quests, so labels and filtering cannot drift apart.

use crate::tracker::catalog::QuestCatalog;
use crate::tracker::player::{CompletionOracle, PlayerAttributes};
use crate::tracker::types::{QuestCategory, QuestEntry, QuestRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRule {
    /// Every quest of the category.
    Category,
    /// Category quests the character can actually take: starting city and
    /// grand company restrictions applied.
    PlayerRestricted,
    /// Category quests with exactly this title.
    Title(&'static str),
    /// No data exists for this sub-category yet.
    NotImplemented,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategory {
    pub label: &'static str,
    pub rule: FilterRule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: QuestCategory,
    pub subs: Vec<SubCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    NotImplemented,
    Empty,
    Quests(Vec<QuestRow<'a>>),
}

impl Selection<'_> {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Selection::NotImplemented => Some("This expansion's MSQ is not implemented yet."),
            Selection::Empty => Some("No quests in this group yet."),
            Selection::Quests(_) => None,
        }
    }
}

fn subs(rule: FilterRule, labels: &[&'static str]) -> Vec<SubCategory> {
    labels.iter().map(|&label| SubCategory { label, rule }).collect()
}

const ALLIED_SOCIETIES: [&str; 25] = [
    "ARR – Amalj'aa",
    "ARR – Sylph",
    "ARR – Kobold",
    "ARR – Sahagin",
    "ARR – Ixali",
    "ARR – Intersocietal",
    "HW – Vanu Vanu",
    "HW – Vath",
    "HW – Moogle",
    "HW – Intersocietal",
    "StB – Kojin",
    "StB – Ananta",
    "StB – Namazu",
    "StB – Intersocietal",
    "ShB – Pixie",
    "ShB – Qitari",
    "ShB – Dwarf",
    "ShB – Intersocietal",
    "EW – Arkasodara",
    "EW – Omicron",
    "EW – Loporrit",
    "EW – Intersocietal",
    "DT – Pelupelu",
    "DT – Mamool Ja",
    "DT – Yok Huy",
];

/// Quest shown to this character? Empty restrictions never exclude. The
/// grand company restriction only applies once the character has enlisted.
pub fn visible_to(quest: &QuestEntry, player: &dyn PlayerAttributes) -> bool {
    let city_ok = quest.start.is_empty() || player.start_city().matches(&quest.start);
    let gc_ok = match player.grand_company() {
        Some(gc) => quest.gc.is_empty() || quest.gc == gc.name(),
        None => true,
    };
    city_ok && gc_ok
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTable {
    groups: Vec<CategoryGroup>,
}

impl Default for FilterTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl FilterTable {
    /// The overlay's category layout.
    pub fn standard() -> Self {
        let mut main_scenario = subs(FilterRule::PlayerRestricted, &["Seventh Umbral Era (ARR)"]);
        main_scenario.extend(subs(
            FilterRule::NotImplemented,
            &[
                "Heavensward (HW)",
                "Stormblood (StB)",
                "Shadowbringers (ShB)",
                "Endwalker (EW)",
                "Dawntrail (DT)",
            ],
        ));

        let groups = vec![
            CategoryGroup {
                category: QuestCategory::MainScenario,
                subs: main_scenario,
            },
            CategoryGroup {
                category: QuestCategory::Chronicles,
                subs: vec![
                    SubCategory {
                        label: "Primals",
                        rule: FilterRule::Title("A Recurring Problem"),
                    },
                    SubCategory {
                        label: "The Crystal Tower",
                        rule: FilterRule::Title("Legacy of Allag"),
                    },
                ],
            },
            CategoryGroup {
                category: QuestCategory::Side,
                subs: subs(FilterRule::Category, &["Tales of the Dragonsong War", "Hildibrand"]),
            },
            CategoryGroup {
                category: QuestCategory::AlliedSocieties,
                subs: subs(FilterRule::Category, &ALLIED_SOCIETIES),
            },
            CategoryGroup {
                category: QuestCategory::ClassJob,
                subs: subs(FilterRule::Category, &["Class & Job quests"]),
            },
            CategoryGroup {
                category: QuestCategory::Other,
                subs: subs(FilterRule::Category, &["All"]),
            },
        ];
        Self { groups }
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn group(&self, category: QuestCategory) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.category == category)
    }

    pub fn sub_labels(&self, category: QuestCategory) -> Vec<&'static str> {
        self.group(category)
            .map(|g| g.subs.iter().map(|s| s.label).collect())
            .unwrap_or_default()
    }

    /// Out-of-range sub-category indices fall back to the first one.
    pub fn clamp_sub(&self, category: QuestCategory, sub_index: usize) -> usize {
        match self.group(category) {
            Some(g) if sub_index < g.subs.len() => sub_index,
            _ => 0,
        }
    }

    pub fn rule(&self, category: QuestCategory, sub_index: usize) -> FilterRule {
        let idx = self.clamp_sub(category, sub_index);
        self.group(category)
            .and_then(|g| g.subs.get(idx))
            .map(|s| s.rule)
            .unwrap_or(FilterRule::Category)
    }

    /// Quests for one sub-category, with completion read from the oracle now.
    pub fn select<'a>(
        &self,
        category: QuestCategory,
        sub_index: usize,
        catalog: &'a QuestCatalog,
        oracle: &dyn CompletionOracle,
        player: &dyn PlayerAttributes,
    ) -> Selection<'a> {
        let rule = self.rule(category, sub_index);
        if rule == FilterRule::NotImplemented {
            return Selection::NotImplemented;
        }

        let rows: Vec<QuestRow<'a>> = catalog
            .in_category(category)
            .filter(|q| match rule {
                FilterRule::PlayerRestricted => visible_to(q, player),
                FilterRule::Title(title) => q.title == title,
                FilterRule::Category | FilterRule::NotImplemented => true,
            })
            .map(|entry| QuestRow {
                entry,
                completed: entry.is_completed(oracle),
            })
            .collect();

        if rows.is_empty() {
            Selection::Empty
        } else {
            Selection::Quests(rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_group() {
        let table = FilterTable::standard();
        for category in QuestCategory::ALL {
            assert!(!table.sub_labels(category).is_empty(), "{:?}", category);
        }
        assert_eq!(table.sub_labels(QuestCategory::AlliedSocieties).len(), 25);
    }

    #[test]
    fn out_of_range_sub_index_clamps() {
        let table = FilterTable::standard();
        assert_eq!(table.clamp_sub(QuestCategory::Chronicles, 5), 0);
        assert_eq!(table.clamp_sub(QuestCategory::Chronicles, 1), 1);
        assert_eq!(
            table.rule(QuestCategory::MainScenario, 3),
            FilterRule::NotImplemented
        );
        assert_eq!(
            table.rule(QuestCategory::MainScenario, 99),
            FilterRule::PlayerRestricted
        );
    }
}
