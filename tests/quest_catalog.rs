//! Integration tests for merging drawers into the quest catalog.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;

use memoria::tracker::{
    CompletionOracle, DrawerFile, DrawerQuest, QuestCatalog, QuestCategory,
};
use tempfile::TempDir;

fn quest(title: &str, ids: &[u32]) -> DrawerQuest {
    DrawerQuest {
        title: title.to_string(),
        id: ids.to_vec(),
        area: "New Gridania".to_string(),
        start: None,
        level: 1,
        gc: None,
    }
}

fn drawer(expansion: &str, quests: Vec<DrawerQuest>) -> DrawerFile {
    DrawerFile {
        expansion: expansion.to_string(),
        drawer: "1-msq".to_string(),
        title: "Seventh Umbral Era".to_string(),
        quests,
    }
}

/// Oracle whose answers change between reads, like a live client.
struct LiveOracle {
    done: RefCell<HashSet<u32>>,
}

impl CompletionOracle for LiveOracle {
    fn is_quest_complete(&self, quest_id: u32) -> bool {
        self.done.borrow().contains(&quest_id)
    }
}

#[test]
fn any_variant_marks_quest_complete() {
    let catalog = QuestCatalog::from_drawers(
        vec![drawer("2.0", vec![quest("Close to Home", &[100, 101])])],
        QuestCategory::MainScenario,
    );
    let entry = &catalog.entries()[0];
    assert_eq!(entry.id(), 100);
    assert_eq!(entry.variant_ids(), &[100, 101]);

    let only_second: HashSet<u32> = [101].into_iter().collect();
    assert!(entry.is_completed(&only_second));
    assert_eq!(entry.id(), 100);

    let neither: HashSet<u32> = [102].into_iter().collect();
    assert!(!entry.is_completed(&neither));
}

#[test]
fn completion_is_read_live() {
    let catalog = QuestCatalog::from_drawers(
        vec![drawer("2.0", vec![quest("Sky-high", &[7])])],
        QuestCategory::MainScenario,
    );
    let oracle = LiveOracle {
        done: RefCell::new(HashSet::new()),
    };
    assert!(!catalog.rows(&oracle)[0].completed);

    oracle.done.borrow_mut().insert(7);
    assert!(catalog.rows(&oracle)[0].completed);
}

#[test]
fn preserves_file_and_quest_order() {
    let catalog = QuestCatalog::from_drawers(
        vec![
            drawer("2.0", vec![quest("B", &[2]), quest("A", &[1])]),
            drawer("2.1", vec![quest("C", &[3])]),
        ],
        QuestCategory::MainScenario,
    );
    let titles: Vec<&str> = catalog.entries().iter().map(|q| q.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "A", "C"]);
    assert_eq!(catalog.entries()[2].expansion, "2.1");
    assert!(catalog
        .entries()
        .iter()
        .all(|q| q.category == QuestCategory::MainScenario));
}

#[test]
fn duplicate_quests_are_kept() {
    let catalog = QuestCatalog::from_drawers(
        vec![drawer("2.0", vec![quest("Same", &[5]), quest("Same", &[5])])],
        QuestCategory::MainScenario,
    );
    assert_eq!(catalog.len(), 2);
}

#[test]
fn missing_restrictions_become_empty_strings() {
    let mut q = quest("The Company You Keep", &[66216]);
    q.gc = Some("Maelstrom".to_string());
    let catalog = QuestCatalog::from_drawers(vec![drawer("2.0", vec![q])], QuestCategory::MainScenario);
    let entry = &catalog.entries()[0];
    assert_eq!(entry.start, "");
    assert_eq!(entry.gc, "Maelstrom");
}

#[test]
fn progress_counts_category_only() {
    let catalog = QuestCatalog::from_drawers(
        vec![drawer("2.0", vec![quest("A", &[1]), quest("B", &[2, 3]), quest("C", &[4])])],
        QuestCategory::MainScenario,
    );
    let done: HashSet<u32> = [1, 3].into_iter().collect();
    assert_eq!(catalog.progress(QuestCategory::MainScenario, &done), (2, 3));
    assert_eq!(catalog.progress(QuestCategory::Side, &done), (0, 0));
}

#[test]
fn load_main_scenario_skips_missing_drawers() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir_all(dir.path().join("2.x/2.0")).unwrap();
    fs::write(
        dir.path().join("2.x/2.0/1-msq.json"),
        r#"{"expansion": "2.0", "drawer": "1-msq", "title": "ARR",
            "quests": [{"Title": "Close to Home", "Id": [65621], "Area": "New Gridania", "Level": 1},
                       {"Title": "Broken", "Id": [], "Area": "Nowhere", "Level": 1}]}"#,
    )
    .unwrap();

    let catalog = QuestCatalog::load_main_scenario(
        dir.path(),
        &["2.x/2.0/1-msq.json", "2.x/2.1/1-msq.json"],
    );
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.entries()[0].id(), 65621);
}

#[test]
fn empty_catalog_is_harmless() {
    let dir = TempDir::new().expect("tempdir");
    let catalog = QuestCatalog::load_main_scenario(dir.path(), &["2.x/2.0/1-msq.json"]);
    assert!(catalog.is_empty());
    assert!(catalog.rows(&HashSet::<u32>::new()).is_empty());
}
