//! Integration tests for the lenient JSON loaders.

use std::fs;
use std::path::PathBuf;

use memoria::tracker::{
    load_drawer, load_news, load_progress, load_toc, read_document, CountdownKind, NewsRoot,
    TocRole, TrackerError,
};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

const NEWS: &str = r#"
// exported from the news feed
{
  "maintenance": { "updated": true, "start": 1798444800, "end": 1798466400 },
  "latestCountdownID": 4,
  "countdowns": [
    { "title": "Patch 7.4", "type": "patch", "start": 1797120000 },
    { "title": "All Saints' Wake", "type": "event", "url": "https://example.invalid/asw",
      "start": 1792922400, "end": 1794243540, },
  ],
  "latestID": 12,
  "news": [ { "ID": 12, "title": "Wake", "published": "2026-10-15", "content": "Boo" } ],
}
"#;

#[test]
fn news_accepts_comments_and_trailing_commas() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "news.json", NEWS);

    let news = load_news(&path).expect("news loads");
    assert_eq!(news.latest_countdown_id, 4);
    assert_eq!(news.latest_id, 12);
    assert_eq!(news.countdowns.len(), 2);
    assert_eq!(news.countdowns[0].kind, CountdownKind::Patch);
    assert_eq!(news.countdowns[0].end, None);
    assert_eq!(news.countdowns[1].kind, CountdownKind::Event);
    assert_eq!(news.countdowns[1].end, Some(1794243540));
    assert_eq!(news.countdowns[1].url.as_deref(), Some("https://example.invalid/asw"));
    assert_eq!(news.news[0].id, 12);
    let maintenance = news.maintenance.expect("maintenance");
    assert!(maintenance.updated);
}

#[test]
fn field_names_match_case_insensitively() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(
        &dir,
        "toc.json",
        r#"[{"PATCH": "2.0", "expansion": "ARR", "role": "final", "NaMe": "x", "IDS": [1, 2]}]"#,
    );
    let toc = load_toc(&path);
    assert_eq!(toc.len(), 1);
    assert_eq!(toc[0].patch, "2.0");
    assert_eq!(toc[0].role, TocRole::Final);
    assert_eq!(toc[0].ids, vec![1, 2]);
}

#[test]
fn drawer_fields_map_and_empty_id_quests_drop() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(
        &dir,
        "1-msq.json",
        r#"{
            "expansion": "2.0", "drawer": "1-msq", "title": "ARR",
            "quests": [
              {"Title": "Close to Home", "Id": [65644, 65645], "Area": "Limsa", "Start": "Limsa Lominsa", "Level": 1},
              {"Title": "No ids", "Id": [], "Area": "", "Level": 1},
              {"Title": "The Company You Keep", "Id": [66216], "Area": "Limsa", "Level": 20, "Gc": "Maelstrom"}
            ]
        }"#,
    );
    let drawer = load_drawer(&path).expect("drawer loads");
    assert_eq!(drawer.drawer, "1-msq");
    assert_eq!(drawer.quests.len(), 2);
    assert_eq!(drawer.quests[0].id, vec![65644, 65645]);
    assert_eq!(drawer.quests[0].start.as_deref(), Some("Limsa Lominsa"));
    assert_eq!(drawer.quests[0].gc, None);
    assert_eq!(drawer.quests[1].gc.as_deref(), Some("Maelstrom"));
    assert_eq!(drawer.quests[1].level, 20);
}

#[test]
fn missing_files_degrade_to_no_data() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("nope.json");
    assert!(load_toc(&missing).is_empty());
    assert!(load_drawer(&missing).is_none());
    assert!(load_news(&missing).is_none());
    assert!(load_progress(&missing).is_none());

    let err = read_document::<NewsRoot, _>(&missing).unwrap_err();
    assert!(matches!(err, TrackerError::NotFound(_)));
    assert!(err.is_missing_data());
}

#[test]
fn empty_files_degrade_to_no_data() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "news.json", "   \n");
    assert!(load_news(&path).is_none());
    let err = read_document::<NewsRoot, _>(&path).unwrap_err();
    assert!(matches!(err, TrackerError::EmptyFile(_)));
}

#[test]
fn malformed_files_degrade_to_no_data() {
    let dir = TempDir::new().expect("tempdir");
    let broken = write(&dir, "news.json", r#"{"countdowns": [ { "title": "#);
    assert!(load_news(&broken).is_none());
    assert!(matches!(
        read_document::<NewsRoot, _>(&broken).unwrap_err(),
        TrackerError::Malformed { .. }
    ));

    let wrong_shape = write(&dir, "toc.json", r#"{"patch": "2.0"}"#);
    assert!(load_toc(&wrong_shape).is_empty());
}

#[test]
fn reloading_unchanged_file_is_identical() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "news.json", NEWS);
    let first = load_news(&path).expect("first load");
    let second = load_news(&path).expect("second load");
    assert_eq!(first, second);
}

#[test]
fn progress_snapshot_loads() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "progress.json", r#"{"Completed": [3, 1, 2, 2], "grandCompany": 1}"#);
    let progress = load_progress(&path).expect("progress loads");
    assert_eq!(progress.completed.len(), 3);
    assert_eq!(progress.grand_company, 1);
}
