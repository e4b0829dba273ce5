//! Data loaded for one overlay session.
//!
//! All files are read once in [`Session::load`]; after that the session is
//! read-only. Completion is never cached here: every accessor takes the live
//! oracle.

use std::path::Path;

use log::{debug, info};

use crate::config::DataConfig;
use crate::tracker::catalog::QuestCatalog;
use crate::tracker::filters::{FilterTable, Selection};
use crate::tracker::loader::{load_news, load_toc};
use crate::tracker::news::NewsPanel;
use crate::tracker::player::{CompletionOracle, PlayerAttributes};
use crate::tracker::toc::TableOfContents;
use crate::tracker::types::{NewsRoot, QuestCategory, QuestRow};

#[derive(Debug, Clone)]
pub struct Session {
    pub toc: TableOfContents,
    pub catalog: QuestCatalog,
    pub news: Option<NewsRoot>,
    pub filters: FilterTable,
}

impl Session {
    pub fn new(toc: TableOfContents, catalog: QuestCatalog, news: Option<NewsRoot>) -> Self {
        Self {
            toc,
            catalog,
            news,
            filters: FilterTable::standard(),
        }
    }

    /// Load every data source named by the config. A source that fails to
    /// load is left empty; the others are unaffected.
    pub fn load(data: &DataConfig) -> Self {
        let data_dir = Path::new(&data.dir);
        let toc = TableOfContents::new(load_toc(&data.toc_file));
        let catalog = QuestCatalog::load_main_scenario(data_dir, &data.drawers);
        let news = load_news(&data.news_file);
        info!(
            "Session loaded: {} toc entries, {} quests, news {}",
            toc.entries().len(),
            catalog.len(),
            if news.is_some() { "available" } else { "unavailable" }
        );
        Self::new(toc, catalog, news)
    }

    pub fn highest_completed_patch(&self, oracle: &dyn CompletionOracle) -> String {
        let patch = self.toc.highest_completed_patch(oracle);
        debug!("Highest completed patch: {}", patch);
        patch
    }

    pub fn quest_rows<'a>(&'a self, oracle: &dyn CompletionOracle) -> Vec<QuestRow<'a>> {
        self.catalog.rows(oracle)
    }

    pub fn select<'a>(
        &'a self,
        category: QuestCategory,
        sub_index: usize,
        oracle: &dyn CompletionOracle,
        player: &dyn PlayerAttributes,
    ) -> Selection<'a> {
        self.filters
            .select(category, sub_index, &self.catalog, oracle, player)
    }

    pub fn news_panel(&self, now: i64) -> Option<NewsPanel> {
        NewsPanel::build(self.news.as_ref(), now)
    }
}
