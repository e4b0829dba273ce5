//! Quest tracking core: bundled data, completion-driven progress, and the
//! news/countdown panel. The host client is reached only through the
//! [`CompletionOracle`] and [`PlayerAttributes`] traits.

pub mod catalog;
pub mod errors;
pub mod filters;
pub mod loader;
pub mod news;
pub mod player;
pub mod session;
pub mod toc;
pub mod types;

pub use catalog::{QuestCatalog, ARR_MSQ_DRAWERS};
pub use errors::TrackerError;
pub use filters::{visible_to, FilterRule, FilterTable, Selection};
pub use loader::{load_drawer, load_news, load_progress, load_toc, read_document};
pub use news::{
    countdown_status, format_date, format_date_time, format_remaining, is_event_active,
    latest_news, next_event, next_patch, upcoming_maintenance, NewsPanel,
};
pub use player::{
    detect_start_city, CompletionOracle, GrandCompany, PlayerAttributes, ProgressSnapshot,
    StartCity,
};
pub use session::Session;
pub use toc::{PatchGate, PatchVersion, TableOfContents, DEFAULT_PATCH};
pub use types::*;
