//! # Memoria - quest progress and news for an MMO companion overlay
//!
//! Memoria reads the overlay's bundled data (a patch table of contents, quest
//! "drawers", and a news/countdown feed) and cross-references it with the
//! player's live quest completion to answer three questions:
//!
//! - **How far along is the character?** The highest patch whose gating
//!   quests are all complete, walking patches in version order.
//! - **Which quests are left?** Drawer quests merged with completion,
//!   filtered by category, starting city, and grand company.
//! - **What's happening in game?** Upcoming maintenance plus the relevant
//!   patch and event countdowns.
//!
//! Rendering, windowing, and access to the game client belong to the host.
//! The client is reached only through the [`tracker::CompletionOracle`] and
//! [`tracker::PlayerAttributes`] traits.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use memoria::config::Config;
//! use memoria::tracker::{news, ProgressSnapshot, QuestCategory, Session};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load("config.toml").await?;
//! let session = Session::load(&config.data);
//! let progress = ProgressSnapshot::new([65621, 65564], 2);
//!
//! println!("Reached patch {}", session.highest_completed_patch(&progress));
//! let msq = session.select(QuestCategory::MainScenario, 0, &progress, &progress);
//! println!("{:?}", msq.message());
//! if let Some(panel) = session.news_panel(news::now()) {
//!     for line in panel.lines() {
//!         println!("{}", line);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`tracker`] - data model, loaders, progress resolver, quest catalog, news selection
//! - [`config`] - TOML configuration
//! - [`logutil`] - single-line log escaping

pub mod config;
pub mod logutil;
pub mod tracker;
