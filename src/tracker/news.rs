//! News and countdown selection over a loaded `news.json` snapshot.
//!
//! Everything here is a pure function of the snapshot and `now` (Unix
//! seconds, UTC). An absent snapshot always selects nothing.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::tracker::types::{CountdownEntry, CountdownKind, MaintenanceInfo, NewsEntry, NewsRoot};

pub const ATTRIBUTION: &str = "News data provided by XIV ToDo (xivtodo.com)";
pub const NO_NEWS: &str = "No news data available.";
pub const NO_MAINTENANCE: &str = "No upcoming maintenance.";

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Current wall-clock time in Unix seconds.
pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// The maintenance window, if it is flagged live and has not started yet.
pub fn upcoming_maintenance(news: Option<&NewsRoot>, now: i64) -> Option<&MaintenanceInfo> {
    news?
        .maintenance
        .as_ref()
        .filter(|m| m.updated && m.start > now)
}

/// The patch countdown with the latest start, released or not.
pub fn next_patch(news: Option<&NewsRoot>) -> Option<&CountdownEntry> {
    news?
        .countdowns
        .iter()
        .filter(|c| c.kind == CountdownKind::Patch)
        .min_by_key(|c| Reverse(c.start))
}

pub fn is_event_active(countdown: &CountdownEntry, now: i64) -> bool {
    countdown.start <= now && countdown.end.map_or(true, |end| end > now)
}

/// The active event ending soonest, or failing that the next event to start.
pub fn next_event(news: Option<&NewsRoot>, now: i64) -> Option<&CountdownEntry> {
    let events: Vec<&CountdownEntry> = news?
        .countdowns
        .iter()
        .filter(|c| c.kind == CountdownKind::Event)
        .collect();

    let active = events
        .iter()
        .filter(|c| is_event_active(c, now))
        .min_by_key(|c| c.end.unwrap_or(i64::MAX));
    if let Some(active) = active {
        return Some(*active);
    }

    events
        .into_iter()
        .filter(|c| c.start > now)
        .min_by_key(|c| c.start)
}

/// First entry of the feed; the producer writes it newest-first.
pub fn latest_news(news: Option<&NewsRoot>) -> Option<&NewsEntry> {
    news?.news.first()
}

/// "Ending in 1d 1h 1m". Seconds are truncated; `seconds_left` must not be negative.
pub fn format_remaining(seconds_left: i64) -> String {
    let days = seconds_left / SECS_PER_DAY;
    let hours = (seconds_left % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (seconds_left % SECS_PER_HOUR) / SECS_PER_MINUTE;
    format!("Ending in {}d {}h {}m", days, hours, minutes)
}

/// Status line for a countdown.
pub fn countdown_status(countdown: &CountdownEntry, now: i64) -> String {
    if countdown.kind == CountdownKind::Patch {
        return if countdown.start <= now {
            "Currently available".to_string()
        } else {
            format!("Releases {}", format_date(countdown.start))
        };
    }

    if countdown.start > now {
        return format!("Starts {}", format_date(countdown.start));
    }
    // Only bounded events count down; open-ended ones report "Ended".
    match countdown.end {
        Some(end) if end > now => format_remaining(end - now),
        _ => "Ended".to_string(),
    }
}

fn to_utc(unix: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(unix, 0)
}

/// "Jan 05, 2025"
pub fn format_date(unix: i64) -> String {
    to_utc(unix)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| unix.to_string())
}

/// "Jan 05, 2025 08:00 UTC"
pub fn format_date_time(unix: i64) -> String {
    to_utc(unix)
        .map(|dt| dt.format("%b %d, %Y %H:%M UTC").to_string())
        .unwrap_or_else(|| unix.to_string())
}

/// Text lines for the news section of the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsPanel {
    pub maintenance: String,
    /// Set when an upcoming maintenance window was found; the overlay highlights it.
    pub maintenance_warning: bool,
    pub patch: Option<String>,
    pub event: Option<String>,
    pub latest: Option<String>,
}

impl NewsPanel {
    /// `None` when there is no snapshot; show [`NO_NEWS`] instead.
    pub fn build(news: Option<&NewsRoot>, now: i64) -> Option<Self> {
        news?;

        let (maintenance, maintenance_warning) = match upcoming_maintenance(news, now) {
            Some(m) => (
                format!(
                    "Maintenance: {} - {}",
                    format_date_time(m.start),
                    format_date_time(m.end)
                ),
                true,
            ),
            None => (NO_MAINTENANCE.to_string(), false),
        };

        Some(Self {
            maintenance,
            maintenance_warning,
            patch: next_patch(news).map(|p| format!("{}: {}", p.title, countdown_status(p, now))),
            event: next_event(news, now).map(|e| format!("{}: {}", e.title, countdown_status(e, now))),
            latest: latest_news(news).map(|n| format!("{} ({})", n.title, n.published)),
        })
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.maintenance.clone()];
        lines.extend(self.patch.iter().cloned());
        lines.extend(self.event.iter().cloned());
        lines.extend(self.latest.iter().map(|l| format!("Latest: {}", l)));
        lines.push(ATTRIBUTION.to_string());
        lines
    }
}
