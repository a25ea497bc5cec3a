use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cumulative per-user point totals. Only ever merged additively.
pub type KarmaTotals = HashMap<String, i64>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointSchedule {
    pub review_points: i64,
    pub positive_emoji_points: i64,
    pub constructive_comment_points: i64,
}

impl Default for PointSchedule {
    fn default() -> Self {
        Self {
            review_points: 1,
            positive_emoji_points: 2,
            constructive_comment_points: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Review,
    Comment,
}

/// One review or comment, reduced to what scoring needs. Author and body
/// are always present; the ingestion boundary substitutes empty strings
/// for absent API fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewEvent {
    pub kind: EventKind,
    pub author: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
}

/// The on-disk aggregate: cumulative totals plus the set of pull requests
/// already scored. Rewritten whole-file on every save.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KarmaRecord {
    #[serde(default)]
    pub reviewers: KarmaTotals,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub processed_prs: HashMap<u64, DateTime<Utc>>,
}

impl KarmaRecord {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub points: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}
