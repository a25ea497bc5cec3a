pub mod error;
pub mod types;

pub use error::{KarmaError, KarmaResult};
pub use types::{
    EventKind, KarmaRecord, KarmaTotals, Leaderboard, LeaderboardEntry, PointSchedule,
    PullRequest, ReviewEvent,
};
