pub mod markdown;

use karma_core::{KarmaTotals, Leaderboard, LeaderboardEntry};

/// Ranks totals by points descending. Ties break on username ascending
/// so the output is stable run to run.
pub fn build_leaderboard(totals: &KarmaTotals) -> Leaderboard {
    let mut entries: Vec<LeaderboardEntry> = totals
        .iter()
        .map(|(username, points)| LeaderboardEntry {
            username: username.clone(),
            points: *points,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.username.cmp(&b.username))
    });

    Leaderboard { entries }
}
