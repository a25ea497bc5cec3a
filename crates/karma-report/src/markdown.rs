//! Markdown rendering of the leaderboard.

use chrono::{DateTime, Utc};
use karma_core::{KarmaError, KarmaResult, Leaderboard, PointSchedule};
use tracing::info;

pub const REPORT_PATH: &str = "REVIEWERS.md";

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Pure render of the report: header, active scoring rules, ranked
/// table with medals on the top three, generation timestamp footer.
pub fn render_markdown(
    leaderboard: &Leaderboard,
    schedule: &PointSchedule,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    out.push_str("# Reviewer Karma Leaderboard\n\n");
    out.push_str(
        "This leaderboard tracks reviewer engagement and contributions to the repository.\n\n",
    );
    out.push_str("## Scoring System\n\n");
    out.push_str(&format!(
        "- ✅ Giving a code review: +{} point(s)\n",
        schedule.review_points
    ));
    out.push_str(&format!(
        "- ✅ Review includes a positive emoji (👍, 🔥, 😄, etc.): +{} point(s)\n",
        schedule.positive_emoji_points
    ));
    out.push_str(&format!(
        "- ✅ Review comment contains a constructive message (>10 words): +{} point(s)\n\n",
        schedule.constructive_comment_points
    ));
    out.push_str("## Current Rankings\n\n");
    out.push_str("| Rank | Reviewer | Points |\n");
    out.push_str("|------|----------|--------|\n");

    for (i, entry) in leaderboard.entries.iter().enumerate() {
        let rank = i + 1;
        let medal = if rank <= 3 {
            format!("{} ", MEDALS[rank - 1])
        } else {
            String::new()
        };
        out.push_str(&format!(
            "| {} | {}@{} | {} |\n",
            rank, medal, entry.username, entry.points
        ));
    }

    out.push_str("\n---\n");
    out.push_str(&format!(
        "*Last updated: {}*\n",
        now.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out
}

/// Renders with the current time and overwrites the well-known report
/// file in the working directory.
pub fn write_report(leaderboard: &Leaderboard, schedule: &PointSchedule) -> KarmaResult<()> {
    let content = render_markdown(leaderboard, schedule, Utc::now());

    std::fs::write(REPORT_PATH, content)
        .map_err(|e| KarmaError::Report(format!("failed to write {}: {}", REPORT_PATH, e)))?;

    info!(path = REPORT_PATH, reviewers = leaderboard.entries.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use karma_core::LeaderboardEntry;

    fn entry(username: &str, points: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            username: username.to_string(),
            points,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap()
    }

    #[test]
    fn top_three_ranks_wear_medals() {
        let leaderboard = Leaderboard {
            entries: vec![
                entry("alice", 18),
                entry("bob", 12),
                entry("carol", 10),
                entry("dave", 8),
            ],
        };

        let report = render_markdown(&leaderboard, &PointSchedule::default(), fixed_now());

        assert!(report.contains("| 1 | 🥇 @alice | 18 |"));
        assert!(report.contains("| 2 | 🥈 @bob | 12 |"));
        assert!(report.contains("| 3 | 🥉 @carol | 10 |"));
        assert!(report.contains("| 4 | @dave | 8 |"));
    }

    #[test]
    fn scoring_section_reflects_the_active_schedule() {
        let schedule = PointSchedule {
            review_points: 3,
            positive_emoji_points: 4,
            constructive_comment_points: 5,
        };
        let report = render_markdown(&Leaderboard::default(), &schedule, fixed_now());

        assert!(report.contains("Giving a code review: +3 point(s)"));
        assert!(report.contains("positive emoji (👍, 🔥, 😄, etc.): +4 point(s)"));
        assert!(report.contains("constructive message (>10 words): +5 point(s)"));
    }

    #[test]
    fn footer_stamps_the_generation_time() {
        let report = render_markdown(
            &Leaderboard::default(),
            &PointSchedule::default(),
            fixed_now(),
        );
        assert!(report.ends_with("*Last updated: 2024-01-15 12:30:45 UTC*\n"));
    }

    #[test]
    fn empty_leaderboard_still_renders_the_table_header() {
        let report = render_markdown(
            &Leaderboard::default(),
            &PointSchedule::default(),
            fixed_now(),
        );
        assert!(report.contains("| Rank | Reviewer | Points |\n|------|----------|--------|\n"));
    }
}
