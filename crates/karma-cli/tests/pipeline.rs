//! End-to-end pipeline tests: review events through scoring and ranking
//! to the rendered report.

use chrono::{TimeZone, Utc};
use karma_core::{EventKind, PointSchedule, ReviewEvent};
use karma_report::{build_leaderboard, markdown::render_markdown};
use karma_score::accumulate::{merge_totals, score_events};

fn review(author: &str, body: &str) -> ReviewEvent {
    ReviewEvent {
        kind: EventKind::Review,
        author: author.to_string(),
        body: body.to_string(),
    }
}

fn comment(author: &str, body: &str) -> ReviewEvent {
    ReviewEvent {
        kind: EventKind::Comment,
        author: author.to_string(),
        body: body.to_string(),
    }
}

#[test]
fn one_review_with_thumbs_up_scores_three_points() {
    // One PR, one review by alice with body "👍", schedule {1, 2, 1}.
    let schedule = PointSchedule::default();
    let totals = score_events(&schedule, &[review("alice", "👍")]);

    let leaderboard = build_leaderboard(&totals);
    assert_eq!(leaderboard.entries.len(), 1);
    assert_eq!(leaderboard.entries[0].username, "alice");
    assert_eq!(leaderboard.entries[0].points, 3);
}

#[test]
fn multi_pr_run_accumulates_and_renders() {
    let schedule = PointSchedule::default();

    // Three pull requests' worth of activity, merged the way the full
    // recreation run does it.
    let pr_events: Vec<Vec<ReviewEvent>> = vec![
        vec![
            review("alice", "🚀 Solid change, though the retry loop deserves a bounded backoff before we ship it"),
            comment("bob", "LGTM"),
            review("github-actions[bot]", "automated check passed 👍"),
        ],
        vec![
            review("alice", "👍"),
            review("bob", ""),
        ],
        vec![
            comment("carol", "Could we split the parser module so the grammar tables stay readable as they grow larger"),
        ],
    ];

    let mut totals = karma_core::KarmaTotals::new();
    for events in &pr_events {
        merge_totals(&mut totals, &score_events(&schedule, events));
    }

    // alice: (1+2+1) + (1+2) = 7, bob: 0 + 1 = 1, carol: 1. Bot excluded.
    assert_eq!(totals["alice"], 7);
    assert_eq!(totals["bob"], 1);
    assert_eq!(totals["carol"], 1);
    assert!(!totals.contains_key("github-actions[bot]"));

    let leaderboard = build_leaderboard(&totals);
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let report = render_markdown(&leaderboard, &schedule, now);

    assert!(report.starts_with("# Reviewer Karma Leaderboard\n"));
    assert!(report.contains("| 1 | 🥇 @alice | 7 |"));
    assert!(report.contains("| 2 | 🥈 @bob | 1 |"));
    assert!(report.contains("| 3 | 🥉 @carol | 1 |"));
    assert!(report.contains("*Last updated: 2024-06-01 00:00:00 UTC*"));
}

#[test]
fn partitioned_scoring_matches_single_pass() {
    let schedule = PointSchedule::default();
    let events = vec![
        review("alice", "👍"),
        review("bob", "the error handling here swallows the root cause and should propagate it instead"),
        comment("alice", "🎉"),
        comment("dave", "nice"),
    ];

    let single = score_events(&schedule, &events);

    let mut parts = karma_core::KarmaTotals::new();
    for event in &events {
        merge_totals(&mut parts, &score_events(&schedule, std::slice::from_ref(event)));
    }

    assert_eq!(single, parts);
}
