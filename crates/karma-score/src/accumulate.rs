use karma_core::{EventKind, KarmaTotals, PointSchedule, ReviewEvent};

use crate::heuristics;

/// Score one unit of work's review activity into a totals delta.
///
/// Bot authors earn nothing. Reviews earn the base review points;
/// comments never do. Both kinds earn the emoji and constructive bonuses
/// independently, so a single event can collect all three.
pub fn score_events(schedule: &PointSchedule, events: &[ReviewEvent]) -> KarmaTotals {
    let mut totals = KarmaTotals::new();

    for event in events {
        if heuristics::is_bot(&event.author) {
            continue;
        }

        if matches!(event.kind, EventKind::Review) {
            *totals.entry(event.author.clone()).or_insert(0) += schedule.review_points;
        }
        if heuristics::has_positive_emoji(&event.body) {
            *totals.entry(event.author.clone()).or_insert(0) += schedule.positive_emoji_points;
        }
        if heuristics::is_constructive_comment(&event.body) {
            *totals.entry(event.author.clone()).or_insert(0) +=
                schedule.constructive_comment_points;
        }
    }

    totals
}

pub fn merge_totals(into: &mut KarmaTotals, delta: &KarmaTotals) {
    for (username, points) in delta {
        *into.entry(username.clone()).or_insert(0) += points;
    }
}
