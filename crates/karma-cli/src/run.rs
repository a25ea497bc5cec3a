//! Run orchestration: full recreation or incremental update, chosen once
//! at startup.

use std::collections::HashSet;

use karma_core::{KarmaResult, KarmaTotals, ReviewEvent};
use karma_github::GithubClient;
use karma_report::{build_leaderboard, markdown};
use karma_score::accumulate::{merge_totals, score_events};
use karma_store::{KarmaStore, DEFAULT_STORE_PATH};
use tracing::{info, warn};

use crate::config::Config;

pub async fn run(config: &Config) -> KarmaResult<()> {
    let client = GithubClient::new(&config.token)?;

    info!(owner = %config.owner, repo = %config.repo, "analyzing repository");
    info!(
        review = config.schedule.review_points,
        emoji = config.schedule.positive_emoji_points,
        constructive = config.schedule.constructive_comment_points,
        "karma configuration"
    );
    let mode = if config.incremental {
        "incremental"
    } else {
        "full recreation"
    };
    info!(mode, "update mode");

    let totals = if config.incremental {
        run_incremental(&client, config).await?
    } else {
        run_full(&client, config).await?
    };

    let leaderboard = build_leaderboard(&totals);
    markdown::write_report(&leaderboard, &config.schedule)?;

    info!(reviewers = leaderboard.entries.len(), "leaderboard generated");
    Ok(())
}

/// Reviews and comments for one pull request, fetched sequentially and
/// fully drained before scoring.
async fn fetch_events(
    client: &GithubClient,
    config: &Config,
    number: u64,
) -> KarmaResult<Vec<ReviewEvent>> {
    let mut events = client
        .list_reviews(&config.owner, &config.repo, number)
        .await?;
    events.extend(
        client
            .list_comments(&config.owner, &config.repo, number)
            .await?,
    );
    Ok(events)
}

/// Recomputes totals from scratch over every pull request. Never touches
/// the persistent store.
async fn run_full(client: &GithubClient, config: &Config) -> KarmaResult<KarmaTotals> {
    let prs = client
        .list_pull_requests(&config.owner, &config.repo)
        .await?;
    info!(count = prs.len(), "pull requests found");

    let mut totals = KarmaTotals::new();
    for pr in &prs {
        info!(number = pr.number, title = %pr.title, "processing pull request");

        let events = match fetch_events(client, config, pr.number).await {
            Ok(events) => events,
            Err(e) => {
                warn!(number = pr.number, error = %e, "failed to fetch review activity, skipping");
                continue;
            }
        };

        merge_totals(&mut totals, &score_events(&config.schedule, &events));
    }

    Ok(totals)
}

/// Scores only pull requests not yet marked processed, persisting each
/// delta as it lands, and returns the cumulative totals.
async fn run_incremental(client: &GithubClient, config: &Config) -> KarmaResult<KarmaTotals> {
    let store = KarmaStore::new(DEFAULT_STORE_PATH);

    let mut record = match store.load() {
        Ok(record) => record,
        Err(e) => {
            warn!(error = %e, "failed to load karma record, starting fresh");
            karma_core::KarmaRecord::empty()
        }
    };

    let processed: HashSet<u64> = match store.processed_ids() {
        Ok(ids) => ids,
        Err(e) => {
            warn!(error = %e, "failed to read processed pull requests");
            HashSet::new()
        }
    };

    let prs = client
        .list_pull_requests(&config.owner, &config.repo)
        .await?;
    info!(count = prs.len(), "pull requests found");

    let mut new_count = 0usize;
    for pr in &prs {
        if processed.contains(&pr.number) {
            continue;
        }
        new_count += 1;
        info!(number = pr.number, title = %pr.title, "processing new pull request");

        // Left unmarked on fetch failure so a later run can pick it up.
        let events = match fetch_events(client, config, pr.number).await {
            Ok(events) => events,
            Err(e) => {
                warn!(number = pr.number, error = %e, "failed to fetch review activity, skipping");
                continue;
            }
        };

        let delta = score_events(&config.schedule, &events);
        if let Err(e) = store.update_karma(pr.number, &delta) {
            warn!(number = pr.number, error = %e, "failed to persist karma update");
        }
        merge_totals(&mut record.reviewers, &delta);
    }

    if new_count == 0 {
        info!("no new pull requests to process");
    } else {
        info!(count = new_count, "new pull requests processed");
    }

    Ok(record.reviewers)
}
