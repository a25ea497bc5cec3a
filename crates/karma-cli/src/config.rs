//! Environment-based configuration, resolved once at startup.

use karma_core::{KarmaError, KarmaResult, PointSchedule};

pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_REVIEW_POINT: &str = "REVIEW_POINT";
pub const ENV_POSITIVE_EMOJI_POINT: &str = "POSITIVE_EMOJI_POINT";
pub const ENV_CONSTRUCTIVE_COMMENT_POINT: &str = "CONSTRUCTIVE_COMMENT_POINT";
pub const ENV_INCREMENTAL_UPDATE: &str = "INCREMENTAL_UPDATE";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub schedule: PointSchedule,
    pub incremental: bool,
}

impl Config {
    pub fn from_env() -> KarmaResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> KarmaResult<Self> {
        let token = lookup(ENV_TOKEN)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                KarmaError::Config(format!("{} environment variable is required", ENV_TOKEN))
            })?;

        let slug = lookup(ENV_REPOSITORY)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                KarmaError::Config(format!(
                    "{} environment variable is required",
                    ENV_REPOSITORY
                ))
            })?;
        let (owner, repo) = parse_repo_slug(&slug)?;

        let defaults = PointSchedule::default();
        let schedule = PointSchedule {
            review_points: point_override(lookup(ENV_REVIEW_POINT), defaults.review_points),
            positive_emoji_points: point_override(
                lookup(ENV_POSITIVE_EMOJI_POINT),
                defaults.positive_emoji_points,
            ),
            constructive_comment_points: point_override(
                lookup(ENV_CONSTRUCTIVE_COMMENT_POINT),
                defaults.constructive_comment_points,
            ),
        };

        let incremental = lookup(ENV_INCREMENTAL_UPDATE)
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            token,
            owner,
            repo,
            schedule,
            incremental,
        })
    }
}

fn parse_repo_slug(slug: &str) -> KarmaResult<(String, String)> {
    let mut parts = slug.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(KarmaError::Config(format!(
            "invalid {} format, expected owner/repo",
            ENV_REPOSITORY
        ))),
    }
}

/// Malformed or negative override values silently keep the current value.
fn point_override(value: Option<String>, current: i64) -> i64 {
    match value
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<i64>().ok())
    {
        Some(points) if points >= 0 => points,
        _ => current,
    }
}
