//! Thin paginated client over the GitHub REST API. Nullable API fields
//! are coerced to empty strings here and nowhere else.

use karma_core::{EventKind, KarmaError, KarmaResult, PullRequest, ReviewEvent};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const PER_PAGE: usize = 100;

#[derive(Debug, Deserialize)]
struct RawUser {
    login: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPullRequest {
    number: u64,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawReview {
    user: Option<RawUser>,
    body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawComment {
    user: Option<RawUser>,
    body: Option<String>,
}

fn author_login(user: Option<RawUser>) -> String {
    user.and_then(|u| u.login).unwrap_or_default()
}

fn review_event(raw: RawReview) -> ReviewEvent {
    ReviewEvent {
        kind: EventKind::Review,
        author: author_login(raw.user),
        body: raw.body.unwrap_or_default(),
    }
}

fn comment_event(raw: RawComment) -> ReviewEvent {
    ReviewEvent {
        kind: EventKind::Comment,
        author: author_login(raw.user),
        body: raw.body.unwrap_or_default(),
    }
}

pub struct GithubClient {
    client: reqwest::Client,
    token: String,
    api_base: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> KarmaResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent("reviewer-karma/0.1")
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            token: token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> KarmaResult<Vec<T>> {
        let url = format!("{}{}", self.api_base, path);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .query(query)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(KarmaError::Api(format!(
                "{} returned {}",
                path,
                resp.status()
            )));
        }

        Ok(resp.json().await?)
    }

    /// Fetches every page before returning. A short page terminates the
    /// listing, so callers never see partial results.
    async fn drain_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, &str)],
    ) -> KarmaResult<Vec<T>> {
        let mut all = Vec::new();
        let mut page = 1usize;

        loop {
            let mut query: Vec<(&str, String)> = vec![
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
            ];
            for &(key, value) in extra {
                query.push((key, value.to_string()));
            }

            let batch: Vec<T> = self.get_page(path, &query).await?;
            let batch_len = batch.len();
            all.extend(batch);

            if batch_len < PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(all)
    }

    /// All pull requests in the repository, regardless of state.
    pub async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> KarmaResult<Vec<PullRequest>> {
        let path = format!("/repos/{}/{}/pulls", owner, repo);
        let raw: Vec<RawPullRequest> = self.drain_pages(&path, &[("state", "all")]).await?;
        debug!(owner = %owner, repo = %repo, count = raw.len(), "pull requests fetched");

        Ok(raw
            .into_iter()
            .map(|pr| PullRequest {
                number: pr.number,
                title: pr.title.unwrap_or_default(),
            })
            .collect())
    }

    pub async fn list_reviews(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> KarmaResult<Vec<ReviewEvent>> {
        let path = format!("/repos/{}/{}/pulls/{}/reviews", owner, repo, number);
        let raw: Vec<RawReview> = self.drain_pages(&path, &[]).await?;
        debug!(number = number, count = raw.len(), "reviews fetched");

        Ok(raw.into_iter().map(review_event).collect())
    }

    pub async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> KarmaResult<Vec<ReviewEvent>> {
        let path = format!("/repos/{}/{}/pulls/{}/comments", owner, repo, number);
        let raw: Vec<RawComment> = self.drain_pages(&path, &[]).await?;
        debug!(number = number, count = raw.len(), "comments fetched");

        Ok(raw.into_iter().map(comment_event).collect())
    }
}
