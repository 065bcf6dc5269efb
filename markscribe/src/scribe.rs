// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Aggregation facade combining every feature service behind one value.
//!
//! The template binding only ever talks to [`Scribe`]; it owns the services,
//! which in turn own their adapters.

use octocrab::Octocrab;
use tracing::{info, warn};

use crate::{
    adapters::{
        FeedAdapter, FeedPort, GithubAdapter, GithubPort, GoodreadsAdapter, GoodreadsPort,
        LiteralAdapter, LiteralPort,
    },
    config::Credentials,
    domain::{
        Contribution, FeedEntry, Gist, Issue, LiteralBook, PullRequest, Repo, Review, Sponsor,
        Star, User,
    },
    error::Error,
    services::{FeedService, GithubService, GoodreadsService, LiteralService},
};

/// Facade wired to the real providers.
pub type LiveScribe = Scribe<GithubAdapter<Octocrab,>, GoodreadsAdapter, LiteralAdapter, FeedAdapter,>;

/// One named operation per template data function.
#[derive(Debug,)]
pub struct Scribe<G, R, L, F,>
{
    github:    GithubService<G,>,
    goodreads: GoodreadsService<R,>,
    literal:   LiteralService<L,>,
    feed:      FeedService<F,>,
}

impl LiveScribe
{
    /// Builds the provider clients from `credentials`.
    ///
    /// With a GitHub token the acting identity is resolved through the
    /// `viewer` query; without one the GitHub functions run anonymously.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GitHub`] when the client cannot be built and any
    /// adapter error raised while resolving the viewer login.
    pub async fn connect(credentials: &Credentials,) -> Result<Self, Error,>
    {
        let mut builder = Octocrab::builder();
        if let Some(token,) = credentials.github_token() {
            builder = builder.personal_token(token.to_owned(),);
        }
        let github = GithubAdapter::new(builder.build()?,);

        let username = match credentials.github_token() {
            Some(_,) => {
                let login = github.viewer_login().await?;
                info!("Acting as GitHub user {}", login);
                login
            }
            None => {
                warn!("GITHUB_TOKEN is not set; GitHub functions will return empty lists");
                String::new()
            }
        };

        let http = reqwest::Client::new();
        Ok(Scribe::new(
            GithubService::new(github, username,),
            GoodreadsService::new(GoodreadsAdapter::new(
                http.clone(),
                credentials.goodreads_token().map(str::to_owned,),
                credentials.goodreads_user_id().map(str::to_owned,),
            ),),
            LiteralService::new(LiteralAdapter::new(
                http.clone(),
                credentials.literal_email().map(str::to_owned,),
                credentials.literal_password().map(str::to_owned,),
            ),),
            FeedService::new(FeedAdapter::new(http,),),
        ),)
    }
}

impl<G, R, L, F,> Scribe<G, R, L, F,>
where
    G: GithubPort,
    R: GoodreadsPort,
    L: LiteralPort,
    F: FeedPort,
{
    pub fn new(
        github: GithubService<G,>,
        goodreads: GoodreadsService<R,>,
        literal: LiteralService<L,>,
        feed: FeedService<F,>,
    ) -> Self
    {
        Self {
            github,
            goodreads,
            literal,
            feed,
        }
    }

    /// Login of the acting GitHub identity; empty in anonymous mode.
    pub fn username(&self,) -> &str
    {
        self.github.username()
    }

    pub async fn recent_repos(&self, count: usize,) -> Result<Vec<Repo,>, Error,>
    {
        self.github.recent_repos(count,).await
    }

    pub async fn recent_forks(&self, count: usize,) -> Result<Vec<Repo,>, Error,>
    {
        self.github.recent_forks(count,).await
    }

    pub async fn repo(&self, owner: &str, name: &str,) -> Result<Repo, Error,>
    {
        self.github.repo(owner, name,).await
    }

    pub async fn followers(&self, count: usize,) -> Result<Vec<User,>, Error,>
    {
        self.github.followers(count,).await
    }

    pub async fn recent_pull_requests(&self, count: usize,) -> Result<Vec<PullRequest,>, Error,>
    {
        self.github.recent_pull_requests(count,).await
    }

    pub async fn recent_releases(&self, count: usize,) -> Result<Vec<Repo,>, Error,>
    {
        self.github.recent_releases(count,).await
    }

    pub async fn recent_contributions(&self, count: usize,) -> Result<Vec<Contribution,>, Error,>
    {
        self.github.recent_contributions(count,).await
    }

    pub async fn recent_issues(&self, count: usize,) -> Result<Vec<Issue,>, Error,>
    {
        self.github.recent_issues(count,).await
    }

    pub async fn sponsors(&self, count: usize,) -> Result<Vec<Sponsor,>, Error,>
    {
        self.github.sponsors(count,).await
    }

    pub async fn gists(&self, count: usize,) -> Result<Vec<Gist,>, Error,>
    {
        self.github.gists(count,).await
    }

    pub async fn recent_stars(&self, count: usize,) -> Result<Vec<Star,>, Error,>
    {
        self.github.recent_stars(count,).await
    }

    pub async fn goodreads_reviews(&self, count: usize,) -> Result<Vec<Review,>, Error,>
    {
        self.goodreads.reviews(count,).await
    }

    pub async fn goodreads_currently_reading(&self, count: usize,) -> Result<Vec<Review,>, Error,>
    {
        self.goodreads.currently_reading(count,).await
    }

    pub async fn literal_currently_reading(
        &self,
        count: usize,
    ) -> Result<Vec<LiteralBook,>, Error,>
    {
        self.literal.currently_reading(count,).await
    }

    pub async fn rss(&self, url: &str, count: usize,) -> Result<Vec<FeedEntry,>, Error,>
    {
        self.feed.recent_entries(url, count,).await
    }
}

#[cfg(test)]
pub(crate) mod tests
{
    use super::*;
    use crate::testing::{
        StubFeed, StubGithub, StubGoodreads, StubLiteral, feed_entry, literal_book, repo, review,
        user,
    };

    pub(crate) type StubScribe = Scribe<StubGithub, StubGoodreads, StubLiteral, StubFeed,>;

    /// Facade acting as `alice` over canned data for every provider.
    pub(crate) fn stub_scribe() -> StubScribe
    {
        let github = StubGithub {
            login: "alice".to_owned(),
            repos: vec![repo("alice/alice",), repo("alice/tool",), repo("alice/site",)],
            followers: vec![user("bob",), user("carol",)],
            ..StubGithub::default()
        };
        Scribe::new(
            GithubService::new(github, "alice",),
            GoodreadsService::new(StubGoodreads {
                read:    vec![review("1",), review("2",)],
                reading: vec![review("3",)],
            },),
            LiteralService::new(StubLiteral {
                books: vec![literal_book("dune",)],
            },),
            FeedService::new(StubFeed {
                entries: vec![feed_entry("first",), feed_entry("second",)],
            },),
        )
    }

    #[tokio::test]
    async fn facade_forwards_to_each_service()
    {
        let scribe = stub_scribe();

        assert_eq!(scribe.username(), "alice");
        let repos = scribe.recent_repos(5,).await.expect("repos",);
        assert_eq!(repos.iter().map(|repo| repo.name.as_str(),).collect::<Vec<_,>>(), vec![
            "alice/tool",
            "alice/site"
        ]);
        assert_eq!(scribe.repo("alice", "alice",).await.expect("repo",).name, "alice/alice");
        assert_eq!(scribe.followers(1,).await.expect("followers",).len(), 1);
        assert_eq!(scribe.goodreads_reviews(1,).await.expect("reviews",).len(), 1);
        assert_eq!(scribe.goodreads_currently_reading(5,).await.expect("reading",).len(), 1);
        assert_eq!(scribe.literal_currently_reading(5,).await.expect("books",)[0].id, "dune");
        assert_eq!(scribe.rss("https://example.com/feed", 1,).await.expect("rss",).len(), 1);
    }

    #[tokio::test]
    async fn facade_surfaces_provider_failures()
    {
        let scribe = stub_scribe();
        let error = scribe.rss("https://example.com/broken", 3,).await.expect_err("expected error",);
        assert!(matches!(error, Error::Query { .. }));
    }

    #[tokio::test]
    async fn connect_without_token_runs_anonymously()
    {
        let scribe = LiveScribe::connect(&Credentials::default(),).await.expect("connect",);

        assert_eq!(scribe.username(), "");
        assert!(scribe.recent_repos(3,).await.expect("anonymous repos",).is_empty());
        assert!(scribe.recent_stars(3,).await.expect("anonymous stars",).is_empty());
    }

    #[tokio::test]
    async fn connect_defers_book_credential_checks()
    {
        let scribe = LiveScribe::connect(&Credentials::default(),).await.expect("connect",);

        let error = scribe.goodreads_reviews(3,).await.expect_err("expected validation error",);
        assert!(matches!(error, Error::Validation { .. }));
        let error =
            scribe.literal_currently_reading(3,).await.expect_err("expected validation error",);
        assert!(matches!(error, Error::Validation { .. }));
    }
}
