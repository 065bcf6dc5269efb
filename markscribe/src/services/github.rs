// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Application policy on top of [`GithubPort`].
//!
//! The service owns the acting username and applies the rules every GitHub
//! template function shares: the self-named profile repository never shows
//! up in activity lists, private repositories stay out of pull requests,
//! contributions and issues, and adapters are asked for a few extra records
//! so filtering can still fill the requested count.

use std::cmp::Ordering;

use tracing::info;

use crate::{
    adapters::GithubPort,
    domain::{Contribution, Gist, Issue, PullRequest, Repo, Sponsor, Star, User},
    error::Error,
};

/// Extra records requested for repositories, forks and pull requests.
const SMALL_MARGIN: usize = 1;

/// Extra records requested for contributions and issues.
const WIDE_MARGIN: usize = 10;

/// GitHub feature service bound to one acting identity.
#[derive(Debug,)]
pub struct GithubService<P,>
{
    port:     P,
    username: String,
}

impl<P,> GithubService<P,>
where
    P: GithubPort,
{
    /// Creates a service acting as `username`.
    ///
    /// An empty username puts the service in anonymous mode: every operation
    /// that depends on the acting identity returns an empty list without
    /// reaching the adapter.
    pub fn new(port: P, username: impl Into<String,>,) -> Self
    {
        Self {
            port,
            username: username.into(),
        }
    }

    pub fn username(&self,) -> &str
    {
        &self.username
    }

    fn is_anonymous(&self,) -> bool
    {
        self.username.is_empty()
    }

    /// Qualified name of the `<user>/<user>` profile repository.
    fn meta_repository(&self,) -> String
    {
        format!("{0}/{0}", self.username)
    }

    fn is_excluded(&self, repo: &Repo, meta: &str,) -> bool
    {
        repo.name == meta
    }

    fn is_hidden(&self, repo: &Repo, meta: &str,) -> bool
    {
        repo.name == meta || repo.is_private
    }

    /// Most recently created non-fork repositories.
    ///
    /// # Errors
    ///
    /// Propagates adapter failures unchanged.
    pub async fn recent_repos(&self, count: usize,) -> Result<Vec<Repo,>, Error,>
    {
        self.owned_repositories(count, false,).await
    }

    /// Most recently created forks.
    ///
    /// # Errors
    ///
    /// Propagates adapter failures unchanged.
    pub async fn recent_forks(&self, count: usize,) -> Result<Vec<Repo,>, Error,>
    {
        self.owned_repositories(count, true,).await
    }

    async fn owned_repositories(
        &self,
        count: usize,
        include_forks: bool,
    ) -> Result<Vec<Repo,>, Error,>
    {
        if self.is_anonymous() || count == 0 {
            return Ok(Vec::new(),);
        }

        let meta = self.meta_repository();
        let repos = self
            .port
            .recent_repositories(&self.username, count + SMALL_MARGIN, include_forks,)
            .await?;
        let repos: Vec<Repo,> = repos
            .into_iter()
            .filter(|repo| !self.is_excluded(repo, &meta,),)
            .take(count,)
            .collect();

        info!("Resolved {} repositories (forks: {})", repos.len(), include_forks);
        Ok(repos,)
    }

    /// Looks up a single repository. Private repositories are returned as is.
    ///
    /// # Errors
    ///
    /// Propagates adapter failures unchanged.
    pub async fn repo(&self, owner: &str, name: &str,) -> Result<Repo, Error,>
    {
        self.port.repository(owner, name,).await
    }

    pub async fn followers(&self, count: usize,) -> Result<Vec<User,>, Error,>
    {
        if self.is_anonymous() {
            return Ok(Vec::new(),);
        }

        let mut followers = self.port.followers(&self.username, count,).await?;
        followers.truncate(count,);
        Ok(followers,)
    }

    /// Most recently created pull requests on public, non-profile repositories.
    ///
    /// # Errors
    ///
    /// Propagates adapter failures unchanged.
    pub async fn recent_pull_requests(&self, count: usize,) -> Result<Vec<PullRequest,>, Error,>
    {
        if self.is_anonymous() || count == 0 {
            return Ok(Vec::new(),);
        }

        let meta = self.meta_repository();
        let pull_requests = self.port.recent_pull_requests(&self.username, count + SMALL_MARGIN,).await?;
        let pull_requests: Vec<PullRequest,> = pull_requests
            .into_iter()
            .filter(|pull_request| !self.is_hidden(&pull_request.repo, &meta,),)
            .take(count,)
            .collect();

        info!("Resolved {} pull requests", pull_requests.len());
        Ok(pull_requests,)
    }

    /// Repositories with their latest stable release, newest release first.
    ///
    /// Releases published at the same instant are ordered by star count.
    ///
    /// # Errors
    ///
    /// Propagates adapter failures unchanged.
    pub async fn recent_releases(&self, count: usize,) -> Result<Vec<Repo,>, Error,>
    {
        if self.is_anonymous() {
            return Ok(Vec::new(),);
        }

        let mut repos = self.port.recent_releases(&self.username, count,).await?;
        sort_by_release_recency(&mut repos,);
        repos.truncate(count,);

        info!("Resolved {} releases", repos.len());
        Ok(repos,)
    }

    /// Repositories recently pushed to, newest push first.
    ///
    /// # Errors
    ///
    /// Propagates adapter failures unchanged.
    pub async fn recent_contributions(&self, count: usize,) -> Result<Vec<Contribution,>, Error,>
    {
        if self.is_anonymous() || count == 0 {
            return Ok(Vec::new(),);
        }

        let meta = self.meta_repository();
        let mut contributions = self
            .port
            .recent_contributions(&self.username, count + WIDE_MARGIN,)
            .await?;
        contributions.retain(|contribution| !self.is_hidden(&contribution.repo, &meta,),);
        contributions.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at,),);
        contributions.truncate(count,);

        info!("Resolved {} contributions", contributions.len());
        Ok(contributions,)
    }

    /// Latest issue per repository, newest first.
    ///
    /// # Errors
    ///
    /// Propagates adapter failures unchanged.
    pub async fn recent_issues(&self, count: usize,) -> Result<Vec<Issue,>, Error,>
    {
        if self.is_anonymous() || count == 0 {
            return Ok(Vec::new(),);
        }

        let meta = self.meta_repository();
        let mut issues = self.port.recent_issues(&self.username, count + WIDE_MARGIN,).await?;
        issues.retain(|issue| !self.is_hidden(&issue.repo, &meta,),);
        issues.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at,),);
        issues.truncate(count,);

        info!("Resolved {} issues", issues.len());
        Ok(issues,)
    }

    pub async fn sponsors(&self, count: usize,) -> Result<Vec<Sponsor,>, Error,>
    {
        if self.is_anonymous() {
            return Ok(Vec::new(),);
        }

        let mut sponsors = self.port.sponsors(&self.username, count,).await?;
        sponsors.truncate(count,);
        Ok(sponsors,)
    }

    pub async fn gists(&self, count: usize,) -> Result<Vec<Gist,>, Error,>
    {
        if self.is_anonymous() {
            return Ok(Vec::new(),);
        }

        let mut gists = self.port.gists(&self.username, count,).await?;
        gists.truncate(count,);
        Ok(gists,)
    }

    pub async fn recent_stars(&self, count: usize,) -> Result<Vec<Star,>, Error,>
    {
        if self.is_anonymous() {
            return Ok(Vec::new(),);
        }

        let mut stars = self.port.recent_stars(&self.username, count,).await?;
        stars.truncate(count,);
        Ok(stars,)
    }
}

/// Stable-sorts repositories by release publish time, newest first, breaking
/// ties by star count, most starred first.
///
/// Repositories without a release sort after every released one.
pub fn sort_by_release_recency(repos: &mut [Repo],)
{
    repos.sort_by(|a, b| compare_release_recency(a, b,),);
}

fn compare_release_recency(a: &Repo, b: &Repo,) -> Ordering
{
    let published = |repo: &Repo| repo.last_release.as_ref().map(|release| release.published_at,);
    published(b,).cmp(&published(a,),).then_with(|| b.stargazers.cmp(&a.stargazers,),)
}
