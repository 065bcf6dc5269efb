// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory transports and ports shared by the unit tests.

use std::{collections::VecDeque, sync::Mutex};

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::{
    adapters::{FeedPort, GithubPort, GoodreadsPort, LiteralPort},
    domain::{
        Author, Book, Contribution, FeedEntry, Gist, Issue, LiteralBook, PullRequest,
        PullRequestState, Repo, Review, Sponsor, Star, User, unset_time,
    },
    error::Error,
    graphql::GraphqlClient,
};

/// GraphQL transport replaying scripted response bodies in order.
#[derive(Debug, Default,)]
pub(crate) struct ScriptedGraphql
{
    responses: Mutex<VecDeque<Value,>,>,
    requests:  Mutex<Vec<(String, Value,),>,>,
}

impl ScriptedGraphql
{
    pub(crate) fn new(responses: Vec<Value,>,) -> Self
    {
        Self {
            responses: Mutex::new(responses.into(),),
            requests:  Mutex::new(Vec::new(),),
        }
    }

    /// Every `(query, variables)` pair sent so far.
    pub(crate) fn requests(&self,) -> Vec<(String, Value,),>
    {
        self.requests.lock().expect("requests lock poisoned",).clone()
    }
}

impl GraphqlClient for ScriptedGraphql
{
    async fn execute(&self, query: &str, variables: Value,) -> Result<Value, Error,>
    {
        self.requests.lock().expect("requests lock poisoned",).push((query.to_owned(), variables,),);
        self.responses
            .lock()
            .expect("responses lock poisoned",)
            .pop_front()
            .ok_or_else(|| Error::query("no scripted response left",),)
    }
}

pub(crate) fn at(year: i32, month: u32, day: u32,) -> DateTime<Utc,>
{
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0,).unwrap()
}

pub(crate) fn repo(name: &str,) -> Repo
{
    Repo {
        name:         name.to_owned(),
        url:          format!("https://github.com/{name}"),
        description:  String::new(),
        stargazers:   0,
        is_private:   false,
        last_release: None,
    }
}

pub(crate) fn private_repo(name: &str,) -> Repo
{
    Repo {
        is_private: true,
        ..repo(name,)
    }
}

pub(crate) fn released_repo(name: &str, published_at: DateTime<Utc,>, stargazers: u64,) -> Repo
{
    Repo {
        stargazers,
        last_release: Some(crate::domain::Release {
            name: "v1.0.0".to_owned(),
            tag_name: "v1.0.0".to_owned(),
            published_at,
            url: format!("https://github.com/{name}/releases/tag/v1.0.0"),
        },),
        ..repo(name,)
    }
}

pub(crate) fn user(login: &str,) -> User
{
    User {
        login:      login.to_owned(),
        name:       String::new(),
        avatar_url: String::new(),
        url:        format!("https://github.com/{login}"),
    }
}

pub(crate) fn pull_request(repo: Repo, created_at: DateTime<Utc,>,) -> PullRequest
{
    PullRequest {
        title: format!("Update {}", repo.name),
        url: format!("{}/pull/1", repo.url),
        state: PullRequestState::Open,
        created_at,
        repo,
    }
}

pub(crate) fn contribution(repo: Repo, occurred_at: DateTime<Utc,>,) -> Contribution
{
    Contribution {
        occurred_at,
        repo,
    }
}

pub(crate) fn issue(repo: Repo, occurred_at: DateTime<Utc,>,) -> Issue
{
    Issue {
        title: format!("Issue in {}", repo.name),
        repo,
        occurred_at,
    }
}

pub(crate) fn review(id: &str,) -> Review
{
    Review {
        id:           id.to_owned(),
        book:         Book {
            id:                   id.to_owned(),
            isbn:                 String::new(),
            title:                format!("Book {id}"),
            title_without_series: format!("Book {id}"),
            image_url:            String::new(),
            link:                 String::new(),
            num_pages:            0,
            description:          String::new(),
            authors:              vec![Author {
                id:   "1".to_owned(),
                name: "Ursula K. Le Guin".to_owned(),
            }],
        },
        rating:       0,
        started_at:   unset_time(),
        read_at:      unset_time(),
        date_added:   unset_time(),
        date_updated: unset_time(),
        body:         String::new(),
        url:          String::new(),
    }
}

pub(crate) fn literal_book(id: &str,) -> LiteralBook
{
    LiteralBook {
        id:          id.to_owned(),
        slug:        format!("book-{id}"),
        title:       format!("Book {id}"),
        subtitle:    String::new(),
        description: String::new(),
        cover:       String::new(),
        authors:     Vec::new(),
    }
}

pub(crate) fn feed_entry(title: &str,) -> FeedEntry
{
    FeedEntry {
        title:        title.to_owned(),
        url:          format!("https://example.com/{title}"),
        published_at: unset_time(),
    }
}

/// Canned [`GithubPort`] that records which operations were invoked.
#[derive(Debug, Default,)]
pub(crate) struct StubGithub
{
    pub(crate) login:         String,
    pub(crate) repos:         Vec<Repo,>,
    pub(crate) forks:         Vec<Repo,>,
    pub(crate) followers:     Vec<User,>,
    pub(crate) pull_requests: Vec<PullRequest,>,
    pub(crate) releases:      Vec<Repo,>,
    pub(crate) contributions: Vec<Contribution,>,
    pub(crate) issues:        Vec<Issue,>,
    pub(crate) sponsors:      Vec<Sponsor,>,
    pub(crate) gists:         Vec<Gist,>,
    pub(crate) stars:         Vec<Star,>,
    pub(crate) failing:       bool,
    /// Serve every canned item regardless of the requested count.
    pub(crate) ignores_count: bool,
    pub(crate) calls:         Mutex<Vec<(&'static str, usize,),>,>,
}

impl StubGithub
{
    /// Every `(operation, requested count)` pair seen so far.
    pub(crate) fn calls(&self,) -> Vec<(&'static str, usize,),>
    {
        self.calls.lock().expect("calls lock poisoned",).clone()
    }

    fn serve<T: Clone,>(
        &self,
        operation: &'static str,
        items: &[T],
        count: usize,
    ) -> Result<Vec<T,>, Error,>
    {
        self.calls.lock().expect("calls lock poisoned",).push((operation, count,),);
        if self.failing {
            return Err(Error::query(format!("{operation} failed"),),);
        }
        if self.ignores_count {
            return Ok(items.to_vec(),);
        }
        Ok(items.iter().take(count,).cloned().collect(),)
    }
}

impl GithubPort for StubGithub
{
    async fn recent_repositories(
        &self,
        _username: &str,
        count: usize,
        include_forks: bool,
    ) -> Result<Vec<Repo,>, Error,>
    {
        if include_forks {
            self.serve("forks", &self.forks, count,)
        } else {
            self.serve("repos", &self.repos, count,)
        }
    }

    async fn repository(&self, owner: &str, name: &str,) -> Result<Repo, Error,>
    {
        let qualified = format!("{owner}/{name}");
        let mut found = self.serve("repository", &self.repos, usize::MAX,)?;
        found.retain(|repo| repo.name == qualified,);
        found.pop().ok_or_else(|| Error::query(format!("repository {qualified} was not found"),),)
    }

    async fn viewer_login(&self,) -> Result<String, Error,>
    {
        self.serve("viewer", &[self.login.clone()], 1,)?
            .pop()
            .ok_or_else(|| Error::query("no viewer",),)
    }

    async fn followers(&self, _username: &str, count: usize,) -> Result<Vec<User,>, Error,>
    {
        self.serve("followers", &self.followers, count,)
    }

    async fn recent_pull_requests(
        &self,
        _username: &str,
        count: usize,
    ) -> Result<Vec<PullRequest,>, Error,>
    {
        self.serve("pull_requests", &self.pull_requests, count,)
    }

    async fn recent_releases(&self, _username: &str, count: usize,) -> Result<Vec<Repo,>, Error,>
    {
        self.serve("releases", &self.releases, count,)
    }

    async fn recent_contributions(
        &self,
        _username: &str,
        count: usize,
    ) -> Result<Vec<Contribution,>, Error,>
    {
        self.serve("contributions", &self.contributions, count,)
    }

    async fn recent_issues(&self, _username: &str, count: usize,) -> Result<Vec<Issue,>, Error,>
    {
        self.serve("issues", &self.issues, count,)
    }

    async fn sponsors(&self, _username: &str, count: usize,) -> Result<Vec<Sponsor,>, Error,>
    {
        self.serve("sponsors", &self.sponsors, count,)
    }

    async fn gists(&self, _username: &str, count: usize,) -> Result<Vec<Gist,>, Error,>
    {
        self.serve("gists", &self.gists, count,)
    }

    async fn recent_stars(&self, _username: &str, count: usize,) -> Result<Vec<Star,>, Error,>
    {
        self.serve("stars", &self.stars, count,)
    }
}

#[derive(Debug, Default,)]
pub(crate) struct StubGoodreads
{
    pub(crate) read:    Vec<Review,>,
    pub(crate) reading: Vec<Review,>,
}

impl GoodreadsPort for StubGoodreads
{
    async fn reviews(&self, _count: usize,) -> Result<Vec<Review,>, Error,>
    {
        Ok(self.read.clone(),)
    }

    async fn currently_reading(&self, _count: usize,) -> Result<Vec<Review,>, Error,>
    {
        Ok(self.reading.clone(),)
    }
}

#[derive(Debug, Default,)]
pub(crate) struct StubLiteral
{
    pub(crate) books: Vec<LiteralBook,>,
}

impl LiteralPort for StubLiteral
{
    async fn currently_reading(&self, _count: usize,) -> Result<Vec<LiteralBook,>, Error,>
    {
        Ok(self.books.clone(),)
    }
}

/// Feed port returning the same entries for any URL, or failing for URLs
/// containing `broken`.
#[derive(Debug, Default,)]
pub(crate) struct StubFeed
{
    pub(crate) entries: Vec<FeedEntry,>,
}

impl FeedPort for StubFeed
{
    async fn recent_entries(&self, url: &str, _count: usize,) -> Result<Vec<FeedEntry,>, Error,>
    {
        if url.contains("broken",) {
            return Err(Error::query(format!("feed {url} is broken"),),);
        }
        Ok(self.entries.clone(),)
    }
}
