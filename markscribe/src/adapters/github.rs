// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! GitHub GraphQL v4 adapter.
//!
//! Translates the nested, paginated response shapes of the GitHub GraphQL API
//! into the flat records of [`crate::domain`]. The wire structures below never
//! leave this module; the only public surface is [`GithubPort`].

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::debug;

use crate::{
    domain::{
        Contribution, Gist, Issue, PullRequest, PullRequestState, Release, Repo, Sponsor, Star,
        User, is_unset,
    },
    error::Error,
    graphql::{GraphqlClient, decode_data},
};

/// Largest page the GraphQL API serves for a single connection.
const MAX_PAGE_SIZE: usize = 100;

macro_rules! release_selection {
    () => {
        "name tagName publishedAt url isPrerelease isDraft"
    };
}

macro_rules! repository_selection {
    () => {
        concat!(
            "nameWithOwner url description isPrivate pushedAt stargazers { totalCount } ",
            "releases(last: 1) { nodes { ",
            release_selection!(),
            " } }"
        )
    };
}

macro_rules! user_selection {
    () => {
        "login name avatarUrl url"
    };
}

const RECENT_REPOSITORIES_QUERY: &str = concat!(
    "query($username: String!, $count: Int!, $isFork: Boolean!) { user(login: $username) { ",
    "repositories(first: $count, privacy: PUBLIC, isFork: $isFork, ownerAffiliations: OWNER, ",
    "orderBy: {field: CREATED_AT, direction: DESC}) { edges { node { ",
    repository_selection!(),
    " } } } } }"
);

const REPOSITORY_QUERY: &str = concat!(
    "query($owner: String!, $name: String!) { repository(owner: $owner, name: $name) { ",
    repository_selection!(),
    " } }"
);

const VIEWER_QUERY: &str = "query { viewer { login } }";

const FOLLOWERS_QUERY: &str = concat!(
    "query($username: String!, $count: Int!) { user(login: $username) { ",
    "followers(first: $count) { edges { node { ",
    user_selection!(),
    " } } } } }"
);

const PULL_REQUESTS_QUERY: &str = concat!(
    "query($username: String!, $count: Int!) { user(login: $username) { ",
    "pullRequests(first: $count, orderBy: {field: CREATED_AT, direction: DESC}) { edges { node { ",
    "title url state createdAt repository { ",
    repository_selection!(),
    " } } } } } }"
);

const RELEASES_QUERY: &str = concat!(
    "query($username: String!, $after: String) { user(login: $username) { ",
    "repositoriesContributedTo(first: 100, after: $after, includeUserRepositories: true, ",
    "contributionTypes: COMMIT, privacy: PUBLIC, orderBy: {field: PUSHED_AT, direction: DESC}) { ",
    "pageInfo { hasNextPage endCursor } edges { cursor node { ",
    repository_selection!(),
    " recentReleases: releases(first: 10, orderBy: {field: CREATED_AT, direction: DESC}) { nodes { ",
    release_selection!(),
    " } } } } } } }"
);

const CONTRIBUTIONS_QUERY: &str = concat!(
    "query($username: String!, $count: Int!) { user(login: $username) { ",
    "repositoriesContributedTo(first: $count, includeUserRepositories: true, ",
    "contributionTypes: COMMIT, orderBy: {field: PUSHED_AT, direction: DESC}) { edges { node { ",
    repository_selection!(),
    " } } } } }"
);

const ISSUES_QUERY: &str = concat!(
    "query($username: String!) { user(login: $username) { contributionsCollection { ",
    "issueContributionsByRepository(maxRepositories: 100) { repository { ",
    repository_selection!(),
    " } contributions(first: 1) { edges { node { occurredAt issue { title } } } } } } } }"
);

const SPONSORS_QUERY: &str = concat!(
    "query($username: String!, $count: Int!) { user(login: $username) { ",
    "sponsorshipsAsMaintainer(first: $count, orderBy: {field: CREATED_AT, direction: DESC}) { ",
    "edges { node { createdAt sponsorEntity { __typename ... on User { ",
    user_selection!(),
    " } ... on Organization { ",
    user_selection!(),
    " } } } } } } }"
);

const GISTS_QUERY: &str = concat!(
    "query($username: String!, $count: Int!) { user(login: $username) { ",
    "gists(first: $count, orderBy: {field: CREATED_AT, direction: DESC}) { edges { node { ",
    "name description url createdAt } } } } }"
);

const STARS_QUERY: &str = concat!(
    "query($username: String!, $count: Int!, $after: String) { user(login: $username) { ",
    "starredRepositories(first: $count, after: $after, orderBy: {field: STARRED_AT, direction: DESC}) { ",
    "pageInfo { hasNextPage endCursor } edges { cursor starredAt node { ",
    repository_selection!(),
    " } } } } }"
);

/// Source-control operations consumed by the GitHub feature service.
///
/// Every operation returns at most `count` records in provider order and
/// aborts on the first transport or query failure.
#[allow(async_fn_in_trait)]
pub trait GithubPort
{
    /// Public repositories owned by `username`, newest first.
    async fn recent_repositories(
        &self,
        username: &str,
        count: usize,
        include_forks: bool,
    ) -> Result<Vec<Repo,>, Error,>;

    /// Exact lookup of `owner/name`.
    async fn repository(&self, owner: &str, name: &str,) -> Result<Repo, Error,>;

    /// Login of the account the credential belongs to.
    async fn viewer_login(&self,) -> Result<String, Error,>;

    async fn followers(&self, username: &str, count: usize,) -> Result<Vec<User,>, Error,>;

    /// Pull requests authored by `username`, newest first.
    async fn recent_pull_requests(
        &self,
        username: &str,
        count: usize,
    ) -> Result<Vec<PullRequest,>, Error,>;

    /// Repositories carrying their latest stable release, scanned page by page.
    async fn recent_releases(&self, username: &str, count: usize,) -> Result<Vec<Repo,>, Error,>;

    /// Repositories `username` pushed to, most recently pushed first.
    async fn recent_contributions(
        &self,
        username: &str,
        count: usize,
    ) -> Result<Vec<Contribution,>, Error,>;

    /// Latest issue contribution per repository.
    async fn recent_issues(&self, username: &str, count: usize,) -> Result<Vec<Issue,>, Error,>;

    async fn sponsors(&self, username: &str, count: usize,) -> Result<Vec<Sponsor,>, Error,>;

    async fn gists(&self, username: &str, count: usize,) -> Result<Vec<Gist,>, Error,>;

    /// Public repositories starred by `username`, scanned page by page.
    async fn recent_stars(&self, username: &str, count: usize,) -> Result<Vec<Star,>, Error,>;
}

/// [`GithubPort`] implementation backed by a GraphQL transport.
#[derive(Debug, Clone,)]
pub struct GithubAdapter<C,>
{
    client: C,
}

impl<C,> GithubAdapter<C,>
where
    C: GraphqlClient,
{
    pub fn new(client: C,) -> Self
    {
        Self {
            client,
        }
    }

    async fn query<T,>(&self, query: &str, variables: Value,) -> Result<T, Error,>
    where
        T: DeserializeOwned,
    {
        let body = self.client.execute(query, variables,).await?;
        decode_data(body,)
    }

    async fn release_page(
        &self,
        username: &str,
        after: Option<String,>,
    ) -> Result<ScanPage<Repo,>, Error,>
    {
        debug!("Querying contributed repositories for {} after {:?}", username, after);
        let data: UserData<ReleasesUser,> =
            self.query(RELEASES_QUERY, json!({ "username": username, "after": after }),).await?;
        let connection = data.user.repositories_contributed_to;

        Ok(ScanPage::from_connection(connection, |edge| latest_stable_release(edge.node,),),)
    }

    async fn star_page(
        &self,
        username: &str,
        count: usize,
        after: Option<String,>,
    ) -> Result<ScanPage<Star,>, Error,>
    {
        debug!("Querying starred repositories for {} after {:?}", username, after);
        let variables = json!({
            "username": username,
            "count": page_size(count),
            "after": after,
        });
        let data: UserData<StarsUser,> = self.query(STARS_QUERY, variables,).await?;

        Ok(ScanPage::from_connection(data.user.starred_repositories, |edge| {
            if edge.node.is_private {
                return None;
            }
            Some(Star {
                starred_at: edge.starred_at.unwrap_or_default(),
                repo:       repo_from_node(edge.node,),
            },)
        },),)
    }
}

impl<C,> GithubPort for GithubAdapter<C,>
where
    C: GraphqlClient,
{
    async fn recent_repositories(
        &self,
        username: &str,
        count: usize,
        include_forks: bool,
    ) -> Result<Vec<Repo,>, Error,>
    {
        if count == 0 {
            return Ok(Vec::new(),);
        }

        debug!("Querying {} recent repositories for {} (forks: {})", count, username, include_forks);
        let variables = json!({
            "username": username,
            "count": page_size(count),
            "isFork": include_forks,
        });
        let data: UserData<RepositoriesUser,> =
            self.query(RECENT_REPOSITORIES_QUERY, variables,).await?;

        Ok(data
            .user
            .repositories
            .edges
            .into_iter()
            .map(|edge| repo_from_node(edge.node,),)
            .take(count,)
            .collect(),)
    }

    async fn repository(&self, owner: &str, name: &str,) -> Result<Repo, Error,>
    {
        debug!("Querying repository {}/{}", owner, name);
        let data: RepositoryData =
            self.query(REPOSITORY_QUERY, json!({ "owner": owner, "name": name }),).await?;
        let node = data
            .repository
            .ok_or_else(|| Error::query(format!("repository {owner}/{name} was not found"),),)?;

        Ok(repo_from_node(node,),)
    }

    async fn viewer_login(&self,) -> Result<String, Error,>
    {
        let data: ViewerData = self.query(VIEWER_QUERY, json!({}),).await?;
        Ok(data.viewer.login,)
    }

    async fn followers(&self, username: &str, count: usize,) -> Result<Vec<User,>, Error,>
    {
        if count == 0 {
            return Ok(Vec::new(),);
        }

        debug!("Querying {} followers of {}", count, username);
        let data: UserData<FollowersUser,> = self
            .query(FOLLOWERS_QUERY, json!({ "username": username, "count": page_size(count) }),)
            .await?;

        Ok(data
            .user
            .followers
            .edges
            .into_iter()
            .map(|edge| user_from_node(edge.node,),)
            .take(count,)
            .collect(),)
    }

    async fn recent_pull_requests(
        &self,
        username: &str,
        count: usize,
    ) -> Result<Vec<PullRequest,>, Error,>
    {
        if count == 0 {
            return Ok(Vec::new(),);
        }

        debug!("Querying {} recent pull requests for {}", count, username);
        let data: UserData<PullRequestsUser,> = self
            .query(PULL_REQUESTS_QUERY, json!({ "username": username, "count": page_size(count) }),)
            .await?;

        Ok(data
            .user
            .pull_requests
            .edges
            .into_iter()
            .map(|edge| pull_request_from_node(edge.node,),)
            .take(count,)
            .collect(),)
    }

    async fn recent_releases(&self, username: &str, count: usize,) -> Result<Vec<Repo,>, Error,>
    {
        scan_pages(count, move |after| self.release_page(username, after,),).await
    }

    async fn recent_contributions(
        &self,
        username: &str,
        count: usize,
    ) -> Result<Vec<Contribution,>, Error,>
    {
        if count == 0 {
            return Ok(Vec::new(),);
        }

        debug!("Querying {} contributed repositories for {}", count, username);
        let data: UserData<ContributionsUser,> = self
            .query(CONTRIBUTIONS_QUERY, json!({ "username": username, "count": page_size(count) }),)
            .await?;

        Ok(data
            .user
            .repositories_contributed_to
            .edges
            .into_iter()
            .map(|edge| {
                let occurred_at = edge.node.pushed_at.unwrap_or_default();
                Contribution {
                    occurred_at,
                    repo: repo_from_node(edge.node,),
                }
            },)
            .take(count,)
            .collect(),)
    }

    async fn recent_issues(&self, username: &str, count: usize,) -> Result<Vec<Issue,>, Error,>
    {
        if count == 0 {
            return Ok(Vec::new(),);
        }

        debug!("Querying issue contributions for {}", username);
        let data: UserData<IssuesUser,> =
            self.query(ISSUES_QUERY, json!({ "username": username }),).await?;

        let mut issues = Vec::with_capacity(count,);
        for group in data.user.contributions_collection.issue_contributions_by_repository {
            let Some(edge,) = group.contributions.edges.into_iter().next() else {
                continue;
            };
            issues.push(Issue {
                repo:        repo_from_node(group.repository,),
                occurred_at: edge.node.occurred_at.unwrap_or_default(),
                title:       edge.node.issue.map(|issue| issue.title,).unwrap_or_default(),
            },);
            if issues.len() >= count {
                break;
            }
        }

        Ok(issues,)
    }

    async fn sponsors(&self, username: &str, count: usize,) -> Result<Vec<Sponsor,>, Error,>
    {
        if count == 0 {
            return Ok(Vec::new(),);
        }

        debug!("Querying {} sponsors of {}", count, username);
        let data: UserData<SponsorsUser,> = self
            .query(SPONSORS_QUERY, json!({ "username": username, "count": page_size(count) }),)
            .await?;

        Ok(data
            .user
            .sponsorships_as_maintainer
            .edges
            .into_iter()
            .filter_map(|edge| sponsor_from_node(edge.node,),)
            .take(count,)
            .collect(),)
    }

    async fn gists(&self, username: &str, count: usize,) -> Result<Vec<Gist,>, Error,>
    {
        if count == 0 {
            return Ok(Vec::new(),);
        }

        debug!("Querying {} gists of {}", count, username);
        let data: UserData<GistsUser,> = self
            .query(GISTS_QUERY, json!({ "username": username, "count": page_size(count) }),)
            .await?;

        Ok(data
            .user
            .gists
            .edges
            .into_iter()
            .map(|edge| gist_from_node(edge.node,),)
            .take(count,)
            .collect(),)
    }

    async fn recent_stars(&self, username: &str, count: usize,) -> Result<Vec<Star,>, Error,>
    {
        scan_pages(count, move |after| self.star_page(username, count, after,),).await
    }
}

/// One page of a cursor-driven scan.
///
/// `entries` holds one slot per visited edge; `None` marks an edge that was
/// visited but did not qualify.
#[derive(Debug,)]
struct ScanPage<T,>
{
    entries:       Vec<Option<T,>,>,
    has_next_page: bool,
    end_cursor:    Option<String,>,
}

impl<T,> ScanPage<T,>
{
    fn from_connection<E, F,>(connection: CursorConnection<E,>, qualify: F,) -> Self
    where
        E: HasCursor,
        F: FnMut(E,) -> Option<T,>,
    {
        let last_cursor = connection.edges.last().map(|edge| edge.cursor().to_owned(),);
        let (has_next_page, end_cursor,) = match connection.page_info {
            Some(info,) => (info.has_next_page, info.end_cursor.or(last_cursor,),),
            None => (true, last_cursor,),
        };

        Self {
            entries: connection.edges.into_iter().map(qualify,).collect(),
            has_next_page,
            end_cursor,
        }
    }
}

/// Accumulates qualifying entries across pages until `count` is reached.
///
/// The cursor advances past every visited edge, qualifying or not, so a page
/// without a single qualifying entry still moves the scan forward. The scan
/// stops on an empty page, when the provider reports no further pages, or
/// when the page carries no cursor.
async fn scan_pages<T, F, Fut,>(count: usize, mut fetch_page: F,) -> Result<Vec<T,>, Error,>
where
    F: FnMut(Option<String,>,) -> Fut,
    Fut: Future<Output = Result<ScanPage<T,>, Error,>,>,
{
    let mut collected = Vec::with_capacity(count.min(MAX_PAGE_SIZE,),);
    if count == 0 {
        return Ok(collected,);
    }

    let mut after = None;
    loop {
        let page = fetch_page(after.take(),).await?;
        if page.entries.is_empty() {
            break;
        }

        for entry in page.entries.into_iter().flatten() {
            collected.push(entry,);
            if collected.len() >= count {
                return Ok(collected,);
            }
        }

        match page.end_cursor {
            Some(cursor,) if page.has_next_page => after = Some(cursor,),
            _ => break,
        }
    }

    Ok(collected,)
}

fn page_size(count: usize,) -> usize
{
    count.clamp(1, MAX_PAGE_SIZE,)
}

/// Picks the first non-draft, non-prerelease release with a tag and a publish
/// time and attaches it to the repository.
fn latest_stable_release(node: ContributedRepositoryNode,) -> Option<Repo,>
{
    let release = node
        .recent_releases
        .nodes
        .into_iter()
        .filter(|release| !release.is_draft && !release.is_prerelease,)
        .map(release_from_node,)
        .find(|release| !release.tag_name.is_empty() && !is_unset(&release.published_at,),)?;

    let mut repo = repo_from_node(node.repository,);
    repo.last_release = Some(release,);
    Some(repo,)
}

fn repo_from_node(node: RepositoryNode,) -> Repo
{
    let last_release = node
        .releases
        .and_then(|connection| connection.nodes.into_iter().last(),)
        .map(release_from_node,);

    Repo {
        name: node.name_with_owner,
        url: node.url,
        description: node.description.unwrap_or_default(),
        stargazers: node.stargazers.total_count,
        is_private: node.is_private,
        last_release,
    }
}

fn release_from_node(node: ReleaseNode,) -> Release
{
    Release {
        name:         node.name.unwrap_or_default(),
        tag_name:     node.tag_name.unwrap_or_default(),
        published_at: node.published_at.unwrap_or_default(),
        url:          node.url.unwrap_or_default(),
    }
}

fn user_from_node(node: UserNode,) -> User
{
    User {
        login:      node.login,
        name:       node.name.unwrap_or_default(),
        avatar_url: node.avatar_url.unwrap_or_default(),
        url:        node.url.unwrap_or_default(),
    }
}

fn pull_request_from_node(node: PullRequestNode,) -> PullRequest
{
    PullRequest {
        title:      node.title,
        url:        node.url,
        state:      node.state,
        created_at: node.created_at.unwrap_or_default(),
        repo:       repo_from_node(node.repository,),
    }
}

fn gist_from_node(node: GistNode,) -> Gist
{
    Gist {
        name:        node.name,
        description: node.description.unwrap_or_default(),
        url:         node.url,
        created_at:  node.created_at.unwrap_or_default(),
    }
}

fn sponsor_from_node(node: SponsorshipNode,) -> Option<Sponsor,>
{
    let user = match node.sponsor_entity? {
        SponsorEntity::User(user,) | SponsorEntity::Organization(user,) => user_from_node(user,),
        SponsorEntity::Other => return None,
    };

    Some(Sponsor {
        user,
        created_at: node.created_at.unwrap_or_default(),
    },)
}

#[derive(Debug, Deserialize,)]
struct UserData<T,>
{
    user: T,
}

#[derive(Debug, Deserialize,)]
struct RepositoryData
{
    repository: Option<RepositoryNode,>,
}

#[derive(Debug, Deserialize,)]
struct ViewerData
{
    viewer: ViewerNode,
}

#[derive(Debug, Deserialize,)]
struct ViewerNode
{
    login: String,
}

#[derive(Debug, Deserialize,)]
struct Connection<E,>
{
    #[serde(default = "Vec::new")]
    edges: Vec<E,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct CursorConnection<E,>
{
    #[serde(default)]
    page_info: Option<PageInfo,>,
    #[serde(default = "Vec::new")]
    edges:     Vec<E,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct PageInfo
{
    has_next_page: bool,
    end_cursor:    Option<String,>,
}

#[derive(Debug, Deserialize,)]
struct Edge<N,>
{
    node: N,
}

trait HasCursor
{
    fn cursor(&self,) -> &str;
}

#[derive(Debug, Deserialize,)]
struct ContributedEdge
{
    cursor: String,
    node:   ContributedRepositoryNode,
}

impl HasCursor for ContributedEdge
{
    fn cursor(&self,) -> &str
    {
        &self.cursor
    }
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct StarEdge
{
    cursor:     String,
    starred_at: Option<DateTime<Utc,>,>,
    node:       RepositoryNode,
}

impl HasCursor for StarEdge
{
    fn cursor(&self,) -> &str
    {
        &self.cursor
    }
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode
{
    name_with_owner: String,
    url:             String,
    #[serde(default)]
    description:     Option<String,>,
    #[serde(default)]
    is_private:      bool,
    #[serde(default)]
    pushed_at:       Option<DateTime<Utc,>,>,
    #[serde(default)]
    stargazers:      TotalCount,
    #[serde(default)]
    releases:        Option<ReleaseConnection,>,
}

#[derive(Debug, Default, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct TotalCount
{
    total_count: u64,
}

#[derive(Debug, Default, Deserialize,)]
struct ReleaseConnection
{
    #[serde(default)]
    nodes: Vec<ReleaseNode,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct ReleaseNode
{
    #[serde(default)]
    name:          Option<String,>,
    #[serde(default)]
    tag_name:      Option<String,>,
    #[serde(default)]
    published_at:  Option<DateTime<Utc,>,>,
    #[serde(default)]
    url:           Option<String,>,
    #[serde(default)]
    is_prerelease: bool,
    #[serde(default)]
    is_draft:      bool,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct ContributedRepositoryNode
{
    #[serde(flatten)]
    repository:      RepositoryNode,
    #[serde(default)]
    recent_releases: ReleaseConnection,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct UserNode
{
    login:      String,
    #[serde(default)]
    name:       Option<String,>,
    #[serde(default)]
    avatar_url: Option<String,>,
    #[serde(default)]
    url:        Option<String,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct PullRequestNode
{
    title:      String,
    url:        String,
    state:      PullRequestState,
    #[serde(default)]
    created_at: Option<DateTime<Utc,>,>,
    repository: RepositoryNode,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct GistNode
{
    name:        String,
    #[serde(default)]
    description: Option<String,>,
    url:         String,
    #[serde(default)]
    created_at:  Option<DateTime<Utc,>,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct SponsorshipNode
{
    #[serde(default)]
    created_at:     Option<DateTime<Utc,>,>,
    #[serde(default)]
    sponsor_entity: Option<SponsorEntity,>,
}

#[derive(Debug, Deserialize,)]
#[serde(tag = "__typename")]
enum SponsorEntity
{
    User(UserNode,),
    Organization(UserNode,),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize,)]
struct RepositoriesUser
{
    repositories: Connection<Edge<RepositoryNode,>,>,
}

#[derive(Debug, Deserialize,)]
struct FollowersUser
{
    followers: Connection<Edge<UserNode,>,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct PullRequestsUser
{
    pull_requests: Connection<Edge<PullRequestNode,>,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct ReleasesUser
{
    repositories_contributed_to: CursorConnection<ContributedEdge,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct ContributionsUser
{
    repositories_contributed_to: Connection<Edge<RepositoryNode,>,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct IssuesUser
{
    contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection
{
    #[serde(default)]
    issue_contributions_by_repository: Vec<IssueContributionGroup,>,
}

#[derive(Debug, Deserialize,)]
struct IssueContributionGroup
{
    repository:    RepositoryNode,
    contributions: Connection<Edge<IssueContributionNode,>,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct IssueContributionNode
{
    #[serde(default)]
    occurred_at: Option<DateTime<Utc,>,>,
    #[serde(default)]
    issue:       Option<IssueNode,>,
}

#[derive(Debug, Deserialize,)]
struct IssueNode
{
    title: String,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct SponsorsUser
{
    sponsorships_as_maintainer: Connection<Edge<SponsorshipNode,>,>,
}

#[derive(Debug, Deserialize,)]
struct GistsUser
{
    gists: Connection<Edge<GistNode,>,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct StarsUser
{
    starred_repositories: CursorConnection<StarEdge,>,
}
