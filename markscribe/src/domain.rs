// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Provider-agnostic records produced by the adapters.
//!
//! Every record is a flat, immutable value created fresh for a single
//! template operation. Fields the provider omitted are normalized to an empty
//! string or to [`unset_time`] so templates never observe missing values.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Returns the timestamp used when a provider did not supply one.
pub fn unset_time() -> DateTime<Utc,>
{
    DateTime::<Utc,>::default()
}

/// Reports whether the timestamp is the normalized "absent" value.
pub fn is_unset(timestamp: &DateTime<Utc,>,) -> bool
{
    *timestamp == unset_time()
}

/// A git repository hosted on the source-control platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Repo
{
    /// Qualified `owner/name` identifier.
    pub name:         String,
    pub url:          String,
    pub description:  String,
    pub stargazers:   u64,
    pub is_private:   bool,
    /// Most recent release relevant to the operation that produced the repo.
    pub last_release: Option<Release,>,
}

/// A published release of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Release
{
    pub name:         String,
    pub tag_name:     String,
    pub published_at: DateTime<Utc,>,
    pub url:          String,
}

/// An account on the source-control platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct User
{
    pub login:      String,
    pub name:       String,
    pub avatar_url: String,
    pub url:        String,
}

/// Lifecycle state of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PullRequestState
{
    Open,
    Closed,
    Merged,
}

impl fmt::Display for PullRequestState
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        let label = match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Merged => "MERGED",
        };
        f.write_str(label,)
    }
}

/// A pull request authored by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct PullRequest
{
    pub title:      String,
    pub url:        String,
    pub state:      PullRequestState,
    pub created_at: DateTime<Utc,>,
    pub repo:       Repo,
}

/// "The user pushed to this repository at this time."
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Contribution
{
    pub occurred_at: DateTime<Utc,>,
    pub repo:        Repo,
}

/// The user's most recent issue contribution to a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Issue
{
    pub repo:        Repo,
    pub occurred_at: DateTime<Utc,>,
    pub title:       String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Gist
{
    pub name:        String,
    pub description: String,
    pub url:         String,
    pub created_at:  DateTime<Utc,>,
}

/// A repository starred by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Star
{
    pub starred_at: DateTime<Utc,>,
    pub repo:       Repo,
}

/// An individual or organization sponsoring the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Sponsor
{
    pub user:       User,
    pub created_at: DateTime<Utc,>,
}

/// A single item of an RSS or Atom feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct FeedEntry
{
    pub title:        String,
    pub url:          String,
    pub published_at: DateTime<Utc,>,
}

/// Book author as reported by the book-tracking services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Author
{
    pub id:   String,
    pub name: String,
}

/// Book metadata attached to a Goodreads review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Book
{
    pub id:                   String,
    pub isbn:                 String,
    pub title:                String,
    pub title_without_series: String,
    pub image_url:            String,
    pub link:                 String,
    pub num_pages:            u32,
    pub description:          String,
    pub authors:              Vec<Author,>,
}

/// A shelf entry on Goodreads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Review
{
    pub id:           String,
    pub book:         Book,
    /// Star rating between 0 (unrated) and 5.
    pub rating:       u8,
    pub started_at:   DateTime<Utc,>,
    pub read_at:      DateTime<Utc,>,
    pub date_added:   DateTime<Utc,>,
    pub date_updated: DateTime<Utc,>,
    pub body:         String,
    pub url:          String,
}

/// A book on a Literal.club reading shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct LiteralBook
{
    pub id:          String,
    pub slug:        String,
    pub title:       String,
    pub subtitle:    String,
    pub description: String,
    pub cover:       String,
    pub authors:     Vec<Author,>,
}
