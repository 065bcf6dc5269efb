//! Render README-style documents from personal activity data.
//!
//! A user-authored template calls named functions such as `recentRepos(5)`
//! or `rss(url, 3)`; each call travels through the [`Scribe`] facade to a
//! feature service, which asks a provider adapter for records and applies
//! filtering, ordering and truncation before the template engine substitutes
//! the results.
//!
//! Supported providers are the GitHub GraphQL API, Goodreads shelves,
//! Literal.club reading lists and any RSS, Atom or JSON feed.

mod adapters;
mod config;
mod domain;
mod error;
mod graphql;
mod present;
mod render;
mod scribe;
mod services;
#[cfg(test)]
mod testing;

pub use adapters::{
    FeedAdapter, FeedPort, GithubAdapter, GithubPort, GoodreadsAdapter, GoodreadsPort,
    LiteralAdapter, LiteralPort,
};
pub use config::Credentials;
pub use domain::{
    Author, Book, Contribution, FeedEntry, Gist, Issue, LiteralBook, PullRequest, PullRequestState,
    Release, Repo, Review, Sponsor, Star, User, is_unset, unset_time,
};
pub use error::{Error, io_error, output_error};
pub use graphql::{GraphqlClient, HttpGraphql};
pub use present::{humanize, humanize_at, reverse};
pub use render::{environment, render_template};
pub use scribe::{LiveScribe, Scribe};
pub use services::{
    FeedService, GithubService, GoodreadsService, LiteralService, sort_by_release_recency,
};
