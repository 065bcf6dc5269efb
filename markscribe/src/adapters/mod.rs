// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Provider adapters translating external API shapes into domain records.

mod feed;
mod github;
mod goodreads;
mod literal;

pub use feed::{FeedAdapter, FeedPort};
pub use github::{GithubAdapter, GithubPort};
pub use goodreads::{GoodreadsAdapter, GoodreadsPort};
pub use literal::{LiteralAdapter, LiteralPort};
