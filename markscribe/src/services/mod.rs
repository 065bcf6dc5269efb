// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-provider feature services applying application policy to adapters.

mod feed;
mod github;
mod goodreads;
mod literal;

pub use feed::FeedService;
pub use github::{GithubService, sort_by_release_recency};
pub use goodreads::GoodreadsService;
pub use literal::LiteralService;
