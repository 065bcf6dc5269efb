// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tracing::info;

use crate::{adapters::FeedPort, domain::FeedEntry, error::Error};

/// RSS/Atom feature service.
#[derive(Debug,)]
pub struct FeedService<P,>
{
    port: P,
}

impl<P,> FeedService<P,>
where
    P: FeedPort,
{
    pub fn new(port: P,) -> Self
    {
        Self {
            port,
        }
    }

    /// The first `count` entries of the feed at `url`.
    ///
    /// # Errors
    ///
    /// Propagates fetch and parse failures unchanged.
    pub async fn recent_entries(&self, url: &str, count: usize,) -> Result<Vec<FeedEntry,>, Error,>
    {
        let mut entries = self.port.recent_entries(url, count,).await?;
        entries.truncate(count,);
        info!("Resolved {} entries from {}", entries.len(), url);
        Ok(entries,)
    }
}
