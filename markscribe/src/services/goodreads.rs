// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tracing::info;

use crate::{adapters::GoodreadsPort, domain::Review, error::Error};

/// Goodreads feature service.
#[derive(Debug,)]
pub struct GoodreadsService<P,>
{
    port: P,
}

impl<P,> GoodreadsService<P,>
where
    P: GoodreadsPort,
{
    pub fn new(port: P,) -> Self
    {
        Self {
            port,
        }
    }

    /// Finished books, most recently read first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when Goodreads credentials are missing
    /// and propagates transport failures unchanged.
    pub async fn reviews(&self, count: usize,) -> Result<Vec<Review,>, Error,>
    {
        let mut reviews = self.port.reviews(count,).await?;
        reviews.truncate(count,);
        info!("Resolved {} Goodreads reviews", reviews.len());
        Ok(reviews,)
    }

    /// Books in progress, most recently updated first.
    ///
    /// # Errors
    ///
    /// Same as [`GoodreadsService::reviews`].
    pub async fn currently_reading(&self, count: usize,) -> Result<Vec<Review,>, Error,>
    {
        let mut reviews = self.port.currently_reading(count,).await?;
        reviews.truncate(count,);
        info!("Resolved {} books in progress on Goodreads", reviews.len());
        Ok(reviews,)
    }
}
