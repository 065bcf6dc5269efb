// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tracing::info;

use crate::{adapters::LiteralPort, domain::LiteralBook, error::Error};

/// Literal.club feature service.
#[derive(Debug,)]
pub struct LiteralService<P,>
{
    port: P,
}

impl<P,> LiteralService<P,>
where
    P: LiteralPort,
{
    pub fn new(port: P,) -> Self
    {
        Self {
            port,
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::Validation`] when Literal.club credentials are missing
    /// and propagates transport failures unchanged.
    pub async fn currently_reading(&self, count: usize,) -> Result<Vec<LiteralBook,>, Error,>
    {
        let mut books = self.port.currently_reading(count,).await?;
        books.truncate(count,);
        info!("Resolved {} books in progress on Literal.club", books.len());
        Ok(books,)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::testing::{StubLiteral, literal_book};

    #[tokio::test]
    async fn books_are_truncated_to_count()
    {
        let service = LiteralService::new(StubLiteral {
            books: vec![literal_book("a",), literal_book("b",), literal_book("c",)],
        },);

        let books = service.currently_reading(2,).await.expect("books",);

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].slug, "book-a");
    }
}
