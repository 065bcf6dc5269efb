// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! RSS, Atom and JSON Feed adapter built on `feed-rs`.

use chrono::Utc;
use feed_rs::parser;
use tracing::debug;

use crate::{
    domain::{FeedEntry, unset_time},
    error::{Error, http_error},
};

#[allow(async_fn_in_trait)]
pub trait FeedPort
{
    /// The first `count` entries of the feed at `url`, in feed order.
    async fn recent_entries(&self, url: &str, count: usize,) -> Result<Vec<FeedEntry,>, Error,>;
}

#[derive(Debug, Clone,)]
pub struct FeedAdapter
{
    http: reqwest::Client,
}

impl FeedAdapter
{
    pub fn new(http: reqwest::Client,) -> Self
    {
        Self {
            http,
        }
    }
}

impl FeedPort for FeedAdapter
{
    async fn recent_entries(&self, url: &str, count: usize,) -> Result<Vec<FeedEntry,>, Error,>
    {
        if count == 0 {
            return Ok(Vec::new(),);
        }

        debug!("Fetching feed {}", url);
        let bytes = self
            .http
            .get(url,)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status,)
            .map_err(|source| http_error(url, source,),)?
            .bytes()
            .await
            .map_err(|source| http_error(url, source,),)?;

        parse_entries(url, &bytes, count,)
    }
}

/// Parses a feed document and keeps its first `count` entries.
///
/// # Errors
///
/// Returns [`Error::Feed`] when the document is not a recognizable feed.
pub(crate) fn parse_entries(url: &str, content: &[u8], count: usize,) -> Result<Vec<FeedEntry,>, Error,>
{
    let feed = parser::parse(content,).map_err(|source| Error::Feed {
        url: url.to_owned(),
        source,
    },)?;

    Ok(feed
        .entries
        .into_iter()
        .take(count,)
        .map(|entry| FeedEntry {
            title:        entry.title.map(|title| title.content,).unwrap_or_default(),
            url:          entry.links.first().map(|link| link.href.clone(),).unwrap_or_default(),
            published_at: entry
                .published
                .or(entry.updated,)
                .map(|timestamp| timestamp.with_timezone(&Utc,),)
                .unwrap_or_else(unset_time,),
        },)
        .collect(),)
}

#[cfg(test)]
mod tests
{
    use chrono::TimeZone;

    use super::*;
    use crate::domain::is_unset;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Notes</title>
    <link>https://example.com</link>
    <description>Writing</description>
    <item>
      <title>Third post</title>
      <link>https://example.com/3</link>
      <pubDate>Wed, 03 Jan 2024 09:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Second post</title>
      <link>https://example.com/2</link>
    </item>
    <item>
      <title>First post</title>
      <link>https://example.com/1</link>
      <pubDate>Mon, 01 Jan 2024 09:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom notes</title>
  <id>urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6</id>
  <updated>2024-02-01T10:00:00Z</updated>
  <entry>
    <title>Only updated</title>
    <link href="https://example.com/atom/1"/>
    <id>urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a</id>
    <updated>2024-02-01T10:00:00Z</updated>
  </entry>
</feed>"#;

    #[test]
    fn keeps_feed_order_and_count()
    {
        let entries = parse_entries("https://example.com/rss", RSS.as_bytes(), 2,)
            .expect("feed should parse",);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Third post");
        assert_eq!(entries[0].url, "https://example.com/3");
        assert_eq!(entries[0].published_at, Utc.with_ymd_and_hms(2024, 1, 3, 9, 0, 0).unwrap());
        assert!(is_unset(&entries[1].published_at));
    }

    #[test]
    fn atom_entries_fall_back_to_updated()
    {
        let entries = parse_entries("https://example.com/atom", ATOM.as_bytes(), 5,)
            .expect("feed should parse",);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "https://example.com/atom/1");
        assert_eq!(entries[0].published_at, Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn garbage_is_a_feed_error()
    {
        let error = parse_entries("https://example.com/nope", b"definitely not a feed", 3,)
            .expect_err("expected feed error",);
        match error {
            Error::Feed {
                url, ..
            } => assert_eq!(url, "https://example.com/nope"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn zero_count_skips_the_fetch()
    {
        let adapter = FeedAdapter::new(reqwest::Client::new(),);
        let entries = adapter
            .recent_entries("http://127.0.0.1:9/unreachable.xml", 0,)
            .await
            .expect("zero count should not fetch",);
        assert!(entries.is_empty());
    }
}
