// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Goodreads shelf adapter backed by the XML `review/list` endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::{
    domain::{Author, Book, Review, unset_time},
    error::{Error, http_error},
};

const GOODREADS_API: &str = "https://www.goodreads.com";

/// Timestamp layout used by every date element of the review list.
const GOODREADS_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Book-shelf operations consumed by the Goodreads feature service.
#[allow(async_fn_in_trait)]
pub trait GoodreadsPort
{
    /// Reviews on the "read" shelf, most recently read first.
    async fn reviews(&self, count: usize,) -> Result<Vec<Review,>, Error,>;

    /// Reviews on the "currently-reading" shelf, most recently updated first.
    async fn currently_reading(&self, count: usize,) -> Result<Vec<Review,>, Error,>;
}

/// [`GoodreadsPort`] implementation issuing authenticated HTTP requests.
///
/// Missing credentials are tolerated at construction time and reported as
/// [`Error::Validation`] on the first call.
#[derive(Clone,)]
pub struct GoodreadsAdapter
{
    http:    reqwest::Client,
    token:   Option<String,>,
    user_id: Option<String,>,
}

impl GoodreadsAdapter
{
    pub fn new(http: reqwest::Client, token: Option<String,>, user_id: Option<String,>,) -> Self
    {
        Self {
            http,
            token,
            user_id,
        }
    }

    async fn review_list(
        &self,
        shelf: &str,
        sort: &str,
        count: usize,
    ) -> Result<Vec<Review,>, Error,>
    {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| Error::validation("GOODREADS_TOKEN must be set to query Goodreads",),)?;
        let user_id = self.user_id.as_deref().ok_or_else(|| {
            Error::validation("GOODREADS_USER_ID must be set to query Goodreads",)
        },)?;

        if count == 0 {
            return Ok(Vec::new(),);
        }

        let url = format!("{GOODREADS_API}/review/list/{user_id}.xml");
        let per_page = count.to_string();
        debug!("Requesting Goodreads shelf {} for user {}", shelf, user_id);

        let body = self
            .http
            .get(&url,)
            .query(&[
                ("v", "2",),
                ("key", token,),
                ("shelf", shelf,),
                ("sort", sort,),
                ("order", "d",),
                ("page", "1",),
                ("per_page", per_page.as_str(),),
            ],)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status,)
            .map_err(|source| http_error(&url, source,),)?
            .text()
            .await
            .map_err(|source| http_error(&url, source,),)?;

        parse_review_list(&body,)
    }
}

impl GoodreadsPort for GoodreadsAdapter
{
    async fn reviews(&self, count: usize,) -> Result<Vec<Review,>, Error,>
    {
        self.review_list("read", "date_read", count,).await
    }

    async fn currently_reading(&self, count: usize,) -> Result<Vec<Review,>, Error,>
    {
        self.review_list("currently-reading", "date_updated", count,).await
    }
}

impl std::fmt::Debug for GoodreadsAdapter
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("GoodreadsAdapter",)
            .field("token", &self.token.as_ref().map(|_| "<redacted>",),)
            .field("user_id", &self.user_id,)
            .finish()
    }
}

/// Decodes a `review/list` XML document into reviews in document order.
///
/// # Errors
///
/// Returns [`Error::Xml`] when the document is not a review list.
pub(crate) fn parse_review_list(xml: &str,) -> Result<Vec<Review,>, Error,>
{
    let response: ReviewListResponse = quick_xml::de::from_str(xml,)?;
    Ok(response.reviews.review.into_iter().map(review_from_node,).collect(),)
}

fn parse_date(value: &str,) -> DateTime<Utc,>
{
    DateTime::parse_from_str(value.trim(), GOODREADS_DATE_FORMAT,)
        .map(|parsed| parsed.with_timezone(&Utc,),)
        .unwrap_or_else(|_| unset_time(),)
}

fn review_from_node(node: ReviewNode,) -> Review
{
    Review {
        id:           node.id.trim().to_owned(),
        book:         book_from_node(node.book,),
        rating:       node.rating.trim().parse().unwrap_or_default(),
        started_at:   parse_date(&node.started_at,),
        read_at:      parse_date(&node.read_at,),
        date_added:   parse_date(&node.date_added,),
        date_updated: parse_date(&node.date_updated,),
        body:         node.body.trim().to_owned(),
        url:          node.url.trim().to_owned(),
    }
}

fn book_from_node(node: BookNode,) -> Book
{
    Book {
        id:                   node.id.value.trim().to_owned(),
        isbn:                 node.isbn.value.trim().to_owned(),
        title:                node.title.trim().to_owned(),
        title_without_series: node.title_without_series.trim().to_owned(),
        image_url:            node.image_url.trim().to_owned(),
        link:                 node.link.trim().to_owned(),
        num_pages:            node.num_pages.value.trim().parse().unwrap_or_default(),
        description:          node.description.trim().to_owned(),
        authors:              node
            .authors
            .author
            .into_iter()
            .map(|author| Author {
                id:   author.id.value.trim().to_owned(),
                name: author.name.trim().to_owned(),
            },)
            .collect(),
    }
}

#[derive(Debug, Deserialize,)]
struct ReviewListResponse
{
    #[serde(default)]
    reviews: ReviewsNode,
}

#[derive(Debug, Default, Deserialize,)]
struct ReviewsNode
{
    #[serde(default)]
    review: Vec<ReviewNode,>,
}

/// Element whose text is wanted but which may carry attributes such as
/// `type="integer"` or `nil="true"`.
#[derive(Debug, Default, Deserialize,)]
struct TextNode
{
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Deserialize,)]
struct ReviewNode
{
    #[serde(default)]
    id:           String,
    book:         BookNode,
    #[serde(default)]
    rating:       String,
    #[serde(default)]
    started_at:   String,
    #[serde(default)]
    read_at:      String,
    #[serde(default)]
    date_added:   String,
    #[serde(default)]
    date_updated: String,
    #[serde(default)]
    body:         String,
    #[serde(default)]
    url:          String,
}

#[derive(Debug, Deserialize,)]
struct BookNode
{
    #[serde(default)]
    id:                   TextNode,
    #[serde(default)]
    isbn:                 TextNode,
    #[serde(default)]
    title:                String,
    #[serde(default)]
    title_without_series: String,
    #[serde(default)]
    image_url:            String,
    #[serde(default)]
    link:                 String,
    #[serde(default)]
    num_pages:            TextNode,
    #[serde(default)]
    description:          String,
    #[serde(default)]
    authors:              AuthorsNode,
}

#[derive(Debug, Default, Deserialize,)]
struct AuthorsNode
{
    #[serde(default)]
    author: Vec<AuthorNode,>,
}

#[derive(Debug, Deserialize,)]
struct AuthorNode
{
    #[serde(default)]
    id:   TextNode,
    #[serde(default)]
    name: String,
}
