// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Literal.club reading-shelf adapter.
//!
//! Every call logs in with the configured email and password, then lists the
//! books of the returned profile that are in the `IS_READING` state.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::{
    domain::{Author, LiteralBook},
    error::Error,
    graphql::{GraphqlClient, HttpGraphql, decode_data},
};

const LITERAL_ENDPOINT: &str = "https://literal.club/graphql/";

const LOGIN_MUTATION: &str = "mutation login($email: String!, $password: String!) { \
     login(email: $email, password: $password) { token profile { id } } }";

const READING_QUERY: &str = "query booksByReadingStateAndProfile($limit: Int!, $offset: Int!, \
     $readingStatus: ReadingStatus!, $profileId: String!) { \
     booksByReadingStateAndProfile(limit: $limit, offset: $offset, readingStatus: $readingStatus, \
     profileId: $profileId) { id slug title subtitle description cover authors { id name } } }";

#[allow(async_fn_in_trait)]
pub trait LiteralPort
{
    /// Books the account is currently reading, in provider order.
    async fn currently_reading(&self, count: usize,) -> Result<Vec<LiteralBook,>, Error,>;
}

/// [`LiteralPort`] implementation talking to the public Literal.club API.
#[derive(Clone,)]
pub struct LiteralAdapter
{
    http:     reqwest::Client,
    email:    Option<String,>,
    password: Option<String,>,
}

impl LiteralAdapter
{
    pub fn new(http: reqwest::Client, email: Option<String,>, password: Option<String,>,) -> Self
    {
        Self {
            http,
            email,
            password,
        }
    }
}

impl LiteralPort for LiteralAdapter
{
    async fn currently_reading(&self, count: usize,) -> Result<Vec<LiteralBook,>, Error,>
    {
        let (Some(email,), Some(password,),) = (self.email.as_deref(), self.password.as_deref(),)
        else {
            return Err(Error::validation(
                "LITERAL_EMAIL and LITERAL_PASSWORD must be set to query Literal.club",
            ),);
        };
        if count == 0 {
            return Ok(Vec::new(),);
        }

        let transport = HttpGraphql::new(self.http.clone(), LITERAL_ENDPOINT,);
        let session = login(&transport, email, password,).await?;
        let transport = transport.with_bearer(session.token,);
        reading_books(&transport, &session.profile.id, count,).await
    }
}

impl std::fmt::Debug for LiteralAdapter
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("LiteralAdapter",)
            .field("email", &self.email,)
            .field("password", &self.password.as_ref().map(|_| "<redacted>",),)
            .finish()
    }
}

async fn login<C,>(client: &C, email: &str, password: &str,) -> Result<Session, Error,>
where
    C: GraphqlClient,
{
    debug!("Logging in to Literal.club");
    let body = client
        .execute(LOGIN_MUTATION, json!({ "email": email, "password": password }),)
        .await?;
    let data: LoginData = decode_data(body,)?;
    Ok(data.login,)
}

async fn reading_books<C,>(
    client: &C,
    profile_id: &str,
    count: usize,
) -> Result<Vec<LiteralBook,>, Error,>
where
    C: GraphqlClient,
{
    debug!("Querying {} books in progress for profile {}", count, profile_id);
    let variables = json!({
        "limit": count,
        "offset": 0,
        "readingStatus": "IS_READING",
        "profileId": profile_id,
    });
    let body = client.execute(READING_QUERY, variables,).await?;
    let data: ReadingData = decode_data(body,)?;

    Ok(data
        .books_by_reading_state_and_profile
        .into_iter()
        .map(book_from_node,)
        .take(count,)
        .collect(),)
}

fn book_from_node(node: BookNode,) -> LiteralBook
{
    LiteralBook {
        id:          node.id,
        slug:        node.slug.unwrap_or_default(),
        title:       node.title.unwrap_or_default(),
        subtitle:    node.subtitle.unwrap_or_default(),
        description: node.description.unwrap_or_default(),
        cover:       node.cover.unwrap_or_default(),
        authors:     node
            .authors
            .into_iter()
            .map(|author| Author {
                id:   author.id,
                name: author.name.unwrap_or_default(),
            },)
            .collect(),
    }
}

#[derive(Debug, Deserialize,)]
struct LoginData
{
    login: Session,
}

#[derive(Deserialize,)]
struct Session
{
    token:   String,
    profile: ProfileNode,
}

#[derive(Debug, Deserialize,)]
struct ProfileNode
{
    id: String,
}

impl std::fmt::Debug for Session
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("Session",).field("profile", &self.profile,).finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct ReadingData
{
    #[serde(default)]
    books_by_reading_state_and_profile: Vec<BookNode,>,
}

#[derive(Debug, Deserialize,)]
struct BookNode
{
    id:          String,
    #[serde(default)]
    slug:        Option<String,>,
    #[serde(default)]
    title:       Option<String,>,
    #[serde(default)]
    subtitle:    Option<String,>,
    #[serde(default)]
    description: Option<String,>,
    #[serde(default)]
    cover:       Option<String,>,
    #[serde(default)]
    authors:     Vec<AuthorNode,>,
}

#[derive(Debug, Deserialize,)]
struct AuthorNode
{
    id:   String,
    #[serde(default)]
    name: Option<String,>,
}
