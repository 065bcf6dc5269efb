// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! GraphQL transport seam shared by the GitHub and Literal.club adapters.
//!
//! Adapters only ever see raw response bodies through [`GraphqlClient`], which
//! keeps the provider-specific query shapes private to each adapter and lets
//! tests script responses without a network.

use std::fmt;

use octocrab::Octocrab;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::error::{Error, http_error};

/// Executes GraphQL documents and returns the raw response body.
#[allow(async_fn_in_trait)]
pub trait GraphqlClient
{
    /// Sends `query` with `variables` and returns the undecoded body.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the transport fails.
    async fn execute(&self, query: &str, variables: Value,) -> Result<Value, Error,>;
}

impl GraphqlClient for Octocrab
{
    async fn execute(&self, query: &str, variables: Value,) -> Result<Value, Error,>
    {
        let payload = json!({ "query": query, "variables": variables });
        let body: Value = self.graphql(&payload,).await?;
        Ok(body,)
    }
}

/// Plain HTTP GraphQL transport for providers other than GitHub.
#[derive(Clone,)]
pub struct HttpGraphql
{
    http:     reqwest::Client,
    endpoint: String,
    bearer:   Option<String,>,
}

impl HttpGraphql
{
    pub fn new(http: reqwest::Client, endpoint: impl Into<String,>,) -> Self
    {
        Self {
            http,
            endpoint: endpoint.into(),
            bearer: None,
        }
    }

    /// Returns a transport that sends `token` as a bearer credential.
    pub fn with_bearer(mut self, token: impl Into<String,>,) -> Self
    {
        self.bearer = Some(token.into(),);
        self
    }
}

impl fmt::Debug for HttpGraphql
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.debug_struct("HttpGraphql",)
            .field("endpoint", &self.endpoint,)
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>",),)
            .finish()
    }
}

impl GraphqlClient for HttpGraphql
{
    async fn execute(&self, query: &str, variables: Value,) -> Result<Value, Error,>
    {
        let payload = json!({ "query": query, "variables": variables });
        let mut request = self.http.post(&self.endpoint,).json(&payload,);
        if let Some(token,) = &self.bearer {
            request = request.bearer_auth(token,);
        }

        request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status,)
            .map_err(|source| http_error(&self.endpoint, source,),)?
            .json::<Value,>()
            .await
            .map_err(|source| http_error(&self.endpoint, source,),)
    }
}

impl<T,> GraphqlClient for &T
where
    T: GraphqlClient + ?Sized,
{
    async fn execute(&self, query: &str, variables: Value,) -> Result<Value, Error,>
    {
        (**self).execute(query, variables,).await
    }
}

#[derive(Debug, Deserialize,)]
struct Envelope
{
    #[serde(default)]
    data:   Option<Value,>,
    #[serde(default)]
    errors: Vec<ResponseError,>,
}

#[derive(Debug, Deserialize,)]
struct ResponseError
{
    message: String,
}

/// Unwraps a GraphQL response body into the typed `data` payload.
///
/// # Errors
///
/// Returns [`Error::Query`] when the response carries an `errors` array or no
/// `data`, and [`Error::Decode`] when `data` does not match `T`.
pub(crate) fn decode_data<T,>(body: Value,) -> Result<T, Error,>
where
    T: DeserializeOwned,
{
    let envelope: Envelope = serde_json::from_value(body,)?;

    if !envelope.errors.is_empty() {
        let messages: Vec<String,> =
            envelope.errors.into_iter().map(|error| error.message,).collect();
        return Err(Error::query(messages.join("; ",),),);
    }

    let data = envelope.data.ok_or_else(|| Error::query("response contained no data",),)?;
    Ok(serde_json::from_value(data,)?,)
}
