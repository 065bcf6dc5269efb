// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Template binding.
//!
//! Registers the facade operations and presentation helpers as named
//! template functions and renders a template source to a string. Data
//! functions block on their provider call before returning, so calls run one
//! at a time in template order.

use std::{fmt::Write, sync::Arc};

use chrono::{DateTime, Utc};
use minijinja::{
    Environment, ErrorKind, Output, State, Value, context, escape_formatter, value::ValueKind,
};
use serde::Serialize;
use tokio::runtime::Handle;
use tracing::debug;

use crate::{
    adapters::{FeedPort, GithubPort, GoodreadsPort, LiteralPort},
    error::Error,
    present::{humanize, reverse},
    scribe::Scribe,
};

/// Registers a data function taking a single count argument.
macro_rules! count_function {
    ($env:expr, $name:literal, $scribe:expr, $handle:expr, $method:ident) => {{
        let scribe = Arc::clone(&$scribe);
        let handle = $handle.clone();
        $env.add_function($name, move |count: usize| {
            serialized(handle.block_on(scribe.$method(count)))
        });
    }};
}

/// Builds an environment exposing every template function.
///
/// Data functions block on `handle`, so the environment must be used from a
/// thread that is not itself driving that runtime.
pub fn environment<G, R, L, F>(scribe: Arc<Scribe<G, R, L, F>>, handle: Handle) -> Environment<'static>
where
    G: GithubPort + Send + Sync + 'static,
    R: GoodreadsPort + Send + Sync + 'static,
    L: LiteralPort + Send + Sync + 'static,
    F: FeedPort + Send + Sync + 'static
{
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_formatter(lowercase_bool_formatter);

    count_function!(env, "recentContributions", scribe, handle, recent_contributions);
    count_function!(env, "recentPullRequests", scribe, handle, recent_pull_requests);
    count_function!(env, "recentRepos", scribe, handle, recent_repos);
    count_function!(env, "recentForks", scribe, handle, recent_forks);
    count_function!(env, "recentReleases", scribe, handle, recent_releases);
    count_function!(env, "followers", scribe, handle, followers);
    count_function!(env, "recentStars", scribe, handle, recent_stars);
    count_function!(env, "gists", scribe, handle, gists);
    count_function!(env, "recentIssues", scribe, handle, recent_issues);
    count_function!(env, "sponsors", scribe, handle, sponsors);
    count_function!(env, "goodReadsReviews", scribe, handle, goodreads_reviews);
    count_function!(env, "goodReadsCurrentlyReading", scribe, handle, goodreads_currently_reading);
    count_function!(env, "literalClubCurrentlyReading", scribe, handle, literal_currently_reading);

    {
        let scribe = Arc::clone(&scribe);
        let handle = handle.clone();
        env.add_function("repo", move |owner: &str, name: &str| {
            serialized(handle.block_on(scribe.repo(owner, name)))
        });
    }
    {
        let scribe = Arc::clone(&scribe);
        let handle = handle.clone();
        env.add_function("rss", move |url: &str, count: usize| {
            serialized(handle.block_on(scribe.rss(url, count)))
        });
    }

    env.add_function("humanize", humanize_value);
    env.add_function("reverse", reverse_value);
    env.add_function("now", || Utc::now().to_rfc3339());
    env.add_function("contains", |haystack: &str, needle: &str| haystack.contains(needle));
    env.add_function("toLower", |value: &str| value.to_lowercase());

    env
}

/// Renders `source` with every template function available.
///
/// # Errors
///
/// Returns [`Error::TemplateParse`] for syntax errors and
/// [`Error::TemplateRender`] when evaluation fails, including every provider
/// failure raised by a data function.
pub fn render_template<G, R, L, F>(
    source: &str,
    scribe: Arc<Scribe<G, R, L, F>>,
    handle: Handle
) -> Result<String, Error>
where
    G: GithubPort + Send + Sync + 'static,
    R: GoodreadsPort + Send + Sync + 'static,
    L: LiteralPort + Send + Sync + 'static,
    F: FeedPort + Send + Sync + 'static
{
    debug!("Rendering template of {} bytes", source.len());
    let env = environment(scribe, handle);
    let template = env.template_from_str(source).map_err(|source| Error::TemplateParse {
        source
    })?;

    template.render(context! {}).map_err(|source| Error::TemplateRender {
        source
    })
}

/// Converts a facade result into a template value, keeping the provider
/// error as the diagnostic source.
fn serialized<T>(result: Result<T, Error>) -> Result<Value, minijinja::Error>
where
    T: Serialize
{
    match result {
        Ok(records) => Ok(Value::from_serialize(&records)),
        Err(error) => Err(minijinja::Error::new(ErrorKind::InvalidOperation, error.to_string())
            .with_source(error))
    }
}

/// Prints booleans as `true`/`false`; everything else goes through the
/// default formatter.
fn lowercase_bool_formatter(
    out: &mut Output,
    state: &State,
    value: &Value
) -> Result<(), minijinja::Error> {
    if value.kind() == ValueKind::Bool {
        out.write_str(if value.is_true() { "true" } else { "false" })?;
        return Ok(());
    }
    escape_formatter(out, state, value)
}

/// Humanizes RFC 3339 timestamps and renders anything else as is.
fn humanize_value(value: Value) -> String {
    value
        .as_str()
        .and_then(|text| DateTime::parse_from_rfc3339(text).ok())
        .map(|timestamp| humanize(timestamp.with_timezone(&Utc)))
        .unwrap_or_else(|| value.to_string())
}

fn reverse_value(value: Value) -> Result<Value, minijinja::Error> {
    if value.kind() != ValueKind::Seq {
        return Err(minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("reverse expects a sequence, got {}", value.kind())
        ));
    }

    let mut items: Vec<Value> = value.try_iter()?.collect();
    reverse(&mut items);
    Ok(Value::from(items))
}
