#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the markscribe crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a thoroughly documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by adapters, services, the facade and the CLI.
///
/// Provider failures are never recovered in-process: every variant that wraps
/// a transport or decoding failure aborts the operation that produced it and
/// travels unchanged up to the template function boundary. Variants never
/// carry credentials.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading the template file.
    #[error("failed to read template from {path:?}: {source}")]
    Io {
        /// Location of the template file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps I/O errors that occur while creating or writing the output.
    #[error("failed to write output to {path:?}: {source}")]
    Output {
        /// Destination of the rendered document.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Returned when required configuration is missing or malformed.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Transport failures reported by the GitHub client.
    #[error("GitHub request failed: {source}")]
    GitHub {
        /// Underlying octocrab error.
        source: octocrab::Error
    },
    /// GraphQL responses that carry an `errors` array or no `data`.
    #[error("query failed: {message}")]
    Query {
        /// Messages reported by the provider.
        message: String
    },
    /// Wraps JSON decoding errors for provider responses.
    #[error("failed to decode provider response: {source}")]
    Decode {
        /// Source decoding error from serde_json.
        source: serde_json::Error
    },
    /// HTTP failures reported by reqwest.
    #[error("request to {url} failed: {source}")]
    Http {
        /// Requested endpoint, without query parameters.
        url:    String,
        /// Underlying reqwest error.
        source: reqwest::Error
    },
    /// Feed documents that could not be parsed.
    #[error("failed to parse feed {url}: {source}")]
    Feed {
        /// Location of the feed.
        url:    String,
        /// Parser error reported by feed-rs.
        source: feed_rs::parser::ParseFeedError
    },
    /// XML documents that could not be decoded.
    #[error("failed to decode XML response: {source}")]
    Xml {
        /// Source decoding error from quick-xml.
        source: quick_xml::de::DeError
    },
    /// Template syntax errors.
    #[error("failed to parse template: {source}")]
    TemplateParse {
        /// Diagnostic produced by the template engine.
        source: minijinja::Error
    },
    /// Failures raised while evaluating template expressions.
    #[error("failed to render template: {source}")]
    TemplateRender {
        /// Diagnostic produced by the template engine.
        source: minijinja::Error
    },
    /// Failures constructing the async runtime.
    #[error("failed to start runtime: {source}")]
    Runtime {
        /// Underlying I/O error.
        source: std::io::Error
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a query error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Messages reported by the provider.
    pub fn query<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Query {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode {
            source
        }
    }
}

impl From<octocrab::Error> for Error {
    fn from(source: octocrab::Error) -> Self {
        Self::GitHub {
            source
        }
    }
}

impl From<quick_xml::de::DeError> for Error {
    fn from(source: quick_xml::de::DeError) -> Self {
        Self::Xml {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the template file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Output`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Destination that could not be created or written.
/// * `source` - I/O error reported by the operating system.
pub fn output_error(path: &Path, source: std::io::Error) -> Error {
    Error::Output {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Http`] variant for the given endpoint.
pub(crate) fn http_error(url: &str, source: reqwest::Error) -> Error {
    Error::Http {
        url: url.to_owned(),
        source
    }
}
