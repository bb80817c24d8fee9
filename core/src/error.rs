// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;
use std::time::Duration;

use http::StatusCode;
use thiserror::Error;

/// The error type for alicloud operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    detail: Option<Detail>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No usable credential could be found in any source
    CredentialNotFound,

    /// The requested service is not in the service table
    ServiceUnsupported,

    /// The server answered with a non-success status
    HttpStatus,

    /// A poll helper gave up waiting for a resource
    Timeout,

    /// Request cannot be built (missing required fields, etc.)
    RequestInvalid,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors (network, I/O, malformed responses, etc.)
    Unexpected,
}

#[derive(Debug)]
enum Detail {
    Http { status: StatusCode, body: String },
    Timeout { resource_id: String, elapsed: Duration },
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The HTTP status carried by an [`ErrorKind::HttpStatus`] error.
    pub fn status(&self) -> Option<StatusCode> {
        match &self.detail {
            Some(Detail::Http { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// The verbatim response body carried by an [`ErrorKind::HttpStatus`] error.
    ///
    /// The upstream service puts its machine-readable error code here.
    pub fn body(&self) -> Option<&str> {
        match &self.detail {
            Some(Detail::Http { body, .. }) => Some(body),
            _ => None,
        }
    }

    /// Whether this error comes from reading a path that does not exist.
    pub fn is_not_found(&self) -> bool {
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<std::io::Error>())
            .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
    }

    /// The resource a poll helper was waiting on.
    pub fn resource_id(&self) -> Option<&str> {
        match &self.detail {
            Some(Detail::Timeout { resource_id, .. }) => Some(resource_id),
            _ => None,
        }
    }

    /// How long a poll helper waited before giving up.
    pub fn elapsed(&self) -> Option<Duration> {
        match &self.detail {
            Some(Detail::Timeout { elapsed, .. }) => Some(*elapsed),
            _ => None,
        }
    }
}

// Convenience constructors
impl Error {
    /// Create a credential not found error
    pub fn credential_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialNotFound, message)
    }

    /// Create a service unsupported error
    pub fn service_unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnsupported, message)
    }

    /// Create an error for a non-success HTTP response.
    ///
    /// The body becomes the error message as well, so it is never lost when
    /// the error is only displayed.
    pub fn http_status(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        let mut err = Self::new(ErrorKind::HttpStatus, body.clone());
        err.detail = Some(Detail::Http { status, body });
        err
    }

    /// Create a timeout error for a resource that never reached the awaited state.
    pub fn timeout(resource_id: impl Into<String>, elapsed: Duration) -> Self {
        let resource_id = resource_id.into();
        let mut err = Self::new(
            ErrorKind::Timeout,
            format!(
                "timed out after {}s while waiting for {resource_id}",
                elapsed.as_secs()
            ),
        );
        err.detail = Some(Detail::Timeout {
            resource_id,
            elapsed,
        });
        err
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialNotFound => write!(f, "credential not found"),
            ErrorKind::ServiceUnsupported => write!(f, "unsupported service"),
            ErrorKind::HttpStatus => write!(f, "unsuccessful http status"),
            ErrorKind::Timeout => write!(f, "timed out"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::unexpected(format!("failed to parse json: {err}"))
            .with_source(anyhow::Error::from(err))
    }
}
