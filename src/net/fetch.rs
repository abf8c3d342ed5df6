//! Request preparation and the network-primitive seam.
//!
//! Client-side (hydrate): `BrowserFetch` sends through `gloo-net`.
//! Server-side / native: `BrowserFetch` fails every request with
//! `BrowserOnly`, since there is no browser fetch to delegate to.
//!
//! DESIGN
//! ======
//! Header merging is a pure function so the bearer and content-type rules
//! are testable without a network. `Fetch` is generic rather than boxed;
//! the client is single-threaded and never needs `Send` futures.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

pub const CONTENT_TYPE: &str = "content-type";
pub const AUTHORIZATION: &str = "authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Lowercased header name to value.
pub type Headers = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied request options. Defaults to a bodiless `GET`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the request body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `value` cannot be encoded.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, serde_json::Error> {
        Ok(self.body(serde_json::to_string(value)?))
    }
}

/// A fully prepared request handed to the network primitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

impl AuthRequest {
    /// Build the outgoing request from caller options and the current token.
    pub fn prepare(url: &str, options: RequestOptions, token: Option<&str>) -> Self {
        Self {
            method: options.method,
            headers: merge_headers(&options.headers, token),
            url: url.to_owned(),
            body: options.body,
        }
    }

    /// Look up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Merge the JSON default, caller headers, and the bearer header.
///
/// Caller headers override the default on collision. `authorization` is
/// owned by this layer: any caller value is dropped, and it is only set
/// when a non-empty token is present.
pub fn merge_headers(caller: &[(String, String)], token: Option<&str>) -> Headers {
    let mut headers = Headers::new();
    headers.insert(CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned());
    for (name, value) in caller {
        let name = name.to_ascii_lowercase();
        if name == AUTHORIZATION {
            continue;
        }
        headers.insert(name, value.clone());
    }
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.insert(AUTHORIZATION.to_owned(), bearer(token));
    }
    headers
}

/// The platform's network fetch primitive.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    type Response: FetchResponse;
    type Error: fmt::Display;

    async fn fetch(&self, request: AuthRequest) -> Result<Self::Response, Self::Error>;
}

/// The response handle returned by a `Fetch` implementation.
#[allow(async_fn_in_trait)]
pub trait FetchResponse {
    type Error: fmt::Display;

    fn status(&self) -> u16;

    fn ok(&self) -> bool {
        (200..300).contains(&self.status())
    }

    async fn text(self) -> Result<String, Self::Error>;
}

/// Fetch through the browser's `fetch` via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFetch;

/// Returned by `BrowserFetch` when compiled without the `hydrate` feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("network fetch is only available in the browser")]
pub struct BrowserOnly;

#[cfg(feature = "hydrate")]
impl Fetch for BrowserFetch {
    type Response = gloo_net::http::Response;
    type Error = gloo_net::Error;

    async fn fetch(&self, request: AuthRequest) -> Result<Self::Response, Self::Error> {
        use gloo_net::http::{Method as GlooMethod, RequestBuilder};

        let method = match request.method {
            Method::Get => GlooMethod::GET,
            Method::Post => GlooMethod::POST,
            Method::Put => GlooMethod::PUT,
            Method::Patch => GlooMethod::PATCH,
            Method::Delete => GlooMethod::DELETE,
        };
        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let req = match request.body {
            Some(body) => builder.body(body)?,
            None => builder.build()?,
        };
        req.send().await
    }
}

#[cfg(feature = "hydrate")]
impl FetchResponse for gloo_net::http::Response {
    type Error = gloo_net::Error;

    fn status(&self) -> u16 {
        gloo_net::http::Response::status(self)
    }

    fn ok(&self) -> bool {
        gloo_net::http::Response::ok(self)
    }

    async fn text(self) -> Result<String, Self::Error> {
        gloo_net::http::Response::text(&self).await
    }
}

#[cfg(not(feature = "hydrate"))]
impl Fetch for BrowserFetch {
    type Response = std::convert::Infallible;
    type Error = BrowserOnly;

    async fn fetch(&self, request: AuthRequest) -> Result<Self::Response, Self::Error> {
        let _ = request;
        Err(BrowserOnly)
    }
}

impl FetchResponse for std::convert::Infallible {
    type Error = BrowserOnly;

    fn status(&self) -> u16 {
        match *self {}
    }

    async fn text(self) -> Result<String, Self::Error> {
        match self {}
    }
}
