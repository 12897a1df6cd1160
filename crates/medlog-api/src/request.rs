//! A replayable description of one backend call.
//!
//! `reqwest::Request` bodies cannot always be cloned, so requests are kept
//! in this form until sent; the refresh path sends the same value twice.

use reqwest::Method;
use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, without a leading slash.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Body,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>, body: Body) -> Self {
        let path = path.into();
        Self {
            method,
            path: path.trim_start_matches('/').to_string(),
            query: Vec::new(),
            body,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, Body::Empty)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be serialized.
    pub fn post_json<T: Serialize>(path: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Self::new(Method::POST, path, Body::Json(value)))
    }

    pub fn post_form(path: impl Into<String>, fields: &[(&str, &str)]) -> Self {
        let fields = fields
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self::new(Method::POST, path, Body::Form(fields))
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Absolute URL with an encoded query string.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{}/{}", base.trim_end_matches('/'), self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}

/// Encode one path segment (ids are user input on the command line).
#[must_use]
pub fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
