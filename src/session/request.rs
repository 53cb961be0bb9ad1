//! Request and response values passed through a [`Transport`](super::Transport)

use scraper::Html;
use url::form_urlencoded;
use url::Url;

/// HTTP method of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully resolved request, ready for a transport to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Request {
    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decode the form body back into pairs
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        self.body
            .as_deref()
            .map(|body| {
                form_urlencoded::parse(body.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Encode form fields as `application/x-www-form-urlencoded`
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}

/// A response after all redirects were followed
#[derive(Debug, Clone)]
pub struct Page {
    /// Final resolved URL
    pub url: Url,
    /// Status code of the final response
    pub status: u16,
    /// Response body
    pub body: String,
}

impl Page {
    /// Parse the body into a queryable document
    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }

    /// Check whether the redirects ended on `expected`
    pub fn landed_on(&self, expected: &Url) -> bool {
        &self.url == expected
    }
}
