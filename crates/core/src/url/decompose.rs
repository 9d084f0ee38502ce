use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::authority::{parse_authority, Authority};
use super::query::{decode_query, QueryParams};

/// Message reported for blank input.
pub const EMPTY_URL: &str = "URL cannot be empty";

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").unwrap());

/// Syntactic components of a URI or URI reference.
///
/// `path`, `query` and `fragment` are kept raw; only `query_params` is
/// decoded. Every field is independently optional or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriComponents {
    pub scheme: Option<String>,
    pub authority: String,
    pub path: String,
    pub legacy_params: String,
    pub query: String,
    pub fragment: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub query_params: QueryParams,
    pub error: Option<String>,
}

impl UriComponents {
    fn failed(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::default()
        }
    }
}

/// Recompose the URI from its raw components.
///
/// Empty optional parts are omitted together with their delimiter, so the
/// output equals the trimmed input unless the input had redundant delimiters
/// (an empty `?`, `#`, `;` or `//`).
impl fmt::Display for UriComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        // A path starting with `//` would reparse as an authority.
        if !self.authority.is_empty() || self.path.starts_with("//") {
            write!(f, "//{}", self.authority)?;
        }
        f.write_str(&self.path)?;
        if !self.legacy_params.is_empty() {
            write!(f, ";{}", self.legacy_params)?;
        }
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

/// Split `input` into scheme, authority, path, legacy params, query and
/// fragment, then decompose the authority and decode the query.
///
/// This never fails. Blank input yields a value whose only populated field
/// is `error`; anything else decomposes on a best-effort basis in one
/// forward pass over the trimmed input.
pub fn decompose(input: &str) -> UriComponents {
    let input = input.trim();
    if input.is_empty() {
        return UriComponents::failed(EMPTY_URL);
    }

    let mut rest = input;

    let scheme = match rest.find([':', '/', '?', '#']) {
        Some(colon) if rest.as_bytes()[colon] == b':' && SCHEME.is_match(&rest[..colon]) => {
            let scheme = &rest[..colon];
            rest = &rest[colon + 1..];
            Some(scheme.to_string())
        }
        _ => None,
    };

    let authority = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            rest = &after[end..];
            &after[..end]
        }
        None => "",
    };

    let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
    let (path, legacy_params) = split_legacy_params(&rest[..path_end]);
    rest = &rest[path_end..];

    let query = match rest.strip_prefix('?') {
        Some(after) => {
            let end = after.find('#').unwrap_or(after.len());
            rest = &after[end..];
            &after[..end]
        }
        None => "",
    };

    let fragment = rest.strip_prefix('#').unwrap_or("");

    let Authority {
        username,
        password,
        hostname,
        port,
    } = if authority.is_empty() {
        Authority::default()
    } else {
        parse_authority(authority)
    };

    let query_params = if query.is_empty() {
        QueryParams::new()
    } else {
        decode_query(query)
    };

    UriComponents {
        scheme,
        authority: authority.to_string(),
        path: path.to_string(),
        legacy_params: legacy_params.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
        username,
        password,
        hostname,
        port,
        query_params,
        error: None,
    }
}

/// Split the `;params` suffix off the last path segment.
fn split_legacy_params(path: &str) -> (&str, &str) {
    let segment_start = path.rfind('/').map_or(0, |slash| slash + 1);

    match path[segment_start..].find(';') {
        Some(semi) => {
            let semi = segment_start + semi;
            (&path[..semi], &path[semi + 1..])
        }
        None => (path, ""),
    }
}
