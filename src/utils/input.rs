// ABOUTME: Request input normalization for ingredient lists and redirect targets
// ABOUTME: Splits ingredients, decodes form fields leniently, and restricts return URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

use crate::constants::routes;
use tracing::debug;

/// URL-encoded name/value pairs, decoded without a schema
///
/// Repeated names are kept in order and lookups return the first occurrence, so
/// `ingredients=egg&ingredients=rice` reads as `egg`. Missing names read as absent and
/// undecodable input reads as an empty set of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// Decode a form body or a raw query string
    #[must_use]
    pub fn parse(raw: &[u8]) -> Self {
        match serde_urlencoded::from_bytes(raw) {
            Ok(pairs) => Self(pairs),
            Err(e) => {
                debug!(error = %e, "Ignoring undecodable form data");
                Self::default()
            }
        }
    }

    /// First value submitted for `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First value submitted for `name`, or an empty string
    #[must_use]
    pub fn get_or_empty(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_owned()
    }
}

/// Split a comma-separated ingredient field into trimmed, non-empty entries
///
/// Order is preserved: `"a, b ,,c"` becomes `["a", "b", "c"]`.
#[must_use]
pub fn parse_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Trim each entry of an already-split ingredient list and drop the empty ones
#[must_use]
pub fn normalize_ingredients<I, S>(ingredients: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ingredients
        .into_iter()
        .filter_map(|ingredient| {
            let trimmed = ingredient.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        })
        .collect()
}

/// Redirect target for mutation handlers
///
/// A caller-supplied `return_url` is honored only when it is a local absolute path;
/// anything else (absent, empty, scheme-qualified, protocol-relative) falls back to home.
#[must_use]
pub fn return_location(return_url: Option<&str>) -> String {
    match return_url.map(str::trim) {
        Some(url) if is_local_path(url) => url.to_owned(),
        _ => routes::HOME.to_owned(),
    }
}

fn is_local_path(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//") && !url.starts_with("/\\")
}
