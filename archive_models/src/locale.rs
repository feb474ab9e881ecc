use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

/// A language (`de`) optionally followed by a region (`pt_BR`).
#[nutype(
    validate(regex = LOCALE_REGEX),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Display,
        Deref,
        TryFrom,
        Serialize,
        Deserialize
    )
)]
pub struct Locale(String);

pub static LOCALE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z]{2,3}(_[A-Z]{2})?$").unwrap());

impl Locale {
    /// Parse the first language range of an `Accept-Language` header value.
    ///
    /// `pt-br;q=0.8, en` becomes `pt_BR`. Wildcards and malformed ranges yield
    /// `None`.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let range = header.split(',').next()?.split(';').next()?.trim();
        let mut parts = range.split(['-', '_']);
        let language = parts.next()?.to_ascii_lowercase();
        let locale = match parts.next() {
            Some(region) => format!("{language}_{}", region.to_ascii_uppercase()),
            None => language,
        };
        Self::try_new(locale).ok()
    }

    /// The language part of this locale, e.g. `pt` for `pt_BR`.
    pub fn language(&self) -> &str {
        self.split('_').next().unwrap_or_default()
    }

    /// Return the locales to try for this locale, most specific first.
    pub fn fallbacks(&self) -> Vec<&str> {
        let language = self.language();
        if language.len() == self.len() {
            vec![self.as_str()]
        } else {
            vec![self.as_str(), language]
        }
    }

    pub fn as_str(&self) -> &str {
        self
    }
}
