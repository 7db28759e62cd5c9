//! Convenience builder for HTTP query parameters.
//!
//! Optional filters are appended only when present; absent values never show up as
//! empty keys. The encoded form always joins pairs with `&`.

use std::fmt::Display;
use url::form_urlencoded;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: ToString,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append using a mapping function when the value is present.
    pub fn push_opt_with<T, F>(&mut self, key: &'static str, value: Option<T>, mut map: F)
    where
        F: FnMut(T) -> String,
    {
        if let Some(value) = value {
            self.pairs.push((key, map(value)));
        }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode the pairs as `key=value` joined by `&`, form-encoding each value.
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }

    /// Append the encoded query to `path`, adding `?` only when there is something to add.
    #[must_use]
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.encode())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::QueryParams;

    #[test]
    fn push_opt_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt("licenseNumber", Option::<String>::None);
        assert!(params.is_empty());
        assert_eq!(params.append_to("items/v1/active"), "items/v1/active");
    }

    #[test]
    fn push_opt_with_applies_mapper() {
        let mut params = QueryParams::new();
        params.push_opt_with("limit", Some(5u32), |v| format!("{v:02}"));
        assert_eq!(params.into_pairs(), vec![("limit", "05".to_string())]);
    }

    #[test]
    fn multiple_params_join_with_ampersand() {
        let mut params = QueryParams::new();
        params.push("licenseNumber", "C12-1000006-LIC");
        params.push_opt("lastModifiedStart", Some("a"));
        params.push_opt("lastModifiedEnd", Some("b"));

        assert_eq!(
            params.append_to("packages/v1/active"),
            "packages/v1/active?licenseNumber=C12-1000006-LIC&lastModifiedStart=a&lastModifiedEnd=b"
        );
        assert_eq!(params.encode().matches('?').count(), 0);
    }

    #[test]
    fn values_are_form_encoded() {
        let mut params = QueryParams::new();
        params.push("lastModifiedStart", "2020-01-01T00:00:00Z");
        assert_eq!(params.encode(), "lastModifiedStart=2020-01-01T00%3A00%3A00Z");
    }
}
