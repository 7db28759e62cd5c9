//! Optional query filters shared by several resources.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use metrc_core::query::QueryParams;

/// Format a timestamp the way Metrc expects in query strings.
#[must_use]
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Last-modified bounds used for incremental polling of a collection.
///
/// Both bounds are optional; absent bounds are left out of the query entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LastModified {
    /// Lower bound (`lastModifiedStart`)
    pub start: Option<DateTime<Utc>>,
    /// Upper bound (`lastModifiedEnd`)
    pub end: Option<DateTime<Utc>>,
}

impl LastModified {
    /// No bounds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Both bounds.
    #[must_use]
    pub const fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Set the lower bound.
    #[must_use]
    pub const fn with_start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the upper bound.
    #[must_use]
    pub const fn with_end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Returns true when neither bound is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub(crate) fn apply(&self, params: &mut QueryParams) {
        params.push_opt_with("lastModifiedStart", self.start, format_timestamp);
        params.push_opt_with("lastModifiedEnd", self.end, format_timestamp);
    }
}

/// Filter for listing sales receipts.
///
/// Every bound that is set is sent, sales-date bounds first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalesReceiptFilter {
    /// Lower sales-date bound (`salesDateStart`)
    pub sales_date_start: Option<DateTime<Utc>>,
    /// Upper sales-date bound (`salesDateEnd`)
    pub sales_date_end: Option<DateTime<Utc>>,
    /// Last-modified bounds
    pub last_modified: LastModified,
}

impl SalesReceiptFilter {
    /// No bounds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sales_date_start: None,
            sales_date_end: None,
            last_modified: LastModified::new(),
        }
    }

    /// Filter by sales date.
    #[must_use]
    pub const fn sales_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            sales_date_start: Some(start),
            sales_date_end: Some(end),
            last_modified: LastModified::new(),
        }
    }

    /// Filter by last-modified time.
    #[must_use]
    pub const fn modified(last_modified: LastModified) -> Self {
        Self {
            sales_date_start: None,
            sales_date_end: None,
            last_modified,
        }
    }

    /// Set the lower sales-date bound.
    #[must_use]
    pub const fn with_sales_date_start(mut self, start: DateTime<Utc>) -> Self {
        self.sales_date_start = Some(start);
        self
    }

    /// Set the upper sales-date bound.
    #[must_use]
    pub const fn with_sales_date_end(mut self, end: DateTime<Utc>) -> Self {
        self.sales_date_end = Some(end);
        self
    }

    /// Set the last-modified bounds.
    #[must_use]
    pub const fn with_last_modified(mut self, last_modified: LastModified) -> Self {
        self.last_modified = last_modified;
        self
    }

    pub(crate) fn apply(&self, params: &mut QueryParams) {
        params.push_opt_with("salesDateStart", self.sales_date_start, format_timestamp);
        params.push_opt_with("salesDateEnd", self.sales_date_end, format_timestamp);
        self.last_modified.apply(params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_last_modified_adds_nothing() {
        let mut params = QueryParams::new();
        LastModified::new().apply(&mut params);
        assert!(params.is_empty());
    }

    #[test]
    fn last_modified_bounds_are_rfc3339() {
        let mut params = QueryParams::new();
        LastModified::new().with_end(ts(2)).apply(&mut params);
        assert_eq!(
            params.into_pairs(),
            vec![("lastModifiedEnd", "2020-01-02T00:00:00Z".to_string())]
        );
    }

    #[test]
    fn sales_filter_uses_its_own_values() {
        let mut params = QueryParams::new();
        SalesReceiptFilter::sales_between(ts(1), ts(3)).apply(&mut params);
        assert_eq!(
            params.into_pairs(),
            vec![
                ("salesDateStart", "2020-01-01T00:00:00Z".to_string()),
                ("salesDateEnd", "2020-01-03T00:00:00Z".to_string()),
            ]
        );
    }

    #[test]
    fn sales_filter_sends_both_kinds_of_bound() {
        let filter = SalesReceiptFilter::modified(LastModified::new().with_start(ts(1)))
            .with_sales_date_end(ts(2));
        let mut params = QueryParams::new();
        filter.apply(&mut params);
        assert_eq!(
            params.into_pairs(),
            vec![
                ("salesDateEnd", "2020-01-02T00:00:00Z".to_string()),
                ("lastModifiedStart", "2020-01-01T00:00:00Z".to_string()),
            ]
        );
    }

    #[test]
    fn date_formatting() {
        let date = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap();
        assert_eq!(format_date(date), "2019-12-31");
    }
}
