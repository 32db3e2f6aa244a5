//! Pagination for the movement listing
//!
//! `page` and `limit` are taken as given: only a zero `limit` is
//! rejected, since it would make the page count undefined. A page
//! below 1 produces a negative offset, which the store rejects.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Page used when `page` is absent or not an integer
pub const DEFAULT_PAGE: i64 = 1;

/// Items per page when `limit` is absent or not an integer
pub const DEFAULT_LIMIT: i64 = 10;

/// Validated pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed, not clamped)
    pub page: i64,
    /// Items per page (never zero)
    pub limit: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Result<Self, ValidationError> {
        if limit == 0 {
            return Err(ValidationError::Zero { field: "limit" });
        }
        Ok(Self { page, limit })
    }

    /// SQL OFFSET value: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Raw query parameters for `GET /api/movimientos`
///
/// Kept as strings so a non-integer value falls back to its default
/// instead of failing the request.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    /// Collect `page`/`limit` from decoded query pairs. A repeated key
    /// keeps its first value; other keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    fn int_or(raw: Option<&str>, default: i64) -> i64 {
        raw.and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(default)
    }
}

impl TryFrom<ListParams> for Pagination {
    type Error = ValidationError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        Self::new(
            ListParams::int_or(params.page.as_deref(), DEFAULT_PAGE),
            ListParams::int_or(params.limit.as_deref(), DEFAULT_LIMIT),
        )
    }
}

/// Pagination block of the listing response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl PageInfo {
    pub fn new(total: i64, pagination: Pagination) -> Self {
        Self {
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: total_pages(total, pagination.limit),
        }
    }
}

/// `ceil(total / limit)`, or 0 when `limit` is not positive.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 || total <= 0 {
        return 0;
    }
    total / limit + i64::from(total % limit != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, limit: Option<&str>) -> ListParams {
        ListParams {
            page: page.map(str::to_owned),
            limit: limit.map(str::to_owned),
        }
    }

    #[test]
    fn offset_calculation() {
        let p = Pagination::new(1, 10).unwrap();
        assert_eq!(p.offset(), 0);

        let p = Pagination::new(2, 10).unwrap();
        assert_eq!(p.offset(), 10);

        let p = Pagination::new(3, 25).unwrap();
        assert_eq!(p.offset(), 50);
    }

    #[test]
    fn page_below_one_gives_negative_offset() {
        let p = Pagination::new(0, 10).unwrap();
        assert_eq!(p.offset(), -10);

        let p = Pagination::new(-2, 5).unwrap();
        assert_eq!(p.offset(), -15);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = Pagination::new(1, 0).unwrap_err();
        assert_eq!(err, ValidationError::Zero { field: "limit" });
    }

    #[test]
    fn defaults_when_absent() {
        let p = Pagination::try_from(params(None, None)).unwrap();
        assert_eq!(p, Pagination::default());
        assert_eq!((p.page, p.limit), (1, 10));
    }

    #[test]
    fn non_integer_values_fall_back() {
        let p = Pagination::try_from(params(Some("two"), Some("1.5"))).unwrap();
        assert_eq!((p.page, p.limit), (DEFAULT_PAGE, DEFAULT_LIMIT));

        let p = Pagination::try_from(params(Some("3"), Some("x"))).unwrap();
        assert_eq!((p.page, p.limit), (3, DEFAULT_LIMIT));
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let pairs = [
            ("page", "1"),
            ("sort", "asc"),
            ("page", "2"),
            ("limit", "abc"),
            ("limit", "5"),
        ]
        .map(|(k, v)| (k.to_owned(), v.to_owned()));

        let params = ListParams::from_pairs(pairs);
        assert_eq!(params.page.as_deref(), Some("1"));
        assert_eq!(params.limit.as_deref(), Some("abc"));

        let p = Pagination::try_from(params).unwrap();
        assert_eq!((p.page, p.limit), (1, DEFAULT_LIMIT));
    }

    #[test]
    fn explicit_zero_limit_is_not_defaulted() {
        assert!(Pagination::try_from(params(None, Some("0"))).is_err());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(7, 1), 7);
    }

    #[test]
    fn total_pages_survives_huge_limit() {
        assert_eq!(total_pages(5, i64::MAX), 1);
        assert_eq!(total_pages(5, -3), 0);
    }

    #[test]
    fn page_info_echoes_request() {
        let info = PageInfo::new(42, Pagination::new(2, 20).unwrap());
        assert_eq!(
            info,
            PageInfo {
                total: 42,
                page: 2,
                limit: 20,
                total_pages: 3
            }
        );
    }
}
