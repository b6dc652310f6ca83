//! crates/trivia_core/src/pagination.rs
//!
//! Slices an ordered collection into fixed-size, 1-based pages.

/// Number of items on every page.
pub const PAGE_SIZE: usize = 10;

/// Reasons a raw `page` value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("page '{0}' is not an integer")]
    Invalid(String),
    #[error("page {0} is out of range")]
    OutOfRange(i64),
}

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    /// Returns `None` for page 0.
    pub fn new(page: u32) -> Option<Self> {
        (page >= 1).then_some(Self(page))
    }

    /// Parses the raw, caller-supplied value. An absent value means page 1.
    pub fn parse(raw: Option<&str>) -> Result<Self, PageError> {
        let Some(raw) = raw else {
            return Ok(Self::FIRST);
        };
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| PageError::Invalid(raw.to_string()))?;
        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(PageError::OutOfRange(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Returns the `[start, start + PAGE_SIZE)` window of `items`, clipped to its
/// bounds. A page past the end yields an empty slice.
pub fn paginate<T>(items: &[T], page: PageNumber) -> &[T] {
    let index = usize::try_from(page.get() - 1).unwrap_or(usize::MAX);
    let start = index.saturating_mul(PAGE_SIZE).min(items.len());
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Number of pages needed to hold `total` items.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn items(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    fn page(n: u32) -> PageNumber {
        PageNumber::new(n).unwrap()
    }

    #[rstest]
    #[case(25, 1, 1..=10)]
    #[case(25, 2, 11..=20)]
    #[case(25, 3, 21..=25)]
    #[case(10, 1, 1..=10)]
    fn returns_the_window_for_the_page(
        #[case] total: usize,
        #[case] number: u32,
        #[case] expected: std::ops::RangeInclusive<usize>,
    ) {
        let all = items(total);
        let expected: Vec<usize> = expected.collect();
        assert_eq!(paginate(&all, page(number)), expected.as_slice());
    }

    #[test]
    fn third_page_of_twenty_five_has_five_items() {
        let all = items(25);
        assert_eq!(paginate(&all, page(3)).len(), 5);
    }

    #[rstest]
    #[case(25, 4)]
    #[case(10, 2)]
    #[case(0, 1)]
    #[case(3, u32::MAX)]
    fn page_beyond_the_end_is_empty(#[case] total: usize, #[case] number: u32) {
        let all = items(total);
        assert!(paginate(&all, page(number)).is_empty());
    }

    #[test]
    fn never_returns_more_than_a_page() {
        let all = items(137);
        for number in 1..=20 {
            assert!(paginate(&all, page(number)).len() <= PAGE_SIZE);
        }
    }

    #[test]
    fn leaves_the_input_untouched() {
        let all = items(12);
        let before = all.clone();
        let _ = paginate(&all, page(2));
        assert_eq!(all, before);
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some("1"), 1)]
    #[case(Some("3"), 3)]
    #[case(Some(" 7 "), 7)]
    fn parses_valid_page_values(#[case] raw: Option<&str>, #[case] expected: u32) {
        assert_eq!(PageNumber::parse(raw).unwrap().get(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("1.5")]
    #[case("")]
    fn rejects_non_integer_pages(#[case] raw: &str) {
        assert!(matches!(
            PageNumber::parse(Some(raw)),
            Err(PageError::Invalid(_))
        ));
    }

    #[rstest]
    #[case("0", 0)]
    #[case("-2", -2)]
    fn rejects_pages_below_one(#[case] raw: &str, #[case] value: i64) {
        assert_eq!(PageNumber::parse(Some(raw)), Err(PageError::OutOfRange(value)));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(10, 1)]
    #[case(11, 2)]
    #[case(25, 3)]
    fn counts_pages(#[case] total: usize, #[case] expected: usize) {
        assert_eq!(page_count(total), expected);
    }
}
