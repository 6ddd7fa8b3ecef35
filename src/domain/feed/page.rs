// src/domain/feed/page.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Page number as asked for by a client, before it is fitted to a feed.
///
/// Parsing never fails: anything that is not an integer means the first
/// page, and numbers outside the feed are clamped by [`paginate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest(i64);

impl PageRequest {
    pub const fn new(page: i64) -> Self {
        Self(page)
    }

    pub const fn first() -> Self {
        Self(1)
    }

    /// Read a raw `page` query value.
    ///
    /// A run of digits too long for `i64` is still a number, just one past
    /// every real page, so it saturates instead of falling back to page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::first();
        };
        if let Ok(page) = raw.parse::<i64>() {
            return Self(page);
        }
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            return Self(i64::MAX);
        }
        Self::first()
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    fn clamp_to(self, num_pages: usize) -> usize {
        if self.0 < 1 {
            return 1;
        }
        usize::try_from(self.0).map_or(num_pages, |page| page.min(num_pages))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One window of a feed together with the facts needed to link its
/// neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page_number: usize,
    pub num_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> FeedPage<T> {
    pub fn next_page_number(&self) -> Option<usize> {
        self.has_next.then(|| self.page_number + 1)
    }

    pub fn previous_page_number(&self) -> Option<usize> {
        self.has_previous.then(|| self.page_number - 1)
    }

    /// Transform the items while keeping the page geometry.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> FeedPage<U> {
        FeedPage {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            num_pages: self.num_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

/// Cut `candidates` into pages of `page_size` and return the requested one.
///
/// The order of `candidates` is kept as given. An empty sequence still has a
/// first page, with no items on it.
pub fn paginate<T>(
    candidates: Vec<T>,
    page_size: usize,
    requested: PageRequest,
) -> DomainResult<FeedPage<T>> {
    if page_size == 0 {
        return Err(DomainError::InvalidPageSize(page_size));
    }

    let total_count = candidates.len();
    let num_pages = total_count.div_ceil(page_size).max(1);
    let page_number = requested.clamp_to(num_pages);
    let start = (page_number - 1) * page_size;

    tracing::debug!(
        total_count,
        page_size,
        page_number,
        num_pages,
        requested = requested.value(),
        "paginating feed"
    );

    let items = candidates
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Ok(FeedPage {
        items,
        total_count,
        page_number,
        num_pages,
        has_next: page_number < num_pages,
        has_previous: page_number > 1,
    })
}
