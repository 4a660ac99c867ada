//! Page requests and page windows for paginated listings.
//!
//! A [`PageRequest`] is built from untrusted query parameters and clamped
//! here so every storage backend sees the same bounds. A [`Page`] carries
//! the window of rows plus the metadata clients need to walk the listing.

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page size used when the client does not send one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Upper bound on the page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Property used when the client does not send a sort.
pub const DEFAULT_SORT_PROPERTY: &str = "id";

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// A single-property sort specification, e.g. `nome,desc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sort {
    pub property: String,
    pub direction: Direction,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            property: DEFAULT_SORT_PROPERTY.to_string(),
            direction: Direction::Asc,
        }
    }
}

impl Sort {
    /// Parse a `property[,asc|desc]` sort parameter.
    ///
    /// Which properties are sortable is decided by the entity, not here.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let mut parts = raw.splitn(2, ',');
        let property = parts.next().unwrap_or_default().trim();
        if property.is_empty() {
            return Err(CoreError::Validation(
                "sort property must not be empty".into(),
            ));
        }

        let direction = match parts.next().map(|d| d.trim().to_ascii_lowercase()) {
            None => Direction::Asc,
            Some(d) if d.is_empty() || d == "asc" => Direction::Asc,
            Some(d) if d == "desc" => Direction::Desc,
            Some(d) => {
                return Err(CoreError::Validation(format!(
                    "invalid sort direction '{d}', expected 'asc' or 'desc'"
                )))
            }
        };

        Ok(Self {
            property: property.to_string(),
            direction,
        })
    }
}

// ---------------------------------------------------------------------------
// PageRequest
// ---------------------------------------------------------------------------

/// A request for one page of an ordered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: i64,
    /// Rows per page, always within `1..=MAX_PAGE_SIZE`.
    pub size: i64,
    pub sort: Sort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, Sort::default())
    }
}

impl PageRequest {
    /// Build a request from optional client values, clamping out-of-range input.
    pub fn new(page: Option<i64>, size: Option<i64>, sort: Sort) -> Self {
        Self {
            page: page.unwrap_or(0).max(0),
            size: size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            sort,
        }
    }

    /// Shorthand for a request sorted by id ascending.
    pub fn of(page: i64, size: i64) -> Self {
        Self::new(Some(page), Some(size), Sort::default())
    }

    /// Number of rows to skip before this page starts.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One window of an ordered listing plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index.
    pub number: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
    pub sort: Sort,
}

impl<T> Page<T> {
    /// Wrap `content` fetched for `request` out of `total_elements` rows.
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        let total_elements = total_elements.max(0);
        let total_pages = total_pages(total_elements, request.size);

        Self {
            number: request.page,
            size: request.size,
            total_elements,
            total_pages,
            number_of_elements: content.len(),
            first: request.page == 0,
            last: request.page.saturating_add(1) >= total_pages,
            empty: content.is_empty(),
            sort: request.sort.clone(),
            content,
        }
    }

    /// Convert every element, keeping the metadata untouched.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
            sort: self.sort,
        }
    }
}

fn total_pages(total_elements: i64, size: i64) -> i64 {
    if total_elements == 0 {
        0
    } else {
        (total_elements + size - 1) / size
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
