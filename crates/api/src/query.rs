//! Shared query parameter types for API handlers.

use ordem_core::error::CoreError;
use ordem_core::pagination::{PageRequest, Sort};
use serde::Deserialize;

/// Pagination parameters (`?page=&size=&sort=property,direction`).
///
/// Out-of-range `page` and `size` values are clamped by [`PageRequest::new`].
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl PageParams {
    pub fn into_page_request(self) -> Result<PageRequest, CoreError> {
        let sort = match self.sort.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Sort::parse(raw)?,
            _ => Sort::default(),
        };
        Ok(PageRequest::new(self.page, self.size, sort))
    }
}
