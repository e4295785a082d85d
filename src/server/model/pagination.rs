use crate::{model::api::PaginationMetaDto, server::error::AppError};

pub const DEFAULT_PAGE: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Zero-indexed offset pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Builds a page request from optional query values, applying defaults.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Valid request
    /// - `Err(AppError::BadRequest)` - `limit` was zero or above `MAX_LIMIT`, or the
    ///   row offset `page * limit` does not fit a signed 64-bit SQL integer
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Result<Self, AppError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if limit == 0 {
            return Err(AppError::BadRequest(
                "limit must be greater than zero".to_string(),
            ));
        }

        if limit > MAX_LIMIT {
            return Err(AppError::BadRequest(format!(
                "limit must not exceed {}",
                MAX_LIMIT
            )));
        }

        let in_range = page
            .checked_mul(limit)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !in_range {
            return Err(AppError::BadRequest("page is out of range".to_string()));
        }

        Ok(Self { page, limit })
    }

    pub fn meta(&self, total: u64) -> PaginationMeta {
        PaginationMeta {
            total,
            page: self.page,
            limit: self.limit,
            total_pages: total.div_ceil(self.limit),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn into_dto(self) -> PaginationMetaDto {
        PaginationMetaDto {
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
