use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 50;

/// 1-indexed page request. Construction normalizes the values, so every
/// `PageRequest` in flight already satisfies `page >= 1` and
/// `1 <= limit <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, limit: Option<u64>, default_limit: u64) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let limit = limit.unwrap_or(default_limit).clamp(1, MAX_PAGE_SIZE);
        Self { page, limit }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page(),
            limit: request.limit(),
            total,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_jobs: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl<T> From<&PageResult<T>> for JobPagination {
    fn from(page: &PageResult<T>) -> Self {
        Self {
            current_page: page.page,
            total_pages: page.total_pages(),
            total_jobs: page.total,
            has_next_page: page.has_next_page(),
            has_prev_page: page.has_prev_page(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_applications: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl<T> From<&PageResult<T>> for ApplicationPagination {
    fn from(page: &PageResult<T>) -> Self {
        Self {
            current_page: page.page,
            total_pages: page.total_pages(),
            total_applications: page.total,
            has_next_page: page.has_next_page(),
            has_prev_page: page.has_prev_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let req = PageRequest::default();
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 10);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn clamps_limit_and_page() {
        assert_eq!(PageRequest::new(Some(0), Some(0), 10).limit(), 1);
        assert_eq!(PageRequest::new(Some(0), Some(0), 10).page(), 1);
        assert_eq!(PageRequest::new(None, Some(500), 10).limit(), MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(None, None, 20).limit(), 20);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let req = PageRequest::new(Some(3), Some(15), 10);
        assert_eq!(req.offset(), 30);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = PageResult::new(vec![1, 2, 3], PageRequest::new(Some(1), Some(3), 10), 7);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next_page());
        assert!(!page.has_prev_page());
    }

    #[test]
    fn last_page_has_no_next() {
        let page = PageResult::new(vec![7], PageRequest::new(Some(3), Some(3), 10), 7);
        assert!(!page.has_next_page());
        assert!(page.has_prev_page());
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let page: PageResult<u8> = PageResult::new(vec![], PageRequest::default(), 0);
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_next_page());
    }

    #[test]
    fn job_pagination_serializes_camel_case() {
        let page = PageResult::new(vec!["a"], PageRequest::new(Some(2), Some(1), 10), 3);
        let value = serde_json::to_value(JobPagination::from(&page)).unwrap();

        assert_eq!(value["currentPage"], 2);
        assert_eq!(value["totalPages"], 3);
        assert_eq!(value["totalJobs"], 3);
        assert_eq!(value["hasNextPage"], true);
        assert_eq!(value["hasPrevPage"], true);
    }
}
