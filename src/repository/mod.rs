use crate::{
    db::{DbConnection, DbPool},
    domain::{
        customer::{Customer, NewCustomer},
        types::CustomerId,
    },
    repository::errors::RepositoryResult,
};

pub mod customer;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Zero-based page window over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of rows skipped before this page starts.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.per_page)
    }

    /// Builds a window from caller supplied signed values. Negative pages
    /// start at the first row and a non-positive size selects nothing.
    pub fn from_signed(page: i64, per_page: i64) -> Self {
        Self {
            page: usize::try_from(page).unwrap_or(0),
            per_page: usize::try_from(per_page).unwrap_or(0),
        }
    }
}

/// Filter and window applied when searching customers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerSearchQuery {
    /// Substring matched against first name or surname. `None` matches all.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl CustomerSearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the result to customers whose first name or surname contains
    /// `term`. An empty term leaves the query unfiltered.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.is_empty() { None } else { Some(term) };
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    pub fn window(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

/// Diesel backed store shared by all request handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool.get().map_err(|e| {
            log::error!("Failed to get connection from pool: {e}");
            e.into()
        })
    }
}

pub trait CustomerReader {
    /// Returns the total number of matches together with the requested page,
    /// ordered by surname then id.
    fn search_customers(
        &self,
        query: CustomerSearchQuery,
    ) -> RepositoryResult<(usize, Vec<Customer>)>;
}

pub trait CustomerWriter {
    /// Stores a new customer under a freshly assigned identifier.
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    /// Removes the customer, reporting whether a record was actually deleted.
    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<bool>;
}
