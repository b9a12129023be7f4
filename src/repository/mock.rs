//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, CustomerSearchQuery, CustomerWriter};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn search_customers(
            &self,
            query: CustomerSearchQuery,
        ) -> RepositoryResult<(usize, Vec<Customer>)>;
    }

    impl CustomerWriter for Repository {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn delete_customer(&self, id: CustomerId) -> RepositoryResult<bool>;
    }
}
