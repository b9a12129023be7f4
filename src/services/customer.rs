//! Customer create, search and delete operations.

use crate::domain::types::CustomerId;
use crate::dto::api::ApiResponse;
use crate::dto::customer::{CustomerItem, CustomersPage};
use crate::forms::customer::{CreateCustomerForm, SearchCustomersForm};
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::snapshot;

/// Stores a new customer from an already validated form.
///
/// An absent form is a soft rejection: the result is `false` and no error is
/// reported.
pub fn create_customer<R>(repo: &R, form: Option<&CreateCustomerForm>) -> ApiResponse<bool>
where
    R: CustomerWriter + ?Sized,
{
    log::info!("create_customer input data: {}", snapshot(&form));

    let Some(form) = form else {
        return ApiResponse::success(false);
    };

    match repo.create_customer(&form.to_new_customer()) {
        Ok(customer) => {
            log::info!("New customer created: {}", customer.id);
            ApiResponse::success(true)
        }
        Err(err) => {
            log::error!("Failed to create customer: {err}");
            err.into()
        }
    }
}

/// Returns one page of customers matching the search value together with the
/// total number of matches.
pub fn search_customers<R>(repo: &R, form: &SearchCustomersForm) -> ApiResponse<CustomersPage>
where
    R: CustomerReader + ?Sized,
{
    log::info!("search_customers request data: {}", snapshot(form));

    match repo.search_customers(form.to_query()) {
        Ok((total_count, customers)) => ApiResponse::success(CustomersPage {
            total_count,
            customers: customers.into_iter().map(CustomerItem::from).collect(),
        }),
        Err(err) => {
            log::error!("Failed to search customers: {err}");
            err.into()
        }
    }
}

/// Deletes the customer with the given id. Deleting an unknown id is a soft
/// miss reported as `false` without an error.
pub fn delete_customer<R>(repo: &R, customer_id: CustomerId) -> ApiResponse<bool>
where
    R: CustomerWriter + ?Sized,
{
    log::info!("delete_customer request data: {customer_id}");

    match repo.delete_customer(customer_id) {
        Ok(true) => {
            log::info!("Customer {customer_id} deleted");
            ApiResponse::success(true)
        }
        Ok(false) => ApiResponse::success(false),
        Err(err) => {
            log::error!("Failed to delete customer, request data: {customer_id}: {err}");
            err.into()
        }
    }
}
