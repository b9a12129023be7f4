//! Payloads returned by the customer search.

use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;

/// Lightweight projection of a customer used in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerItem {
    pub id: CustomerId,
    pub firstname: String,
    pub surname: String,
}

impl From<Customer> for CustomerItem {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            firstname: customer.firstname,
            surname: customer.surname,
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomersPage {
    /// Number of customers matching the filter across all pages.
    pub total_count: usize,
    /// Customers on the requested page, ordered by surname.
    pub customers: Vec<CustomerItem>,
}
