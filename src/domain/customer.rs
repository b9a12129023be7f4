use serde::{Deserialize, Serialize};

use crate::domain::types::CustomerId;

/// A stored customer record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub firstname: String,
    pub surname: String,
}

/// Data required to store a new customer. The identifier is assigned by the
/// repository on insert.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCustomer {
    pub firstname: String,
    pub surname: String,
}

impl NewCustomer {
    #[must_use]
    pub fn new(firstname: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            surname: surname.into(),
        }
    }
}
