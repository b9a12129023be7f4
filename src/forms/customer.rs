use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::customer::NewCustomer;
use crate::forms::FormError;
use crate::repository::{CustomerSearchQuery, Pagination};

/// Page size used when a search request does not name one.
pub const DEFAULT_PAGE_SIZE: i64 = 2;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Body of a create customer request.
pub struct CreateCustomerForm {
    #[validate(custom(function = "not_blank"))]
    pub firstname: String,
    #[validate(custom(function = "not_blank"))]
    pub surname: String,
}

impl CreateCustomerForm {
    /// Parses and validates a raw request body. An empty or `null` body is an
    /// absent request and yields `None`.
    pub fn from_body(body: &[u8]) -> Result<Option<Self>, FormError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let form: Option<Self> = serde_json::from_slice(body)?;
        if let Some(form) = &form {
            form.validate()?;
        }
        Ok(form)
    }

    pub fn to_new_customer(&self) -> NewCustomer {
        NewCustomer::new(self.firstname.as_str(), self.surname.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
/// Search parameters, accepted either as a JSON body or a query string.
pub struct SearchCustomersForm {
    /// Zero-based page index.
    pub page: i64,
    /// Page size.
    pub count: i64,
    /// Substring to look for in first names and surnames.
    pub search_value: Option<String>,
}

impl Default for SearchCustomersForm {
    fn default() -> Self {
        Self {
            page: 0,
            count: DEFAULT_PAGE_SIZE,
            search_value: None,
        }
    }
}

impl SearchCustomersForm {
    pub fn to_query(&self) -> CustomerSearchQuery {
        CustomerSearchQuery::new()
            .search(self.search_value.clone().unwrap_or_default())
            .window(Pagination::from_signed(self.page, self.count))
    }
}
