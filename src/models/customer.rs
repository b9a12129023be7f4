use diesel::prelude::*;

use crate::domain::customer::{Customer as DomainCustomer, NewCustomer as DomainNewCustomer};
use crate::domain::types::{CustomerId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: String,
    pub firstname: String,
    pub surname: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub id: String,
    pub firstname: &'a str,
    pub surname: &'a str,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CustomerId::try_from(customer.id)?,
            firstname: customer.firstname,
            surname: customer.surname,
        })
    }
}

impl<'a> NewCustomer<'a> {
    /// Pairs the domain payload with the identifier assigned for this insert.
    pub fn with_id(id: CustomerId, customer: &'a DomainNewCustomer) -> Self {
        Self {
            id: id.to_db_string(),
            firstname: customer.firstname.as_str(),
            surname: customer.surname.as_str(),
        }
    }
}
