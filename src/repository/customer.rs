//! Repository implementation for customers.

use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        customer::{Customer, NewCustomer},
        types::CustomerId,
    },
    models::customer::{Customer as DbCustomer, NewCustomer as DbNewCustomer},
    repository::{
        CustomerReader, CustomerSearchQuery, CustomerWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::customers,
};

diesel::define_sql_function! {
    /// SQLite `instr`: 1-based character position of `needle` in `haystack`, 0 when absent.
    fn instr(haystack: Text, needle: Text) -> Integer;
}

/// Matches customers whose firstname or surname contains `search` verbatim.
fn filtered(search: Option<&str>) -> customers::BoxedQuery<'static, Sqlite> {
    let mut query = customers::table.into_boxed();

    if let Some(term) = search.filter(|term| !term.is_empty()) {
        query = query.filter(
            instr(customers::firstname, term.to_owned())
                .gt(0)
                .or(instr(customers::surname, term.to_owned()).gt(0)),
        );
    }

    query
}

fn to_sql_int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl CustomerReader for DieselRepository {
    fn search_customers(
        &self,
        query: CustomerSearchQuery,
    ) -> RepositoryResult<(usize, Vec<Customer>)> {
        let mut conn = self.conn()?;
        let search = query.search.as_deref();

        let (total, rows) = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let total: i64 = filtered(search).count().get_result(conn)?;

            let mut items =
                filtered(search).order((customers::surname.asc(), customers::id.asc()));

            if let Some(pagination) = query.pagination {
                if pagination.per_page == 0 {
                    return Ok((total, Vec::new()));
                }
                items = items
                    .limit(to_sql_int(pagination.per_page))
                    .offset(to_sql_int(pagination.offset()));
            }

            let rows = items.load::<DbCustomer>(conn)?;
            Ok((total, rows))
        })?;

        let customers = rows
            .into_iter()
            .map(Customer::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((usize::try_from(total).unwrap_or_default(), customers))
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        let mut conn = self.conn()?;

        let insertable = DbNewCustomer::with_id(CustomerId::generate(), new_customer);

        let row = diesel::insert_into(customers::table)
            .values(&insertable)
            .get_result::<DbCustomer>(&mut conn)?;

        Customer::try_from(row).map_err(RepositoryError::from)
    }

    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;

        let affected =
            diesel::delete(customers::table.find(id.to_db_string())).execute(&mut conn)?;

        Ok(affected > 0)
    }
}
