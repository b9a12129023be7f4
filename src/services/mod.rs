//! Business operations invoked by the HTTP routes.
//!
//! Services never fail: every outcome, including store failures, is folded
//! into an [`ApiResponse`](crate::dto::api::ApiResponse).

use serde::Serialize;

pub mod customer;

/// JSON rendering of a request used in invocation logs.
fn snapshot<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| format!("<unserializable: {err}>"))
}
