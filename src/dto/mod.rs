//! DTOs exchanged between services and the HTTP boundary.

pub mod api;
pub mod customer;
