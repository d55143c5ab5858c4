//! Networking glue for the credential API.

pub mod api;
