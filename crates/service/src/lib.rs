//! Service layer providing the application's business operations on top of models.
//! - Separates business logic from data access.
//! - Reuses entity definitions and input types from the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod auth;
pub mod pagination;
pub mod user_service;
pub mod business_service;
pub mod lookup_service;
#[cfg(test)]
pub mod test_support;
