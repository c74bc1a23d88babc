//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration, login, logout and the token lifecycle live here, independent
//! of the HTTP layer. `token` and `password` hold the primitives the service
//! is built from.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repository;
pub mod repo;
pub mod service;
pub mod token;

pub use service::{AuthConfig, AuthService};
pub use token::Claims;
