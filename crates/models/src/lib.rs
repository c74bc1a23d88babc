pub mod errors;
pub mod db;
pub mod lookup;
pub mod user;
pub mod business_profile;
pub mod project;
pub mod deal;
pub mod transaction;

#[cfg(test)]
mod tests;
