//! Query helpers shared by list endpoints.

pub mod filter;

pub use filter::Filters;
