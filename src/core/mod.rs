//! Core plumbing shared by the stat adapter and commands
//!
//! - `cache`: request-scoped memoization around a stat source
//! - `http`: provider authentication headers

pub mod cache;
pub mod http;

pub use cache::RequestCache;
pub use http::provider_headers;
