//! Route handlers.
//!
//! This module implements the application behavior behind the HTTP layer:
//! picking a handler from the request's method and path prefix, echoing
//! request data back, and the file download/upload handlers rooted at the
//! configured directory. There is no route table; dispatch is a fixed
//! first-match prefix ladder.

pub mod dispatch;
pub mod files;

pub use dispatch::dispatch;
