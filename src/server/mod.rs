//! TCP server front end: the bounded accept loop.

pub mod listener;
