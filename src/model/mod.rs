//! Pure data structures exchanged with the directory service and held by the record store.

pub mod user;

pub use user::*;
