//! Shared helpers for in-crate tests.

pub(crate) mod quick;
