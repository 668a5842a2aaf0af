//! CLI command implementations.

pub(crate) mod get;
pub(crate) mod inspect;
