//! Shared test utilities for wordz integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod builders;
pub mod fake_source;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fake_source::*;
pub use fixtures::*;
