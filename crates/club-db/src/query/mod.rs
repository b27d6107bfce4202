//! Query construction layer
//!
//! Centralizes the two behaviors every repository must share:
//!
//! - **Soft-delete visibility**: [`QueryFilter`] renders WHERE clauses and,
//!   unless explicitly bypassed, always constrains reads to rows whose
//!   `deleted_at` is NULL. Deleted-row visibility is a dedicated field of
//!   the builder rather than a free-form predicate, so no caller-supplied
//!   condition can conflict with it.
//! - **Delete conversion**: [`soft_delete`] renders `UPDATE ... SET
//!   deleted_at = NOW()` statements; repository code never issues a
//!   physical `DELETE`.
//! - **Keyset pagination**: [`pagination`] renders the compound
//!   `(sort, id)` row-comparison window and matching ORDER BY.

mod filter;
pub mod pagination;
pub mod soft_delete;

pub use filter::{QueryFilter, Visibility};
