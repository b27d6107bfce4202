//! Request extractors - auth, cursor pagination, validated JSON

mod auth;
mod pagination;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use pagination::CursorPagination;
pub use validated::{OptionalValidatedJson, ValidatedJson};
