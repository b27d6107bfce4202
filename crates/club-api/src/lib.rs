//! # club-api
//!
//! REST API server for the study club tracker, built on Axum. Exposes the
//! community/member/round/goal/attendance/notification/reaction surface
//! under `/api/v1` with a uniform `{success, data, error}` envelope.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
