//! Request handlers.
//!
//! Each submodule provides async handler functions for one area of the
//! site. Handlers delegate to the corresponding repository in
//! `recipebox_db` and map errors via [`AppError`](crate::error::AppError).

pub mod pages;
pub mod recipe;
