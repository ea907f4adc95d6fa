//! Operation handlers for [`MockS3Backend`](crate::backend::MockS3Backend).
//!
//! Handlers are split by concern:
//!
//! - [`bucket`] -- bucket CRUD and existence checks
//! - [`object`] -- object CRUD, bulk delete, copy, presigned URLs
//! - [`list`] -- v1 and v2 object listings

mod bucket;
mod list;
mod object;
