//! In-memory rows behind a small JSON REST API.
//!
//! - [`row`] defines the stored record: an integer id plus free-form fields.
//! - [`store`] keeps the rows in insertion order behind an async mutex.
//! - [`routes`] maps `GET/POST /rows` and `GET/DELETE /rows/:id` onto the
//!   store, plus an HTML page at `/`.
//! - [`server`] binds the router to a TCP listener with graceful shutdown.
//! - [`cli`] parses the command-line options for the binary.

pub mod cli;
pub mod routes;
pub mod row;
pub mod server;
pub mod store;
