//! # Echo Service
//!
//! **INTERNAL USE ONLY**: This crate exists solely to provide a Jolie-like HTTP backend
//! for integration testing `jo-core`. It is not intended for production use.
//!
//! The same backend is exposed two ways:
//!
//! * [`EchoBackend`]: an in-process [`jo_core::Transport`] that answers without touching the
//!   network and records every request it receives.
//! * [`router`] / [`spawn`]: an `axum` server, to test [`jo_core::HttpTransport`] end to end.
//!
//! ## Operations
//!
//! | operation | answer                                                            |
//! |-----------|-------------------------------------------------------------------|
//! | `test`    | `200` `"test acknowledged"`                                       |
//! | `echo`    | `200` the received payload (`null` when none)                     |
//! | `search`  | `200` `{"result":[{"value":"<query> joke"}]}`                     |
//! | `inspect` | `200` what the backend saw: method, service, path, query, body... |
//! | `fail`    | `500` `{"error": <payload or {"msg":"bad"}>}`                     |
//! | `broken`  | `502` a non JSON body                                             |
//! | other     | `404` `{"error":{"msg":"operation not found"}}`                   |
mod backend;
mod server;
mod transport;

pub use backend::{Call, Reply, TEST_ACK, handle};
pub use server::{router, spawn};
pub use transport::EchoBackend;
