//! Upload Gateway service
//!
//! Authorizes client-direct uploads to S3 by issuing short-lived presigned
//! PUT URLs after validating declared file type and size, and performs
//! server-side deletion of previously uploaded objects. File bytes never
//! transit this service.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Upload and deletion authorization
pub mod authorizer;

/// S3 object storage operations
pub mod object_storage;

/// Route definitions and handlers
pub mod routes;

/// HTTP server assembly
pub mod server;

/// Application state
pub mod state;

/// Environment configuration, error envelope, extractors
pub mod types;
