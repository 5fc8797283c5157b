//! Attribution domain layer
//!
//! Pure business logic turning SBOM components into an attribution report
//! model. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
