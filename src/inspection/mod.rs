//! Inspection domain: the audit data model, scoring and the pure services the
//! report pipeline is built from. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
