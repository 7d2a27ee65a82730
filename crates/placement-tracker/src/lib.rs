//! Placement eligibility and training tracker.
//!
//! Turns an unstructured hiring document into structured eligibility
//! criteria, classifies a pool of tracked candidates against them, and
//! derives per-candidate gap reports, training plans, and notification
//! outcomes. Document text extraction, the candidate datastore, training
//! plan generation, and e-mail delivery are collaborator traits implemented
//! by the surrounding service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
