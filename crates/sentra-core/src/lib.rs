//! sentra-core
//!
//! Pure domain types shared across the Sentra engines: patients, treatment
//! plans, chief-complaint analyses, risk results, and validation reports.
//! No I/O and no async — this is the shared vocabulary of the system.

pub mod models;
