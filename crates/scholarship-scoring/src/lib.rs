//! Scholarship application scoring.
//!
//! The [`scoring`] module holds the applicant scoring engine together with the
//! repository and service seams that feed it stored applicants and persist its
//! results. Configuration, telemetry, and the application error type live
//! alongside so front ends can share them.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
