//! ccrm-core — Enrollment, grading and interchange engine.
//!
//! This crate defines the record model (students, courses, enrollments),
//! the grade scale, GPA statistics and the pipe-delimited interchange codec
//! that the rest of ccrm builds on.

pub mod codec;
pub mod engine;
pub mod error;
pub mod grade;
pub mod model;
pub mod registry;
pub mod report;
pub mod statistics;
