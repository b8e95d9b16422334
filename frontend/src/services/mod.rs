//! External communication.
//!
//! # Services
//!
//! - [`enquiry`] - JSON POST of enquiries to the form-handling endpoint

pub mod enquiry;

pub use enquiry::*;
