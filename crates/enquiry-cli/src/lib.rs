//! Library components for the directory enquiry CLI.

pub mod answer;
pub mod interactive;
pub mod logging;
pub mod session;
