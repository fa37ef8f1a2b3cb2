//! integrated tests
pub mod toolkit;

mod quality;
mod solver;
