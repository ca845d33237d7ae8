//! Upstream joke sources

mod teehee;

pub use teehee::TeeheeClient;
