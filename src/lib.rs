//! # stayfinder
//!
//! Native host-side tooling for the StayFinder marketplace: a typed client
//! for the host dashboard API, environment-driven configuration, and the
//! argument model for the `stayfinder-host` CLI.
//!
//! Listing-wizard state and API payload types live in the `marketplace`
//! crate and are shared with the Leptos `client`.

pub mod cli;
pub mod config;
pub mod host;

pub use config::HostConfig;
pub use host::{HostError, HostService};
