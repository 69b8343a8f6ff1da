//! Things that only run on the server (reading the config, talking to the catalog backend)
//!
//! Also contains the axum routes that forward the clients api calls to the backend.
pub mod config;
pub mod forward;
pub mod signal_handler;
