#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

pub mod chain;
pub mod cli;
pub mod config;

pub use chain::ChainClient;

/// Re-exports the LBM chain query core.
pub mod core {
    pub use lbm_chain::*;
}
