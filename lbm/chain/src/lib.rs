//! Query and proof plumbing for relaying against LBM (Ostracon) chains.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

pub mod client;
pub mod error;
pub mod events;
pub mod msg;
pub mod proof;
pub mod query;
pub mod status;

pub use error::Error;
