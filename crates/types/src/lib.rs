//! Shared types for the beta bundle bidder: environment-driven
//! configuration, the per-slot auction state machine, and the private-chain
//! call template.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]

mod config;
pub use config::{env, BidderConfig, ConfigError};

mod slot;
pub use slot::{SlotPhase, SlotState};

mod template;
pub use template::{CallTemplate, TemplateError};
