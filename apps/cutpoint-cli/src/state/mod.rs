//! # State Module
//!
//! Everything the CLI holds between commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────┐        │
//! │  │       FormState          │      │       ConfigState        │        │
//! │  │                          │      │                          │        │
//! │  │  raw field text          │      │  default volume class    │        │
//! │  │  result display          │      │  separator, unit label   │        │
//! │  │  error banner            │      │  json, log filter        │        │
//! │  │  last breakdown          │      │                          │        │
//! │  └──────────────────────────┘      └──────────────────────────┘        │
//! │         mutated by commands           read-only after load             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI is single-threaded, so neither needs a lock.

mod config;
mod form;

pub use config::ConfigState;
pub use form::FormState;
