//! searchexport
//!
//! CSV export logic for log search views: which message table an export is
//! scoped to, what the export dialog shows and enables, and the payload that
//! is finally dispatched.
//!
//! Pure core ([`model`], [`export`], [`state`]) with a thin impure shell
//! ([`source`], [`config`], [`logging`] and the binary).

pub mod config;
pub mod export;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;

#[cfg(test)]
mod test_harness;
