//! # marsclock
//!
//! Mars time from terrestrial timestamps (Mars24 algorithm) and a small
//! status updater that republishes rover sols and local solar time into a
//! marked region of a remote document.
//!
//! - [`ephemeris`] – the pure conversion `unix seconds → TimeSnapshot`
//! - [`missions`] – per-rover sol counts and local solar times
//! - [`format`] – `HH:MM[:SS]` rendering
//! - [`status`], [`patch`], [`publisher`], [`updater`] – the publishing side
pub mod angles;
pub mod config;
pub mod constants;
pub mod ephemeris;
pub mod format;
pub mod logging;
pub mod marsclock_errors;
pub mod missions;
pub mod patch;
pub mod publisher;
pub mod status;
pub mod time;
pub mod updater;

pub use ephemeris::{compute, MarsEphemeris, TimeSnapshot};
pub use marsclock_errors::MarsClockError;
