//! # Status publishers
//!
//! A [`Publisher`] writes a rendered status block into the marked region of a
//! remote document. The updater only depends on this trait, so its tests run
//! against [`memory::InMemoryPublisher`] and never touch the network.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryPublisher`] – documents kept in process memory.
//! - [`wiki::WikiPublisher`] – a subreddit wiki page edited over HTTPS with a
//!   pre-issued OAuth bearer token.
//!
//! Both apply [`replace_between_markers`](crate::patch::replace_between_markers)
//! to the current document before writing it back.
use async_trait::async_trait;

use crate::marsclock_errors::MarsClockError;
use crate::patch::Markers;

pub mod memory;
pub mod wiki;

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Replace the region between `markers` in the document identified by
    /// `destination` with `text`.
    ///
    /// A failed call must leave the remote document unchanged so the next
    /// attempt starts from the same state.
    async fn publish(
        &self,
        destination: &str,
        text: &str,
        markers: &Markers,
    ) -> Result<(), MarsClockError>;
}
