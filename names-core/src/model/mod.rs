//! Statistical core of the name generator.
//!
//! - Character-transition models learned from a corpus (`TransitionModel`)
//! - Internal per-context state (`State`)
//! - Model walks, retries and fallback synthesis (`sampler`)

/// Context-keyed transition counts built from a corpus.
///
/// Handles name ingestion, transition counting and
/// probabilistic next-character prediction.
pub mod transition_model;

/// Weighted walks over a `TransitionModel`, with bounded retries and
/// alternating consonant/vowel fallback.
pub mod sampler;

/// Internal representation of a single context.
///
/// Tracks outgoing transitions and supports weighted random sampling.
/// This module is not exposed publicly.
mod state;
