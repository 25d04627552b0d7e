use std::io;

use thiserror::Error;

/// Result type for name generation operations.
pub type NameResult<T> = Result<T, NameError>;

/// Errors that can occur while building models or resolving archetypes.
///
/// The permissive generation entry points never return these: they are
/// reported by the strict variants, the corpus loader and the model API.
#[derive(Debug, Error)]
pub enum NameError {
	/// A transition model needs a context of at least one character.
	#[error("order must be >= 1, got {0}")]
	InvalidOrder(usize),

	/// The archetype label is not in the catalog.
	#[error("unknown archetype: {0}")]
	UnknownArchetype(String),

	/// Two profiles were registered under the same label.
	#[error("archetype already registered: {0}")]
	DuplicateArchetype(String),

	/// A corpus file did not contain a single usable name.
	#[error("corpus '{0}' is empty")]
	EmptyCorpus(String),

	/// Failure while reading corpus files.
	#[error("{0}")]
	Io(#[from] io::Error),
}
