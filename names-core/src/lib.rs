//! Archetype-driven procedural name generation.
//!
//! This crate synthesizes new, plausible-sounding names from small seed
//! lists, including:
//! - Character-transition models learned from a corpus
//! - Weighted sampling with bounded retries and fallback synthesis
//! - Phonetic plausibility and novelty filters
//! - Template-based robot designations
//!
//! The entry point is [`NameGenerator`]; the other modules are exposed for
//! hosts that want to assemble their own pipeline.

/// Archetype profiles and the label → profile catalog.
pub mod archetype;

/// Generator settings and length bounds.
pub mod config;

/// Built-in seed name lists and the `Corpus` type.
pub mod corpus;

/// Template-based mechanical designations.
pub mod designation;

/// Error type shared by the strict APIs.
pub mod error;

/// The archetype orchestrator.
pub mod generator;

/// Transition models and sampling.
pub mod model;

/// Near-copy detection.
pub mod novelty;

/// Vowel/consonant run heuristics.
pub mod phonetics;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use archetype::{ArchetypeCatalog, ArchetypeKind, ArchetypeProfile};
pub use config::{GeneratorConfig, LengthBounds, MAX_NAME_LENGTH, NameOptions};
pub use corpus::Corpus;
pub use designation::generate_code;
pub use error::{NameError, NameResult};
pub use generator::NameGenerator;
pub use novelty::is_too_similar;
pub use phonetics::is_plausible;
