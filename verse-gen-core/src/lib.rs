//! Prompt-steered Markov verse generation library.
//!
//! This crate provides a word-level chain generation system including:
//! - Word transition models built from a training corpus
//! - Prompt-to-corpus relevance scoring
//! - A biased random walk with injectable randomness
//! - Line formatting for poem-shaped output
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core chain model and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// internal scoring and formatting helpers private.
pub mod model;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;
