//! Top-level module for the verse generation system.
//!
//! This crate provides a prompt-steered word-chain text generator, including:
//! - A word transition model (`WordChain`)
//! - Prompt relevance scoring and start-word selection
//! - A high-level generation interface (`Generator`)
//! - Generation configuration (`GenerationInput`)
//! - An injectable random source (`RandomSource`)

/// Word transition model built from a training corpus.
///
/// Supports incremental training, parallel construction from a whole
/// corpus, and merging.
pub mod chain;

/// Line formatting for generated word sequences.
///
/// Packs a flat word sequence into short display lines, breaking on
/// sentence-ending punctuation.
pub mod formatter;

/// Generation configuration structure.
///
/// Stores validated line-count bounds used by `Generator::generate`.
pub mod generation_input;

/// High-level interface for generating verse from one trained model.
///
/// Exposes corpus loading (with binary caching), relevance queries,
/// start-word selection and the biased random walk.
pub mod generator;

/// Injectable random source.
///
/// Every stochastic decision in generation flows through this trait,
/// so a seeded or scripted source makes full walks deterministic.
pub mod random;

/// Internal prompt relevance scoring and start-word selection.
///
/// This module is not exposed publicly.
mod relevance;

/// Internal corpus and prompt tokenization.
///
/// This module is not exposed publicly.
mod tokenize;
