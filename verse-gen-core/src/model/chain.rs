use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::tokenize;

/// True when the first character of `word` is an ASCII uppercase letter.
///
/// Such words are eligible to begin a generated sequence.
pub(crate) fn starts_uppercase(word: &str) -> bool {
	word.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Word-level transition model built from a training corpus.
///
/// The `WordChain` maps every observed word to the ordered list of words
/// that followed it in the corpus. Successors are appended once per
/// observed pair and duplicates are retained, so each list doubles as a
/// frequency-weighted sampling pool.
///
/// # Responsibilities
/// - Accumulate transition and occurrence counts from adjacent word pairs
/// - Capture the pool of capitalized start words at training time
/// - Merge with another chain (parallel construction support)
///
/// # Invariants
/// - Every transition key has at least one successor
/// - Key iteration order is first-insertion order; together with the
///   in-order successor lists this makes downstream ranking reproducible
/// - A word's occurrence count is at least the number of times it appears
///   as a key or as a successor
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct WordChain {
	/// Mapping from a word to its observed successors, in corpus order.
	transitions: IndexMap<String, Vec<String>>,

	/// Occurrence count per word, +1 for each side of every trained pair.
	frequencies: HashMap<String, usize>,

	/// Capitalized words in corpus order, duplicates retained.
	start_words: Vec<String>,
}

impl WordChain {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one observed adjacent pair.
	///
	/// Appends `second` to the successor list of `first` (creating the
	/// entry if absent) and increments the occurrence count of both words.
	pub fn add_pair(&mut self, first: &str, second: &str) {
		self.transitions
			.entry(first.to_owned())
			.or_default()
			.push(second.to_owned());

		*self.frequencies.entry(first.to_owned()).or_insert(0) += 1;
		*self.frequencies.entry(second.to_owned()).or_insert(0) += 1;
	}

	/// Trains the chain on a text.
	///
	/// Tokenizes the text, replaces the start-word pool with every token
	/// beginning with an ASCII uppercase letter, then records every
	/// consecutive token pair.
	///
	/// # Notes
	/// - Training again is additive for transitions and frequencies but
	///   fully replaces the start-word pool.
	/// - A text with fewer than 2 tokens records no pairs; the resulting
	///   empty table is a valid model state, not an error.
	pub fn train(&mut self, text: &str) {
		let tokens = tokenize::tokenize(text);

		self.start_words = tokens
			.iter()
			.filter(|word| starts_uppercase(word))
			.cloned()
			.collect();

		for pair in tokens.windows(2) {
			self.add_pair(&pair[0], &pair[1]);
		}
	}

	/// Builds a chain from a whole corpus using worker threads.
	///
	/// Splits the token-pair range into chunks (CPU cores * factor), builds
	/// a partial chain per chunk, and merges the partials back in chunk
	/// order.
	///
	/// # Notes
	/// - Chunks overlap by one token so every adjacent pair lands in
	///   exactly one chunk.
	/// - Merging in chunk order reproduces a sequential `train` exactly:
	///   same key insertion order, same successor order, same counts.
	/// - Uses MPSC channels to collect partial chains from threads.
	pub fn from_corpus(text: &str) -> Self {
		let tokens = tokenize::tokenize(text);

		let mut chain = Self::new();
		chain.start_words = tokens
			.iter()
			.filter(|word| starts_uppercase(word))
			.cloned()
			.collect();

		if tokens.len() < 2 {
			// No pairs to record
			return chain;
		}

		let pair_count = tokens.len() - 1;
		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = (pair_count + chunks - 1) / chunks;

		let (tx, rx) = mpsc::channel();
		for (index, start) in (0..pair_count).step_by(chunk_size).enumerate() {
			let end = (start + chunk_size).min(pair_count);
			let slice: Vec<String> = tokens[start..=end].to_vec();
			let tx = tx.clone();

			thread::spawn(move || {
				let mut partial = WordChain::new();
				for pair in slice.windows(2) {
					partial.add_pair(&pair[0], &pair[1]);
				}
				tx.send((index, partial)).expect("Failed to send from thread");
			});
		}
		drop(tx);

		let mut partials: Vec<(usize, WordChain)> = rx.iter().collect();
		// Chunk order, not arrival order: successor and key insertion
		// order are part of the model contract
		partials.sort_by_key(|(index, _)| *index);
		for (_, partial) in &partials {
			chain.merge(partial);
		}

		log::info!(
			"built chain: {} keys, {} start words",
			chain.len(),
			chain.start_words.len()
		);
		chain
	}

	/// Merges another chain into this one.
	///
	/// # Notes
	/// - Successor lists of matching keys are appended in the other
	///   chain's order; new keys are appended after existing ones.
	/// - Occurrence counts are summed; start-word pools are concatenated.
	pub fn merge(&mut self, other: &Self) {
		for (word, successors) in &other.transitions {
			self.transitions
				.entry(word.clone())
				.or_default()
				.extend(successors.iter().cloned());
		}

		for (word, count) in &other.frequencies {
			*self.frequencies.entry(word.clone()).or_insert(0) += count;
		}

		self.start_words.extend(other.start_words.iter().cloned());
	}

	/// Returns the successors observed after `word`, if any.
	pub fn successors(&self, word: &str) -> Option<&[String]> {
		self.transitions.get(word).map(Vec::as_slice)
	}

	/// True when `word` is a transition key.
	pub fn contains(&self, word: &str) -> bool {
		self.transitions.contains_key(word)
	}

	/// Occurrence count of `word`, if it was ever part of a trained pair.
	pub fn frequency(&self, word: &str) -> Option<usize> {
		self.frequencies.get(word).copied()
	}

	/// Transition keys in first-insertion order.
	pub fn words(&self) -> impl Iterator<Item = &String> {
		self.transitions.keys()
	}

	/// The capitalized start-word pool, in corpus order.
	pub fn start_words(&self) -> &[String] {
		&self.start_words
	}

	/// True when no transitions have been recorded.
	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Number of transition keys.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}
}
