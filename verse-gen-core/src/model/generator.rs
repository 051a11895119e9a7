use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io;
use super::chain::WordChain;
use super::formatter;
use super::generation_input::GenerationInput;
use super::random::RandomSource;
use super::relevance;
use super::tokenize;

/// Probability of jumping to a relevant word when the walk dead-ends.
const DEAD_END_RELEVANT_JUMP: f64 = 0.3;

/// Probability of restricting a step to relevant successors.
const RELEVANT_BIAS: f64 = 0.2;

/// How many top-ranked words form the biasing set.
const RELEVANT_SET_SIZE: usize = 10;

/// How many top-ranked words a dead-end jump picks from.
const DEAD_END_POOL_SIZE: usize = 5;

/// Assumed average words per output line.
const WORDS_PER_LINE: usize = 6;

/// High-level generator owning one trained word chain.
///
/// # Responsibilities
/// - Load a corpus (with binary caching) or train from an in-memory text
/// - Expose relevance ranking and start-word selection for a prompt
/// - Generate poem-shaped text via a biased random walk
///
/// # Notes
/// - The chain is never mutated after construction, so a `Generator` can
///   be shared read-only across threads; every request brings its own
///   random source.
#[derive(Serialize, Deserialize, Debug)]
pub struct Generator {
	name: String,
	chain: WordChain,
}

impl Generator {
	/// Loads a generator from a corpus text file.
	///
	/// # Behavior
	/// - If a `.bin` file built from the same stem exists, it is loaded
	///   with postcard instead of retraining.
	/// - Otherwise the corpus is read whole, the chain is built with
	///   worker threads, and the binary cache is written for future fast
	///   loading.
	///
	/// # Errors
	/// Returns an error if file I/O or (de)serialization fails.
	pub fn new<P: AsRef<Path>>(corpus_path: P) -> Result<Self, Box<dyn std::error::Error>> {
		let binary_data_path = io::build_output_path(&corpus_path, "bin")?;
		if binary_data_path.exists() {
			let bytes = std::fs::read(&binary_data_path)?;
			let generator: Generator = postcard::from_bytes(&bytes)?;
			log::info!("loaded cached model from {}", binary_data_path.display());
			return Ok(generator);
		}

		let text = io::read_file(&corpus_path)?;
		let generator = Self {
			name: io::get_filename(&corpus_path)?,
			chain: WordChain::from_corpus(&text),
		};

		let bytes = postcard::to_stdvec(&generator)?;
		std::fs::write(&binary_data_path, bytes)?;
		log::info!("serialized model to {}", binary_data_path.display());

		Ok(generator)
	}

	/// Trains a generator from an in-memory text, without caching.
	pub fn from_text(text: &str) -> Self {
		Self {
			name: "inline".to_owned(),
			chain: WordChain::from_corpus(text),
		}
	}

	/// Name of the corpus this model was trained from.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Read-only access to the trained chain.
	pub fn chain(&self) -> &WordChain {
		&self.chain
	}

	/// Known words ranked by similarity to the prompt, best first.
	pub fn relevant_words(&self, prompt: &str) -> Vec<String> {
		relevance::relevant_words(&self.chain, prompt)
	}

	/// Picks the word a sequence for this prompt would start from.
	///
	/// # Errors
	/// Returns an error when the prompt matches nothing and the start-word
	/// pool is empty.
	pub fn start_word(&self, prompt: &str, rng: &mut dyn RandomSource) -> Result<String, String> {
		let relevant = relevance::relevant_words(&self.chain, prompt);
		relevance::start_word(&self.chain, &relevant, rng)
	}

	/// Generates poem-shaped text steered toward the prompt.
	///
	/// # Behavior
	/// - An untrained model returns the empty string.
	/// - The target line count is a random draw in the configured range,
	///   plus 3 lines per prompt word beyond the first, capped at the
	///   configured ceiling; the walk gathers ~6 words per target line.
	/// - Each step follows the chain, with a small probability of
	///   restricting the step to prompt-relevant successors; dead ends
	///   jump to a relevant word or restart from the pool.
	/// - The sequence is formatted into lines and truncated to the target
	///   count, even mid-sentence.
	///
	/// # Errors
	/// Returns an error when a start word is needed (initially or at a
	/// dead end) and neither a relevant candidate nor a pooled word
	/// exists.
	pub fn generate(
		&self,
		prompt: &str,
		input: &GenerationInput,
		rng: &mut dyn RandomSource,
	) -> Result<String, String> {
		if self.chain.is_empty() {
			// Untrained model: defined empty output, not an error
			return Ok(String::new());
		}

		let prompt_word_count = tokenize::prompt_tokens(prompt).len();
		let base_lines = rng.int_between(input.min_lines_per_word(), input.max_lines_per_word());
		let additional_lines = prompt_word_count.saturating_sub(1) * 3;
		let target_lines = (base_lines + additional_lines).min(input.max_total_lines());
		let target_words = target_lines * WORDS_PER_LINE;

		let relevant = relevance::relevant_words(&self.chain, prompt);
		let relevant_set: HashSet<&str> = relevant
			.iter()
			.take(RELEVANT_SET_SIZE)
			.map(String::as_str)
			.collect();

		let mut current = relevance::start_word(&self.chain, &relevant, rng)?;
		let mut result = vec![current.clone()];

		while result.len() < target_words {
			current = match self.chain.successors(&current) {
				Some(candidates) if !candidates.is_empty() => {
					self.next_word(candidates, &relevant_set, rng)
				}
				_ => self.escape_dead_end(&relevant, rng)?,
			};
			result.push(current.clone());
		}

		let formatted = formatter::format(&result.join(" "));
		Ok(formatted
			.lines()
			.take(target_lines)
			.collect::<Vec<_>>()
			.join("\n"))
	}

	/// One chain step, biased toward prompt-relevant successors.
	fn next_word(
		&self,
		candidates: &[String],
		relevant_set: &HashSet<&str>,
		rng: &mut dyn RandomSource,
	) -> String {
		if !relevant_set.is_empty() && rng.chance(RELEVANT_BIAS) {
			let biased: Vec<&String> = candidates
				.iter()
				.filter(|word| relevant_set.contains(word.as_str()))
				.collect();
			if !biased.is_empty() {
				return biased[rng.pick_index(biased.len())].clone();
			}
		}
		candidates[rng.pick_index(candidates.len())].clone()
	}

	/// Leaves a word with no successors, preferring relevant words.
	///
	/// # Errors
	/// Returns an error when the pool restart is needed but the pool is
	/// empty.
	fn escape_dead_end(
		&self,
		relevant: &[String],
		rng: &mut dyn RandomSource,
	) -> Result<String, String> {
		if !relevant.is_empty() && rng.chance(DEAD_END_RELEVANT_JUMP) {
			let pool_size = relevant.len().min(DEAD_END_POOL_SIZE);
			return Ok(relevant[rng.pick_index(pool_size)].clone());
		}

		let pool = self.chain.start_words();
		if pool.is_empty() {
			return Err("start-word pool is empty and no relevant word can restart the walk".to_owned());
		}
		Ok(pool[rng.pick_index(pool.len())].clone())
	}
}
