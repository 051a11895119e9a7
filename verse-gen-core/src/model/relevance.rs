use std::collections::HashSet;

use super::chain::{starts_uppercase, WordChain};
use super::random::RandomSource;
use super::tokenize;

/// Ranks every transition key by similarity to the prompt.
///
/// For each key and each prompt token, a direct substring match (against
/// the lowercased key) scores 2.0; otherwise the fraction of the key's
/// distinct characters that occur in the token is added. Keys with a raw
/// score of 0 are excluded, then the survivors are rescaled by
/// `1 + ln(1 / frequency)` to favor rare words.
///
/// # Notes
/// - The rescale can turn negative for very frequent words; such words
///   stay in the ranking and simply sort last.
/// - Prompt tokens that stripped down to the empty string contribute
///   nothing, so an all-punctuation prompt yields an empty ranking.
/// - The sort is stable: equal scores keep table insertion order, which
///   makes the ranking reproducible for a fixed model.
pub(crate) fn ranked_words(chain: &WordChain, prompt: &str) -> Vec<(String, f64)> {
	let prompt_words = tokenize::prompt_tokens(prompt);

	let mut ranked: Vec<(String, f64)> = Vec::new();
	for word in chain.words() {
		let lower = word.to_lowercase();
		let mut score = 0.0;

		for prompt_word in &prompt_words {
			if prompt_word.is_empty() {
				continue;
			}
			if lower.contains(prompt_word.as_str()) {
				// Direct substring match
				score += 2.0;
			} else {
				// Fraction of the word's distinct characters that also
				// occur in the prompt token
				let mut seen = HashSet::new();
				let common = lower
					.chars()
					.filter(|c| seen.insert(*c) && prompt_word.contains(*c))
					.count();
				score += common as f64 / prompt_word.chars().count() as f64;
			}
		}

		if score > 0.0 {
			let frequency = chain.frequency(word).unwrap_or(1);
			score *= 1.0 + (1.0 / frequency as f64).ln();
			ranked.push((word.clone(), score));
		}
	}

	ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
	ranked
}

/// The ranked words without their scores.
pub(crate) fn relevant_words(chain: &WordChain, prompt: &str) -> Vec<String> {
	ranked_words(chain, prompt)
		.into_iter()
		.map(|(word, _)| word)
		.collect()
}

/// Picks the word a generated sequence starts from.
///
/// Priority order:
/// 1. the first relevant word that is capitalized and a transition key
/// 2. the first relevant word that is a transition key
/// 3. a uniformly random member of the start-word pool
///
/// # Errors
/// Returns an error when all three fail, instead of indexing into an
/// empty pool.
pub(crate) fn start_word(
	chain: &WordChain,
	relevant: &[String],
	rng: &mut dyn RandomSource,
) -> Result<String, String> {
	if let Some(word) = relevant
		.iter()
		.find(|word| starts_uppercase(word) && chain.contains(word))
	{
		return Ok(word.clone());
	}

	if let Some(word) = relevant.iter().find(|word| chain.contains(word)) {
		return Ok(word.clone());
	}

	let pool = chain.start_words();
	if pool.is_empty() {
		return Err("start-word pool is empty and the prompt matched no known word".to_owned());
	}
	Ok(pool[rng.pick_index(pool.len())].clone())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::random::ScriptedRandom;

	#[test]
	fn substring_matches_survive_a_negative_rescale() {
		let mut chain = WordChain::new();
		chain.train("Moon cat Moon dog");
		// "Moon" occurs 3 times, so 1 + ln(1/3) < 0

		let ranked = ranked_words(&chain, "moon");
		assert_eq!(ranked.len(), 1);
		assert_eq!(ranked[0].0, "Moon");
		assert!(ranked[0].1 < 0.0);
	}

	#[test]
	fn letter_overlap_scores_by_distinct_characters() {
		let mut chain = WordChain::new();
		chain.train("bat cat bat");

		let ranked = ranked_words(&chain, "tab");
		let words: Vec<&str> = ranked.iter().map(|(word, _)| word.as_str()).collect();
		// "bat" shares all 3 letters with "tab", "cat" only 2 of 3
		assert_eq!(words, ["bat", "cat"]);
		assert!(ranked[0].1 > ranked[1].1);
	}

	#[test]
	fn rare_words_outrank_frequent_ones() {
		let mut chain = WordChain::new();
		chain.add_pair("sunrise", "a");
		chain.add_pair("sunset", "b");
		chain.add_pair("sunset", "c");
		chain.add_pair("sunset", "d");

		let ranked = ranked_words(&chain, "sun");
		let words: Vec<&str> = ranked.iter().map(|(word, _)| word.as_str()).collect();
		assert_eq!(words, ["sunrise", "sunset"]);
		// Both matched the substring; only the frequent one went negative
		assert!(ranked[0].1 > 0.0);
		assert!(ranked[1].1 < 0.0);
	}

	#[test]
	fn equal_scores_keep_insertion_order() {
		let mut chain = WordChain::new();
		chain.add_pair("abc", "x");
		chain.add_pair("bca", "y");

		let ranked = ranked_words(&chain, "cab");
		let words: Vec<&str> = ranked.iter().map(|(word, _)| word.as_str()).collect();
		assert_eq!(words, ["abc", "bca"]);
		assert_eq!(ranked[0].1, ranked[1].1);
	}

	#[test]
	fn scores_are_descending() {
		let mut chain = WordChain::new();
		chain.train("Moonlight moons the moody moor. A monsoon moans on.");

		let ranked = ranked_words(&chain, "moon night");
		assert!(!ranked.is_empty());
		for pair in ranked.windows(2) {
			assert!(pair[0].1 >= pair[1].1);
		}
	}

	#[test]
	fn unrelated_prompt_yields_no_relevant_words() {
		let mut chain = WordChain::new();
		chain.train("The cat sat. The dog ran.");

		assert!(relevant_words(&chain, "zzz").is_empty());
		assert!(relevant_words(&chain, "").is_empty());
		// Tokens that strip to nothing count for nothing
		assert!(relevant_words(&chain, "... !!!").is_empty());
	}

	#[test]
	fn start_word_prefers_a_capitalized_relevant_key() {
		let mut chain = WordChain::new();
		chain.train("silver Moon shines moon falls");

		let mut rng = ScriptedRandom::new(&[0.0]);
		assert_eq!(start_word(&chain, &relevant_words(&chain, "moon"), &mut rng).unwrap(), "Moon");
	}

	#[test]
	fn start_word_falls_back_to_any_relevant_key() {
		let mut chain = WordChain::new();
		chain.train("silver moon shines moon falls");

		let mut rng = ScriptedRandom::new(&[0.0]);
		assert_eq!(start_word(&chain, &relevant_words(&chain, "shine"), &mut rng).unwrap(), "shines");
	}

	#[test]
	fn start_word_falls_back_to_the_pool() {
		let mut chain = WordChain::new();
		chain.train("The cat sat. The dog ran.");

		let mut rng = ScriptedRandom::new(&[0.5]);
		let word = start_word(&chain, &relevant_words(&chain, "zzz"), &mut rng).unwrap();
		assert_eq!(word, "The");
	}

	#[test]
	fn start_word_fails_without_pool_or_relevant_candidates() {
		let mut chain = WordChain::new();
		chain.train("alpha beta gamma");

		let mut rng = ScriptedRandom::new(&[0.5]);
		assert!(start_word(&chain, &relevant_words(&chain, "zzz"), &mut rng).is_err());
	}
}
