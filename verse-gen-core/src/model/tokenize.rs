/// Splits raw text into word tokens.
///
/// Splits on runs of whitespace and drops empty results. Tokens keep their
/// case and punctuation: `"The"` and `"sat."` are distinct vocabulary
/// entries. Pure and deterministic, same input always gives same output.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}

/// Normalizes a prompt into query tokens.
///
/// The prompt is lowercased, split on whitespace, filtered to tokens longer
/// than 2 characters, then stripped of every character that is not
/// alphanumeric or `_`.
///
/// # Notes
/// - Stripping happens after the length filter, so a token made only of
///   punctuation (`"..."`) passes the filter and becomes the empty string.
///   Empty tokens are kept; scoring treats them as contributing nothing,
///   which is what lets an all-punctuation prompt degenerate to
///   "no relevant words".
pub(crate) fn prompt_tokens(prompt: &str) -> Vec<String> {
	prompt
		.to_lowercase()
		.split_whitespace()
		.filter(|word| word.chars().count() > 2)
		.map(|word| {
			word.chars()
				.filter(|c| c.is_alphanumeric() || *c == '_')
				.collect()
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_on_whitespace_runs() {
		assert_eq!(tokenize("The  cat\n sat."), ["The", "cat", "sat."]);
	}

	#[test]
	fn drops_empty_results() {
		assert_eq!(tokenize("   \n\t  "), Vec::<String>::new());
		assert_eq!(tokenize(""), Vec::<String>::new());
	}

	#[test]
	fn is_idempotent() {
		let text = "A  raven, perched.  Alone!";
		assert_eq!(tokenize(text), tokenize(text));
		assert_eq!(prompt_tokens(text), prompt_tokens(text));
	}

	#[test]
	fn prompt_tokens_are_lowercased_filtered_and_stripped() {
		assert_eq!(
			prompt_tokens("The Moon, a star; up!"),
			["the", "moon", "star"]
		);
	}

	#[test]
	fn short_prompt_words_are_dropped_before_stripping() {
		// "a" and "up" fail the length filter; "it," passes (4 chars) and
		// is then stripped
		assert_eq!(prompt_tokens("a up it,"), ["it"]);
	}

	#[test]
	fn punctuation_only_prompt_words_become_empty_tokens() {
		assert_eq!(prompt_tokens("... !!? ok"), ["", ""]);
	}

	#[test]
	fn underscores_and_digits_survive_stripping() {
		assert_eq!(prompt_tokens("snake_case 4ever!"), ["snake_case", "4ever"]);
	}
}
