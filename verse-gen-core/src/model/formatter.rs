/// True for characters that end a sentence.
fn is_sentence_punct(c: char) -> bool {
	matches!(c, '.' | '!' | '?')
}

/// True when a word ends in sentence punctuation.
fn ends_sentence(word: &str) -> bool {
	word.chars().next_back().is_some_and(is_sentence_punct)
}

/// Splits text on sentence-ending punctuation runs followed by whitespace.
///
/// The punctuation run is kept as a segment of its own; whitespace-only
/// segments are dropped. A run at the very end of the text (no trailing
/// whitespace) stays attached to its sentence.
fn split_sentences(text: &str) -> Vec<&str> {
	let chars: Vec<(usize, char)> = text.char_indices().collect();
	let mut segments = Vec::new();
	let mut segment_start = 0;
	let mut i = 0;

	while i < chars.len() {
		let (offset, c) = chars[i];
		if !is_sentence_punct(c) {
			i += 1;
			continue;
		}

		// Extend over the whole punctuation run
		let mut j = i + 1;
		while j < chars.len() && is_sentence_punct(chars[j].1) {
			j += 1;
		}

		// Only a run followed by whitespace splits the text
		if j < chars.len() && chars[j].1.is_whitespace() {
			let run_end = chars[j].0;
			if !text[segment_start..offset].trim().is_empty() {
				segments.push(&text[segment_start..offset]);
			}
			segments.push(&text[offset..run_end]);
			segment_start = run_end;
		}
		i = j;
	}

	if !text[segment_start..].trim().is_empty() {
		segments.push(&text[segment_start..]);
	}
	segments
}

/// Packs a flat word sequence into short display lines.
///
/// Words accumulate into a line buffer that is flushed once it holds 8
/// words or the last pushed word ends a sentence; whatever remains is
/// flushed as the final line. Lines are joined with `\n`.
pub fn format(text: &str) -> String {
	let mut lines: Vec<String> = Vec::new();
	let mut current_line: Vec<&str> = Vec::new();

	for segment in split_sentences(text) {
		for word in segment.split_whitespace() {
			current_line.push(word);

			if current_line.len() >= 8 || ends_sentence(word) {
				lines.push(current_line.join(" "));
				current_line.clear();
			}
		}
	}

	if !current_line.is_empty() {
		lines.push(current_line.join(" "));
	}

	lines.join("\n")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wraps_after_eight_words() {
		let text = "one two three four five six seven eight nine ten";
		assert_eq!(
			format(text),
			"one two three four five six seven eight\nnine ten"
		);
	}

	#[test]
	fn breaks_on_sentence_punctuation() {
		// The mid-text period is detached from its word by the sentence
		// split, so it lands as a word of its own
		assert_eq!(format("one two. three"), "one two .\nthree");
	}

	#[test]
	fn keeps_a_final_punctuation_run_attached() {
		assert_eq!(format("so it ends."), "so it ends.");
	}

	#[test]
	fn splits_on_repeated_punctuation_runs() {
		assert_eq!(format("what?! now then"), "what ?!\nnow then");
	}

	#[test]
	fn formats_a_walk_joined_sequence() {
		assert_eq!(
			format("The cat sat. The cat sat. The cat sat."),
			"The cat sat .\nThe cat sat .\nThe cat sat."
		);
	}

	#[test]
	fn empty_input_formats_to_nothing() {
		assert_eq!(format(""), "");
	}
}
