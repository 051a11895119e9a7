/// Line-count bounds for one generation request.
///
/// `GenerationInput` fixes how many lines a generated poem targets: a base
/// range drawn per prompt word and a hard ceiling on the total.
///
/// # Invariants
/// - `min_lines_per_word >= 1`
/// - `max_lines_per_word >= min_lines_per_word`
/// - `max_total_lines >= 1`
#[derive(Clone, Copy, Debug)]
pub struct GenerationInput {
	/// Lower bound of the random base line count.
	min_lines_per_word: usize,

	/// Upper bound of the random base line count.
	max_lines_per_word: usize,

	/// Hard ceiling on the number of output lines.
	max_total_lines: usize,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			min_lines_per_word: 3,
			max_lines_per_word: 5,
			max_total_lines: 20,
		}
	}
}

impl GenerationInput {
	/// Creates validated bounds.
	///
	/// # Errors
	/// Returns an error if any invariant is violated.
	pub fn new(
		min_lines_per_word: usize,
		max_lines_per_word: usize,
		max_total_lines: usize,
	) -> Result<Self, String> {
		let mut input = Self::default();
		input.set_lines_per_word(min_lines_per_word, max_lines_per_word)?;
		input.set_max_total_lines(max_total_lines)?;
		Ok(input)
	}

	/// Lower bound of the random base line count.
	pub fn min_lines_per_word(&self) -> usize {
		self.min_lines_per_word
	}

	/// Upper bound of the random base line count.
	pub fn max_lines_per_word(&self) -> usize {
		self.max_lines_per_word
	}

	/// Hard ceiling on the number of output lines.
	pub fn max_total_lines(&self) -> usize {
		self.max_total_lines
	}

	/// Sets the per-prompt-word line range.
	///
	/// # Errors
	/// Returns an error if `min` is 0 or `max` is below `min`.
	pub fn set_lines_per_word(&mut self, min: usize, max: usize) -> Result<(), String> {
		if min < 1 {
			return Err("min_lines_per_word must be at least 1".to_owned());
		}
		if max < min {
			return Err("max_lines_per_word must not be below min_lines_per_word".to_owned());
		}
		self.min_lines_per_word = min;
		self.max_lines_per_word = max;
		Ok(())
	}

	/// Sets the output line ceiling.
	///
	/// # Errors
	/// Returns an error if `max_total_lines` is 0.
	pub fn set_max_total_lines(&mut self, max_total_lines: usize) -> Result<(), String> {
		if max_total_lines < 1 {
			return Err("max_total_lines must be at least 1".to_owned());
		}
		self.max_total_lines = max_total_lines;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_documented_bounds() {
		let input = GenerationInput::default();
		assert_eq!(input.min_lines_per_word(), 3);
		assert_eq!(input.max_lines_per_word(), 5);
		assert_eq!(input.max_total_lines(), 20);
	}

	#[test]
	fn accepts_valid_bounds() {
		let input = GenerationInput::new(1, 1, 4).unwrap();
		assert_eq!(input.min_lines_per_word(), 1);
		assert_eq!(input.max_lines_per_word(), 1);
		assert_eq!(input.max_total_lines(), 4);
	}

	#[test]
	fn rejects_invalid_bounds() {
		assert!(GenerationInput::new(0, 5, 20).is_err());
		assert!(GenerationInput::new(4, 2, 20).is_err());
		assert!(GenerationInput::new(3, 5, 0).is_err());

		let mut input = GenerationInput::default();
		assert!(input.set_lines_per_word(2, 1).is_err());
		assert!(input.set_max_total_lines(0).is_err());
		// Failed setters leave the previous bounds in place
		assert_eq!(input.min_lines_per_word(), 3);
		assert_eq!(input.max_total_lines(), 20);
	}
}
