use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random source feeding every stochastic decision in generation.
///
/// The line-count draw, the start-word fallback, the walk biasing and the
/// candidate picks all derive from `next`, so swapping the source for a
/// seeded or scripted one makes a full generation deterministic.
///
/// # Invariants
/// - `next` returns values in `[0.0, 1.0)`
pub trait RandomSource {
	/// Returns the next value in `[0.0, 1.0)`.
	fn next(&mut self) -> f64;

	/// Uniform index into a collection of `len` elements.
	///
	/// `len` must be greater than 0; callers guard for emptiness first.
	fn pick_index(&mut self, len: usize) -> usize {
		(self.next() * len as f64) as usize
	}

	/// Uniform integer in `[min, max]`, both bounds inclusive.
	fn int_between(&mut self, min: usize, max: usize) -> usize {
		min + (self.next() * (max - min + 1) as f64) as usize
	}

	/// True with the given probability.
	fn chance(&mut self, probability: f64) -> bool {
		self.next() < probability
	}
}

/// Default source backed by the thread-local generator.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
	fn next(&mut self) -> f64 {
		rand::rng().random()
	}
}

/// Seeded source for reproducible generation.
pub struct SeededRandom(StdRng);

impl SeededRandom {
	pub fn new(seed: u64) -> Self {
		Self(StdRng::seed_from_u64(seed))
	}
}

impl RandomSource for SeededRandom {
	fn next(&mut self) -> f64 {
		self.0.random()
	}
}

/// Test double replaying a fixed value sequence, cycling when exhausted.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
	values: Vec<f64>,
	cursor: usize,
}

#[cfg(test)]
impl ScriptedRandom {
	pub(crate) fn new(values: &[f64]) -> Self {
		Self { values: values.to_vec(), cursor: 0 }
	}
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
	fn next(&mut self) -> f64 {
		let value = self.values[self.cursor % self.values.len()];
		self.cursor += 1;
		value
	}
}
