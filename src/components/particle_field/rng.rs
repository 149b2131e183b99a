//! Deterministic pseudo-random stream for point initialization.
//!
//! A tiny sin-hash generator rather than a real RNG crate: the fields only
//! need visual scatter, and a deterministic stream keeps initialization
//! reproducible in native tests.

/// Stateful pseudo-random number stream.
#[derive(Clone, Debug)]
pub struct Rand {
	state: f64,
}

impl Rand {
	/// Create a stream from an integer seed. Equal seeds produce equal streams.
	pub fn new(seed: u32) -> Self {
		Self {
			state: seed as f64 + 0.5,
		}
	}

	/// Next value in `[0, 1)`.
	pub fn next(&mut self) -> f64 {
		self.state += 1.0;
		let x = (self.state * 12.9898 + self.state * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	/// Next value in `[min, max)`.
	pub fn range(&mut self, min: f64, max: f64) -> f64 {
		min + self.next() * (max - min)
	}

	/// Next value in a symmetric range `[-half, half)`.
	pub fn symmetric(&mut self, half: f64) -> f64 {
		(self.next() - 0.5) * 2.0 * half
	}

	/// True with probability `p`.
	pub fn chance(&mut self, p: f64) -> bool {
		self.next() < p
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn values_stay_in_unit_interval() {
		let mut rng = Rand::new(7);
		for _ in 0..1000 {
			let v = rng.next();
			assert!((0.0..1.0).contains(&v), "out of range: {v}");
		}
	}

	#[test]
	fn stream_is_deterministic_per_seed() {
		let mut a = Rand::new(42);
		let mut b = Rand::new(42);
		for _ in 0..100 {
			assert_eq!(a.next(), b.next());
		}
	}

	#[test]
	fn different_seeds_diverge() {
		let mut a = Rand::new(1);
		let mut b = Rand::new(2);
		let same = (0..100).filter(|_| a.next() == b.next()).count();
		assert!(same < 100);
	}

	#[test]
	fn range_respects_bounds() {
		let mut rng = Rand::new(3);
		for _ in 0..500 {
			let v = rng.range(-0.2, 0.2);
			assert!((-0.2..0.2).contains(&v));
		}
	}

	#[test]
	fn symmetric_covers_both_signs() {
		let mut rng = Rand::new(9);
		let vals: Vec<f64> = (0..200).map(|_| rng.symmetric(0.3)).collect();
		assert!(vals.iter().any(|v| *v > 0.0));
		assert!(vals.iter().any(|v| *v < 0.0));
		assert!(vals.iter().all(|v| v.abs() < 0.3));
	}
}
