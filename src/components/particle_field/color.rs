//! Color helpers for the particle fields.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Scale the alpha channel, clamping the result to `[0, 1]`.
	pub fn fade(self, factor: f64) -> Self {
		Self {
			a: (self.a * factor).clamp(0.0, 1.0),
			..self
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Format an `hsla()` css string at the saturation/lightness the glow
/// variants use throughout.
pub fn hsla(hue: f64, alpha: f64) -> String {
	format!("hsla({}, 80%, 60%, {})", hue, alpha.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_format_as_hex() {
		assert_eq!(Color::rgb(59, 130, 246).to_css(), "#3b82f6");
	}

	#[test]
	fn translucent_colors_format_as_rgba() {
		assert_eq!(
			Color::rgba(96, 165, 250, 0.5).to_css(),
			"rgba(96, 165, 250, 0.5)"
		);
	}

	#[test]
	fn fade_clamps_to_unit_interval() {
		let c = Color::rgba(0, 0, 0, 0.8);
		assert_eq!(c.fade(2.0).a, 1.0);
		assert_eq!(c.fade(-1.0).a, 0.0);
		assert!((c.fade(0.5).a - 0.4).abs() < 1e-9);
	}

	#[test]
	fn hsla_clamps_alpha() {
		assert_eq!(hsla(220.0, 1.5), "hsla(220, 80%, 60%, 1)");
		assert_eq!(hsla(220.0, -0.1), "hsla(220, 80%, 60%, 0)");
	}
}
