//! Field configuration: one parameterized record instead of per-section
//! copies of the animation code.
//!
//! Each visual variant used by the site is a named preset constructor on
//! [`FieldConfig`], in the same spirit as a visual theme: sections pick a
//! preset and hand it to the canvas component unchanged.

use super::color::Color;

/// How points behave when they cross a canvas edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
	/// Reflect the crossing axis's velocity. Position is not clamped, so a
	/// point may overshoot by at most one frame's velocity.
	Bounce,
	/// Teleport the crossing axis to the opposite edge in the same frame.
	Wrap,
}

/// Closed-open numeric interval used for random attribute draws.
#[derive(Clone, Copy, Debug)]
pub struct Span {
	pub min: f64,
	pub max: f64,
}

impl Span {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}
}

/// How point velocities are assigned at creation.
#[derive(Clone, Copy, Debug)]
pub enum Motion {
	/// Both components uniform in `±half_speed`.
	Drift { half_speed: f64 },
	/// Straight down at a speed drawn from `speed`; used by the starfall
	/// variant together with trails.
	Fall { speed: Span },
}

/// Point count derived from viewport width.
#[derive(Clone, Copy, Debug)]
pub enum CountProfile {
	/// Same count at every viewport size.
	Fixed(usize),
	/// `viewport / divisor`, capped, then scaled by `mid_factor` between
	/// the narrow and wide breakpoints and by `narrow_factor` below the
	/// narrow one. A narrow factor of zero disables the field on narrow
	/// viewports entirely.
	Scaled {
		divisor: f64,
		cap: usize,
		mid_factor: f64,
		narrow_factor: f64,
	},
}

/// Viewport width below which the narrow (mobile) parameters apply.
pub const NARROW_VIEWPORT: f64 = 768.0;

/// Viewport width at which mid-width (tablet) count scaling stops.
pub const WIDE_VIEWPORT: f64 = 1024.0;

impl CountProfile {
	/// Resolve the point count for a viewport width.
	pub fn resolve(&self, viewport_width: f64) -> usize {
		match *self {
			CountProfile::Fixed(n) => n,
			CountProfile::Scaled {
				divisor,
				cap,
				mid_factor,
				narrow_factor,
			} => {
				let base = ((viewport_width / divisor).floor() as usize).min(cap);
				let factor = if viewport_width < NARROW_VIEWPORT {
					narrow_factor
				} else if viewport_width < WIDE_VIEWPORT {
					mid_factor
				} else {
					1.0
				};
				(base as f64 * factor).floor() as usize
			}
		}
	}
}

/// How each point is filled.
#[derive(Clone, Debug)]
pub enum PointColor {
	/// One of a fixed set of colors, chosen per point at creation and drawn
	/// at the point's opacity.
	Palette(Vec<Color>),
	/// Random soft RGBA noise: red/green in `[155, 255)`, blue in
	/// `[0, 255)`, alpha from the opacity span. Gives the hero drift field
	/// its faint blue-white shimmer.
	SoftNoise,
	/// Two-stop radial gradient from `inner` (at the point's opacity) to
	/// `outer` (at half of it).
	RadialPair { inner: Color, outer: Color },
	/// Per-point hue drawn from `hue`, rendered as an hsla glow gradient
	/// fading to transparent at `glow_radius_factor × size`.
	HueGlow {
		hue: Span,
		glow_radius_factor: f64,
	},
	/// Flat white at the point's opacity (stars).
	Flat(Color),
}

/// Size oscillation driven by a per-point phase accumulator.
#[derive(Clone, Copy, Debug)]
pub struct PulseStyle {
	/// Fraction of the base size the oscillation adds/removes.
	pub amplitude: f64,
	/// Per-frame phase increment, drawn per point.
	pub phase_speed: Span,
}

/// Decaying trail of past positions behind a falling star.
#[derive(Clone, Copy, Debug)]
pub struct TrailStyle {
	/// Chance per frame of snapshotting the current position into the tail.
	pub spawn_chance: f64,
	/// Fraction of the star's opacity a new tail segment starts at.
	pub inherit: f64,
	/// Per-frame opacity decrement applied to every tail segment.
	pub segment_fade: f64,
	/// Per-frame opacity decrement applied to the star itself.
	pub star_fade: f64,
	/// Tail segment radius as a fraction of the star's size.
	pub size_ratio: f64,
}

/// Pairwise connection lines with linear distance falloff.
#[derive(Clone, Debug)]
pub struct ConnectionStyle {
	/// Maximum distance at which a line is drawn.
	pub max_distance: f64,
	/// Alpha at zero distance; decays linearly to zero at `max_distance`.
	pub base_alpha: f64,
	/// Stroke width at zero distance.
	pub line_width: f64,
	/// Scale the stroke width by the same linear falloff as the alpha.
	pub taper_width: bool,
	/// Stroke with a linear gradient between the endpoints' hues instead of
	/// a flat color. Only meaningful with [`PointColor::HueGlow`].
	pub hue_gradient: bool,
	/// Flat stroke color when `hue_gradient` is off.
	pub color: Color,
}

/// Static dot grid drawn behind the points.
#[derive(Clone, Copy, Debug)]
pub struct GridStyle {
	pub pitch: f64,
	pub narrow_pitch: f64,
	pub dot_radius: f64,
	pub narrow_dot_radius: f64,
	pub color: Color,
}

/// Complete configuration for one particle field.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	pub count: CountProfile,
	pub motion: Motion,
	pub size: Span,
	pub opacity: Span,
	pub boundary: BoundaryPolicy,
	pub color: PointColor,
	pub pulse: Option<PulseStyle>,
	pub trails: Option<TrailStyle>,
	pub connection: Option<ConnectionStyle>,
	pub grid: Option<GridStyle>,
}

impl FieldConfig {
	/// Slow wrap-around drift of faint blue-white specks (hero backdrop).
	pub fn drift() -> Self {
		Self {
			count: CountProfile::Scaled {
				divisor: 15.0,
				cap: 80,
				mid_factor: 1.0,
				narrow_factor: 0.5,
			},
			motion: Motion::Drift { half_speed: 0.15 },
			size: Span::new(0.5, 2.5),
			opacity: Span::new(0.1, 0.3),
			boundary: BoundaryPolicy::Wrap,
			color: PointColor::SoftNoise,
			pulse: None,
			trails: None,
			connection: None,
			grid: None,
		}
	}

	/// Falling stars with decaying tails (hero foreground). Thinned on
	/// mid-width viewports, disabled on narrow ones.
	pub fn starfall() -> Self {
		Self {
			count: CountProfile::Scaled {
				divisor: 10.0,
				cap: 50,
				mid_factor: 0.7,
				narrow_factor: 0.0,
			},
			motion: Motion::Fall {
				speed: Span::new(0.5, 2.5),
			},
			size: Span::new(0.5, 2.0),
			opacity: Span::new(0.0, 1.0),
			boundary: BoundaryPolicy::Wrap,
			color: PointColor::Flat(Color::rgb(255, 255, 255)),
			pulse: None,
			trails: Some(TrailStyle {
				spawn_chance: 0.5,
				inherit: 0.8,
				segment_fade: 0.02,
				star_fade: 0.005,
				size_ratio: 0.7,
			}),
			connection: None,
			grid: None,
		}
	}

	/// Bouncing blue/purple particles over a faint dot grid, joined by
	/// short connection lines (about section).
	pub fn constellation() -> Self {
		Self {
			count: CountProfile::Fixed(50),
			motion: Motion::Drift { half_speed: 0.15 },
			size: Span::new(0.5, 2.5),
			opacity: Span::new(0.2, 0.7),
			boundary: BoundaryPolicy::Bounce,
			color: PointColor::Palette(vec![
				Color::rgb(59, 130, 246),
				Color::rgb(139, 92, 246),
			]),
			pulse: None,
			trails: None,
			connection: Some(ConnectionStyle {
				max_distance: 100.0,
				base_alpha: 0.1,
				line_width: 0.3,
				taper_width: false,
				hue_gradient: false,
				color: Color::rgb(96, 165, 250),
			}),
			grid: Some(GridStyle {
				pitch: 40.0,
				narrow_pitch: 25.0,
				dot_radius: 1.0,
				narrow_dot_radius: 0.8,
				color: Color::rgba(59, 130, 246, 0.15),
			}),
		}
	}

	/// Bouncing gradient-filled particles with a longer connection reach
	/// (skills section).
	pub fn weave() -> Self {
		Self {
			count: CountProfile::Fixed(70),
			motion: Motion::Drift { half_speed: 0.2 },
			size: Span::new(0.5, 2.5),
			opacity: Span::new(0.3, 0.8),
			boundary: BoundaryPolicy::Bounce,
			color: PointColor::RadialPair {
				inner: Color::rgb(139, 92, 246),
				outer: Color::rgb(59, 130, 246),
			},
			pulse: None,
			trails: None,
			connection: Some(ConnectionStyle {
				max_distance: 120.0,
				base_alpha: 0.12,
				line_width: 0.3,
				taper_width: false,
				hue_gradient: false,
				color: Color::rgb(96, 165, 250),
			}),
			grid: None,
		}
	}

	/// Pulsing wrap-around network of glowing blue-purple nodes with
	/// hue-gradient connections (contact and projects sections).
	pub fn network() -> Self {
		Self {
			count: CountProfile::Scaled {
				divisor: 1.0,
				cap: 70,
				mid_factor: 1.0,
				narrow_factor: 40.0 / 70.0,
			},
			motion: Motion::Drift { half_speed: 0.2 },
			size: Span::new(1.0, 3.0),
			opacity: Span::new(0.6, 0.9),
			boundary: BoundaryPolicy::Wrap,
			color: PointColor::HueGlow {
				hue: Span::new(200.0, 240.0),
				glow_radius_factor: 2.0,
			},
			pulse: Some(PulseStyle {
				amplitude: 0.3,
				phase_speed: Span::new(0.02, 0.06),
			}),
			trails: None,
			connection: Some(ConnectionStyle {
				max_distance: 150.0,
				base_alpha: 0.15,
				line_width: 1.0,
				taper_width: true,
				hue_gradient: true,
				color: Color::rgb(96, 165, 250),
			}),
			grid: None,
		}
	}
}

/// Connection strength for a pair at `distance`: `1 − d/max` when within
/// reach, `None` otherwise. Symmetric in its inputs by construction.
pub fn connection_strength(distance: f64, max_distance: f64) -> Option<f64> {
	if distance < max_distance {
		Some(1.0 - distance / max_distance)
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fixed_count_ignores_viewport() {
		let c = CountProfile::Fixed(50);
		assert_eq!(c.resolve(320.0), 50);
		assert_eq!(c.resolve(1920.0), 50);
	}

	#[test]
	fn scaled_count_caps_and_shrinks_on_narrow() {
		let c = CountProfile::Scaled {
			divisor: 15.0,
			cap: 80,
			mid_factor: 1.0,
			narrow_factor: 0.5,
		};
		assert_eq!(c.resolve(1920.0), 80); // 128 capped to 80
		assert_eq!(c.resolve(900.0), 60);
		assert_eq!(c.resolve(600.0), 20); // 40 halved
	}

	#[test]
	fn zero_narrow_factor_disables_field() {
		let c = CountProfile::Scaled {
			divisor: 10.0,
			cap: 50,
			mid_factor: 1.0,
			narrow_factor: 0.0,
		};
		assert_eq!(c.resolve(500.0), 0);
		assert_eq!(c.resolve(1200.0), 50);
	}

	#[test]
	fn starfall_count_thins_per_viewport_tier() {
		let c = FieldConfig::starfall().count;
		assert_eq!(c.resolve(1200.0), 50);
		assert_eq!(c.resolve(800.0), 35); // 50 scaled by 0.7
		assert_eq!(c.resolve(500.0), 0);
	}

	#[test]
	fn bounce_presets_use_fixed_counts() {
		assert_eq!(FieldConfig::constellation().count.resolve(320.0), 50);
		assert_eq!(FieldConfig::weave().count.resolve(320.0), 70);
		assert_eq!(FieldConfig::weave().count.resolve(1920.0), 70);
	}

	#[test]
	fn strength_decays_linearly_to_threshold() {
		let s = connection_strength(90.0, 100.0).unwrap();
		assert!((s - 0.1).abs() < 1e-9);
		assert_eq!(connection_strength(150.0, 100.0), None);
		assert_eq!(connection_strength(100.0, 100.0), None);
		assert!((connection_strength(0.0, 100.0).unwrap() - 1.0).abs() < 1e-9);
	}

	#[test]
	fn strength_is_commutative_over_pair_order() {
		let (x1, y1, x2, y2) = (12.5_f64, 40.0_f64, 80.0_f64, 9.75_f64);
		let d_ij = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
		let d_ji = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
		assert_eq!(
			connection_strength(d_ij, 120.0),
			connection_strength(d_ji, 120.0)
		);
	}

	#[test]
	fn network_preset_count_matches_breakpoints() {
		let c = FieldConfig::network().count;
		assert_eq!(c.resolve(1440.0), 70);
		assert_eq!(c.resolve(500.0), 40);
	}
}
