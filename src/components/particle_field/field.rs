//! Point store and per-frame stepper for a particle field.
//!
//! The field owns the mutable point array. It is created whenever the
//! canvas first measures a non-zero extent, fully rebuilt (never rescaled)
//! on resize, and mutated once per frame by [`PointField::step`]. Rendering
//! reads it and never writes.

use super::color::Color;
use super::config::{BoundaryPolicy, FieldConfig, Motion, NARROW_VIEWPORT, PointColor};
use super::rng::Rand;

/// A past position of a falling star, fading independently.
#[derive(Clone, Copy, Debug)]
pub struct TailSegment {
	pub x: f64,
	pub y: f64,
	pub opacity: f64,
}

/// A single animated point.
#[derive(Clone, Debug)]
pub struct Point {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub opacity: f64,
	/// Resolved fill for palette/noise/flat color modes.
	pub tint: Color,
	/// Hue in degrees, used by the glow color mode.
	pub hue: f64,
	/// Phase accumulator for size pulsing.
	pub phase: f64,
	pub phase_speed: f64,
	pub tail: Vec<TailSegment>,
}

impl Point {
	/// Size after applying the pulse oscillation, if the field pulses.
	pub fn current_size(&self, config: &FieldConfig) -> f64 {
		match config.pulse {
			Some(pulse) => self.size * (1.0 + pulse.amplitude * self.phase.sin()),
			None => self.size,
		}
	}
}

/// Mutable state of one canvas's particle field.
pub struct PointField {
	pub points: Vec<Point>,
	config: FieldConfig,
	width: f64,
	height: f64,
	viewport_width: f64,
	rng: Rand,
}

impl PointField {
	/// Build a field for the given canvas extent. `viewport_width` drives
	/// the point count and the narrow-viewport grid parameters.
	pub fn new(
		config: FieldConfig,
		width: f64,
		height: f64,
		viewport_width: f64,
		seed: u32,
	) -> Self {
		let mut field = Self {
			points: Vec::new(),
			config,
			width,
			height,
			viewport_width,
			rng: Rand::new(seed),
		};
		field.populate();
		field
	}

	/// Replace the whole point set for a new extent. Points are rebuilt
	/// rather than rescaled so velocity fields stay undistorted after
	/// aspect-ratio changes.
	pub fn resize(&mut self, width: f64, height: f64, viewport_width: f64) {
		self.width = width;
		self.height = height;
		self.viewport_width = viewport_width;
		self.populate();
	}

	fn populate(&mut self) {
		let count = self.config.count.resolve(self.viewport_width);
		log::debug!(
			"particle field: {} points for {}x{} canvas",
			count,
			self.width,
			self.height
		);
		self.points.clear();
		for _ in 0..count {
			let p = spawn(&self.config, &mut self.rng, self.width, self.height, false);
			self.points.push(p);
		}
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn extent(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Whether the narrow-viewport visual parameters apply.
	pub fn is_narrow(&self) -> bool {
		self.viewport_width < NARROW_VIEWPORT
	}

	/// Advance every point by one frame: move, apply the boundary policy,
	/// advance pulse phases, and age trails.
	///
	/// Trail-bearing fields skip the generic boundary policy: their bottom
	/// edge is handled by respawning the star at the top with fresh random
	/// attributes, triggered by either leaving the canvas or fading out.
	pub fn step(&mut self) {
		let (w, h) = (self.width, self.height);
		let config = &self.config;
		let rng = &mut self.rng;

		for p in &mut self.points {
			p.x += p.vx;
			p.y += p.vy;

			if config.trails.is_none() {
				match config.boundary {
					BoundaryPolicy::Bounce => {
						if p.x < 0.0 || p.x > w {
							p.vx = -p.vx;
						}
						if p.y < 0.0 || p.y > h {
							p.vy = -p.vy;
						}
					}
					BoundaryPolicy::Wrap => {
						if p.x > w {
							p.x = 0.0;
						} else if p.x < 0.0 {
							p.x = w;
						}
						if p.y > h {
							p.y = 0.0;
						} else if p.y < 0.0 {
							p.y = h;
						}
					}
				}
			}

			if config.pulse.is_some() {
				p.phase += p.phase_speed;
			}

			if let Some(trail) = config.trails {
				p.opacity -= trail.star_fade;

				for seg in &mut p.tail {
					seg.opacity -= trail.segment_fade;
				}
				p.tail.retain(|seg| seg.opacity > 0.0);

				if rng.chance(trail.spawn_chance) {
					p.tail.push(TailSegment {
						x: p.x,
						y: p.y,
						opacity: p.opacity * trail.inherit,
					});
				}

				if p.y > h || p.opacity <= 0.0 {
					*p = spawn(config, rng, w, h, true);
				}
			}
		}
	}
}

/// Create one point. `at_top` pins it to the top edge at full opacity,
/// used when respawning a faded or fallen star.
fn spawn(config: &FieldConfig, rng: &mut Rand, width: f64, height: f64, at_top: bool) -> Point {
	let x = rng.next() * width;
	let y = if at_top { 0.0 } else { rng.next() * height };

	let (vx, vy) = match config.motion {
		Motion::Drift { half_speed } => (rng.symmetric(half_speed), rng.symmetric(half_speed)),
		Motion::Fall { speed } => (0.0, rng.range(speed.min, speed.max)),
	};

	let size = rng.range(config.size.min, config.size.max);
	let opacity = if at_top {
		1.0
	} else {
		rng.range(config.opacity.min, config.opacity.max)
	};

	let (tint, hue) = match &config.color {
		PointColor::Palette(colors) => {
			let idx = (rng.next() * colors.len() as f64) as usize;
			let tint = colors
				.get(idx)
				.or_else(|| colors.last())
				.copied()
				.unwrap_or(Color::rgb(255, 255, 255));
			(tint, 0.0)
		}
		PointColor::SoftNoise => {
			let r = 155 + (rng.next() * 100.0) as u8;
			let g = 155 + (rng.next() * 100.0) as u8;
			let b = (rng.next() * 255.0) as u8;
			(Color::rgb(r, g, b), 0.0)
		}
		PointColor::HueGlow { hue, .. } => {
			(Color::rgb(255, 255, 255), rng.range(hue.min, hue.max))
		}
		PointColor::RadialPair { inner, .. } => (*inner, 0.0),
		PointColor::Flat(color) => (*color, 0.0),
	};

	let (phase, phase_speed) = match config.pulse {
		Some(pulse) => (
			rng.range(0.0, std::f64::consts::TAU),
			rng.range(pulse.phase_speed.min, pulse.phase_speed.max),
		),
		None => (0.0, 0.0),
	};

	Point {
		x,
		y,
		vx,
		vy,
		size,
		opacity,
		tint,
		hue,
		phase,
		phase_speed,
		tail: Vec::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::config::Span;

	fn field(config: FieldConfig, w: f64, h: f64) -> PointField {
		PointField::new(config, w, h, 1024.0, 1)
	}

	#[test]
	fn initial_points_respect_config_spans() {
		let f = field(FieldConfig::network(), 800.0, 600.0);
		assert_eq!(f.points.len(), 70);
		for p in &f.points {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((1.0..3.0).contains(&p.size));
			assert!((200.0..240.0).contains(&p.hue));
			assert!((0.0..std::f64::consts::TAU).contains(&p.phase));
			assert!((0.02..0.06).contains(&p.phase_speed));
		}
	}

	#[test]
	fn bounce_keeps_points_within_one_frame_overshoot() {
		let mut f = field(FieldConfig::constellation(), 800.0, 600.0);
		let eps = 0.15 + 1e-9;
		for _ in 0..2000 {
			f.step();
			for p in &f.points {
				assert!(p.x >= -eps && p.x <= 800.0 + eps, "x escaped: {}", p.x);
				assert!(p.y >= -eps && p.y <= 600.0 + eps, "y escaped: {}", p.y);
			}
		}
	}

	#[test]
	fn bounce_oscillates_at_the_edge() {
		let mut f = field(FieldConfig::constellation(), 800.0, 600.0);
		f.points[0].x = 799.8;
		f.points[0].y = 300.0;
		f.points[0].vx = 0.3;
		f.points[0].vy = 0.0;

		f.step();
		assert!((f.points[0].x - 800.1).abs() < 1e-9);
		assert!((f.points[0].vx + 0.3).abs() < 1e-9);

		f.step();
		assert!((f.points[0].x - 799.8).abs() < 1e-9);
		for _ in 0..100 {
			f.step();
			assert!(f.points[0].x <= 800.3);
		}
	}

	#[test]
	fn wrap_reinserts_at_opposite_edge_same_frame() {
		let mut f = field(FieldConfig::network(), 400.0, 300.0);
		f.points[0].x = 399.95;
		f.points[0].vx = 0.2;
		f.points[1].x = 0.05;
		f.points[1].vx = -0.2;
		f.points[2].y = 299.95;
		f.points[2].vy = 0.2;

		f.step();
		assert_eq!(f.points[0].x, 0.0);
		assert_eq!(f.points[1].x, 400.0);
		assert_eq!(f.points[2].y, 0.0);
	}

	#[test]
	fn pulse_phase_advances_and_modulates_size() {
		let mut f = field(FieldConfig::network(), 400.0, 300.0);
		let before = f.points[0].phase;
		let speed = f.points[0].phase_speed;
		f.step();
		assert!((f.points[0].phase - (before + speed)).abs() < 1e-9);

		f.points[0].phase = std::f64::consts::FRAC_PI_2;
		f.points[0].size = 2.0;
		let expected = 2.0 * (1.0 + 0.3);
		assert!((f.points[0].current_size(f.config()) - expected).abs() < 1e-9);
	}

	#[test]
	fn unpulsed_fields_report_base_size() {
		let f = field(FieldConfig::constellation(), 400.0, 300.0);
		let p = &f.points[0];
		assert_eq!(p.current_size(f.config()), p.size);
	}

	#[test]
	fn tail_segments_fade_monotonically_until_removed() {
		let mut f = PointField::new(FieldConfig::starfall(), 400.0, 300.0, 1024.0, 5);
		f.points.truncate(1);
		f.points[0].y = 10.0;
		f.points[0].opacity = 0.9;
		f.points[0].tail = vec![
			TailSegment {
				x: 1.0,
				y: 1.0,
				opacity: 0.5,
			},
			TailSegment {
				x: 2.0,
				y: 2.0,
				opacity: 0.03,
			},
		];

		f.step();
		let tail = &f.points[0].tail;
		// Old segments decayed by 0.02; at most one new snapshot appended.
		assert!((tail[0].opacity - 0.48).abs() < 1e-9);
		assert!((tail[1].opacity - 0.01).abs() < 1e-9);
		assert!(tail.len() <= 3);

		f.step();
		let tail = &f.points[0].tail;
		// The 0.01 segment crossed zero and was dropped.
		assert!((tail[0].opacity - 0.46).abs() < 1e-9);
		assert!(tail.iter().all(|seg| seg.opacity > 0.0));
	}

	#[test]
	fn star_respawns_at_top_after_leaving_canvas() {
		let mut f = PointField::new(FieldConfig::starfall(), 400.0, 300.0, 1024.0, 2);
		f.points[0].y = 301.0;
		f.points[0].tail.push(TailSegment {
			x: 0.0,
			y: 0.0,
			opacity: 0.5,
		});

		f.step();
		let p = &f.points[0];
		assert!(p.y <= 2.5, "respawn should pin to the top edge");
		assert_eq!(p.opacity, 1.0);
		assert!(p.tail.is_empty());
		assert!(p.vy >= 0.5 && p.vy < 2.5);
	}

	#[test]
	fn star_respawns_when_fully_faded() {
		let mut f = PointField::new(FieldConfig::starfall(), 400.0, 300.0, 1024.0, 3);
		f.points[0].y = 150.0;
		f.points[0].opacity = 0.004; // crosses zero after one frame's fade

		f.step();
		assert_eq!(f.points[0].opacity, 1.0);
	}

	#[test]
	fn star_opacity_decays_between_respawns() {
		let mut f = PointField::new(FieldConfig::starfall(), 400.0, 300.0, 1024.0, 4);
		f.points[0].y = 0.0;
		f.points[0].vy = 0.5;
		f.points[0].opacity = 0.8;
		let before = f.points[0].opacity;
		f.step();
		assert!((f.points[0].opacity - (before - 0.005)).abs() < 1e-9);
	}

	#[test]
	fn resize_rebuilds_the_same_distribution_parameters() {
		let mut f = field(FieldConfig::constellation(), 800.0, 600.0);
		f.resize(640.0, 480.0, 1024.0);
		let first_count = f.points.len();
		f.resize(640.0, 480.0, 1024.0);
		assert_eq!(f.points.len(), first_count);
		for p in &f.points {
			assert!((0.0..640.0).contains(&p.x));
			assert!((0.0..480.0).contains(&p.y));
			assert!((0.5..2.5).contains(&p.size));
			assert!((0.2..0.7).contains(&p.opacity));
		}
	}

	#[test]
	fn narrow_viewport_shrinks_scaled_fields() {
		let wide = PointField::new(FieldConfig::drift(), 800.0, 600.0, 1200.0, 1);
		let narrow = PointField::new(FieldConfig::drift(), 800.0, 600.0, 600.0, 1);
		assert_eq!(wide.points.len(), 80);
		assert_eq!(narrow.points.len(), 20);
		assert!(!wide.is_narrow());
		assert!(narrow.is_narrow());
	}

	#[test]
	fn starfall_is_disabled_on_narrow_viewports() {
		let f = PointField::new(FieldConfig::starfall(), 800.0, 600.0, 500.0, 1);
		assert!(f.points.is_empty());
	}

	#[test]
	fn palette_points_take_palette_tints() {
		let f = field(FieldConfig::constellation(), 800.0, 600.0);
		let blue = Color::rgb(59, 130, 246);
		let purple = Color::rgb(139, 92, 246);
		assert!(f.points.iter().all(|p| p.tint == blue || p.tint == purple));
		assert!(f.points.iter().any(|p| p.tint == blue));
		assert!(f.points.iter().any(|p| p.tint == purple));
	}

	#[test]
	fn drift_velocities_stay_in_half_speed_range() {
		let config = FieldConfig {
			motion: Motion::Drift { half_speed: 0.4 },
			size: Span::new(1.0, 2.0),
			..FieldConfig::drift()
		};
		let f = field(config, 800.0, 600.0);
		for p in &f.points {
			assert!(p.vx.abs() < 0.4);
			assert!(p.vy.abs() < 0.4);
			assert!((1.0..2.0).contains(&p.size));
		}
	}
}
