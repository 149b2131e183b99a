//! Canvas rendering for particle fields.
//!
//! Draws in z-order: dot grid, pairwise connection lines, then points
//! (tails before their star). Rendering is a pure read of the point store;
//! every frame reflects the state the stepper just produced. Gradient
//! creation failures fall back to flat fills so a decorative background
//! can never take the page down.

use std::f64::consts::PI;

use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::color::hsla;
use super::config::{ConnectionStyle, GridStyle, PointColor, connection_strength};
use super::field::{Point, PointField};

/// Paint one frame of the field.
pub fn render(field: &PointField, ctx: &CanvasRenderingContext2d) {
	let (w, h) = field.extent();
	ctx.clear_rect(0.0, 0.0, w, h);

	if let Some(grid) = &field.config().grid {
		draw_grid(field, ctx, grid);
	}
	if let Some(connection) = &field.config().connection {
		draw_connections(field, ctx, connection);
	}
	draw_points(field, ctx);
}

fn draw_grid(field: &PointField, ctx: &CanvasRenderingContext2d, grid: &GridStyle) {
	let (w, h) = field.extent();
	let (pitch, radius) = if field.is_narrow() {
		(grid.narrow_pitch, grid.narrow_dot_radius)
	} else {
		(grid.pitch, grid.dot_radius)
	};
	if pitch <= 0.0 {
		return;
	}

	ctx.set_fill_style_str(&grid.color.to_css());
	let mut x = 0.0;
	while x < w {
		let mut y = 0.0;
		while y < h {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius, 0.0, PI * 2.0);
			ctx.fill();
			y += pitch;
		}
		x += pitch;
	}
}

fn draw_connections(field: &PointField, ctx: &CanvasRenderingContext2d, style: &ConnectionStyle) {
	let points = &field.points;

	for i in 0..points.len() {
		for j in (i + 1)..points.len() {
			let (p1, p2) = (&points[i], &points[j]);
			let (dx, dy) = (p1.x - p2.x, p1.y - p2.y);
			let distance = (dx * dx + dy * dy).sqrt();

			let Some(strength) = connection_strength(distance, style.max_distance) else {
				continue;
			};
			let alpha = style.base_alpha * strength;
			let width = if style.taper_width {
				style.line_width * strength
			} else {
				style.line_width
			};

			ctx.begin_path();
			ctx.move_to(p1.x, p1.y);
			ctx.line_to(p2.x, p2.y);
			ctx.set_line_width(width);

			let gradient_set = style.hue_gradient && {
				let gradient = ctx.create_linear_gradient(p1.x, p1.y, p2.x, p2.y);
				let stops_ok = gradient.add_color_stop(0.0, &hsla(p1.hue, alpha)).is_ok()
					&& gradient.add_color_stop(1.0, &hsla(p2.hue, alpha)).is_ok();
				if stops_ok {
					#[allow(deprecated)]
					ctx.set_stroke_style(&gradient);
				}
				stops_ok
			};
			if !gradient_set {
				ctx.set_stroke_style_str(&style.color.with_alpha(alpha).to_css());
			}

			ctx.stroke();
		}
	}
}

fn draw_points(field: &PointField, ctx: &CanvasRenderingContext2d) {
	let config = field.config();

	for p in &field.points {
		if let Some(trail) = config.trails {
			for seg in &p.tail {
				ctx.set_fill_style_str(&p.tint.with_alpha(seg.opacity).to_css());
				ctx.begin_path();
				let _ = ctx.arc(seg.x, seg.y, p.size * trail.size_ratio, 0.0, PI * 2.0);
				ctx.fill();
			}
		}

		let radius = p.current_size(config);
		match &config.color {
			PointColor::Palette(_) | PointColor::SoftNoise | PointColor::Flat(_) => {
				ctx.set_fill_style_str(&p.tint.with_alpha(p.opacity).to_css());
			}
			PointColor::RadialPair { inner, outer } => {
				let center = inner.with_alpha(p.opacity).to_css();
				let edge = outer.with_alpha(p.opacity * 0.5).to_css();
				set_radial_fill(ctx, p, radius * 2.0, &center, &edge);
			}
			PointColor::HueGlow {
				glow_radius_factor, ..
			} => {
				let center = hsla(p.hue, p.opacity);
				let edge = hsla(p.hue, 0.0);
				set_radial_fill(ctx, p, radius * glow_radius_factor, &center, &edge);
			}
		}
		fill_circle(ctx, p, radius);
	}
}

/// Install a two-stop radial gradient as the fill style, falling back to
/// the flat center color if the context refuses the gradient.
fn set_radial_fill(
	ctx: &CanvasRenderingContext2d,
	p: &Point,
	outer_radius: f64,
	center: &str,
	edge: &str,
) {
	match radial_gradient(ctx, p, outer_radius, center, edge) {
		Some(gradient) => {
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(center),
	}
}

fn radial_gradient(
	ctx: &CanvasRenderingContext2d,
	p: &Point,
	outer_radius: f64,
	center: &str,
	edge: &str,
) -> Option<CanvasGradient> {
	let gradient = ctx
		.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, outer_radius)
		.ok()?;
	gradient.add_color_stop(0.0, center).ok()?;
	gradient.add_color_stop(1.0, edge).ok()?;
	Some(gradient)
}

fn fill_circle(ctx: &CanvasRenderingContext2d, p: &Point, radius: f64) {
	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, radius, 0.0, PI * 2.0);
	ctx.fill();
}
