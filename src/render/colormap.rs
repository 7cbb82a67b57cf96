// src/render/colormap.rs

//! Piecewise color gradient in "step then blend" form: at each segment
//! start the gradient jumps to the segment's color, then interpolates
//! toward the next breakpoint. With each segment closed flat at its end
//! the rating bands read as hard category steps.

use std::error::Error;

use image::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub at: f32,
    pub color: Rgba<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Build from parallel slices: one color per segment, one start
    /// position per segment. Positions live on [0, 1], strictly
    /// increasing, first one 0. The final color is always extended flat
    /// to position 1. Malformed input is an error, never a partial
    /// gradient.
    pub fn from_segments(colors: &[Rgba<u8>], starts: &[f32]) -> Result<Self, Box<dyn Error>> {
        if colors.is_empty() {
            return Err("gradient needs at least one color".into());
        }
        if colors.len() != starts.len() {
            return Err(format!(
                "{} colors vs {} segment starts",
                colors.len(),
                starts.len()
            )
            .into());
        }
        if starts[0] != 0.0 {
            return Err(format!("first segment must start at 0, got {}", starts[0]).into());
        }
        for pair in starts.windows(2) {
            if pair[1] <= pair[0] {
                return Err(
                    format!("segment starts must increase: {} then {}", pair[0], pair[1]).into(),
                );
            }
        }
        if *starts.last().unwrap() > 1.0 {
            return Err("segment starts must stay within [0, 1]".into());
        }

        let mut stops = Vec::with_capacity(colors.len() * 2);
        for (idx, &color) in colors.iter().enumerate() {
            if idx > 0 {
                // Close the previous segment flat, then jump.
                stops.push(ColorStop { at: starts[idx], color: colors[idx - 1] });
            }
            stops.push(ColorStop { at: starts[idx], color });
        }
        stops.push(ColorStop { at: 1.0, color: *colors.last().unwrap() });

        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at position `t`, clamped to [0, 1]. At a duplicated boundary
    /// position the later stop wins: the jump lands on the new segment's
    /// color.
    pub fn sample(&self, t: f32) -> Rgba<u8> {
        let t = t.clamp(0.0, 1.0);

        let mut idx = 0;
        for (k, stop) in self.stops.iter().enumerate() {
            if stop.at <= t {
                idx = k;
            } else {
                break;
            }
        }

        if idx + 1 >= self.stops.len() {
            return self.stops[idx].color;
        }

        let a = self.stops[idx];
        let b = self.stops[idx + 1];
        let span = b.at - a.at;
        if span <= 0.0 {
            return b.color;
        }
        lerp(a.color, b.color, (t - a.at) / span)
    }
}

fn lerp(a: Rgba<u8>, b: Rgba<u8>, u: f32) -> Rgba<u8> {
    let mut out = [0u8; 4];
    for ch in 0..4 {
        let av = a.0[ch] as f32;
        let bv = b.0[ch] as f32;
        out[ch] = (av + (bv - av) * u).round() as u8;
    }
    Rgba(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const C0: Rgba<u8> = Rgba([10, 0, 0, 255]);
    const C1: Rgba<u8> = Rgba([0, 20, 0, 255]);
    const C2: Rgba<u8> = Rgba([0, 0, 30, 255]);

    fn three_band() -> Gradient {
        Gradient::from_segments(&[C0, C1, C2], &[0.0, 0.3, 0.7]).unwrap()
    }

    #[test]
    fn step_then_blend_boundaries() {
        let g = three_band();
        assert_eq!(g.sample(0.0), C0);
        // Held flat right up to the boundary…
        assert_eq!(g.sample(0.2999), C0);
        // …then jumps to the next segment's color.
        assert_eq!(g.sample(0.3), C1);
        assert_eq!(g.sample(1.0), C2);
    }

    #[test]
    fn last_color_extends_to_one() {
        let g = three_band();
        // Between 0.7 and 1.0 the stop list is C2 -> C2: flat.
        assert_eq!(g.sample(0.85), C2);
        assert_eq!(g.sample(0.9999), C2);
    }

    #[test]
    fn segments_hold_flat_between_jumps() {
        let g = Gradient::from_segments(
            &[Rgba([0, 0, 0, 255]), Rgba([200, 0, 0, 255])],
            &[0.0, 0.5],
        )
        .unwrap();
        // Both ends of each segment carry the same color, so the
        // interpolation inside a segment is flat; all change happens
        // at the jumps.
        assert_eq!(g.sample(0.25), Rgba([0, 0, 0, 255]));
        assert_eq!(g.sample(0.75), Rgba([200, 0, 0, 255]));
    }

    #[test]
    fn out_of_range_samples_clamp() {
        let g = three_band();
        assert_eq!(g.sample(-1.0), C0);
        assert_eq!(g.sample(2.0), C2);
    }

    #[test]
    fn malformed_input_fails_fast() {
        assert!(Gradient::from_segments(&[], &[]).is_err());
        assert!(Gradient::from_segments(&[C0, C1], &[0.0]).is_err());
        assert!(Gradient::from_segments(&[C0, C1], &[0.0, 0.0]).is_err());
        assert!(Gradient::from_segments(&[C0, C1], &[0.1, 0.5]).is_err());
        assert!(Gradient::from_segments(&[C0, C1], &[0.0, 1.5]).is_err());
    }

    #[test]
    fn stop_list_matches_step_then_blend_shape() {
        let g = three_band();
        let ats: Vec<f32> = g.stops().iter().map(|s| s.at).collect();
        assert_eq!(ats, vec![0.0, 0.3, 0.3, 0.7, 0.7, 1.0]);
    }
}
