use crate::error::MotionError;

/// Piecewise-linear map from a scroll progress value to a style value.
///
/// Inputs outside the first/last control point clamp to the matching
/// output, so the mapping never extrapolates.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl Transform {
    pub fn new(input: &[f64], output: &[f64]) -> Result<Self, MotionError> {
        if input.len() != output.len() {
            return Err(MotionError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(MotionError::TooFewPoints(input.len()));
        }
        if let Some(i) = input.windows(2).position(|w| w[1] <= w[0]) {
            return Err(MotionError::NotIncreasing(i + 1));
        }
        Ok(Self {
            input: input.to_vec(),
            output: output.to_vec(),
        })
    }

    /// Two-point shorthand, used for every hero transform.
    pub fn linear(from: (f64, f64), to: (f64, f64)) -> Result<Self, MotionError> {
        Self::new(&[from.0, to.0], &[from.1, to.1])
    }

    pub fn map(&self, p: f64) -> f64 {
        let last = self.input.len() - 1;
        if p.is_nan() || p <= self.input[0] {
            return self.output[0];
        }
        if p >= self.input[last] {
            return self.output[last];
        }
        // first segment whose upper bound reaches p
        let seg = self.input.iter().position(|&x| x >= p).unwrap_or(last).max(1);
        let (x0, x1) = (self.input[seg - 1], self.input[seg]);
        let (y0, y1) = (self.output[seg - 1], self.output[seg]);
        y0 + (p - x0) / (x1 - x0) * (y1 - y0)
    }
}

/// Style values driven by the hero's scroll progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub image_scale: f64,
    pub image_opacity: f64,
    pub text_offset_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroParallax {
    scale: Transform,
    opacity: Transform,
    text_y: Transform,
}

impl HeroParallax {
    pub fn new() -> Result<Self, MotionError> {
        Ok(Self {
            scale: Transform::linear((0.0, 1.0), (1.0, 1.15))?,
            opacity: Transform::linear((0.0, 1.0), (0.8, 0.0))?,
            text_y: Transform::linear((0.0, 0.0), (1.0, -60.0))?,
        })
    }

    pub fn frame(&self, progress: f64) -> HeroFrame {
        HeroFrame {
            image_scale: self.scale.map(progress),
            image_opacity: self.opacity.map(progress),
            text_offset_y: self.text_y.map(progress),
        }
    }
}

impl HeroFrame {
    pub fn image_style(&self) -> String {
        format!(
            "transform: scale({:.4}); opacity: {:.4};",
            self.image_scale, self.image_opacity
        )
    }

    pub fn text_style(&self) -> String {
        format!("transform: translateY({:.2}px);", self.text_offset_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_bad_control_points() {
        assert_eq!(Transform::new(&[0.0], &[1.0]), Err(MotionError::TooFewPoints(1)));
        assert_eq!(
            Transform::new(&[0.0, 1.0], &[1.0]),
            Err(MotionError::LengthMismatch { input: 2, output: 1 })
        );
        assert_eq!(
            Transform::new(&[0.0, 0.5, 0.5], &[0.0, 1.0, 2.0]),
            Err(MotionError::NotIncreasing(2))
        );
    }

    #[test]
    fn clamps_outside_the_domain() {
        let t = Transform::linear((0.0, 1.0), (0.8, 0.0)).unwrap();
        assert_eq!(t.map(-0.5), 1.0);
        assert_eq!(t.map(0.9), 0.0);
        assert_eq!(t.map(f64::NAN), 1.0);
        assert!((t.map(0.4) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn interpolates_between_inner_points() {
        let t = Transform::new(&[0.0, 0.5, 1.0], &[0.0, 10.0, 0.0]).unwrap();
        assert!((t.map(0.25) - 5.0).abs() < 1e-9);
        assert!((t.map(0.5) - 10.0).abs() < 1e-9);
        assert!((t.map(0.75) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn hero_frame_endpoints() {
        let hero = HeroParallax::new().unwrap();
        let top = hero.frame(0.0);
        assert_eq!(top.image_scale, 1.0);
        assert_eq!(top.image_opacity, 1.0);
        assert_eq!(top.text_offset_y, 0.0);

        let bottom = hero.frame(1.0);
        assert!((bottom.image_scale - 1.15).abs() < 1e-9);
        assert_eq!(bottom.image_opacity, 0.0);
        assert_eq!(bottom.text_offset_y, -60.0);
        assert_eq!(bottom.text_style(), "transform: translateY(-60.00px);");
    }

    proptest! {
        #[test]
        fn hero_scale_never_decreases(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let hero = HeroParallax::new().unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (s_lo, s_hi) = (hero.frame(lo).image_scale, hero.frame(hi).image_scale);
            prop_assert!(s_lo <= s_hi);
            prop_assert!((1.0..=1.15 + 1e-12).contains(&s_lo));
            prop_assert!((1.0..=1.15 + 1e-12).contains(&s_hi));
        }
    }
}
