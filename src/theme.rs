use derive_more::{Deref, Display, From, Into};
use palette::{FromColor, Hsv, Srgb, Srgba, WithAlpha};

/// Pale, low-saturation wedge fill.
pub const WEDGE_BACKGROUND_SATURATION: f64 = 0.3;
pub const WEDGE_BACKGROUND_BRIGHTNESS: f64 = 0.94;

/// Bold, dark label text in the same hue family as its wedge.
pub const WEDGE_TEXT_SATURATION: f64 = 1.0;
pub const WEDGE_TEXT_BRIGHTNESS: f64 = 0.3;

/// Position on the color wheel, in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Display, Deref, From, Into)]
pub struct Hue(f64);

impl Hue {
    /// Folds any finite value onto the wheel.
    pub fn wrapped(value: f64) -> Self {
        let hue = value.rem_euclid(1.0);
        Self(if hue >= 1.0 { 0.0 } else { hue })
    }

    pub fn degrees(&self) -> f64 {
        self.0 * 360.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgeColors {
    pub foreground: Srgba<f64>,
    pub background: Srgba<f64>,
}

impl WedgeColors {
    /// Both colors share the hue; only saturation and brightness differ, so the text
    /// stays legible on its wedge whatever the hue.
    pub fn from_hue(hue: Hue) -> Self {
        Self {
            foreground: hsb(hue, WEDGE_TEXT_SATURATION, WEDGE_TEXT_BRIGHTNESS),
            background: hsb(hue, WEDGE_BACKGROUND_SATURATION, WEDGE_BACKGROUND_BRIGHTNESS),
        }
    }
}

fn hsb(hue: Hue, saturation: f64, brightness: f64) -> Srgba<f64> {
    let hsv: Hsv<palette::encoding::Srgb, f64> = Hsv::new(hue.degrees(), saturation, brightness);
    Srgb::<f64>::from_color(hsv).with_alpha(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_hue_wrapping() {
        assert!(close(*Hue::wrapped(1.25), 0.25));
        assert!(close(*Hue::wrapped(-0.25), 0.75));
        assert_eq!(*Hue::wrapped(1.0), 0.0);
    }

    #[test]
    fn test_red_wedge_colors() {
        let colors = WedgeColors::from_hue(Hue::wrapped(0.0));

        let (r, g, b, a) = colors.background.into_components();
        assert!(close(r, 0.94));
        assert!(close(g, 0.94 * 0.7));
        assert!(close(b, 0.94 * 0.7));
        assert!(close(a, 1.0));

        let (r, g, b, _) = colors.foreground.into_components();
        assert!(close(r, 0.3));
        assert!(close(g, 0.0));
        assert!(close(b, 0.0));
    }

    #[test]
    fn test_text_darker_than_fill_for_every_hue() {
        for step in 0..36 {
            let colors = WedgeColors::from_hue(Hue::wrapped(step as f64 / 36.0));
            let fg = colors.foreground;
            let bg = colors.background;
            let fg_max = fg.red.max(fg.green).max(fg.blue);
            let bg_min = bg.red.min(bg.green).min(bg.blue);
            assert!(fg_max < bg_min, "hue step {step}");
        }
    }
}
