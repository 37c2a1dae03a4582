use crate::config::Colorizer;
use crate::theme::Hue;

use super::WEDGE_HUE_SEPARATION;

/// Running hue state for one menu. Each menu owns its own wheel so two menus never
/// influence each other's colors.
#[derive(Debug, Clone, PartialEq)]
pub struct HueWheel {
    colorizer: Colorizer,
    separation: f64,
    next: Hue,
}

impl Default for HueWheel {
    fn default() -> Self {
        Self::new(Colorizer::default(), WEDGE_HUE_SEPARATION)
    }
}

impl HueWheel {
    pub fn new(colorizer: Colorizer, separation: f64) -> Self {
        Self {
            colorizer,
            separation,
            next: Hue::default(),
        }
    }

    pub fn colorizer(&self) -> Colorizer {
        self.colorizer
    }

    /// Later hues continue from the current wheel position.
    pub fn set_colorizer(&mut self, colorizer: Colorizer) {
        self.colorizer = colorizer;
    }

    /// Back to the start of the wheel.
    pub fn reset(&mut self) {
        self.next = Hue::default();
    }

    /// Hue for a newly materialized wedge in a menu of `total` entries.
    pub fn next_hue(&mut self, label: &str, total: usize) -> Hue {
        match self.colorizer {
            Colorizer::DistinctHues => self.advance(self.separation),
            Colorizer::Gradient => self.advance(1.0 / total.max(1) as f64),
            Colorizer::LabelHash => {
                let hue = label_hue(label);
                self.next = hue;
                hue
            }
        }
    }

    fn advance(&mut self, step: f64) -> Hue {
        let hue = self.next;
        self.next = Hue::wrapped(*hue + step);
        hue
    }
}

/// Hue that depends only on the label text, case-insensitively. Stable across runs,
/// processes and machines.
pub fn label_hue(label: &str) -> Hue {
    let hash = label_hash(label);
    let magnitude = f64::from(hash).abs();
    if magnitude == 0.0 {
        return Hue::default();
    }

    let exponent = magnitude.log10().ceil();
    let hue = Hue::wrapped(magnitude / 10f64.powf(exponent));
    log::debug!(
        "hash-color: '{}' -> {} -> 1e{} -> {}",
        label,
        hash,
        exponent,
        hue
    );
    hue
}

/// 31-multiplier polynomial over the UTF-16 units of the lowercased label. Kept by hand
/// because std hashers give no stability guarantee across releases.
fn label_hash(label: &str) -> i32 {
    label
        .to_lowercase()
        .encode_utf16()
        .fold(0_i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_distinct_hues_sequence() {
        let mut wheel = HueWheel::new(Colorizer::DistinctHues, 0.366);
        let hues: Vec<f64> = (0..5).map(|_| *wheel.next_hue("ignored", 5)).collect();
        let expected = [0.0, 0.366, 0.732, 0.098, 0.464];
        for (hue, want) in hues.iter().zip(expected) {
            assert!(close(*hue, want), "{hues:?}");
        }
    }

    #[test]
    fn test_distinct_hues_ignore_label() {
        let mut a = HueWheel::default();
        let mut b = HueWheel::default();
        for (x, y) in ["Open", "Save", "Quit"].iter().zip(["1", "2", "3"]) {
            assert_eq!(a.next_hue(x, 3), b.next_hue(y, 3));
        }
    }

    #[test]
    fn test_gradient_tiles_the_wheel() {
        let mut wheel = HueWheel::new(Colorizer::Gradient, WEDGE_HUE_SEPARATION);
        let hues: Vec<f64> = (0..4).map(|_| *wheel.next_hue("", 4)).collect();
        for (hue, want) in hues.iter().zip([0.0, 0.25, 0.5, 0.75]) {
            assert!(close(*hue, want), "{hues:?}");
        }
        assert!(close(*wheel.next_hue("", 4), 0.0));
    }

    #[test]
    fn test_label_hash_is_stateless_and_case_insensitive() {
        let mut first = HueWheel::new(Colorizer::LabelHash, WEDGE_HUE_SEPARATION);
        let mut second = HueWheel::new(Colorizer::LabelHash, WEDGE_HUE_SEPARATION);
        second.next_hue("something else first", 9);

        let copy = first.next_hue("Copy", 3);
        assert_eq!(copy, first.next_hue("Copy", 7));
        assert_eq!(copy, second.next_hue("COPY", 1));
        assert_eq!(copy, label_hue("copy"));
        assert_ne!(copy, label_hue("Paste"));
    }

    #[test]
    fn test_label_hue_known_values() {
        // "a" hashes to 97, folded to 0.97
        assert!(close(*label_hue("A"), 0.97));
        // "ab" hashes to 97 * 31 + 98 = 3105
        assert!(close(*label_hue("ab"), 0.3105));
        // exact powers of ten wrap to the start of the wheel
        assert_eq!(label_hash("d"), 100);
        assert_eq!(*label_hue("d"), 0.0);
        assert_eq!(*label_hue(""), 0.0);
    }

    #[test]
    fn test_label_hue_in_range_for_negative_hashes() {
        let labels = ["Copy", "Paste", "Select All", "a much longer label than usual"];
        assert!(labels.iter().any(|l| label_hash(l) < 0));
        for label in labels {
            let hue = *label_hue(label);
            assert!((0.0..1.0).contains(&hue), "{label} -> {hue}");
        }
    }

    #[test]
    fn test_reset_restarts_the_wheel() {
        let mut wheel = HueWheel::default();
        let first = wheel.next_hue("", 2);
        wheel.next_hue("", 2);
        wheel.reset();
        assert_eq!(wheel.next_hue("", 2), first);
    }
}
