use std::f64::consts::{FRAC_PI_2, PI};

use strum::{Display as StrumDisplay, EnumIter};

use super::layout::Rings;
use crate::geometry::{Point, Rect, normalize_radians};

const THREE_HALVES_PI: f64 = 3.0 * FRAC_PI_2;

/// Placement zone of a wedge's label.
///
/// EAST and WEST labels sit horizontally across the seam they straddle. The diagonal zones
/// rotate the text along one edge of the wedge, picking the edge and the side of the hub
/// that keep it reading left to right, never upside down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Quadrant {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// Angles in radians, zero pointing east, growing counter-clockwise. Any real value is
    /// accepted and wrapped first.
    pub fn classify(low: f64, high: f64) -> Self {
        let low = normalize_radians(low);
        let high = normalize_radians(high);

        // wedge crosses the zero seam, or ends on it
        if low > high {
            return Self::East;
        }

        let median = (low + high) / 2.0;
        if median < FRAC_PI_2 {
            Self::NorthEast
        } else if low < PI && PI < high {
            Self::West
        } else if median <= PI {
            Self::NorthWest
        } else if median < THREE_HALVES_PI {
            Self::SouthWest
        } else {
            Self::SouthEast
        }
    }
}

/// Angular bounds of one wedge, in radians counter-clockwise from east. Not normalized:
/// `high - low` is the wedge's angular width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub low: f64,
    pub high: f64,
}

impl Wedge {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::classify(self.low, self.high)
    }

    /// Start of the pie arc, counter-clockwise from east.
    pub fn start_degrees(&self) -> f64 {
        self.low.to_degrees()
    }

    pub fn extent_degrees(&self) -> f64 {
        self.span().to_degrees()
    }
}

/// Where a label goes once the menu-local frame (origin at the menu center, y down) has
/// been rotated by `rotation` radians. `anchor` is the text baseline start; `clip` bounds
/// the text in the same rotated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub rotation: f64,
    pub anchor: Point,
    pub clip: Rect,
}

impl LabelPlacement {
    pub fn new(quadrant: Quadrant, wedge: &Wedge, rings: &Rings) -> Self {
        let p = rings.padding;
        let h = rings.line_height;
        let tall = rings.label_height;
        // just outside the hub, and hard against the far rim
        let near = rings.inner_radius + p;
        let far = p - rings.outer_radius;

        let (rotation, anchor, clip_top) = match quadrant {
            Quadrant::East => (0.0, Point::new(near, p), 2 * p - tall),
            Quadrant::West => (0.0, Point::new(far, p), 2 * p - tall),
            Quadrant::NorthEast => (-wedge.low, Point::new(near, -p), -tall),
            Quadrant::SouthEast => (-wedge.high, Point::new(near, h + p), h + 2 * p - tall),
            Quadrant::SouthWest => (PI - wedge.low, Point::new(far, tall - p), 0),
            Quadrant::NorthWest => (PI - wedge.high, Point::new(far, -p), -tall),
        };

        Self {
            rotation,
            anchor,
            clip: Rect::new(anchor.x, clip_top, rings.label_width, tall),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_4, TAU};

    #[test]
    fn test_first_quarter_is_north_east() {
        assert_eq!(Quadrant::classify(0.0, FRAC_PI_2), Quadrant::NorthEast);
    }

    #[test]
    fn test_second_quarter_is_north_west() {
        assert_eq!(Quadrant::classify(FRAC_PI_2, PI), Quadrant::NorthWest);
        // median exactly at π, nothing straddled
        assert_eq!(Quadrant::classify(PI, PI), Quadrant::NorthWest);
    }

    #[test]
    fn test_straddling_pi_is_west() {
        assert_eq!(Quadrant::classify(3.0 * FRAC_PI_4, 5.0 * FRAC_PI_4), Quadrant::West);
    }

    #[test]
    fn test_southern_halves() {
        assert_eq!(Quadrant::classify(PI, 5.0 * FRAC_PI_4), Quadrant::SouthWest);
        assert_eq!(Quadrant::classify(7.0 * FRAC_PI_4, TAU - 0.01), Quadrant::SouthEast);
        assert_eq!(Quadrant::classify(THREE_HALVES_PI, TAU - 0.01), Quadrant::SouthEast);
    }

    #[test]
    fn test_zero_seam_is_east() {
        assert_eq!(Quadrant::classify(-FRAC_PI_4, FRAC_PI_4), Quadrant::East);
        assert_eq!(Quadrant::classify(7.0 * FRAC_PI_4, TAU + FRAC_PI_4), Quadrant::East);
    }

    #[test]
    fn test_ending_on_the_seam_is_east() {
        // high wraps to 0 and drops below low
        assert_eq!(Quadrant::classify(-FRAC_PI_2, 0.0), Quadrant::East);
        assert_eq!(Quadrant::classify(THREE_HALVES_PI, TAU), Quadrant::East);
        // starting on it is not
        assert_eq!(Quadrant::classify(0.0, FRAC_PI_2), Quadrant::NorthEast);
    }

    #[test]
    fn test_angles_are_wrapped_before_classifying() {
        assert_eq!(
            Quadrant::classify(-3.0 * FRAC_PI_2, -5.0 * FRAC_PI_4),
            Quadrant::classify(FRAC_PI_2, 3.0 * FRAC_PI_4)
        );
        assert_eq!(
            Quadrant::classify(TAU + 0.1, TAU + 0.2),
            Quadrant::NorthEast
        );
    }

    #[test]
    fn test_wedge_arc_degrees() {
        let wedge = Wedge::new(-FRAC_PI_2, -FRAC_PI_4);
        assert!((wedge.start_degrees() + 90.0).abs() < 1e-9);
        assert!((wedge.extent_degrees() - 45.0).abs() < 1e-9);
        assert_eq!(wedge.quadrant(), Quadrant::SouthEast);
    }

    #[test]
    fn test_quadrant_display() {
        assert_eq!(Quadrant::NorthEast.to_string(), "NORTH_EAST");
        assert_eq!(Quadrant::West.to_string(), "WEST");
    }

    fn rings() -> Rings {
        Rings {
            center: Point::new(200, 200),
            padding: 5,
            line_height: 14,
            label_height: 24,
            label_width: 50,
            inner_radius: 40,
            outer_radius: 100,
            bounds: Rect::around(Point::new(200, 200), 100),
        }
    }

    #[test]
    fn test_east_and_west_labels_are_level() {
        let wedge = Wedge::new(-0.3, 0.3);
        let east = LabelPlacement::new(Quadrant::East, &wedge, &rings());
        assert_eq!(east.rotation, 0.0);
        assert_eq!(east.anchor, Point::new(45, 5));
        assert_eq!(east.clip, Rect::new(45, -14, 50, 24));

        let west = LabelPlacement::new(Quadrant::West, &wedge, &rings());
        assert_eq!(west.rotation, 0.0);
        assert_eq!(west.anchor, Point::new(-95, 5));
        assert_eq!(west.clip, Rect::new(-95, -14, 50, 24));
    }

    #[test]
    fn test_diagonal_labels_follow_a_wedge_edge() {
        let wedge = Wedge::new(0.2, 0.9);
        let r = rings();

        let ne = LabelPlacement::new(Quadrant::NorthEast, &wedge, &r);
        assert_eq!(ne.rotation, -0.2);
        assert_eq!(ne.anchor, Point::new(45, -5));
        assert_eq!(ne.clip, Rect::new(45, -24, 50, 24));

        let se = LabelPlacement::new(Quadrant::SouthEast, &wedge, &r);
        assert_eq!(se.rotation, -0.9);
        assert_eq!(se.anchor, Point::new(45, 19));
        assert_eq!(se.clip, Rect::new(45, 0, 50, 24));

        let sw = LabelPlacement::new(Quadrant::SouthWest, &wedge, &r);
        assert_eq!(sw.rotation, PI - 0.2);
        assert_eq!(sw.anchor, Point::new(-95, 19));
        assert_eq!(sw.clip, Rect::new(-95, 0, 50, 24));

        let nw = LabelPlacement::new(Quadrant::NorthWest, &wedge, &r);
        assert_eq!(nw.rotation, PI - 0.9);
        assert_eq!(nw.anchor, Point::new(-95, -5));
        assert_eq!(nw.clip, Rect::new(-95, -24, 50, 24));
    }
}
