pub mod colorizer;
pub mod layout;
pub mod model;
pub mod quadrant;
pub mod shadow;
pub mod view;
pub mod width;

pub use colorizer::HueWheel;
pub use layout::{LayoutError, LayoutPass, MenuLayout, Rings, TextMetrics, WedgeLayout, wedge_bounds};
pub use model::{Entry, Label, PieMenu};
pub use quadrant::{LabelPlacement, Quadrant, Wedge};
pub use shadow::{ChangeError, ChangeKind, ListChange, ShadowList};
pub use view::{Surface, draw};
pub use width::{NoLabels, WidthOptimizer};

pub const LABEL_PADDING: i32 = 5;
pub const GRAB_RADIUS: i32 = 40; // smallest comfortable hub to click into
pub const WIDTH_TOLERANCE: f64 = 0.10; // how much empty space a label column may carry
pub const HUB_GLYPH: char = 'X';

/// Upper bounds for the configurable sizes; larger values are clamped when loaded.
pub const MAX_LABEL_PADDING: i32 = 64;
pub const MAX_GRAB_RADIUS: i32 = 1024;

/// Step around the hue wheel between consecutive wedges.
///
/// Near 0.5 maximises the difference between neighbours, near zero looks like a gradient.
/// 0.5 alternates two colors, 1/3 and 1/4 repeat visibly, 0.371 was the first value that
/// mostly worked. 0.366 is the best of the values tried: a wheel of 9 or 12 has a single
/// pair of similar neighbours.
pub const WEDGE_HUE_SEPARATION: f64 = 0.366;

/// Upper bound on the angular width of one wedge, in radians. Never binds for a single
/// ring, where the width is `2π / N`.
pub const WEDGE_ANGLE_CAP: f64 = 45.0;
