//! Layout engine for radial ("pie") menus: ring geometry, wedge colors and label placement
//! that keeps every label reading left to right. Drawing is left to a [`menu::Surface`].

pub mod config;
pub mod geometry;
pub mod macros;
pub mod menu;
pub mod theme;

pub use crate::config::{Colorizer, Settings};
pub use crate::geometry::{Point, Rect};
pub use crate::menu::{LayoutError, LayoutPass, MenuLayout, PieMenu, TextMetrics};
