use palette::Srgba;

use super::HUB_GLYPH;
use super::layout::{MenuLayout, WedgeLayout};
use super::quadrant::LabelPlacement;
use crate::geometry::{Point, Rect};

/// Drawing backend for a laid-out menu. Coordinates are relative to the menu's bounds.
///
/// Outline, hub and glyph colors belong to the host's theme and are not passed in.
pub trait Surface {
    type Error;

    fn stroke_circle(&mut self, center: Point, radius: i32) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Point, radius: i32) -> Result<(), Self::Error>;

    /// Pie slice of the ellipse inscribed in `bounds`, angles in degrees counter-clockwise
    /// from east.
    fn fill_arc(
        &mut self,
        bounds: Rect,
        start_degrees: f64,
        extent_degrees: f64,
        color: Srgba<f64>,
    ) -> Result<(), Self::Error>;

    /// Translate to `origin`, rotate by `placement.rotation`, clip, then draw at the anchor.
    fn draw_label(
        &mut self,
        text: &str,
        origin: Point,
        placement: &LabelPlacement,
        color: Srgba<f64>,
    ) -> Result<(), Self::Error>;

    fn draw_glyph(&mut self, glyph: char, at: Point) -> Result<(), Self::Error>;
}

struct WedgeRenderer<'a> {
    wedge: &'a WedgeLayout,
    pie: Rect,
    origin: Point,
}

impl<'a> WedgeRenderer<'a> {
    fn new(wedge: &'a WedgeLayout, layout: &MenuLayout) -> Self {
        let bounds = layout.rings.bounds;
        Self {
            wedge,
            pie: Rect::new(0, 0, bounds.width, bounds.height),
            origin: layout.center,
        }
    }

    fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let WedgeLayout {
            wedge,
            colors,
            label,
            placement,
            ..
        } = self.wedge;

        surface.fill_arc(
            self.pie,
            wedge.start_degrees(),
            wedge.extent_degrees(),
            colors.background,
        )?;
        surface.draw_label(label, self.origin, placement, colors.foreground)
    }
}

/// Paints back to front: ring outlines, wedges with their labels, then the hub over the
/// wedges' inner ends.
pub fn draw<S: Surface>(surface: &mut S, layout: &MenuLayout) -> Result<(), S::Error> {
    let rings = &layout.rings;

    surface.stroke_circle(layout.center, rings.inner_radius)?;
    surface.stroke_circle(layout.center, rings.outer_radius)?;

    for wedge in &layout.wedges {
        WedgeRenderer::new(wedge, layout).draw(surface)?;
    }

    draw_hub(surface, layout)
}

fn draw_hub<S: Surface>(surface: &mut S, layout: &MenuLayout) -> Result<(), S::Error> {
    surface.fill_circle(layout.center, layout.rings.inner_radius)?;
    surface.stroke_circle(layout.center, layout.rings.inner_radius)?;
    surface.draw_glyph(HUB_GLYPH, layout.hub_glyph)
}
