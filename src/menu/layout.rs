//! Ring and wedge geometry for one layout pass.
//!
//! Sizing needs font metrics, which the host may only have once it can draw. The pass is
//! therefore split in two: [`PieMenu::measure`] derives the bounds from the labels, and
//! [`PieMenu::layout`] either confirms those bounds and lays the wedges out or reports the
//! bounds the host must apply before asking again.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Display;

use thiserror::Error;

use super::model::{Label, PieMenu};
use super::quadrant::{LabelPlacement, Quadrant, Wedge};
use super::width::{NoLabels, WidthOptimizer};
use super::{HUB_GLYPH, WEDGE_ANGLE_CAP};
use crate::config::Settings;
use crate::geometry::{Point, Rect};
use crate::theme::WedgeColors;

/// Text measurement for the font the menu is drawn with. Must not change within a pass.
pub trait TextMetrics {
    fn string_width(&self, text: &str) -> i32;
    fn line_height(&self) -> i32;
    fn char_width(&self, ch: char) -> i32;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Width(#[from] NoLabels),
    /// Labels would overlap; a second ring is not supported.
    #[error(
        "too many items for a single ring: wedges are {wedge_height}px tall, labels need {label_height}px"
    )]
    TooManyWedges { wedge_height: i32, label_height: i32 },
}

/// Radii and label box shared by every wedge of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rings {
    pub center: Point,
    pub padding: i32,
    pub line_height: i32,
    /// Line height plus padding above and below.
    pub label_height: i32,
    pub label_width: i32,
    pub inner_radius: i32,
    pub outer_radius: i32,
    pub bounds: Rect,
}

impl Rings {
    pub fn measure(
        labels: &[&str],
        metrics: &impl TextMetrics,
        settings: &Settings,
        center: Point,
    ) -> Result<Self, LayoutError> {
        let label_width = WidthOptimizer::new(settings.width_tolerance)
            .optimal_width(labels.iter().copied(), |label| metrics.string_width(label))?;

        let padding = settings.label_padding;
        let line_height = metrics.line_height();
        let label_height = line_height.saturating_add(padding.saturating_mul(2));

        // the hub must be grabbable, and wide enough that labels do not crowd at its rim
        let radians_per_wedge = TAU / labels.len() as f64;
        let label_bound = (label_height as f64 / radians_per_wedge.tan()) as i32;
        let inner_radius = settings.grab_radius.max(label_bound);
        // saturates rather than wrapping on absurd metrics
        let outer_radius = inner_radius
            .saturating_add(padding.saturating_mul(2))
            .saturating_add(label_width);

        log::debug!(
            "labels @ {} x {}, inner radius {}, outer radius {}",
            label_width,
            label_height,
            inner_radius,
            outer_radius
        );

        Ok(Self {
            center,
            padding,
            line_height,
            label_height,
            label_width,
            inner_radius,
            outer_radius,
            bounds: Rect::around(center, outer_radius),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WedgeLayout {
    pub index: usize,
    pub label: Label,
    pub colors: WedgeColors,
    pub wedge: Wedge,
    pub quadrant: Quadrant,
    pub placement: LabelPlacement,
}

/// Everything a surface needs to paint the menu. Points are relative to `rings.bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    pub rings: Rings,
    pub center: Point,
    pub hub_glyph: Point,
    pub wedges: Vec<WedgeLayout>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutPass {
    /// The menu does not fit the bounds it was given; apply these and lay out again.
    Resize(Rect),
    Ready(MenuLayout),
}

/// Wedges run clockwise from north, each `radians_per_wedge` wide.
pub fn wedge_bounds(index: usize, radians_per_wedge: f64) -> Wedge {
    let high = (FRAC_PI_2 - radians_per_wedge * index as f64) % TAU;
    let low = (FRAC_PI_2 - radians_per_wedge * (index + 1) as f64) % TAU;
    Wedge::new(low, high)
}

impl<T: Display> PieMenu<T> {
    /// Materializes entries and derives the radii and bounds for the current items.
    pub fn measure(&mut self, metrics: &impl TextMetrics) -> Result<Rings, LayoutError> {
        self.refresh_entries();
        let labels: Vec<&str> = self
            .entries
            .iter()
            .flatten()
            .map(|entry| entry.label.as_str())
            .collect();
        Rings::measure(&labels, metrics, &self.settings, self.center)
    }

    /// Lays the wedges out if `bounds` are the ones this pass needs, otherwise asks for them.
    pub fn layout(
        &mut self,
        metrics: &impl TextMetrics,
        bounds: Rect,
    ) -> Result<LayoutPass, LayoutError> {
        let rings = self.measure(metrics)?;
        if rings.bounds != bounds {
            log::debug!(
                "started with wrong bounds, resizing: {:?} != {:?}",
                bounds,
                rings.bounds
            );
            return Ok(LayoutPass::Resize(rings.bounds));
        }
        log::debug!("bounds: {:?}", rings.bounds);

        let radians_per_wedge = WEDGE_ANGLE_CAP.min(TAU / self.items.len() as f64);

        // one or two wedges are half the disc or more, as tall as the ring is wide
        let reach = if self.items.len() > 2 {
            radians_per_wedge.sin()
        } else {
            1.0
        };
        let wedge_height = (rings.outer_radius as f64 * reach) as i32;
        log::debug!(
            "estimated wedge height {}px @ {} rad",
            wedge_height,
            radians_per_wedge
        );
        if wedge_height < rings.label_height {
            return Err(LayoutError::TooManyWedges {
                wedge_height,
                label_height: rings.label_height,
            });
        }

        let center = rings.bounds.local_center();
        let hub_glyph = Point::new(
            center.x - metrics.char_width(HUB_GLYPH) / 2,
            center.y + rings.line_height / 2,
        );

        let wedges = self
            .entries
            .iter_mut()
            .flatten()
            .enumerate()
            .map(|(index, entry)| {
                let wedge = wedge_bounds(index, radians_per_wedge);
                let quadrant = wedge.quadrant();
                log::debug!(
                    "'{}' quadrant = {}; {} < angle < {}",
                    entry.label,
                    quadrant,
                    wedge.low,
                    wedge.high
                );

                entry.wedge = Some(wedge);
                entry.quadrant = Some(quadrant);

                WedgeLayout {
                    index,
                    label: entry.label.clone(),
                    colors: entry.colors,
                    wedge,
                    quadrant,
                    placement: LabelPlacement::new(quadrant, &wedge, &rings),
                }
            })
            .collect();

        Ok(LayoutPass::Ready(MenuLayout {
            rings,
            center,
            hub_glyph,
            wedges,
        }))
    }
}
