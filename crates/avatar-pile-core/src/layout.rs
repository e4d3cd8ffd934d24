//! The avatar pile layout engine.
//!
//! Given a [`LayoutConfig`], the engine derives the mask geometry shared by
//! every avatar ([`compute_derived_geometry`]) and describes the full row of
//! avatars ([`build_row`]). Nothing here draws anything: the result is an
//! [`AvatarRow`] that a renderer turns into shapes.
//!
//! # Geometry
//!
//! Every avatar except (optionally) the last one has a crescent bitten out of
//! its right side. The bite is a copy of the base shape grown by `gap` on
//! every side, pushed right so that it intrudes `cut_depth` into the base:
//!
//! ```text
//!                      ┌───────────────────┐  ▲ gap
//!   ┌──────────────────┼─────┐             │  ▼
//!   │ base             │     │   bite      │
//!   │ (size)           │     │ (size+2gap) │
//!   └──────────────────┼─────┘             │
//!                      └───────────────────┘
//!                      ◄─────► cut_depth
//! ```
//!
//! The next avatar is then pulled left by `cut_depth - gap`, so it sits in
//! the bitten-out area with exactly `gap` of clearance.

use std::fmt;

use log::{debug, trace};
use serde::Deserialize;

use crate::{
    geometry::{Bounds, Point, Size},
    shape::{ShapeKind, ShapePrimitive},
};

/// How a depth number is turned into a cut depth in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthConvention {
    /// The depth is a percentage of the shape size: `40` cuts 40% deep.
    #[default]
    Percentage,
    /// The depth is an absolute cut depth in pixels.
    Pixels,
    /// A non-integer depth is a fraction of the size (`0.4` cuts 40% deep),
    /// an integer depth is an absolute cut depth in pixels.
    FractionOrPixels,
}

impl DepthConvention {
    pub fn name(self) -> &'static str {
        match self {
            DepthConvention::Percentage => "percentage",
            DepthConvention::Pixels => "pixels",
            DepthConvention::FractionOrPixels => "fraction_or_pixels",
        }
    }
}

impl fmt::Display for DepthConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A depth value together with the convention used to interpret it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Depth {
    value: f32,
    convention: DepthConvention,
}

impl Depth {
    pub fn new(value: f32, convention: DepthConvention) -> Self {
        Self { value, convention }
    }

    /// A depth given as a percentage of the shape size
    pub fn percent(value: f32) -> Self {
        Self::new(value, DepthConvention::Percentage)
    }

    /// A depth given as an absolute number of pixels
    pub fn pixels(value: f32) -> Self {
        Self::new(value, DepthConvention::Pixels)
    }

    pub fn value(self) -> f32 {
        self.value
    }

    pub fn convention(self) -> DepthConvention {
        self.convention
    }

    /// Resolves this depth into a cut depth for a shape of the given size.
    ///
    /// The result is not clamped: a depth of zero yields no cut and a depth
    /// beyond `size` yields a bite that swallows the whole shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use avatar_pile_core::layout::{Depth, DepthConvention};
    /// assert_eq!(Depth::percent(50.0).cut_depth(64.0), 32.0);
    /// assert_eq!(Depth::pixels(12.0).cut_depth(64.0), 12.0);
    /// assert_eq!(Depth::new(0.5, DepthConvention::FractionOrPixels).cut_depth(64.0), 32.0);
    /// assert_eq!(Depth::new(12.0, DepthConvention::FractionOrPixels).cut_depth(64.0), 12.0);
    /// ```
    pub fn cut_depth(self, size: f32) -> f32 {
        match self.convention {
            DepthConvention::Percentage => size * self.value / 100.0,
            DepthConvention::Pixels => self.value,
            DepthConvention::FractionOrPixels if self.value.fract() != 0.0 => size * self.value,
            DepthConvention::FractionOrPixels => self.value,
        }
    }
}

/// Input of the layout engine.
///
/// Values are expected to be validated already: `size > 0`, `gap >= 0` and
/// `instances >= 1`. The engine does not re-check them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    shape_kind: ShapeKind,
    size: f32,
    gap: f32,
    instances: usize,
    depth: Depth,
    use_full_end_cap: bool,
}

impl LayoutConfig {
    pub fn new(
        shape_kind: ShapeKind,
        size: f32,
        gap: f32,
        instances: usize,
        depth: Depth,
        use_full_end_cap: bool,
    ) -> Self {
        Self {
            shape_kind,
            size,
            gap,
            instances,
            depth,
            use_full_end_cap,
        }
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape_kind
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn instances(&self) -> usize {
        self.instances
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn use_full_end_cap(&self) -> bool {
        self.use_full_end_cap
    }
}

/// Quantities derived from a [`LayoutConfig`], shared by every avatar in a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGeometry {
    cut_depth: f32,
    cutout_diameter: f32,
    cutout_offset_x: f32,
    cutout_offset_y: f32,
    item_spacing: f32,
    corner_radius: f32,
    mask_corner_radius: f32,
}

impl DerivedGeometry {
    /// How far the bite intrudes into the base shape
    pub fn cut_depth(&self) -> f32 {
        self.cut_depth
    }

    /// Side length of the subtracted shape
    pub fn cutout_diameter(&self) -> f32 {
        self.cutout_diameter
    }

    pub fn cutout_offset_x(&self) -> f32 {
        self.cutout_offset_x
    }

    pub fn cutout_offset_y(&self) -> f32 {
        self.cutout_offset_y
    }

    /// Top-left corner of the subtracted shape relative to the base shape
    pub fn cutout_offset(&self) -> Point {
        Point::new(self.cutout_offset_x, self.cutout_offset_y)
    }

    /// Spacing between consecutive avatars; negative when they overlap
    pub fn item_spacing(&self) -> f32 {
        self.item_spacing
    }

    /// Corner radius of the base shape
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Corner radius of the subtracted shape
    pub fn mask_corner_radius(&self) -> f32 {
        self.mask_corner_radius
    }
}

/// Derives the mask geometry and item spacing for a configuration.
///
/// # Examples
///
/// ```
/// # use avatar_pile_core::{layout::{compute_derived_geometry, Depth, LayoutConfig}, shape::ShapeKind};
/// let config = LayoutConfig::new(ShapeKind::Circle, 64.0, 8.0, 3, Depth::percent(50.0), true);
/// let geometry = compute_derived_geometry(&config);
///
/// assert_eq!(geometry.cut_depth(), 32.0);
/// assert_eq!(geometry.cutout_diameter(), 80.0);
/// assert_eq!(geometry.cutout_offset_x(), 32.0);
/// assert_eq!(geometry.cutout_offset_y(), -8.0);
/// assert_eq!(geometry.item_spacing(), -24.0);
/// ```
pub fn compute_derived_geometry(config: &LayoutConfig) -> DerivedGeometry {
    let size = config.size;
    let gap = config.gap;
    let cut_depth = config.depth.cut_depth(size);

    DerivedGeometry {
        cut_depth,
        cutout_diameter: size + gap * 2.0,
        cutout_offset_x: size - cut_depth,
        cutout_offset_y: -gap,
        item_spacing: -(cut_depth - gap),
        corner_radius: config.shape_kind.corner_radius(size),
        mask_corner_radius: config.shape_kind.mask_corner_radius(size, gap),
    }
}

/// Which of the two avatar renditions an item uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvatarVariant {
    /// The whole base shape, uncut.
    Full,
    /// The base shape with the bite subtracted from its right side.
    Cutout,
}

/// Description of one avatar in its own local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDescriptor {
    index: usize,
    base: ShapePrimitive,
    bite: Option<ShapePrimitive>,
}

impl ShapeDescriptor {
    fn full(index: usize, base: ShapePrimitive) -> Self {
        Self {
            index,
            base,
            bite: None,
        }
    }

    fn cutout(index: usize, base: ShapePrimitive, bite: ShapePrimitive) -> Self {
        Self {
            index,
            base,
            bite: Some(bite),
        }
    }

    /// Position of this avatar in the row
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn variant(&self) -> AvatarVariant {
        if self.bite.is_some() {
            AvatarVariant::Cutout
        } else {
            AvatarVariant::Full
        }
    }

    /// Side length of the base shape
    pub fn bounding_size(&self) -> f32 {
        self.base.size()
    }

    /// Top-left corner of the base shape
    pub fn position(&self) -> Point {
        self.base.position()
    }

    /// Corner radius of the base shape
    pub fn corner_radius(&self) -> f32 {
        self.base.corner_radius()
    }

    /// The visible shape carrying the fill
    pub fn base(&self) -> &ShapePrimitive {
        &self.base
    }

    /// The shape subtracted from the base, present only for
    /// [`AvatarVariant::Cutout`]
    pub fn bite(&self) -> Option<&ShapePrimitive> {
        self.bite.as_ref()
    }
}

/// The ordered avatars of a pile and the spacing that lays them out.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarRow {
    items: Vec<ShapeDescriptor>,
    item_size: f32,
    item_spacing: f32,
}

impl AvatarRow {
    /// Avatars in creation order, left to right
    pub fn items(&self) -> &[ShapeDescriptor] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Spacing a horizontal auto layout puts between consecutive avatars
    pub fn item_spacing(&self) -> f32 {
        self.item_spacing
    }

    /// Returns the origin of the avatar frame at `index` relative to the row.
    pub fn item_origin(&self, index: usize) -> Point {
        Point::new(index as f32 * (self.item_size + self.item_spacing), 0.0)
    }

    /// Iterates over the avatars together with their origin in the row.
    pub fn placements(&self) -> impl Iterator<Item = (Point, &ShapeDescriptor)> {
        self.items
            .iter()
            .map(|item| (self.item_origin(item.index()), item))
    }

    /// Returns the smallest bounds containing every placed base shape.
    ///
    /// Bites are not included since they are never painted.
    pub fn bounds(&self) -> Bounds {
        self.placements()
            .map(|(origin, item)| item.base().bounds().translate(origin))
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default()
    }

    /// Returns the row size as laid out by [`AvatarRow::placements`].
    pub fn size(&self) -> Size {
        self.bounds().to_size()
    }

    /// Returns the origin that centers this row inside `viewport`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use avatar_pile_core::{geometry::{Bounds, Point, Size}, layout::{build_row, Depth, LayoutConfig}, shape::ShapeKind};
    /// let config = LayoutConfig::new(ShapeKind::Circle, 40.0, 4.0, 1, Depth::percent(40.0), true);
    /// let row = build_row(&config);
    ///
    /// let viewport = Bounds::new_from_top_left(Point::new(100.0, 0.0), Size::new(200.0, 100.0));
    /// assert_eq!(row.centered_in(viewport), Point::new(180.0, 30.0));
    /// ```
    pub fn centered_in(&self, viewport: Bounds) -> Point {
        let bounds = self.bounds();
        let top_left = Point::new(
            (viewport.width() - bounds.width()) / 2.0 + viewport.min_x(),
            (viewport.height() - bounds.height()) / 2.0 + viewport.min_y(),
        );
        top_left.sub_point(bounds.min_point())
    }
}

/// Describes every avatar of the pile, in creation order.
///
/// With `use_full_end_cap` the last avatar is [`AvatarVariant::Full`] so the
/// trailing edge of the pile shows an uncut shape; every other avatar is
/// [`AvatarVariant::Cutout`].
pub fn build_row(config: &LayoutConfig) -> AvatarRow {
    let geometry = compute_derived_geometry(config);
    debug!(
        shape = config.shape_kind.name(),
        instances = config.instances,
        cut_depth = geometry.cut_depth,
        item_spacing = geometry.item_spacing;
        "Building avatar row"
    );

    let base = ShapePrimitive::new(
        config.shape_kind,
        Point::default(),
        config.size,
        geometry.corner_radius,
    );
    let bite = ShapePrimitive::new(
        config.shape_kind,
        geometry.cutout_offset(),
        geometry.cutout_diameter,
        geometry.mask_corner_radius,
    );

    let items = (0..config.instances)
        .map(|index| {
            let is_end_cap = config.use_full_end_cap && index + 1 == config.instances;
            let item = if is_end_cap {
                ShapeDescriptor::full(index, base)
            } else {
                ShapeDescriptor::cutout(index, base, bite)
            };
            trace!(index = index, variant:? = item.variant(); "Avatar described");
            item
        })
        .collect();

    AvatarRow {
        items,
        item_size: config.size,
        item_spacing: geometry.item_spacing,
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    fn circle_config(instances: usize, use_full_end_cap: bool) -> LayoutConfig {
        LayoutConfig::new(
            ShapeKind::Circle,
            64.0,
            8.0,
            instances,
            Depth::percent(40.0),
            use_full_end_cap,
        )
    }

    fn variants(row: &AvatarRow) -> Vec<AvatarVariant> {
        row.items().iter().map(ShapeDescriptor::variant).collect()
    }

    #[test]
    fn test_circle_reference_geometry() {
        let geometry = compute_derived_geometry(&circle_config(3, true));

        assert!(approx_eq!(f32, geometry.cut_depth(), 25.6, epsilon = 0.001));
        assert_eq!(geometry.cutout_diameter(), 80.0);
        assert!(approx_eq!(f32, geometry.cutout_offset_x(), 38.4, epsilon = 0.001));
        assert_eq!(geometry.cutout_offset_y(), -8.0);
        assert!(approx_eq!(f32, geometry.item_spacing(), -17.6, epsilon = 0.001));
        assert_eq!(geometry.corner_radius(), 32.0);
        assert_eq!(geometry.mask_corner_radius(), 40.0);
    }

    #[test]
    fn test_circle_reference_row() {
        let row = build_row(&circle_config(3, true));

        assert_eq!(row.len(), 3);
        assert_eq!(
            variants(&row),
            vec![
                AvatarVariant::Cutout,
                AvatarVariant::Cutout,
                AvatarVariant::Full
            ]
        );
        assert!(approx_eq!(f32, row.item_spacing(), -17.6, epsilon = 0.001));
    }

    #[test]
    fn test_squircle_depth_conventions_diverge() {
        let pixels_heuristic = LayoutConfig::new(
            ShapeKind::Squircle,
            40.0,
            4.0,
            2,
            Depth::new(40.0, DepthConvention::FractionOrPixels),
            true,
        );
        let percentage = LayoutConfig::new(
            ShapeKind::Squircle,
            40.0,
            4.0,
            2,
            Depth::percent(40.0),
            true,
        );

        // An integer depth under the heuristic is an absolute pixel value
        let geometry = compute_derived_geometry(&pixels_heuristic);
        assert_eq!(geometry.cut_depth(), 40.0);
        assert_eq!(geometry.cutout_offset_x(), 0.0);
        assert_eq!(geometry.item_spacing(), -36.0);

        let geometry = compute_derived_geometry(&percentage);
        assert_eq!(geometry.cut_depth(), 16.0);
        assert_eq!(geometry.cutout_offset_x(), 24.0);
        assert_eq!(geometry.item_spacing(), -12.0);

        assert_eq!(geometry.corner_radius(), 14.0);
        assert_eq!(geometry.mask_corner_radius(), 18.0);
    }

    #[test]
    fn test_fraction_heuristic_uses_fraction_of_size() {
        let depth = Depth::new(0.4, DepthConvention::FractionOrPixels);
        assert!(approx_eq!(f32, depth.cut_depth(64.0), 25.6, epsilon = 0.001));
    }

    #[test]
    fn test_default_convention_is_percentage() {
        assert_eq!(DepthConvention::default(), DepthConvention::Percentage);
    }

    #[test]
    fn test_zero_depth_is_degenerate() {
        let config = LayoutConfig::new(ShapeKind::Circle, 64.0, 8.0, 3, Depth::percent(0.0), true);
        let geometry = compute_derived_geometry(&config);

        assert_eq!(geometry.cut_depth(), 0.0);
        assert_eq!(geometry.cutout_offset_x(), 64.0);
        // Items are separated by exactly the gap
        assert_eq!(geometry.item_spacing(), 8.0);
    }

    #[test]
    fn test_cut_depth_equal_to_gap_touches() {
        let config = LayoutConfig::new(ShapeKind::Circle, 64.0, 8.0, 2, Depth::pixels(8.0), true);
        assert_eq!(compute_derived_geometry(&config).item_spacing(), 0.0);
    }

    #[test]
    fn test_depth_beyond_size_is_not_clamped() {
        let config = LayoutConfig::new(ShapeKind::Circle, 40.0, 4.0, 2, Depth::percent(150.0), true);
        let geometry = compute_derived_geometry(&config);

        assert_eq!(geometry.cut_depth(), 60.0);
        assert_eq!(geometry.cutout_offset_x(), -20.0);
    }

    #[test]
    fn test_single_instance_with_end_cap_is_full() {
        let row = build_row(&circle_config(1, true));
        assert_eq!(variants(&row), vec![AvatarVariant::Full]);
        assert!(row.items()[0].bite().is_none());
    }

    #[test]
    fn test_without_end_cap_every_item_is_cut() {
        let row = build_row(&circle_config(4, false));
        assert_eq!(variants(&row), vec![AvatarVariant::Cutout; 4]);
    }

    #[test]
    fn test_descriptor_geometry() {
        let row = build_row(&circle_config(2, true));

        let cutout = &row.items()[0];
        assert_eq!(cutout.index(), 0);
        assert_eq!(cutout.bounding_size(), 64.0);
        assert!(cutout.position().is_zero());
        assert_eq!(cutout.corner_radius(), 32.0);

        let bite = cutout.bite().expect("cutout has a bite");
        assert_eq!(bite.size(), 80.0);
        assert!(approx_eq!(f32, bite.position().x(), 38.4, epsilon = 0.001));
        assert_eq!(bite.position().y(), -8.0);
        assert_eq!(bite.corner_radius(), 40.0);

        let full = &row.items()[1];
        assert_eq!(full.index(), 1);
        assert_eq!(full.base(), cutout.base());
    }

    #[test]
    fn test_item_origins_follow_spacing() {
        let row = build_row(&circle_config(3, true));

        assert!(row.item_origin(0).is_zero());
        assert!(approx_eq!(f32, row.item_origin(1).x(), 46.4, epsilon = 0.001));
        assert!(approx_eq!(f32, row.item_origin(2).x(), 92.8, epsilon = 0.001));
        assert_eq!(row.item_origin(2).y(), 0.0);
    }

    #[test]
    fn test_row_bounds() {
        let row = build_row(&circle_config(3, true));
        let size = row.size();

        // 3 * 64 - 2 * 17.6
        assert!(approx_eq!(f32, size.width(), 156.8, epsilon = 0.001));
        assert_eq!(size.height(), 64.0);
    }

    #[test]
    fn test_empty_row_bounds() {
        let row = build_row(&circle_config(0, true));
        assert!(row.is_empty());
        assert_eq!(row.bounds(), Bounds::default());
    }

    #[test]
    fn test_centered_in_viewport() {
        let row = build_row(&circle_config(2, true));
        let viewport = Bounds::new_from_top_left(Point::new(-50.0, 10.0), Size::new(300.0, 200.0));

        let origin = row.centered_in(viewport);
        let placed = row.bounds().translate(origin);

        let left_margin = placed.min_x() - viewport.min_x();
        let right_margin = viewport.max_x() - placed.max_x();
        assert!(approx_eq!(f32, left_margin, right_margin, epsilon = 0.001));
        assert!(approx_eq!(f32, placed.min_y(), 78.0, epsilon = 0.001));
    }

    #[test]
    fn test_engine_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LayoutConfig>();
        assert_send_sync::<DerivedGeometry>();
        assert_send_sync::<AvatarRow>();
    }
}
