//! SVG rendering of avatar rows.
//!
//! Every avatar becomes a group translated to its place in the row. A cut
//! avatar is drawn through an SVG `<mask>`: the base shape painted white
//! keeps the fill visible, the enlarged bite painted black hides it, which
//! leaves exactly `base - bite` on screen.

use std::io::Write;

use log::{debug, info};
use svg::{
    Document,
    node::element::{self as svg_element, Definitions, Group, Mask, Rectangle},
};

use avatar_pile_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    layout::{AvatarRow, AvatarVariant, ShapeDescriptor},
    shape::ShapePrimitive,
};

use super::{Error, Exporter};
use crate::config::StyleConfig;

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given style instead of the default one.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Builds an exporter writing to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a configured color is invalid.
    pub fn build<W: Write>(self, writer: W) -> Result<Svg<W>, Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        Ok(Svg {
            writer,
            fill: style.fill_color().map_err(Error::Render)?,
            background: style.background_color().map_err(Error::Render)?,
            padding: style.padding(),
        })
    }
}

/// SVG exporter writing one document per exported row.
pub struct Svg<W> {
    writer: W,
    fill: Color,
    background: Option<Color>,
    padding: f32,
}

impl<W: Write> Svg<W> {
    /// Renders `row` into a document, centered with the configured padding.
    pub fn render_row(&self, row: &AvatarRow) -> Document {
        let svg_size = row.size().padded(self.padding);
        let canvas = Bounds::new_from_top_left(Point::default(), svg_size);
        let origin = row.centered_in(canvas);
        debug!(
            width = svg_size.width(),
            height = svg_size.height(),
            items = row.len();
            "Rendering avatar row"
        );

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", svg_size.width(), svg_size.height()),
            )
            .set("width", svg_size.width())
            .set("height", svg_size.height());

        if let Some(background) = &self.background {
            doc = doc.add(self.render_background(svg_size, background));
        }

        let mut defs = Definitions::new();
        let mut pile = Group::new().set("class", "avatar-pile");
        for (item_origin, item) in row.placements() {
            let position = origin.add_point(item_origin);
            if let Some(mask) = self.render_mask(item) {
                defs = defs.add(mask);
            }
            pile = pile.add(self.render_avatar(item, position));
        }

        doc.add(defs).add(pile)
    }

    /// Consumes the exporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render_background(&self, size: Size, color: &Color) -> Rectangle {
        svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", color)
            .set("fill-opacity", color.alpha())
    }

    fn render_avatar(&self, item: &ShapeDescriptor, position: Point) -> Group {
        let class = match item.variant() {
            AvatarVariant::Full => "avatar avatar-full",
            AvatarVariant::Cutout => "avatar avatar-cutout",
        };

        let mut fill = rounded_rect(item.base())
            .set("fill", &self.fill)
            .set("fill-opacity", self.fill.alpha());
        if item.bite().is_some() {
            fill = fill.set("mask", format!("url(#{})", mask_id(item)));
        }

        svg_element::Group::new()
            .set("class", class)
            .set(
                "transform",
                format!("translate({}, {})", position.x(), position.y()),
            )
            .add(fill)
    }

    /// Builds the `base - bite` mask for a cut avatar.
    fn render_mask(&self, item: &ShapeDescriptor) -> Option<Mask> {
        let bite = item.bite()?;
        let keep = rounded_rect(item.base()).set("fill", "white");
        let remove = rounded_rect(bite).set("fill", "black");

        // The default mask region already covers the masked base shape.
        Some(
            svg_element::Mask::new()
                .set("id", mask_id(item))
                .add(keep)
                .add(remove),
        )
    }
}

impl<W: Write> Exporter for Svg<W> {
    fn export_row(&mut self, row: &AvatarRow) -> Result<(), Error> {
        let doc = self.render_row(row);
        write!(self.writer, "{doc}").map_err(Error::Io)?;
        info!(items = row.len(); "SVG document written");
        Ok(())
    }
}

fn mask_id(item: &ShapeDescriptor) -> String {
    format!("avatar-cutout-{}", item.index())
}

fn rounded_rect(shape: &ShapePrimitive) -> Rectangle {
    svg_element::Rectangle::new()
        .set("x", shape.position().x())
        .set("y", shape.position().y())
        .set("width", shape.size())
        .set("height", shape.size())
        .set("rx", shape.corner_radius())
        .set("ry", shape.corner_radius())
}
