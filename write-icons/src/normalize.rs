//! Mapping an icon's bounding box onto the canonical icon extent.
//!
//! Icons are stored centered on the origin, spanning -2 to 2 on both axes,
//! with y pointing up. Source drawings use arbitrary units with y pointing
//! down; the icon's bounding box decides which region of the drawing ends
//! up in the icon.

use icon_types::BoundingBox;
use kurbo::{Affine, Point, Rect};

use crate::{error::Error, icon::Icon};

/// Half the width (and height) of a normalized icon.
pub const HALF_EXTENT: f64 = 2.0;

/// The transform from drawing coordinates to normalized icon coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalization {
    translate: Affine,
    scale: Affine,
    width_scale: f64,
}

impl Normalization {
    /// Compute the transform that maps `bbox` onto the icon extent.
    ///
    /// Returns an error if the box has no area.
    pub fn for_bounds(bbox: BoundingBox<f64>) -> Result<Self, Error> {
        let degenerate = |v: f64| v == 0.0 || !v.is_finite();
        if degenerate(bbox.width)
            || degenerate(bbox.height)
            || !bbox.x.is_finite()
            || !bbox.y.is_finite()
        {
            return Err(Error::DegenerateBoundingBox {
                width: bbox.width,
                height: bbox.height,
            });
        }
        let x_offset = -bbox.x - bbox.width * 0.5;
        let y_offset = -bbox.y - bbox.height * 0.5;
        let width_scale = 2.0 * HALF_EXTENT / bbox.width;
        // negative, to flip the y axis
        let height_scale = -2.0 * HALF_EXTENT / bbox.height;
        Ok(Normalization {
            translate: Affine::translate((x_offset, y_offset)),
            scale: Affine::scale_non_uniform(width_scale, height_scale),
            width_scale,
        })
    }

    /// The combined transform, as a single affine.
    pub fn affine(&self) -> Affine {
        self.scale * self.translate
    }

    /// Map a point into icon coordinates.
    pub fn map_point(&self, x: f64, y: f64) -> (f64, f64) {
        // applied in two steps, so that x' = (x + x_offset) * width_scale exactly
        let pt = self.scale * (self.translate * Point::new(x, y));
        (pt.x, pt.y)
    }

    /// Map a stroke width into icon units.
    pub fn map_stroke_width(&self, width: f64) -> f64 {
        width * self.width_scale
    }

    /// Map a box into icon coordinates, keeping its origin at its minimum corner.
    pub fn map_bounds(&self, bbox: BoundingBox<f64>) -> BoundingBox<f64> {
        let rect = Rect::new(bbox.x, bbox.y, bbox.x_max(), bbox.y_max());
        let mapped = self.affine().transform_rect_bbox(rect);
        BoundingBox::new(mapped.x0, mapped.y0, mapped.width(), mapped.height())
    }
}

impl Icon {
    /// Transform the icon in place so that its bounding box spans the
    /// canonical icon extent.
    ///
    /// All points, all stroke widths and the bounding box itself are
    /// transformed. On error the icon is left unchanged.
    pub fn normalize(&mut self) -> Result<(), Error> {
        let normalization = Normalization::for_bounds(self.bounding_box)?;
        log::debug!(
            "normalizing {} paths from {:?}",
            self.paths.len(),
            self.bounding_box
        );

        for path in self.paths.iter_mut() {
            path.stroke_width = normalization.map_stroke_width(path.stroke_width);
            for point in path.contours.iter_mut().flat_map(|c| c.points_mut()) {
                (point.x, point.y) = normalization.map_point(point.x, point.y);
            }
        }
        self.bounding_box = normalization.map_bounds(self.bounding_box);
        Ok(())
    }
}
