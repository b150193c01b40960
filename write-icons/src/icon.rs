//! The in-memory icon: paths made of contours made of tagged points.

use icon_types::{BoundingBox, PointKind, TTIC_MAGIC};

use crate::{
    color::Color,
    error::Error,
    write::{IconWrite, IconWriter},
};

/// A vector icon, ready to be normalized and written.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    /// The region of the source drawing that maps onto the icon's extent.
    pub bounding_box: BoundingBox<f64>,
    pub paths: Vec<Path>,
    pub title: Option<String>,
}

/// A filled and/or stroked shape.
///
/// A path without contours is legal, and draws nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub line_join: LineJoin,
    pub contours: Vec<Contour>,
}

/// How the corners of a stroke are drawn.
///
/// This is stored in the tag bit of the encoded stroke width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineJoin {
    #[default]
    Miter,
    Bevel,
}

/// A closed sequence of points.
///
/// The first point is always an [anchor][PointKind::Anchor]. Contours are
/// created with a [`ContourBuilder`], and their points can not be added to
/// or removed once closed.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour(Vec<CurvePoint>);

/// A contour that is still being drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct ContourBuilder(Vec<CurvePoint>);

/// A point on or off the outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
    pub kind: PointKind,
}

impl Icon {
    /// The stroke width used when a shape does not specify one.
    pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

    /// Create an empty icon with a unit bounding box.
    pub fn new() -> Self {
        Icon {
            bounding_box: BoundingBox::new(0.0, 0.0, 1.0, 1.0),
            paths: Vec::new(),
            title: None,
        }
    }

    /// The total number of points in all contours of all paths.
    pub fn point_count(&self) -> usize {
        self.paths
            .iter()
            .flat_map(|path| path.contours.iter())
            .map(Contour::len)
            .sum()
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self::new()
    }
}

impl Path {
    /// Create a path with no contours.
    pub fn new(fill_color: Color, stroke_color: Color, stroke_width: f64) -> Self {
        Path {
            fill_color,
            stroke_color,
            stroke_width,
            line_join: LineJoin::default(),
            contours: Vec::new(),
        }
    }

    /// Set the line join style, returning the modified path.
    pub fn with_line_join(mut self, line_join: LineJoin) -> Self {
        self.line_join = line_join;
        self
    }

    /// Append contours to this path, returning the modified path.
    pub fn with_contours(mut self, contours: impl IntoIterator<Item = Contour>) -> Self {
        self.contours.extend(contours);
        self
    }
}

impl LineJoin {
    /// Parse an SVG `stroke-linejoin` value.
    ///
    /// Returns `None` for join styles the format cannot represent.
    pub fn from_svg(value: &str) -> Option<Self> {
        match value {
            "miter" => Some(LineJoin::Miter),
            "bevel" => Some(LineJoin::Bevel),
            _ => None,
        }
    }

    fn tag(self) -> bool {
        matches!(self, LineJoin::Bevel)
    }
}

impl Contour {
    /// A four point contour around a rectangle.
    ///
    /// The points run clockwise in a y-down system, which becomes
    /// counter-clockwise once the icon is normalized and y is flipped.
    pub fn rectangle(bbox: BoundingBox<f64>) -> Self {
        let mut builder = ContourBuilder::new(bbox.x, bbox.y);
        builder.line_to(bbox.x_max(), bbox.y);
        builder.line_to(bbox.x_max(), bbox.y_max());
        builder.line_to(bbox.x, bbox.y_max());
        builder.close()
    }

    /// The total number of points in this contour
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if this contour is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurvePoint> {
        self.0.iter()
    }

    pub(crate) fn points_mut(&mut self) -> impl Iterator<Item = &mut CurvePoint> {
        self.0.iter_mut()
    }
}

impl ContourBuilder {
    /// Begin a contour at an anchor point.
    pub fn new(x: f64, y: f64) -> Self {
        ContourBuilder(vec![CurvePoint::anchor(x, y)])
    }

    /// Append a point of any kind.
    pub fn push(&mut self, x: f64, y: f64, kind: PointKind) {
        self.0.push(CurvePoint::new(x, y, kind));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.push(x, y, PointKind::Anchor);
    }

    /// The number of points so far, including the starting anchor.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a contour starts with its first point.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finish the contour.
    pub fn close(self) -> Contour {
        Contour(self.0)
    }
}

impl CurvePoint {
    pub const fn new(x: f64, y: f64, kind: PointKind) -> Self {
        CurvePoint { x, y, kind }
    }

    pub const fn anchor(x: f64, y: f64) -> Self {
        Self::new(x, y, PointKind::Anchor)
    }
}

impl IconWrite for Icon {
    fn write_into(&self, writer: &mut IconWriter) -> Result<(), Error> {
        TTIC_MAGIC.write_into(writer)?;
        writer.write_count("paths", self.paths.len())?;
        self.paths.write_into(writer)
    }
}

impl IconWrite for Path {
    fn write_into(&self, writer: &mut IconWriter) -> Result<(), Error> {
        self.fill_color.write_into(writer)?;
        self.stroke_color.write_into(writer)?;
        writer.write_fixed(self.stroke_width, self.line_join.tag())?;
        writer.write_count("contours", self.contours.len())?;
        self.contours.write_into(writer)
    }
}

impl IconWrite for Contour {
    fn write_into(&self, writer: &mut IconWriter) -> Result<(), Error> {
        writer.write_count("points", self.len())?;
        self.0.write_into(writer)
    }
}

impl IconWrite for CurvePoint {
    fn write_into(&self, writer: &mut IconWriter) -> Result<(), Error> {
        writer.write_fixed(self.x, self.kind.x_tag())?;
        writer.write_fixed(self.y, self.kind.y_tag())
    }
}
