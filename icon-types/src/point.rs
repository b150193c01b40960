/// Two dimensional point with a generic coordinate type.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
}

/// The structural role of a point within a contour.
///
/// The kind is not stored explicitly in an icon file; it is recovered from
/// the tag bits of the point's two coordinates (see [`PointKind::x_tag`]
/// and [`PointKind::y_tag`]).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointKind {
    /// An on-curve point ending a line or curve segment.
    #[default]
    Anchor,
    /// The first off-curve point of a cubic bezier segment.
    CubicControl1,
    /// The second off-curve point of a cubic bezier segment.
    CubicControl2,
    /// The off-curve point of a quadratic bezier segment.
    QuadraticControl,
}

impl<T> Point<T> {
    /// Creates a new point with the given x and y coordinates.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl PointKind {
    /// `true` if the x coordinate of a point of this kind carries the tag bit.
    pub const fn x_tag(self) -> bool {
        matches!(self, PointKind::CubicControl1 | PointKind::QuadraticControl)
    }

    /// `true` if the y coordinate of a point of this kind carries the tag bit.
    pub const fn y_tag(self) -> bool {
        matches!(self, PointKind::CubicControl2 | PointKind::QuadraticControl)
    }

    /// Recover the kind of a point from the tag bits of its coordinates.
    pub const fn from_tags(x_tag: bool, y_tag: bool) -> Self {
        match (x_tag, y_tag) {
            (false, false) => PointKind::Anchor,
            (true, false) => PointKind::CubicControl1,
            (false, true) => PointKind::CubicControl2,
            (true, true) => PointKind::QuadraticControl,
        }
    }

    /// `true` for points that lie on the outline.
    pub const fn is_on_curve(self) -> bool {
        matches!(self, PointKind::Anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::PointKind;

    #[test]
    fn tags() {
        let kinds = [
            (PointKind::Anchor, false, false),
            (PointKind::CubicControl1, true, false),
            (PointKind::CubicControl2, false, true),
            (PointKind::QuadraticControl, true, true),
        ];
        for (kind, x_tag, y_tag) in kinds {
            assert_eq!(kind.x_tag(), x_tag, "{kind:?}");
            assert_eq!(kind.y_tag(), y_tag, "{kind:?}");
            assert_eq!(PointKind::from_tags(x_tag, y_tag), kind);
        }
        assert!(PointKind::Anchor.is_on_curve());
        assert!(!PointKind::QuadraticControl.is_on_curve());
    }
}
