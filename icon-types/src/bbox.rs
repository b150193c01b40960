use core::ops::Add;

/// The origin and extent of a rectangular region.
///
/// Unlike a min/max box this keeps the `(x, y, width, height)` form used by
/// SVG `rect` elements, which is where icon bounds come from.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    /// The left side of the region.
    pub x: T,
    /// The top of the region, in the y-down coordinate system of SVG.
    pub y: T,
    /// Extent in the x direction.
    pub width: T,
    /// Extent in the y direction.
    pub height: T,
}

impl<T> BoundingBox<T> {
    /// Creates a new box from its origin and extent.
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T> BoundingBox<T>
where
    T: Add<Output = T> + Copy,
{
    /// The right side of the region.
    pub fn x_max(&self) -> T {
        self.x + self.width
    }

    /// The bottom of the region.
    pub fn y_max(&self) -> T {
        self.y + self.height
    }
}
