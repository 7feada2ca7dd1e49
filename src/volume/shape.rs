//! Validated volume shape.
//!
//! NRRD stores the sizes of every axis in the `sizes` field, fastest axis
//! first. For previews, the axes are interpreted as width, height, depth
//! and an optional fourth, channel-like axis.
use crate::error::{NrrdError, Result};

/// A validated NRRD volume shape: at least one axis, and an element count
/// which fits in `usize`.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Shape {
    dims: Vec<usize>,
    count: usize,
}

impl Shape {
    /// Validate and create a new volume shape.
    ///
    /// # Example
    ///
    /// ```
    /// # use nrrd_preview::volume::shape::Shape;
    /// let shape = Shape::new(vec![64, 32, 16])?;
    /// assert_eq!(shape.as_ref(), &[64, 32, 16]);
    /// assert_eq!(shape.element_count(), 32768);
    /// # Ok::<(), nrrd_preview::NrrdError>(())
    /// ```
    pub fn new(dims: Vec<usize>) -> Result<Self> {
        if dims.is_empty() {
            return Err(NrrdError::MissingDimensions);
        }
        let count = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or(NrrdError::DimensionOverflow)?;
        Ok(Shape { dims, count })
    }

    /// Retrieve the rank of this shape (dimensionality)
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Calculate the number of elements in this shape
    pub fn element_count(&self) -> usize {
        self.count
    }

    /// Size of the first axis.
    pub fn width(&self) -> usize {
        self.dims[0]
    }

    /// Size of the second axis, 1 for one-dimensional shapes.
    pub fn height(&self) -> usize {
        self.dims.get(1).cloned().unwrap_or(1)
    }

    /// Size of the third axis, 1 for shapes of rank below 3.
    pub fn depth(&self) -> usize {
        self.dims.get(2).cloned().unwrap_or(1)
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        &self.dims
    }
}
