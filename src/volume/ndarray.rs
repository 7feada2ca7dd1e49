//! Interfaces and implementations specific to integration with `ndarray`.
//!
//! This module introduces the trait [`IntoNdArray`], which maps a decoded
//! volume into an [`Array`] with a dynamic number of dimensions.
//!
//! #### Note on memory order
//!
//! NRRD stores the first axis of `sizes` fastest, which is column major
//! order (also called Fortran order). The resulting array keeps this memory
//! order, so `array[[x, y, z]]` addresses the same voxel as
//! `volume.get_f32(&[x, y, z])`.
//!
//! [`IntoNdArray`]: ./trait.IntoNdArray.html
//! [`Array`]: ../../../ndarray/type.Array.html
//!
use crate::error::{NrrdError, Result};
use crate::volume::NrrdVolume;
use ndarray::{Array, IxDyn, ShapeBuilder};

/// Trait for volumes which can be converted to an ndarray.
///
/// Please see the [module-level documentation](index.html) for more details.
pub trait IntoNdArray {
    /// Consume the volume into an ndarray with the same number of dimensions.
    fn into_ndarray(self) -> Result<Array<f32, IxDyn>>;
}

impl IntoNdArray for NrrdVolume {
    fn into_ndarray(self) -> Result<Array<f32, IxDyn>> {
        let dim = self.dim().to_vec();
        Array::from_shape_vec(IxDyn(&dim).f(), self.into_samples())
            .map_err(|_| NrrdError::IncompatibleShape)
    }
}
