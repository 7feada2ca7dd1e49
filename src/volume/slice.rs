//! Orthogonal slicing of volumes.
//!
//! Volumes are stored with the width axis fastest, so the sample at
//! `(x, y, z)` of a `w × h × d` volume lives at `z·w·h + y·w + x`. Each
//! orientation fixes one of these axes and copies out the remaining plane.

use super::NrrdVolume;
use crate::error::{NrrdError, Result};
use std::fmt;

/// The three canonical cross-section orientations.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Orientation {
    /// Fixed depth (`z`), spanning width × height.
    Axial,
    /// Fixed height (`y`), spanning width × depth.
    Coronal,
    /// Fixed width (`x`), spanning height × depth.
    Sagittal,
}

impl Orientation {
    /// All orientations, in display order.
    pub const ALL: [Orientation; 3] = [
        Orientation::Axial,
        Orientation::Coronal,
        Orientation::Sagittal,
    ];

    /// Index of the volume axis this orientation holds fixed.
    pub fn axis(self) -> usize {
        match self {
            Orientation::Axial => 2,
            Orientation::Coronal => 1,
            Orientation::Sagittal => 0,
        }
    }

    /// Name of the coordinate held fixed.
    pub fn axis_name(self) -> char {
        match self {
            Orientation::Axial => 'z',
            Orientation::Coronal => 'y',
            Orientation::Sagittal => 'x',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Axial => "Axial",
            Orientation::Coronal => "Coronal",
            Orientation::Sagittal => "Sagittal",
        };
        f.write_str(name)
    }
}

/// A 2D plane of samples, row-major with `width` samples per row.
#[derive(Debug, PartialEq, Clone)]
pub struct Slice {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Slice {
    /// Create a slice from row-major samples.
    ///
    /// # Errors
    ///
    /// - `NrrdError::IncompatibleShape` if `data` does not hold exactly
    ///   `width × height` samples.
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if width.checked_mul(height) != Some(data.len()) {
            return Err(NrrdError::IncompatibleShape);
        }
        Ok(Slice {
            width,
            height,
            data,
        })
    }

    /// Treat a two-dimensional volume as a single slice.
    pub fn from_2d(volume: &NrrdVolume) -> Result<Self> {
        match volume.dim() {
            &[w, h] => Slice::new(w, h, volume.samples().to_vec()),
            dim => Err(NrrdError::IncorrectVolumeDimensionality(2, dim.len())),
        }
    }

    /// Copy out the plane of a three-dimensional volume at `index` along the
    /// axis fixed by `orientation`.
    ///
    /// # Errors
    ///
    /// - `NrrdError::IncorrectVolumeDimensionality` if the volume is not 3D.
    /// - `NrrdError::OutOfBounds` if `index` exceeds the fixed axis.
    pub fn extract(volume: &NrrdVolume, orientation: Orientation, index: usize) -> Result<Self> {
        let (w, h, d) = match volume.dim() {
            &[w, h, d] => (w, h, d),
            dim => return Err(NrrdError::IncorrectVolumeDimensionality(3, dim.len())),
        };
        if index >= volume.dim()[orientation.axis()] {
            let mut coords = vec![0; 3];
            coords[orientation.axis()] = index;
            return Err(NrrdError::OutOfBounds(coords));
        }

        let samples = volume.samples();
        let at = |x: usize, y: usize, z: usize| samples[z * w * h + y * w + x];
        let slice = match orientation {
            Orientation::Axial => {
                let z = index;
                let data = (0..h)
                    .flat_map(|y| (0..w).map(move |x| (x, y)))
                    .map(|(x, y)| at(x, y, z))
                    .collect();
                Slice::new(w, h, data)?
            }
            Orientation::Coronal => {
                let y = index;
                let data = (0..d)
                    .flat_map(|z| (0..w).map(move |x| (x, z)))
                    .map(|(x, z)| at(x, y, z))
                    .collect();
                Slice::new(w, d, data)?
            }
            Orientation::Sagittal => {
                let x = index;
                let data = (0..d)
                    .flat_map(|z| (0..h).map(move |y| (y, z)))
                    .map(|(y, z)| at(x, y, z))
                    .collect();
                Slice::new(h, d, data)?
            }
        };
        Ok(slice)
    }

    /// Index of the middle plane along the axis `orientation` fixes.
    pub fn mid_index(volume: &NrrdVolume, orientation: Orientation) -> Option<usize> {
        volume.dim().get(orientation.axis()).map(|n| n / 2)
    }

    /// Number of samples per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the slice holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The row-major samples.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The sample at column `x` of row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Orientation, Slice};
    use crate::error::NrrdError;
    use crate::volume::NrrdVolume;

    /// A 3×4×5 volume whose voxel value encodes its coordinates as `xyz`.
    fn coded_volume() -> NrrdVolume {
        let mut bytes = b"NRRD0004\ntype: short\nsizes: 3 4 5\n\n".to_vec();
        for z in 0..5i16 {
            for y in 0..4i16 {
                for x in 0..3i16 {
                    bytes.extend_from_slice(&(x * 100 + y * 10 + z).to_le_bytes());
                }
            }
        }
        NrrdVolume::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn axial() {
        let volume = coded_volume();
        let slice = Slice::extract(&volume, Orientation::Axial, 2).unwrap();
        assert_eq!((slice.width(), slice.height()), (3, 4));
        assert_eq!(slice.get(0, 0), Some(2.));
        assert_eq!(slice.get(2, 3), Some(232.));
        assert_eq!(slice.get(1, 2), Some(122.));
    }

    #[test]
    fn coronal() {
        let volume = coded_volume();
        let slice = Slice::extract(&volume, Orientation::Coronal, 1).unwrap();
        assert_eq!((slice.width(), slice.height()), (3, 5));
        assert_eq!(slice.get(2, 4), Some(214.));
        assert_eq!(slice.get(0, 3), Some(13.));
    }

    #[test]
    fn sagittal() {
        let volume = coded_volume();
        let slice = Slice::extract(&volume, Orientation::Sagittal, 2).unwrap();
        assert_eq!((slice.width(), slice.height()), (4, 5));
        assert_eq!(slice.get(3, 4), Some(234.));
        assert_eq!(slice.get(1, 0), Some(210.));
    }

    #[test]
    fn mid_indices() {
        let volume = coded_volume();
        assert_eq!(Slice::mid_index(&volume, Orientation::Axial), Some(2));
        assert_eq!(Slice::mid_index(&volume, Orientation::Coronal), Some(2));
        assert_eq!(Slice::mid_index(&volume, Orientation::Sagittal), Some(1));
    }

    #[test]
    fn out_of_bounds() {
        let volume = coded_volume();
        assert!(matches!(
            Slice::extract(&volume, Orientation::Axial, 5),
            Err(NrrdError::OutOfBounds(_))
        ));
    }

    #[test]
    fn wrong_rank() {
        let bytes = b"NRRD0004\ntype: uchar\nsizes: 2 2\n\n\x00\x01\x02\x03";
        let volume = NrrdVolume::from_bytes(bytes).unwrap();
        assert!(matches!(
            Slice::extract(&volume, Orientation::Axial, 0),
            Err(NrrdError::IncorrectVolumeDimensionality(3, 2))
        ));
        let slice = Slice::from_2d(&volume).unwrap();
        assert_eq!(slice.get(1, 1), Some(3.));
    }
}
