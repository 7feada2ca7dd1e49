//! This module defines the in-memory NRRD volume and the decoding pipeline
//! producing it from the bytes of a file.
//! An integration with `ndarray` is available through the `ndarray_volumes`
//! feature of this crate.

pub mod element;
#[cfg(feature = "ndarray_volumes")]
pub mod ndarray;
pub mod shape;
pub mod slice;

use self::shape::Shape;
use crate::error::{NrrdError, Result};
use crate::header::NrrdHeader;
use crate::payload::decode_payload;
use crate::typedef::NrrdType;
use crate::util::{coords_to_index, nb_bytes_for_data};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// A decoded NRRD volume held in memory. Every sample is widened to `f32`,
/// whatever the declared type (64-bit types lose precision). The volume is
/// read-only once decoded.
#[derive(Debug, PartialEq, Clone)]
pub struct NrrdVolume {
    header: NrrdHeader,
    shape: Shape,
    datatype: NrrdType,
    samples: Vec<f32>,
}

impl NrrdVolume {
    /// Decode a complete NRRD file held in memory.
    ///
    /// # Example
    ///
    /// ```
    /// use nrrd_preview::NrrdVolume;
    /// # use nrrd_preview::Result;
    ///
    /// # fn run() -> Result<()> {
    /// let mut bytes = b"NRRD0004\ntype: uint8\nsizes: 2 2\n\n".to_vec();
    /// bytes.extend_from_slice(&[0, 1, 2, 3]);
    /// let volume = NrrdVolume::from_bytes(&bytes)?;
    /// assert_eq!(volume.dim(), &[2, 2]);
    /// assert_eq!(volume.samples(), &[0., 1., 2., 3.]);
    /// # Ok(())
    /// # }
    /// # run().unwrap();
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (header, body) = NrrdHeader::from_bytes(bytes)?;
        let shape = Shape::new(header.sizes()?)?;
        let datatype = header.data_type();
        if datatype == NrrdType::Unknown {
            warn!("unknown type `{}`, reading samples as uint8", header.type_name());
        }
        let encoding = header.encoding()?;
        let endianness = header.endianness();
        let skip = header.byte_skip()?;

        let count = shape.element_count();
        let nbytes = nb_bytes_for_data(count, datatype.size_of())?;
        debug!(
            "decoding {:?} volume of type {} ({:?}, {:?})",
            shape.as_ref(),
            datatype,
            encoding,
            endianness
        );

        let expected_len = nbytes
            .checked_add(skip.unwrap_or(0))
            .ok_or(NrrdError::DimensionOverflow)?;
        let payload = decode_payload(body, encoding, expected_len)?;
        let data = match skip {
            Some(n) => payload.get(n..).unwrap_or(&[]),
            None => &payload[payload.len().saturating_sub(nbytes)..],
        };
        let samples = datatype.read_samples(data, count, endianness)?;

        Ok(NrrdVolume {
            header,
            shape,
            datatype,
            samples,
        })
    }

    /// Read and decode an NRRD file from the file system.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// The header the volume was decoded from.
    pub fn header(&self) -> &NrrdHeader {
        &self.header
    }

    /// The validated shape of the volume.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Get the dimensions of the volume, fastest axis first.
    pub fn dim(&self) -> &[usize] {
        self.shape.as_ref()
    }

    /// Get the volume's number of dimensions.
    pub fn dimensionality(&self) -> usize {
        self.shape.rank()
    }

    /// Get this volume's data type.
    pub fn data_type(&self) -> NrrdType {
        self.datatype
    }

    /// The type name as written in the header.
    pub fn type_name(&self) -> &str {
        self.header.type_name()
    }

    /// All samples, first axis fastest.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Move the samples out of the volume, discarding the header.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Fetch a single voxel's value in the given voxel index coordinates.
    ///
    /// # Errors
    ///
    /// - `NrrdError::IncorrectVolumeDimensionality` if the number of
    ///   coordinates differs from the volume's rank.
    /// - `NrrdError::OutOfBounds` if the given coordinates surpass this
    ///   volume's boundaries.
    pub fn get_f32(&self, coords: &[usize]) -> Result<f32> {
        let index = coords_to_index(coords, self.dim())?;
        Ok(self.samples[index])
    }
}
