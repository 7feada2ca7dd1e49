//! Decoding and preview rendering of NRRD (Nearly Raw Raster Data) files.
//!
//! An NRRD file is a text header followed by a raw or gzip-compressed
//! payload of typed samples. [`decode`] turns the bytes of such a file into
//! an [`NrrdVolume`] holding every sample as `f32`, and [`render_preview`]
//! draws a composite image of the volume: the three orthogonal mid-slices
//! of a 3D volume, or a 2D volume on its own.
//!
//! ```
//! use nrrd_preview::{decode, render_preview};
//! # use std::error::Error;
//!
//! # fn run() -> Result<(), Box<dyn Error>> {
//! let mut bytes = b"NRRD0004\ntype: uint8\nencoding: raw\nsizes: 4 4 2\n\n".to_vec();
//! bytes.extend_from_slice(&[1; 32]);
//! let volume = decode(&bytes)?;
//! assert_eq!(volume.dim(), &[4, 4, 2]);
//! let image = render_preview(&volume, 320, 200)?;
//! assert_eq!(image.as_bytes().len(), 320 * 200 * 4);
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! [`decode`]: ./fn.decode.html
//! [`NrrdVolume`]: ./volume/struct.NrrdVolume.html
//! [`render_preview`]: ./render/fn.render_preview.html
#![deny(missing_debug_implementations)]
#![warn(missing_docs, unused_extern_crates, trivial_casts, unused_results)]

#[macro_use]
extern crate quick_error;

pub mod error;
pub mod header;
pub mod payload;
pub mod render;
pub mod typedef;
mod util;
pub mod volume;

pub use crate::error::{NrrdError, RenderError, Result};
pub use crate::header::NrrdHeader;
pub use crate::render::options::RenderOptions;
pub use crate::render::palette::Palette;
pub use crate::render::{render_preview, render_preview_with_options, RasterImage};
pub use crate::typedef::{Encoding, NrrdType};
pub use crate::util::Endianness;
pub use crate::volume::slice::{Orientation, Slice};
pub use crate::volume::NrrdVolume;
#[cfg(feature = "ndarray_volumes")]
pub use crate::volume::ndarray::IntoNdArray;

/// Decode the complete bytes of an NRRD file into a volume.
///
/// # Errors
///
/// Any [`NrrdError`](./error/enum.NrrdError.html) raised while parsing the
/// header, decompressing the payload or reading its samples.
pub fn decode(bytes: &[u8]) -> Result<NrrdVolume> {
    NrrdVolume::from_bytes(bytes)
}
