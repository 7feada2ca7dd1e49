//! This module defines the data element API, which reads typed samples out
//! of a decoded payload and widens them to the canonical `f32` form.
use crate::error::{NrrdError, Result};
use crate::typedef::NrrdType;
use byteordered::{ByteOrdered, Endian};
use log::warn;
use num_traits::cast::AsPrimitive;
use std::io::Read;
use std::mem::size_of;

/// Trait type for characterizing an NRRD data element, implemented for
/// the primitive numeric types a payload can hold.
pub trait DataElement: 'static + Sized + Copy + AsPrimitive<f32> {
    /// The `type` mapped to the type T
    const DATA_TYPE: NrrdType;

    /// Read a single element from the given byte source.
    fn from_raw<R, E>(src: R, endianness: E) -> Result<Self>
    where
        R: Read,
        E: Endian;
}

/// Read `count` elements of type `T` from `bytes` and widen them to `f32`.
/// Reads never go past the end of the buffer; missing trailing elements are
/// filled with zeros.
///
/// # Errors
///
/// - `NrrdError::DimensionOverflow` if `count` samples cannot be allocated.
pub fn read_samples<T, E>(bytes: &[u8], count: usize, endianness: E) -> Result<Vec<f32>>
where
    T: DataElement,
    E: Endian + Copy,
{
    let width = size_of::<T>();
    let available = bytes.len() / width;
    if available < count {
        warn!(
            "payload holds {} of {} {} samples, padding with zeros",
            available,
            count,
            T::DATA_TYPE
        );
    }

    let mut samples: Vec<f32> = Vec::new();
    samples
        .try_reserve_exact(count)
        .map_err(|_| NrrdError::DimensionOverflow)?;
    for chunk in bytes.chunks_exact(width).take(count) {
        let value = T::from_raw(chunk, endianness)?;
        samples.push(value.as_());
    }
    samples.resize(count, 0.);
    Ok(samples)
}

impl DataElement for u8 {
    const DATA_TYPE: NrrdType = NrrdType::Uint8;
    fn from_raw<R, E>(src: R, _: E) -> Result<Self>
    where
        R: Read,
        E: Endian,
    {
        ByteOrdered::native(src).read_u8().map_err(From::from)
    }
}
impl DataElement for i8 {
    const DATA_TYPE: NrrdType = NrrdType::Int8;
    fn from_raw<R, E>(src: R, _: E) -> Result<Self>
    where
        R: Read,
        E: Endian,
    {
        ByteOrdered::native(src).read_i8().map_err(From::from)
    }
}
impl DataElement for u16 {
    const DATA_TYPE: NrrdType = NrrdType::Uint16;
    fn from_raw<R, E>(src: R, e: E) -> Result<Self>
    where
        R: Read,
        E: Endian,
    {
        e.read_u16(src).map_err(From::from)
    }
}
impl DataElement for i16 {
    const DATA_TYPE: NrrdType = NrrdType::Int16;
    fn from_raw<R, E>(src: R, e: E) -> Result<Self>
    where
        R: Read,
        E: Endian,
    {
        e.read_i16(src).map_err(From::from)
    }
}
impl DataElement for u32 {
    const DATA_TYPE: NrrdType = NrrdType::Uint32;
    fn from_raw<R, E>(src: R, e: E) -> Result<Self>
    where
        R: Read,
        E: Endian,
    {
        e.read_u32(src).map_err(From::from)
    }
}
impl DataElement for i32 {
    const DATA_TYPE: NrrdType = NrrdType::Int32;
    fn from_raw<R, E>(src: R, e: E) -> Result<Self>
    where
        R: Read,
        E: Endian,
    {
        e.read_i32(src).map_err(From::from)
    }
}
impl DataElement for f32 {
    const DATA_TYPE: NrrdType = NrrdType::Float32;
    fn from_raw<R, E>(src: R, e: E) -> Result<Self>
    where
        R: Read,
        E: Endian,
    {
        e.read_f32(src).map_err(From::from)
    }
}
impl DataElement for f64 {
    const DATA_TYPE: NrrdType = NrrdType::Float64;
    fn from_raw<R, E>(src: R, e: E) -> Result<Self>
    where
        R: Read,
        E: Endian,
    {
        e.read_f64(src).map_err(From::from)
    }
}
