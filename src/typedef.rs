//! This module contains the closed set of element types and payload
//! encodings understood by the decoder. Type names from the header are
//! resolved once into a `NrrdType`, which also provides a safe means of
//! reading sample values.

use crate::error::{NrrdError, Result};
use crate::util::Endianness;
use crate::volume::element::read_samples;
use std::fmt;

/// Data type for representing an NRRD sample type in a volume.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum NrrdType {
    /// signed char.
    Int8,
    /// unsigned char.
    Uint8,
    /// signed short.
    Int16,
    /// unsigned short.
    Uint16,
    /// signed int.
    Int32,
    /// unsigned int.
    Uint32,
    /// 32 bit float.
    Float32,
    /// 64 bit float = double.
    Float64,
    /// Any type name this crate does not recognize. Samples are read as
    /// `uint8`.
    Unknown,
}

impl NrrdType {
    /// Resolve a header type name, including the usual C-style aliases.
    /// Case is ignored and runs of whitespace are collapsed.
    pub fn from_name(name: &str) -> NrrdType {
        let name = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();
        match name.as_str() {
            "signed char" | "int8" | "int8_t" => NrrdType::Int8,
            "uchar" | "unsigned char" | "uint8" | "uint8_t" => NrrdType::Uint8,
            "short" | "short int" | "signed short" | "signed short int" | "int16"
            | "int16_t" => NrrdType::Int16,
            "ushort" | "unsigned short" | "unsigned short int" | "uint16" | "uint16_t" => {
                NrrdType::Uint16
            }
            "int" | "signed int" | "int32" | "int32_t" => NrrdType::Int32,
            "uint" | "unsigned int" | "uint32" | "uint32_t" => NrrdType::Uint32,
            "float" | "float32" => NrrdType::Float32,
            "double" | "float64" => NrrdType::Float64,
            _ => NrrdType::Unknown,
        }
    }

    /// Retrieve the size of an element of this data type, in bytes.
    pub fn size_of(self) -> usize {
        use NrrdType::*;
        match self {
            Int8 | Uint8 | Unknown => 1,
            Int16 | Uint16 => 2,
            Int32 | Uint32 | Float32 => 4,
            Float64 => 8,
        }
    }

    /// Read `count` samples of this type from `bytes`, widening each one to
    /// `f32`. A buffer holding fewer than `count` elements is padded with
    /// zeros.
    pub fn read_samples(
        self,
        bytes: &[u8],
        count: usize,
        endianness: Endianness,
    ) -> Result<Vec<f32>> {
        match self {
            NrrdType::Int8 => read_samples::<i8, _>(bytes, count, endianness),
            NrrdType::Uint8 | NrrdType::Unknown => read_samples::<u8, _>(bytes, count, endianness),
            NrrdType::Int16 => read_samples::<i16, _>(bytes, count, endianness),
            NrrdType::Uint16 => read_samples::<u16, _>(bytes, count, endianness),
            NrrdType::Int32 => read_samples::<i32, _>(bytes, count, endianness),
            NrrdType::Uint32 => read_samples::<u32, _>(bytes, count, endianness),
            NrrdType::Float32 => read_samples::<f32, _>(bytes, count, endianness),
            NrrdType::Float64 => read_samples::<f64, _>(bytes, count, endianness),
        }
    }
}

impl fmt::Display for NrrdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NrrdType::Int8 => "int8",
            NrrdType::Uint8 => "uint8",
            NrrdType::Int16 => "int16",
            NrrdType::Uint16 => "uint16",
            NrrdType::Int32 => "int32",
            NrrdType::Uint32 => "uint32",
            NrrdType::Float32 => "float",
            NrrdType::Float64 => "double",
            NrrdType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// The payload encodings this crate can decode.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Encoding {
    /// Samples follow the header verbatim.
    Raw,
    /// Samples are wrapped in a single gzip member.
    Gzip,
}

impl Encoding {
    /// Resolve the value of an `encoding` header field, ignoring case.
    ///
    /// # Errors
    ///
    /// - `NrrdError::UnsupportedEncoding` for anything but `raw`, `gzip` or `gz`.
    pub fn from_name(name: &str) -> Result<Encoding> {
        let trimmed = name.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "raw" => Ok(Encoding::Raw),
            "gzip" | "gz" => Ok(Encoding::Gzip),
            _ => Err(NrrdError::UnsupportedEncoding(trimmed.to_string())),
        }
    }
}
