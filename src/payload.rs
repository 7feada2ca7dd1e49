//! Payload decoding: raw bodies are passed through, gzip bodies have their
//! member framing peeled by hand and the inner raw deflate stream inflated.

use crate::error::{NrrdError, Result};
use crate::typedef::Encoding;
use byteordered::ByteOrdered;
use flate2::{Crc, Decompress, FlushDecompress};
use log::{debug, warn};
use std::borrow::Cow;

/// The two leading bytes of a gzip member.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

const GZIP_HEADER_LEN: usize = 10;
const GZIP_TRAILER_LEN: usize = 8;
/// Lower bound on the inflate buffer, as a multiple of the compressed size.
const EXPANSION_FACTOR: usize = 20;

const FHCRC: u8 = 0x02;
const FEXTRA: u8 = 0x04;
const FNAME: u8 = 0x08;
const FCOMMENT: u8 = 0x10;

/// Decode a file body according to its encoding. `expected_len` is the
/// number of bytes the samples should occupy once decoded.
pub fn decode_payload(body: &[u8], encoding: Encoding, expected_len: usize) -> Result<Cow<'_, [u8]>> {
    match encoding {
        Encoding::Raw => Ok(Cow::Borrowed(body)),
        Encoding::Gzip => inflate_gzip(body, expected_len).map(Cow::Owned),
    }
}

/// Inflate a single gzip member.
///
/// # Errors
///
/// - `NrrdError::TruncatedCompressedData` if the framing runs past the end
///   of the data or leaves no room for the 8 byte trailer.
/// - `NrrdError::DecompressionFailed` if the deflate stream is invalid or
///   inflates to nothing.
pub fn inflate_gzip(data: &[u8], expected_len: usize) -> Result<Vec<u8>> {
    let offset = gzip_member_offset(data)?;
    if data.len() < offset + GZIP_TRAILER_LEN {
        return Err(NrrdError::TruncatedCompressedData);
    }
    let trailer_start = data.len() - GZIP_TRAILER_LEN;
    let deflate = &data[offset..trailer_start];

    let mut trailer = ByteOrdered::le(&data[trailer_start..]);
    let crc = trailer.read_u32()?;
    let original_size = trailer.read_u32()? as usize;
    debug!(
        "gzip member: {} header bytes, {} deflate bytes, {} bytes declared",
        offset,
        deflate.len(),
        original_size
    );

    let capacity = expected_len
        .max(original_size)
        .max(data.len().saturating_mul(EXPANSION_FACTOR));
    let mut out = Vec::new();
    out.try_reserve_exact(capacity)
        .map_err(|_| NrrdError::DecompressionFailed)?;

    let mut inflater = Decompress::new(false);
    let status = inflater
        .decompress_vec(deflate, &mut out, FlushDecompress::Finish)
        .map_err(|_| NrrdError::DecompressionFailed)?;
    debug!("inflated {} bytes ({:?})", out.len(), status);
    if out.is_empty() {
        return Err(NrrdError::DecompressionFailed);
    }

    let mut check = Crc::new();
    check.update(&out);
    if check.sum() != crc || (out.len() as u32) != original_size as u32 {
        warn!(
            "gzip trailer mismatch: crc {:08x} vs {:08x}, size {} vs {}",
            check.sum(),
            crc,
            out.len(),
            original_size
        );
    }
    Ok(out)
}

/// Locate the start of the deflate stream inside a gzip member. Data
/// without the gzip magic is assumed to start with the stream itself.
fn gzip_member_offset(data: &[u8]) -> Result<usize> {
    if !data.starts_with(&GZIP_MAGIC) {
        return Ok(0);
    }
    if data.len() < GZIP_HEADER_LEN {
        return Err(NrrdError::TruncatedCompressedData);
    }
    let flags = data[3];
    let mut pos = GZIP_HEADER_LEN;

    if flags & FEXTRA != 0 {
        let field = data
            .get(pos..pos + 2)
            .ok_or(NrrdError::TruncatedCompressedData)?;
        let xlen = ByteOrdered::le(field).read_u16()? as usize;
        pos += 2 + xlen;
    }
    if flags & FNAME != 0 {
        pos = skip_zero_terminated(data, pos)?;
    }
    if flags & FCOMMENT != 0 {
        pos = skip_zero_terminated(data, pos)?;
    }
    if flags & FHCRC != 0 {
        pos += 2;
    }
    if pos > data.len() {
        return Err(NrrdError::TruncatedCompressedData);
    }
    Ok(pos)
}

fn skip_zero_terminated(data: &[u8], pos: usize) -> Result<usize> {
    data.get(pos..)
        .and_then(|rest| rest.iter().position(|&b| b == 0))
        .map(|end| pos + end + 1)
        .ok_or(NrrdError::TruncatedCompressedData)
}
