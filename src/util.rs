//! Private utility module
use crate::error::{NrrdError, Result};

pub use byteordered::Endianness;

/// Parse the value of an `endian` header field. Anything other than `big`
/// is read as little endian.
pub fn parse_endianness(value: &str) -> Endianness {
    if value.trim().eq_ignore_ascii_case("big") {
        Endianness::Big
    } else {
        Endianness::Little
    }
}

/// Number of bytes needed to hold `count` elements of `width` bytes each.
pub fn nb_bytes_for_data(count: usize, width: usize) -> Result<usize> {
    count
        .checked_mul(width)
        .ok_or(NrrdError::DimensionOverflow)
}

/// Convert N-dimensional coordinates into a flat index, first axis fastest.
pub fn coords_to_index(coords: &[usize], dim: &[usize]) -> Result<usize> {
    if coords.len() != dim.len() || coords.is_empty() {
        return Err(NrrdError::IncorrectVolumeDimensionality(
            dim.len(),
            coords.len(),
        ));
    }

    if !coords.iter().zip(dim).all(|(i, d)| i < d) {
        return Err(NrrdError::OutOfBounds(Vec::from(coords)));
    }

    let index = coords
        .iter()
        .zip(dim)
        .rev()
        .fold(0, |acc, (c, d)| acc * d + c);

    Ok(index)
}

/// Find the first occurrence of `needle` in `haystack`.
pub fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
