//! This module defines the `NrrdHeader` struct, which holds the textual
//! fields of an NRRD file, and the routine splitting a file into its
//! header and binary body.

use crate::error::{NrrdError, Result};
use crate::typedef::{Encoding, NrrdType};
use crate::util::{find_subsequence, parse_endianness, Endianness};
use log::trace;
use std::collections::hash_map::{HashMap, Iter};

/// Magic marker every NRRD header starts with.
pub const MAGIC_CODE: &str = "NRRD";

/// Header field separators, in bytes. The earliest match wins.
const SEPARATORS: [&[u8]; 2] = [b"\n\n", b"\r\n\r\n"];

/// The NRRD header: the magic line plus a case-insensitive mapping of
/// field names to trimmed values. Repeated fields keep their last value.
///
/// # Examples
///
/// ```
/// use nrrd_preview::NrrdHeader;
/// # use nrrd_preview::Result;
///
/// # fn run() -> Result<()> {
/// let (header, body) = NrrdHeader::from_bytes(b"NRRD0004\nsizes: 2 2\n\n\x01\x02\x03\x04")?;
/// assert_eq!(header.sizes()?, vec![2, 2]);
/// assert_eq!(body, &[1, 2, 3, 4]);
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NrrdHeader {
    magic: String,
    fields: HashMap<String, String>,
}

impl NrrdHeader {
    /// Split a complete NRRD file into its parsed header and the binary body
    /// following the first blank line.
    ///
    /// # Errors
    ///
    /// - `NrrdError::MalformedHeader` if there is no blank line, or the
    ///   header is not valid text.
    /// - `NrrdError::InvalidMagic` if the first line does not start with `NRRD`.
    pub fn from_bytes(bytes: &[u8]) -> Result<(NrrdHeader, &[u8])> {
        let (head, body) = split_header(bytes)?;
        let text = std::str::from_utf8(head).map_err(|_| NrrdError::MalformedHeader)?;
        let header = NrrdHeader::from_text(text)?;
        Ok((header, body))
    }

    /// Parse the textual part of an NRRD header.
    pub fn from_text(text: &str) -> Result<NrrdHeader> {
        let mut lines = text.split('\n').map(|l| l.trim_end_matches('\r'));

        let magic = lines
            .by_ref()
            .find(|l| !l.trim().is_empty())
            .ok_or(NrrdError::InvalidMagic)?;
        if !magic.starts_with(MAGIC_CODE) {
            return Err(NrrdError::InvalidMagic);
        }

        let mut fields = HashMap::new();
        for line in lines {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let colon = match line.find(':') {
                Some(pos) => pos,
                None => continue,
            };
            let key = line[..colon].trim().to_lowercase();
            let rest = &line[colon + 1..];
            let value = rest.strip_prefix('=').unwrap_or(rest).trim();
            trace!("header field {:?} = {:?}", key, value);
            let _ = fields.insert(key, value.to_string());
        }

        Ok(NrrdHeader {
            magic: magic.trim().to_string(),
            fields,
        })
    }

    /// The magic line, such as `NRRD0004`.
    pub fn magic(&self) -> &str {
        &self.magic
    }

    /// Look up a field by name, ignoring case.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(&key.to_lowercase())
            .map(String::as_str)
    }

    /// Number of distinct fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the header holds no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all fields, in no particular order.
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.fields.iter()
    }

    /// The dimension sizes declared in the `sizes` field. Tokens which are not
    /// unsigned integers are skipped.
    ///
    /// # Errors
    ///
    /// - `NrrdError::MissingDimensions` if the field is absent or yields no
    ///   integers.
    pub fn sizes(&self) -> Result<Vec<usize>> {
        let sizes: Vec<usize> = self
            .get("sizes")
            .ok_or(NrrdError::MissingDimensions)?
            .split_whitespace()
            .filter_map(|t| t.parse().ok())
            .collect();
        if sizes.is_empty() {
            return Err(NrrdError::MissingDimensions);
        }
        Ok(sizes)
    }

    /// The declared type name, `float` when absent.
    pub fn type_name(&self) -> &str {
        self.get("type").unwrap_or("float")
    }

    /// The declared element type.
    pub fn data_type(&self) -> NrrdType {
        NrrdType::from_name(self.type_name())
    }

    /// The declared payload encoding, `raw` when absent.
    pub fn encoding(&self) -> Result<Encoding> {
        Encoding::from_name(self.get("encoding").unwrap_or("raw"))
    }

    /// The declared byte order, little endian when absent.
    pub fn endianness(&self) -> Endianness {
        self.get("endian")
            .map(parse_endianness)
            .unwrap_or(Endianness::Little)
    }

    /// The `byte skip` field. `Some(n)` skips `n` leading payload bytes,
    /// `None` (written `-1`) means the samples sit at the end of the payload.
    pub fn byte_skip(&self) -> Result<Option<usize>> {
        match self.get("byte skip") {
            None => Ok(Some(0)),
            Some(value) => match value.parse::<i64>() {
                Ok(-1) => Ok(None),
                Ok(n) if n >= 0 => Ok(Some(n as usize)),
                _ => Err(NrrdError::InvalidByteSkip(value.to_string())),
            },
        }
    }
}

/// Split the file at the first blank line, returning the header bytes
/// (separator excluded) and the body.
pub fn split_header(bytes: &[u8]) -> Result<(&[u8], &[u8])> {
    let (pos, len) = SEPARATORS
        .iter()
        .filter_map(|sep| find_subsequence(bytes, sep).map(|pos| (pos, sep.len())))
        .min_by_key(|&(pos, _)| pos)
        .ok_or(NrrdError::MalformedHeader)?;
    Ok((&bytes[..pos], &bytes[pos + len..]))
}

#[cfg(test)]
mod tests {
    use super::{split_header, NrrdHeader};
    use crate::error::NrrdError;
    use crate::typedef::{Encoding, NrrdType};
    use crate::util::Endianness;

    #[test]
    fn split_lf() {
        let (head, body) = split_header(b"NRRD0004\nsizes: 1\n\nBODY").unwrap();
        assert_eq!(head, b"NRRD0004\nsizes: 1");
        assert_eq!(body, b"BODY");
    }

    #[test]
    fn split_crlf() {
        let (head, body) = split_header(b"NRRD0004\r\nsizes: 1\r\n\r\n\n\nX").unwrap();
        assert_eq!(head, b"NRRD0004\r\nsizes: 1");
        assert_eq!(body, b"\n\nX");
    }

    #[test]
    fn split_without_separator() {
        assert!(matches!(
            split_header(b"NRRD0004\nsizes: 1\n"),
            Err(NrrdError::MalformedHeader)
        ));
    }

    #[test]
    fn fields_and_defaults() {
        let header = NrrdHeader::from_text(
            "NRRD0005\n# a comment: ignored\nSizes: 3 4 5\nspace:=left-posterior-superior\n\n",
        )
        .unwrap();
        assert_eq!(header.magic(), "NRRD0005");
        assert_eq!(header.sizes().unwrap(), vec![3, 4, 5]);
        assert_eq!(header.get("SPACE"), Some("left-posterior-superior"));
        assert_eq!(header.get("# a comment"), None);
        assert_eq!(header.type_name(), "float");
        assert_eq!(header.data_type(), NrrdType::Float32);
        assert_eq!(header.encoding().unwrap(), Encoding::Raw);
        assert_eq!(header.endianness(), Endianness::Little);
        assert_eq!(header.byte_skip().unwrap(), Some(0));
        assert_eq!(header.len(), 2);
    }

    #[test]
    fn last_duplicate_wins() {
        let header = NrrdHeader::from_text("NRRD0004\ntype: uchar\nTYPE: short\nsizes: 1").unwrap();
        assert_eq!(header.data_type(), NrrdType::Int16);
    }

    #[test]
    fn magic_is_case_sensitive() {
        assert!(matches!(
            NrrdHeader::from_text("nrrd0004\nsizes: 1"),
            Err(NrrdError::InvalidMagic)
        ));
        assert!(matches!(
            NrrdHeader::from_text("XRRD0004\nsizes: 1"),
            Err(NrrdError::InvalidMagic)
        ));
        assert!(NrrdHeader::from_text("\n\nNRRD0004\nsizes: 1").is_ok());
    }

    #[test]
    fn empty_sizes() {
        let header = NrrdHeader::from_text("NRRD0004\nsizes: abc").unwrap();
        assert!(matches!(header.sizes(), Err(NrrdError::MissingDimensions)));
        let header = NrrdHeader::from_text("NRRD0004\ntype: float").unwrap();
        assert!(matches!(header.sizes(), Err(NrrdError::MissingDimensions)));
    }

    #[test]
    fn byte_skip_values() {
        let header = NrrdHeader::from_text("NRRD0004\nbyte skip: 12").unwrap();
        assert_eq!(header.byte_skip().unwrap(), Some(12));
        let header = NrrdHeader::from_text("NRRD0004\nbyte skip: -1").unwrap();
        assert_eq!(header.byte_skip().unwrap(), None);
        let header = NrrdHeader::from_text("NRRD0004\nbyte skip: -2").unwrap();
        assert!(matches!(
            header.byte_skip(),
            Err(NrrdError::InvalidByteSkip(_))
        ));
    }

    #[test]
    fn non_utf8_header() {
        assert!(matches!(
            NrrdHeader::from_bytes(b"NRRD0004\n\xff\xfe: 1\n\n"),
            Err(NrrdError::MalformedHeader)
        ));
    }
}
