use flate2::write::GzEncoder;
use flate2::{Compression, GzBuilder};
use std::io::Write;

/// Assemble an NRRD file from header lines (without the magic line) and a
/// binary body.
#[allow(dead_code)]
pub fn nrrd_file(fields: &[&str], body: &[u8]) -> Vec<u8> {
    let mut bytes = b"NRRD0004\n".to_vec();
    for field in fields {
        bytes.extend_from_slice(field.as_bytes());
        bytes.push(b'\n');
    }
    bytes.push(b'\n');
    bytes.extend_from_slice(body);
    bytes
}

/// A gzip member of `data` with the default header.
#[allow(dead_code)]
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// A gzip member of `data` whose header carries a file name and a comment.
#[allow(dead_code)]
pub fn gzip_with_name(data: &[u8], name: &str) -> Vec<u8> {
    let mut encoder = GzBuilder::new()
        .filename(name)
        .comment("written by the test suite")
        .write(Vec::new(), Compression::best());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Little endian bytes of a run of `u16` values.
#[allow(dead_code)]
pub fn u16_le_bytes(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes().to_vec()).collect()
}
