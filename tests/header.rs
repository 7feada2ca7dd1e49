#[macro_use]
extern crate pretty_assertions;

use nrrd_preview::{Encoding, Endianness, NrrdError, NrrdHeader, NrrdType};

mod util;

use util::nrrd_file;

#[test]
fn typical_header() {
    let bytes = nrrd_file(
        &[
            "# Complete NRRD file format specification at:",
            "# http://teem.sourceforge.net/nrrd/format.html",
            "type: unsigned short",
            "dimension: 3",
            "space: left-posterior-superior",
            "sizes: 256 256 130",
            "space directions: (1,0,0) (0,1,0) (0,0,1.5)",
            "kinds: domain domain domain",
            "endian: big",
            "encoding: gzip",
            "space origin: (0,0,0)",
        ],
        &[0xAB, 0xCD],
    );
    let (header, body) = NrrdHeader::from_bytes(&bytes).unwrap();

    assert_eq!(header.magic(), "NRRD0004");
    assert_eq!(header.len(), 9);
    assert_eq!(header.sizes().unwrap(), vec![256, 256, 130]);
    assert_eq!(header.type_name(), "unsigned short");
    assert_eq!(header.data_type(), NrrdType::Uint16);
    assert_eq!(header.encoding().unwrap(), Encoding::Gzip);
    assert_eq!(header.endianness(), Endianness::Big);
    assert_eq!(header.get("Space Origin"), Some("(0,0,0)"));
    assert_eq!(header.get("kinds"), Some("domain domain domain"));
    assert_eq!(body, &[0xAB, 0xCD]);
}

#[test]
fn defaults_when_fields_are_absent() {
    let (header, body) = NrrdHeader::from_bytes(b"NRRD0001\nsizes: 3\n\n").unwrap();
    assert_eq!(header.data_type(), NrrdType::Float32);
    assert_eq!(header.type_name(), "float");
    assert_eq!(header.encoding().unwrap(), Encoding::Raw);
    assert_eq!(header.endianness(), Endianness::Little);
    assert_eq!(header.byte_skip().unwrap(), Some(0));
    assert!(body.is_empty());
}

#[test]
fn crlf_header() {
    let bytes = b"NRRD0004\r\nType: Int\r\nSizes: 1 2\r\nByte Skip: -1\r\n\r\n\x00\x00\x00\x00";
    let (header, body) = NrrdHeader::from_bytes(bytes).unwrap();
    assert_eq!(header.data_type(), NrrdType::Int32);
    assert_eq!(header.sizes().unwrap(), vec![1, 2]);
    assert_eq!(header.byte_skip().unwrap(), None);
    assert_eq!(body.len(), 4);
}

#[test]
fn key_value_pairs_and_duplicates() {
    let header = NrrdHeader::from_text(
        "NRRD0005\nsizes: 2 2\nmodality:=CT\ntype: uint8\ntype: int16\n",
    )
    .unwrap();
    assert_eq!(header.get("modality"), Some("CT"));
    assert_eq!(header.data_type(), NrrdType::Int16);
}

#[test]
fn blank_line_inside_body_is_not_a_separator() {
    let mut bytes = nrrd_file(&["type: uint8", "sizes: 4"], b"\n\n");
    bytes.extend_from_slice(b"\n\n");
    let (_, body) = NrrdHeader::from_bytes(&bytes).unwrap();
    assert_eq!(body, b"\n\n\n\n");
}

#[test]
fn invalid_magic() {
    let err = NrrdHeader::from_bytes(b"XRRD0004\nsizes: 2\n\n\x00\x00").unwrap_err();
    assert!(matches!(err, NrrdError::InvalidMagic), "{:?}", err);
}

#[test]
fn missing_separator() {
    let err = NrrdHeader::from_bytes(b"NRRD0004\nsizes: 2\n").unwrap_err();
    assert!(matches!(err, NrrdError::MalformedHeader), "{:?}", err);
}

#[test]
fn missing_dimensions() {
    let (header, _) = NrrdHeader::from_bytes(b"NRRD0004\ntype: uint8\n\n").unwrap();
    assert!(matches!(header.sizes(), Err(NrrdError::MissingDimensions)));

    let (header, _) = NrrdHeader::from_bytes(b"NRRD0004\nsizes: ???\n\n").unwrap();
    assert!(matches!(header.sizes(), Err(NrrdError::MissingDimensions)));
}

#[test]
fn unsupported_encoding() {
    let (header, _) = NrrdHeader::from_bytes(b"NRRD0004\nencoding: bzip2\n\n").unwrap();
    match header.encoding() {
        Err(NrrdError::UnsupportedEncoding(name)) => assert_eq!(name, "bzip2"),
        other => panic!("unexpected result {:?}", other),
    }
}
