#![no_main]
use libfuzzer_sys::fuzz_target;
use nrrd_preview::NrrdHeader;

fuzz_target!(|data: &[u8]| {
    if let Ok((header, _)) = NrrdHeader::from_bytes(data) {
        let _ = header.sizes();
        let _ = header.data_type();
        let _ = header.encoding();
        let _ = header.endianness();
        let _ = header.byte_skip();
    }
    let _ = nrrd_preview::decode(data);
});
