#![no_main]
use libfuzzer_sys::fuzz_target;
use nrrd_preview::{decode, render_preview};

fuzz_target!(|data: &[u8]| {
    if let Ok(volume) = decode(data) {
        // large volumes take too long per iteration
        if volume.samples().len() <= 1 << 16 {
            let _ = render_preview(&volume, 96, 64);
        }
    }
});
