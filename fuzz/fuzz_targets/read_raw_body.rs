#![no_main]

use libfuzzer_sys::fuzz_target;
use mp_decoder::Decoder;
use mp_wire::SliceChannel;

// Fuzz target: the raw-body path in isolation (fixraw/raw16/raw32 tags and
// the scratch-buffer fill loop).
//
// The input is interpreted directly as wire bytes beginning with a raw tag,
// so most inputs exercise a short or malformed length header; the rest
// exercise the fill loop against a body shorter than announced.
fuzz_target!(|data: &[u8]| {
    let mut decoder = Decoder::new(SliceChannel::new(data));
    let _ = decoder.read_byte_array();
});
