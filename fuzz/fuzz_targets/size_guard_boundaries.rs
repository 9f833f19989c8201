#![no_main]

use libfuzzer_sys::fuzz_target;
use mp_decoder::{Decoder, DecoderConfig};
use mp_wire::SliceChannel;

// Fuzz target: size-guard boundaries under arbitrary configured limits.
//
// The first 12 bytes of the input pick the three configured limits
// (raw/array/map, each a little-endian u32); the rest is the payload
// handed to the decoder. This drives the `size >= limit` guards across
// limits the default config would never exercise, including 0.
fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }
    let max_raw_len = u32::from_le_bytes(data[0..4].try_into().unwrap());
    let max_array_len = u32::from_le_bytes(data[4..8].try_into().unwrap());
    let max_map_len = u32::from_le_bytes(data[8..12].try_into().unwrap());
    let payload = &data[12..];

    let config = DecoderConfig::new(max_raw_len, max_array_len, max_map_len);
    let mut decoder = Decoder::with_config(SliceChannel::new(payload), config);
    let _ = decoder.read_array_header();

    let mut decoder = Decoder::with_config(SliceChannel::new(payload), config);
    let _ = decoder.read_map_header();

    let mut decoder = Decoder::with_config(SliceChannel::new(payload), config);
    let _ = decoder.read_byte_array();
});
