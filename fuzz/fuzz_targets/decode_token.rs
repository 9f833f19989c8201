#![no_main]

use libfuzzer_sys::fuzz_target;
use mp_decoder::{Acceptor, DecodeError, Decoder};
use mp_wire::SliceChannel;

// Fuzz target: the token dispatcher over arbitrary bytes.
//
// Catches bugs in:
// - Tag classification (fixnum/fixraw/fixmap/fixarray boundaries)
// - Integer promotion across i32/i64/u64
// - Size guard enforcement before allocation
// - Resumable raw-body reads
// - Head-byte cache invariants across repeated calls
//
// A permissive acceptor absorbs every token kind so the fuzzer can walk
// as deep into the stream as the bytes allow, rather than stopping at
// the first type mismatch.
#[derive(Default)]
struct SinkAcceptor;

impl Acceptor for SinkAcceptor {
    fn name(&self) -> &'static str {
        "sink"
    }
    fn accept_int(&mut self, _v: i32) -> Result<(), DecodeError> {
        Ok(())
    }
    fn accept_long(&mut self, _v: i64) -> Result<(), DecodeError> {
        Ok(())
    }
    fn accept_unsigned_long(&mut self, _v: u64) -> Result<(), DecodeError> {
        Ok(())
    }
    fn accept_float(&mut self, _v: f32) -> Result<(), DecodeError> {
        Ok(())
    }
    fn accept_double(&mut self, _v: f64) -> Result<(), DecodeError> {
        Ok(())
    }
    fn accept_boolean(&mut self, _v: bool) -> Result<(), DecodeError> {
        Ok(())
    }
    fn accept_nil(&mut self) -> Result<(), DecodeError> {
        Ok(())
    }
    fn accept_byte_array(&mut self, _v: Vec<u8>) -> Result<(), DecodeError> {
        Ok(())
    }
    fn accept_array_header(&mut self, _size: u32) -> Result<(), DecodeError> {
        Ok(())
    }
    fn accept_map_header(&mut self, _size: u32) -> Result<(), DecodeError> {
        Ok(())
    }
}

fuzz_target!(|data: &[u8]| {
    let mut decoder = Decoder::new(SliceChannel::new(data));
    let mut acceptor = SinkAcceptor;
    // Keep reading tokens until the stream is exhausted or rejects a byte.
    // Guard against an unexpectedly long stream of zero-length tokens.
    for _ in 0..10_000 {
        if decoder.read_token(&mut acceptor).is_err() {
            break;
        }
    }
});
