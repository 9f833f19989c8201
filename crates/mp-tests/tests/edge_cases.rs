//! Size guards, short reads, unknown tags, and the resumable raw-body read.

use mp_decoder::{Decoder, DecodeError, DecoderConfig, SizeLimitKind};
use mp_test_support::{array_header, fixnum, map_header, raw};
use mp_wire::{Channel, SliceChannel, WireError};

fn decoder(bytes: &[u8]) -> Decoder<SliceChannel<'_>> {
    Decoder::new(SliceChannel::new(bytes))
}

#[test]
fn unknown_tag_is_rejected() {
    // 0xC1 is reserved in the classic tag table.
    let bytes = [0xC1];
    let err = decoder(&bytes).read_int().unwrap_err();
    assert!(matches!(err, DecodeError::UnknownTag { byte: 0xC1 }));
}

#[test]
fn truncated_stream_reports_eof() {
    // A uint32 tag promises 4 more bytes; only 2 are present.
    let bytes = [0xCE, 0x00, 0x01];
    let err = decoder(&bytes).read_long().unwrap_err();
    assert!(matches!(err, DecodeError::Wire(WireError::UnexpectedEof { .. })));
}

#[test]
fn raw_size_guard_rejects_oversized_body() {
    let bytes = raw(&[0u8; 64]);
    let config = DecoderConfig::new(32, DecoderConfig::DEFAULT_MAX_ARRAY_LEN, DecoderConfig::DEFAULT_MAX_MAP_LEN);
    let mut d = Decoder::with_config(SliceChannel::new(&bytes), config);
    let err = d.read_byte_array().unwrap_err();
    assert!(matches!(
        err,
        DecodeError::SizeLimit {
            kind: SizeLimitKind::Raw,
            ..
        }
    ));
}

#[test]
fn array_size_guard_rejects_oversized_header() {
    let bytes = array_header(5000);
    let config = DecoderConfig::new(
        DecoderConfig::DEFAULT_MAX_RAW_LEN,
        100,
        DecoderConfig::DEFAULT_MAX_MAP_LEN,
    );
    let mut d = Decoder::with_config(SliceChannel::new(&bytes), config);
    let err = d.read_array_header().unwrap_err();
    assert!(matches!(
        err,
        DecodeError::SizeLimit {
            kind: SizeLimitKind::Array,
            ..
        }
    ));
}

#[test]
fn map_size_guard_rejects_oversized_header() {
    let bytes = map_header(5000);
    let config = DecoderConfig::new(DecoderConfig::DEFAULT_MAX_RAW_LEN, DecoderConfig::DEFAULT_MAX_ARRAY_LEN, 100);
    let mut d = Decoder::with_config(SliceChannel::new(&bytes), config);
    let err = d.read_map_header().unwrap_err();
    assert!(matches!(
        err,
        DecodeError::SizeLimit {
            kind: SizeLimitKind::Map,
            ..
        }
    ));
}

#[test]
fn size_guard_boundary_is_exclusive() {
    // A length exactly at the limit must still be rejected — the guard is
    // `size >= limit`, not `size > limit`.
    let bytes = array_header(4);
    let config = DecoderConfig::new(
        DecoderConfig::DEFAULT_MAX_RAW_LEN,
        4,
        DecoderConfig::DEFAULT_MAX_MAP_LEN,
    );
    let mut d = Decoder::with_config(SliceChannel::new(&bytes), config);
    assert!(d.read_array_header().is_err());

    let bytes = array_header(3);
    let config = DecoderConfig::new(
        DecoderConfig::DEFAULT_MAX_RAW_LEN,
        4,
        DecoderConfig::DEFAULT_MAX_MAP_LEN,
    );
    let mut d = Decoder::with_config(SliceChannel::new(&bytes), config);
    assert_eq!(d.read_array_header().unwrap(), 3);
}

#[test]
fn zero_length_raw_never_touches_the_channel_for_a_body() {
    let bytes = raw(&[]);
    assert_eq!(decoder(&bytes).read_byte_array().unwrap(), Vec::<u8>::new());
}

#[test]
fn fixnum_zero_reads_as_zero() {
    let bytes = fixnum(0);
    assert_eq!(decoder(&bytes).read_int().unwrap(), 0);
}

/// A channel that fails once with a transient I/O error partway through a
/// bulk read, then succeeds on every subsequent call. Simulates a socket
/// read that would block midway through a raw body.
struct FlakyChannel<'a> {
    data: &'a [u8],
    pos: usize,
    fail_at: usize,
    triggered: bool,
}

impl<'a> FlakyChannel<'a> {
    fn new(data: &'a [u8], fail_at: usize) -> Self {
        Self {
            data,
            pos: 0,
            fail_at,
            triggered: false,
        }
    }
}

impl Channel for FlakyChannel<'_> {
    fn read_u8(&mut self) -> Result<u8, WireError> {
        let b = *self.data.get(self.pos).ok_or(WireError::UnexpectedEof { needed: 1, got: 0 })?;
        self.pos += 1;
        Ok(b)
    }

    fn read(&mut self, dst: &mut [u8]) -> Result<usize, WireError> {
        if !self.triggered && self.pos >= self.fail_at {
            self.triggered = true;
            return Err(WireError::Io(std::io::Error::other("simulated stall")));
        }
        let available = self.data.len() - self.pos;
        let n = available.min(dst.len()).min(4);
        dst[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

#[test]
fn raw_body_read_resumes_after_a_transient_channel_failure() {
    let body = b"hello world this is a raw body payload".to_vec();
    let bytes = raw(&body);
    let channel = FlakyChannel::new(&bytes, 6);
    let mut decoder = Decoder::new(channel);

    let err = decoder.read_string().unwrap_err();
    assert!(matches!(err, DecodeError::Wire(_)));

    let s = decoder.read_string().unwrap();
    assert_eq!(s, String::from_utf8(body).unwrap());
}
