//! Minimal MessagePack byte-sequence builders used by tests and benches.
//!
//! There is no production encoder in this workspace — encoding is out of
//! scope — so tests that need a payload to decode build the classic tag
//! bytes by hand. Keeping these builders in one place means every test
//! constructs wire bytes the same way, rather than re-deriving tag layout
//! inline in each test function.

/// A positive or negative fixnum tag, encoded per its own single byte.
#[must_use]
pub fn fixnum(v: i8) -> Vec<u8> {
    vec![v as u8]
}

#[must_use]
pub fn uint8(v: u8) -> Vec<u8> {
    vec![0xCC, v]
}

#[must_use]
pub fn uint16(v: u16) -> Vec<u8> {
    let mut out = vec![0xCD];
    out.extend_from_slice(&v.to_be_bytes());
    out
}

#[must_use]
pub fn uint32(v: u32) -> Vec<u8> {
    let mut out = vec![0xCE];
    out.extend_from_slice(&v.to_be_bytes());
    out
}

#[must_use]
pub fn uint64(v: u64) -> Vec<u8> {
    let mut out = vec![0xCF];
    out.extend_from_slice(&v.to_be_bytes());
    out
}

#[must_use]
pub fn int32(v: i32) -> Vec<u8> {
    let mut out = vec![0xD2];
    out.extend_from_slice(&v.to_be_bytes());
    out
}

#[must_use]
pub fn int64(v: i64) -> Vec<u8> {
    let mut out = vec![0xD3];
    out.extend_from_slice(&v.to_be_bytes());
    out
}

#[must_use]
pub fn float64(v: f64) -> Vec<u8> {
    let mut out = vec![0xCB];
    out.extend_from_slice(&v.to_be_bytes());
    out
}

#[must_use]
pub fn nil() -> Vec<u8> {
    vec![0xC0]
}

#[must_use]
pub fn boolean(v: bool) -> Vec<u8> {
    vec![if v { 0xC3 } else { 0xC2 }]
}

/// A raw (string/binary) body, choosing fixraw/raw16/raw32 by length.
#[must_use]
pub fn raw(body: &[u8]) -> Vec<u8> {
    let len = body.len();
    let mut out = if len <= 0x1F {
        vec![0xA0 | len as u8]
    } else if len <= u16::MAX as usize {
        let mut head = vec![0xDA];
        head.extend_from_slice(&(len as u16).to_be_bytes());
        head
    } else {
        let mut head = vec![0xDB];
        head.extend_from_slice(&(len as u32).to_be_bytes());
        head
    };
    out.extend_from_slice(body);
    out
}

/// An array header for `len` elements, choosing fixarray/array16/array32.
#[must_use]
pub fn array_header(len: usize) -> Vec<u8> {
    if len <= 0x0F {
        vec![0x90 | len as u8]
    } else if len <= u16::MAX as usize {
        let mut out = vec![0xDC];
        out.extend_from_slice(&(len as u16).to_be_bytes());
        out
    } else {
        let mut out = vec![0xDD];
        out.extend_from_slice(&(len as u32).to_be_bytes());
        out
    }
}

/// A map header for `len` entries, choosing fixmap/map16/map32.
#[must_use]
pub fn map_header(len: usize) -> Vec<u8> {
    if len <= 0x0F {
        vec![0x80 | len as u8]
    } else if len <= u16::MAX as usize {
        let mut out = vec![0xDE];
        out.extend_from_slice(&(len as u16).to_be_bytes());
        out
    } else {
        let mut out = vec![0xDF];
        out.extend_from_slice(&(len as u32).to_be_bytes());
        out
    }
}
