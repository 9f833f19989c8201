use crate::error::WireError;

/// The decoder's only dependency on a byte source.
///
/// A `Channel` supplies sized big-endian reads and bulk byte fills. It is
/// deliberately minimal: file, socket, and in-memory sources all implement
/// it the same way, and the decoder never needs to know which one it has.
///
/// Implementations report end-of-stream as [`WireError::UnexpectedEof`],
/// distinct from other I/O failures, so callers can tell "ran out of bytes"
/// from "the source broke."
pub trait Channel {
    /// Read a single byte.
    fn read_u8(&mut self) -> Result<u8, WireError>;

    /// Read a big-endian 16-bit signed integer.
    fn read_i16(&mut self) -> Result<i16, WireError> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(i16::from_be_bytes(buf))
    }

    /// Read a big-endian 32-bit signed integer.
    fn read_i32(&mut self) -> Result<i32, WireError> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }

    /// Read a big-endian 64-bit signed integer.
    fn read_i64(&mut self) -> Result<i64, WireError> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Ok(i64::from_be_bytes(buf))
    }

    /// Read a big-endian 32-bit float.
    fn read_f32(&mut self) -> Result<f32, WireError> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(f32::from_be_bytes(buf))
    }

    /// Read a big-endian 64-bit double.
    fn read_f64(&mut self) -> Result<f64, WireError> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Ok(f64::from_be_bytes(buf))
    }

    /// Fill `dst` with bytes from the source, returning the number filled.
    ///
    /// May return fewer bytes than `dst.len()` on end-of-stream; it must
    /// not return `Ok` with zero bytes filled unless `dst` is empty or the
    /// source is exhausted with nothing left to give.
    fn read(&mut self, dst: &mut [u8]) -> Result<usize, WireError>;

    /// Close the channel and the underlying byte source.
    fn close(&mut self) -> Result<(), WireError> {
        Ok(())
    }

    /// Read exactly `dst.len()` bytes, failing with
    /// [`WireError::UnexpectedEof`] on a short read.
    fn read_exact(&mut self, dst: &mut [u8]) -> Result<(), WireError> {
        let n = self.read(dst)?;
        if n != dst.len() {
            return Err(WireError::UnexpectedEof {
                needed: dst.len(),
                got: n,
            });
        }
        Ok(())
    }
}

/// A [`Channel`] over an in-memory byte slice.
///
/// The common case for decoding a complete payload already held in memory.
/// Reads simply advance a cursor; there is no allocation and no possibility
/// of a "short read" other than genuine end-of-slice.
pub struct SliceChannel<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceChannel<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}

impl Channel for SliceChannel<'_> {
    fn read_u8(&mut self) -> Result<u8, WireError> {
        let byte = *self.buf.get(self.pos).ok_or(WireError::UnexpectedEof {
            needed: 1,
            got: 0,
        })?;
        self.pos += 1;
        Ok(byte)
    }

    fn read(&mut self, dst: &mut [u8]) -> Result<usize, WireError> {
        let available = self.buf.len() - self.pos;
        let n = available.min(dst.len());
        dst[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// A [`Channel`] over any [`std::io::Read`] source — files, sockets,
/// anything the standard library already knows how to read from.
///
/// Short reads from the underlying reader are retried until the requested
/// range is full or the reader reports zero bytes (true end-of-stream).
pub struct ReaderChannel<R> {
    inner: R,
}

impl<R: std::io::Read> ReaderChannel<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: std::io::Read> Channel for ReaderChannel<R> {
    fn read_u8(&mut self) -> Result<u8, WireError> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read(&mut self, dst: &mut [u8]) -> Result<usize, WireError> {
        let mut filled = 0;
        while filled < dst.len() {
            let n = self.inner.read(&mut dst[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        Ok(filled)
    }

    fn close(&mut self) -> Result<(), WireError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_channel_reads_bytes_in_order() {
        let mut ch = SliceChannel::new(&[0x01, 0x02, 0x03]);
        assert_eq!(ch.read_u8().unwrap(), 0x01);
        assert_eq!(ch.read_u8().unwrap(), 0x02);
        assert_eq!(ch.read_u8().unwrap(), 0x03);
        assert!(ch.read_u8().is_err());
    }

    #[test]
    fn slice_channel_read_exact_reports_eof() {
        let mut ch = SliceChannel::new(&[0xAA]);
        let mut buf = [0u8; 4];
        let result = ch.read_exact(&mut buf);
        assert!(matches!(
            result,
            Err(WireError::UnexpectedEof { needed: 4, got: 1 })
        ));
    }

    #[test]
    fn slice_channel_read_i32_big_endian() {
        let mut ch = SliceChannel::new(&[0x00, 0x00, 0x01, 0x00]);
        assert_eq!(ch.read_i32().unwrap(), 256);
    }

    #[test]
    fn slice_channel_read_f64_big_endian() {
        let bytes = 1.5f64.to_be_bytes();
        let mut ch = SliceChannel::new(&bytes);
        assert_eq!(ch.read_f64().unwrap(), 1.5);
    }

    #[test]
    fn slice_channel_bulk_read_short_on_eof() {
        let mut ch = SliceChannel::new(&[1, 2, 3]);
        let mut buf = [0u8; 10];
        let n = ch.read(&mut buf).unwrap();
        assert_eq!(n, 3);
        assert_eq!(&buf[..3], &[1, 2, 3]);
    }

    #[test]
    fn reader_channel_over_cursor() {
        let cursor = std::io::Cursor::new(vec![0x10, 0x20, 0x30, 0x40]);
        let mut ch = ReaderChannel::new(cursor);
        assert_eq!(ch.read_i16().unwrap(), 0x1020);
        assert_eq!(ch.read_u8().unwrap(), 0x30);
    }

    #[test]
    fn reader_channel_read_exact_eof() {
        let cursor = std::io::Cursor::new(vec![0x01]);
        let mut ch = ReaderChannel::new(cursor);
        let mut buf = [0u8; 3];
        let result = ch.read_exact(&mut buf);
        assert!(matches!(result, Err(WireError::UnexpectedEof { .. })));
    }
}
