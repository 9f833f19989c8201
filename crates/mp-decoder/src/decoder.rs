use mp_wire::{tag, Channel, WireError};

use crate::acceptor::{
    Acceptor, ArrayAcceptor, BigIntegerAcceptor, BooleanAcceptor, ByteArrayAcceptor,
    DoubleAcceptor, IntAcceptor, LongAcceptor, MapAcceptor, NilAcceptor, StringAcceptor,
};
use crate::cache::HeadCache;
use crate::config::DecoderConfig;
use crate::error::{DecodeError, SizeLimitKind};
use crate::value_type::{classify, ValueType};

/// Streaming MessagePack decoder over a single [`Channel`].
///
/// A `Decoder` owns its channel, its three size guards, the head-byte
/// cache, and the in-progress raw-body scratch buffer. It is not
/// thread-safe and is meant to be owned by exactly one caller — one
/// decoder per stream, per the spec's concurrency model.
///
/// Two ways to consume it:
///
/// - The typed read façade (`read_int`, `read_string`, `read_array_header`,
///   …) — allocates the right [`Acceptor`], drives [`read_token`], and
///   returns the acceptor's captured value.
/// - The low-level [`read_token`](Self::read_token) escape hatch, for
///   callers that want to supply their own `Acceptor`.
pub struct Decoder<C> {
    channel: C,
    config: DecoderConfig,
    head: HeadCache,
    raw_buf: Option<Vec<u8>>,
    raw_filled: usize,
}

impl<C: Channel> Decoder<C> {
    /// Create a decoder with the default size guards.
    pub fn new(channel: C) -> Self {
        Self::with_config(channel, DecoderConfig::default())
    }

    /// Create a decoder with caller-supplied size guards.
    pub fn with_config(channel: C, config: DecoderConfig) -> Self {
        Self {
            channel,
            config,
            head: HeadCache::new(),
            raw_buf: None,
            raw_filled: 0,
        }
    }

    /// Close the decoder. Closes the underlying channel as well — the
    /// decoder owns it exclusively.
    pub fn close(&mut self) -> Result<(), DecodeError> {
        self.channel.close().map_err(DecodeError::Wire)
    }

    // ── Typed read façade ───────────────────────────────────────────────

    pub fn read_int(&mut self) -> Result<i32, DecodeError> {
        let mut acceptor = IntAcceptor::default();
        self.read_token(&mut acceptor)?;
        Ok(acceptor.take())
    }

    pub fn read_long(&mut self) -> Result<i64, DecodeError> {
        let mut acceptor = LongAcceptor::default();
        self.read_token(&mut acceptor)?;
        Ok(acceptor.take())
    }

    pub fn read_big_integer(&mut self) -> Result<u64, DecodeError> {
        let mut acceptor = BigIntegerAcceptor::default();
        self.read_token(&mut acceptor)?;
        Ok(acceptor.take())
    }

    pub fn read_double(&mut self) -> Result<f64, DecodeError> {
        let mut acceptor = DoubleAcceptor::default();
        self.read_token(&mut acceptor)?;
        Ok(acceptor.take())
    }

    pub fn read_boolean(&mut self) -> Result<bool, DecodeError> {
        let mut acceptor = BooleanAcceptor::default();
        self.read_token(&mut acceptor)?;
        Ok(acceptor.take())
    }

    pub fn read_nil(&mut self) -> Result<(), DecodeError> {
        let mut acceptor = NilAcceptor::default();
        self.read_token(&mut acceptor)?;
        Ok(acceptor.take())
    }

    pub fn read_byte_array(&mut self) -> Result<Vec<u8>, DecodeError> {
        let mut acceptor = ByteArrayAcceptor::default();
        self.read_token(&mut acceptor)?;
        Ok(acceptor.take())
    }

    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let mut acceptor = StringAcceptor::default();
        self.read_token(&mut acceptor)?;
        Ok(acceptor.take())
    }

    pub fn read_array_header(&mut self) -> Result<u32, DecodeError> {
        let mut acceptor = ArrayAcceptor::default();
        self.read_token(&mut acceptor)?;
        Ok(acceptor.take())
    }

    pub fn read_map_header(&mut self) -> Result<u32, DecodeError> {
        let mut acceptor = MapAcceptor::default();
        self.read_token(&mut acceptor)?;
        Ok(acceptor.take())
    }

    /// Peek the head byte; consume and return `true` iff it is the `nil`
    /// tag. Leaves the cache primed and returns `false` for anything else,
    /// including an unrecognized tag — the format error is deferred to the
    /// next real read.
    pub fn try_skip_nil(&mut self) -> Result<bool, DecodeError> {
        let b = self.head.get(&mut self.channel).map_err(DecodeError::Wire)?;
        if b == tag::NIL {
            self.head.reset();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Peek the head byte and classify it. Never consumes the cache, never
    /// allocates.
    pub fn next_type(&mut self) -> Result<ValueType, DecodeError> {
        let b = self.head.get(&mut self.channel).map_err(DecodeError::Wire)?;
        classify(b)
    }

    // ── Token dispatcher ────────────────────────────────────────────────

    /// Read and interpret the next value, delivering it to `acceptor`.
    ///
    /// On success, exactly one `accept_*` call was made. The head-byte
    /// cache is empty afterward — container headers are values in their
    /// own right; their elements are read by subsequent `read_token` calls.
    pub fn read_token(&mut self, acceptor: &mut dyn Acceptor) -> Result<(), DecodeError> {
        if self.raw_buf.is_some() {
            let data = self.fill_raw_body()?;
            self.head.reset();
            return acceptor.accept_byte_array(data);
        }

        let b = self.head.get(&mut self.channel).map_err(DecodeError::Wire)?;

        if tag::is_positive_fixnum(b) {
            self.head.reset();
            return acceptor.accept_int(i32::from(b));
        }
        if tag::is_negative_fixnum(b) {
            self.head.reset();
            #[allow(clippy::cast_possible_wrap)]
            let signed = i32::from(b as i8);
            return acceptor.accept_int(signed);
        }
        if tag::is_fixraw(b) {
            self.head.reset();
            let len = tag::fixraw_len(b);
            return self.deliver_raw(len, acceptor);
        }
        if tag::is_fixmap(b) {
            self.head.reset();
            let len = tag::fix_container_len(b) as u32;
            self.check_map_size(len)?;
            return acceptor.accept_map_header(len);
        }
        if tag::is_fixarray(b) {
            self.head.reset();
            let len = tag::fix_container_len(b) as u32;
            self.check_array_size(len)?;
            return acceptor.accept_array_header(len);
        }

        match b {
            tag::NIL => {
                self.head.reset();
                acceptor.accept_nil()
            }
            tag::FALSE => {
                self.head.reset();
                acceptor.accept_boolean(false)
            }
            tag::TRUE => {
                self.head.reset();
                acceptor.accept_boolean(true)
            }
            tag::FLOAT32 => {
                self.head.reset();
                let v = self.channel.read_f32().map_err(DecodeError::Wire)?;
                acceptor.accept_float(v)
            }
            tag::FLOAT64 => {
                self.head.reset();
                let v = self.channel.read_f64().map_err(DecodeError::Wire)?;
                acceptor.accept_double(v)
            }
            tag::UINT8 => {
                self.head.reset();
                let v = self.channel.read_u8().map_err(DecodeError::Wire)?;
                acceptor.accept_int(i32::from(v))
            }
            tag::UINT16 => {
                self.head.reset();
                let v = self.channel.read_i16().map_err(DecodeError::Wire)? as u16;
                acceptor.accept_int(i32::from(v))
            }
            tag::UINT32 => {
                self.head.reset();
                let v = self.channel.read_i32().map_err(DecodeError::Wire)? as u32;
                if v > u32::try_from(i32::MAX).expect("i32::MAX fits u32") {
                    acceptor.accept_long(i64::from(v))
                } else {
                    #[allow(clippy::cast_possible_wrap)]
                    acceptor.accept_int(v as i32)
                }
            }
            tag::UINT64 => {
                self.head.reset();
                let v = self.channel.read_i64().map_err(DecodeError::Wire)? as u64;
                if v > u64::try_from(i64::MAX).expect("i64::MAX fits u64") {
                    acceptor.accept_unsigned_long(v)
                } else {
                    #[allow(clippy::cast_possible_wrap)]
                    acceptor.accept_long(v as i64)
                }
            }
            tag::INT8 => {
                self.head.reset();
                #[allow(clippy::cast_possible_wrap)]
                let v = self.channel.read_u8().map_err(DecodeError::Wire)? as i8;
                acceptor.accept_int(i32::from(v))
            }
            tag::INT16 => {
                self.head.reset();
                let v = self.channel.read_i16().map_err(DecodeError::Wire)?;
                acceptor.accept_int(i32::from(v))
            }
            tag::INT32 => {
                self.head.reset();
                let v = self.channel.read_i32().map_err(DecodeError::Wire)?;
                acceptor.accept_int(v)
            }
            tag::INT64 => {
                self.head.reset();
                let v = self.channel.read_i64().map_err(DecodeError::Wire)?;
                acceptor.accept_long(v)
            }
            tag::RAW16 => {
                self.head.reset();
                let len = self.channel.read_i16().map_err(DecodeError::Wire)? as u16 as usize;
                self.deliver_raw(len, acceptor)
            }
            tag::RAW32 => {
                self.head.reset();
                let len = self.channel.read_i32().map_err(DecodeError::Wire)? as u32 as usize;
                self.deliver_raw(len, acceptor)
            }
            tag::ARRAY16 => {
                self.head.reset();
                let len = self.channel.read_i16().map_err(DecodeError::Wire)? as u16 as u32;
                self.check_array_size(len)?;
                acceptor.accept_array_header(len)
            }
            tag::ARRAY32 => {
                self.head.reset();
                let len = self.channel.read_i32().map_err(DecodeError::Wire)? as u32;
                self.check_array_size(len)?;
                acceptor.accept_array_header(len)
            }
            tag::MAP16 => {
                self.head.reset();
                let len = self.channel.read_i16().map_err(DecodeError::Wire)? as u16 as u32;
                self.check_map_size(len)?;
                acceptor.accept_map_header(len)
            }
            tag::MAP32 => {
                self.head.reset();
                let len = self.channel.read_i32().map_err(DecodeError::Wire)? as u32;
                self.check_map_size(len)?;
                acceptor.accept_map_header(len)
            }
            other => Err(DecodeError::UnknownTag { byte: other }),
        }
    }

    fn deliver_raw(&mut self, len: usize, acceptor: &mut dyn Acceptor) -> Result<(), DecodeError> {
        if len == 0 {
            return acceptor.accept_empty_byte_array();
        }
        self.check_raw_size(len)?;
        self.raw_buf = Some(vec![0u8; len]);
        self.raw_filled = 0;
        let data = self.fill_raw_body()?;
        acceptor.accept_byte_array(data)
    }

    /// Continue filling the in-progress raw scratch buffer from the
    /// channel. Resumable: on a channel failure the partially filled
    /// buffer is left in place for the next call to pick up where it left
    /// off.
    fn fill_raw_body(&mut self) -> Result<Vec<u8>, DecodeError> {
        let buf = self
            .raw_buf
            .as_mut()
            .expect("fill_raw_body only called while raw_buf is Some");

        while self.raw_filled < buf.len() {
            let n = self
                .channel
                .read(&mut buf[self.raw_filled..])
                .map_err(DecodeError::Wire)?;
            if n == 0 {
                return Err(DecodeError::Wire(WireError::UnexpectedEof {
                    needed: buf.len() - self.raw_filled,
                    got: 0,
                }));
            }
            self.raw_filled += n;
        }

        Ok(self.raw_buf.take().expect("buf is Some on entry"))
    }

    fn check_raw_size(&self, len: usize) -> Result<(), DecodeError> {
        let limit = self.config.max_raw_len;
        if len as u64 >= u64::from(limit) {
            return Err(DecodeError::SizeLimit {
                kind: SizeLimitKind::Raw,
                size: i64::try_from(len).unwrap_or(i64::MAX),
                limit,
            });
        }
        Ok(())
    }

    fn check_array_size(&self, len: u32) -> Result<(), DecodeError> {
        if len >= self.config.max_array_len {
            return Err(DecodeError::SizeLimit {
                kind: SizeLimitKind::Array,
                size: i64::from(len),
                limit: self.config.max_array_len,
            });
        }
        Ok(())
    }

    fn check_map_size(&self, len: u32) -> Result<(), DecodeError> {
        if len >= self.config.max_map_len {
            return Err(DecodeError::SizeLimit {
                kind: SizeLimitKind::Map,
                size: i64::from(len),
                limit: self.config.max_map_len,
            });
        }
        Ok(())
    }
}
