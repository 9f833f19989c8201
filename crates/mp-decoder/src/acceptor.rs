use crate::error::DecodeError;

/// A polymorphic sink for one decoded value.
///
/// [`Decoder::read_token`](crate::Decoder::read_token) calls exactly one
/// `accept_*` method per dispatched value. Each concrete acceptor in this
/// module implements the single-slot capture its typed read wants and
/// rejects every other kind with [`DecodeError::Type`] — except where
/// lossless widening is explicitly allowed (an `int` token into a
/// [`LongAcceptor`], a `float` token into a [`DoubleAcceptor`], and so on).
///
/// Acceptors are per-call, stack-allocated values — never shared across
/// decoder instances or across reads. See the crate-level docs for why
/// this departs from the singleton-acceptor pattern of some reference
/// implementations.
pub trait Acceptor {
    /// Name used in [`DecodeError::Type`] messages, e.g. `"int"`, `"string"`.
    fn name(&self) -> &'static str;

    fn accept_int(&mut self, _v: i32) -> Result<(), DecodeError> {
        Err(self.reject("int"))
    }
    fn accept_long(&mut self, _v: i64) -> Result<(), DecodeError> {
        Err(self.reject("long"))
    }
    fn accept_unsigned_long(&mut self, _v: u64) -> Result<(), DecodeError> {
        Err(self.reject("unsigned 64-bit integer"))
    }
    fn accept_float(&mut self, _v: f32) -> Result<(), DecodeError> {
        Err(self.reject("float"))
    }
    fn accept_double(&mut self, _v: f64) -> Result<(), DecodeError> {
        Err(self.reject("double"))
    }
    fn accept_boolean(&mut self, _v: bool) -> Result<(), DecodeError> {
        Err(self.reject("boolean"))
    }
    fn accept_nil(&mut self) -> Result<(), DecodeError> {
        Err(self.reject("nil"))
    }
    fn accept_byte_array(&mut self, _v: Vec<u8>) -> Result<(), DecodeError> {
        Err(self.reject("raw"))
    }
    fn accept_empty_byte_array(&mut self) -> Result<(), DecodeError> {
        self.accept_byte_array(Vec::new())
    }
    fn accept_array_header(&mut self, _size: u32) -> Result<(), DecodeError> {
        Err(self.reject("array header"))
    }
    fn accept_map_header(&mut self, _size: u32) -> Result<(), DecodeError> {
        Err(self.reject("map header"))
    }

    fn reject(&self, found: &'static str) -> DecodeError {
        DecodeError::Type {
            accepted: self.name(),
            found,
        }
    }
}

/// Captures a token that fits losslessly in an `i32`.
#[derive(Default)]
pub struct IntAcceptor(Option<i32>);

impl IntAcceptor {
    pub fn take(self) -> i32 {
        self.0.expect("read_token always calls exactly one accept_* method")
    }
}

impl Acceptor for IntAcceptor {
    fn name(&self) -> &'static str {
        "int"
    }

    fn accept_int(&mut self, v: i32) -> Result<(), DecodeError> {
        self.0 = Some(v);
        Ok(())
    }

    fn accept_long(&mut self, v: i64) -> Result<(), DecodeError> {
        match i32::try_from(v) {
            Ok(v) => {
                self.0 = Some(v);
                Ok(())
            }
            Err(_) => Err(self.reject("long outside i32 range")),
        }
    }
}

/// Captures a token that fits losslessly in an `i64`.
#[derive(Default)]
pub struct LongAcceptor(Option<i64>);

impl LongAcceptor {
    pub fn take(self) -> i64 {
        self.0.expect("read_token always calls exactly one accept_* method")
    }
}

impl Acceptor for LongAcceptor {
    fn name(&self) -> &'static str {
        "long"
    }

    fn accept_int(&mut self, v: i32) -> Result<(), DecodeError> {
        self.0 = Some(i64::from(v));
        Ok(())
    }

    fn accept_long(&mut self, v: i64) -> Result<(), DecodeError> {
        self.0 = Some(v);
        Ok(())
    }
}

/// Captures a token as an unsigned 64-bit integer — the one kind of
/// MessagePack integer that cannot fit in `i64`. Native `u64` doubles here
/// as the "big integer" type the distilled spec names, since a full
/// 64-bit unsigned range needs no further widening in Rust.
///
/// Negative `int`/`long` tokens are rejected rather than silently
/// reinterpreted as unsigned — callers expecting a value that can be
/// negative should use [`LongAcceptor`] instead.
#[derive(Default)]
pub struct BigIntegerAcceptor(Option<u64>);

impl BigIntegerAcceptor {
    pub fn take(self) -> u64 {
        self.0.expect("read_token always calls exactly one accept_* method")
    }
}

impl Acceptor for BigIntegerAcceptor {
    fn name(&self) -> &'static str {
        "big integer"
    }

    fn accept_int(&mut self, v: i32) -> Result<(), DecodeError> {
        if v < 0 {
            return Err(self.reject("negative int"));
        }
        self.0 = Some(u64::try_from(v).expect("non-negative i32 fits u64"));
        Ok(())
    }

    fn accept_long(&mut self, v: i64) -> Result<(), DecodeError> {
        if v < 0 {
            return Err(self.reject("negative long"));
        }
        self.0 = Some(u64::try_from(v).expect("non-negative i64 fits u64"));
        Ok(())
    }

    fn accept_unsigned_long(&mut self, v: u64) -> Result<(), DecodeError> {
        self.0 = Some(v);
        Ok(())
    }
}

/// Captures a `float` or `double` token, widening `float` to `f64`.
#[derive(Default)]
pub struct DoubleAcceptor(Option<f64>);

impl DoubleAcceptor {
    pub fn take(self) -> f64 {
        self.0.expect("read_token always calls exactly one accept_* method")
    }
}

impl Acceptor for DoubleAcceptor {
    fn name(&self) -> &'static str {
        "double"
    }

    fn accept_float(&mut self, v: f32) -> Result<(), DecodeError> {
        self.0 = Some(f64::from(v));
        Ok(())
    }

    fn accept_double(&mut self, v: f64) -> Result<(), DecodeError> {
        self.0 = Some(v);
        Ok(())
    }
}

/// Captures a `nil` or non-`nil` boolean token.
#[derive(Default)]
pub struct BooleanAcceptor(Option<bool>);

impl BooleanAcceptor {
    pub fn take(self) -> bool {
        self.0.expect("read_token always calls exactly one accept_* method")
    }
}

impl Acceptor for BooleanAcceptor {
    fn name(&self) -> &'static str {
        "boolean"
    }

    fn accept_boolean(&mut self, v: bool) -> Result<(), DecodeError> {
        self.0 = Some(v);
        Ok(())
    }
}

/// Accepts only the `nil` tag.
#[derive(Default)]
pub struct NilAcceptor(bool);

impl NilAcceptor {
    pub fn take(self) {
        debug_assert!(self.0, "read_token always calls exactly one accept_* method");
    }
}

impl Acceptor for NilAcceptor {
    fn name(&self) -> &'static str {
        "nil"
    }

    fn accept_nil(&mut self) -> Result<(), DecodeError> {
        self.0 = true;
        Ok(())
    }
}

/// Captures a raw body as bytes.
#[derive(Default)]
pub struct ByteArrayAcceptor(Option<Vec<u8>>);

impl ByteArrayAcceptor {
    pub fn take(self) -> Vec<u8> {
        self.0.expect("read_token always calls exactly one accept_* method")
    }
}

impl Acceptor for ByteArrayAcceptor {
    fn name(&self) -> &'static str {
        "byte array"
    }

    fn accept_byte_array(&mut self, v: Vec<u8>) -> Result<(), DecodeError> {
        self.0 = Some(v);
        Ok(())
    }
}

/// Captures a raw body decoded as UTF-8 text. Malformed UTF-8 is a
/// [`DecodeError::InvalidUtf8`], not a panic and not lossy replacement.
#[derive(Default)]
pub struct StringAcceptor(Option<String>);

impl StringAcceptor {
    pub fn take(self) -> String {
        self.0.expect("read_token always calls exactly one accept_* method")
    }
}

impl Acceptor for StringAcceptor {
    fn name(&self) -> &'static str {
        "string"
    }

    fn accept_byte_array(&mut self, v: Vec<u8>) -> Result<(), DecodeError> {
        let len = v.len();
        let s = String::from_utf8(v).map_err(|_| DecodeError::InvalidUtf8 { len })?;
        self.0 = Some(s);
        Ok(())
    }
}

/// Captures an array header's announced element count.
#[derive(Default)]
pub struct ArrayAcceptor(Option<u32>);

impl ArrayAcceptor {
    pub fn take(self) -> u32 {
        self.0.expect("read_token always calls exactly one accept_* method")
    }
}

impl Acceptor for ArrayAcceptor {
    fn name(&self) -> &'static str {
        "array header"
    }

    fn accept_array_header(&mut self, size: u32) -> Result<(), DecodeError> {
        self.0 = Some(size);
        Ok(())
    }
}

/// Captures a map header's announced entry count.
#[derive(Default)]
pub struct MapAcceptor(Option<u32>);

impl MapAcceptor {
    pub fn take(self) -> u32 {
        self.0.expect("read_token always calls exactly one accept_* method")
    }
}

impl Acceptor for MapAcceptor {
    fn name(&self) -> &'static str {
        "map header"
    }

    fn accept_map_header(&mut self, size: u32) -> Result<(), DecodeError> {
        self.0 = Some(size);
        Ok(())
    }
}
