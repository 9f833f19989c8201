use mp_wire::WireError;

/// Errors that can occur while decoding a MessagePack value stream.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── Format            ← unknown tag byte, invalid UTF-8 in a string
///   ├── SizeLimit          ← announced raw/array/map size exceeds the configured limit
///   ├── Type                ← acceptor received a token kind it doesn't handle
///   └── Wire(WireError)     ← short read / I/O failure from the channel
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The head byte did not match any tag in the classic MessagePack
    /// format table.
    #[error("unknown format byte: {byte:#04X}")]
    UnknownTag { byte: u8 },

    /// A raw body's bytes were not valid UTF-8 when read as a string.
    #[error("invalid UTF-8 in string body ({len} bytes)")]
    InvalidUtf8 { len: usize },

    /// An announced raw/array/map size exceeded the configured limit (or
    /// was negative once widened to a signed width).
    #[error("{kind} size {size} exceeds configured limit {limit}")]
    SizeLimit {
        kind: SizeLimitKind,
        size: i64,
        limit: u32,
    },

    /// The acceptor driving this read does not accept the decoded token's
    /// kind (e.g. `read_int` against a value that only fits in `u64`).
    #[error("{accepted} cannot hold a {found} value")]
    Type {
        accepted: &'static str,
        found: &'static str,
    },

    /// A wire-level framing error: short read or channel I/O failure.
    #[error(transparent)]
    Wire(#[from] WireError),
}

/// Which size guard rejected an announced length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeLimitKind {
    Raw,
    Array,
    Map,
}

impl std::fmt::Display for SizeLimitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Raw => "raw",
            Self::Array => "array",
            Self::Map => "map",
        };
        f.write_str(name)
    }
}
