/// Size guards applied to announced raw/array/map lengths before any
/// allocation proportional to that length happens.
///
/// Defaults match the reference implementation's defensive limits: a
/// decoder reading untrusted input should never allocate more than these
/// without the caller opting in via [`DecoderConfig::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum raw (string/binary) body length, in bytes.
    pub max_raw_len: u32,
    /// Maximum number of elements in an array header.
    pub max_array_len: u32,
    /// Maximum number of entries in a map header.
    pub max_map_len: u32,
}

impl DecoderConfig {
    /// 128 MiB.
    pub const DEFAULT_MAX_RAW_LEN: u32 = 1 << 27;
    /// 4 Mi elements.
    pub const DEFAULT_MAX_ARRAY_LEN: u32 = 1 << 22;
    /// 2 Mi entries.
    pub const DEFAULT_MAX_MAP_LEN: u32 = 1 << 21;

    #[must_use]
    pub fn new(max_raw_len: u32, max_array_len: u32, max_map_len: u32) -> Self {
        Self {
            max_raw_len,
            max_array_len,
            max_map_len,
        }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_raw_len: Self::DEFAULT_MAX_RAW_LEN,
            max_array_len: Self::DEFAULT_MAX_ARRAY_LEN,
            max_map_len: Self::DEFAULT_MAX_MAP_LEN,
        }
    }
}
