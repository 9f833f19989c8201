/// Errors that can occur at the byte-framing layer: reading fixed-width
/// integers/floats from a [`Channel`](crate::channel::Channel) or filling a
/// bulk byte range.
///
/// This is the lowest error layer in the workspace. Higher layers (the
/// decoder's `DecodeError`) wrap this one for anything that bottoms out in
/// a short read or an I/O failure.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The channel was exhausted before the requested number of bytes could
    /// be read. `needed` is how many bytes the read demanded; `got` is how
    /// many were actually available before end-of-stream.
    #[error("unexpected end of stream: needed {needed} bytes, got {got}")]
    UnexpectedEof { needed: usize, got: usize },

    /// Any other I/O failure from the underlying channel, passed through
    /// unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
