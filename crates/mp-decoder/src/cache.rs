use mp_wire::tag::EMPTY_SENTINEL;
use mp_wire::{Channel, WireError};

/// The cached lookahead tag byte that lets [`next_type`](crate::Decoder::next_type)
/// and [`try_skip_nil`](crate::Decoder::try_skip_nil) peek the next value's
/// kind without consuming it.
///
/// *Empty* is encoded as [`EMPTY_SENTINEL`] — a tag value the format table
/// never assigns — rather than an `Option<u8>`, matching the branch-free
/// encoding of the reference implementation this is grounded on.
pub(crate) struct HeadCache {
    value: u8,
}

impl HeadCache {
    pub fn new() -> Self {
        Self {
            value: EMPTY_SENTINEL,
        }
    }

    /// Return the cached head byte, fetching one from `channel` if empty.
    pub fn get(&mut self, channel: &mut dyn Channel) -> Result<u8, WireError> {
        if self.value == EMPTY_SENTINEL {
            self.value = channel.read_u8()?;
        }
        Ok(self.value)
    }

    /// Mark the cache empty; the next `get` will fetch a fresh byte.
    pub fn reset(&mut self) {
        self.value = EMPTY_SENTINEL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mp_wire::SliceChannel;

    #[test]
    fn get_fetches_once_and_caches() {
        let mut channel = SliceChannel::new(&[0x2A, 0x99]);
        let mut cache = HeadCache::new();
        assert_eq!(cache.get(&mut channel).unwrap(), 0x2A);
        // A second get without a reset must not advance the channel.
        assert_eq!(cache.get(&mut channel).unwrap(), 0x2A);
        assert_eq!(channel.position(), 1);
    }

    #[test]
    fn reset_forces_a_fresh_fetch() {
        let mut channel = SliceChannel::new(&[0x2A, 0x99]);
        let mut cache = HeadCache::new();
        cache.get(&mut channel).unwrap();
        cache.reset();
        assert_eq!(cache.get(&mut channel).unwrap(), 0x99);
    }
}
