//! Random source selection.

use rand::rngs::{OsRng, ThreadRng};
use rand::{CryptoRng, RngCore};

/// Where password randomness comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntropySource {
    /// Thread-local CSPRNG, reseeded from the operating system.
    #[default]
    Thread,
    /// Operating system source, read on every draw.
    Os,
}

impl EntropySource {
    pub fn rng(self) -> SourceRng {
        match self {
            EntropySource::Thread => SourceRng::Thread(rand::thread_rng()),
            EntropySource::Os => SourceRng::Os(OsRng),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntropySource::Thread => "ChaCha12 thread RNG (OS-seeded)",
            EntropySource::Os => "operating system (getrandom)",
        }
    }
}

/// Random generator backing an [`EntropySource`].
pub enum SourceRng {
    Thread(ThreadRng),
    Os(OsRng),
}

impl RngCore for SourceRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            SourceRng::Thread(rng) => rng.next_u32(),
            SourceRng::Os(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            SourceRng::Thread(rng) => rng.next_u64(),
            SourceRng::Os(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            SourceRng::Thread(rng) => rng.fill_bytes(dest),
            SourceRng::Os(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            SourceRng::Thread(rng) => rng.try_fill_bytes(dest),
            SourceRng::Os(rng) => rng.try_fill_bytes(dest),
        }
    }
}

impl CryptoRng for SourceRng {}

/// Whether the operating system source can be read right now.
pub fn os_available() -> bool {
    let mut probe = [0u8; 8];
    match OsRng.try_fill_bytes(&mut probe) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("operating system entropy unavailable: {}", e);
            false
        }
    }
}
