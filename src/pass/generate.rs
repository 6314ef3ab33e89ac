//! Password generation.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use zeroize::Zeroize;

use super::{PasswordError, PasswordRequest, charset};

/// Duplicate draws tolerated per requested password before a batch gives up.
const DUPLICATES_PER_PASSWORD: usize = 16;
/// Extra duplicates granted to every batch, so small batches tolerate early collisions.
const DUPLICATES_BASE: usize = 64;
/// Hard ceiling on discarded duplicates, whatever the count.
const DUPLICATES_LIMIT: usize = 1 << 16;
/// Largest set pre-allocated up front; bigger batches grow as they fill.
const PRESIZE_LIMIT: usize = 4096;

/// Password generator over an injected random source.
pub struct Generator<R> {
    rng: R,
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a single password.
    ///
    /// One character from each enabled non-lowercase class is placed first,
    /// the rest is filled from the active pool, then the whole sequence is
    /// shuffled so the forced characters land anywhere.
    pub fn generate(&mut self, request: &PasswordRequest) -> Result<String, PasswordError> {
        request.validate()?;

        let pool = charset::build(request);
        let mut buf: Vec<char> = Vec::with_capacity(request.length);

        for class in charset::forced(request) {
            buf.push(random_char(class.chars(), &mut self.rng));
        }
        while buf.len() < request.length {
            buf.push(random_char(&pool, &mut self.rng));
        }
        buf.shuffle(&mut self.rng);

        let password: String = buf.iter().collect();
        buf.zeroize();
        Ok(password)
    }

    /// Generate `count` distinct passwords. Order is unspecified.
    ///
    /// Fails up front when the request cannot produce `count` distinct
    /// strings, and gives up after a bounded number of duplicate draws
    /// otherwise.
    pub fn generate_batch(
        &mut self,
        count: usize,
        request: &PasswordRequest,
    ) -> Result<Vec<String>, PasswordError> {
        request.validate()?;

        match charset::capacity(request) {
            Some(capacity) if count as u128 > capacity => {
                return Err(PasswordError::BatchTooLarge {
                    requested: count,
                    capacity,
                });
            }
            Some(_) => {}
            // Wider than u128, so wider than any usize count.
            None => {}
        }

        let max_duplicates = count
            .saturating_mul(DUPLICATES_PER_PASSWORD)
            .saturating_add(DUPLICATES_BASE)
            .min(DUPLICATES_LIMIT);
        let mut passwords: HashSet<String> = HashSet::with_capacity(count.min(PRESIZE_LIMIT));
        let mut attempts = 0;
        let mut duplicates = 0;

        while passwords.len() < count {
            attempts += 1;

            let mut password = self.generate(request)?;
            if !passwords.contains(&password) {
                passwords.insert(password);
                continue;
            }
            password.zeroize();
            duplicates += 1;
            log::debug!("duplicate password discarded (attempt {})", attempts);

            if duplicates == max_duplicates {
                log::warn!(
                    "batch stopped at {} of {} passwords after {} attempts",
                    passwords.len(),
                    count,
                    attempts
                );
                let produced = passwords.len();
                zeroize_all(passwords);
                return Err(PasswordError::BatchExhausted {
                    requested: count,
                    produced,
                    attempts,
                });
            }
        }

        log::debug!("generated {} passwords in {} attempts", count, attempts);
        Ok(passwords.into_iter().collect())
    }
}

#[inline]
fn random_char<R: Rng>(chars: &[char], rng: &mut R) -> char {
    chars[rng.gen_range(0..chars.len())]
}

fn zeroize_all(passwords: HashSet<String>) {
    for mut password in passwords {
        password.zeroize();
    }
}
