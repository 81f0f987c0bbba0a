//! Identifier generators.
//!
//! Each generator takes a count and returns that many strings, in
//! generation order, with no deduplication.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use uuid::Uuid;

use crate::types::IdKind;
use crate::wordlist::{ADJECTIVES, NOUNS};

/// Number of random bytes in a token.
pub const TOKEN_BYTES: usize = 15;

/// Generate `count` identifiers of the given kind.
pub fn generate(kind: IdKind, count: usize) -> Vec<String> {
    tracing::debug!(%kind, count, "generating batch");
    match kind {
        IdKind::Uuid => generate_uuids(count),
        IdKind::Name => generate_names(count),
        IdKind::Password => generate_tokens(count),
    }
}

// ============================================================================
// UUID
// ============================================================================

/// Random v4 UUIDs in canonical 8-4-4-4-12 lowercase form.
pub fn generate_uuids(count: usize) -> Vec<String> {
    (0..count).map(|_| Uuid::new_v4().to_string()).collect()
}

// ============================================================================
// NAMES
// ============================================================================

/// Random "adjective-noun" names.
///
/// Every draw builds a fresh generator seeded from the wall clock.
pub fn generate_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let mut rng = StdRng::seed_from_u64(clock_seed());
            compose_name(&mut rng)
        })
        .collect()
}

/// Compose one name from the wordlists.
pub fn compose_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    format!("{}-{}", adjective, noun)
}

/// Current UTC time in nanoseconds, truncated to 64 bits.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

// ============================================================================
// TOKENS
// ============================================================================

/// Random tokens from the operating system's secure random source.
pub fn generate_tokens(count: usize) -> Vec<String> {
    generate_tokens_from(&mut OsRng, count)
}

/// Random tokens drawn from `rng`.
///
/// Stops at the first failed draw and returns what was produced so far.
pub fn generate_tokens_from<R: RngCore + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    let mut tokens = Vec::with_capacity(count);
    for _ in 0..count {
        let mut bytes = [0u8; TOKEN_BYTES];
        if let Err(e) = rng.try_fill_bytes(&mut bytes) {
            tracing::error!(error = %e, produced = tokens.len(), "random source failed, returning partial batch");
            return tokens;
        }
        tokens.push(to_hex(&bytes));
    }
    tokens
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

// ============================================================================
// TESTS
// ============================================================================
