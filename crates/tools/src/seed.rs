//! Host-side seeding policy: parsing seed arguments and drawing fresh
//! entropy seeds. The core never reads the clock; only this module does.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cave_core::MapSeed;

/// A bare number becomes a direct seed state; anything else is seed text.
pub fn parse_seed_arg(raw: &str) -> MapSeed {
    raw.parse::<u64>().map_or_else(|_| MapSeed::from(raw), MapSeed::Number)
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A fresh seed from wall-clock, process id, and a per-process counter,
/// mixed so consecutive calls land far apart.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_argument_parses_as_a_direct_seed() {
        assert_eq!(parse_seed_arg("4242"), MapSeed::Number(4_242));
        assert_eq!(parse_seed_arg("0"), MapSeed::Number(0));
    }

    #[test]
    fn non_numeric_argument_parses_as_seed_text() {
        assert_eq!(parse_seed_arg("deep lair"), MapSeed::from("deep lair"));
        assert_eq!(parse_seed_arg("-5"), MapSeed::from("-5"));
        assert_eq!(parse_seed_arg("12abc"), MapSeed::from("12abc"));
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}
