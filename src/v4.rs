//! UUIDv4-related functionality

use crate::Uuid;
use rand::RngCore;

/// Generates a UUIDv4 object.
///
/// The sixteen bytes come from the thread-local cryptographically secure
/// random number generator; the version and variant bits are stamped over
/// them.
///
/// # Examples
///
/// ```rust
/// use uuid4122::uuid4;
///
/// let uuid = uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid4() -> Uuid {
    uuid4_with(&mut rand::thread_rng())
}

/// Generates a UUIDv4 object from a caller-supplied random number generator.
///
/// The generator decides the randomness quality; hand it a cryptographically
/// secure one unless the identifiers are throwaway test data.
///
/// # Examples
///
/// ```rust
/// use uuid4122::uuid4_with;
///
/// let uuid = uuid4_with(&mut rand::rngs::OsRng);
/// assert_eq!(uuid.version(), 4);
/// ```
pub fn uuid4_with(rng: &mut impl RngCore) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Uuid::from_versioned_bytes(4, bytes)
}

#[cfg(test)]
mod tests {
    use super::{uuid4, uuid4_with};
    use crate::Variant;

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES).map(|_| uuid4().into()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (0..48).chain(52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {}: {}", i, p);
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = uuid4();
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), 4);
        }
    }

    /// Stamps version and variant over whatever the generator produced
    #[test]
    fn stamps_version_and_variant_over_whatever_the_generator_produced() {
        struct ConstRng(u8);

        impl rand::RngCore for ConstRng {
            fn next_u32(&mut self) -> u32 {
                u32::from_ne_bytes([self.0; 4])
            }

            fn next_u64(&mut self) -> u64 {
                u64::from_ne_bytes([self.0; 8])
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(self.0);
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
                dest.fill(self.0);
                Ok(())
            }
        }

        assert_eq!(
            &uuid4_with(&mut ConstRng(0x00)).to_string(),
            "00000000-0000-4000-8000-000000000000"
        );
        assert_eq!(
            &uuid4_with(&mut ConstRng(0xff)).to_string(),
            "ffffffff-ffff-4fff-bfff-ffffffffffff"
        );
        assert_eq!(
            &uuid4_with(&mut ConstRng(0x55)).to_string(),
            "55555555-5555-4555-9555-555555555555"
        );
    }
}
