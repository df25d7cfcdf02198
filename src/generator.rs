//! Random UUID (version 4) generator and related types.

use crate::Uuid;

pub mod with_rand08;

/// A trait that defines the random-byte source interface for [`V4Generator`].
///
/// Implementations used in production must be cryptographically strong.
pub trait RandSource {
    /// Fills `dest` entirely with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Represents a UUIDv4 generator that draws 122 random bits per UUID from the random source it
/// owns.
///
/// The generator holds no state other than the random source, so sharing it across threads only
/// requires the synchronization the source itself needs. The following example shares one
/// generator process-wide using Rust's standard synchronization mechanism.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use juuid::V4Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V4Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// The result always reports version 4 and the [`Var10`](crate::Variant::Var10) variant; the
    /// remaining 122 bits are taken from the random source.
    pub fn generate(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Uuid::from_bytes_v(bytes, 4)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use juuid::V4Generator;
///
/// V4Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> std::iter::FusedIterator for V4Generator<R> {}

#[cfg(test)]
mod tests {
    use super::{RandSource, V4Generator};
    use crate::Variant;

    /// Fills every byte with the same value.
    struct ConstSource(u8);

    impl RandSource for ConstSource {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0);
        }
    }

    /// Overwrites version and variant of random bytes
    #[test]
    fn overwrites_version_and_variant_of_random_bytes() {
        let mut g = V4Generator::new(ConstSource(0xff));
        assert_eq!(
            &g.generate().encode() as &str,
            "ffffffff-ffff-4fff-bfff-ffffffffffff"
        );

        let mut g = V4Generator::new(ConstSource(0x00));
        assert_eq!(
            &g.generate().encode() as &str,
            "00000000-0000-4000-8000-000000000000"
        );

        let mut g = V4Generator::new(ConstSource(0x5a));
        let e = g.generate();
        assert_eq!(&e.encode() as &str, "5a5a5a5a-5a5a-4a5a-9a5a-5a5a5a5a5a5a");
        assert_eq!(e.version(), 4);
        assert_eq!(e.variant(), Variant::Var10);
    }

    /// Produces reproducible sequence from deterministic source
    #[test]
    fn produces_reproducible_sequence_from_deterministic_source() {
        use rand::rngs::mock::StepRng;

        let mut a = V4Generator::with_rand08(StepRng::new(0x0123_4567_89ab_cdef, 1));
        let mut b = V4Generator::with_rand08(StepRng::new(0x0123_4567_89ab_cdef, 1));
        for _ in 0..100 {
            let (x, y) = (a.generate(), b.generate());
            assert_eq!(x, y);
            assert_eq!(x.version(), 4);
            assert_eq!(x.variant(), Variant::Var10);
        }
    }

    /// Produces distinct UUIDs from a seeded generator
    #[cfg(feature = "std")]
    #[test]
    fn produces_distinct_uuids_from_seeded_generator() {
        use rand::{rngs::StdRng, SeedableRng};
        use std::collections::HashSet;

        let g = V4Generator::with_rand08(StdRng::seed_from_u64(42));
        let s: HashSet<_> = g.take(10_000).collect();
        assert_eq!(s.len(), 10_000);
    }
}
