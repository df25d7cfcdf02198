//! Process-wide random source and the [`random_uuid`] entry point.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync::{Mutex, OnceLock};

use crate::{generator::V4Generator, Uuid};
use source::ProcessRng;

/// Returns the generator shared by every thread of the process, seeding it on first call.
fn shared_generator() -> &'static Mutex<V4Generator<ProcessRng>> {
    static SHARED: OnceLock<Mutex<V4Generator<ProcessRng>>> = OnceLock::new();
    SHARED.get_or_init(|| {
        log::debug!("juuid: seeding process-wide random source");
        Mutex::new(V4Generator::new(ProcessRng::seeded()))
    })
}

/// Generates a UUIDv4 object from the process-wide random source.
///
/// The source is created from the operating system entropy on first use and shared by all threads
/// thereafter. On Unix, it is reseeded when the process ID changes (i.e., upon process forks) so
/// that a child process never replays its parent's output.
///
/// # Panics
///
/// Panics if the operating system entropy source is unavailable when the shared source is
/// created, or if a previous holder of the shared source panicked.
///
/// # Examples
///
/// ```rust
/// let uuid = juuid::random_uuid();
/// assert_eq!(uuid.version(), 4);
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
///
/// let uuid_string: String = juuid::random_uuid().to_string();
/// ```
pub fn random_uuid() -> Uuid {
    shared_generator()
        .lock()
        .expect("juuid: process-wide random source poisoned")
        .generate()
}

mod source {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha12Core;

    use crate::generator::RandSource;

    /// Bytes drawn from the ChaCha stream before it is rekeyed from [`OsRng`].
    const RESEED_THRESHOLD: u64 = 64 * 1024;

    /// ChaCha12 stream periodically rekeyed from the operating system, tagged with the process ID
    /// it was seeded in.
    pub struct ProcessRng {
        rng: ReseedingRng<ChaCha12Core, OsRng>,
        pid: u32,
    }

    impl ProcessRng {
        pub fn seeded() -> Self {
            let core =
                ChaCha12Core::from_rng(OsRng).expect("juuid: could not seed random source");
            Self {
                rng: ReseedingRng::new(core, RESEED_THRESHOLD, OsRng),
                pid: std::process::id(),
            }
        }

        /// Replaces the stream with a freshly seeded one if this process is not the one that
        /// seeded it, returning whether it did.
        pub(super) fn reseed_if_forked(&mut self) -> bool {
            if self.pid == std::process::id() {
                return false;
            }
            log::debug!("juuid: process ID changed from {}; reseeding", self.pid);
            *self = Self::seeded();
            true
        }
    }

    impl RandSource for ProcessRng {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            if cfg!(unix) {
                self.reseed_if_forked();
            }
            self.rng.fill_bytes(dest);
        }
    }

}
