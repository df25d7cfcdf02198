//! Name-based UUID (version 3) functionality

use crate::Uuid;
use md5::{Digest, Md5};

/// Generates a UUIDv3 object from the MD5 digest of `name`.
///
/// The same `name` always yields the same UUID.
///
/// # Examples
///
/// ```rust
/// let uuid = juuid::name_uuid_from_bytes(b"example");
/// assert_eq!(uuid.to_string(), "1a79a4d6-0de6-318e-8e5b-326e338ae533");
/// assert_eq!(uuid.version(), 3);
/// ```
pub fn name_uuid_from_bytes(name: impl AsRef<[u8]>) -> Uuid {
    let digest: [u8; 16] = Md5::digest(name.as_ref()).into();
    Uuid::from_bytes_v(digest, 3)
}
