//! A Rust implementation of the Leach-Salz (RFC 4122 variant) UUID value type
//!
//! ```rust
//! use juuid::Uuid;
//!
//! let uuid = juuid::random_uuid();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.to_bytes()); // as 16-byte big-endian array
//!
//! let uuid = juuid::name_uuid_from_bytes(b"example");
//! assert_eq!(uuid.to_string(), "1a79a4d6-0de6-318e-8e5b-326e338ae533");
//!
//! let uuid: Uuid = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse()?;
//! assert_eq!(uuid.version(), 1);
//! assert_eq!(uuid.timestamp(), Ok(0x1d19dad6ba7b810));
//! assert_eq!(uuid.clock_sequence(), Ok(0xb4));
//! assert_eq!(uuid.node(), Ok(0x00c04fd430c8));
//! # Ok::<(), juuid::ParseError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! A [`Uuid`] holds two 64-bit words. The most significant word carries the time fields and the
//! version; the least significant word carries the variant, the clock sequence, and the node:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |        time_hi        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The canonical string representation renders `time_low`, `time_mid`, `ver` + `time_hi`,
//! `var` + `clock_seq`, and `node` as five hyphen-separated groups of 8, 4, 4, 4, and 12 lowercase
//! hexadecimal digits. The time-based fields can be decoded only from version 1 UUIDs.
//!
//! # Ordering
//!
//! [`Ord`] compares the most significant words first and then the least significant words, each
//! read as a signed 64-bit integer. As a result, UUIDs whose leading bit is set sort before those
//! whose leading bit is clear. Use [`Uuid::cmp_unsigned`] for the unsigned 128-bit order, which
//! agrees with the lexicographic order of the string representation.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide default random generator behind [`random_uuid`].
//!   Implies `std`.
//! - `std`: integrates the library with `std::error::Error` and `String` and lets
//!   [`V4Generator`] serve as an iterator. Without it the library is `no_std`.
//!
//! Optional features:
//!
//! - `uuid`: enables conversions from and to [`uuid::Uuid`].

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

mod id;
pub use id::{NotTimeBasedError, ParseError, ParseErrorKind, Uuid, Variant};

pub mod generator;
pub use generator::V4Generator;

mod v3;
pub use v3::name_uuid_from_bytes;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::random_uuid;
