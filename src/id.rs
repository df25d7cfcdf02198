#[cfg(not(feature = "std"))]
use core as std;

use fstr::FStr;
use std::{cmp, fmt, hash, str};

/// Number of hexadecimal digits in each hyphen-separated group of the 8-4-4-4-12 form.
const GROUP_WIDTHS: [usize; 5] = [8, 4, 4, 4, 12];

/// Represents a Universally Unique IDentifier of the Leach-Salz layout.
///
/// The 128-bit payload is held as two 64-bit words: `high` carries the most significant 64 bits
/// and `low` the least significant 64 bits. Any bit pattern is representable; only the generator
/// functions guarantee the version and variant bits.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Uuid {
    high: u64,
    low: u64,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self::from_bits(0, 0);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self::from_bits(u64::MAX, u64::MAX);

    /// Creates an object from the most and least significant 64 bits, storing them verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use juuid::Uuid;
    ///
    /// let x = Uuid::from_bits(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210);
    /// assert_eq!(x.to_string(), "01234567-89ab-cdef-fedc-ba9876543210");
    /// ```
    pub const fn from_bits(most_sig_bits: u64, least_sig_bits: u64) -> Self {
        Self {
            high: most_sig_bits,
            low: least_sig_bits,
        }
    }

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        let mut high = 0u64;
        let mut low = 0u64;
        let mut i = 0;
        while i < 8 {
            high = (high << 8) | bytes[i] as u64;
            low = (low << 8) | bytes[i + 8] as u64;
            i += 1;
        }
        Self { high, low }
    }

    /// Creates an object from 16 bytes after overwriting the version nibble with `version` and
    /// the variant bits with `10`.
    pub(crate) const fn from_bytes_v(mut bytes: [u8; 16], version: u8) -> Self {
        debug_assert!(version < 16);
        bytes[6] = (version << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self::from_bytes(bytes)
    }

    /// Returns the 16-byte big-endian representation: `high` followed by `low`.
    pub const fn to_bytes(&self) -> [u8; 16] {
        let (h, l) = (self.high.to_be_bytes(), self.low.to_be_bytes());
        [
            h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], l[0], l[1], l[2], l[3], l[4], l[5],
            l[6], l[7],
        ]
    }

    /// Returns the most significant 64 bits.
    pub const fn most_significant_bits(&self) -> u64 {
        self.high
    }

    /// Returns the least significant 64 bits.
    pub const fn least_significant_bits(&self) -> u64 {
        self.low
    }

    /// Returns the 4-bit version field (bits masked by `0xf000` in the most significant word).
    ///
    /// The value is meaningful only when [`variant`](Self::variant) is [`Variant::Var10`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// let x: juuid::Uuid = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse()?;
    /// assert_eq!(x.version(), 1);
    /// # Ok::<(), juuid::ParseError>(())
    /// ```
    pub const fn version(&self) -> u8 {
        ((self.high >> 12) & 0x0f) as u8
    }

    /// Returns the variant decoded from the leading bits of the least significant word.
    pub const fn variant(&self) -> Variant {
        match self.low >> 61 {
            0b000..=0b011 => Variant::Var0,
            0b100 | 0b101 => Variant::Var10,
            0b110 => Variant::Var110,
            _ => Variant::Var111,
        }
    }

    /// Returns the 60-bit timestamp of a version 1 UUID, counted in 100-nanosecond intervals
    /// since 1582-10-15T00:00:00Z.
    ///
    /// # Errors
    ///
    /// Returns [`NotTimeBasedError`] if the version field is not 1.
    pub const fn timestamp(&self) -> Result<u64, NotTimeBasedError> {
        if self.version() != 1 {
            return Err(NotTimeBasedError {});
        }
        Ok(((self.high & 0x0fff) << 48)
            | (((self.high >> 16) & 0xffff) << 32)
            | (self.high >> 32))
    }

    /// Returns the 14-bit clock sequence of a version 1 UUID.
    ///
    /// # Errors
    ///
    /// Returns [`NotTimeBasedError`] if the version field is not 1.
    pub const fn clock_sequence(&self) -> Result<u16, NotTimeBasedError> {
        if self.version() != 1 {
            return Err(NotTimeBasedError {});
        }
        Ok(((self.low >> 48) & 0x3fff) as u16)
    }

    /// Returns the 48-bit node value of a version 1 UUID.
    ///
    /// # Errors
    ///
    /// Returns [`NotTimeBasedError`] if the version field is not 1.
    pub const fn node(&self) -> Result<u64, NotTimeBasedError> {
        if self.version() != 1 {
            return Err(NotTimeBasedError {});
        }
        Ok(self.low & 0x0000_ffff_ffff_ffff)
    }

    /// Returns the 32-bit hash code: the two words XOR-folded into 64 bits, then the halves of
    /// that result XOR-folded into 32 bits.
    ///
    /// The [`Hash`](hash::Hash) implementation feeds exactly this value to the hasher.
    pub const fn hash_code(&self) -> i32 {
        let hilo = self.high ^ self.low;
        ((hilo >> 32) as u32 ^ hilo as u32) as i32
    }

    /// Compares two UUIDs as unsigned 128-bit integers.
    ///
    /// Unlike [`Ord`], which compares each word as a signed 64-bit integer, this ordering agrees
    /// with the lexicographic order of the canonical string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use juuid::Uuid;
    /// use std::cmp::Ordering;
    ///
    /// let x = Uuid::from_bits(0x8000_0000_0000_0000, 0);
    /// let y = Uuid::from_bits(0x0000_0000_0000_0001, 0);
    /// assert_eq!(x.cmp(&y), Ordering::Less);
    /// assert_eq!(x.cmp_unsigned(&y), Ordering::Greater);
    /// ```
    pub fn cmp_unsigned(&self, other: &Self) -> cmp::Ordering {
        (self.high, self.low).cmp(&(other.high, other.low))
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use juuid::Uuid;
    ///
    /// let x = "1A79A4D6-0DE6-318E-8E5B-326E338AE533".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "1a79a4d6-0de6-318e-8e5b-326e338ae533");
    /// assert_eq!(format!("{}", y), "1a79a4d6-0de6-318e-8e5b-326e338ae533");
    /// # Ok::<(), juuid::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let groups = [
            self.high >> 32,
            self.high >> 16,
            self.high,
            self.low >> 48,
            self.low,
        ];

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for (i, (value, width)) in groups.into_iter().zip(GROUP_WIDTHS).enumerate() {
            if i > 0 {
                *buf_iter.next().unwrap() = b'-';
            }
            for j in (0..width).rev() {
                *buf_iter.next().unwrap() = DIGITS[(value >> (j * 4)) as usize & 15];
            }
        }
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Both lowercase and uppercase digits are accepted. Each group must consist of exactly the
    /// expected number of hexadecimal digits; sign characters, whitespace, and braces are
    /// rejected.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if src.split('-').count() != GROUP_WIDTHS.len() {
            return Err(ParseError::new(ParseErrorKind::GroupCount));
        }

        let mut groups = [0u64; 5];
        for ((dst, part), width) in groups.iter_mut().zip(src.split('-')).zip(GROUP_WIDTHS) {
            *dst = part
                .chars()
                .try_fold(0u64, |acc, c| c.to_digit(16).map(|d| (acc << 4) | d as u64))
                .ok_or(ParseError::new(ParseErrorKind::InvalidDigit))?;
            if part.len() != width {
                return Err(ParseError::new(ParseErrorKind::GroupLength));
            }
        }

        Ok(Self::from_bits(
            (groups[0] << 32) | (groups[1] << 16) | groups[2],
            (groups[3] << 48) | groups[4],
        ))
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl hash::Hash for Uuid {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl Ord for Uuid {
    /// Compares the most significant words first and then the least significant words, each as
    /// a signed 64-bit integer.
    ///
    /// See [`Uuid::cmp_unsigned`] for the unsigned 128-bit magnitude order.
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        (self.high as i64, self.low as i64).cmp(&(other.high as i64, other.low as i64))
    }
}

impl PartialOrd for Uuid {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.to_bytes()
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self::from_bytes(src)
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        ((src.high as u128) << 64) | src.low as u128
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from_bits((src >> 64) as u64, src as u64)
    }
}

/// UUID variant, i.e. the layout family indicated by the leading bits of the eighth byte.
///
/// The discriminant of each variant is the value of those leading bits read as an integer, so
/// `variant as u8` yields 0, 2, 6, or 7.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Variant {
    /// `0xxx`: reserved for NCS backward compatibility.
    Var0 = 0,

    /// `10xx`: the IETF (Leach-Salz) variant.
    Var10 = 2,

    /// `110x`: reserved for Microsoft backward compatibility.
    Var110 = 6,

    /// `111x`: reserved for future definition.
    Var111 = 7,
}

impl From<Variant> for u8 {
    fn from(src: Variant) -> Self {
        src as u8
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

/// Reason a string failed to parse as a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The string does not consist of exactly five hyphen-separated groups.
    GroupCount,

    /// A group contains a character other than a hexadecimal digit.
    InvalidDigit,

    /// A group does not have the 8, 4, 4, 4, or 12 digits expected at its position.
    GroupLength,
}

impl ParseError {
    const fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the reason for the failure.
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            ParseErrorKind::GroupCount => "expected five hyphen-separated groups",
            ParseErrorKind::InvalidDigit => "invalid hexadecimal digit",
            ParseErrorKind::GroupLength => "invalid group length",
        };
        write!(f, "invalid string representation: {}", reason)
    }
}

/// Error requesting a time-based field from a UUID whose version is not 1.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NotTimeBasedError {}

impl fmt::Display for NotTimeBasedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a time-based UUID")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{NotTimeBasedError, ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }

    impl std::error::Error for ParseError {}

    impl std::error::Error for NotTimeBasedError {}
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.to_bytes())
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self::from_bytes(src.into_bytes())
        }
    }
}
