//! Transfer syntax specifiers and their resolution.
//!
//! A [`TransferSyntax`] is the combination of a byte order
//! and an explicit or implicit VR type tagging.
//! The pixel data category is tracked separately as a [`PixelEncoding`].
//!
//! Some senders declare one transfer syntax in the file meta group
//! but write the data set in another,
//! so the declared syntax can be checked against the upcoming bytes
//! with [`resolve_consistent`].

use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
pub use byteordered::Endianness;
use dcmingest_core::dictionary::DataDictionary;
use dcmingest_core::{Tag, VR};
use dcmingest_dictionary_std::uids;
use snafu::Snafu;
use tracing::warn;

/// The byte order of the machine, computed once at compile time.
pub const NATIVE_BYTE_ORDER: Endianness = if cfg!(target_endian = "big") {
    Endianness::Big
} else {
    Endianness::Little
};

/// The number of bytes inspected by [`resolve_consistent`].
pub const PEEK_LEN: usize = 8;

/// Whether value representations are written inline with each element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TypeTagging {
    /// The VR is written after the tag
    Explicit,
    /// The VR is looked up from a dictionary
    Implicit,
}

/// The category of the pixel data encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelEncoding {
    /// Native, uncompressed pixel data
    Uncompressed,
    /// A lossy JPEG family encoding
    CompressedLossy,
    /// A lossless JPEG family encoding
    CompressedLossless,
    /// RLE Lossless
    CompressedRunLength,
    /// Compressed in some other way
    CompressedUnknown,
}

impl PixelEncoding {
    /// Whether pixel data in this encoding is compressed.
    pub fn is_compressed(self) -> bool {
        self != PixelEncoding::Uncompressed
    }
}

/// A byte order and VR type tagging pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TransferSyntax {
    /// the byte order of multi-byte numbers
    pub byte_order: Endianness,
    /// whether the VR is written inline
    pub type_tagging: TypeTagging,
}

impl TransferSyntax {
    /// Explicit VR Little Endian, also used by the file meta group
    pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
        byte_order: Endianness::Little,
        type_tagging: TypeTagging::Explicit,
    };
    /// Implicit VR Little Endian, the default transfer syntax
    pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
        byte_order: Endianness::Little,
        type_tagging: TypeTagging::Implicit,
    };
    /// Explicit VR Big Endian
    pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = TransferSyntax {
        byte_order: Endianness::Big,
        type_tagging: TypeTagging::Explicit,
    };

    /// Whether the VR is written inline.
    #[inline]
    pub fn is_explicit_vr(self) -> bool {
        self.type_tagging == TypeTagging::Explicit
    }

    /// Whether multi-byte numbers are big endian.
    #[inline]
    pub fn is_big_endian(self) -> bool {
        self.byte_order == Endianness::Big
    }

    /// The same byte order with the opposite type tagging.
    pub fn with_flipped_tagging(self) -> Self {
        TransferSyntax {
            type_tagging: match self.type_tagging {
                TypeTagging::Explicit => TypeTagging::Implicit,
                TypeTagging::Implicit => TypeTagging::Explicit,
            },
            ..self
        }
    }

    /// The same type tagging with the opposite byte order.
    pub fn with_swapped_byte_order(self) -> Self {
        TransferSyntax {
            byte_order: match self.byte_order {
                Endianness::Little => Endianness::Big,
                Endianness::Big => Endianness::Little,
            },
            ..self
        }
    }

    /// The syntax in effect for an element of the given tag.
    /// The file meta group is always Explicit VR Little Endian.
    #[inline]
    pub fn for_tag(self, tag: Tag) -> Self {
        if tag.is_meta() {
            TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN
        } else {
            self
        }
    }

    /// Whether values in this syntax differ from the native byte order.
    #[inline]
    pub fn needs_swap(self) -> bool {
        self.byte_order != NATIVE_BYTE_ORDER
    }
}

impl std::fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tagging = match self.type_tagging {
            TypeTagging::Explicit => "Explicit",
            TypeTagging::Implicit => "Implicit",
        };
        let order = match self.byte_order {
            Endianness::Little => "Little",
            Endianness::Big => "Big",
        };
        write!(f, "{} VR {} Endian", tagging, order)
    }
}

/// The outcome of mapping a transfer syntax UID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedUid {
    pub syntax: TransferSyntax,
    pub pixel_encoding: PixelEncoding,
}

/// Error type for transfer syntax UIDs which cannot be used.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum UidError {
    /// The UID names an encoding which is recognized but not supported
    #[snafu(display("Transfer syntax {} ({}) is not currently supported", uid, family))]
    Unsupported { uid: String, family: &'static str },
    /// The UID is not a known transfer syntax
    #[snafu(display("Unknown transfer syntax {}", uid))]
    Unresolvable { uid: String },
}

fn uncompressed(syntax: TransferSyntax) -> ResolvedUid {
    ResolvedUid {
        syntax,
        pixel_encoding: PixelEncoding::Uncompressed,
    }
}

/// Map a transfer syntax UID to its byte order,
/// type tagging and pixel data category.
///
/// Trailing padding of the UID value is ignored.
/// Every encapsulated syntax is Explicit VR Little Endian.
pub fn from_uid(uid: &str) -> Result<ResolvedUid, UidError> {
    let uid = uid.trim_end_matches(|c: char| c == '\0' || c == ' ');
    match uid {
        uids::IMPLICIT_VR_LITTLE_ENDIAN => {
            return Ok(uncompressed(TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN))
        }
        uids::EXPLICIT_VR_LITTLE_ENDIAN => {
            return Ok(uncompressed(TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN))
        }
        uids::EXPLICIT_VR_BIG_ENDIAN => {
            return Ok(uncompressed(TransferSyntax::EXPLICIT_VR_BIG_ENDIAN))
        }
        uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN => {
            return UnsupportedSnafu {
                uid,
                family: "deflate",
            }
            .fail()
        }
        uids::RLE_LOSSLESS => {
            return Ok(ResolvedUid {
                syntax: TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
                pixel_encoding: PixelEncoding::CompressedRunLength,
            })
        }
        _ => {}
    }

    if let Some(rest) = uid.strip_prefix(uids::JPEG_FAMILY_PREFIX) {
        let process: Option<u32> = rest.split('.').next().and_then(|n| n.parse().ok());
        let pixel_encoding = match process {
            Some(50..=56 | 59..=64 | 81 | 91 | 93) => PixelEncoding::CompressedLossy,
            Some(57 | 58 | 65 | 66 | 70 | 80 | 90 | 92) => PixelEncoding::CompressedLossless,
            Some(100..=108) => {
                return UnsupportedSnafu {
                    uid,
                    family: "MPEG",
                }
                .fail()
            }
            _ => PixelEncoding::CompressedUnknown,
        };
        return Ok(ResolvedUid {
            syntax: TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            pixel_encoding,
        });
    }

    UnresolvableSnafu { uid }.fail()
}

/// Read a 16-bit unsigned integer in the given byte order.
#[inline]
pub fn read_u16(buf: &[u8], order: Endianness) -> u16 {
    match order {
        Endianness::Little => LittleEndian::read_u16(buf),
        Endianness::Big => BigEndian::read_u16(buf),
    }
}

/// Read a 32-bit unsigned integer in the given byte order.
#[inline]
pub fn read_u32(buf: &[u8], order: Endianness) -> u32 {
    match order {
        Endianness::Little => LittleEndian::read_u32(buf),
        Endianness::Big => BigEndian::read_u32(buf),
    }
}

/// Write a 16-bit unsigned integer in the given byte order.
#[inline]
pub fn write_u16(buf: &mut [u8], value: u16, order: Endianness) {
    match order {
        Endianness::Little => LittleEndian::write_u16(buf, value),
        Endianness::Big => BigEndian::write_u16(buf, value),
    }
}

/// Write a 32-bit unsigned integer in the given byte order.
#[inline]
pub fn write_u32(buf: &mut [u8], value: u32, order: Endianness) {
    match order {
        Endianness::Little => LittleEndian::write_u32(buf, value),
        Endianness::Big => BigEndian::write_u32(buf, value),
    }
}

/// The width of the individual numbers of a value,
/// for the VRs whose values change with the byte order.
pub fn swap_width(vr: VR) -> Option<usize> {
    match vr {
        VR::AT => Some(2),
        vr => vr.numeric_width(),
    }
}

/// Reverse the byte order of each `width`-sized number in the buffer.
/// A trailing incomplete number is left as is.
pub fn swap_in_place(buf: &mut [u8], width: usize) {
    if width < 2 {
        return;
    }
    for word in buf.chunks_exact_mut(width) {
        word.reverse();
    }
}

fn vr_matches(expected: VR, found: VR) -> bool {
    match expected {
        VR::XS => matches!(found, VR::US | VR::SS),
        VR::OX => matches!(found, VR::OB | VR::OW),
        vr => vr == found,
    }
}

/// Check the declared transfer syntax against the upcoming bytes
/// and correct it when the bytes are clearly written in another syntax.
///
/// `peek` should hold the next [`PEEK_LEN`] bytes of the stream,
/// starting at an element tag.
///
/// - If the tag is unknown in the declared byte order
///   but known once swapped, the byte order is flipped.
/// - If Implicit VR is declared,
///   but bytes 4 and 5 form a VR code which agrees with the dictionary
///   (or the tag is unknown), Explicit VR is returned.
/// - If Explicit VR is declared,
///   but bytes 4 and 5 do not form a VR code, Implicit VR is returned.
///
/// Otherwise, or when too few bytes are given,
/// or the tag is an item or delimiter,
/// the declared syntax is returned unchanged.
pub fn resolve_consistent<D>(declared: TransferSyntax, peek: &[u8], dict: &D) -> TransferSyntax
where
    D: DataDictionary,
{
    if peek.len() < 6 {
        return declared;
    }

    let mut resolved = declared;
    let read_tag = |order: Endianness| Tag(read_u16(&peek[0..2], order), read_u16(&peek[2..4], order));

    let mut tag = read_tag(resolved.byte_order);
    if tag.is_delimiter_group() {
        return declared;
    }
    if dict.by_tag(tag).is_none() {
        let swapped = resolved.with_swapped_byte_order();
        let swapped_tag = read_tag(swapped.byte_order);
        if !swapped_tag.is_delimiter_group() && dict.by_tag(swapped_tag).is_some() {
            warn!(
                "Data set starts with {} in {}, switching byte order",
                swapped_tag, swapped
            );
            resolved = swapped;
            tag = swapped_tag;
        }
    }

    let entry = dict.by_tag(tag);
    let inline_vr = VR::from_binary([peek[4], peek[5]]);
    match (resolved.type_tagging, inline_vr) {
        (TypeTagging::Implicit, Some(vr)) => {
            if entry.map_or(true, |e| vr_matches(e.vr, vr)) {
                warn!(
                    "Element {} carries an inline VR {} despite implicit VR syntax",
                    tag, vr
                );
                resolved = resolved.with_flipped_tagging();
            }
        }
        (TypeTagging::Explicit, None) => {
            warn!(
                "Element {} has no valid inline VR despite explicit VR syntax",
                tag
            );
            resolved = resolved.with_flipped_tagging();
        }
        _ => {}
    }
    resolved
}
