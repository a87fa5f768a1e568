//! This module contains the basic data types for interpreting data element headers:
//! the attribute tag, the value representation, the value length,
//! and the header itself.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Anything with a declared value length, such as an element or an item.
pub trait HasLength {
    fn length(&self) -> Length;

    /// Whether the declared length is zero.
    fn is_empty(&self) -> bool {
        self.length() == Length(0)
    }
}

/// Tag-based queries over an element header.
pub trait Header: HasLength {
    fn tag(&self) -> Tag;

    fn is_item(&self) -> bool {
        self.tag() == Tag::ITEM
    }

    fn is_item_delimiter(&self) -> bool {
        self.tag() == Tag::ITEM_DELIMITER
    }

    fn is_sequence_delimiter(&self) -> bool {
        self.tag() == Tag::SEQUENCE_DELIMITER
    }
}

/// The header of a data element: tag, value representation and value length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// the element tag
    pub tag: Tag,
    /// the element value representation
    pub vr: VR,
    /// the reported value length
    pub len: Length,
}

impl HasLength for DataElementHeader {
    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for DataElementHeader {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl DataElementHeader {
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }
}

/// An enum type for a value representation.
///
/// Besides the standard codes,
/// two contextual codes are admitted in dictionaries
/// but never on the wire:
/// `XS` (US or SS, depending on the pixel representation)
/// and `OX` (OB or OW, depending on the number of bits allocated).
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
    /// Contextual: US or SS, resolved with the pixel representation
    XS,
    /// Contextual: OB or OW, resolved with the bits allocated
    OX,
}

/// The byte layout of the value length field in explicit VR encodings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LengthForm {
    /// 2-byte VR, 2-byte value length
    Short,
    /// 2-byte VR, 2 reserved bytes, 4-byte value length
    Long,
}

impl VR {
    /// The VR written as the given two bytes.
    /// Contextual codes are never recognized here.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        CODES
            .iter()
            .find(|(_, code)| code.as_bytes() == chars)
            .map(|&(vr, _)| vr)
            .filter(|vr| !vr.is_contextual())
    }

    /// The two-character code of this VR.
    pub fn to_string(self) -> &'static str {
        CODES[self as usize].1
    }

    /// The two bytes of this VR's code, as written in explicit VR encodings.
    pub fn to_bytes(self) -> [u8; 2] {
        let code = self.to_string().as_bytes();
        [code[0], code[1]]
    }

    /// Whether this is one of the placeholder codes
    /// which must be resolved from sibling elements.
    #[inline]
    pub fn is_contextual(self) -> bool {
        matches!(self, VR::XS | VR::OX)
    }

    /// The layout of the value length field when this VR is written explicitly.
    pub fn length_form(self) -> LengthForm {
        use VR::*;
        match self {
            // PS3.5 7.1.2:
            // for VRs of AE, AS, AT, CS, DA, DS, DT, FL, FD, IS, LO, LT, PN,
            // SH, SL, SS, ST, TM, UI, UL and US the Value Length Field is the
            // 16-bit unsigned integer following the two byte VR Field
            AE | AS | AT | CS | DA | DS | DT | FL | FD | IS | LO | LT | PN | SH | SL | SS | ST
            | TM | UI | UL | US | XS => LengthForm::Short,
            // all other VRs carry 2 reserved bytes and a 32-bit length
            OB | OD | OF | OL | OV | OW | SQ | SV | UC | UN | UR | UT | UV | OX => LengthForm::Long,
        }
    }

    /// The size in bytes of one value, for binary numeric VRs.
    /// Returns `None` for textual, opaque and sequence VRs.
    pub fn numeric_width(self) -> Option<usize> {
        use VR::*;
        match self {
            US | SS | OW | XS => Some(2),
            UL | SL | FL | OF | OL => Some(4),
            FD | OD | SV | UV | OV => Some(8),
            _ => None,
        }
    }

    /// Whether values of this VR are character strings
    /// which may hold multiple values separated by a backslash.
    pub fn is_multi_string(self) -> bool {
        use VR::*;
        matches!(
            self,
            AE | AS | CS | DA | DS | DT | IS | LO | PN | SH | TM | UC | UI
        )
    }

    /// Whether values of this VR are character strings
    /// in which the backslash is not a value separator.
    pub fn is_single_string(self) -> bool {
        matches!(self, VR::LT | VR::ST | VR::UT | VR::UR)
    }

    /// The byte used to pad values of this VR to an even length.
    pub fn padding_byte(self) -> u8 {
        match self {
            VR::UI | VR::OB | VR::UN => 0,
            _ => b' ',
        }
    }
}

/// Each VR with its code, in declaration order.
const CODES: [(VR, &str); 36] = [
    (VR::AE, "AE"),
    (VR::AS, "AS"),
    (VR::AT, "AT"),
    (VR::CS, "CS"),
    (VR::DA, "DA"),
    (VR::DS, "DS"),
    (VR::DT, "DT"),
    (VR::FL, "FL"),
    (VR::FD, "FD"),
    (VR::IS, "IS"),
    (VR::LO, "LO"),
    (VR::LT, "LT"),
    (VR::OB, "OB"),
    (VR::OD, "OD"),
    (VR::OF, "OF"),
    (VR::OL, "OL"),
    (VR::OV, "OV"),
    (VR::OW, "OW"),
    (VR::PN, "PN"),
    (VR::SH, "SH"),
    (VR::SL, "SL"),
    (VR::SQ, "SQ"),
    (VR::SS, "SS"),
    (VR::ST, "ST"),
    (VR::SV, "SV"),
    (VR::TM, "TM"),
    (VR::UC, "UC"),
    (VR::UI, "UI"),
    (VR::UL, "UL"),
    (VR::UN, "UN"),
    (VR::UR, "UR"),
    (VR::US, "US"),
    (VR::UT, "UT"),
    (VR::UV, "UV"),
    (VR::XS, "XS"),
    (VR::OX, "OX"),
];

/// Parse a VR code, contextual codes included.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> std::result::Result<Self, Self::Err> {
        CODES
            .iter()
            .find(|(_, code)| *code == string)
            .map(|&(vr, _)| vr)
            .ok_or("no such value representation")
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// The data type for data element tags: a `(group, element)` pair.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub u16, pub u16);

impl Tag {
    /// Item (FFFE,E000)
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// Item Delimitation Item (FFFE,E00D)
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// Sequence Delimitation Item (FFFE,E0DD)
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);
    /// Pixel Data (7FE0,0010)
    pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

    /// The group of the file meta information elements.
    pub const META_GROUP: u16 = 0x0002;
    /// The group of item and sequence delimiters.
    pub const DELIMITER_GROUP: u16 = 0xFFFE;

    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> u16 {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> u16 {
        self.1
    }

    /// Whether the tag belongs to an odd (vendor-private) group.
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }

    /// Whether the tag is a private creator element `(gggg,0010-00FF)`.
    #[inline]
    pub fn is_private_creator(self) -> bool {
        self.is_private() && (0x0010..=0x00FF).contains(&self.1)
    }

    /// Whether the tag belongs to the file meta information group.
    #[inline]
    pub fn is_meta(self) -> bool {
        self.0 == Self::META_GROUP
    }

    /// Whether the tag belongs to the item/delimiter group.
    #[inline]
    pub fn is_delimiter_group(self) -> bool {
        self.0 == Self::DELIMITER_GROUP
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

/// Parse a tag written as `gggg,eeee`, optionally surrounded by parentheses.
impl FromStr for Tag {
    type Err = &'static str;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(s);
        let (group, element) = s.split_once(',').ok_or("missing tag separator")?;
        let group = u16::from_str_radix(group.trim(), 16).map_err(|_| "bad tag group")?;
        let element = u16::from_str_radix(element.trim(), 16).map_err(|_| "bad tag element")?;
        Ok(Tag(group, element))
    }
}

/// The value length of an element or item, in bytes.
///
/// The reserved value `0xFFFF_FFFF` stands for an undefined length,
/// delimited in the stream by an item or sequence delimiter.
/// An undefined length is neither equal nor ordered
/// with respect to any other length, itself included.
///
/// ```
/// # use dcmingest_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// assert!(Length(16) < Length(64));
/// assert_eq!(Length::UNDEFINED.partial_cmp(&Length(64)), None);
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

impl Length {
    pub const UNDEFINED: Self = Length(u32::MAX);

    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub fn is_defined(self) -> bool {
        self.0 != u32::MAX
    }

    /// The number of bytes, if defined.
    #[inline]
    pub fn get(self) -> Option<u32> {
        Some(self.0).filter(|_| self.is_defined())
    }

    /// Compare the raw field values, so that two undefined lengths match.
    #[inline]
    pub fn inner_eq(self, other: Length) -> bool {
        self.0 == other.0
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(len: u32) -> Self {
        Length(len)
    }
}

impl PartialEq for Length {
    fn eq(&self, rhs: &Length) -> bool {
        self.partial_cmp(rhs) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        if self.is_undefined() || rhs.is_undefined() {
            None
        } else {
            Some(self.0.cmp(&rhs.0))
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(len) => write!(f, "Length({})", len),
            None => f.write_str("Length(Undefined)"),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(len) => write!(f, "{}", len),
            None => f.write_str("U/L"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vr_from_binary_rejects_contextual_codes() {
        assert_eq!(VR::from_binary(*b"OB"), Some(VR::OB));
        assert_eq!(VR::from_binary(*b"UI"), Some(VR::UI));
        assert_eq!(VR::from_binary(*b"XS"), None);
        assert_eq!(VR::from_binary(*b"OX"), None);
        assert_eq!(VR::from_binary([0x04, 0x00]), None);
    }

    #[test]
    fn codes_follow_declaration_order() {
        for (i, (vr, code)) in CODES.iter().enumerate() {
            assert_eq!(*vr as usize, i);
            assert_eq!(code.parse::<VR>(), Ok(*vr));
        }
        assert_eq!(VR::PN.to_bytes(), *b"PN");
        assert!("pn".parse::<VR>().is_err());
    }

    #[test]
    fn length_forms() {
        assert_eq!(VR::US.length_form(), LengthForm::Short);
        assert_eq!(VR::PN.length_form(), LengthForm::Short);
        assert_eq!(VR::OB.length_form(), LengthForm::Long);
        assert_eq!(VR::SQ.length_form(), LengthForm::Long);
        assert_eq!(VR::UN.length_form(), LengthForm::Long);
        assert_eq!(VR::UT.length_form(), LengthForm::Long);
    }

    #[test]
    fn tag_properties() {
        assert!(Tag(0x0009, 0x0010).is_private_creator());
        assert!(!Tag(0x0009, 0x1010).is_private_creator());
        assert!(!Tag(0x0008, 0x0010).is_private());
        assert!(Tag(0x0002, 0x0010).is_meta());
        assert!(Tag::ITEM.is_delimiter_group());
        assert_eq!(Tag(0x0010, 0x0020).to_string(), "(0010,0020)");
    }

    #[test]
    fn parse_tag() {
        assert_eq!("0010,0010".parse::<Tag>(), Ok(Tag(0x0010, 0x0010)));
        assert_eq!("(7FE0,0010)".parse::<Tag>(), Ok(Tag::PIXEL_DATA));
        assert!("0010".parse::<Tag>().is_err());
        assert!("zz10,0010".parse::<Tag>().is_err());
    }

    #[test]
    fn delimiter_headers() {
        let item = DataElementHeader::new(Tag::ITEM, VR::UN, Length::UNDEFINED);
        assert!(item.is_item());
        assert!(!item.is_empty());
        let delimiter = DataElementHeader::new(Tag::SEQUENCE_DELIMITER, VR::UN, Length(0));
        assert!(delimiter.is_sequence_delimiter());
        assert!(!delimiter.is_item_delimiter());
        assert!(delimiter.is_empty());
    }

    #[test]
    fn undefined_length_comparisons() {
        assert!(Length::UNDEFINED.is_undefined());
        assert!(Length::UNDEFINED.inner_eq(Length::UNDEFINED));
        assert_eq!(Length(4).get(), Some(4));
        assert_eq!(Length::UNDEFINED.get(), None);
        assert_eq!(Length(4), Length(4));
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
        assert_eq!(format!("{:?}", Length(2)), "Length(2)");
    }
}
