//! The decoded data element.

use crate::dictionary::DataDictionaryEntry;
use crate::header::{DataElementHeader, HasLength, Header, Length, Tag, VR};
use crate::value::ElementValue;

/// A data element as decoded from a byte stream.
///
/// The element owns its raw value bytes and its decoded value.
/// The dictionary entry, when known, is only borrowed.
///
/// Raw bytes of multi-byte binary numbers are held in native byte order.
/// All other raw bytes are kept exactly as read.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    header: DataElementHeader,
    multiplicity: u32,
    nesting_level: u32,
    raw: Vec<u8>,
    value: ElementValue,
    entry: Option<&'static DataDictionaryEntry>,
}

impl Element {
    /// Assemble an element from its decoded parts.
    ///
    /// The value multiplicity is derived from the decoded value.
    pub fn new(
        header: DataElementHeader,
        nesting_level: u32,
        raw: Vec<u8>,
        value: ElementValue,
        entry: Option<&'static DataDictionaryEntry>,
    ) -> Self {
        Element {
            header,
            multiplicity: value.multiplicity(),
            nesting_level,
            raw,
            value,
            entry,
        }
    }

    /// Create a structural element without value bytes:
    /// the start of a sequence, an item, or a delimiter.
    pub fn marker(header: DataElementHeader, nesting_level: u32) -> Self {
        let value = if header.vr == VR::SQ {
            ElementValue::Sequence
        } else {
            ElementValue::Empty
        };
        Element {
            header,
            multiplicity: if header.vr == VR::SQ { 1 } else { 0 },
            nesting_level,
            raw: Vec::new(),
            value,
            entry: None,
        }
    }

    /// Attach the dictionary entry of this element.
    pub fn with_entry(mut self, entry: Option<&'static DataDictionaryEntry>) -> Self {
        self.entry = entry;
        self
    }

    /// Retrieve the element header.
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// Retrieve the value representation.
    pub fn vr(&self) -> VR {
        self.header.vr
    }

    /// The count of values packed in the value field.
    pub fn multiplicity(&self) -> u32 {
        self.multiplicity
    }

    /// The sequence nesting depth at which the element was decoded.
    /// Zero means the root data set.
    pub fn nesting_level(&self) -> u32 {
        self.nesting_level
    }

    /// The raw value bytes.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The decoded value.
    pub fn value(&self) -> &ElementValue {
        &self.value
    }

    /// The matching dictionary entry, if any.
    pub fn entry(&self) -> Option<&'static DataDictionaryEntry> {
        self.entry
    }

    /// The attribute alias from the dictionary, if known.
    pub fn alias(&self) -> Option<&'static str> {
        self.entry.map(|e| e.alias)
    }

    /// Whether this element is an item or a delimiter.
    pub fn is_delimitation(&self) -> bool {
        self.header.tag.is_delimiter_group()
    }

    /// Replace the raw value and its decoded form.
    /// The value length is recomputed from the new raw buffer.
    pub fn replace_value(&mut self, raw: Vec<u8>, value: ElementValue) {
        self.header.len = Length(raw.len() as u32);
        self.multiplicity = value.multiplicity();
        self.raw = raw;
        self.value = value;
    }

    /// Override the value length reported in the header,
    /// leaving the raw buffer untouched.
    pub fn set_length(&mut self, len: Length) {
        self.header.len = len;
    }
}

impl HasLength for Element {
    #[inline]
    fn length(&self) -> Length {
        self.header.len
    }
}

impl Header for Element {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag
    }
}
