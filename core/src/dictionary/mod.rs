//! This module contains the concept of a data dictionary.
//!
//! A dictionary translates tags into entries
//! holding the typical value representation, multiplicity,
//! and a human readable description of the attribute.
//! Entries live for the whole program
//! and are only ever referenced by decoded elements, never owned.

pub mod stub;

pub use self::stub::StubDataDictionary;

use crate::header::{Tag, VR};
use std::fmt::Debug;

/// The range of tags covered by a dictionary entry.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum TagRange {
    /// Only a specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
    /// The two rightmost digits of the _element_ portion are open:
    /// `(GGGG,EExx)`
    Element100(Tag),
    /// Generic group length, `(gggg,0000)`
    GroupLength,
    /// Generic private creator, `(gggg,0010-00FF)` for odd groups
    PrivateCreator,
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    ///
    /// Open components are zeroed.
    /// Generic ranges map to `(0000,0000)` and `(0009,0010)` respectively.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) | TagRange::Group100(tag) | TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }
}

/// A dictionary entry with static string slices.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DataDictionaryEntry {
    /// The attribute tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually in UpperCamelCase
    pub alias: &'static str,
    /// The _typical_ value representation of the attribute.
    /// May be one of the contextual codes.
    pub vr: VR,
    /// The default value multiplicity, as written in the standard (e.g. `1`, `1-n`, `2`)
    pub vm: &'static str,
    /// The human readable name of the attribute
    pub description: &'static str,
}

impl DataDictionaryEntry {
    /// The lowest number of values admitted by the default multiplicity.
    pub fn min_multiplicity(&self) -> u32 {
        self.vm
            .split('-')
            .next()
            .and_then(|n| n.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Type trait for a dictionary of attributes.
///
/// Lookups return `'static` references
/// so that decoded elements can point back to their entry
/// without owning it.
pub trait DataDictionary: Debug {
    /// Fetch an entry by its usual alias (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are case sensitive and not separated by spaces.
    fn by_name(&self, name: &str) -> Option<&'static DataDictionaryEntry>;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&'static DataDictionaryEntry>;

    /// Fetch an entry of a private attribute,
    /// given the value of the private creator element reserving its block.
    ///
    /// The default implementation knows no private attributes.
    fn by_private_tag(&self, _creator: &str, _tag: Tag) -> Option<&'static DataDictionaryEntry> {
        None
    }
}

impl<T: ?Sized> DataDictionary for &T
where
    T: DataDictionary,
{
    fn by_name(&self, name: &str) -> Option<&'static DataDictionaryEntry> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&'static DataDictionaryEntry> {
        (**self).by_tag(tag)
    }

    fn by_private_tag(&self, creator: &str, tag: Tag) -> Option<&'static DataDictionaryEntry> {
        (**self).by_private_tag(creator, tag)
    }
}

impl<T: ?Sized> DataDictionary for Box<T>
where
    T: DataDictionary,
{
    fn by_name(&self, name: &str) -> Option<&'static DataDictionaryEntry> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&'static DataDictionaryEntry> {
        (**self).by_tag(tag)
    }

    fn by_private_tag(&self, creator: &str, tag: Tag) -> Option<&'static DataDictionaryEntry> {
        (**self).by_private_tag(creator, tag)
    }
}
