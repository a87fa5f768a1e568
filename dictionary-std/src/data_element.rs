//! The registry of standard attributes.
//!
//! Besides exact tags, the registry resolves
//! attributes repeating over a range of groups (such as overlays, `60xx`)
//! or over a range of elements,
//! plus the generic group length and private creator entries.
//!
//! The registry is a subset of the standard.
//! In implicit VR syntaxes an attribute missing from it is read as `UN`,
//! so a sequence of defined length that it does not list
//! is kept as opaque bytes instead of being descended into.
//! The sequences commonly found in image files are listed for that reason.

use crate::private;
use crate::tags::ENTRIES;
use dcmingest_core::dictionary::{DataDictionary, DataDictionaryEntry, TagRange};
use dcmingest_core::header::Tag;
use dcmingest_core::VR;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fmt;

static REGISTRY: Lazy<StandardDataDictionaryRegistry> =
    Lazy::new(StandardDataDictionaryRegistry::build);

static GROUP_LENGTH_ENTRY: DataDictionaryEntry = DataDictionaryEntry {
    tag: TagRange::GroupLength,
    alias: "GenericGroupLength",
    vr: VR::UL,
    vm: "1",
    description: "Group Length",
};

static PRIVATE_CREATOR_ENTRY: DataDictionaryEntry = DataDictionaryEntry {
    tag: TagRange::PrivateCreator,
    alias: "PrivateCreator",
    vr: VR::LO,
    vm: "1",
    description: "Private Creator",
};

/// The shared registry behind [`StandardDataDictionary`],
/// built on first access.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &REGISTRY
}

/// Indexes over the table of standard attributes.
///
/// Read-only once built, so concurrent decodes share one instance.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    by_name: HashMap<&'static str, &'static DataDictionaryEntry>,
    by_tag: HashMap<Tag, &'static DataDictionaryEntry>,
    /// `(ggxx,eeee)` ranges, stored with `xx` zeroed
    group_ranges: HashSet<Tag>,
    /// `(gggg,eexx)` ranges, stored with `xx` zeroed
    element_ranges: HashSet<Tag>,
}

impl StandardDataDictionaryRegistry {
    fn build() -> Self {
        let mut registry = StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(ENTRIES.len() + 2),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
            group_ranges: HashSet::new(),
            element_ranges: HashSet::new(),
        };
        for entry in ENTRIES.iter().chain([&GROUP_LENGTH_ENTRY, &PRIVATE_CREATOR_ENTRY]) {
            registry.by_name.insert(entry.alias, entry);
            match entry.tag {
                TagRange::Single(tag) => {
                    registry.by_tag.insert(tag, entry);
                }
                TagRange::Group100(tag) => {
                    registry.by_tag.insert(tag, entry);
                    registry.group_ranges.insert(tag);
                }
                TagRange::Element100(tag) => {
                    registry.by_tag.insert(tag, entry);
                    registry.element_ranges.insert(tag);
                }
                TagRange::GroupLength | TagRange::PrivateCreator => {}
            }
        }
        registry
    }

    /// The number of attributes indexed by tag.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }

    fn lookup(&self, tag: Tag) -> Option<&'static DataDictionaryEntry> {
        if let Some(entry) = self.by_tag.get(&tag).copied() {
            return Some(entry);
        }
        let group_masked = Tag(tag.group() & 0xFF00, tag.element());
        if self.group_ranges.contains(&group_masked) {
            return self.by_tag.get(&group_masked).copied();
        }
        let element_masked = Tag(tag.group(), tag.element() & 0xFF00);
        if self.element_ranges.contains(&element_masked) {
            return self.by_tag.get(&element_masked).copied();
        }
        if tag.is_private_creator() {
            Some(&PRIVATE_CREATOR_ENTRY)
        } else if tag.element() == 0x0000 {
            Some(&GROUP_LENGTH_ENTRY)
        } else {
            None
        }
    }
}

/// The standard attribute dictionary,
/// a unit type over the shared [registry].
///
/// This is the dictionary used when decoding files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    fn by_name(&self, name: &str) -> Option<&'static DataDictionaryEntry> {
        registry().by_name.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&'static DataDictionaryEntry> {
        registry().lookup(tag)
    }

    fn by_private_tag(&self, creator: &str, tag: Tag) -> Option<&'static DataDictionaryEntry> {
        private::lookup(creator, tag)
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Standard Data Dictionary")
    }
}
