//! Vendor-private sub-dictionaries.
//!
//! A private attribute `(gggg,xxee)` belongs to the block `xx`
//! reserved by the private creator element `(gggg,00xx)`.
//! Entries here are registered in the first block (`0x10`),
//! so that a lookup only depends on the group, the low element byte
//! and the creator's value.

use dcmingest_core::dictionary::{DataDictionaryEntry, TagRange::*};
use dcmingest_core::Tag;
use dcmingest_core::VR::*;

type E = DataDictionaryEntry;

/// A sub-dictionary reserved by one private creator.
#[derive(Debug)]
pub struct PrivateDictionary {
    /// The private creator value, without padding
    pub creator: &'static str,
    /// The entries of this creator
    pub entries: &'static [E],
}

#[rustfmt::skip]
const SIEMENS_CSA_HEADER: &[E] = &[
    E { tag: Single(Tag(0x0029, 0x1008)), alias: "CSAImageHeaderType", vr: CS, vm: "1", description: "CSA Image Header Type" },
    E { tag: Single(Tag(0x0029, 0x1009)), alias: "CSAImageHeaderVersion", vr: LO, vm: "1", description: "CSA Image Header Version" },
    E { tag: Single(Tag(0x0029, 0x1010)), alias: "CSAImageHeaderInfo", vr: OB, vm: "1", description: "CSA Image Header Info" },
    E { tag: Single(Tag(0x0029, 0x1018)), alias: "CSASeriesHeaderType", vr: CS, vm: "1", description: "CSA Series Header Type" },
    E { tag: Single(Tag(0x0029, 0x1019)), alias: "CSASeriesHeaderVersion", vr: LO, vm: "1", description: "CSA Series Header Version" },
    E { tag: Single(Tag(0x0029, 0x1020)), alias: "CSASeriesHeaderInfo", vr: OB, vm: "1", description: "CSA Series Header Info" },
];

#[rustfmt::skip]
const GEMS_IDEN_01: &[E] = &[
    E { tag: Single(Tag(0x0009, 0x1001)), alias: "GEFullFidelity", vr: LO, vm: "1", description: "Full fidelity" },
    E { tag: Single(Tag(0x0009, 0x1002)), alias: "GESuiteId", vr: SH, vm: "1", description: "Suite id" },
    E { tag: Single(Tag(0x0009, 0x1004)), alias: "GEProductId", vr: SH, vm: "1", description: "Product id" },
];

#[rustfmt::skip]
const PHILIPS_IMAGING_DD_001: &[E] = &[
    E { tag: Single(Tag(0x2001, 0x1003)), alias: "PhilipsDiffusionBFactor", vr: FL, vm: "1", description: "Diffusion B-Factor" },
    E { tag: Single(Tag(0x2001, 0x100B)), alias: "PhilipsImageOrientation", vr: CS, vm: "1", description: "Image Orientation" },
];

/// All known private sub-dictionaries.
pub static PRIVATE_DICTIONARIES: &[PrivateDictionary] = &[
    PrivateDictionary {
        creator: "SIEMENS CSA HEADER",
        entries: SIEMENS_CSA_HEADER,
    },
    PrivateDictionary {
        creator: "GEMS_IDEN_01",
        entries: GEMS_IDEN_01,
    },
    PrivateDictionary {
        creator: "PHILIPS IMAGING DD 001",
        entries: PHILIPS_IMAGING_DD_001,
    },
];

/// Find the entry of a private attribute reserved by the given creator.
pub fn lookup(creator: &str, tag: Tag) -> Option<&'static DataDictionaryEntry> {
    let creator = creator.trim_matches(|c: char| c == ' ' || c == '\0');
    let normalized = Tag(tag.group(), 0x1000 | (tag.element() & 0x00FF));
    PRIVATE_DICTIONARIES
        .iter()
        .find(|d| d.creator == creator)?
        .entries
        .iter()
        .find(|e| e.tag.inner() == normalized)
}

#[cfg(test)]
mod tests {
    use super::lookup;
    use dcmingest_core::{Tag, VR};

    #[test]
    fn private_lookup_in_any_block() {
        let e = lookup("SIEMENS CSA HEADER", Tag(0x0029, 0x1010)).expect("CSA image header info");
        assert_eq!(e.vr, VR::OB);
        let e = lookup("SIEMENS CSA HEADER ", Tag(0x0029, 0x2010)).expect("CSA image header info in block 0x20");
        assert_eq!(e.alias, "CSAImageHeaderInfo");
        assert!(lookup("SIEMENS CSA HEADER", Tag(0x0029, 0x1011)).is_none());
        assert!(lookup("ACME", Tag(0x0029, 0x1010)).is_none());
    }
}
