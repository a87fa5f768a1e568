//! The sequence and item walker.
//!
//! The walker reads elements one after the other,
//! descending into sequences and items
//! and counting the bytes consumed by each construct,
//! so that a construct of declared length ends exactly at its boundary
//! while constructs of undefined length end at their delimiters.
//! The walk ends at the pixel data element of the root data set,
//! leaving the stream right before it.

use crate::error::{
    InconsistentSequenceLengthSnafu, ReadHeaderSnafu, ReadValueSnafu, Result,
    UnevenValueLengthSnafu,
};
use crate::projector::ProjectionState;
use crate::summary::HeaderSummary;
use crate::value::{decode_value, mark_auto_load, to_native_order};
use crate::vendor::VendorQuirks;
use dcmingest_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmingest_core::{DataElementHeader, Element, ElementValue, Length, Tag, VR};
use dcmingest_dictionary_std::{tags, StandardDataDictionary};
use dcmingest_encoding::decode::{decode_header, peek_tag, DecodedHeader};
use dcmingest_encoding::transfer_syntax::TransferSyntax;
use snafu::{ensure, ResultExt};
use std::collections::HashMap;
use tracing::{debug, warn};

/// The reason a walk stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum WalkEnd {
    /// the declared length of the construct was consumed
    Budget,
    /// an item delimiter closed the current item
    ItemDelimiter,
    /// a sequence delimiter closed the current sequence
    SequenceDelimiter,
    /// no more bytes
    EndOfStream,
    /// the pixel data element is next in the stream
    PixelData,
}

/// The construct being walked.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Construct {
    Root,
    Sequence,
    Item,
}

/// The declared length of the construct being walked.
#[derive(Debug, Copy, Clone)]
struct Budget {
    owner: Tag,
    len: u32,
}

impl Budget {
    fn of(owner: Tag, len: Length) -> Option<Budget> {
        len.get().map(|len| Budget { owner, len })
    }
}

/// Private creators seen so far, by group and block.
type Creators = HashMap<(u16, u8), String>;

fn block_of(tag: Tag) -> (u16, u8) {
    (tag.group(), (tag.element() >> 8) as u8)
}

/// The standard dictionary,
/// extended with the sub-dictionaries of the private creators seen so far.
#[derive(Debug)]
struct ScopedDictionary<'a> {
    creators: &'a Creators,
}

impl DataDictionary for ScopedDictionary<'_> {
    fn by_name(&self, name: &str) -> Option<&'static DataDictionaryEntry> {
        StandardDataDictionary.by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&'static DataDictionaryEntry> {
        if tag.is_private() && tag.element() >= 0x1000 {
            if let Some(creator) = self.creators.get(&block_of(tag)) {
                if let Some(entry) = StandardDataDictionary.by_private_tag(creator, tag) {
                    return Some(entry);
                }
            }
        }
        StandardDataDictionary.by_tag(tag)
    }
}

/// Walks the elements of one file into its summary.
#[derive(Debug)]
pub(crate) struct Walker<'a> {
    summary: &'a mut HeaderSummary,
    state: &'a mut ProjectionState,
    quirks: &'a VendorQuirks,
    auto_load_tag: Option<Tag>,
    creators: Creators,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(
        summary: &'a mut HeaderSummary,
        state: &'a mut ProjectionState,
        quirks: &'a VendorQuirks,
        auto_load_tag: Option<Tag>,
    ) -> Self {
        Walker {
            summary,
            state,
            quirks,
            auto_load_tag,
            creators: Creators::new(),
        }
    }

    /// Read the elements of the file meta group.
    /// Returns the number of bytes consumed.
    pub(crate) fn read_meta_group(&mut self, syntax: TransferSyntax) -> Result<u64> {
        let start = self.summary.input.position();
        while peek_tag(&self.summary.input, syntax).map_or(false, Tag::is_meta) {
            let decoded = self.read_header(syntax)?;
            self.read_element(decoded, 0, false, syntax)?;
        }
        let consumed = self.summary.input.position() - start;
        debug!("Read {} bytes of file meta group", consumed);
        Ok(consumed)
    }

    /// Walk the root data set,
    /// up to the pixel data element or the end of the stream.
    pub(crate) fn walk_root(&mut self, syntax: TransferSyntax) -> Result<WalkEnd> {
        let (consumed, end) = self.walk(None, 0, false, syntax, Construct::Root)?;
        debug!("Walked {} bytes of data set, ended by {:?}", consumed, end);
        Ok(end)
    }

    fn consumed_since(&self, start: u64) -> u64 {
        self.summary.input.position() - start
    }

    fn read_header(&mut self, syntax: TransferSyntax) -> Result<DecodedHeader> {
        let context = self.summary.vr_context();
        let position = self.summary.input.position();
        let dict = ScopedDictionary {
            creators: &self.creators,
        };
        decode_header(&mut self.summary.input, syntax, &dict, context)
            .context(ReadHeaderSnafu { position })
    }

    fn walk(
        &mut self,
        budget: Option<Budget>,
        level: u32,
        opaque: bool,
        syntax: TransferSyntax,
        construct: Construct,
    ) -> Result<(u64, WalkEnd)> {
        let start = self.summary.input.position();
        loop {
            let consumed = self.consumed_since(start);
            if let Some(Budget { owner, len }) = budget {
                if consumed >= u64::from(len) {
                    ensure!(
                        consumed == u64::from(len),
                        InconsistentSequenceLengthSnafu {
                            tag: owner,
                            declared: len,
                            consumed,
                        }
                    );
                    return Ok((consumed, WalkEnd::Budget));
                }
            }
            if self.summary.input.is_at_end() {
                return Ok((consumed, WalkEnd::EndOfStream));
            }

            let cursor = self.summary.input.save_cursor();
            let decoded = self.read_header(syntax)?;
            let header = decoded.header;
            let tag = header.tag;

            if tag == Tag::PIXEL_DATA && !opaque {
                self.summary.input.restore_cursor(cursor);
                self.summary.pixel_data_start = Some(cursor);
                debug!("Pixel data starts at position {}", cursor.position());
                return Ok((consumed, WalkEnd::PixelData));
            }

            if tag == Tag::ITEM {
                self.check_even_length(&header)?;
                self.summary.elements.push(Element::marker(header, level));
                if header.len.0 != 0 {
                    let budget = Budget::of(tag, header.len);
                    let (_, end) = self.walk(budget, level, opaque, syntax, Construct::Item)?;
                    match end {
                        WalkEnd::PixelData | WalkEnd::EndOfStream => {
                            return Ok((self.consumed_since(start), end))
                        }
                        WalkEnd::SequenceDelimiter if construct != Construct::Root => {
                            return Ok((self.consumed_since(start), end))
                        }
                        _ => {}
                    }
                }
            } else if tag == Tag::ITEM_DELIMITER {
                self.summary.elements.push(Element::marker(header, level));
                if construct == Construct::Item {
                    return Ok((self.consumed_since(start), WalkEnd::ItemDelimiter));
                }
                warn!("Stray item delimiter at position {}", cursor.position());
            } else if tag == Tag::SEQUENCE_DELIMITER {
                self.summary.elements.push(Element::marker(header, level));
                if construct != Construct::Root {
                    return Ok((self.consumed_since(start), WalkEnd::SequenceDelimiter));
                }
                warn!("Stray sequence delimiter at position {}", cursor.position());
            } else if tag == Tag::PIXEL_DATA && header.len.is_undefined() {
                // encapsulated pixel data of a nested image
                self.summary
                    .elements
                    .push(Element::marker(header, level).with_entry(decoded.entry));
                self.read_fragments(level + 1, syntax)?;
            } else if header.vr == VR::SQ || header.len.is_undefined() {
                let nested_syntax = if header.vr == VR::SQ {
                    syntax
                } else {
                    debug!("Reading {} {} of undefined length as a sequence", tag, header.vr);
                    TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN
                };
                let nested_opaque = opaque || tag.is_private() || tag == tags::ICON_IMAGE_SEQUENCE;
                self.check_even_length(&header)?;
                self.summary
                    .elements
                    .push(Element::marker(header, level).with_entry(decoded.entry));
                if header.len.0 != 0 {
                    let (_, end) = self.walk(
                        Budget::of(tag, header.len),
                        level + 1,
                        nested_opaque,
                        nested_syntax,
                        Construct::Sequence,
                    )?;
                    match end {
                        WalkEnd::PixelData => return Ok((self.consumed_since(start), end)),
                        WalkEnd::EndOfStream => {
                            if header.len.is_undefined() {
                                warn!("Sequence {} ended without a delimiter", tag);
                            }
                            return Ok((self.consumed_since(start), end));
                        }
                        _ => {}
                    }
                }
            } else {
                self.read_element(decoded, level, opaque, syntax)?;
            }
        }
    }

    /// Read the fragments of encapsulated pixel data verbatim,
    /// up to and including the sequence delimiter.
    fn read_fragments(&mut self, level: u32, syntax: TransferSyntax) -> Result<()> {
        while !self.summary.input.is_at_end() {
            let decoded = self.read_header(syntax)?;
            let header = decoded.header;
            if header.tag == Tag::ITEM {
                let len = header.len.get().unwrap_or(0);
                let raw = self
                    .summary
                    .input
                    .read_vec(len as usize)
                    .context(ReadValueSnafu { tag: header.tag, len })?;
                self.summary
                    .elements
                    .push(Element::new(header, level, raw, ElementValue::Bytes, None));
            } else {
                if header.tag != Tag::SEQUENCE_DELIMITER {
                    warn!("Unexpected {} among pixel data fragments", header.tag);
                }
                self.summary.elements.push(Element::marker(header, level));
                return Ok(());
            }
        }
        warn!("Pixel data fragments ended without a delimiter");
        Ok(())
    }

    /// Fail on a defined odd length, unless a vendor quirk tolerates it.
    fn check_even_length(&self, header: &DataElementHeader) -> Result<()> {
        let len = header.len.0;
        if header.len.is_defined() && len % 2 == 1 {
            let identity = self.summary.vendor_identity();
            match self.quirks.odd_length_allowed(&identity) {
                Some(quirk) => warn!(
                    "Element {} has an odd length {}, tolerated for {}",
                    header.tag, len, quirk.name
                ),
                None => return UnevenValueLengthSnafu { tag: header.tag, len }.fail(),
            }
        }
        Ok(())
    }

    fn read_element(
        &mut self,
        decoded: DecodedHeader,
        level: u32,
        opaque: bool,
        syntax: TransferSyntax,
    ) -> Result<()> {
        let mut header = decoded.header;
        let tag = header.tag;
        let len = header.len.0;

        self.check_even_length(&header)?;

        if !syntax.is_explicit_vr() && tag.is_private() && !tag.is_private_creator() {
            if let Some(creator) = self.creators.get(&block_of(tag)) {
                let identity = self.summary.vendor_identity();
                if let Some(vr) = self.quirks.private_vr(&identity, creator) {
                    header.vr = vr;
                }
            }
        }

        let mut raw = self
            .summary
            .input
            .read_vec(len as usize)
            .context(ReadValueSnafu { tag, len })?;
        to_native_order(tag, header.vr, &mut raw, syntax);
        let mut value = decode_value(header.vr, &raw);
        if self.auto_load_tag == Some(tag) {
            mark_auto_load(&mut value);
        }

        if tag.is_private_creator() {
            if let Some(creator) = value.first_str() {
                self.creators
                    .insert((tag.group(), tag.element() as u8), creator.to_string());
            }
        }

        let element = Element::new(header, level, raw, value, decoded.entry);
        if !opaque {
            self.state.project(self.summary, &element);
        }
        self.summary.elements.push(element);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::FileDecodingPlan;
    use dcmingest_core::header::HasLength;
    use dcmingest_encoding::stream::{ChunkChain, InputStream};

    fn summary_of(bytes: &[u8]) -> HeaderSummary {
        HeaderSummary::new(
            InputStream::new(ChunkChain::from_bytes(bytes, 7).unwrap()),
            FileDecodingPlan::default(),
        )
    }

    fn levels(summary: &HeaderSummary) -> Vec<(Tag, u32)> {
        summary
            .elements
            .iter()
            .map(|e| (e.header().tag, e.nesting_level()))
            .collect()
    }

    #[rustfmt::skip]
    const DEFINED_SEQUENCE: &[u8] = &[
        0x08, 0x00, 0x15, 0x11,         // (0008,1115) Referenced Series Sequence
            b'S', b'Q', 0x00, 0x00,     // VR: SQ, reserved
            0x24, 0x00, 0x00, 0x00,     // Length: 36
            0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
                0x1C, 0x00, 0x00, 0x00, // Length: 28
                0x08, 0x00, 0x50, 0x11, // (0008,1150) Referenced SOP Class UID
                    b'U', b'I', 0x06, 0x00,
                    b'1', b'.', b'2', b'.', b'3', 0x00,
                0x08, 0x00, 0x55, 0x11, // (0008,1155) Referenced SOP Instance UID
                    b'U', b'I', 0x06, 0x00,
                    b'1', b'.', b'2', b'.', b'4', 0x00,
        0x08, 0x00, 0x60, 0x00,         // (0008,0060) Modality
            b'C', b'S', 0x02, 0x00,
            b'C', b'T',
    ];

    #[test]
    fn defined_length_sequence() {
        let ts = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
        let mut summary = summary_of(DEFINED_SEQUENCE);
        let mut state = ProjectionState::new();
        let quirks = VendorQuirks::default();
        let end = Walker::new(&mut summary, &mut state, &quirks, None)
            .walk_root(ts)
            .unwrap();
        assert_eq!(end, WalkEnd::EndOfStream);
        assert_eq!(
            levels(&summary),
            vec![
                (tags::REFERENCED_SERIES_SEQUENCE, 0),
                (Tag::ITEM, 1),
                (tags::REFERENCED_SOP_CLASS_UID, 1),
                (tags::REFERENCED_SOP_INSTANCE_UID, 1),
                (tags::MODALITY, 0),
            ]
        );
        assert_eq!(summary.modality.as_deref(), Some("CT"));
    }

    #[test]
    fn sequence_budget_is_consumed_exactly() {
        let ts = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
        // the contents of the sequence, after its 12 byte header
        let mut summary = summary_of(&DEFINED_SEQUENCE[12..]);
        let mut state = ProjectionState::new();
        let quirks = VendorQuirks::default();
        let mut walker = Walker::new(&mut summary, &mut state, &quirks, None);
        let budget = Budget {
            owner: tags::REFERENCED_SERIES_SEQUENCE,
            len: 36,
        };
        let (consumed, end) = walker
            .walk(Some(budget), 1, false, ts, Construct::Sequence)
            .unwrap();
        assert_eq!(consumed, 36);
        assert_eq!(end, WalkEnd::Budget);
        // the caller's level continues with the next element
        let (_, end) = walker.walk(None, 0, false, ts, Construct::Root).unwrap();
        assert_eq!(end, WalkEnd::EndOfStream);
        assert_eq!(summary.elements.last().map(|e| e.nesting_level()), Some(0));
        assert_eq!(summary.elements.len(), 4);
    }

    #[test]
    fn inconsistent_sequence_length() {
        let mut bytes = DEFINED_SEQUENCE.to_vec();
        // declare 30 bytes instead of 36
        bytes[8] = 0x1E;
        let mut summary = summary_of(&bytes);
        let mut state = ProjectionState::new();
        let quirks = VendorQuirks::default();
        let err = Walker::new(&mut summary, &mut state, &quirks, None)
            .walk_root(TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN)
            .unwrap_err();
        assert_eq!(err.kind(), crate::FailureKind::InconsistentSequenceLength);
    }

    #[test]
    fn odd_sequence_and_item_lengths() {
        let ts = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
        // sequence length 35, then item length 27
        for (offset, len) in [(8, 0x23), (16, 0x1B)] {
            let mut bytes = DEFINED_SEQUENCE.to_vec();
            bytes[offset] = len;
            let mut summary = summary_of(&bytes);
            let mut state = ProjectionState::new();
            let quirks = VendorQuirks::default();
            let err = Walker::new(&mut summary, &mut state, &quirks, None)
                .walk_root(ts)
                .unwrap_err();
            assert_eq!(err.kind(), crate::FailureKind::UnevenValueLength, "{}", offset);
        }
    }

    #[rustfmt::skip]
    const ICON_THEN_PIXEL_DATA: &[u8] = &[
        0x88, 0x00, 0x00, 0x02,         // (0088,0200) Icon Image Sequence
            b'S', b'Q', 0x00, 0x00,
            0xFF, 0xFF, 0xFF, 0xFF,     // Length: undefined
            0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
                0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
                0x08, 0x00, 0x60, 0x00, // (0008,0060) Modality
                    b'C', b'S', 0x02, 0x00,
                    b'O', b'T',
                0xE0, 0x7F, 0x10, 0x00, // (7FE0,0010) Pixel Data of the icon
                    b'O', b'B', 0x00, 0x00,
                    0x02, 0x00, 0x00, 0x00,
                    0x00, 0x00,
            0xFE, 0xFF, 0x0D, 0xE0,     // (FFFE,E00D) Item Delimitation Item
                0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0,     // (FFFE,E0DD) Sequence Delimitation Item
                0x00, 0x00, 0x00, 0x00,
        0xE0, 0x7F, 0x10, 0x00,         // (7FE0,0010) Pixel Data
            b'O', b'W', 0x00, 0x00,
            0x04, 0x00, 0x00, 0x00,
            0x01, 0x02, 0x03, 0x04,
    ];

    #[test]
    fn opaque_sequence_and_pixel_data_stop() {
        let mut summary = summary_of(ICON_THEN_PIXEL_DATA);
        let mut state = ProjectionState::new();
        let quirks = VendorQuirks::default();
        let end = Walker::new(&mut summary, &mut state, &quirks, None)
            .walk_root(TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN)
            .unwrap();
        assert_eq!(end, WalkEnd::PixelData);
        assert_eq!(
            levels(&summary),
            vec![
                (tags::ICON_IMAGE_SEQUENCE, 0),
                (Tag::ITEM, 1),
                (tags::MODALITY, 1),
                (Tag::PIXEL_DATA, 1),
                (Tag::ITEM_DELIMITER, 1),
                (Tag::SEQUENCE_DELIMITER, 1),
            ]
        );
        // nothing inside the icon is projected
        assert_eq!(summary.modality, None);
        let start = summary.pixel_data_start.unwrap();
        assert_eq!(start.position(), 60);
        assert_eq!(summary.input.position(), 60);
    }

    #[test]
    fn odd_lengths_and_vendor_exceptions() {
        #[rustfmt::skip]
        let bytes: &[u8] = &[
            0x10, 0x00, 0x20, 0x00,     // (0010,0020) Patient ID
                b'L', b'O', 0x03, 0x00, // Length: 3
                b'A', b'B', b'C',
        ];
        let quirks = VendorQuirks::default();
        let ts = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;

        let mut summary = summary_of(bytes);
        let mut state = ProjectionState::new();
        let err = Walker::new(&mut summary, &mut state, &quirks, None)
            .walk_root(ts)
            .unwrap_err();
        assert_eq!(err.kind(), crate::FailureKind::UnevenValueLength);

        let mut summary = summary_of(bytes);
        summary.implementation_class_uid = Some("1.2.840.113619.6.336".to_string());
        let mut state = ProjectionState::new();
        Walker::new(&mut summary, &mut state, &quirks, None)
            .walk_root(ts)
            .unwrap();
        assert_eq!(summary.patient_id.as_deref(), Some("ABC"));
    }

    #[rustfmt::skip]
    const IMPLICIT_PRIVATE: &[u8] = &[
        0x29, 0x00, 0x10, 0x00,         // (0029,0010) Private Creator
            0x12, 0x00, 0x00, 0x00,     // Length: 18
            b'S', b'I', b'E', b'M', b'E', b'N', b'S', b' ', b'C', b'S', b'A', b' ',
            b'H', b'E', b'A', b'D', b'E', b'R',
        0x29, 0x00, 0x08, 0x10,         // (0029,1008) CSA Image Header Type
            0x04, 0x00, 0x00, 0x00,     // Length: 4
            b'I', b'M', b'G', b' ',
        0x29, 0x00, 0x11, 0x00,         // (0029,0011) Private Creator
            0x08, 0x00, 0x00, 0x00,     // Length: 8
            b'F', b'D', b'M', b'S', b' ', b'1', b'.', b'0',
        0x29, 0x00, 0x01, 0x11,         // (0029,1101) unknown private attribute
            0x02, 0x00, 0x00, 0x00,     // Length: 2
            0x01, 0x00,
    ];

    #[test]
    fn private_creators_select_vr() {
        let quirks = VendorQuirks::default();
        let ts = TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN;

        let mut summary = summary_of(IMPLICIT_PRIVATE);
        let mut state = ProjectionState::new();
        Walker::new(&mut summary, &mut state, &quirks, None)
            .walk_root(ts)
            .unwrap();
        let e = &summary.elements[1];
        assert_eq!(e.vr(), VR::CS);
        assert_eq!(e.alias(), Some("CSAImageHeaderType"));
        assert_eq!(e.value().first_str(), Some("IMG"));
        assert_eq!(summary.elements[3].vr(), VR::UN);
        assert_eq!(summary.elements[3].length().0, 2);

        let mut summary = summary_of(IMPLICIT_PRIVATE);
        summary.manufacturer = Some("FUJIFILM Corporation".to_string());
        let mut state = ProjectionState::new();
        Walker::new(&mut summary, &mut state, &quirks, None)
            .walk_root(ts)
            .unwrap();
        assert_eq!(summary.elements[3].vr(), VR::OB);
    }

    #[test]
    fn auto_load_prefix() {
        #[rustfmt::skip]
        let bytes: &[u8] = &[
            0x20, 0x00, 0x00, 0x40,     // (0020,4000) Image Comments
                b'L', b'T', 0x04, 0x00,
                b'R', b'U', b'N', b' ',
        ];
        let mut summary = summary_of(bytes);
        let mut state = ProjectionState::new();
        let quirks = VendorQuirks::default();
        Walker::new(&mut summary, &mut state, &quirks, Some(tags::IMAGE_COMMENTS))
            .walk_root(TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN)
            .unwrap();
        let e = &summary.elements[0];
        assert_eq!(e.value().first_str(), Some("AUTOLOAD:RUN"));
        assert_eq!(e.raw(), b"RUN ");
    }
}
