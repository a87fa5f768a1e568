//! Pixel data extraction.
//!
//! Native pixel data is read directly into one buffer.
//! Encapsulated pixel data starts with the basic offset table item,
//! followed by the fragment items up to the sequence delimiter;
//! the fragments are concatenated into one buffer.
//! Either way, pixel data is kept in the byte order of the file.

use crate::error::{
    AllocatePixelDataSnafu, MissingBasicOffsetTableSnafu, ReadHeaderSnafu, ReadValueSnafu, Result,
};
use crate::summary::HeaderSummary;
use dcmingest_core::Tag;
use dcmingest_dictionary_std::StandardDataDictionary;
use dcmingest_encoding::decode::{decode_header, DecodedHeader};
use dcmingest_encoding::stream::try_alloc;
use dcmingest_encoding::transfer_syntax::{read_u32, PixelEncoding, TransferSyntax};
use snafu::{ensure, ResultExt};
use tracing::{debug, warn};

fn next_header(summary: &mut HeaderSummary, syntax: TransferSyntax) -> Result<DecodedHeader> {
    let context = summary.vr_context();
    let position = summary.input.position();
    decode_header(&mut summary.input, syntax, &StandardDataDictionary, context)
        .context(ReadHeaderSnafu { position })
}

fn read_value(summary: &mut HeaderSummary, tag: Tag, len: u32) -> Result<Vec<u8>> {
    summary
        .input
        .read_vec(len as usize)
        .context(ReadValueSnafu { tag, len })
}

/// Extract the pixel data found by the walker into the summary.
///
/// Does nothing if the walk did not reach a pixel data element.
pub(crate) fn extract(summary: &mut HeaderSummary) -> Result<()> {
    let Some(start) = summary.pixel_data_start else {
        debug!("No pixel data");
        return Ok(());
    };
    summary.input.restore_cursor(start);

    let syntax = summary.plan.pixel_syntax;
    let decoded = next_header(summary, syntax)?;
    let header = decoded.header;
    summary.pixel_header = Some(header);

    let pixels = match header.len.get() {
        Some(len) => {
            debug!("Reading {} bytes of native pixel data", len);
            read_value(summary, header.tag, len)?
        }
        None => read_encapsulated(summary, syntax)?,
    };

    if summary.plan.pixel_encoding.is_none() {
        let encoding = classify(summary, header.len.is_undefined(), pixels.len() as u64);
        debug!("Pixel data classified as {:?}", encoding);
        summary.plan.pixel_encoding = Some(encoding);
    }

    if !summary.input.is_at_end() {
        warn!(
            "{} trailing bytes after pixel data are ignored",
            summary.input.available()
        );
    }
    summary.pixel_data = Some(pixels);
    Ok(())
}

fn read_encapsulated(summary: &mut HeaderSummary, syntax: TransferSyntax) -> Result<Vec<u8>> {
    let table = next_header(summary, syntax)?.header;
    ensure!(
        table.tag == Tag::ITEM,
        MissingBasicOffsetTableSnafu { found: table.tag }
    );
    let table_len = table.len.get().unwrap_or(0);
    let raw = read_value(summary, table.tag, table_len)?;
    summary.basic_offset_table = raw
        .chunks_exact(4)
        .map(|word| read_u32(word, syntax.byte_order))
        .collect();

    let mut fragments: Vec<Vec<u8>> = Vec::new();
    loop {
        if summary.input.is_at_end() {
            warn!("Encapsulated pixel data ended without a sequence delimiter");
            break;
        }
        let item = next_header(summary, syntax)?.header;
        if item.tag == Tag::SEQUENCE_DELIMITER {
            break;
        }
        if item.tag != Tag::ITEM {
            warn!("Unexpected {} among pixel data fragments", item.tag);
            break;
        }
        let len = item.len.get().unwrap_or(0);
        fragments.push(read_value(summary, item.tag, len)?);
        summary.fragment_lengths.push(len);
    }

    let total: usize = fragments.iter().map(Vec::len).sum();
    debug!(
        "Read {} bytes of encapsulated pixel data in {} fragments",
        total,
        fragments.len()
    );
    let mut pixels = try_alloc(total).context(AllocatePixelDataSnafu { len: total })?;
    for fragment in &fragments {
        pixels.extend_from_slice(fragment);
    }
    Ok(pixels)
}

/// Classify pixel data of undeclared encoding
/// by comparing its size against the image geometry.
fn classify(summary: &HeaderSummary, encapsulated: bool, len: u64) -> PixelEncoding {
    if encapsulated {
        return PixelEncoding::CompressedUnknown;
    }
    match summary.expected_pixel_data_len() {
        Some(expected) if len == expected || expected.checked_add(expected & 1) == Some(len) => {
            PixelEncoding::Uncompressed
        }
        _ => PixelEncoding::CompressedUnknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::FileDecodingPlan;
    use dcmingest_encoding::stream::{ChunkChain, InputStream};

    fn summary_at_pixel_data(bytes: &[u8]) -> HeaderSummary {
        let mut summary = HeaderSummary::new(
            InputStream::new(ChunkChain::from_bytes(bytes, 5).unwrap()),
            FileDecodingPlan {
                pixel_syntax: TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
                ..Default::default()
            },
        );
        summary.pixel_data_start = Some(summary.input.save_cursor());
        summary
    }

    #[rustfmt::skip]
    const NATIVE: &[u8] = &[
        0xE0, 0x7F, 0x10, 0x00,         // (7FE0,0010) Pixel Data
            b'O', b'W', 0x00, 0x00,     // VR: OW, reserved
            0x08, 0x00, 0x00, 0x00,     // Length: 8
            0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00,
    ];

    #[test]
    fn native_pixel_data() {
        let mut summary = summary_at_pixel_data(NATIVE);
        summary.rows = Some(2);
        summary.columns = Some(2);
        summary.bits_allocated = Some(16);
        extract(&mut summary).unwrap();
        assert_eq!(summary.pixel_data().map(<[u8]>::len), Some(8));
        assert!(summary.input.is_at_end());
        assert_eq!(summary.plan.pixel_encoding, Some(PixelEncoding::Uncompressed));
    }

    #[test]
    fn native_pixel_data_of_unexpected_size() {
        let mut summary = summary_at_pixel_data(NATIVE);
        summary.rows = Some(16);
        summary.columns = Some(16);
        summary.bits_allocated = Some(16);
        extract(&mut summary).unwrap();
        assert_eq!(summary.plan.pixel_encoding, Some(PixelEncoding::CompressedUnknown));
    }

    #[test]
    fn native_pixel_data_of_oversized_geometry() {
        let mut summary = summary_at_pixel_data(NATIVE);
        summary.rows = Some(u16::MAX);
        summary.columns = Some(u16::MAX);
        summary.bits_allocated = Some(u16::MAX);
        summary.samples_per_pixel = Some(u16::MAX);
        summary.number_of_frames = Some(u32::MAX);
        extract(&mut summary).unwrap();
        assert_eq!(summary.plan.pixel_encoding, Some(PixelEncoding::CompressedUnknown));
    }

    #[rustfmt::skip]
    const ENCAPSULATED: &[u8] = &[
        0xE0, 0x7F, 0x10, 0x00,         // (7FE0,0010) Pixel Data
            b'O', b'B', 0x00, 0x00,     // VR: OB, reserved
            0xFF, 0xFF, 0xFF, 0xFF,     // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,         // (FFFE,E000) Basic Offset Table
            0x00, 0x00, 0x00, 0x00,     // Length: 0
        0xFE, 0xFF, 0x00, 0xE0,         // (FFFE,E000) Fragment
            0x06, 0x00, 0x00, 0x00,     // Length: 6
            0xFF, 0xD8, 0xFF, 0xE0, 0xFF, 0xD9,
        0xFE, 0xFF, 0xDD, 0xE0,         // (FFFE,E0DD) Sequence Delimitation Item
            0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn encapsulated_pixel_data() {
        let mut summary = summary_at_pixel_data(ENCAPSULATED);
        extract(&mut summary).unwrap();
        assert_eq!(
            summary.pixel_data(),
            Some(&[0xFF, 0xD8, 0xFF, 0xE0, 0xFF, 0xD9][..])
        );
        assert!(summary.basic_offset_table().is_empty());
        assert_eq!(summary.fragment_lengths(), &[6]);
        assert_eq!(summary.plan.pixel_encoding, Some(PixelEncoding::CompressedUnknown));
    }

    #[test]
    fn offset_table_and_fragments() {
        #[rustfmt::skip]
        let bytes: &[u8] = &[
            0xE0, 0x7F, 0x10, 0x00,
                b'O', b'B', 0x00, 0x00,
                0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0,     // Basic Offset Table, 2 frames
                0x08, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x00, 0x00,
                0x0C, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0x00, 0xE0,     // Fragment 1
                0x04, 0x00, 0x00, 0x00,
                0x01, 0x02, 0x03, 0x04,
            0xFE, 0xFF, 0x00, 0xE0,     // Fragment 2
                0x02, 0x00, 0x00, 0x00,
                0x05, 0x06,
            0xFE, 0xFF, 0xDD, 0xE0,
                0x00, 0x00, 0x00, 0x00,
        ];
        let mut summary = summary_at_pixel_data(bytes);
        summary.plan.pixel_encoding = Some(PixelEncoding::CompressedLossless);
        extract(&mut summary).unwrap();
        assert_eq!(summary.pixel_data(), Some(&[1, 2, 3, 4, 5, 6][..]));
        assert_eq!(summary.basic_offset_table(), &[0, 12]);
        assert_eq!(summary.fragment_lengths(), &[4, 2]);
        assert_eq!(summary.plan.pixel_encoding, Some(PixelEncoding::CompressedLossless));
    }

    #[test]
    fn missing_offset_table() {
        #[rustfmt::skip]
        let bytes: &[u8] = &[
            0xE0, 0x7F, 0x10, 0x00,
                b'O', b'B', 0x00, 0x00,
                0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0xDD, 0xE0,     // Sequence Delimitation Item
                0x00, 0x00, 0x00, 0x00,
        ];
        let mut summary = summary_at_pixel_data(bytes);
        let err = extract(&mut summary).unwrap_err();
        assert_eq!(err.kind(), crate::FailureKind::MissingBasicOffsetTable);
    }
}
