//! Re-encoding of a decoded file.
//!
//! The output is a preamble of zeros, the signature,
//! the file meta group in Explicit VR Little Endian
//! and the data set elements in the syntax they were read with,
//! followed by the pixel data as one block of defined length.

use crate::error::{EncodeElementSnafu, Result, WriteFileSnafu, WriteOutputSnafu};
use crate::file::{PREAMBLE_LEN, SIGNATURE};
use crate::summary::HeaderSummary;
use crate::value::decode_value;
use dcmingest_core::{DataElementHeader, Element, Length, Tag, VR};
use dcmingest_encoding::encode::{encode_header, encode_value, header_bytes};
use dcmingest_encoding::stream::{ChunkChain, OutputStream};
use dcmingest_encoding::transfer_syntax::TransferSyntax;
use snafu::ResultExt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

const GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);

fn write_element(
    out: &mut OutputStream,
    element: &Element,
    syntax: TransferSyntax,
) -> Result<()> {
    let header = element.header();
    encode_header(out, header, syntax).context(EncodeElementSnafu { tag: header.tag })?;
    encode_value(out, header, element.raw(), syntax).context(EncodeElementSnafu { tag: header.tag })
}

impl HeaderSummary {
    /// Encode the elements of this file back into chunks.
    ///
    /// The group length of the file meta group is recomputed
    /// when the file carried one.
    /// The result is kept in the summary and returned.
    pub fn encode(&mut self) -> Result<&ChunkChain> {
        self.update_meta_group_length()?;

        let capacity = self.input.chain().chunk_capacity();
        let mut out = OutputStream::new(capacity);
        out.write_all(&[0u8; PREAMBLE_LEN]).context(WriteOutputSnafu)?;
        out.write_all(SIGNATURE).context(WriteOutputSnafu)?;

        let meta_syntax = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
        let dataset_syntax = self.plan.dataset_syntax;
        // (level of the enclosed elements, syntax they were read with)
        let mut nested: Vec<(u32, TransferSyntax)> = Vec::new();

        for element in &self.elements {
            let header = element.header();
            let level = element.nesting_level();
            if level == 0 && header.tag.is_meta() {
                write_element(&mut out, element, meta_syntax)?;
                continue;
            }

            let syntax = match nested.last() {
                Some(&(at, syntax)) if level >= at => syntax,
                _ => dataset_syntax,
            };
            write_element(&mut out, element, syntax)?;

            if header.tag == Tag::SEQUENCE_DELIMITER
                && nested.last().map_or(false, |&(at, _)| at == level)
            {
                nested.pop();
            } else if header.vr != VR::SQ
                && header.len.is_undefined()
                && header.tag != Tag::PIXEL_DATA
                && !header.tag.is_delimiter_group()
            {
                nested.push((level + 1, TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN));
            }
        }

        if let (Some(pixel_header), Some(pixels)) = (self.pixel_header, self.pixel_data.as_ref()) {
            let padded = pixels.len() + pixels.len() % 2;
            let len = Length(padded as u32);
            let header = DataElementHeader::new(Tag::PIXEL_DATA, pixel_header.vr, len);
            encode_header(&mut out, &header, dataset_syntax)
                .context(EncodeElementSnafu { tag: Tag::PIXEL_DATA })?;
            // pixel data is kept in file byte order
            out.write_all(pixels).context(WriteOutputSnafu)?;
            if pixels.len() % 2 == 1 {
                out.write_all(&[0]).context(WriteOutputSnafu)?;
            }
        }

        debug!("Encoded {} bytes", out.position());
        Ok(self.output.insert(out.into_chain()))
    }

    /// Encode this file and write it to the given path.
    pub fn write_to_file<P>(&mut self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::create(path).context(WriteFileSnafu { filename: path })?;
        let chain = self.encode()?;
        chain.write_to(BufWriter::new(file)).context(WriteOutputSnafu)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    fn update_meta_group_length(&mut self) -> Result<()> {
        let Some(index) = self
            .elements
            .iter()
            .position(|e| e.nesting_level() == 0 && e.header().tag == GROUP_LENGTH)
        else {
            return Ok(());
        };

        let mut len = 0u32;
        for element in self
            .elements
            .iter()
            .filter(|e| e.nesting_level() == 0 && e.header().tag.is_meta())
            .filter(|e| e.header().tag != GROUP_LENGTH)
        {
            let header = header_bytes(element.header(), TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN)
                .context(EncodeElementSnafu { tag: element.header().tag })?;
            len += (header.len() + element.raw().len()) as u32;
        }

        let raw = len.to_ne_bytes().to_vec();
        let value = decode_value(VR::UL, &raw);
        self.elements[index].replace_value(raw, value);
        Ok(())
    }
}
