//! This module contains the data element header decoding logic.
//!
//! A header is decoded from an [`InputStream`]
//! according to a [`TransferSyntax`].
//! Value representations of implicit VR syntaxes come from the dictionary,
//! and contextual VRs are resolved through a [`VrContext`].

use crate::stream::{self, InputStream};
use crate::transfer_syntax::{read_u16, read_u32, TransferSyntax};
use dcmingest_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmingest_core::header::{DataElementHeader, LengthForm};
use dcmingest_core::{Length, Tag, VR};
use snafu::{ResultExt, Snafu};
use tracing::trace;

/// Module-level error type:
/// for errors which may occur while decoding element headers.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to read the header's tag field"))]
    ReadTag { source: stream::Error },
    #[snafu(display("Failed to read the header's value representation"))]
    ReadVr { source: stream::Error },
    #[snafu(display("Failed to read the header's reserved bytes"))]
    ReadReserved { source: stream::Error },
    #[snafu(display("Failed to read the header's element length field"))]
    ReadLength { source: stream::Error },
}

impl Error {
    /// The underlying stream error.
    pub fn stream_error(&self) -> &stream::Error {
        match self {
            Error::ReadTag { source }
            | Error::ReadVr { source }
            | Error::ReadReserved { source }
            | Error::ReadLength { source } => source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The sibling values needed to resolve contextual VRs.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct VrContext {
    /// Pixel Representation (0028,0103): 1 means signed samples
    pub pixel_representation: Option<u16>,
    /// Bits Allocated (0028,0100)
    pub bits_allocated: Option<u16>,
}

impl VrContext {
    /// Resolve a contextual VR.
    /// Other VRs are returned unchanged.
    ///
    /// `XS` becomes `SS` for signed samples and `US` otherwise.
    /// `OX` becomes `OW` for more than 8 bits allocated and `OB` otherwise.
    pub fn resolve(&self, vr: VR) -> VR {
        match vr {
            VR::XS if self.pixel_representation == Some(1) => VR::SS,
            VR::XS => VR::US,
            VR::OX if self.bits_allocated.map_or(false, |b| b > 8) => VR::OW,
            VR::OX => VR::OB,
            vr => vr,
        }
    }
}

/// A decoded element header, with the dictionary entry of its tag.
#[derive(Debug, Clone, Copy)]
pub struct DecodedHeader {
    /// the header, with a non-contextual VR
    pub header: DataElementHeader,
    /// the dictionary entry of the tag, if known
    pub entry: Option<&'static DataDictionaryEntry>,
    /// the number of bytes of the encoded header
    pub header_len: usize,
}

/// Decode the next element header.
///
/// Elements of the delimiter group never carry a VR,
/// so they are given `UN` and a 4-byte length.
/// Unrecognized explicit VR codes are read as `UN`.
pub fn decode_header<D>(
    stream: &mut InputStream,
    syntax: TransferSyntax,
    dict: &D,
    context: VrContext,
) -> Result<DecodedHeader>
where
    D: ?Sized + DataDictionary,
{
    let order = syntax.byte_order;
    let mut buf = [0u8; 4];

    // retrieve tag
    stream.read_exact(&mut buf).context(ReadTagSnafu)?;
    let tag = Tag(read_u16(&buf[0..2], order), read_u16(&buf[2..4], order));
    let entry = dict.by_tag(tag);

    if tag.is_delimiter_group() {
        // item delimiters do not have VR or reserved field
        stream.read_exact(&mut buf).context(ReadLengthSnafu)?;
        let len = Length(read_u32(&buf, order));
        trace!("{} (item) {}", tag, len);
        return Ok(DecodedHeader {
            header: DataElementHeader::new(tag, VR::UN, len),
            entry,
            header_len: 8,
        });
    }

    if !syntax.is_explicit_vr() {
        stream.read_exact(&mut buf).context(ReadLengthSnafu)?;
        let vr = context.resolve(entry.map_or(VR::UN, |e| e.vr));
        let len = Length(read_u32(&buf, order));
        trace!("{} {} {} (implicit)", tag, vr, len);
        return Ok(DecodedHeader {
            header: DataElementHeader::new(tag, vr, len),
            entry,
            header_len: 8,
        });
    }

    // retrieve explicit VR
    stream.read_exact(&mut buf[0..2]).context(ReadVrSnafu)?;
    let vr = VR::from_binary([buf[0], buf[1]]).unwrap_or(VR::UN);

    // retrieve data length
    let (len, header_len) = match vr.length_form() {
        LengthForm::Short => {
            // read 2 bytes for the data length
            stream.read_exact(&mut buf[0..2]).context(ReadLengthSnafu)?;
            (u32::from(read_u16(&buf[0..2], order)), 8)
        }
        LengthForm::Long => {
            // read 2 reserved bytes, then 4 bytes for data length
            stream
                .read_exact(&mut buf[0..2])
                .context(ReadReservedSnafu)?;
            stream.read_exact(&mut buf).context(ReadLengthSnafu)?;
            (read_u32(&buf, order), 12)
        }
    };
    trace!("{} {} {}", tag, vr, Length(len));

    Ok(DecodedHeader {
        header: DataElementHeader::new(tag, vr, Length(len)),
        entry,
        header_len,
    })
}

/// Read the tag of the next element without consuming it.
/// Returns `None` if fewer than 4 bytes remain.
pub fn peek_tag(stream: &InputStream, syntax: TransferSyntax) -> Option<Tag> {
    let mut buf = [0u8; 4];
    if stream.peek(&mut buf) < 4 {
        return None;
    }
    let order = syntax.byte_order;
    Some(Tag(read_u16(&buf[0..2], order), read_u16(&buf[2..4], order)))
}
