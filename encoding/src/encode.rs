//! This module contains the data element header encoding logic,
//! the inverse of [`decode`](crate::decode).
//!
//! Elements of the file meta group are always written
//! in Explicit VR Little Endian.

use crate::stream::{self, OutputStream};
use crate::transfer_syntax::{swap_in_place, swap_width, write_u16, write_u32, TransferSyntax};
use dcmingest_core::header::{DataElementHeader, HasLength, Header, LengthForm};
use dcmingest_core::{Tag, VR};
use snafu::{ensure, ResultExt, Snafu};

/// Module-level error type:
/// for errors which may occur while encoding elements.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to write the header of {}", tag))]
    WriteHeader { tag: Tag, source: stream::Error },
    #[snafu(display("Failed to write the value of {}", tag))]
    WriteValue { tag: Tag, source: stream::Error },
    #[snafu(display("Value of {} ({} bytes) does not fit in a {} length field", tag, len, vr))]
    ValueTooLong { tag: Tag, vr: VR, len: u32 },
    #[snafu(display("Element {} has an unresolved contextual VR {}", tag, vr))]
    ContextualVr { tag: Tag, vr: VR },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Encode an element header into its wire form.
///
/// Follows the same branching rules as the decoder:
/// a 4-byte length for implicit VR syntaxes and the delimiter group,
/// a 2-byte VR with a 2-byte length for short form VRs,
/// or a 2-byte VR, 2 reserved bytes and a 4-byte length for long form VRs.
pub fn header_bytes(header: &DataElementHeader, syntax: TransferSyntax) -> Result<Vec<u8>> {
    let tag = header.tag();
    let syntax = syntax.for_tag(tag);
    let order = syntax.byte_order;
    let len = header.length().0;

    let mut buf = [0u8; 12];
    write_u16(&mut buf[0..2], tag.group(), order);
    write_u16(&mut buf[2..4], tag.element(), order);

    if tag.is_delimiter_group() || !syntax.is_explicit_vr() {
        write_u32(&mut buf[4..8], len, order);
        return Ok(buf[..8].to_vec());
    }

    let vr = header.vr();
    ensure!(!vr.is_contextual(), ContextualVrSnafu { tag, vr });
    buf[4..6].copy_from_slice(&vr.to_bytes());
    match vr.length_form() {
        LengthForm::Short => {
            ensure!(len <= u32::from(u16::MAX), ValueTooLongSnafu { tag, vr, len });
            write_u16(&mut buf[6..8], len as u16, order);
            Ok(buf[..8].to_vec())
        }
        LengthForm::Long => {
            // reserved bytes stay zeroed
            write_u32(&mut buf[8..12], len, order);
            Ok(buf[..12].to_vec())
        }
    }
}

/// Write an element header to the output stream.
/// Returns the number of bytes written.
pub fn encode_header(
    out: &mut OutputStream,
    header: &DataElementHeader,
    syntax: TransferSyntax,
) -> Result<usize> {
    let bytes = header_bytes(header, syntax)?;
    out.write_all(&bytes)
        .context(WriteHeaderSnafu { tag: header.tag() })?;
    Ok(bytes.len())
}

/// Write the raw value of an element to the output stream.
///
/// Raw values of multi-byte numbers are held in native byte order,
/// so they are swapped back when the target byte order differs.
/// All other values are written verbatim.
pub fn encode_value(
    out: &mut OutputStream,
    header: &DataElementHeader,
    raw: &[u8],
    syntax: TransferSyntax,
) -> Result<()> {
    let tag = header.tag();
    let syntax = syntax.for_tag(tag);
    match swap_width(header.vr()) {
        Some(width) if syntax.needs_swap() => {
            let mut swapped = raw.to_vec();
            swap_in_place(&mut swapped, width);
            out.write_all(&swapped).context(WriteValueSnafu { tag })
        }
        _ => out.write_all(raw).context(WriteValueSnafu { tag }),
    }
}
