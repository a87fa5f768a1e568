//! Error types of the parser.

use dcmingest_core::Tag;
use dcmingest_encoding::{decode, encode, stream};
use snafu::{Backtrace, Snafu};
use std::path::PathBuf;

/// The failure classes of a file decode or encode,
/// for routing failed files without inspecting error sources.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A buffer could not be obtained
    AllocationFailure,
    /// Attempted read past the end of the final chunk
    TruncatedStream,
    /// The file signature is missing
    BadSignature,
    /// An odd value length outside of the vendor exceptions
    UnevenValueLength,
    /// Encapsulated pixel data without an offset table item
    MissingBasicOffsetTable,
    /// A required attribute was not found
    RequiredElementMissing,
    /// The declared transfer syntax is unknown
    UnresolvableTransferSyntax,
    /// The declared transfer syntax is known but not supported
    UnsupportedPixelEncoding,
    /// A nested construct overran its declared length
    InconsistentSequenceLength,
    /// Reading or writing a file failed
    Io,
    /// An edit specification could not be applied
    InvalidEdit,
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write file '{}'", filename.display()))]
    WriteFile {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not load the input into memory"))]
    LoadInput {
        #[snafu(backtrace)]
        source: stream::Error,
    },
    #[snafu(display("Could not read the preamble and signature"))]
    ReadSignature {
        #[snafu(backtrace)]
        source: stream::Error,
    },
    #[snafu(display("Invalid file signature {:02X?}, expected \"DICM\"", found))]
    BadSignature { found: [u8; 4], backtrace: Backtrace },
    #[snafu(display("Could not read element header at position {}", position))]
    ReadHeader {
        position: u64,
        source: decode::Error,
    },
    #[snafu(display("Could not read {} value bytes of element {}", len, tag))]
    ReadValue {
        tag: Tag,
        len: u32,
        #[snafu(backtrace)]
        source: stream::Error,
    },
    #[snafu(display("Could not allocate {} bytes of pixel data", len))]
    AllocatePixelData {
        len: usize,
        #[snafu(backtrace)]
        source: stream::Error,
    },
    #[snafu(display("Element {} has an uneven value length {}", tag, len))]
    UnevenValueLength {
        tag: Tag,
        len: u32,
        backtrace: Backtrace,
    },
    #[snafu(display("Expected the basic offset table item, found {}", found))]
    MissingBasicOffsetTable { found: Tag, backtrace: Backtrace },
    #[snafu(display("Required element {} ({}) is missing", alias, tag))]
    RequiredElementMissing {
        tag: Tag,
        alias: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Transfer syntax '{}' cannot be resolved", uid))]
    UnresolvableTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Transfer syntax '{}' ({}) is not currently supported", uid, family))]
    UnsupportedPixelEncoding {
        uid: String,
        family: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Inconsistent length of {}: declared {} bytes but read {}",
        tag,
        declared,
        consumed
    ))]
    InconsistentSequenceLength {
        tag: Tag,
        declared: u32,
        consumed: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not encode element {}", tag))]
    EncodeElement {
        tag: Tag,
        source: encode::Error,
    },
    #[snafu(display("Could not write the output chunks"))]
    WriteOutput {
        #[snafu(backtrace)]
        source: stream::Error,
    },
    #[snafu(display("Cannot edit element {}: {}", tag, reason))]
    InvalidEdit {
        tag: Tag,
        reason: String,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid edit specification '{}', expected `gggg,eeee=value`", text))]
    ParseEdit { text: String, backtrace: Backtrace },
}

impl Error {
    /// The failure class of this error.
    pub fn kind(&self) -> FailureKind {
        fn of_stream(e: &stream::Error) -> FailureKind {
            if e.is_out_of_memory() {
                FailureKind::AllocationFailure
            } else if e.is_truncated() {
                FailureKind::TruncatedStream
            } else {
                FailureKind::Io
            }
        }

        match self {
            Error::OpenFile { .. } | Error::WriteFile { .. } => FailureKind::Io,
            Error::LoadInput { source }
            | Error::ReadSignature { source }
            | Error::ReadValue { source, .. }
            | Error::AllocatePixelData { source, .. }
            | Error::WriteOutput { source } => of_stream(source),
            Error::ReadHeader { source, .. } => of_stream(source.stream_error()),
            Error::EncodeElement { source, .. } => match source {
                encode::Error::WriteHeader { source, .. }
                | encode::Error::WriteValue { source, .. } => of_stream(source),
                _ => FailureKind::InvalidEdit,
            },
            Error::BadSignature { .. } => FailureKind::BadSignature,
            Error::UnevenValueLength { .. } => FailureKind::UnevenValueLength,
            Error::MissingBasicOffsetTable { .. } => FailureKind::MissingBasicOffsetTable,
            Error::RequiredElementMissing { .. } => FailureKind::RequiredElementMissing,
            Error::UnresolvableTransferSyntax { .. } => FailureKind::UnresolvableTransferSyntax,
            Error::UnsupportedPixelEncoding { .. } => FailureKind::UnsupportedPixelEncoding,
            Error::InconsistentSequenceLength { .. } => FailureKind::InconsistentSequenceLength,
            Error::InvalidEdit { .. } | Error::ParseEdit { .. } => FailureKind::InvalidEdit,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
