//! Decoding of whole files into a [`HeaderSummary`].
//!
//! A file is a 128-byte preamble, the `DICM` signature,
//! the file meta group and then the main data set
//! in the transfer syntax declared by the meta group.

use crate::error::{
    BadSignatureSnafu, LoadInputSnafu, OpenFileSnafu, ReadSignatureSnafu, Result,
    UnresolvableTransferSyntaxSnafu, UnsupportedPixelEncodingSnafu,
};
use crate::pixel;
use crate::projector::ProjectionState;
use crate::summary::{FileDecodingPlan, HeaderSummary};
use crate::vendor::VendorQuirks;
use crate::walker::Walker;
use dcmingest_core::Tag;
use dcmingest_dictionary_std::StandardDataDictionary;
use dcmingest_encoding::stream::{ChunkChain, InputStream, DEFAULT_CHUNK_CAPACITY};
use dcmingest_encoding::transfer_syntax::{
    from_uid, resolve_consistent, TransferSyntax, UidError, PEEK_LEN,
};
use snafu::{ensure, ResultExt};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// The length of the file preamble.
pub const PREAMBLE_LEN: usize = 128;

/// The file signature after the preamble.
pub const SIGNATURE: &[u8; 4] = b"DICM";

/// Where the bytes being decoded come from,
/// which selects the applicable trust flag.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum InputOrigin {
    /// a file on storage
    #[default]
    File,
    /// an object received over the network
    Network,
}

/// Whether to read the 128-byte preamble before the signature.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ReadPreamble {
    /// Look for the signature after a preamble,
    /// then at the very start of the input.
    #[default]
    Auto,
    /// Never read the preamble,
    /// thus assuming that the input starts with the signature.
    Never,
    /// Always read the preamble first.
    Always,
}

/// A builder type for decoding a file with additional options.
///
/// # Example
///
/// ```no_run
/// # use dcmingest_parser::DecodeOptions;
/// let summary = DecodeOptions::new()
///     .trust_declared_file(true)
///     .chunk_capacity(16 * 1024)
///     .open_file("path/to/file.dcm")?;
/// println!("{:?}", summary.modality);
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct DecodeOptions {
    trust_declared_file: bool,
    trust_declared_network: bool,
    origin: InputOrigin,
    chunk_capacity: usize,
    read_preamble: ReadPreamble,
    auto_load_tag: Option<Tag>,
    quirks: VendorQuirks,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            trust_declared_file: false,
            trust_declared_network: false,
            origin: InputOrigin::File,
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
            read_preamble: ReadPreamble::Auto,
            auto_load_tag: None,
            quirks: VendorQuirks::default(),
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        DecodeOptions::default()
    }

    /// Believe the transfer syntax declared by files,
    /// instead of checking it against the bytes that follow.
    pub fn trust_declared_file(mut self, trust: bool) -> Self {
        self.trust_declared_file = trust;
        self
    }

    /// Believe the transfer syntax declared by network objects.
    pub fn trust_declared_network(mut self, trust: bool) -> Self {
        self.trust_declared_network = trust;
        self
    }

    /// Set where the input comes from.
    pub fn origin(mut self, origin: InputOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Set the capacity of each input chunk.
    pub fn chunk_capacity(mut self, capacity: usize) -> Self {
        self.chunk_capacity = capacity;
        self
    }

    /// Set whether to read the 128-byte file preamble.
    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Set the element whose text value is marked for auto-loading.
    pub fn auto_load_tag(mut self, tag: Option<Tag>) -> Self {
        self.auto_load_tag = tag;
        self
    }

    /// Replace the table of vendor exceptions.
    pub fn quirks(mut self, quirks: VendorQuirks) -> Self {
        self.quirks = quirks;
        self
    }

    /// Whether declared transfer syntaxes are believed for this input.
    pub fn trusts_declared(&self) -> bool {
        match self.origin {
            InputOrigin::File => self.trust_declared_file,
            InputOrigin::Network => self.trust_declared_network,
        }
    }

    /// Decode the file at the given path.
    pub fn open_file<P>(self, path: P) -> Result<HeaderSummary>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).context(OpenFileSnafu { filename: path })?;
        debug!("Decoding {}", path.display());
        self.from_reader(file)
    }

    /// Decode a file from a byte source, read whole into memory.
    pub fn from_reader<R>(self, from: R) -> Result<HeaderSummary>
    where
        R: Read,
    {
        let chain = ChunkChain::from_reader(from, self.chunk_capacity).context(LoadInputSnafu)?;
        self.decode(chain)
    }

    /// Decode a file from a byte slice.
    pub fn from_bytes(self, bytes: &[u8]) -> Result<HeaderSummary> {
        let chain = ChunkChain::from_bytes(bytes, self.chunk_capacity).context(LoadInputSnafu)?;
        self.decode(chain)
    }

    fn decode(self, chain: ChunkChain) -> Result<HeaderSummary> {
        let mut input = InputStream::new(chain);
        self.read_signature(&mut input)?;

        let plan = FileDecodingPlan {
            trust_declared_file: self.trust_declared_file,
            trust_declared_network: self.trust_declared_network,
            ..FileDecodingPlan::default()
        };
        let trust = self.trusts_declared();
        let dict = StandardDataDictionary;

        let mut summary = HeaderSummary::new(input, plan);
        let mut state = ProjectionState::new();

        // file meta group
        let meta_syntax = if trust {
            TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN
        } else {
            resolve_consistent(
                TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
                &peek(&summary.input),
                &dict,
            )
        };
        summary.plan.meta_syntax = meta_syntax;
        Walker::new(&mut summary, &mut state, &self.quirks, self.auto_load_tag)
            .read_meta_group(meta_syntax)?;

        // main data set
        let (declared, pixel_encoding) = match summary.transfer_syntax_uid.as_deref() {
            Some(uid) => match from_uid(uid) {
                Ok(resolved) => (resolved.syntax, Some(resolved.pixel_encoding)),
                Err(UidError::Unsupported { uid, family }) => {
                    return UnsupportedPixelEncodingSnafu { uid, family }.fail()
                }
                Err(UidError::Unresolvable { uid }) if trust => {
                    return UnresolvableTransferSyntaxSnafu { uid }.fail()
                }
                Err(e) => {
                    warn!("{}, assuming implicit VR little endian", e);
                    (TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN, None)
                }
            },
            None => {
                warn!("No transfer syntax declared, assuming implicit VR little endian");
                (TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN, None)
            }
        };
        let dataset_syntax = if trust {
            declared
        } else {
            resolve_consistent(declared, &peek(&summary.input), &dict)
        };
        debug!("Data set syntax: {}", dataset_syntax);
        summary.plan.dataset_syntax = dataset_syntax;
        summary.plan.pixel_syntax = dataset_syntax;
        summary.plan.pixel_encoding = pixel_encoding;

        Walker::new(&mut summary, &mut state, &self.quirks, self.auto_load_tag)
            .walk_root(dataset_syntax)?;
        state.check_required()?;

        pixel::extract(&mut summary)?;
        summary.bytes_parsed = summary.input.position();
        debug!(
            "Decoded {} elements, {} bytes",
            summary.elements.len(),
            summary.bytes_parsed
        );
        Ok(summary)
    }

    fn read_signature(&self, input: &mut InputStream) -> Result<()> {
        let mut head = [0u8; PREAMBLE_LEN + 4];
        let available = input.peek(&mut head);
        let at_start = &head[..4];
        let after_preamble = &head[PREAMBLE_LEN..];

        let skip = match self.read_preamble {
            ReadPreamble::Always => PREAMBLE_LEN,
            ReadPreamble::Never => 0,
            ReadPreamble::Auto => {
                if available == head.len() && after_preamble == SIGNATURE {
                    PREAMBLE_LEN
                } else if at_start == SIGNATURE {
                    0
                } else {
                    PREAMBLE_LEN
                }
            }
        };
        input.skip(skip as u64).context(ReadSignatureSnafu)?;
        let mut found = [0u8; 4];
        input.read_exact(&mut found).context(ReadSignatureSnafu)?;
        ensure!(&found == SIGNATURE, BadSignatureSnafu { found });
        Ok(())
    }
}

fn peek(input: &InputStream) -> Vec<u8> {
    let mut buf = [0u8; PEEK_LEN];
    let n = input.peek(&mut buf);
    buf[..n].to_vec()
}

/// Decode the file at the given path with the default options.
pub fn open_file<P>(path: P) -> Result<HeaderSummary>
where
    P: AsRef<Path>,
{
    DecodeOptions::new().open_file(path)
}

/// Decode a file from a byte source with the default options.
pub fn from_reader<R>(from: R) -> Result<HeaderSummary>
where
    R: Read,
{
    DecodeOptions::new().from_reader(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;

    #[test]
    fn bad_signature() {
        let bytes = vec![0u8; 200];
        let err = DecodeOptions::new().from_bytes(&bytes).unwrap_err();
        assert_eq!(err.kind(), FailureKind::BadSignature);

        let err = DecodeOptions::new().from_bytes(&bytes[..100]).unwrap_err();
        assert_eq!(err.kind(), FailureKind::TruncatedStream);
    }

    #[test]
    fn trust_flag_follows_origin() {
        let options = DecodeOptions::new()
            .trust_declared_file(false)
            .trust_declared_network(true);
        assert!(!options.trusts_declared());
        assert!(options.origin(InputOrigin::Network).trusts_declared());
    }
}
