//! Chunked byte streams.
//!
//! The bytes of a file are held in an ordered chain of fixed-capacity chunks.
//! An [`InputStream`] reads across chunk boundaries transparently
//! and can save and restore its exact read position.
//! An [`OutputStream`] appends a fresh chunk whenever the last one is full.
//!
//! For input chunks, `remaining` is the length of the unread suffix,
//! so that `data_size - remaining` bytes are consumed.
//! The sum of consumed bytes over the chain
//! is always equal to the stream position.
//! For output chunks, `remaining` is the unused capacity.

use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Read, Write};

/// The default capacity of each chunk, in bytes.
pub const DEFAULT_CHUNK_CAPACITY: usize = 64 * 1024;

/// Module-level error type:
/// for errors which may occur while reading or writing chunked bytes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to read past the end of the final chunk
    #[snafu(display(
        "Attempted to read {} bytes at position {}, but only {} are available",
        requested,
        position,
        available
    ))]
    TruncatedStream {
        requested: u64,
        available: u64,
        position: u64,
        backtrace: Backtrace,
    },
    /// A buffer could not be allocated
    #[snafu(display("Could not allocate a buffer of {} bytes", requested))]
    OutOfMemory {
        requested: usize,
        backtrace: Backtrace,
    },
    /// The underlying source could not be read
    #[snafu(display("Could not read from source"))]
    ReadSource {
        source: io::Error,
        backtrace: Backtrace,
    },
    /// The chain could not be written to the destination
    #[snafu(display("Could not write to destination"))]
    WriteDestination {
        source: io::Error,
        backtrace: Backtrace,
    },
}

impl Error {
    /// Whether this error was caused by a failed allocation.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Error::OutOfMemory { .. })
    }

    /// Whether this error was caused by reading past the end of the stream.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::TruncatedStream { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Allocate an empty vector able to hold `size` bytes,
/// reporting allocation failure instead of aborting.
pub fn try_alloc(size: usize) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(size)
        .map_err(|_| OutOfMemorySnafu { requested: size }.build())?;
    Ok(data)
}

/// A fixed-capacity byte buffer in a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    data: Vec<u8>,
    capacity: usize,
    remaining: usize,
}

impl Chunk {
    fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Chunk {
            data: try_alloc(capacity)?,
            capacity,
            remaining: capacity,
        })
    }

    /// The valid bytes of this chunk.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The number of valid bytes.
    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    /// The unread suffix length of an input chunk,
    /// or the unused capacity of an output chunk.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// The fixed capacity of this chunk.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of bytes already read from an input chunk.
    pub fn consumed(&self) -> usize {
        self.data.len() - self.remaining
    }

    fn unread(&self) -> &[u8] {
        &self.data[self.consumed()..]
    }
}

/// An append-only ordered list of chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkChain {
    chunks: Vec<Chunk>,
    capacity: usize,
}

impl ChunkChain {
    /// Create an empty chain of chunks with the given capacity.
    /// A capacity of zero is raised to one byte.
    pub fn new(capacity: usize) -> Self {
        ChunkChain {
            chunks: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Read the whole source into a new chain of input chunks.
    pub fn from_reader<R: Read>(mut reader: R, capacity: usize) -> Result<Self> {
        let mut chain = ChunkChain::new(capacity);
        loop {
            let mut chunk = Chunk::with_capacity(chain.capacity)?;
            (&mut reader)
                .take(chain.capacity as u64)
                .read_to_end(&mut chunk.data)
                .context(ReadSourceSnafu)?;
            if chunk.data.is_empty() {
                break;
            }
            let full = chunk.data.len() == chain.capacity;
            chunk.remaining = chunk.data.len();
            chain.chunks.push(chunk);
            if !full {
                break;
            }
        }
        Ok(chain)
    }

    /// Copy the given bytes into a new chain of input chunks.
    pub fn from_bytes(bytes: &[u8], capacity: usize) -> Result<Self> {
        let mut chain = ChunkChain::new(capacity);
        for piece in bytes.chunks(chain.capacity) {
            let mut chunk = Chunk::with_capacity(chain.capacity)?;
            chunk.data.extend_from_slice(piece);
            chunk.remaining = piece.len();
            chain.chunks.push(chunk);
        }
        Ok(chain)
    }

    /// The chunks of this chain, in order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// The capacity of each chunk.
    pub fn chunk_capacity(&self) -> usize {
        self.capacity
    }

    /// The total number of valid bytes in the chain.
    pub fn total_size(&self) -> u64 {
        self.chunks.iter().map(|c| c.data_size() as u64).sum()
    }

    /// The total number of consumed bytes, for input chains.
    pub fn consumed(&self) -> u64 {
        self.chunks.iter().map(|c| c.consumed() as u64).sum()
    }

    /// Copy all valid bytes into one contiguous vector.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total_size() as usize);
        for chunk in &self.chunks {
            out.extend_from_slice(chunk.data());
        }
        out
    }

    /// Write all valid bytes to the given destination.
    pub fn write_to<W: Write>(&self, mut to: W) -> Result<()> {
        for chunk in &self.chunks {
            to.write_all(chunk.data()).context(WriteDestinationSnafu)?;
        }
        to.flush().context(WriteDestinationSnafu)
    }
}

/// A saved read position of an input stream.
///
/// The cursor refers to its chunk by index into the owning chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    chunk: usize,
    remaining: usize,
    position: u64,
}

impl Cursor {
    /// The index of the chunk holding the next byte to read.
    pub fn chunk(&self) -> usize {
        self.chunk
    }

    /// The unread suffix length of that chunk.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// The absolute stream position.
    pub fn position(&self) -> u64 {
        self.position
    }
}

/// A reader over an input chunk chain.
#[derive(Debug, Clone)]
pub struct InputStream {
    chain: ChunkChain,
    current: usize,
    position: u64,
    total: u64,
}

impl InputStream {
    /// Start reading the given chain from the beginning.
    pub fn new(chain: ChunkChain) -> Self {
        let total = chain.total_size();
        InputStream {
            chain,
            current: 0,
            position: 0,
            total,
        }
    }

    /// The number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The number of bytes still available.
    #[inline]
    pub fn available(&self) -> u64 {
        self.total - self.position
    }

    /// Whether all bytes have been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.available() == 0
    }

    /// The underlying chain of chunks.
    pub fn chain(&self) -> &ChunkChain {
        &self.chain
    }

    /// Take back the underlying chain of chunks.
    pub fn into_chain(self) -> ChunkChain {
        self.chain
    }

    fn ensure_available(&self, n: u64) -> Result<()> {
        snafu::ensure!(
            n <= self.available(),
            TruncatedStreamSnafu {
                requested: n,
                available: self.available(),
                position: self.position,
            }
        );
        Ok(())
    }

    /// Visit the next `n` bytes in order, advancing the cursor.
    /// Availability must have been checked beforehand.
    fn consume_with<F>(&mut self, mut n: usize, mut f: F)
    where
        F: FnMut(&[u8]),
    {
        while n > 0 {
            let chunk = &mut self.chain.chunks[self.current];
            if chunk.remaining == 0 {
                self.current += 1;
                continue;
            }
            let take = n.min(chunk.remaining);
            let start = chunk.consumed();
            f(&chunk.data[start..start + take]);
            chunk.remaining -= take;
            n -= take;
            self.position += take as u64;
        }
    }

    /// Fill the whole buffer with the next bytes.
    ///
    /// Fails with [`Error::TruncatedStream`] without consuming anything
    /// if the chain ends first.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.ensure_available(buf.len() as u64)?;
        let mut offset = 0;
        self.consume_with(buf.len(), |piece| {
            buf[offset..offset + piece.len()].copy_from_slice(piece);
            offset += piece.len();
        });
        Ok(())
    }

    /// Read the next `n` bytes into a freshly allocated buffer.
    pub fn read_vec(&mut self, n: usize) -> Result<Vec<u8>> {
        self.ensure_available(n as u64)?;
        let mut out = try_alloc(n)?;
        self.consume_with(n, |piece| out.extend_from_slice(piece));
        Ok(out)
    }

    /// Skip the next `n` bytes.
    pub fn skip(&mut self, n: u64) -> Result<()> {
        self.ensure_available(n)?;
        let mut n = n;
        while n > 0 {
            let step = n.min(usize::MAX as u64) as usize;
            self.consume_with(step, |_| {});
            n -= step as u64;
        }
        Ok(())
    }

    /// Copy the next bytes into the buffer without consuming them.
    /// Returns the number of bytes copied,
    /// which is less than the buffer length near the end of the stream.
    pub fn peek(&self, buf: &mut [u8]) -> usize {
        let mut filled = 0;
        for chunk in &self.chain.chunks[self.current.min(self.chain.chunks.len())..] {
            if filled == buf.len() {
                break;
            }
            let unread = chunk.unread();
            let take = unread.len().min(buf.len() - filled);
            buf[filled..filled + take].copy_from_slice(&unread[..take]);
            filled += take;
        }
        filled
    }

    /// Capture the current read position.
    pub fn save_cursor(&self) -> Cursor {
        Cursor {
            chunk: self.current,
            remaining: self
                .chain
                .chunks
                .get(self.current)
                .map(|c| c.remaining)
                .unwrap_or(0),
            position: self.position,
        }
    }

    /// Reinstate a read position captured by [`save_cursor`](Self::save_cursor).
    ///
    /// Every chunk after the restored one becomes entirely unread again.
    pub fn restore_cursor(&mut self, cursor: Cursor) {
        self.current = cursor.chunk;
        self.position = cursor.position;
        let mut chunks = self.chain.chunks.iter_mut().skip(cursor.chunk);
        if let Some(chunk) = chunks.next() {
            chunk.remaining = cursor.remaining;
        }
        for chunk in chunks {
            chunk.remaining = chunk.data_size();
        }
    }
}

/// A writer producing an output chunk chain.
#[derive(Debug, Clone)]
pub struct OutputStream {
    chain: ChunkChain,
    position: u64,
}

impl OutputStream {
    /// Create an empty output stream with the given chunk capacity.
    pub fn new(capacity: usize) -> Self {
        OutputStream {
            chain: ChunkChain::new(capacity),
            position: 0,
        }
    }

    /// The number of bytes written so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Append the given bytes,
    /// linking new chunks whenever the last one is full.
    pub fn write_all(&mut self, mut bytes: &[u8]) -> Result<()> {
        while !bytes.is_empty() {
            let needs_chunk = self.chain.chunks.last().map_or(true, |c| c.remaining == 0);
            if needs_chunk {
                let chunk = Chunk::with_capacity(self.chain.capacity)?;
                self.chain.chunks.push(chunk);
            }
            if let Some(chunk) = self.chain.chunks.last_mut() {
                let take = bytes.len().min(chunk.remaining);
                chunk.data.extend_from_slice(&bytes[..take]);
                chunk.remaining -= take;
                self.position += take as u64;
                bytes = &bytes[take..];
            }
        }
        Ok(())
    }

    /// The chain produced so far.
    pub fn chain(&self) -> &ChunkChain {
        &self.chain
    }

    /// Finish writing and take the produced chain.
    pub fn into_chain(self) -> ChunkChain {
        self.chain
    }
}
