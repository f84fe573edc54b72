//! The block navigator. Every block — allocated or free — is surrounded by a
//! pair of boundary tags carrying the same `(size, allocated)` word:
//!
//! ```text
//! +--------------------------+
//! | header tag (size | a)    | <- one word, at `bp - WSIZE`
//! +--------------------------+
//! |         payload          | <- `bp` points here, always DSIZE aligned
//! |           ...            |
//! |           ...            |
//! +--------------------------+
//! | footer tag (size | a)    | <- one word, at `bp + size - DSIZE`
//! +--------------------------+
//! ```
//!
//! The footer duplicates the header so that the *predecessor* of a block can
//! be found in constant time: the word right before a block's header is the
//! predecessor's footer, which carries the predecessor's size. Without
//! footers, finding the physical predecessor would take a forward scan from
//! the start of the arena.
//!
//! The arena brackets its block chain with two zero words, the prologue (at
//! offset 0) and the epilogue (the last word). They make the boundary
//! questions branchless: "is there a predecessor?" is "is the word at
//! `bp - DSIZE` non-zero?", because a real predecessor would have a non-zero
//! footer there, and symmetrically for the successor's header. A block size
//! of zero is impossible, so zero is unambiguous.
//!
//! Blocks are identified by the byte offset of their payload into the backing
//! buffer, never by raw addresses. Offsets survive moves of the arena value
//! and keep all of this module safe code.

use crate::word::{self, DSIZE, WSIZE};

/// Offset of a block's header tag.
#[inline]
pub(crate) fn header(bp: usize) -> usize {
    bp - WSIZE
}

/// Total size of the block at payload offset `bp`, tags included.
#[inline]
pub(crate) fn size(data: &[u8], bp: usize) -> usize {
    word::size_bits(word::get(data, header(bp)))
}

/// Whether the block at payload offset `bp` is allocated.
#[inline]
pub(crate) fn allocated(data: &[u8], bp: usize) -> bool {
    word::alloc_bit(word::get(data, header(bp)))
}

/// Offset of a block's footer tag.
#[inline]
pub(crate) fn footer(data: &[u8], bp: usize) -> usize {
    bp + size(data, bp) - DSIZE
}

/// Payload offset of the physical successor.
#[inline]
pub(crate) fn next_block(data: &[u8], bp: usize) -> usize {
    bp + size(data, bp)
}

/// Payload offset of the physical predecessor. Reads the predecessor's
/// footer, so it must only be called when [`prev_exists`] is true.
#[inline]
pub(crate) fn prev_block(data: &[u8], bp: usize) -> usize {
    bp - word::size_bits(word::get(data, bp - DSIZE))
}

/// Whether a physical predecessor exists, i.e. `bp` is not the first block.
/// The word before the header is either the predecessor's footer or the zero
/// prologue.
#[inline]
pub(crate) fn prev_exists(data: &[u8], bp: usize) -> bool {
    word::get(data, bp - DSIZE) != 0
}

/// Whether a physical successor exists, i.e. `bp` is not the last block. The
/// word after the footer is either the successor's header or the zero
/// epilogue.
#[inline]
pub(crate) fn next_exists(data: &[u8], bp: usize) -> bool {
    word::get(data, bp + size(data, bp) - WSIZE) != 0
}

/// One row of the physical block dump. Offsets are payload offsets into the
/// arena's backing buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockInfo {
    /// Payload offset of the block.
    pub offset: usize,
    /// Total block size in bytes, boundary tags included.
    pub size: usize,
    /// Whether the block is currently allocated.
    pub allocated: bool,
}

/// Iterator over the physical block chain, from the first payload to the
/// epilogue. This is what `blocks()` and `dump()` of both arena types are
/// built on.
pub(crate) struct Blocks<'a> {
    data: &'a [u8],
    bp: usize,
}

impl<'a> Blocks<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        // First payload sits one word after the prologue word's padding,
        // which is one double word into the buffer.
        Self { data, bp: DSIZE }
    }
}

impl Iterator for Blocks<'_> {
    type Item = BlockInfo;

    fn next(&mut self) -> Option<BlockInfo> {
        let size = size(self.data, self.bp);

        // The epilogue is the only zero-size "header" in the chain.
        if size == 0 {
            return None;
        }

        let info = BlockInfo {
            offset: self.bp,
            size,
            allocated: allocated(self.data, self.bp),
        };

        self.bp += size;

        Some(info)
    }
}
