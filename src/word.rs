//! The word codec. Every piece of allocator metadata — boundary tags, the
//! sentinel words, free-list links — is a single machine word stored somewhere
//! in the backing buffer, so the rest of the crate talks to the buffer
//! exclusively through [`get`] and [`put`] at byte offsets. Keeping this the
//! only place that interprets raw buffer bytes means the codec can stay
//! entirely safe: offsets are bounds-checked by slicing, and a corrupted
//! offset panics instead of scribbling over unrelated memory.

use std::mem;

/// Machine word size in bytes. 8 on the 64 bit machines this was written on,
/// 4 on 32 bit targets; everything below is derived from it.
pub(crate) const WSIZE: usize = mem::size_of::<usize>();

/// Double-word size in bytes. This is the alignment granularity of the whole
/// allocator: payload pointers, block sizes and the arena capacity are all
/// multiples of `DSIZE`. It is also the per-block overhead, one header word
/// plus one footer word.
pub(crate) const DSIZE: usize = 2 * WSIZE;

/// Smallest block we ever carve out: header + footer + two payload words.
/// The two payload words are not an accident, a free block stores its
/// `{prev, next}` free-list links there. See [`crate::freelist`].
pub(crate) const MIN_BLOCK: usize = 2 * DSIZE;

/// Low bit of a boundary tag: set when the block is allocated. Sizes are
/// multiples of `DSIZE` so the low bits of a tag are always available.
pub(crate) const ALLOCATED: usize = 1;

/// The backing buffer. A plain byte array, over-aligned so that offset
/// `DSIZE` (the first payload) is double-word aligned in absolute terms too.
/// 16 covers `DSIZE` on both 64 bit and 32 bit targets.
#[repr(align(16))]
pub(crate) struct Buffer<const N: usize>(pub [u8; N]);

impl<const N: usize> Buffer<N> {
    /// A zeroed buffer. Zero is meaningful: it is the value of the prologue
    /// and epilogue sentinels and of a cleared free-list link.
    pub fn zeroed() -> Self {
        Self([0; N])
    }
}

/// Reads the word stored at byte offset `offset`.
#[inline]
pub(crate) fn get(data: &[u8], offset: usize) -> usize {
    let mut word = [0; WSIZE];
    word.copy_from_slice(&data[offset..offset + WSIZE]);
    usize::from_ne_bytes(word)
}

/// Writes `word` at byte offset `offset`.
#[inline]
pub(crate) fn put(data: &mut [u8], offset: usize, word: usize) {
    data[offset..offset + WSIZE].copy_from_slice(&word.to_ne_bytes());
}

/// Packs a block size and its allocated flag into one boundary tag.
/// `size` must already be a multiple of [`DSIZE`].
#[inline]
pub(crate) fn pack(size: usize, allocated: bool) -> usize {
    size | allocated as usize
}

/// Size field of a boundary tag.
#[inline]
pub(crate) fn size_bits(tag: usize) -> usize {
    tag & !(DSIZE - 1)
}

/// Allocated flag of a boundary tag.
#[inline]
pub(crate) fn alloc_bit(tag: usize) -> bool {
    tag & ALLOCATED != 0
}
