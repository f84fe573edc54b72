//! The implicit-list arena, the design [`crate::Arena`] grew out of. Blocks
//! carry the same boundary tags, but there is no free-list index: the fit
//! search walks the physical chain itself, skipping allocated blocks. That
//! makes allocation O(number of blocks) instead of O(free blocks of one
//! class), while freeing stays constant time.
//!
//! It is kept alongside the segregated design because it is the honest
//! baseline: same quantization, same split and merge rules, same public
//! surface, no index to maintain. The throughput benches pit the two against
//! each other.

use std::{marker::PhantomData, mem, ptr};

use crate::{
    align::align_size,
    block::{self, BlockInfo, Blocks},
    policy::{FirstFit, FitPolicy},
    word::{self, Buffer, DSIZE, MIN_BLOCK, WSIZE},
};

/// Fixed-capacity in-place allocator whose fit search walks the physical
/// block chain. Same capacity rules, pointer contract and leniency towards
/// invalid frees as [`crate::Arena`]; there is no order policy because there
/// are no free lists to order.
pub struct ImplicitArena<const N: usize, T = u8, F = FirstFit> {
    pub(crate) data: Buffer<N>,
    /// `*mut T` keeps the arena `!Send + !Sync`, single-threaded use only.
    marker: PhantomData<(*mut T, F)>,
}

impl<const N: usize, T, F> ImplicitArena<N, T, F>
where
    T: Copy,
    F: FitPolicy,
{
    /// Builds an arena whose whole usable capacity is one free block.
    pub fn new() -> Self {
        const {
            assert!(
                N % DSIZE == 0,
                "arena capacity must be a multiple of the double-word size"
            );
            assert!(
                N >= 3 * DSIZE,
                "arena capacity must hold the sentinel words plus one minimum block"
            );
            assert!(
                mem::align_of::<T>() <= DSIZE,
                "element type must not be aligned past the double-word payload alignment"
            );
        }

        let mut arena = Self {
            data: Buffer::zeroed(),
            marker: PhantomData,
        };

        word::put(&mut arena.data.0, WSIZE, word::pack(N - DSIZE, false));
        word::put(&mut arena.data.0, N - DSIZE, word::pack(N - DSIZE, false));

        log::debug!("ImplicitArena::new: capacity {N}, usable {}", N - DSIZE);

        arena
    }

    /// Allocates `size` bytes, or returns null. Same contract as
    /// [`crate::Arena::alloc`].
    pub fn alloc(&mut self, size: usize) -> *mut T {
        if size == 0 || size > N - 2 * DSIZE {
            log::trace!("alloc({size}): rejected");
            return ptr::null_mut();
        }

        let asize = align_size(size);

        let Some(bp) = self.find_free_block(asize) else {
            log::trace!("alloc({size}): no free block of {asize} bytes");
            return ptr::null_mut();
        };

        self.place(bp, asize);

        self.payload_ptr(bp)
    }

    /// Releases a block previously returned by [`alloc`](Self::alloc) and
    /// merges it with free neighbours. Same leniency as
    /// [`crate::Arena::free`].
    pub fn free(&mut self, ptr: *mut T) {
        let Some(bp) = self.offset_of(ptr) else {
            return;
        };

        let tag = word::get(&self.data.0, block::header(bp));
        let size = word::size_bits(tag);
        let fits = bp.checked_add(size).is_some_and(|end| end <= N);

        if !word::alloc_bit(tag) || size < MIN_BLOCK || !fits {
            log::trace!("free: ignoring invalid pointer at offset {bp}");
            return;
        }

        word::put(&mut self.data.0, block::header(bp), word::pack(size, false));
        word::put(&mut self.data.0, bp + size - DSIZE, word::pack(size, false));

        self.coalesce(bp);
    }

    /// Iterates the physical block chain from the first payload to the
    /// epilogue.
    pub fn blocks(&self) -> impl Iterator<Item = BlockInfo> + '_ {
        Blocks::new(&self.data.0)
    }

    /// Logs the block table at debug level.
    pub fn dump(&self) {
        log::debug!("| block | offset | size   | state |");

        for (index, info) in self.blocks().enumerate() {
            log::debug!(
                "| {:<5} | {:<6} | {:<6} | {}     |",
                index,
                info.offset,
                info.size,
                if info.allocated { 'A' } else { 'F' }
            );
        }
    }

    /// Walks the chain for a free block of at least `asize` bytes: first fit
    /// returns on the first one, best fit remembers the smallest over the
    /// whole walk.
    fn find_free_block(&self, asize: usize) -> Option<usize> {
        let data = &self.data.0;
        let mut best: Option<(usize, usize)> = None;
        let mut bp = DSIZE;

        loop {
            let size = block::size(data, bp);
            if size == 0 {
                break;
            }

            if !block::allocated(data, bp) && asize <= size {
                if !F::EXHAUSTIVE {
                    return Some(bp);
                }
                if best.map_or(true, |(_, smallest)| size < smallest) {
                    best = Some((bp, size));
                }
            }

            bp += size;
        }

        best.map(|(bp, _)| bp)
    }

    /// Marks the free block at `bp` allocated, splitting off the remainder
    /// when it can stand on its own.
    fn place(&mut self, bp: usize, asize: usize) {
        let fsize = block::size(&self.data.0, bp);
        let lsize = fsize - asize;

        let asize = if lsize < MIN_BLOCK {
            fsize
        } else {
            let lp = bp + asize;
            word::put(&mut self.data.0, block::header(lp), word::pack(lsize, false));
            word::put(&mut self.data.0, lp + lsize - DSIZE, word::pack(lsize, false));
            asize
        };

        word::put(&mut self.data.0, block::header(bp), word::pack(asize, true));
        word::put(&mut self.data.0, bp + asize - DSIZE, word::pack(asize, true));
    }

    /// Merges the just-freed block at `bp` with free physical neighbours,
    /// zeroing the tags that end up inside the merged block.
    fn coalesce(&mut self, bp: usize) {
        let data = &self.data.0;

        let prev =
            block::prev_exists(data, bp) && !block::allocated(data, block::prev_block(data, bp));
        let next =
            block::next_exists(data, bp) && !block::allocated(data, block::next_block(data, bp));

        let bp_header = block::header(bp);
        let bp_footer = block::footer(data, bp);
        let mut size = block::size(data, bp);

        match (prev, next) {
            (false, false) => {}

            (false, true) => {
                let nb = block::next_block(data, bp);
                let next_header = block::header(nb);
                let next_footer = block::footer(data, nb);
                size += block::size(data, nb);

                let data = &mut self.data.0;
                word::put(data, next_footer, word::pack(size, false));
                word::put(data, next_header, 0);
                word::put(data, bp_footer, 0);
                word::put(data, bp_header, word::pack(size, false));
            }

            (true, false) => {
                let pb = block::prev_block(data, bp);
                let prev_header = block::header(pb);
                let prev_footer = block::footer(data, pb);
                size += block::size(data, pb);

                let data = &mut self.data.0;
                word::put(data, prev_footer, 0);
                word::put(data, prev_header, word::pack(size, false));
                word::put(data, bp_footer, word::pack(size, false));
                word::put(data, bp_header, 0);
            }

            (true, true) => {
                let pb = block::prev_block(data, bp);
                let nb = block::next_block(data, bp);
                let prev_header = block::header(pb);
                let prev_footer = block::footer(data, pb);
                let next_header = block::header(nb);
                let next_footer = block::footer(data, nb);
                size += block::size(data, pb) + block::size(data, nb);

                let data = &mut self.data.0;
                word::put(data, prev_footer, 0);
                word::put(data, prev_header, word::pack(size, false));
                word::put(data, next_footer, word::pack(size, false));
                word::put(data, next_header, 0);
                word::put(data, bp_footer, 0);
                word::put(data, bp_header, 0);
            }
        }
    }

    /// Maps a caller pointer back to a payload offset, rejecting anything
    /// that cannot name a payload of this arena.
    fn offset_of(&self, ptr: *mut T) -> Option<usize> {
        let base = self.data.0.as_ptr() as usize;
        let offset = (ptr as usize).checked_sub(base)?;

        (offset % DSIZE == 0 && offset >= DSIZE && offset + MIN_BLOCK <= N).then_some(offset)
    }

    /// Materializes the caller-facing pointer for the payload at `bp`.
    fn payload_ptr(&mut self, bp: usize) -> *mut T {
        // Safety: `bp` is a payload offset inside the backing buffer.
        unsafe { self.data.0.as_mut_ptr().add(bp).cast() }
    }
}

impl<const N: usize, T, F> Default for ImplicitArena<N, T, F>
where
    T: Copy,
    F: FitPolicy,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<const N: usize, T, F> ImplicitArena<N, T, F>
where
    T: Copy,
    F: FitPolicy,
{
    /// Chain-level invariants: matching tags, complete chain, alignment, no
    /// adjacent free blocks, intact sentinels. There is no index to check.
    fn check_invariants(&self) {
        let data = &self.data.0;
        let blocks: Vec<BlockInfo> = self.blocks().collect();

        let mut expected = DSIZE;
        for info in &blocks {
            assert_eq!(info.offset, expected);
            assert_eq!(info.size % DSIZE, 0);
            assert!(info.size >= MIN_BLOCK);
            assert_eq!(
                word::get(data, block::header(info.offset)),
                word::get(data, block::footer(data, info.offset)),
            );
            expected = info.offset + info.size;
        }
        assert_eq!(expected, N);

        for pair in blocks.windows(2) {
            assert!(pair[0].allocated || pair[1].allocated);
        }

        assert_eq!(word::get(data, 0), 0);
        assert_eq!(word::get(data, N - WSIZE), 0);
    }
}
