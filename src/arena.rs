//! The segregated arena, the main allocator of this crate. It manages a
//! single inline byte buffer of compile-time size and serves variable-sized
//! requests from it, never touching the system allocator after construction:
//!
//! ```text
//!             offset 0                                         offset N
//!             |                                                       |
//!             v                                                       v
//!             +------+--------+--------+--------+-----+--------+------+
//!             | 0    | block  | block  | block  | ... | block  |    0 |
//!             +------+--------+--------+--------+-----+--------+------+
//!              ^                                                ^
//!              | prologue word                   epilogue word  |
//!
//! heads[0] -> (empty)
//! heads[1] -> free -> free                 size in [2 * DSIZE, 4 * DSIZE)
//! heads[2] -> free                         size in [4 * DSIZE, 8 * DSIZE)
//!   ...
//! heads[K-1] -> free                       the class of the initial block
//! ```
//!
//! Every block carries a `(size | allocated)` boundary tag at both ends (see
//! [`crate::block`]); free blocks additionally sit in the doubly-linked list
//! of their size class (see [`crate::freelist`]). Allocation quantizes the
//! request, searches the class lists under the fit policy, splits off any
//! usable remainder and flips the chosen block to allocated. Deallocation
//! flips the block back, indexes it and merges it with free physical
//! neighbours, so no two adjacent free blocks ever survive an operation.

use std::{marker::PhantomData, mem, num::NonZeroUsize, ptr};

use crate::{
    align::align_size,
    block::{self, BlockInfo, Blocks},
    freelist::{Link, MAX_CLASSES},
    policy::{FitPolicy, FirstFit, Lifo, OrderPolicy},
    word::{self, Buffer, DSIZE, MIN_BLOCK, WSIZE},
};

/// Fixed-capacity in-place allocator with segregated explicit free lists.
///
/// `N` is the total capacity in bytes, including one word of prologue and one
/// of epilogue plus two tag words per block; it must be a multiple of the
/// double-word size and large enough for one minimum block. `T` only
/// determines the pointer type handed back by [`alloc`](Self::alloc), the
/// payload is raw bytes regardless. `F` picks the fit policy and `O` the
/// free-list insertion order; combining [`crate::BestFit`] with
/// [`crate::AddressOrdered`] is rejected at compile time because an
/// exhaustive search gains nothing from sorted lists.
///
/// The arena is single-threaded by construction (it is neither [`Send`] nor
/// [`Sync`]) and all its internal state is offset-based, so the value can be
/// moved freely; only pointers already handed out become dangling when it
/// moves or drops.
///
/// # Examples
///
/// ```
/// use fixalloc::{Arena, BestFit, Lifo};
///
/// let mut arena = Arena::<4096, u32, BestFit, Lifo>::new();
///
/// let value = arena.alloc(std::mem::size_of::<u32>());
/// assert!(!value.is_null());
///
/// unsafe {
///     value.write(42);
///     assert_eq!(value.read(), 42);
/// }
///
/// arena.free(value);
/// ```
pub struct Arena<const N: usize, T = u8, F = FirstFit, O = Lifo> {
    /// The managed bytes. Sentinels, boundary tags, free-list links and
    /// caller payloads all live in here.
    pub(crate) data: Buffer<N>,
    /// One list head per size class; only the first [`Self::CLASSES`] entries
    /// are ever used.
    pub(crate) heads: [Link; MAX_CLASSES],
    /// `*mut T` keeps the arena `!Send + !Sync`: there is no internal
    /// synchronization to make sharing sound.
    marker: PhantomData<(*mut T, F, O)>,
}

impl<const N: usize, T, F, O> Arena<N, T, F, O>
where
    T: Copy,
    F: FitPolicy,
    O: OrderPolicy,
{
    /// Builds an arena whose whole usable capacity is one free block, filed
    /// under the highest size class.
    ///
    /// The configuration is checked here, at compile time: a misaligned or
    /// undersized `N`, an over-aligned `T` or the redundant
    /// (best fit, address ordered) combination all fail the build.
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
            assert!(
                !(F::EXHAUSTIVE && O::ADDRESS_ORDERED),
                "best fit with address-ordered free lists is redundant, pick one of the two"
            );
        }

        let mut arena = Self {
            data: Buffer::zeroed(),
            heads: [None; MAX_CLASSES],
            marker: PhantomData,
        };

        // One free block spans everything between the zero sentinels. Its
        // link words are already zero, which is the cleared (None) state.
        word::put(&mut arena.data.0, WSIZE, word::pack(N - DSIZE, false));
        word::put(&mut arena.data.0, N - DSIZE, word::pack(N - DSIZE, false));
        arena.heads[Self::CLASSES - 1] = NonZeroUsize::new(DSIZE);

        log::debug!(
            "Arena::new: capacity {N}, usable {}, {} size classes",
            N - DSIZE,
            Self::CLASSES
        );

        arena
    }

    /// Allocates `size` bytes and returns a pointer to the payload, or null
    /// when the request is zero-sized, can never fit, or no free block is
    /// currently large enough. The payload is double-word aligned and its
    /// bytes are left as they were.
    ///
    /// The pointer stays valid until it is passed to [`free`](Self::free),
    /// the arena value moves, or the arena drops, whichever comes first.
    pub fn alloc(&mut self, size: usize) -> *mut T {
        // Zero-sized and known-too-large requests fail without a search.
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

        log::trace!(
            "alloc({size}): block of {} at offset {bp}",
            block::size(&self.data.0, bp)
        );

        self.payload_ptr(bp)
    }

    /// Releases a block previously returned by [`alloc`](Self::alloc) on this
    /// arena and merges it with any free physical neighbours.
    ///
    /// Invalid requests are ignored: null, pointers outside the buffer,
    /// misaligned payload offsets, headers without the allocated bit (which
    /// covers double frees, including of blocks that have since been
    /// coalesced away) and headers whose size could not describe a block
    /// inside the buffer. A forged in-bounds header that passes all of these
    /// checks corrupts allocator state just like in any malloc, but every
    /// access stays inside the arena's own buffer.
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

        self.link_block(bp);
        self.coalesce(bp);

        log::trace!("free: released block of {size} at offset {bp}");
    }

    /// Iterates the physical block chain from the first payload to the
    /// epilogue. Diagnostics and tests are built on this.
    pub fn blocks(&self) -> impl Iterator<Item = BlockInfo> + '_ {
        Blocks::new(&self.data.0)
    }

    /// Logs the block table at debug level, one row per physical block.
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

    /// Marks the free block at `bp` allocated, carving off the tail end as a
    /// new free block when the remainder can stand on its own.
    fn place(&mut self, bp: usize, asize: usize) {
        let fsize = block::size(&self.data.0, bp);
        let lsize = fsize - asize;

        let asize = if lsize < MIN_BLOCK {
            // The leftover cannot hold its own tags plus link words: hand
            // out the whole block instead of stranding unusable bytes.
            fsize
        } else {
            let lp = bp + asize;
            word::put(&mut self.data.0, block::header(lp), word::pack(lsize, false));
            word::put(&mut self.data.0, lp + lsize - DSIZE, word::pack(lsize, false));
            self.link_block(lp);
            asize
        };

        // Unlink before the header is rewritten: the class key is the size
        // the block was linked under.
        self.unlink_block(bp);

        word::put(&mut self.data.0, block::header(bp), word::pack(asize, true));
        word::put(&mut self.data.0, bp + asize - DSIZE, word::pack(asize, true));
    }

    /// Merges the just-freed block at `bp` with free physical neighbours.
    /// All participating blocks leave their class lists before any tag is
    /// rewritten (the index keys off the old sizes), the merged block is
    /// re-indexed afterwards, and the tags that end up inside the merged
    /// block are zeroed so only the outermost pair carries the size.
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

                self.unlink_block(nb);
                self.unlink_block(bp);

                let data = &mut self.data.0;
                word::put(data, next_footer, word::pack(size, false));
                word::put(data, next_header, 0);
                word::put(data, bp_footer, 0);
                word::put(data, bp_header, word::pack(size, false));

                self.link_block(bp);
            }

            (true, false) => {
                let pb = block::prev_block(data, bp);
                let prev_header = block::header(pb);
                let prev_footer = block::footer(data, pb);
                size += block::size(data, pb);

                self.unlink_block(bp);
                self.unlink_block(pb);

                let data = &mut self.data.0;
                word::put(data, prev_footer, 0);
                word::put(data, prev_header, word::pack(size, false));
                word::put(data, bp_footer, word::pack(size, false));
                word::put(data, bp_header, 0);

                self.link_block(pb);
            }

            (true, true) => {
                let pb = block::prev_block(data, bp);
                let nb = block::next_block(data, bp);
                let prev_header = block::header(pb);
                let prev_footer = block::footer(data, pb);
                let next_header = block::header(nb);
                let next_footer = block::footer(data, nb);
                size += block::size(data, pb) + block::size(data, nb);

                self.unlink_block(nb);
                self.unlink_block(bp);
                self.unlink_block(pb);

                let data = &mut self.data.0;
                word::put(data, prev_footer, 0);
                word::put(data, prev_header, word::pack(size, false));
                word::put(data, next_footer, word::pack(size, false));
                word::put(data, next_header, 0);
                word::put(data, bp_footer, 0);
                word::put(data, bp_header, 0);

                self.link_block(pb);
            }
        }
    }

    /// Maps a caller pointer back to a payload offset, or `None` when the
    /// pointer cannot possibly name a payload of this arena.
    pub(crate) fn offset_of(&self, ptr: *mut T) -> Option<usize> {
        let base = self.data.0.as_ptr() as usize;
        let offset = (ptr as usize).checked_sub(base)?;

        // Payloads are double-word aligned, start after the prologue and
        // leave room for at least a minimum block before the epilogue.
        (offset % DSIZE == 0 && offset >= DSIZE && offset + MIN_BLOCK <= N).then_some(offset)
    }

    /// Materializes the caller-facing pointer for the payload at `bp`.
    fn payload_ptr(&mut self, bp: usize) -> *mut T {
        // Safety: `bp` is a payload offset inside the backing buffer, so the
        // result stays within the same allocation.
        unsafe { self.data.0.as_mut_ptr().add(bp).cast() }
    }
}

impl<const N: usize, T, F, O> Default for Arena<N, T, F, O>
where
    T: Copy,
    F: FitPolicy,
    O: OrderPolicy,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<const N: usize, T, F, O> Arena<N, T, F, O>
where
    T: Copy,
    F: FitPolicy,
    O: OrderPolicy,
{
    /// Asserts every structural invariant: matching boundary tags, a complete
    /// chain that conserves the capacity, double-word alignment, no adjacent
    /// free blocks, intact sentinels and a class index that holds exactly the
    /// free blocks, each in the list of its class.
    pub(crate) fn check_invariants(&self) {
        use std::collections::HashSet;

        use crate::freelist::{class_of, next_link, prev_link};

        let data = &self.data.0;
        let blocks: Vec<BlockInfo> = self.blocks().collect();

        let mut expected = DSIZE;
        for info in &blocks {
            assert_eq!(info.offset, expected, "chain gap at offset {}", info.offset);
            assert_eq!(info.offset % DSIZE, 0);
            assert_eq!(info.size % DSIZE, 0);
            assert!(info.size >= MIN_BLOCK);
            assert_eq!(
                word::get(data, block::header(info.offset)),
                word::get(data, block::footer(data, info.offset)),
                "header and footer disagree at offset {}",
                info.offset
            );
            expected = info.offset + info.size;
        }
        assert_eq!(expected, N, "chain does not reach the epilogue");

        for pair in blocks.windows(2) {
            assert!(
                pair[0].allocated || pair[1].allocated,
                "adjacent free blocks at offsets {} and {}",
                pair[0].offset,
                pair[1].offset
            );
        }

        assert_eq!(word::get(data, 0), 0, "prologue overwritten");
        assert_eq!(word::get(data, N - WSIZE), 0, "epilogue overwritten");

        let free: HashSet<usize> = blocks
            .iter()
            .filter(|info| !info.allocated)
            .map(|info| info.offset)
            .collect();
        let mut linked = HashSet::new();

        for class in 0..Self::CLASSES {
            let mut previous: Link = None;
            let mut cursor = self.heads[class];

            while let Some(node) = cursor {
                let bp = node.get();
                assert_eq!(class_of(block::size(data, bp)), class);
                assert!(!block::allocated(data, bp));
                assert_eq!(prev_link(data, bp), previous);
                assert!(linked.insert(bp), "block {bp} linked twice");
                previous = cursor;
                cursor = next_link(data, bp);
            }
        }

        assert_eq!(linked, free, "class index out of sync with the chain");
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{AddressOrdered, BestFit};

    #[test]
    fn fresh_arena_is_one_free_block() {
        let arena = Arena::<4096>::new();

        assert_eq!(
            arena.blocks().collect::<Vec<_>>(),
            [BlockInfo {
                offset: DSIZE,
                size: 4096 - DSIZE,
                allocated: false,
            }]
        );

        arena.check_invariants();
    }

    #[test]
    fn first_allocation_splits_the_initial_block() {
        let mut arena = Arena::<4096>::new();

        let ptr = arena.alloc(DSIZE);
        assert!(!ptr.is_null());
        assert_eq!(ptr as usize % DSIZE, 0);

        assert_eq!(
            arena.blocks().collect::<Vec<_>>(),
            [
                BlockInfo {
                    offset: DSIZE,
                    size: MIN_BLOCK,
                    allocated: true,
                },
                BlockInfo {
                    offset: DSIZE + MIN_BLOCK,
                    size: 4096 - DSIZE - MIN_BLOCK,
                    allocated: false,
                },
            ]
        );

        arena.check_invariants();
    }

    #[test]
    fn freeing_in_allocation_order_coalesces_back() {
        let mut arena = Arena::<4096, u32>::new();

        let i = arena.alloc(mem::size_of::<u32>());
        let j = arena.alloc(mem::size_of::<u32>());
        let k = arena.alloc(mem::size_of::<u32>());

        // Three distinct minimum blocks, one right after the other.
        assert!(!i.is_null() && !j.is_null() && !k.is_null());
        assert_eq!(j as usize - i as usize, MIN_BLOCK);
        assert_eq!(k as usize - j as usize, MIN_BLOCK);

        // Each free merges with whatever free neighbours exist at that
        // point; the last one restores the initial single block.
        for ptr in [i, j, k] {
            arena.free(ptr);
            arena.check_invariants();
        }

        assert_eq!(
            arena.blocks().collect::<Vec<_>>(),
            Arena::<4096, u32>::new().blocks().collect::<Vec<_>>()
        );
        assert!(arena.data.0 == Arena::<4096, u32>::new().data.0);
    }

    #[test]
    fn largest_servable_request_takes_everything() {
        let mut arena = Arena::<4096>::new();

        // N - 2 * DSIZE quantizes to exactly the usable capacity.
        let ptr = arena.alloc(4096 - 2 * DSIZE);
        assert!(!ptr.is_null());

        assert_eq!(
            arena.blocks().collect::<Vec<_>>(),
            [BlockInfo {
                offset: DSIZE,
                size: 4096 - DSIZE,
                allocated: true,
            }]
        );

        arena.check_invariants();
    }

    #[test]
    fn oversized_and_zero_requests_are_rejected() {
        let mut arena = Arena::<4096>::new();

        assert!(arena.alloc(0).is_null());
        assert!(arena.alloc(4096 - 2 * DSIZE + 1).is_null());
        assert!(arena.alloc(4096).is_null());
        assert!(arena.alloc(usize::MAX).is_null());

        arena.check_invariants();
    }

    #[test]
    fn slack_below_the_minimum_block_is_absorbed() {
        let mut arena = Arena::<4096>::new();

        // Quantizes to N - 2 * DSIZE, one double word short of the free
        // block: too small to split off, so the block is handed out whole.
        let ptr = arena.alloc(4096 - 3 * DSIZE);
        assert!(!ptr.is_null());

        assert_eq!(
            arena.blocks().collect::<Vec<_>>(),
            [BlockInfo {
                offset: DSIZE,
                size: 4096 - DSIZE,
                allocated: true,
            }]
        );

        // Nothing is left, not even for a minimum request.
        assert!(arena.alloc(DSIZE).is_null());

        arena.check_invariants();
    }

    #[test]
    fn filling_to_capacity_hits_the_slack_boundary() {
        let mut arena = Arena::<4096>::new();

        // Minimum blocks until exactly three double words of slack remain.
        let count = (4096 - 4 * DSIZE) / MIN_BLOCK;
        for _ in 0..count {
            assert!(!arena.alloc(DSIZE).is_null());
        }
        arena.check_invariants();

        let slack = 4096 - DSIZE - count * MIN_BLOCK;
        assert_eq!(slack, 3 * DSIZE);

        // A request needing one block more than the slack fails; the largest
        // payload whose block fits the slack exactly still succeeds.
        assert!(arena.alloc(3 * DSIZE).is_null());
        let last = arena.alloc(2 * DSIZE);
        assert!(!last.is_null());

        // Now the arena is completely full.
        assert!(arena.alloc(1).is_null());

        arena.check_invariants();
    }

    /// Allocates the seven-block pattern of descending sizes, frees holes of
    /// three different classes and re-requests them smallest-first. Best fit
    /// must land every re-request in its exact original hole.
    #[test]
    fn best_fit_reuses_exact_holes() {
        let mut arena = Arena::<4096, u8, BestFit, Lifo>::new();

        let sizes = [256, 224, 192, 160, 128, 96, 64];
        let ptrs: Vec<*mut u8> = sizes.iter().map(|&size| arena.alloc(size)).collect();
        assert!(ptrs.iter().all(|ptr| !ptr.is_null()));

        for index in [1, 3, 5] {
            arena.free(ptrs[index]);
            arena.check_invariants();
        }

        for (index, size) in [(5, 96), (3, 160), (1, 224)] {
            let again = arena.alloc(size);
            assert_eq!(again, ptrs[index], "request of {size} missed its hole");
            arena.check_invariants();
        }
    }

    /// Two free holes of the same size class, the bigger one at the head of
    /// the LIFO list. First fit takes the head, best fit scans the class and
    /// takes the exact one. This is the pattern that actually tells the two
    /// policies apart through the public surface.
    #[test]
    fn fit_policies_disagree_on_same_class_holes() {
        fn holes<F: FitPolicy>(arena: &mut Arena<4096, u8, F, Lifo>) -> (usize, usize) {
            let big = arena.alloc(14 * DSIZE); // quantizes to 15 double words
            arena.alloc(DSIZE);
            let exact = arena.alloc(7 * DSIZE); // quantizes to 8 double words
            arena.alloc(DSIZE);

            let big_offset = arena.offset_of(big).unwrap();
            let exact_offset = arena.offset_of(exact).unwrap();

            // Same class, freed so the bigger hole ends up at the head.
            assert_eq!(
                crate::freelist::class_of(15 * DSIZE),
                crate::freelist::class_of(8 * DSIZE)
            );
            arena.free(exact);
            arena.free(big);
            arena.check_invariants();

            (big_offset, exact_offset)
        }

        let mut first = Arena::<4096, u8, FirstFit, Lifo>::new();
        let (big, _) = holes(&mut first);
        let ptr = first.alloc(7 * DSIZE);
        assert_eq!(first.offset_of(ptr).unwrap(), big);

        let mut best = Arena::<4096, u8, BestFit, Lifo>::new();
        let (_, exact) = holes(&mut best);
        let ptr = best.alloc(7 * DSIZE);
        assert_eq!(best.offset_of(ptr).unwrap(), exact);
    }

    #[test]
    fn null_free_leaves_every_byte_untouched() {
        let mut arena = Arena::<4096>::new();
        arena.alloc(100);

        let before = arena.data.0;
        arena.free(ptr::null_mut());
        assert!(arena.data.0 == before);
    }

    #[test]
    fn bogus_frees_are_ignored() {
        let mut arena = Arena::<4096>::new();

        let ptr = arena.alloc(DSIZE);
        let before = arena.data.0;

        // A pointer this arena never produced.
        let mut foreign = 0u8;
        arena.free(&mut foreign);

        // Misaligned interior pointer.
        arena.free(unsafe { ptr.add(1) });

        // Aligned pointer into the middle of the trailing free block: its
        // "header" word is payload garbage without the allocated bit.
        arena.free(unsafe { ptr.add(4 * DSIZE) });

        assert!(arena.data.0 == before);
        arena.check_invariants();
    }

    #[test]
    fn double_free_is_ignored() {
        let mut arena = Arena::<4096>::new();

        let first = arena.alloc(DSIZE);
        let second = arena.alloc(DSIZE);

        arena.free(first);

        // The first block is free (and may have merged); freeing it again
        // finds no allocated bit and backs off.
        let before = arena.data.0;
        arena.free(first);
        assert!(arena.data.0 == before);

        arena.free(second);
        arena.check_invariants();

        assert_eq!(
            arena.blocks().collect::<Vec<_>>(),
            Arena::<4096>::new().blocks().collect::<Vec<_>>()
        );
    }

    /// Allocates with every policy combination until nothing fits, then
    /// frees in an arbitrary order. The arena must come back byte-identical
    /// to a fresh one: the coalescer zeroes interior tags and the free list
    /// clears the links of unlinked nodes, so nothing may linger.
    fn exercise<F: FitPolicy, O: OrderPolicy>(sizes: &[usize], order: &[usize]) {
        let fresh = Arena::<2048, u8, F, O>::new();
        let mut arena = Arena::<2048, u8, F, O>::new();

        let ptrs: Vec<*mut u8> = sizes
            .iter()
            .map(|&size| {
                let ptr = arena.alloc(size);
                arena.check_invariants();
                ptr
            })
            .collect();

        // `order` is a permutation of all requests; failed requests show up
        // as null pointers here, exercising the null no-op on the way.
        for &index in order {
            arena.free(ptrs[index]);
            arena.check_invariants();
        }

        assert_eq!(
            arena.blocks().collect::<Vec<_>>(),
            fresh.blocks().collect::<Vec<_>>()
        );
        assert!(arena.data.0 == fresh.data.0, "stale bytes after round trip");
    }

    fn alloc_plan() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        prop::collection::vec(1usize..600, 1..40).prop_flat_map(|sizes| {
            let indices: Vec<usize> = (0..sizes.len()).collect();
            (Just(sizes), Just(indices).prop_shuffle())
        })
    }

    proptest! {
        #[test]
        fn round_trip_restores_a_fresh_arena((sizes, order) in alloc_plan()) {
            let _ = env_logger::try_init();

            exercise::<FirstFit, Lifo>(&sizes, &order);
            exercise::<FirstFit, AddressOrdered>(&sizes, &order);
            exercise::<BestFit, Lifo>(&sizes, &order);
        }
    }
}
