use crate::word::{DSIZE, MIN_BLOCK};

/// Rounds `size` up to the next multiple of the double-word size.
#[inline]
pub(crate) fn align_up(size: usize) -> usize {
    (size + DSIZE - 1) & !(DSIZE - 1)
}

/// Returns the total block size needed to serve a request of `request`
/// payload bytes, header and footer included.
///
/// Anything that fits in one double word gets the minimum block: the header
/// and footer take one double word, and the payload must keep room for the
/// two free-list link words it will hold once the block is freed again.
/// Larger requests are rounded up to the alignment granularity plus one
/// double word of tag overhead.
#[inline]
pub(crate) fn align_size(request: usize) -> usize {
    if request > DSIZE {
        align_up(request) + DSIZE
    } else {
        MIN_BLOCK
    }
}
