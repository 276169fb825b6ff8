//! Conversions between game identifiers and array slots

use anyhow::Result;

/// Fallible conversion from a slot index, e.g. a `SideArray` position
pub trait FromIndex: Sized {
    fn from_index(idx: usize) -> Result<Self>;
}

/// Conversion to a slot index. Implementors must stay in range of the arrays
/// they index, so this cannot fail.
pub trait ToIndex {
    fn to_index(&self) -> usize;
}
