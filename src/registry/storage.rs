//! Option value storage: owned, or tied to a caller's variable

/// Where an option keeps its value.
///
/// `Borrowed` aliases a variable owned elsewhere, so parsing writes straight
/// into it. Callers never match on this; they go through [`Storage::get`] and
/// [`Storage::get_mut`].
#[derive(Debug)]
pub enum Storage<'a, T> {
    Owned(T),
    Borrowed(&'a mut T),
}

impl<'a, T> Storage<'a, T> {
    #[inline]
    pub fn get(&self) -> &T {
        match self {
            Storage::Owned(value) => value,
            Storage::Borrowed(value) => value,
        }
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        match self {
            Storage::Owned(value) => value,
            Storage::Borrowed(value) => value,
        }
    }

    pub fn is_borrowed(&self) -> bool {
        matches!(self, Storage::Borrowed(_))
    }
}
