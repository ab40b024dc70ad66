use core::fmt;

/// Error returned by the fallible [`DynArray`](crate::DynArray) operations.
///
/// Bounds and capacity checks always precede any mutation, so an operation
/// that returns an error has left the array untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// An index-taking operation was given an index outside its valid range.
	///
	/// For accesses, replacements and removals the valid range is `0..len`;
	/// for insertions it is `0..=len` (inserting at `len` appends).
	OutOfBounds {
		/// The offending index.
		index: usize,

		/// The array length at the time of the call.
		len: usize
	},

	/// Growing the buffer would exceed the maximum representable capacity.
	CapacityOverflow
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::OutOfBounds { index, len } => {
				write!(f, "index out of bounds: the index is {} but the length is {}", index, len)
			},
			Error::CapacityOverflow => write!(f, "capacity overflow")
		}
	}
}

impl std::error::Error for Error {}
