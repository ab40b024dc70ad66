use core::{
	alloc::Layout,
	mem,
	ptr::NonNull
};
use std::alloc::{
	self,
	handle_alloc_error
};

use log::{
	error,
	trace
};

use crate::error::Error;

/// Capacity multiplier applied when a full buffer grows.
const GROWTH_FACTOR: usize = 2;

/// A low-level utility for managing a [`DynArray`](crate::DynArray) buffer.
///
/// This type does not in any way inspect the memory that it manages. When dropped it *will*
/// free its memory, but it *won't* try to drop its contents. It is up to the user of `RawBuf`
/// to handle the actual things *stored* inside of a `RawBuf`.
pub struct RawBuf<T> {
	/// Pointer to the owned allocation.
	ptr: NonNull<T>,

	/// Number of element slots in the allocation.
	cap: usize
}

impl<T> RawBuf<T> {
	/// Maximum number of elements a buffer can hold.
	///
	/// We don't ever allocate `> isize::MAX` byte-size objects, so this is
	/// `isize::MAX` divided by the element size. Zero-sized elements occupy
	/// no storage and are unbounded.
	pub const MAX_CAPACITY: usize = if mem::size_of::<T>() == 0 {
		usize::MAX
	} else {
		isize::MAX as usize / mem::size_of::<T>()
	};

	/// Allocates a buffer of exactly `capacity` element slots.
	///
	/// Zero-sized element types never allocate, and neither does a requested
	/// capacity of zero.
	///
	/// # Panics
	///
	/// Panics if the requested allocation exceeds `isize::MAX` bytes, or
	/// aborts if the allocator refuses the request.
	pub fn with_capacity(capacity: usize) -> Self {
		if mem::size_of::<T>() == 0 || capacity == 0 {
			RawBuf {
				ptr: NonNull::dangling(),
				cap: 0
			}
		} else {
			let layout = match Layout::array::<T>(capacity) {
				Ok(layout) => layout,
				Err(_) => capacity_overflow(),
			};

			let ptr = unsafe { alloc::alloc(layout) };
			let ptr = match NonNull::new(ptr as *mut T) {
				Some(ptr) => ptr,
				None => handle_alloc_error(layout),
			};

			RawBuf {
				ptr,
				cap: capacity
			}
		}
	}

	/// Returns the number of element slots in the buffer.
	///
	/// Zero-sized element types report `usize::MAX` since they occupy no
	/// storage and never require growth.
	#[inline]
	pub fn capacity(&self) -> usize {
		if mem::size_of::<T>() == 0 {
			usize::MAX
		} else {
			self.cap
		}
	}

	/// Returns a raw pointer to the start of the buffer.
	#[inline]
	pub fn ptr(&self) -> *mut T {
		self.ptr.as_ptr()
	}

	/// Doubles the capacity of the buffer, moving the stored elements into
	/// the new allocation and releasing the old one.
	///
	/// Fails with [`Error::CapacityOverflow`] when the doubled capacity
	/// would exceed [`MAX_CAPACITY`](Self::MAX_CAPACITY). On failure the
	/// buffer is left untouched.
	pub fn grow_double(&mut self) -> Result<(), Error> {
		debug_assert_ne!(mem::size_of::<T>(), 0, "zero-sized elements never require growth");

		// Only grow while `cap <= MAX_CAPACITY / 2`, so the doubled
		// capacity stays representable.
		if self.cap > Self::MAX_CAPACITY / 2 {
			error!(
				"refusing to grow: doubling {} slots would exceed the maximum capacity of {}",
				self.cap,
				Self::MAX_CAPACITY
			);
			return Err(Error::CapacityOverflow);
		}

		let new_cap = if self.cap == 0 { 1 } else { self.cap * GROWTH_FACTOR };

		let new_layout = match Layout::array::<T>(new_cap) {
			Ok(layout) => layout,
			Err(_) => return Err(Error::CapacityOverflow),
		};

		let new_ptr = if self.cap == 0 {
			unsafe { alloc::alloc(new_layout) }
		} else {
			// SAFETY: the existing allocation was made with this layout.
			unsafe {
				let old_layout = Layout::from_size_align_unchecked(
					mem::size_of::<T>() * self.cap,
					mem::align_of::<T>()
				);
				alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
			}
		};

		self.ptr = match NonNull::new(new_ptr as *mut T) {
			Some(ptr) => ptr,
			None => handle_alloc_error(new_layout),
		};

		trace!("buffer grown from {} to {} slots", self.cap, new_cap);
		self.cap = new_cap;
		Ok(())
	}
}

impl<T> Drop for RawBuf<T> {
	fn drop(&mut self) {
		if mem::size_of::<T>() != 0 && self.cap != 0 {
			// SAFETY: the allocation was made with this layout, and the
			// contents were already dropped (or moved out) by the owner.
			unsafe {
				let layout = Layout::from_size_align_unchecked(
					mem::size_of::<T>() * self.cap,
					mem::align_of::<T>()
				);
				alloc::dealloc(self.ptr.as_ptr().cast(), layout);
			}
		}
	}
}

// One central function responsible for reporting capacity overflows. This'll
// ensure that the code generation related to these panics is minimal as there's
// only one location which panics rather than a bunch throughout the module.
fn capacity_overflow() -> ! {
	panic!("capacity overflow");
}
