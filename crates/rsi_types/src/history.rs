//! Undo/redo of state deletions.

use std::collections::VecDeque;

use log::debug;

use crate::{
	error::RsiError,
	rsi::{Rsi, state::RsiState},
};

/// Default number of deletions remembered.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// LIFO stack with a fixed capacity; pushing onto a full stack drops the oldest entry.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
	items: VecDeque<T>,
	capacity: usize,
}

impl<T> BoundedStack<T> {
	/// Creates an empty stack holding at most `capacity` entries.
	pub fn new(capacity: usize) -> Self {
		Self {
			items: VecDeque::with_capacity(capacity),
			capacity,
		}
	}

	/// Pushes an entry, returning the evicted oldest one if the stack was full.
	pub fn push(&mut self, item: T) -> Option<T> {
		if self.capacity == 0 {
			return Some(item);
		}

		let evicted = if self.items.len() == self.capacity {
			self.items.pop_front()
		} else {
			None
		};
		self.items.push_back(item);
		evicted
	}

	/// Removes the most recent entry.
	pub fn pop(&mut self) -> Option<T> {
		self.items.pop_back()
	}

	/// The most recent entry.
	pub fn peek(&self) -> Option<&T> {
		self.items.back()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if the stack is empty.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Maximum number of entries.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Drops every entry.
	pub fn clear(&mut self) {
		self.items.clear();
	}
}

/// Deleted states awaiting restoration, and restored ones awaiting re-deletion.
///
/// Undo entries own the removed state along with the index it came from;
/// redo entries only need the index it was restored to. A new deletion clears
/// the redo stack.
#[derive(Debug, Clone)]
pub struct DeletionHistory {
	undo: BoundedStack<(usize, RsiState)>,
	redo: BoundedStack<usize>,
}

impl Default for DeletionHistory {
	fn default() -> Self {
		Self::new(DEFAULT_HISTORY_CAPACITY)
	}
}

impl DeletionHistory {
	/// Creates a history remembering up to `capacity` deletions.
	pub fn new(capacity: usize) -> Self {
		Self {
			undo: BoundedStack::new(capacity),
			redo: BoundedStack::new(capacity),
		}
	}

	/// Removes the state at `index` from `rsi` and records it.
	///
	/// # Errors
	///
	/// Returns [`RsiError::StateIndexOutOfRange`] if there is no such state.
	pub fn delete(&mut self, rsi: &mut Rsi, index: usize) -> Result<(), RsiError> {
		let state = rsi.remove_state(index)?;
		debug!("Deleted state \"{}\" at {index}", state.name());

		if let Some((_, evicted)) = self.undo.push((index, state)) {
			debug!("History full, forgetting \"{}\"", evicted.name());
		}
		self.redo.clear();
		Ok(())
	}

	/// Restores the most recently deleted state. Returns the index it was restored to.
	///
	/// The original index is clamped to the current state count.
	pub fn undo(&mut self, rsi: &mut Rsi) -> Option<usize> {
		let (index, state) = self.undo.pop()?;
		let index = index.min(rsi.states().len());

		debug!("Restoring state \"{}\" at {index}", state.name());
		rsi.insert_state(index, state).ok()?;
		self.redo.push(index);
		Some(index)
	}

	/// Deletes the most recently restored state again. Returns its index.
	pub fn redo(&mut self, rsi: &mut Rsi) -> Option<usize> {
		let index = self.redo.pop()?;
		let state = rsi.remove_state(index).ok()?;

		debug!("Re-deleting state \"{}\" at {index}", state.name());
		self.undo.push((index, state));
		Some(index)
	}

	/// Returns true if there is a deletion to undo.
	pub fn can_undo(&self) -> bool {
		!self.undo.is_empty()
	}

	/// Returns true if there is a restoration to redo.
	pub fn can_redo(&self) -> bool {
		!self.redo.is_empty()
	}

	/// Forgets everything, dropping the pixel data of recorded states.
	pub fn clear(&mut self) {
		self.undo.clear();
		self.redo.clear();
	}
}
