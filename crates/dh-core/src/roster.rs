//! Growable, order-preserving entity containers.
//!
//! A [`Roster`] backs the player's inventory and each room's enemy and
//! item collections. It is a thin layer over `Vec` that pins down the
//! contracts the game relies on: bounds-checked access and removal that
//! compacts leftward so the survivors keep their relative order.

use serde::{Deserialize, Serialize};

/// An ordered, growable collection of owned entities.
///
/// Indices are stable between mutations: `get(i)` addresses the same
/// element until something before it is removed. Removal shifts the
/// elements after the removed index left by one (never swap-remove).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster<T> {
    slots: Vec<T>,
}

impl<T> Roster<T> {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create an empty roster with room for `capacity` elements before
    /// the first reallocation. Growth beyond that is `Vec`'s amortized
    /// doubling and never loses or reorders elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Append an element at the end.
    pub fn add(&mut self, entity: T) {
        self.slots.push(entity);
    }

    /// Number of elements currently held.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the roster holds nothing.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get a reference to the element at `index`, or `None` if the index
    /// is out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// Get a mutable reference to the element at `index`, or `None` if
    /// the index is out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// Remove and return the element at `index`, or `None` if the index
    /// is out of range. Elements after it shift left by one.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.slots.len() {
            Some(self.slots.remove(index))
        } else {
            None
        }
    }

    /// Iterate over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Roster<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
