//! Index-addressed storage for tree nodes.

use std::mem;
use std::ops::{Index, IndexMut};

/// A handle to an object stored in a `TypedArena<T>`.
///
/// Handles are plain indices, so structures that need back-references (such as a parent link)
/// can hold them without creating ownership cycles.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle(usize);

enum Slot<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// A growable arena that stores objects of a single type.
///
/// Freed slots are threaded into a free list and reused by later allocations, so a workload that
/// alternates inserts and deletes keeps a bounded footprint. Handles stay valid until the object
/// they point to is freed; a handle to a freed slot may later alias a new object.
///
/// # Examples
///
/// ```
/// use search_trees::arena::TypedArena;
///
/// let mut arena = TypedArena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct TypedArena<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    len: usize,
}

impl<T> TypedArena<T> {
    /// Constructs a new, empty `TypedArena<T>`.
    pub fn new() -> Self {
        TypedArena {
            slots: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Constructs a new, empty `TypedArena<T>` with room for `capacity` objects before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        TypedArena {
            slots: Vec::with_capacity(capacity),
            head: None,
            len: 0,
        }
    }

    /// Stores an object in the arena and returns its handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate("x");
    /// assert_eq!(arena.get(x), Some(&"x"));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                Handle(self.slots.len() - 1)
            },
            Some(index) => {
                match mem::replace(&mut self.slots[index], Slot::Occupied(value)) {
                    Slot::Vacant(next) => self.head = next,
                    Slot::Occupied(_) => panic!("Expected the free list to point at a vacant slot."),
                }
                Handle(index)
            },
        }
    }

    /// Removes an object from the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the handle refers to a slot that was never allocated or is already vacant.
    pub fn free(&mut self, handle: Handle) -> T {
        let Handle(index) = handle;
        if index >= self.slots.len() {
            panic!("Error: attempting to free an invalid slot.");
        }
        match mem::replace(&mut self.slots[index], Slot::Vacant(self.head)) {
            Slot::Occupied(value) => {
                self.head = Some(index);
                self.len -= 1;
                value
            },
            Slot::Vacant(next) => {
                self.slots[index] = Slot::Vacant(next);
                panic!("Error: attempting to free a vacant slot.");
            },
        }
    }

    /// Returns an immutable reference to an object, or `None` if the handle is not live.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object, or `None` if the handle is not live.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object and releases all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for TypedArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle does not refer to a live object.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle does not refer to a live object.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Handle, TypedArena};

    #[test]
    #[should_panic]
    fn test_free_invalid_slot() {
        let mut arena: TypedArena<u32> = TypedArena::new();
        arena.free(Handle(0));
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_slot() {
        let mut arena = TypedArena::new();
        let x = arena.allocate(0);
        arena.free(x);
        arena.free(x);
    }

    #[test]
    fn test_allocate() {
        let mut arena = TypedArena::with_capacity(4);
        assert_eq!(arena.allocate(0), Handle(0));
        assert_eq!(arena.allocate(0), Handle(1));
        assert_eq!(arena.allocate(0), Handle(2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_slots() {
        let mut arena = TypedArena::new();
        let x = arena.allocate(0);
        let y = arena.allocate(1);
        assert_eq!(arena.free(x), 0);
        assert_eq!(arena.free(y), 1);
        assert!(arena.is_empty());

        // most recently freed slot is handed out first
        assert_eq!(arena.allocate(2), y);
        assert_eq!(arena.allocate(3), x);
        assert_eq!(arena.allocate(4), Handle(2));
    }

    #[test]
    fn test_get() {
        let mut arena = TypedArena::new();
        let x = arena.allocate(0);
        assert_eq!(arena.get(x), Some(&0));
        assert_eq!(arena.get(Handle(1)), None);
    }

    #[test]
    fn test_get_vacant_slot() {
        let mut arena = TypedArena::new();
        let x = arena.allocate(0);
        arena.free(x);
        assert_eq!(arena.get(x), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = TypedArena::new();
        let x = arena.allocate(0);
        *arena.get_mut(x).unwrap() = 1;
        assert_eq!(arena[x], 1);
    }

    #[test]
    fn test_clear() {
        let mut arena = TypedArena::new();
        arena.allocate(0);
        arena.allocate(1);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.allocate(2), Handle(0));
    }
}
