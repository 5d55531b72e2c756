//! A singly-linked list of owned, polymorphic elements.
//!
//! See the [`PolyList`] type for details.
use crate::{
    family::{Family, Variant},
    util::FmtOption,
    Error,
};
use alloc::{boxed::Box, vec::Vec};
use core::{
    fmt,
    iter::{FromIterator, FusedIterator},
    marker::PhantomData,
    mem,
    ops::{Index, IndexMut},
    ptr::NonNull,
};

/// A singly-linked list of owned, polymorphic elements, searchable by type.
///
/// A `PolyList<T>` stores boxed elements of a base type `T`, which is usually
/// either an enum defined with the [`family!`] macro or a trait object. Each
/// element lives in its own heap allocation, so its address is stable for as
/// long as it is in the list, and elements may be located and removed by
/// *identity* (their address) as well as by *type*.
///
/// The list supports:
///
/// - *O*(1) insertion at either end, using [`push_head`] and [`push_tail`],
/// - *O*(1) removal from the head with [`pop_head`], and *O*(*n*) removal from
///   the tail with [`pop_tail`],
/// - *O*(*n*) removal by identity, by type, or by predicate, using
///   [`remove`], [`remove_by_type`], and [`remove_first`],
/// - type-directed lookup with [`find_by_type`], when `T` implements
///   [`Family`],
/// - traversal with [`iter`], [`iter_mut`], [`for_each`], and
///   [`for_each_with`].
///
/// Indexed access is provided by [`get`] and the [`Index`] operator, but it is
/// *O*(*n*) in the index; prefer iterating over the list to visiting each
/// index in turn.
///
/// # Ownership
///
/// A `PolyList` exclusively owns its elements. Pushing an element moves its
/// [`Box`] into the list; removing an element returns the `Box` to the
/// caller. Dropping a `PolyList` drops every element still in the list, in
/// order from the tail to the head.
///
/// # Examples
///
/// ```
/// use polylist::{family, PolyList};
///
/// #[derive(Debug, PartialEq)]
/// pub struct Position { x: i32, y: i32 }
///
/// #[derive(Debug, PartialEq)]
/// pub struct Health(u32);
///
/// family! {
///     #[derive(Debug)]
///     pub enum Component: ComponentKind {
///         Position(Position),
///         Health(Health),
///     }
/// }
///
/// let mut components: PolyList<Component> = PolyList::new();
/// components.push_tail(Position { x: 0, y: 0 }.into());
/// components.push_tail(Health(100).into());
/// assert_eq!(components.len(), 2);
///
/// // Look up a component by its type.
/// if let Some(health) = components.find_by_type_mut::<Health>() {
///     health.0 -= 10;
/// }
/// assert_eq!(components.find_by_type::<Health>(), Some(&Health(90)));
///
/// // Remove a component by its type.
/// let removed = components.remove_by_type::<Position>();
/// assert!(removed.is_some());
/// assert_eq!(components.find_by_type::<Position>(), None);
/// assert_eq!(components.len(), 1);
/// ```
///
/// [`family!`]: crate::family!
/// [`push_head`]: Self::push_head
/// [`push_tail`]: Self::push_tail
/// [`pop_head`]: Self::pop_head
/// [`pop_tail`]: Self::pop_tail
/// [`remove`]: Self::remove
/// [`remove_by_type`]: Self::remove_by_type
/// [`remove_first`]: Self::remove_first
/// [`find_by_type`]: Self::find_by_type
/// [`iter`]: Self::iter
/// [`iter_mut`]: Self::iter_mut
/// [`for_each`]: Self::for_each
/// [`for_each_with`]: Self::for_each_with
/// [`get`]: Self::get
pub struct PolyList<T: ?Sized> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

/// Iterates over the elements in a [`PolyList`] by reference.
pub struct Iter<'a, T: ?Sized> {
    curr: Link<T>,
    len: usize,
    _list: PhantomData<&'a Node<T>>,
}

/// Iterates over the elements in a [`PolyList`] by mutable reference.
pub struct IterMut<'a, T: ?Sized> {
    curr: Link<T>,
    len: usize,
    _list: PhantomData<&'a mut Node<T>>,
}

/// An owning iterator over the elements in a [`PolyList`], from head to tail.
pub struct IntoIter<T: ?Sized> {
    list: PolyList<T>,
}

struct Node<T: ?Sized> {
    elem: Box<T>,
    next: Link<T>,
}

type Link<T> = Option<NonNull<Node<T>>>;

// ==== impl PolyList ====

impl<T: ?Sized> PolyList<T> {
    /// Returns a new empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Returns a new list containing a single element.
    #[must_use]
    pub fn with_element(elem: Box<T>) -> Self {
        let mut list = Self::new();
        list.push_tail(elem);
        list
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if this list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        if self.head.is_none() {
            debug_assert!(
                self.tail.is_none(),
                "inconsistent state: a list had a tail but no head!"
            );
            debug_assert_eq!(
                self.len, 0,
                "inconsistent state: a list had no head but a non-zero length!"
            );
            return true;
        }

        false
    }

    /// Asserts as many of the linked list's invariants as possible.
    ///
    /// # Panics
    ///
    /// If the list's head, tail, and length are inconsistent, or if the
    /// list contains a cycle.
    #[track_caller]
    pub fn assert_valid(&self) {
        let head = match self.head {
            Some(head) => head,
            None => {
                assert!(
                    self.tail.is_none(),
                    "if the linked list's head is null, the tail must also be null"
                );
                assert_eq!(
                    self.len, 0,
                    "if the linked list's head is null, its length must be 0"
                );
                return;
            }
        };

        let tail = self
            .tail
            .expect("if the linked list has a head, it must also have a tail");

        if head == tail {
            assert_eq!(
                unsafe { head.as_ref() }.next,
                None,
                "if the linked list has only one node, it must not be linked"
            );
        }

        // The walk is bounded by `len`, so that a cycle is reported rather
        // than looping forever.
        let mut curr = head;
        let mut steps = 0;
        while let Some(next) = unsafe { curr.as_ref() }.next {
            steps += 1;
            assert!(
                steps < self.len,
                "more than {} nodes are reachable from the head of the list; \
                 the list may contain a cycle",
                self.len,
            );
            curr = next;
        }

        assert_eq!(
            curr, tail,
            "the last node reachable from the head must be the tail"
        );
        assert_eq!(
            steps + 1,
            self.len,
            "the number of nodes reachable from the head must equal the list's length"
        );
    }

    /// Appends an element to the tail of the list.
    ///
    /// This is an *O*(1) operation.
    pub fn push_tail(&mut self, elem: Box<T>) {
        let node = Node::into_link(elem);
        test_trace!(?node, ?self.tail, len = self.len, "PolyList::push_tail");

        match self.tail {
            Some(mut tail) => unsafe {
                // Safety: we have exclusive access to the list, and therefore
                // to its nodes.
                debug_assert!(tail.as_ref().next.is_none());
                tail.as_mut().next = Some(node);
            },
            None => {
                debug_assert!(self.head.is_none());
                self.head = Some(node);
            }
        }

        self.tail = Some(node);
        self.len += 1;
    }

    /// Prepends an element to the head of the list.
    ///
    /// This is an *O*(1) operation.
    pub fn push_head(&mut self, elem: Box<T>) {
        let mut node = Node::into_link(elem);
        test_trace!(?node, ?self.head, len = self.len, "PolyList::push_head");

        unsafe {
            // Safety: the node was just allocated, and nothing else refers to
            // it yet.
            node.as_mut().next = self.head;
        }

        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    /// Removes the element at the head of the list and returns it, or `None`
    /// if the list is empty.
    ///
    /// This is an *O*(1) operation.
    pub fn pop_head(&mut self) -> Option<Box<T>> {
        let head = self.head?;
        test_trace!(?head, len = self.len, "PolyList::pop_head");
        // Safety: the head is a node in this list, and it has no predecessor.
        Some(unsafe { self.unlink(None, head) })
    }

    /// Removes the element at the tail of the list and returns it, or `None`
    /// if the list is empty.
    ///
    /// Because the list is singly-linked, finding the new tail requires
    /// walking the list from the head, so this is an *O*(*n*) operation.
    pub fn pop_tail(&mut self) -> Option<Box<T>> {
        let tail = self.tail?;
        let prev = self.second_to_last();
        test_trace!(?tail, ?prev, len = self.len, "PolyList::pop_tail");
        // Safety: `prev` is the node immediately preceding the tail, or `None`
        // if the tail is also the head.
        Some(unsafe { self.unlink(prev, tail) })
    }

    /// Removes the element whose address is `elem` from the list, returning
    /// ownership of it.
    ///
    /// Elements are compared by identity, not by value: only the element
    /// stored at exactly this address is removed. A pointer to an element can
    /// be obtained before it is pushed (`NonNull::from(&*boxed)`) or from a
    /// reference returned by one of the list's lookup methods. Zero-sized
    /// elements are not allocated and may share an address, in which case the
    /// first of them is removed.
    ///
    /// This is an *O*(*n*) operation.
    ///
    /// # Errors
    ///
    /// - [`Error::Empty`] if the list is empty.
    /// - [`Error::NotFound`] if no element in the list is stored at `elem`.
    ///   The list is not modified.
    pub fn remove(&mut self, elem: NonNull<T>) -> Result<Box<T>, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        let addr = elem.cast::<()>();
        self.remove_first(|e| addr_of(e) == addr)
            .ok_or(Error::NotFound)
    }

    /// Removes the first element for which `predicate` returns `true`,
    /// returning ownership of it, or `None` if no element matches.
    ///
    /// This is an *O*(*n*) operation.
    pub fn remove_first(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Option<Box<T>> {
        let mut prev: Link<T> = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            // Safety: we have exclusive access to the list, and `node` is one
            // of its nodes.
            let node_ref = unsafe { node.as_ref() };
            if predicate(&*node_ref.elem) {
                test_trace!(?node, ?prev, len = self.len, "PolyList::remove_first");
                // Safety: `prev` is the predecessor of `node`, as we just
                // walked from it.
                return Some(unsafe { self.unlink(prev, node) });
            }

            prev = Some(node);
            curr = node_ref.next;
        }

        None
    }

    /// Returns the element whose address is `elem`, or `None` if it is not in
    /// this list.
    ///
    /// This is an *O*(*n*) operation.
    #[must_use]
    pub fn find(&self, elem: NonNull<T>) -> Option<&T> {
        let addr = elem.cast::<()>();
        self.iter().find(|e| addr_of(*e) == addr)
    }

    /// Returns `true` if the element whose address is `elem` is in this list.
    #[must_use]
    pub fn contains(&self, elem: NonNull<T>) -> bool {
        self.find(elem).is_some()
    }

    /// Returns a reference to the element at the head of the list, or `None`
    /// if it is empty.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        // Safety: nodes are valid for as long as the list is borrowed.
        self.head.map(|node| unsafe { &*(*node.as_ptr()).elem })
    }

    /// Returns a mutable reference to the element at the head of the list, or
    /// `None` if it is empty.
    #[must_use]
    pub fn head_mut(&mut self) -> Option<&mut T> {
        // Safety: nodes are valid for as long as the list is borrowed.
        self.head.map(|node| unsafe { &mut *(*node.as_ptr()).elem })
    }

    /// Returns a reference to the element at the tail of the list, or `None`
    /// if it is empty.
    #[must_use]
    pub fn tail(&self) -> Option<&T> {
        // Safety: nodes are valid for as long as the list is borrowed.
        self.tail.map(|node| unsafe { &*(*node.as_ptr()).elem })
    }

    /// Returns a mutable reference to the element at the tail of the list, or
    /// `None` if it is empty.
    #[must_use]
    pub fn tail_mut(&mut self) -> Option<&mut T> {
        // Safety: nodes are valid for as long as the list is borrowed.
        self.tail.map(|node| unsafe { &mut *(*node.as_ptr()).elem })
    }

    /// Returns a reference to the element at `index`, counting from the head,
    /// or `None` if `index` is out of bounds.
    ///
    /// This walks the list from the head, so it is *O*(*n*) in `index`. When
    /// visiting every element, use [`iter`](Self::iter) instead.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns a mutable reference to the element at `index`, counting from
    /// the head, or `None` if `index` is out of bounds.
    ///
    /// This walks the list from the head, so it is *O*(*n*) in `index`. When
    /// visiting every element, use [`iter_mut`](Self::iter_mut) instead.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    /// Calls `f` with each element in the list, from head to tail.
    ///
    /// If the list is empty, `f` is never called.
    pub fn for_each(&self, mut f: impl FnMut(&T)) {
        for elem in self.iter() {
            f(elem);
        }
    }

    /// Calls `f` with `receiver` and each element in the list, from head to
    /// tail.
    ///
    /// This allows a method on the receiver's type to be used directly as the
    /// callback:
    ///
    /// ```
    /// use polylist::PolyList;
    ///
    /// #[derive(Default)]
    /// struct Total(u32);
    ///
    /// impl Total {
    ///     fn add(&mut self, value: &u32) {
    ///         self.0 += *value;
    ///     }
    /// }
    ///
    /// let list: PolyList<u32> = vec![Box::new(1u32), Box::new(2), Box::new(3)].into();
    /// let mut total = Total::default();
    /// list.for_each_with(&mut total, Total::add);
    /// assert_eq!(total.0, 6);
    /// ```
    pub fn for_each_with<C: ?Sized>(&self, receiver: &mut C, mut f: impl FnMut(&mut C, &T)) {
        for elem in self.iter() {
            f(receiver, elem);
        }
    }

    /// Returns an iterator over the elements in this list, by reference, from
    /// head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            curr: self.head,
            len: self.len,
            _list: PhantomData,
        }
    }

    /// Returns an iterator over the elements in this list, by mutable
    /// reference, from head to tail.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            curr: self.head,
            len: self.len,
            _list: PhantomData,
        }
    }

    /// Removes and drops every element in the list.
    ///
    /// Elements are dropped in order from the tail to the head.
    pub fn clear(&mut self) {
        trace!(len = self.len, ?self.head, "PolyList::clear");
        self.len = 0;
        self.tail = None;
        let mut curr = self.head.take();

        // Reverse the chain in place, so that it can be freed from the old
        // tail without recursing.
        let mut reversed: Link<T> = None;
        while let Some(mut node) = curr {
            unsafe {
                // Safety: the nodes were detached from the list above, and we
                // are the only owner of them.
                curr = mem::replace(&mut node.as_mut().next, reversed);
            }
            reversed = Some(node);
        }

        while let Some(node) = reversed {
            // Safety: every node was allocated by `Node::into_link`, and is
            // freed exactly once here.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            reversed = node.next;
            drop(node);
        }
    }

    /// Returns the node immediately preceding the tail, or `None` if the list
    /// has fewer than two nodes.
    fn second_to_last(&self) -> Link<T> {
        let mut curr = self.head?;
        loop {
            // Safety: every node reachable from the head is valid.
            let next = unsafe { curr.as_ref() }.next?;
            if unsafe { next.as_ref() }.next.is_none() {
                return Some(curr);
            }
            curr = next;
        }
    }

    /// Unlinks `node` from the list, frees it, and returns its element.
    ///
    /// # Safety
    ///
    /// `node` must be a node in this list, and `prev` must be the node
    /// immediately preceding it (or `None` if `node` is the head).
    unsafe fn unlink(&mut self, prev: Link<T>, node: NonNull<Node<T>>) -> Box<T> {
        debug_assert_ne!(self.len, 0, "cannot unlink a node from an empty list");
        let Node { elem, next } = *Box::from_raw(node.as_ptr());

        match prev {
            Some(mut prev) => {
                debug_assert_eq!(prev.as_ref().next, Some(node));
                prev.as_mut().next = next;
            }
            None => {
                debug_assert_eq!(self.head, Some(node));
                self.head = next;
            }
        }

        if self.tail == Some(node) {
            debug_assert!(next.is_none(), "the tail node must not have a next link");
            self.tail = prev;
        }

        self.len -= 1;
        elem
    }
}

impl<T: Family + ?Sized> PolyList<T> {
    /// Returns a reference to the first element (from the head) which is a
    /// `D`, or `None` if no element is a `D`.
    ///
    /// This is an *O*(*n*) operation.
    #[must_use]
    pub fn find_by_type<D>(&self) -> Option<&D>
    where
        D: Variant<T> + ?Sized,
    {
        self.iter()
            .find_map(|elem| if D::is(elem) { D::downcast_ref(elem) } else { None })
    }

    /// Returns a mutable reference to the first element (from the head) which
    /// is a `D`, or `None` if no element is a `D`.
    ///
    /// This is an *O*(*n*) operation.
    #[must_use]
    pub fn find_by_type_mut<D>(&mut self) -> Option<&mut D>
    where
        D: Variant<T> + ?Sized,
    {
        self.iter_mut()
            .find_map(|elem| if D::is(elem) { D::downcast_mut(elem) } else { None })
    }

    /// Returns a reference to the first element which is a `D`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element in the list is a `D`.
    pub fn try_get<D>(&self) -> Result<&D, Error>
    where
        D: Variant<T> + ?Sized,
    {
        self.find_by_type::<D>().ok_or(Error::NotFound)
    }

    /// Returns `true` if any element in the list is a `D`.
    #[must_use]
    pub fn contains_type<D>(&self) -> bool
    where
        D: Variant<T> + ?Sized,
    {
        self.find_by_type::<D>().is_some()
    }

    /// Removes the first element (from the head) which is a `D`, returning
    /// ownership of it, or `None` if no element is a `D`.
    ///
    /// This is an *O*(*n*) operation.
    pub fn remove_by_type<D>(&mut self) -> Option<Box<T>>
    where
        D: Variant<T> + ?Sized,
    {
        self.remove_first(|elem| D::is(elem) && D::downcast_ref(elem).is_some())
    }
}

impl<T: ?Sized> Drop for PolyList<T> {
    fn drop(&mut self) {
        // The list owns any elements that are still in it; drop them before
        // the list itself.
        self.clear();
    }
}

impl<T: ?Sized> Default for PolyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for PolyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyList")
            .field("head", &FmtOption::new(&self.head))
            .field("tail", &FmtOption::new(&self.tail))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: ?Sized> Index<usize> for PolyList<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let len = self.len;
        match self.get(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T: ?Sized> IndexMut<usize> for PolyList<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T: ?Sized> Extend<Box<T>> for PolyList<T> {
    fn extend<I: IntoIterator<Item = Box<T>>>(&mut self, iter: I) {
        for elem in iter {
            self.push_tail(elem);
        }
    }
}

impl<T: ?Sized> FromIterator<Box<T>> for PolyList<T> {
    fn from_iter<I: IntoIterator<Item = Box<T>>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: ?Sized> From<Vec<Box<T>>> for PolyList<T> {
    fn from(elems: Vec<Box<T>>) -> Self {
        elems.into_iter().collect()
    }
}

impl<T: ?Sized, const N: usize> From<[Box<T>; N]> for PolyList<T> {
    fn from(elems: [Box<T>; N]) -> Self {
        IntoIterator::into_iter(elems).collect()
    }
}

impl<T: ?Sized> IntoIterator for PolyList<T> {
    type Item = Box<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a PolyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a mut PolyList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// # Safety
///
/// A `PolyList` is `Send` if `T` is `Send`, because moving it across threads
/// also implicitly moves every `T` in the list.
unsafe impl<T: ?Sized + Send> Send for PolyList<T> {}

/// # Safety
///
/// Sharing a `PolyList` only permits shared access to its elements.
unsafe impl<T: ?Sized + Sync> Sync for PolyList<T> {}

// ==== impl Node ====

impl<T: ?Sized> Node<T> {
    /// Allocates a new, unlinked node owning `elem`.
    fn into_link(elem: Box<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { elem, next: None })))
    }
}

/// Returns the address of an element, discarding any pointer metadata.
#[inline]
fn addr_of<T: ?Sized>(elem: &T) -> NonNull<()> {
    NonNull::from(elem).cast()
}

// ==== impl Iter ====

impl<'a, T: ?Sized> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.curr?;
        // Safety: the list is borrowed for `'a`, so its nodes cannot be freed
        // or mutated while this iterator exists.
        let node = unsafe { &*node.as_ptr() };
        self.curr = node.next;
        self.len -= 1;
        Some(&*node.elem)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T: ?Sized> ExactSizeIterator for Iter<'_, T> {}
impl<T: ?Sized> FusedIterator for Iter<'_, T> {}

impl<T: ?Sized> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            curr: self.curr,
            len: self.len,
            _list: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("curr", &FmtOption::new(&self.curr))
            .field("len", &self.len)
            .finish()
    }
}

unsafe impl<T: ?Sized + Sync> Send for Iter<'_, T> {}
unsafe impl<T: ?Sized + Sync> Sync for Iter<'_, T> {}

// ==== impl IterMut ====

impl<'a, T: ?Sized> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let node = self.curr?;
        // Safety: the list is mutably borrowed for `'a`, and each node is
        // yielded at most once, so the returned references never alias.
        let node = unsafe { &mut *node.as_ptr() };
        self.curr = node.next;
        self.len -= 1;
        Some(&mut *node.elem)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T: ?Sized> ExactSizeIterator for IterMut<'_, T> {}
impl<T: ?Sized> FusedIterator for IterMut<'_, T> {}

impl<T: ?Sized> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("curr", &FmtOption::new(&self.curr))
            .field("len", &self.len)
            .finish()
    }
}

unsafe impl<T: ?Sized + Send> Send for IterMut<'_, T> {}
unsafe impl<T: ?Sized + Sync> Sync for IterMut<'_, T> {}

// ==== impl IntoIter ====

impl<T: ?Sized> Iterator for IntoIter<T> {
    type Item = Box<T>;

    #[inline]
    fn next(&mut self) -> Option<Box<T>> {
        self.list.pop_head()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T: ?Sized> ExactSizeIterator for IntoIter<T> {}
impl<T: ?Sized> FusedIterator for IntoIter<T> {}

impl<T: ?Sized> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("list", &self.list).finish()
    }
}
