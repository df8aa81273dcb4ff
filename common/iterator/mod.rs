/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Lazy pre-order traversal of a tree given its root and a function expanding a node into its children.
///
/// Children are requested only when their parent is yielded. If an expansion fails the error is
/// yielded in place of the node and the iterator is exhausted afterwards.
pub struct TreeIterator<T, E, F> {
    stack: Vec<T>,
    expand: F,
    _error: std::marker::PhantomData<E>,
}

impl<T, E, I, F> TreeIterator<T, E, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<I, E>,
{
    pub fn new(root: T, expand: F) -> Self {
        Self { stack: vec![root], expand, _error: std::marker::PhantomData }
    }
}

impl<T, E, I, F> Iterator for TreeIterator<T, E, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<I, E>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        match (self.expand)(&node) {
            Ok(children) => {
                let start = self.stack.len();
                self.stack.extend(children);
                self.stack[start..].reverse();
                Some(Ok(node))
            }
            Err(error) => {
                self.stack.clear();
                Some(Err(error))
            }
        }
    }
}

/// Lazy walk along a chain of single successors, starting with (and including) the first element.
pub struct ChainIterator<T, E, F> {
    next: Option<T>,
    successor: F,
    _error: std::marker::PhantomData<E>,
}

impl<T, E, F> ChainIterator<T, E, F>
where
    F: FnMut(&T) -> Result<Option<T>, E>,
{
    pub fn new(first: T, successor: F) -> Self {
        Self { next: Some(first), successor, _error: std::marker::PhantomData }
    }
}

impl<T, E, F> Iterator for ChainIterator<T, E, F>
where
    F: FnMut(&T) -> Result<Option<T>, E>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        match (self.successor)(&current) {
            Ok(successor) => {
                self.next = successor;
                Some(Ok(current))
            }
            Err(error) => Some(Err(error)),
        }
    }
}
