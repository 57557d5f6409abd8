use core::{num::NonZeroIsize, fmt::Debug};
use granite::{ListStorage, MoveFix};
use crate::util::unreachable_debugchecked;

/// A node of a property tree.
///
/// Created by the property tree internally and only publicly exposed so that property tree storages' generic arguments could be specified.
#[derive(Clone, Debug)]
pub struct Node<T, K>
where
    K: Clone + Debug + Eq,
{
    pub(super) value: T,
    pub(super) parent: Option<K>,
    pub(super) properties: Box<[Vec<K>]>,
}

impl<T, K> Node<T, K>
where
    K: Clone + Debug + Eq,
{
    /// Creates a node with the specified number of empty property slots.
    #[inline]
    pub(crate) fn new(value: T, num_properties: usize, parent: Option<K>) -> Self {
        Self {
            value,
            parent,
            properties: (0..num_properties).map(|_| Vec::new()).collect(),
        }
    }
    #[inline(always)]
    pub(super) fn num_properties(&self) -> usize {
        self.properties.len()
    }
    #[inline]
    pub(super) fn is_leaf(&self) -> bool {
        self.properties.iter().all(Vec::is_empty)
    }
}
// Property trees only ever append, so storages never shift nodes and this is never called.
impl<T> MoveFix for Node<T, usize> {
    #[inline]
    unsafe fn fix_shift<S>(storage: &mut S, shifted_from: usize, shifted_by: NonZeroIsize)
    where
        S: ListStorage<Element = Self>,
    {
        let fix_starting_from = if shifted_by.get() > 0 {
            shifted_from + 1 // If an insertion happened, ignore the new element
        } else {
            shifted_from
        };
        if fix_starting_from >= storage.len() {
            return;
        };
        for i in fix_starting_from..storage.len() {
            let old_index = (i as isize - shifted_by.get()) as usize;
            Self::fix_move(storage, old_index, i);
        }
    }

    #[inline]
    unsafe fn fix_move<S>(storage: &mut S, previous_index: usize, current_index: usize)
    where
        S: ListStorage<Element = Self>,
    {
        let children = /*unsafe*/ {
            // SAFETY: index validity is guaranteed for `current_index`.
            storage.get_unchecked(current_index)
        }
        .properties
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>();
        for child in children {
            /*unsafe*/
            {
                // SAFETY: index validity is guaranteed for children.
                storage.get_unchecked_mut(child)
            }
            .parent = Some(current_index);
        }
        let parent_index = if let Some(index) = /*unsafe*/ {
            // SAFETY: as above
            storage.get_unchecked(current_index).parent
        } {
            index
        } else {
            return;
        };
        let parent = storage.get_unchecked_mut(parent_index);
        for entry in parent.properties.iter_mut().flatten() {
            if *entry == previous_index {
                *entry = current_index;
                return;
            }
        }
        /*unsafe*/
        {
            // SAFETY: this mismatch is assumed to never happen as a guarantee
            // of key validity
            unreachable_debugchecked("failed to find node in parent's property slots")
        }
    }
}
