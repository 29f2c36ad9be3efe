use crate::{cursor::Cursor, ArrayList, ListResult};

/// The operations shared by the array lists.
///
/// Searching operations compare with [`PartialEq`], so they are only available when the items implement it.
pub trait List {
    /// The type of the elements.
    type Item;

    /// Gets the number of elements in the list.
    fn count(&self) -> usize;

    /// Appends `item` to the back of the list.
    fn add(&mut self, item: Self::Item);

    /// Gets a reference to the element at `index`.
    ///
    /// # Errors
    /// If `index` is not less than [`count`](Self::count), this will return [`ListError::IndexOutOfRange`](crate::ListError::IndexOutOfRange).
    fn get(&self, index: usize) -> ListResult<&Self::Item>;

    /// Removes the element at `index`, shifting the elements after it to the left.
    ///
    /// Returns `false` if `index` refers to an allocated but unoccupied slot.
    ///
    /// # Errors
    /// If `index` is not less than the capacity, this will return [`ListError::IndexOutOfRange`](crate::ListError::IndexOutOfRange).
    fn remove_at(&mut self, index: usize) -> ListResult<bool>;

    /// Removes every element from the list.
    fn clear(&mut self);

    /// Gets the position of the first element equal to `item`.
    fn index_of(&self, item: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq;

    /// Returns `true` if an element equal to `item` is in the list.
    fn contains(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`.
    ///
    /// Returns `false` if there is no such element.
    fn remove(&mut self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq;

    /// Creates a cursor positioned before the first element.
    fn cursor(&self) -> Cursor<'_, Self> {
        Cursor::new(self)
    }
}

impl<T> List for ArrayList<T> {
    type Item = T;

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn add(&mut self, item: T) {
        Self::add(self, item);
    }

    #[inline]
    fn get(&self, index: usize) -> ListResult<&T> {
        Self::get(self, index)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> ListResult<bool> {
        Self::remove_at(self, index)
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn index_of(&self, item: &T) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        Self::index_of(self, item)
    }

    #[inline]
    fn remove(&mut self, item: &T) -> bool
    where
        Self::Item: PartialEq,
    {
        Self::remove(self, item)
    }
}

#[cfg(test)]
mod test {
    use alloc::vec::Vec;

    use pretty_assertions::assert_eq;

    use crate::{ArrayList, IntegerList, List, ListError};

    // Runs the same sequence against any list of integers.
    fn scenario<L>(list: &mut L) -> Vec<bool>
    where
        L: List<Item = i32>,
    {
        let mut results = Vec::new();
        for item in 1..=5 {
            list.add(item);
        }
        results.push(list.remove_at(0) == Ok(true));
        results.push(list.remove(&5));
        results.push(list.count() == 3);
        results.push(list.remove(&100));
        results.push(list.remove_at(5) == Ok(false));
        results.push(list.contains(&3));
        results.push(list.index_of(&4) == Some(2));
        list.clear();
        results.push(list.count() == 0);
        results
    }

    #[test]
    fn both_lists_agree() {
        let expected = [true, true, true, false, true, true, true, true];

        assert_eq!(scenario(&mut ArrayList::new()), expected);
        assert_eq!(scenario(&mut IntegerList::new()), expected);
    }

    #[test]
    fn get_through_trait() {
        fn first<L: List>(list: &L) -> Option<&L::Item> {
            list.get(0).ok()
        }

        let mut list = ArrayList::new();
        assert_eq!(first(&list), None);
        List::add(&mut list, "a");
        assert_eq!(first(&list), Some(&"a"));
        assert_eq!(
            List::get(&list, 1),
            Err(ListError::IndexOutOfRange { index: Some(1), bound: 1 })
        );
    }

    #[test]
    fn trait_search_matches_inherent() {
        fn search<L>(list: &L, item: &L::Item) -> (Option<usize>, bool)
        where
            L: List,
            L::Item: PartialEq,
        {
            (list.index_of(item), list.contains(item))
        }

        let values = [3, 1, 4, 1, 5];
        let array: ArrayList<i32> = values.into_iter().collect();
        let integers: IntegerList = values.into_iter().collect();

        for item in 0..7 {
            let expected = (array.index_of(&item), array.contains(&item));
            assert_eq!(search(&array, &item), expected);
            assert_eq!(search(&integers, &item), expected);
            assert_eq!(
                search(&integers, &item),
                (integers.index_of(item), integers.contains(item))
            );
        }
    }

    #[test]
    fn trait_remove_matches_inherent() {
        let mut array: ArrayList<i32> = [3, 1, 4, 1].into_iter().collect();
        let mut integers: IntegerList = [3, 1, 4, 1].into_iter().collect();

        assert!(List::remove(&mut array, &1));
        assert!(List::remove(&mut integers, &1));
        assert_eq!(array.index_of(&1), Some(2));
        assert_eq!(integers.index_of(1), Some(2));

        assert!(!List::remove(&mut array, &9));
        assert!(!List::remove(&mut integers, &9));
        assert_eq!(array.len(), 3);
        assert_eq!(integers.len(), 3);
    }
}
