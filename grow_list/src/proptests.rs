use alloc::vec::Vec;

use proptest::prelude::*;

use crate::{ArrayList, IntegerList, List, ListError};

#[derive(Debug, Clone)]
enum Op {
    Add(i32),
    Remove(i32),
    RemoveAt(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-8..8_i32).prop_map(Op::Add),
        2 => (-8..8_i32).prop_map(Op::Remove),
        2 => (0..40_usize).prop_map(Op::RemoveAt),
        1 => Just(Op::Clear),
    ]
}

// Applies `op` to `list` and to a `Vec` model, checking that the outcomes agree.
fn apply<L>(list: &mut L, model: &mut Vec<i32>, capacity: usize, op: &Op) -> Result<(), TestCaseError>
where
    L: List<Item = i32>,
{
    match *op {
        Op::Add(item) => {
            list.add(item);
            model.push(item);
        }
        Op::Remove(item) => {
            let position = model.iter().position(|&element| element == item);
            prop_assert_eq!(list.remove(&item), position.is_some());
            if let Some(position) = position {
                model.remove(position);
            }
        }
        Op::RemoveAt(index) => {
            let result = list.remove_at(index);
            if index >= capacity {
                prop_assert!(result.is_err());
            } else if index < model.len() {
                prop_assert_eq!(result, Ok(true));
                model.remove(index);
            } else {
                prop_assert_eq!(result, Ok(false));
            }
        }
        Op::Clear => {
            list.clear();
            model.clear();
        }
    }
    Ok(())
}

proptest! {
    /// Property: any sequence of operations matches a `Vec` model
    #[test]
    fn array_list_matches_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut list = ArrayList::new();
        let mut model = Vec::new();

        for op in &ops {
            let capacity = list.capacity();
            apply(&mut list, &mut model, capacity, op)?;
            prop_assert_eq!(list.len(), model.len());
            prop_assert!(list.capacity() >= list.len());
        }

        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), model);
    }

    /// Property: the integer list matches the same model
    #[test]
    fn integer_list_matches_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut list = IntegerList::new();
        let mut model = Vec::new();

        for op in &ops {
            let capacity = list.capacity();
            apply(&mut list, &mut model, capacity, op)?;
            prop_assert_eq!(list.len(), model.len());
        }

        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), model);
    }

    /// Property: growth keeps every element in order and the capacity is a doubling of the initial one
    #[test]
    fn growth_keeps_order(initial in 1..8_usize, values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut list = ArrayList::with_capacity(initial).unwrap();
        let mut capacity = initial;

        for &value in &values {
            if list.len() == capacity {
                capacity *= 2;
            }
            list.add(value);
            prop_assert_eq!(list.capacity(), capacity);
        }

        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(list.get(index), Ok(value));
        }
    }

    /// Property: `index_of` is `None` exactly when `contains` is false
    #[test]
    fn index_of_agrees_with_contains(values in prop::collection::vec(-4..4_i32, 0..16), needle in -5..5_i32) {
        let list: ArrayList<_> = values.iter().copied().collect();

        prop_assert_eq!(list.index_of(&needle).is_none(), !list.contains(&needle));
        prop_assert_eq!(list.index_of(&needle), values.iter().position(|&value| value == needle));
    }

    /// Property: a cursor advances exactly `count` times
    #[test]
    fn cursor_advances_count_times(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let list: IntegerList = values.iter().copied().collect();
        let mut cursor = list.cursor();

        for value in &values {
            prop_assert!(cursor.advance());
            prop_assert_eq!(cursor.current(), Ok(value));
        }
        prop_assert!(!cursor.advance());
        prop_assert!(matches!(
            cursor.current(),
            Err(ListError::IndexOutOfRange { index: Some(index), bound }) if index == values.len() && bound == values.len()
        ), "cursor past end must report IndexOutOfRange");
    }
}
