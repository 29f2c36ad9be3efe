use grow_list::IntegerList;

#[cfg_attr(test, test)]
fn main() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .try_init();

    let mut list = IntegerList::new();
    list.add(1); // [1]
    list.add(2); // [1, 2]
    list.add(3); // [1, 2, 3]
    list.add(4); // [1, 2, 3, 4]
    list.add(5); // [1, 2, 3, 4, 5]
    list.remove_at(0).unwrap(); // [2, 3, 4, 5]
    list.remove(5); // [2, 3, 4]
    println!("{}", list.len()); // > 3
    println!("{}", list.remove(100)); // > false
    println!("{}", list.remove_at(5).unwrap()); // > false
    list.clear(); // []
    println!("{}", list.len()); // > 0

    assert!(list.is_empty());
}
