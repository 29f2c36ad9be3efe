use grow_list::{ArrayList, Enumerator};

#[cfg_attr(test, test)]
fn main() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let mut list = ArrayList::<i32>::new();
    list.add(1);
    list.add(2);
    list.add(3);

    let mut cursor = list.cursor();
    while cursor.advance() {
        println!("{}", cursor.current().unwrap()); // > 1, 2, 3
    }

    cursor.reset();
    print_all(&mut cursor); // > [1, 2, 3]

    println!("{list:?}"); // > [1, 2, 3]
}

fn print_all<E>(enumerator: &mut E)
where
    E: Enumerator,
    E::Item: Clone + std::fmt::Debug,
{
    let mut items = Vec::new();
    while enumerator.advance() {
        match enumerator.current() {
            Ok(item) => items.push(item.clone()),
            Err(error) => tracing::warn!(%error, "cursor had no element"),
        }
    }
    println!("{items:?}");
}
