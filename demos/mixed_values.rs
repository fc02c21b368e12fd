//! Stores strings and integers side by side and discriminates them on the way out.
//!
//! Run with: cargo run --example mixed_values

use sovran_syncmap::{ConcurrentMap, IntegerValue, StringValue, Value, ValueError};

fn describe(map: &ConcurrentMap, key: &str) {
    match map.load(key) {
        Some(Value::String(s)) => println!("{:>8}: string  {:?}", key, s.value()),
        Some(Value::Integer(i)) => println!("{:>8}: integer {}", key, i.value()),
        None => println!("{:>8}: <missing>", key),
    }
}

fn main() -> Result<(), ValueError> {
    env_logger::init();

    let map = ConcurrentMap::new();

    map.store("foo", StringValue::new("bar"));
    map.store("foo2", IntegerValue::new(2));
    map.store("", "the empty key works too");

    for key in ["foo", "foo2", "foo3", ""] {
        describe(&map, key);
    }

    // Replacing a value swaps the whole instance, kind included
    map.store("foo2", "two");
    describe(&map, "foo2");

    match map.load_as::<IntegerValue>("foo2") {
        Ok(Some(i)) => println!("foo2 as integer: {}", i.value()),
        Ok(None) => println!("foo2 is missing"),
        Err(e) => println!("foo2 as integer: {}", e),
    }

    let name = map.load_as::<StringValue>("foo")?;
    println!("foo as string: {:?}", name.map(StringValue::into_inner));

    println!("deleted foo: {}", map.delete("foo"));
    println!("deleted foo again: {}", map.delete("foo"));

    Ok(())
}
