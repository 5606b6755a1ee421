//! Demonstration driver: walks a `FixedArray` through creation, insertion,
//! modification, removal and teardown, then gives the linked list and the
//! sorting routines a short tour. Progress goes to the `tracing` subscriber,
//! listings to stdout.

use anyhow::Result;
use dsa_algorithms::sorting;
use dsa_collections::{FixedArray, LinkedList};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    array_walkthrough()?;
    list_walkthrough()?;
    sorting_walkthrough();
    Ok(())
}

fn array_walkthrough() -> Result<()> {
    info!("creating a fixed array with capacity 5");
    let mut arr = FixedArray::with_capacity(5)?;

    arr.insert_last(10)?;
    arr.insert_last(20)?;
    arr.insert_last(30)?;
    arr.insert_at(1, 15)?;
    println!("array after insertions:       {}", arr);

    arr.modify_at(2, 25)?;
    println!("array after setting index 2:  {}", arr);

    let removed = arr.remove_at(1)?;
    info!(removed, "removed index 1");
    println!("array after removing index 1: {}", arr);

    let removed = arr.remove_last()?;
    info!(removed, "removed last value");
    println!("array after removing last:    {}", arr);

    if let Some(index) = arr.find(25) {
        info!(index, "found value 25");
    }

    // the array drops here, releasing its buffer
    Ok(())
}

fn list_walkthrough() -> Result<()> {
    info!("building a linked list");
    let mut list = LinkedList::new();

    list.push_back(10);
    list.push_back(20);
    list.push_back(30);
    println!("list after appends:           {}", list);

    list.push_front(5);
    list.insert_at(2, 15)?;
    println!("list after inserts:           {}", list);
    info!(count = list.len(), "list size");

    if let Some(index) = list.find(20) {
        info!(index, "found value 20");
    }

    list.pop_front()?;
    list.pop_back()?;
    list.remove_at(1)?;
    println!("list after removals:          {}", list);

    list.reverse();
    println!("list reversed:                {}", list);
    if let Some(&middle) = list.middle() {
        info!(middle, "middle element");
    }

    Ok(())
}

fn sorting_walkthrough() {
    let mut values = [4, 2, 7, 1, 6];
    sorting::bubble_sort(&mut values);
    println!("sorted ascending:             {:?}", values);

    sorting::bubble_sort_desc(&mut values);
    println!("sorted descending:            {:?}", values);
}
