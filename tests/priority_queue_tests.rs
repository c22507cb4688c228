use heap_sssp::data_structures::MinHeap;
use ordered_float::OrderedFloat;

#[test]
fn new_queue_is_empty() {
    let heap: MinHeap<&str, i32> = MinHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
}

#[test]
fn empty_queue_yields_none_without_panicking() {
    let mut heap: MinHeap<&str, i32> = MinHeap::new();
    assert_eq!(heap.peek_value(), None);
    assert_eq!(heap.peek_priority(), None);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
}

#[test]
fn extracts_in_ascending_priority_order() {
    let mut heap = MinHeap::new();
    for priority in [5, 3, 8, 1, 9, 2] {
        heap.push(priority, priority);
    }

    let mut drained = Vec::new();
    while let Some((_, priority)) = heap.pop() {
        drained.push(priority);
    }
    assert_eq!(drained, vec![1, 2, 3, 5, 8, 9]);
    assert!(heap.is_empty());
}

#[test]
fn peek_does_not_remove() {
    let mut heap = MinHeap::new();
    heap.push("b", 7);
    heap.push("a", 2);

    assert_eq!(heap.peek_value(), Some(&"a"));
    assert_eq!(heap.peek_priority(), Some(&2));
    assert_eq!(heap.peek(), Some((&"a", &2)));
    assert_eq!(heap.len(), 2, "peeking must not consume entries");

    assert_eq!(heap.pop(), Some(("a", 2)));
    assert_eq!(heap.pop(), Some(("b", 7)));
}

#[test]
fn single_entry_drains_cleanly() {
    let mut heap = MinHeap::new();
    heap.push("only", 42);
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.pop(), Some(("only", 42)));
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
}

#[test]
fn duplicate_value_keeps_both_entries() {
    // No decrease-key: the same value pushed again at a better priority
    // coexists with the stale entry, and the better one surfaces first
    let mut heap = MinHeap::new();
    heap.push("x", 10);
    heap.push("x", 4);

    assert_eq!(heap.pop(), Some(("x", 4)));
    assert_eq!(heap.pop(), Some(("x", 10)));
    assert_eq!(heap.pop(), None);
}

#[test]
fn equal_priorities_all_surface() {
    let mut heap = MinHeap::new();
    heap.push("a", 1);
    heap.push("b", 1);
    heap.push("c", 1);

    let mut values = Vec::new();
    while let Some((value, priority)) = heap.pop() {
        assert_eq!(priority, 1);
        values.push(value);
    }
    values.sort();
    assert_eq!(values, vec!["a", "b", "c"]);
}

#[test]
fn interleaved_pushes_and_pops() {
    let mut heap = MinHeap::new();
    heap.push("d", 40);
    heap.push("b", 20);
    assert_eq!(heap.pop(), Some(("b", 20)));

    heap.push("a", 10);
    heap.push("c", 30);
    assert_eq!(heap.pop(), Some(("a", 10)));
    assert_eq!(heap.pop(), Some(("c", 30)));
    assert_eq!(heap.pop(), Some(("d", 40)));
    assert!(heap.is_empty());
}

#[test]
fn clear_empties_the_queue() {
    let mut heap = MinHeap::new();
    heap.push(1, 1);
    heap.push(2, 2);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
}

#[test]
fn works_with_float_priorities() {
    let mut heap = MinHeap::new();
    heap.push("far", OrderedFloat(2.5));
    heap.push("near", OrderedFloat(0.5));
    heap.push("mid", OrderedFloat(1.5));

    assert_eq!(heap.pop(), Some(("near", OrderedFloat(0.5))));
    assert_eq!(heap.pop(), Some(("mid", OrderedFloat(1.5))));
    assert_eq!(heap.pop(), Some(("far", OrderedFloat(2.5))));
}

#[test]
fn owned_payloads_are_returned_on_pop() {
    // Payloads need not be Copy
    let mut heap = MinHeap::new();
    heap.push(String::from("second"), 2);
    heap.push(String::from("first"), 1);

    assert_eq!(heap.pop(), Some((String::from("first"), 1)));
    assert_eq!(heap.pop(), Some((String::from("second"), 2)));
}
