use keyed_collections::{Error, PriorityQueue};

/// Fills a queue of the given capacity with `xs`, dropping whatever doesn't fit.
fn fill(capacity: usize, xs: &[i16]) -> PriorityQueue<i16, i16> {
    let mut queue = PriorityQueue::with_capacity(capacity);
    for x in xs {
        let _ = queue.insert(*x, *x);
    }
    queue
}

#[quickcheck]
fn never_exceeds_capacity(capacity: u8, xs: Vec<i16>) -> bool {
    let capacity = usize::from(capacity);
    let mut queue = fill(capacity, &xs);

    let before = queue.len();
    let result = queue.insert(0, 0);
    let accepted = if before == capacity {
        result == Err(Error::Full { capacity }) && queue.len() == before
    } else {
        result == Ok(()) && queue.len() == before + 1
    };

    before == xs.len().min(capacity) && accepted
}

#[quickcheck]
fn drains_in_descending_order(xs: Vec<i16>) -> bool {
    let mut queue = fill(xs.len(), &xs);
    let drained: Vec<_> = std::iter::from_fn(|| queue.poll()).collect();

    let mut sorted = xs;
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    drained == sorted && queue.extract_max() == Err(Error::Empty)
}

#[quickcheck]
fn rekeyed_entries_come_out_in_new_order(xs: Vec<i16>, rekeys: Vec<(usize, i16)>) -> bool {
    let mut queue = fill(xs.len(), &xs);
    if xs.is_empty() {
        return queue.change_key(0, 0).is_err();
    }

    for (position, key) in rekeys {
        queue.change_key(position % xs.len(), key).unwrap();
    }

    let mut keys: Vec<_> = queue.iter().map(|(k, _)| *k).collect();
    keys.sort_unstable_by(|a, b| b.cmp(a));

    let mut drained = Vec::new();
    while let Some((key, _)) = queue.peek() {
        drained.push(*key);
        queue.extract_max().unwrap();
    }
    drained == keys
}

#[test]
fn capacity_three() {
    let mut queue = PriorityQueue::with_capacity(3);

    assert_eq!(queue.insert(10, "x"), Ok(()));
    assert_eq!(queue.insert(20, "y"), Ok(()));
    assert_eq!(queue.insert(15, "z"), Ok(()));
    assert_eq!(queue.insert(5, "w"), Err(Error::Full { capacity: 3 }));
    assert_eq!(queue.len(), 3);

    assert_eq!(queue.extract_max(), Ok("y"));
    assert_eq!(queue.extract_max(), Ok("z"));
    assert_eq!(queue.extract_max(), Ok("x"));
    assert_eq!(queue.extract_max(), Err(Error::Empty));
}
