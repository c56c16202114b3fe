use keyed_collections::{Error, Order, OrderedMap};

use std::collections::HashSet;

fn build(xs: &[i8]) -> OrderedMap<i8, i8> {
    xs.iter().map(|x| (*x, *x)).collect()
}

#[quickcheck]
fn in_order_keys_are_sorted(xs: Vec<i8>) -> bool {
    let map = build(&xs);
    let keys: Vec<_> = map.traverse(Order::InOrder).map(|(k, _)| *k).collect();

    let mut sorted = xs;
    sorted.sort_unstable();
    keys == sorted
}

#[quickcheck]
fn every_order_visits_every_entry(xs: Vec<i8>) -> bool {
    let map = build(&xs);
    [Order::PreOrder, Order::InOrder, Order::PostOrder]
        .iter()
        .all(|order| map.traverse(*order).count() == xs.len())
}

#[quickcheck]
fn pre_order_starts_at_first_insert(xs: Vec<i8>) -> bool {
    let map = build(&xs);
    map.traverse(Order::PreOrder).next().map(|(k, _)| k) == xs.first()
}

#[quickcheck]
fn len_counts_shadows(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut map = build(&xs);
    let removed = deletes.iter().filter(|x| map.remove(x).is_ok()).count();

    map.len() == xs.len() - removed && map.iter().count() == map.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let map = build(&xs);
    xs.iter().all(|x| map.get(x) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let map = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| map.get(x) == Err(Error::NotFound))
}

#[quickcheck]
fn min_and_max_match_sorted_keys(xs: Vec<i8>) -> bool {
    let map = build(&xs);
    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => map.min() == Ok(min) && map.max() == Ok(max),
        _ => map.min() == Err(Error::Empty) && map.max() == Err(Error::Empty),
    }
}

#[test]
fn remove_root_of_sample_tree() {
    let mut map = OrderedMap::new();
    for key in [5, 3, 8, 1, 4] {
        map.insert(key, key * 100);
    }

    assert_eq!(map.remove(&5), Ok(500));
    assert_eq!(map.traverse(Order::PreOrder).next(), Some((&4, &400)));
    assert_eq!(map.get(&3), Ok(&300));
    assert_eq!(map.get(&4), Ok(&400));
    assert_eq!(map.get(&8), Ok(&800));
}

#[test]
fn empty_map() {
    let mut map: OrderedMap<i32, ()> = OrderedMap::new();

    assert_eq!(map.get(&1), Err(Error::NotFound));
    assert_eq!(map.min(), Err(Error::Empty));
    assert_eq!(map.remove(&1), Err(Error::Empty));
}
