extern crate std;

use core::cmp::Ordering;
use std::vec;
use std::vec::Vec;

use hashbrown::HashSet;

use crate::linked_list::forward::{ForwardList, swap};

fn list(values: &[i32]) -> ForwardList<i32> {
    ForwardList::from_values(values)
}

#[test]
fn test_equality() {
    assert_eq!(list(&[1, 2, 3]), list(&[1, 2, 3]));
    assert_ne!(list(&[1, 2, 3]), list(&[1, 2]));
    assert_ne!(list(&[1, 2]), list(&[1, 2, 3]));
    assert_ne!(list(&[1, 2, 3]), list(&[1, 2, 4]));
    assert_eq!(list(&[]), list(&[]));
}

#[test]
fn test_equality_is_an_equivalence() {
    let a = list(&[4, 5]);
    let b = a.clone();
    let c: ForwardList<i32> = [4, 5].into_iter().collect();

    assert!(a == a);
    assert!(a == b && b == a);
    assert!(a == b && b == c && a == c);
}

#[test]
fn test_lexicographic_ordering() {
    assert!(list(&[1, 2]) < list(&[1, 2, 3]));
    assert!(list(&[1, 2, 3]) < list(&[1, 3]));
    assert!(list(&[]) < list(&[1]));

    assert!(list(&[1, 3]) > list(&[1, 2, 3]));
    assert!(list(&[1, 2]) <= list(&[1, 2]));
    assert!(list(&[1, 2]) >= list(&[1, 2]));
    assert!(list(&[2]) >= list(&[1, 9, 9]));
    assert!(!(list(&[1, 2]) < list(&[1, 2])));

    assert_eq!(list(&[1]).cmp(&list(&[1])), Ordering::Equal);
    assert_eq!(list(&[0, 5]).cmp(&list(&[1])), Ordering::Less);
}

#[test]
fn test_partial_ordering_with_nan() {
    let a = ForwardList::from([1.0, f64::NAN]);
    let b = ForwardList::from([1.0, 2.0]);
    assert_eq!(a.partial_cmp(&b), None);
    assert!(!(a < b) && !(a > b));
    assert_ne!(a, a.clone());
}

#[test]
fn test_incomparable_values_make_the_whole_comparison_none() {
    let a = ForwardList::from([f64::NAN, 1.0]);
    let b = ForwardList::from([f64::NAN, 2.0]);
    assert_eq!(a.partial_cmp(&b), None);
    assert!(!(a < b));
    assert!(!(a <= b));
    assert!(!(a >= b));
    assert!(!(a > b));
}

#[test]
fn test_sorting_lists() {
    let mut lists = vec![list(&[2]), list(&[1, 2, 3]), list(&[]), list(&[1, 2])];
    lists.sort();
    let sorted: Vec<Vec<i32>> = lists
        .iter()
        .map(|list| list.iter().copied().collect())
        .collect();
    assert_eq!(sorted, vec![vec![], vec![1, 2], vec![1, 2, 3], vec![2]]);
}

#[test]
fn test_swap_exchanges_contents() {
    let mut a = list(&[1, 2, 3]);
    let mut b = list(&[9]);

    swap(&mut a, &mut b);
    assert_eq!(a, list(&[9]));
    assert_eq!(b, list(&[1, 2, 3]));
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 3);

    a.swap(&mut b);
    assert_eq!(a, list(&[1, 2, 3]));
    assert_eq!(b, list(&[9]));
}

#[test]
fn test_swap_with_empty() {
    let mut a = list(&[1]);
    let mut b = ForwardList::new();
    swap(&mut a, &mut b);
    assert!(a.is_empty());
    assert_eq!(b, list(&[1]));
}

#[test]
fn test_hash_agrees_with_equality() {
    let mut seen = HashSet::new();
    assert!(seen.insert(list(&[1, 2])));
    assert!(!seen.insert(list(&[1, 2])));
    assert!(seen.insert(list(&[1, 2, 3])));
    assert!(seen.insert(list(&[])));
    assert_eq!(seen.len(), 3);
    assert!(seen.contains(&list(&[1, 2, 3])));
}
