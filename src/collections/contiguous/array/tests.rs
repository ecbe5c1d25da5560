#![cfg(test)]

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::error::AllocError;
use crate::util::panic::assert_panics;

#[test]
fn test_slots() {
    let mut arr: Array<Option<&str>> = Array::repeat_default(3);
    assert!(!arr.has_value(0), "Default slots should be empty.");

    assert_eq!(arr.set(1, "one"), None);
    assert_eq!(arr.inspect(1), Some(&"one"));
    assert_eq!(
        arr.set(1, "uno"),
        Some("one"),
        "Setting an occupied slot should return the displaced value."
    );
    assert_eq!(arr.take(1), Some("uno"));
    assert!(!arr.has_value(1), "Taken slots should be empty.");
    assert_eq!(arr.take(1), None);

    assert_panics!({
        let arr: Array<Option<u8>> = Array::repeat_default(3);
        arr.inspect(3);
    });
    assert_panics!({
        let mut arr: Array<Option<u8>> = Array::repeat_default(0);
        arr.set(0, 1);
    });
}

#[test]
fn test_capacity_overflow() {
    let result = Array::<u64>::try_new_uninit(usize::MAX);
    assert!(
        matches!(result, Err(AllocError::CapacityOverflow(_))),
        "An impossible layout should be reported rather than panicking."
    );

    assert_panics!({
        Array::<Option<u64>>::repeat_default(usize::MAX);
    });
}

#[test]
fn test_zst_support() {
    let arr = Array::from((0..5).map(|_| ()));
    assert_eq!(arr.size(), 5);
    assert_eq!(arr[4], (), "Indexing a ZST Array should work.");
    assert_eq!(arr.into_iter().count(), 5, "Should iterate over the right number of ZSTs.");
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let arr = Array::from((0..10).map(|i| counter.track(i)));

    drop(arr);

    assert_eq!(counter.get(), 10, "10 elements should have been dropped.");

    let counter = DropCounter::new();
    let mut arr: Array<Option<_>> = Array::repeat_default(4);
    arr.set(0, counter.track(0));
    arr.set(2, counter.track(2));
    arr.set(2, counter.track(3));
    assert_eq!(counter.get(), 1, "Displaced values are returned and dropped by the caller.");

    drop(arr);
    assert_eq!(counter.get(), 3, "Occupied slots should be dropped with the Array.");
}

#[test]
fn test_equality_and_clone() {
    let arr = Array::from(0_usize..5);

    assert_eq!(
        arr,
        Array::from([0, 1, 2, 3, 4].into_iter()),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Array::from([0, 1, 2, 5, 4].into_iter()), Array::from(0..5));
    assert_eq!(arr.clone(), arr);
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");
    assert_eq!(format!("{arr}"), "[0, 1, 2, 3, 4]");
}

#[test]
fn test_iterators() {
    let mut arr = Array::from(0_usize..5);

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*arr, [0_usize, 2, 4, 6, 8]);

    let mut iter = arr.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = DropCounter::new();
    let arr = Array::from((0..10).map(|i| counter.track(i)));
    let mut iter = arr.into_iter();
    drop(iter.next());

    drop(iter);
    assert_eq!(
        counter.get(),
        10,
        "Dropping a partially consumed owned iterator should drop the remaining elements."
    );
}
