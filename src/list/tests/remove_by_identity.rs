use super::*;

#[test]
fn first() {
    let _trace = trace_init();
    let a = entry(5);
    let b = entry(7);
    let c = entry(31);
    let (a_ptr, b_ptr, c_ptr) = (ptr(&a), ptr(&b), ptr(&c));

    let mut list = PolyList::from([a, b, c]);

    let removed = list.remove(a_ptr).expect("a is in the list");
    assert_eq!(removed.val, 5);
    list.assert_valid();
    assert_eq!(list.len(), 2);

    // `a` should be no longer there and can't be removed twice
    assert_eq!(list.remove(a_ptr).unwrap_err(), Error::NotFound);
    assert!(!list.contains(a_ptr));
    list.assert_valid();
    assert_eq!(list.len(), 2);

    assert!(list.remove(b_ptr).is_ok());
    list.assert_valid();
    assert_eq!(list.len(), 1);
    assert_eq!(list.head().map(|e| e.val), Some(31));
    assert_eq!(list.tail().map(|e| e.val), Some(31));

    assert!(list.remove(c_ptr).is_ok());
    list.assert_valid();
    assert!(list.is_empty());

    // removing from an empty list is an error, not a fault.
    assert_eq!(list.remove(c_ptr).unwrap_err(), Error::Empty);
    list.assert_valid();
}

#[test]
fn middle() {
    let _trace = trace_init();
    let a = entry(1);
    let b = entry(2);
    let c = entry(3);
    let b_ptr = ptr(&b);

    let mut list = PolyList::from([a, b, c]);

    let removed = list.remove(b_ptr).expect("b is in the list");
    assert_eq!(NonNull::from(&*removed), b_ptr);
    list.assert_valid();

    assert_eq!(collect_vals(&list), vec![1, 3]);
    assert_eq!(list.len(), 2);
    assert!(list.find(b_ptr).is_none());
}

#[test]
fn last() {
    let _trace = trace_init();
    let a = entry(1);
    let b = entry(2);
    let c = entry(3);
    let c_ptr = ptr(&c);

    let mut list = PolyList::from([a, b, c]);

    assert!(list.remove(c_ptr).is_ok());
    list.assert_valid();
    assert_eq!(list.tail().map(|e| e.val), Some(2));

    // the tail must have been updated, so pushing links from the new tail.
    list.push_tail(entry(4));
    list.assert_valid();
    assert_eq!(collect_vals(&list), vec![1, 2, 4]);
}

#[test]
fn only() {
    let _trace = trace_init();
    let a = entry(1);
    let a_ptr = ptr(&a);
    let mut list = PolyList::with_element(a);

    assert!(list.remove(a_ptr).is_ok());
    list.assert_valid();
    assert!(list.is_empty());
    assert!(list.head().is_none());
    assert!(list.tail().is_none());
}

#[test]
fn absent_from_single_element_list() {
    let _trace = trace_init();
    let outsider = entry(99);
    let mut list = PolyList::with_element(entry(1));

    assert_eq!(list.remove(ptr(&outsider)).unwrap_err(), Error::NotFound);
    list.assert_valid();
    assert_eq!(list.len(), 1);
    assert_eq!(collect_vals(&list), vec![1]);
}

#[test]
fn absent_leaves_list_unchanged() {
    let _trace = trace_init();
    let outsider = entry(99);
    let mut list = list_from_vals(0..4);

    assert_eq!(list.remove(ptr(&outsider)).unwrap_err(), Error::NotFound);
    list.assert_valid();
    assert_eq!(list.len(), 4);
    assert_eq!(collect_vals(&list), vec![0, 1, 2, 3]);
}

#[test]
fn identity_not_value() {
    let _trace = trace_init();
    let first = entry(1);
    let second = entry(1);
    let second_ptr = ptr(&second);
    let mut list = PolyList::from([first, second]);

    // both elements are equal by value, but only the one at this address is
    // removed.
    let removed = list.remove(second_ptr).expect("second is in the list");
    assert_eq!(NonNull::from(&*removed), second_ptr);
    assert_eq!(list.len(), 1);
    assert!(list.find(second_ptr).is_none());
    assert!(list.head().is_some());
}

#[test]
fn find() {
    let _trace = trace_init();
    let a = entry(1);
    let b = entry(2);
    let (a_ptr, b_ptr) = (ptr(&a), ptr(&b));
    let outsider = entry(3);

    let list = PolyList::from([a, b]);

    assert_eq!(list.find(a_ptr).map(|e| e.val), Some(1));
    assert_eq!(list.find(b_ptr).map(|e| e.val), Some(2));
    assert!(list.find(ptr(&outsider)).is_none());

    assert!(PolyList::<Entry>::new().find(a_ptr).is_none());
}

#[test]
fn remove_first_predicate() {
    let _trace = trace_init();
    let mut list = list_from_vals([1, 2, 3, 2]);

    let removed = list.remove_first(|e| e.val == 2).expect("2 is in the list");
    assert_eq!(removed.val, 2);
    list.assert_valid();
    assert_eq!(collect_vals(&list), vec![1, 3, 2]);

    let removed = list.remove_first(|e| e.val == 2).expect("2 is in the list");
    assert_eq!(removed.val, 2);
    list.assert_valid();
    assert_eq!(collect_vals(&list), vec![1, 3]);
    assert_eq!(list.tail().map(|e| e.val), Some(3));

    assert!(list.remove_first(|e| e.val == 2).is_none());
    assert_eq!(list.len(), 2);
}
