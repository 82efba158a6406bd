#![cfg(feature = "alloc")]

use std::rc::Rc;

use flex_vector::{
    alloc::Global,
    capacity::{Grow, GrowDoubling, GrowExact},
    vector, StorageError, Vector, VectorError,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rstest::rstest;

const SLICE: &[i32] = &[1, 2, 3, 4, 5];

fn filled<G: Grow>(mut v: Vector<i32, Global, G>) -> Vector<i32, Global, G> {
    v.extend_from_slice(SLICE);
    v
}

#[test]
fn vector_basic_scenario() {
    let mut v = Vector::<i32>::new();
    v.push_back(1);
    v.push_back(2);
    v.push_back(3);
    assert_eq!(v.len(), 3);
    assert_eq!(v.at(0), Some(&1));
    assert_eq!(v.at(2), Some(&3));
    v.insert_at(1, 99).unwrap();
    assert_eq!(v, [1, 99, 2, 3]);
    assert_eq!(v.erase_at(0).unwrap(), 1);
    assert_eq!(v, [99, 2, 3]);
    v.erase_index_range(1, 3).unwrap();
    assert_eq!(v, [99]);
    assert_eq!(v.pop_back(), Some(99));
    assert_eq!(v.len(), 0);
    assert!(v.is_empty());
}

#[test]
fn vector_check_capacity_growth() {
    let mut res = [0usize; 10];
    let mut vec = Vector::<usize>::new();
    for cap in res.iter_mut() {
        vec.push_back(1);
        *cap = vec.capacity();
    }
    assert_eq!(res, [4, 4, 4, 4, 8, 8, 8, 8, 16, 16]);
}

#[test]
fn vector_check_exact_growth() {
    let mut vec = Vector::<usize, Global, GrowExact>::with_capacity(2);
    assert_eq!(vec.capacity(), 2);
    for i in 0..5 {
        vec.push_back(i);
    }
    assert_eq!(vec.capacity(), 5);
}

#[rstest]
#[case::doubling(Vector::<i32>::new())]
#[case::exact(Vector::<i32, Global, GrowExact>::new())]
#[case::presized(Vector::<i32, Global, GrowDoubling>::with_capacity(20))]
fn vector_push_pop<G: Grow>(#[case] v: Vector<i32, Global, G>) {
    let mut v = v;
    for (idx, item) in SLICE.iter().enumerate() {
        v.push_back(*item);
        assert_eq!(v.len(), idx + 1);
    }
    assert_eq!(v, SLICE);
    let cap = v.capacity();
    v.push_back(6);
    assert_eq!(v.pop_back(), Some(6));
    assert_eq!(v, SLICE);
    while v.pop_back().is_some() {}
    assert_eq!(v.pop_back(), None);
    assert_eq!(v.len(), 0);
    assert!(v.capacity() >= cap);
}

#[rstest]
#[case::front(0)]
#[case::middle(2)]
#[case::back(4)]
#[case::append(5)]
fn vector_insert_erase_inverse(#[case] index: usize) {
    let mut v = filled(Vector::<i32>::new());
    v.insert_at(index, 99).unwrap();
    assert_eq!(v.len(), SLICE.len() + 1);
    assert_eq!(v.at(index), Some(&99));
    assert_eq!(&v[..index], &SLICE[..index]);
    assert_eq!(&v[index + 1..], &SLICE[index..]);
    assert_eq!(v.erase_at(index).unwrap(), 99);
    assert_eq!(v, SLICE);
}

#[test]
fn vector_insert_out_of_range() {
    let mut v = filled(Vector::<i32>::new());
    let err = v.insert_at(6, 99).unwrap_err();
    assert_eq!(
        err.error(),
        &VectorError::OutOfRange {
            index: 6,
            length: 5
        }
    );
    assert_eq!(err.into_value(), 99);
    assert_eq!(v, SLICE);
}

#[test]
fn vector_erase_out_of_range() {
    let mut v = filled(Vector::<i32>::new());
    assert!(v.erase_at(5).unwrap_err().is_out_of_range());
    let mut empty = Vector::<i32>::new();
    assert!(empty.erase_at(0).unwrap_err().is_out_of_range());
}

#[rstest]
#[case::empty_range(2, 2, &[1, 2, 3, 4, 5])]
#[case::reversed(3, 1, &[1, 2, 3, 4, 5])]
#[case::reversed_past_end(9, 1, &[1, 2, 3, 4, 5])]
#[case::head(0, 2, &[3, 4, 5])]
#[case::middle(1, 4, &[1, 5])]
#[case::tail(3, 5, &[1, 2, 3])]
#[case::all(0, 5, &[])]
fn vector_erase_index_range(#[case] first: usize, #[case] last: usize, #[case] expect: &[i32]) {
    let mut v = filled(Vector::<i32>::new());
    let cap = v.capacity();
    v.erase_index_range(first, last).unwrap();
    assert_eq!(v, expect);
    assert_eq!(v.capacity(), cap);
}

#[test]
fn vector_erase_index_range_past_end() {
    let mut v = filled(Vector::<i32>::new());
    assert_eq!(
        v.erase_index_range(2, 6),
        Err(VectorError::OutOfRange {
            index: 6,
            length: 5
        })
    );
    assert_eq!(v, SLICE);
}

#[test]
fn vector_access() {
    let mut v = filled(Vector::<i32>::new());
    assert_eq!(v.front(), Some(&1));
    assert_eq!(v.back(), Some(&5));
    assert_eq!(v.at(4), Some(&5));
    assert_eq!(v.at(5), None);
    *v.front_mut().unwrap() = 10;
    *v.back_mut().unwrap() = 50;
    *v.at_mut(2).unwrap() = 30;
    assert_eq!(v.data(), &[10, 2, 30, 4, 50]);
    v.data_mut()[1] = 20;
    assert_eq!(v, [10, 20, 30, 4, 50]);

    let empty = Vector::<i32>::new();
    assert_eq!(empty.front(), None);
    assert_eq!(empty.back(), None);
    assert_eq!(empty.at(0), None);
    assert!(empty.data().is_empty());
}

#[test]
fn vector_set_at() {
    let mut v = filled(Vector::<i32>::new());
    assert_eq!(v.set_at(1, 20).unwrap(), 2);
    assert_eq!(v, [1, 20, 3, 4, 5]);
    let err = v.set_at(5, 60).unwrap_err();
    assert!(err.error().is_out_of_range());
    assert_eq!(err.into_value(), 60);
}

#[rstest]
#[case::doubling(Vector::<i32>::new())]
#[case::exact(Vector::<i32, Global, GrowExact>::new())]
fn vector_reserve_shrink<G: Grow>(#[case] v: Vector<i32, Global, G>) {
    let mut v = filled(v);
    v.reserve(100);
    assert_eq!(v.capacity(), 100);
    v.reserve(10);
    assert_eq!(v.capacity(), 100);
    assert_eq!(v, SLICE);
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 5);
    assert_eq!(v, SLICE);
    v.clear();
    assert_eq!(v.capacity(), 5);
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 0);
    v.push_back(1);
    assert_eq!(v, [1]);
}

#[test]
fn vector_try_reserve_overflow() {
    let mut v = Vector::<u64>::new();
    assert!(matches!(
        v.try_reserve(usize::MAX),
        Err(StorageError::LayoutError(_))
    ));
    assert_eq!(v.capacity(), 0);
}

#[test]
fn vector_resize_only_truncates() {
    let mut v = filled(Vector::<i32>::new());
    let cap = v.capacity();
    v.resize(10);
    assert_eq!(v, SLICE);
    v.resize(2);
    assert_eq!(v, [1, 2]);
    assert_eq!(v.capacity(), cap);
    v.resize(0);
    assert!(v.is_empty());
}

#[test]
fn vector_swap() {
    let mut a = filled(Vector::<i32>::new());
    let mut b = Vector::<i32>::with_capacity(50);
    b.push_back(7);
    a.swap(&mut b);
    assert_eq!(a, [7]);
    assert_eq!(a.capacity(), 50);
    assert_eq!(b, SLICE);
}

#[test]
fn vector_from_vector_independent() {
    let mut v = Vector::<i32>::with_capacity(10);
    v.extend_from_slice(SLICE);
    let mut copy = Vector::from_vector(&v);
    assert_eq!(copy.capacity(), 10);
    copy.set_at(0, 100).unwrap();
    copy.push_back(6);
    assert_eq!(v, SLICE);
    assert_eq!(copy, [100, 2, 3, 4, 5, 6]);
    assert_eq!(v.clone(), v);
}

#[test]
fn vector_from_vector_shares_references() {
    let item = Rc::new(5);
    let v: Vector<Rc<i32>> = vector![item.clone(), item.clone()];
    let copy = Vector::from_vector(&v);
    assert_eq!(Rc::strong_count(&item), 5);
    assert!(Rc::ptr_eq(&v[0], &copy[1]));
    drop(v);
    drop(copy);
    assert_eq!(Rc::strong_count(&item), 1);
}

#[test]
fn vector_display() {
    let v: Vector<i32> = vector![1, 2, 3];
    assert_eq!(v.to_string(), "[1 2 3]");
    assert_eq!(Vector::<i32>::new().to_string(), "[]");
    assert_eq!(format!("{:?}", v), "[1, 2, 3]");
}

#[test]
fn vector_macro() {
    let v: Vector<u8> = vector![];
    assert!(v.is_empty());
    let v = vector![3u8; 4];
    assert_eq!(v, [3, 3, 3, 3]);
    let v: Vector<u16> = vector![in Global];
    assert!(v.is_empty());
    let v = vector!["a", "b",];
    assert_eq!(v, ["a", "b"]);
}

#[test]
fn vector_zst() {
    let mut v = Vector::<()>::new();
    assert_eq!(v.capacity(), usize::MAX);
    for _ in 0..100 {
        v.push_back(());
    }
    v.insert_at(50, ()).unwrap();
    assert_eq!(v.len(), 101);
    v.erase_index_range(0, 100).unwrap();
    assert_eq!(v.len(), 1);
    v.shrink_to_fit();
    assert_eq!(v.capacity(), usize::MAX);
}

#[test]
fn vector_into_iter() {
    let v = filled(Vector::<i32>::new());
    let rev: Vec<i32> = v.into_iter().rev().collect();
    assert_eq!(rev, [5, 4, 3, 2, 1]);

    let mut v = filled(Vector::<i32>::new());
    for item in &mut v {
        *item *= 2;
    }
    assert_eq!((&v).into_iter().sum::<i32>(), 30);
    let collected: Vector<i32> = v.iter().map(|x| x + 1).collect();
    assert_eq!(collected, [3, 5, 7, 9, 11]);
}

#[test]
fn vector_drops_elements() {
    let item = Rc::new(());
    let mut v = Vector::<Rc<()>>::new();
    for _ in 0..10 {
        v.push_back(item.clone());
    }
    assert_eq!(Rc::strong_count(&item), 11);
    v.resize(5);
    assert_eq!(Rc::strong_count(&item), 6);
    drop(v.erase_at(0));
    assert_eq!(Rc::strong_count(&item), 5);
    v.set_at(0, item.clone()).unwrap();
    assert_eq!(Rc::strong_count(&item), 5);
    v.clear();
    assert_eq!(Rc::strong_count(&item), 1);
}

#[test]
fn vector_matches_std_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut model = Vec::new();
    let mut v = Vector::<u32>::new();

    for _ in 0..2000 {
        let len = model.len();
        match rng.gen_range(0..7) {
            0 | 1 => {
                let val = rng.gen();
                model.push(val);
                v.push_back(val);
            }
            2 => {
                assert_eq!(v.pop_back(), model.pop());
            }
            3 => {
                let idx = rng.gen_range(0..=len + 1);
                let val = rng.gen();
                let res = v.insert_at(idx, val);
                if idx <= len {
                    res.unwrap();
                    model.insert(idx, val);
                } else {
                    assert_eq!(res.unwrap_err().into_value(), val);
                }
            }
            4 => {
                let idx = rng.gen_range(0..=len);
                let res = v.erase_at(idx);
                if idx < len {
                    assert_eq!(res.unwrap(), model.remove(idx));
                } else {
                    assert!(res.unwrap_err().is_out_of_range());
                }
            }
            5 => {
                let first = rng.gen_range(0..=len);
                let last = rng.gen_range(0..=len + 1);
                let res = v.erase_index_range(first, last);
                if first > last {
                    res.unwrap();
                } else if last > len {
                    assert!(res.unwrap_err().is_out_of_range());
                } else {
                    res.unwrap();
                    model.drain(first..last).for_each(drop);
                }
            }
            _ => {
                if len > 0 {
                    let idx = rng.gen_range(0..len);
                    let val = rng.gen();
                    assert_eq!(v.set_at(idx, val).unwrap(), model[idx]);
                    model[idx] = val;
                }
            }
        }
        assert_eq!(v, model);
        assert!(v.capacity() >= v.len());
    }
}
