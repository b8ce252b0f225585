use cursor_vec::CursorVec;
use std::cell::Cell;

/// Counts every object constructed (by hand or by clone) and every drop.
#[derive(Default)]
struct Counts {
    made: Cell<usize>,
    clones: Cell<usize>,
    drops: Cell<usize>,
}

impl Counts {
    fn live(&self) -> usize {
        self.made.get() + self.clones.get() - self.drops.get()
    }
}

struct Tracked<'a> {
    value: i32,
    counts: &'a Counts,
}

impl<'a> Tracked<'a> {
    fn new(value: i32, counts: &'a Counts) -> Self {
        counts.made.set(counts.made.get() + 1);
        Self { value, counts }
    }
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        self.counts.clones.set(self.counts.clones.get() + 1);
        Self {
            value: self.value,
            counts: self.counts,
        }
    }
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        self.counts.drops.set(self.counts.drops.get() + 1);
    }
}

fn values(v: &CursorVec<Tracked<'_>>) -> Vec<i32> {
    v.iter().map(|t| t.value).collect()
}

#[test]
fn test_live_objects_track_len_through_every_operation() {
    let counts = Counts::default();
    {
        let mut v = CursorVec::new();
        for i in 0..10 {
            v.push_back(Tracked::new(i, &counts)).unwrap();
            assert_eq!(counts.live(), v.len());
        }

        let nine = Tracked::new(99, &counts);
        v.insert(3, 2, &nine).unwrap();
        v.insert(11, 4, &nine).unwrap();
        drop(nine);
        assert_eq!(counts.live(), v.len());

        v.erase(2..6);
        assert_eq!(counts.live(), v.len());

        let popped = v.pop_back();
        assert!(popped.is_some());
        assert_eq!(counts.live(), v.len() + 1);
        drop(popped);

        v.truncate(4);
        assert_eq!(counts.live(), v.len());

        v.clear();
        assert_eq!(counts.live(), 0);
        assert!(v.capacity() > 0);

        v.push_back(Tracked::new(1, &counts)).unwrap();
    }
    assert_eq!(counts.live(), 0);
}

#[test]
fn test_in_place_insert_never_overwrites_unread_elements() {
    let counts = Counts::default();
    let mut v = CursorVec::with_capacity(16).unwrap();
    for i in 1..=6 {
        v.push_back(Tracked::new(i, &counts)).unwrap();
    }
    let zero = Tracked::new(0, &counts);

    // More than `n` elements after the position.
    v.insert(1, 2, &zero).unwrap();
    assert_eq!(values(&v), [1, 0, 0, 2, 3, 4, 5, 6]);

    // At most `n` elements after the position.
    v.insert(6, 3, &zero).unwrap();
    assert_eq!(values(&v), [1, 0, 0, 2, 3, 4, 0, 0, 0, 5, 6]);
    assert_eq!(v.capacity(), 16);

    drop(zero);
    assert_eq!(counts.live(), v.len());
}

#[test]
fn test_swap_moves_no_elements() {
    let counts = Counts::default();
    let mut a = CursorVec::new();
    let mut b = CursorVec::new();
    for i in 0..4 {
        a.push_back(Tracked::new(i, &counts)).unwrap();
    }
    b.push_back(Tracked::new(42, &counts)).unwrap();

    let clones = counts.clones.get();
    let drops = counts.drops.get();
    a.swap(&mut b);
    assert_eq!(counts.clones.get(), clones);
    assert_eq!(counts.drops.get(), drops);
    assert_eq!(values(&a), [42]);
    assert_eq!(values(&b), [0, 1, 2, 3]);
}

#[test]
fn test_assignment_releases_old_storage() {
    let counts = Counts::default();
    let mut a = CursorVec::new();
    for i in 0..3 {
        a.push_back(Tracked::new(i, &counts)).unwrap();
    }
    let mut b = CursorVec::new();
    for i in 10..15 {
        b.push_back(Tracked::new(i, &counts)).unwrap();
    }
    b.clone_from(&a);
    assert_eq!(values(&b), [0, 1, 2]);
    assert_eq!(counts.live(), 6);

    drop(a);
    drop(b);
    assert_eq!(counts.live(), 0);
}

#[test]
fn test_into_iter_hands_out_each_element_once() {
    let counts = Counts::default();
    let mut v = CursorVec::new();
    for i in 0..5 {
        v.push_back(Tracked::new(i, &counts)).unwrap();
    }
    let before = counts.clones.get();
    let got: Vec<i32> = v.into_iter().map(|t| t.value).collect();
    assert_eq!(got, [0, 1, 2, 3, 4]);
    assert_eq!(counts.clones.get(), before);
    assert_eq!(counts.live(), 0);
}
