// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::CursorVec;

impl<T> Drop for CursorVec<T> {
    /// Drops the live elements back to front, frees the storage and resets
    /// all three cursors.
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::CursorVec;
    use alloc::{rc::Rc, vec::Vec};
    use core::cell::RefCell;

    struct Noisy(u32, Rc<RefCell<Vec<u32>>>);

    impl Clone for Noisy {
        fn clone(&self) -> Self {
            Noisy(self.0, Rc::clone(&self.1))
        }
    }

    impl Drop for Noisy {
        fn drop(&mut self) {
            self.1.borrow_mut().push(self.0);
        }
    }

    #[test]
    fn test_drop_destroys_in_reverse_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut v = CursorVec::with_capacity(3).unwrap();
            for i in 1..=3 {
                v.push_back(Noisy(i, Rc::clone(&log))).unwrap();
            }
        }
        assert_eq!(*log.borrow(), [3, 2, 1]);
    }
}
