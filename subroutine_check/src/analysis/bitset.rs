// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small fixed-length bitset, one bit per code offset.

use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BitSet {
    words: Vec<u64>,
    len: usize,
}

impl BitSet {
    #[must_use]
    pub(crate) fn new_empty(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub(crate) fn get(&self, idx: usize) -> bool {
        if idx >= self.len {
            return false;
        }
        (self.words[idx / 64] >> (idx % 64)) & 1 == 1
    }

    pub(crate) fn set(&mut self, idx: usize) {
        if idx >= self.len {
            return;
        }
        self.words[idx / 64] |= 1_u64 << (idx % 64);
    }

    #[must_use]
    pub(crate) fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates set indices in ascending order.
    pub(crate) fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let mut w = word;
            core::iter::from_fn(move || {
                if w == 0 {
                    return None;
                }
                let bit = w.trailing_zeros() as usize;
                w &= w - 1;
                Some(wi * 64 + bit)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::BitSet;
    use alloc::vec::Vec;

    #[test]
    fn set_and_get_ignore_out_of_range() {
        let mut s = BitSet::new_empty(70);
        s.set(0);
        s.set(63);
        s.set(64);
        s.set(69);
        s.set(70);
        assert!(s.get(0) && s.get(63) && s.get(64) && s.get(69));
        assert!(!s.get(1));
        assert!(!s.get(70));
        assert_eq!(s.len(), 70);
        assert_eq!(s.count_ones(), 4);
    }

    #[test]
    fn iter_ones_is_ascending() {
        let mut s = BitSet::new_empty(200);
        for i in [199, 3, 128, 64, 65] {
            s.set(i);
        }
        let ones: Vec<usize> = s.iter_ones().collect();
        assert_eq!(ones, [3, 64, 65, 128, 199]);
    }
}
