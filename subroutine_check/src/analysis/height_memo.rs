// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-offset record of the first-seen relative stack height.
//!
//! The memo is both the visited set of the traversal and the alignment invariant: every offset is
//! expanded at most once, and any later arrival must carry the same height.

use alloc::vec;
use alloc::vec::Vec;

/// Result of arriving at an offset with a given height.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum MemoVisit {
    /// The offset was unvisited; the height is now recorded and the path must be explored.
    First,
    /// The offset was already proven at this height; the path can be pruned.
    Seen,
}

/// An arrival whose height disagrees with the recorded one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct HeightMismatch {
    pub(crate) expected: u16,
    pub(crate) actual: u16,
}

#[derive(Clone, Debug)]
pub(crate) struct HeightMemo {
    heights: Vec<Option<u16>>,
    writes: usize,
}

impl HeightMemo {
    #[must_use]
    pub(crate) fn new(code_len: usize) -> Self {
        Self {
            heights: vec![None; code_len],
            writes: 0,
        }
    }

    /// Records `height` at `pc` on first arrival, or checks it against the recorded height.
    ///
    /// Entries are write-once.
    pub(crate) fn record_or_check(
        &mut self,
        pc: u32,
        height: u16,
    ) -> Result<MemoVisit, HeightMismatch> {
        let slot = &mut self.heights[pc as usize];
        match *slot {
            None => {
                *slot = Some(height);
                self.writes += 1;
                Ok(MemoVisit::First)
            }
            Some(expected) if expected == height => Ok(MemoVisit::Seen),
            Some(expected) => Err(HeightMismatch {
                expected,
                actual: height,
            }),
        }
    }

    #[must_use]
    pub(crate) fn writes(&self) -> usize {
        self.writes
    }

    #[must_use]
    pub(crate) fn into_heights(self) -> Vec<Option<u16>> {
        self.heights
    }
}
