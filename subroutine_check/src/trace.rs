// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing hooks for validation runs.
//!
//! Tracing is optional and is designed to be `no_std` friendly.
//! The validator only emits events requested by a [`TraceMask`].
//!
//! To enable tracing, pass a [`TraceSink`] to [`verify_code_traced`].

#[cfg(doc)]
use crate::verifier::verify_code_traced;

use crate::verifier::VerifyError;

/// A set of trace events requested by a [`TraceSink`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TraceMask(u32);

impl core::ops::BitOr for TraceMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for TraceMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl TraceMask {
    /// No tracing.
    pub const NONE: Self = Self(0);
    /// Trace run boundaries.
    ///
    /// Enables:
    /// - [`TraceSink::run_start`]
    /// - [`TraceSink::run_end`]
    pub const RUN: Self = Self(1 << 0);
    /// Trace the first expansion of every offset.
    ///
    /// Enables:
    /// - [`TraceSink::visit`]
    pub const VISIT: Self = Self(1 << 1);
    /// Trace paths cut short by an already-proven offset.
    ///
    /// Enables:
    /// - [`TraceSink::prune`]
    pub const PRUNE: Self = Self(1 << 2);
    /// Trace control-flow edges (jumps, branches, calls, returns).
    ///
    /// Enables:
    /// - [`TraceSink::edge`]
    pub const EDGE: Self = Self(1 << 3);
    /// Every event.
    pub const ALL: Self = Self(0b1111);

    /// Returns `true` if this mask includes all bits in `other`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

/// The kind of a traced control-flow edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// `RJUMP`.
    Jump,
    /// The taken side of `RJUMPI`.
    BranchTaken,
    /// The fall-through side of `RJUMPI`.
    BranchFallthrough,
    /// `RJUMPSUB` into the subroutine.
    Call,
    /// `RETURNSUB` back to the resume offset.
    Return,
}

/// Run outcome for tracing.
#[derive(Clone, Debug)]
pub enum TraceOutcome<'a> {
    /// The code was accepted.
    Accepted,
    /// The code was rejected.
    Rejected(&'a VerifyError),
}

/// A trace sink that can receive validation events.
pub trait TraceSink {
    /// Returns the set of events the sink wants.
    fn mask(&self) -> TraceMask {
        TraceMask::NONE
    }

    /// Called at the start of a run.
    ///
    /// Called only if `mask()` includes [`TraceMask::RUN`].
    fn run_start(&mut self, _code_len: usize) {}

    /// Called the first time an offset is expanded.
    ///
    /// Called only if `mask()` includes [`TraceMask::VISIT`].
    ///
    /// - `pc`: instruction offset
    /// - `opcode`: raw opcode byte
    /// - `height`: stack height relative to the current subroutine entry
    /// - `depth`: number of outstanding subroutine calls
    fn visit(&mut self, _pc: u32, _opcode: u8, _height: u16, _depth: u16) {}

    /// Called when a path arrives at an offset already proven at the same height.
    ///
    /// Called only if `mask()` includes [`TraceMask::PRUNE`].
    fn prune(&mut self, _pc: u32, _height: u16) {}

    /// Called for each control-flow edge taken by the traversal.
    ///
    /// Called only if `mask()` includes [`TraceMask::EDGE`].
    fn edge(&mut self, _kind: EdgeKind, _from: u32, _to: u32) {}

    /// Called at the end of a run.
    ///
    /// Called only if `mask()` includes [`TraceMask::RUN`].
    fn run_end(&mut self, _outcome: TraceOutcome<'_>) {}
}
