// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static validation of relative-jump/subroutine bytecode.
//!
//! Validation proves, in time and space linear in the code length, that no statically reachable
//! path can hit an invalid instruction, an invalid jump destination, a data-stack underflow or
//! overflow, a return-stack underflow or overflow, or a merge of two paths with different stack
//! heights. Gas and the absolute stack depth reached through differently-nested calls remain
//! runtime checks.
//!
//! The traversal is a depth-first walk over an explicit worklist of frames. Each frame tracks:
//! - `pc`: current offset
//! - `sp`: data-stack height relative to the entry of the current subroutine
//! - `bp`: absolute data-stack height at the entry of the current subroutine
//! - `rp`: number of outstanding subroutine calls
//!
//! Every offset records the `sp` it was first reached with. A later arrival with the same height
//! is pruned; a different height rejects the code. This bounds the work to one expansion per
//! offset.
//!
//! The code after a call is explored only once the called subroutine is known to return. Each
//! subroutine entry keeps a list of continuations waiting on it; a `RETURNSUB` reached inside
//! that subroutine releases them, and later calls to an entry that already returns resume
//! immediately.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::analysis::bitset::BitSet;
use crate::analysis::height_memo::{HeightMemo, MemoVisit};
use crate::bytecode::{Instr, JumpDestinations, MAX_CODE_LEN, decode_at};
use crate::opcode::{Flow, Opcode};
use crate::trace::{EdgeKind, TraceMask, TraceOutcome, TraceSink};

/// Maximum data-stack height.
pub const STACK_LIMIT: u16 = 1024;

/// Maximum number of outstanding subroutine calls.
pub const RETURN_STACK_LIMIT: u16 = 1024;

/// The kind of a validation failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An undecodable or designated-invalid opcode is reachable.
    InvalidInstruction,
    /// A static jump/call target is out of bounds or not an instruction start.
    InvalidJumpDestination,
    /// An instruction needs more stack items than the current subroutine has.
    StackUnderflow,
    /// A push would exceed the data-stack limit.
    StackOverflow,
    /// `RETURNSUB` with no outstanding call.
    ReturnStackUnderflow,
    /// `RJUMPSUB` with the return-context limit already reached.
    ///
    /// Only nesting along a single explored path counts. A subroutine reached again at an
    /// already-proven offset is pruned, so the depth of recursive calls is a runtime check.
    ReturnStackOverflow,
    /// An offset is reachable with two different relative stack heights.
    StackHeightMismatch,
    /// The code is larger than the configured size cap.
    ///
    /// This is an input limit imposed by the embedder, not one of the safety properties above.
    CodeTooLarge,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidInstruction => "invalid instruction",
            Self::InvalidJumpDestination => "invalid jump destination",
            Self::StackUnderflow => "stack underflow",
            Self::StackOverflow => "stack overflow",
            Self::ReturnStackUnderflow => "invalid retsub",
            Self::ReturnStackOverflow => "return stack overflow",
            Self::StackHeightMismatch => "stack height mismatch",
            Self::CodeTooLarge => "code too large",
        };
        f.write_str(s)
    }
}

/// A validation error. The first failure found aborts the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyError {
    /// The code exceeds [`VerifyConfig::max_code_len`].
    CodeTooLarge {
        /// Code length in bytes.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
    /// A reachable opcode byte is outside the legal set, or is `INVALID`.
    InvalidInstruction {
        /// Byte offset of the instruction.
        pc: u32,
        /// The opcode byte.
        opcode: u8,
    },
    /// A reachable relative jump/call has its displacement cut off by the end of the code.
    TruncatedImmediate {
        /// Byte offset of the instruction.
        pc: u32,
    },
    /// A relative jump/call target is not an instruction start inside the code.
    InvalidJumpDestination {
        /// Byte offset of the jump/call.
        pc: u32,
        /// The computed target (may be negative or past the end).
        target: i64,
    },
    /// An instruction needs more stack items than are available in the current subroutine.
    StackUnderflow {
        /// Byte offset of the instruction.
        pc: u32,
        /// Items consumed by the instruction.
        required: u16,
        /// Items available above the subroutine base.
        available: u16,
    },
    /// An instruction would push the absolute stack height past the limit.
    StackOverflow {
        /// Byte offset of the instruction.
        pc: u32,
        /// Absolute height after the instruction.
        height: u32,
        /// Configured limit.
        limit: u16,
    },
    /// `RETURNSUB` executed with no outstanding call.
    ReturnStackUnderflow {
        /// Byte offset of the `RETURNSUB`.
        pc: u32,
    },
    /// `RJUMPSUB` executed with the return-context limit already reached.
    ReturnStackOverflow {
        /// Byte offset of the `RJUMPSUB`.
        pc: u32,
        /// Configured limit.
        limit: u16,
    },
    /// An offset was reached with a relative stack height different from the first arrival.
    StackHeightMismatch {
        /// Byte offset of the merge point.
        pc: u32,
        /// Height recorded by the first arrival.
        expected: u16,
        /// Height of the conflicting arrival.
        actual: u16,
    },
}

impl VerifyError {
    /// Returns the failure kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CodeTooLarge { .. } => ErrorKind::CodeTooLarge,
            Self::InvalidInstruction { .. } | Self::TruncatedImmediate { .. } => {
                ErrorKind::InvalidInstruction
            }
            Self::InvalidJumpDestination { .. } => ErrorKind::InvalidJumpDestination,
            Self::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            Self::StackOverflow { .. } => ErrorKind::StackOverflow,
            Self::ReturnStackUnderflow { .. } => ErrorKind::ReturnStackUnderflow,
            Self::ReturnStackOverflow { .. } => ErrorKind::ReturnStackOverflow,
            Self::StackHeightMismatch { .. } => ErrorKind::StackHeightMismatch,
        }
    }

    /// Returns the offset the failure is attributed to.
    ///
    /// For [`VerifyError::CodeTooLarge`] this is the first offset past the size cap.
    #[must_use]
    pub fn pc(&self) -> u32 {
        match *self {
            Self::CodeTooLarge { max, .. } => u32::try_from(max).unwrap_or(u32::MAX),
            Self::InvalidInstruction { pc, .. }
            | Self::TruncatedImmediate { pc }
            | Self::InvalidJumpDestination { pc, .. }
            | Self::StackUnderflow { pc, .. }
            | Self::StackOverflow { pc, .. }
            | Self::ReturnStackUnderflow { pc }
            | Self::ReturnStackOverflow { pc, .. }
            | Self::StackHeightMismatch { pc, .. } => pc,
        }
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeTooLarge { len, max } => {
                write!(f, "code length {len} exceeds the maximum of {max} bytes")
            }
            Self::InvalidInstruction { pc, opcode } => {
                write!(f, "pc={pc} invalid instruction 0x{opcode:02x}")
            }
            Self::TruncatedImmediate { pc } => {
                write!(f, "pc={pc} invalid instruction: truncated jump displacement")
            }
            Self::InvalidJumpDestination { pc, target } => {
                write!(f, "pc={pc} invalid jump destination {target}")
            }
            Self::StackUnderflow {
                pc,
                required,
                available,
            } => write!(
                f,
                "pc={pc} stack underflow (requires {required}, available {available})"
            ),
            Self::StackOverflow { pc, height, limit } => {
                write!(f, "pc={pc} stack overflow (height {height}, limit {limit})")
            }
            Self::ReturnStackUnderflow { pc } => write!(f, "pc={pc} invalid retsub"),
            Self::ReturnStackOverflow { pc, limit } => {
                write!(f, "pc={pc} return stack overflow (limit {limit})")
            }
            Self::StackHeightMismatch {
                pc,
                expected,
                actual,
            } => write!(
                f,
                "pc={pc} stack height mismatch (expected {expected}, got {actual})"
            ),
        }
    }
}

impl core::error::Error for VerifyError {}

/// The verdict of a validation run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No reachable path can fail.
    Accepted,
    /// The first failure found.
    Rejected {
        /// Offset the failure is attributed to.
        pc: u32,
        /// Failure kind.
        kind: ErrorKind,
    },
}

impl Outcome {
    /// Returns `true` for [`Outcome::Accepted`].
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl<T> From<Result<T, VerifyError>> for Outcome {
    fn from(r: Result<T, VerifyError>) -> Self {
        match r {
            Ok(_) => Self::Accepted,
            Err(e) => Self::Rejected {
                pc: e.pc(),
                kind: e.kind(),
            },
        }
    }
}

/// Validator configuration and limits.
#[derive(Clone, Debug)]
pub struct VerifyConfig {
    /// Maximum accepted code length in bytes.
    pub max_code_len: usize,
    /// Maximum data-stack height.
    pub stack_limit: u16,
    /// Maximum number of outstanding subroutine calls.
    pub return_stack_limit: u16,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_code_len: MAX_CODE_LEN,
            stack_limit: STACK_LIMIT,
            return_stack_limit: RETURN_STACK_LIMIT,
        }
    }
}

/// Counters describing the work done by a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifyStats {
    /// Offsets expanded (one memo write each).
    pub memo_writes: usize,
    /// Arrivals pruned at an already-proven offset.
    pub memo_hits: usize,
    /// Frames pushed onto the worklist (entry, branch fall-throughs, call continuations).
    pub frames_pushed: usize,
    /// High-water mark of the worklist.
    pub max_pending_frames: usize,
    /// Return contexts allocated by calls.
    pub return_contexts: usize,
}

/// Code that passed validation, with the proven per-offset stack heights.
#[derive(Clone, Debug)]
pub struct VerifiedCode<'a> {
    code: &'a [u8],
    dests: JumpDestinations,
    heights: Vec<Option<u16>>,
    stats: VerifyStats,
}

impl<'a> VerifiedCode<'a> {
    /// Returns the validated code.
    #[must_use]
    pub fn code(&self) -> &'a [u8] {
        self.code
    }

    /// Returns the instruction-start set used to check targets.
    #[must_use]
    pub fn jump_destinations(&self) -> &JumpDestinations {
        &self.dests
    }

    /// Relative stack height proven at `pc`, or `None` if `pc` is unreachable.
    #[must_use]
    pub fn height_at(&self, pc: u32) -> Option<u16> {
        self.heights.get(pc as usize).copied().flatten()
    }

    /// Returns `true` if `pc` is statically reachable.
    #[must_use]
    pub fn is_reachable(&self, pc: u32) -> bool {
        self.height_at(pc).is_some()
    }

    /// Returns the work counters of the run.
    #[must_use]
    pub fn stats(&self) -> &VerifyStats {
        &self.stats
    }
}

/// Validates `code` and returns the verdict under the default configuration.
#[must_use]
pub fn validate(code: &[u8]) -> Outcome {
    verify_code(code, &VerifyConfig::default()).into()
}

/// Validates `code` under `cfg`.
pub fn verify_code<'a>(code: &'a [u8], cfg: &VerifyConfig) -> Result<VerifiedCode<'a>, VerifyError> {
    verify_code_traced(code, cfg, None)
}

/// Validates `code` under `cfg`, reporting events to `trace`.
///
/// Tracing is controlled by the sink's [`TraceSink::mask`]; pass `None` to disable it.
pub fn verify_code_traced<'a>(
    code: &'a [u8],
    cfg: &VerifyConfig,
    trace: Option<&mut dyn TraceSink>,
) -> Result<VerifiedCode<'a>, VerifyError> {
    let mask = trace.as_deref().map_or(TraceMask::NONE, |t| t.mask());
    Validator::new(code, cfg, mask, trace).run()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct ContextId(u32);

/// The subroutine a frame is running in, and where its call resumes.
#[derive(Copy, Clone, Debug)]
struct ReturnContext {
    entry: u32,
    resume_pc: u32,
}

/// Work released once a subroutine entry is known to return.
#[derive(Copy, Clone, Debug)]
enum Waiter {
    /// The code after a call, in the caller's state.
    Resume(Frame),
    /// Another subroutine entry whose body merged into this one's.
    Entry(u32),
}

#[derive(Copy, Clone, Debug)]
struct WaitLink {
    waiter: Waiter,
    next: Option<u32>,
}

#[derive(Copy, Clone, Debug)]
struct Frame {
    pc: u32,
    sp: u16,
    bp: u16,
    rp: u16,
    ctx: Option<ContextId>,
}

impl Frame {
    const ENTRY: Self = Self {
        pc: 0,
        sp: 0,
        bp: 0,
        rp: 0,
        ctx: None,
    };
}

struct Validator<'c, 't> {
    code: &'c [u8],
    max_code_len: usize,
    stack_limit: u16,
    return_stack_limit: u16,
    dests: JumpDestinations,
    memo: HeightMemo,
    // Arena of return contexts, one per expanded call; frames refer to theirs by index.
    contexts: Vec<ReturnContext>,
    // Subroutine entry each offset was first expanded in (`None` for top-level code).
    owners: Vec<Option<u32>>,
    // Entries that can reach their `RETURNSUB`.
    returns: BitSet,
    // Per-entry singly linked lists into `waiters`.
    wait_heads: Vec<Option<u32>>,
    waiters: Vec<WaitLink>,
    work: Vec<Frame>,
    stats: VerifyStats,
    mask: TraceMask,
    trace: Option<&'t mut dyn TraceSink>,
}

impl<'c, 't> Validator<'c, 't> {
    fn new(
        code: &'c [u8],
        cfg: &VerifyConfig,
        mask: TraceMask,
        trace: Option<&'t mut dyn TraceSink>,
    ) -> Self {
        let max_code_len = cfg
            .max_code_len
            .min(usize::try_from(u32::MAX).unwrap_or(usize::MAX));
        // Oversized input is rejected by `explore` before any analysis.
        let analyzed: &[u8] = if code.len() <= max_code_len { code } else { &[] };
        Self {
            code,
            max_code_len,
            stack_limit: cfg.stack_limit,
            return_stack_limit: cfg.return_stack_limit,
            dests: JumpDestinations::analyze(analyzed),
            memo: HeightMemo::new(analyzed.len()),
            contexts: Vec::new(),
            owners: vec![None; analyzed.len()],
            returns: BitSet::new_empty(analyzed.len()),
            wait_heads: vec![None; analyzed.len()],
            waiters: Vec::new(),
            work: vec![],
            stats: VerifyStats::default(),
            mask,
            trace,
        }
    }

    fn emit(&mut self, event: TraceMask, f: impl FnOnce(&mut dyn TraceSink)) {
        if self.mask.contains(event)
            && let Some(t) = self.trace.as_deref_mut()
        {
            f(t);
        }
    }

    fn run(mut self) -> Result<VerifiedCode<'c>, VerifyError> {
        let code_len = self.code.len();
        self.emit(TraceMask::RUN, |t| t.run_start(code_len));

        let result = self.explore();
        match &result {
            Ok(()) => self.emit(TraceMask::RUN, |t| t.run_end(TraceOutcome::Accepted)),
            Err(e) => self.emit(TraceMask::RUN, |t| t.run_end(TraceOutcome::Rejected(e))),
        }
        result?;

        self.stats.memo_writes = self.memo.writes();
        self.stats.return_contexts = self.contexts.len();
        Ok(VerifiedCode {
            code: self.code,
            dests: self.dests,
            heights: self.memo.into_heights(),
            stats: self.stats,
        })
    }

    fn explore(&mut self) -> Result<(), VerifyError> {
        if self.code.len() > self.max_code_len {
            return Err(VerifyError::CodeTooLarge {
                len: self.code.len(),
                max: self.max_code_len,
            });
        }

        self.push_frame(Frame::ENTRY);
        while let Some(frame) = self.work.pop() {
            self.walk(frame)?;
        }
        Ok(())
    }

    fn push_frame(&mut self, frame: Frame) {
        self.work.push(frame);
        self.stats.frames_pushed += 1;
        self.stats.max_pending_frames = self.stats.max_pending_frames.max(self.work.len());
    }

    fn push_context(&mut self, ctx: ReturnContext) -> ContextId {
        let id = ContextId(u32::try_from(self.contexts.len()).unwrap_or(u32::MAX));
        self.contexts.push(ctx);
        id
    }

    fn entry_of(&self, frame: &Frame) -> Option<u32> {
        frame.ctx.map(|c| self.contexts[c.0 as usize].entry)
    }

    /// Parks `waiter` until `entry` is known to return, or releases it now if it already is.
    fn wait_on(&mut self, entry: u32, waiter: Waiter) {
        if self.returns.get(entry as usize) {
            match waiter {
                Waiter::Resume(frame) => self.push_frame(frame),
                Waiter::Entry(dependent) => self.mark_returns(dependent),
            }
            return;
        }
        let id = u32::try_from(self.waiters.len()).unwrap_or(u32::MAX);
        let head = &mut self.wait_heads[entry as usize];
        let next = head.replace(id);
        self.waiters.push(WaitLink { waiter, next });
    }

    /// Marks `entry` as returning and releases everything waiting on it, transitively.
    fn mark_returns(&mut self, entry: u32) {
        let mut pending = vec![entry];
        while let Some(e) = pending.pop() {
            if self.returns.get(e as usize) {
                continue;
            }
            self.returns.set(e as usize);
            let mut next = self.wait_heads[e as usize].take();
            while let Some(id) = next {
                let link = self.waiters[id as usize];
                next = link.next;
                match link.waiter {
                    Waiter::Resume(frame) => self.push_frame(frame),
                    Waiter::Entry(dependent) => pending.push(dependent),
                }
            }
        }
    }

    /// Follows one path until it terminates, reaches a proven offset, or fails.
    ///
    /// Conditional branches push their fall-through onto the worklist. Calls park the code after
    /// them until the subroutine is known to return, and `RETURNSUB` ends the path.
    fn walk(&mut self, mut frame: Frame) -> Result<(), VerifyError> {
        loop {
            let pc = frame.pc;
            // Running off the end, including resuming exactly at the end, is an implicit `STOP`.
            let Some(instr) = decode_at(self.code, pc) else {
                return Ok(());
            };

            let entry = self.entry_of(&frame);
            match self.memo.record_or_check(pc, frame.sp) {
                Ok(MemoVisit::First) => self.owners[pc as usize] = entry,
                Ok(MemoVisit::Seen) => {
                    self.stats.memo_hits += 1;
                    self.emit(TraceMask::PRUNE, |t| t.prune(pc, frame.sp));
                    // Falling into another subroutine's proven code returns whenever it does.
                    let owner = self.owners[pc as usize];
                    if let (Some(entry), Some(owner)) = (entry, owner)
                        && entry != owner
                    {
                        self.wait_on(owner, Waiter::Entry(entry));
                    }
                    return Ok(());
                }
                Err(m) => {
                    return Err(VerifyError::StackHeightMismatch {
                        pc,
                        expected: m.expected,
                        actual: m.actual,
                    });
                }
            }
            self.emit(TraceMask::VISIT, |t| {
                t.visit(pc, instr.byte(), frame.sp, frame.rp);
            });

            let op = match instr.opcode() {
                Some(op) if op.flow() != Flow::Invalid => op,
                _ => {
                    return Err(VerifyError::InvalidInstruction {
                        pc,
                        opcode: instr.byte(),
                    });
                }
            };
            let height = self.stack_effect(&frame, op, pc)?;

            match op.flow() {
                Flow::Next => {
                    frame.sp = height;
                    frame.pc = instr.next_pc();
                }
                Flow::Terminator | Flow::Invalid => return Ok(()),
                Flow::Jump => {
                    let target = self.resolve(&instr)?;
                    self.emit(TraceMask::EDGE, |t| t.edge(EdgeKind::Jump, pc, target));
                    frame.pc = target;
                }
                Flow::JumpIf => {
                    let target = self.resolve(&instr)?;
                    let next = instr.next_pc();
                    frame.sp = height;
                    self.emit(TraceMask::EDGE, |t| {
                        t.edge(EdgeKind::BranchFallthrough, pc, next);
                        t.edge(EdgeKind::BranchTaken, pc, target);
                    });
                    self.push_frame(Frame { pc: next, ..frame });
                    frame.pc = target;
                }
                Flow::Call => {
                    let target = self.resolve(&instr)?;
                    if frame.rp >= self.return_stack_limit {
                        return Err(VerifyError::ReturnStackOverflow {
                            pc,
                            limit: self.return_stack_limit,
                        });
                    }
                    let resume_pc = instr.next_pc();
                    let ctx = self.push_context(ReturnContext {
                        entry: target,
                        resume_pc,
                    });
                    self.emit(TraceMask::EDGE, |t| t.edge(EdgeKind::Call, pc, target));
                    // Parked in the state `RETURNSUB` restores; the body may be pruned here if
                    // another call site already proved it.
                    self.wait_on(
                        target,
                        Waiter::Resume(Frame {
                            pc: resume_pc,
                            ..frame
                        }),
                    );
                    frame = Frame {
                        pc: target,
                        sp: 0,
                        bp: frame.bp + frame.sp,
                        rp: frame.rp + 1,
                        ctx: Some(ctx),
                    };
                }
                Flow::Return => {
                    let Some(ctx) = frame.ctx else {
                        return Err(VerifyError::ReturnStackUnderflow { pc });
                    };
                    let ret = self.contexts[ctx.0 as usize];
                    self.emit(TraceMask::EDGE, |t| {
                        t.edge(EdgeKind::Return, pc, ret.resume_pc);
                    });
                    self.mark_returns(ret.entry);
                    return Ok(());
                }
            }
        }
    }

    /// Applies `op`'s stack effect and returns the new relative height.
    fn stack_effect(&self, frame: &Frame, op: Opcode, pc: u32) -> Result<u16, VerifyError> {
        let required = op.stack_inputs();
        let Some(remaining) = frame.sp.checked_sub(required) else {
            return Err(VerifyError::StackUnderflow {
                pc,
                required,
                available: frame.sp,
            });
        };
        let height = u32::from(remaining) + u32::from(op.stack_outputs());
        let absolute = u32::from(frame.bp) + height;
        let overflow = VerifyError::StackOverflow {
            pc,
            height: absolute,
            limit: self.stack_limit,
        };
        if absolute > u32::from(self.stack_limit) {
            return Err(overflow);
        }
        u16::try_from(height).map_err(|_| overflow)
    }

    fn resolve(&self, instr: &Instr<'_>) -> Result<u32, VerifyError> {
        let pc = instr.pc();
        let Some(target) = instr.relative_target() else {
            return Err(VerifyError::TruncatedImmediate { pc });
        };
        if !self.dests.contains(target) {
            return Err(VerifyError::InvalidJumpDestination { pc, target });
        }
        u32::try_from(target).map_err(|_| VerifyError::InvalidJumpDestination { pc, target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asm::Asm;
    use alloc::string::ToString;

    fn verify(code: &[u8]) -> Result<VerifiedCode<'_>, VerifyError> {
        verify_code(code, &VerifyConfig::default())
    }

    #[test]
    fn simple_call_and_return_is_accepted() {
        // PUSH1 4; RJUMPSUB +4; STOP; JUMPDEST; RETURNSUB
        let code = [0x60, 0x04, 0x5E, 0x00, 0x04, 0x00, 0x5B, 0x5D];
        let v = verify(&code).unwrap();
        assert_eq!(v.height_at(0), Some(0));
        assert_eq!(v.height_at(2), Some(1));
        assert_eq!(v.height_at(5), Some(1));
        assert_eq!(v.height_at(6), Some(0));
        assert_eq!(v.height_at(7), Some(0));
        assert!(!v.is_reachable(1));
        assert_eq!(
            *v.stats(),
            VerifyStats {
                memo_writes: 5,
                memo_hits: 0,
                frames_pushed: 2,
                max_pending_frames: 1,
                return_contexts: 1,
            }
        );
    }

    #[test]
    fn nested_calls_are_accepted() {
        // RJUMPSUB s1; STOP; s1: JUMPDEST; RJUMPSUB s2; RETURNSUB; s2: JUMPDEST; RETURNSUB
        let code = [
            0x5E, 0x00, 0x04, 0x00, 0x5B, 0x5E, 0x00, 0x04, 0x5D, 0x5B, 0x5D,
        ];
        let v = verify(&code).unwrap();
        assert_eq!(v.stats().return_contexts, 2);
        assert!(v.is_reachable(10));
    }

    #[test]
    fn call_past_end_is_an_invalid_destination() {
        assert_eq!(
            verify(&[0x5E, 0x00, 0x05, 0x00]).unwrap_err(),
            VerifyError::InvalidJumpDestination { pc: 0, target: 5 }
        );
        assert_eq!(
            verify(&[0x5E, 0x00, 0x03]).unwrap_err(),
            VerifyError::InvalidJumpDestination { pc: 0, target: 3 }
        );
    }

    #[test]
    fn returnsub_without_call_underflows_return_stack() {
        assert_eq!(
            verify(&[0x5D]).unwrap_err(),
            VerifyError::ReturnStackUnderflow { pc: 0 }
        );
        assert_eq!(
            validate(&[0x5D]),
            Outcome::Rejected {
                pc: 0,
                kind: ErrorKind::ReturnStackUnderflow
            }
        );
    }

    #[test]
    fn resuming_exactly_at_the_end_is_an_implicit_stop() {
        // RJUMP +4; RETURNSUB; RJUMPSUB -1
        let code = [0x5C, 0x00, 0x04, 0x5D, 0x5E, 0xFF, 0xFF];
        assert_eq!(validate(&code), Outcome::Accepted);
    }

    #[test]
    fn code_after_a_call_that_never_returns_is_unreachable() {
        // RJUMPSUB +4; <bad>; JUMPDEST; STOP
        for bad in [0xFE, Opcode::Pop as u8] {
            let code = [0x5E, 0x00, 0x04, bad, 0x5B, 0x00];
            let v = verify(&code).unwrap();
            assert!(!v.is_reachable(3));
            assert_eq!(v.stats().frames_pushed, 1);
        }
    }

    #[test]
    fn later_call_sites_resume_once_the_entry_returns() {
        let mut a = Asm::new();
        let sub = a.label();
        a.rjumpsub(sub).rjumpsub(sub).pop();
        a.place(sub).unwrap();
        a.jumpdest().returnsub();
        let code = a.finish().unwrap();
        assert_eq!(
            verify(&code).unwrap_err(),
            VerifyError::StackUnderflow {
                pc: 6,
                required: 1,
                available: 0
            }
        );
    }

    #[test]
    fn subroutines_sharing_a_tail_both_return() {
        // Both bodies jump to one RETURNSUB; the second is pruned there but still returns.
        let mut a = Asm::new();
        let (first, second, tail) = (a.label(), a.label(), a.label());
        a.rjumpsub(first).rjumpsub(second).pop();
        a.place(first).unwrap();
        a.jumpdest().rjump(tail);
        a.place(second).unwrap();
        a.jumpdest().rjump(tail);
        a.place(tail).unwrap();
        a.returnsub();
        let code = a.finish().unwrap();
        assert_eq!(
            verify(&code).unwrap_err(),
            VerifyError::StackUnderflow {
                pc: 6,
                required: 1,
                available: 0
            }
        );
    }

    #[test]
    fn either_side_of_a_branch_can_reject() {
        // PUSH1 1; RJUMPI +4; STOP; INVALID
        assert_eq!(
            verify(&[0x60, 0x01, 0x5F, 0x00, 0x04, 0x00, 0xFE]).unwrap_err(),
            VerifyError::InvalidInstruction {
                pc: 6,
                opcode: 0xFE
            }
        );
        // PUSH1 1; RJUMPI +4; POP; STOP
        assert_eq!(
            verify(&[0x60, 0x01, 0x5F, 0x00, 0x04, 0x50, 0x00]).unwrap_err(),
            VerifyError::StackUnderflow {
                pc: 5,
                required: 1,
                available: 0
            }
        );
    }

    #[test]
    fn empty_code_is_accepted() {
        let v = verify(&[]).unwrap();
        assert_eq!(v.stats().memo_writes, 0);
    }

    #[test]
    fn targets_inside_immediates_or_out_of_bounds_are_rejected() {
        // PUSH1 0x5b; RJUMP -1 lands on the pushed byte.
        assert_eq!(
            verify(&[0x60, 0x5B, 0x5C, 0xFF, 0xFF]).unwrap_err(),
            VerifyError::InvalidJumpDestination { pc: 2, target: 1 }
        );
        assert_eq!(
            verify(&[0x5C, 0xFF, 0xF0]).unwrap_err(),
            VerifyError::InvalidJumpDestination { pc: 0, target: -16 }
        );
        assert_eq!(
            verify(&[0x5F, 0x7F, 0xFF]).unwrap_err(),
            VerifyError::StackUnderflow {
                pc: 0,
                required: 1,
                available: 0
            }
        );
        assert_eq!(
            verify(&[0x60, 0x01, 0x5F, 0x7F, 0xFF]).unwrap_err(),
            VerifyError::InvalidJumpDestination {
                pc: 2,
                target: 2 + 0x7FFF
            }
        );
    }

    #[test]
    fn underflow_is_measured_against_the_subroutine_base() {
        // PUSH1 1; RJUMPSUB +4; STOP; POP; RETURNSUB
        let code = [0x60, 0x01, 0x5E, 0x00, 0x04, 0x00, 0x50, 0x5D];
        assert_eq!(
            verify(&code).unwrap_err(),
            VerifyError::StackUnderflow {
                pc: 6,
                required: 1,
                available: 0
            }
        );
    }

    #[test]
    fn terminators_check_their_inputs() {
        assert_eq!(
            verify(&[Opcode::Return as u8]).unwrap_err(),
            VerifyError::StackUnderflow {
                pc: 0,
                required: 2,
                available: 0
            }
        );
        assert!(verify(&[0x60, 0x00, 0x60, 0x00, Opcode::Revert as u8]).is_ok());
    }

    #[test]
    fn overflow_uses_the_absolute_height() {
        let cfg = VerifyConfig {
            stack_limit: 2,
            ..VerifyConfig::default()
        };
        assert_eq!(
            verify_code(&[0x60, 0x00, 0x60, 0x00, 0x60, 0x00, 0x00], &cfg).unwrap_err(),
            VerifyError::StackOverflow {
                pc: 4,
                height: 3,
                limit: 2
            }
        );
        // Two items in the caller, one more inside the subroutine.
        let code = [
            0x60, 0x00, 0x60, 0x00, 0x5E, 0x00, 0x04, 0x00, 0x60, 0x00, 0x5D,
        ];
        assert_eq!(
            verify_code(&code, &cfg).unwrap_err(),
            VerifyError::StackOverflow {
                pc: 8,
                height: 3,
                limit: 2
            }
        );
    }

    #[test]
    fn loop_with_net_push_is_a_height_mismatch() {
        // JUMPDEST; PUSH1 0; RJUMP -3
        assert_eq!(
            verify(&[0x5B, 0x60, 0x00, 0x5C, 0xFF, 0xFD]).unwrap_err(),
            VerifyError::StackHeightMismatch {
                pc: 0,
                expected: 0,
                actual: 1
            }
        );
    }

    #[test]
    fn branches_merging_at_different_heights_are_rejected() {
        // PUSH1 0; RJUMPI +5; PUSH1 0; STOP
        assert_eq!(
            verify(&[0x60, 0x00, 0x5F, 0x00, 0x05, 0x60, 0x00, 0x00]).unwrap_err(),
            VerifyError::StackHeightMismatch {
                pc: 7,
                expected: 0,
                actual: 1
            }
        );
    }

    #[test]
    fn balanced_loop_is_accepted() {
        let v = verify(&[0x5B, 0x5C, 0xFF, 0xFF]).unwrap();
        assert_eq!(v.stats().memo_hits, 1);
    }

    #[test]
    fn recursion_depth_is_left_to_runtime() {
        // JUMPDEST; RJUMPSUB -1
        assert_eq!(validate(&[0x5B, 0x5E, 0xFF, 0xFF]), Outcome::Accepted);
    }

    #[test]
    fn reachable_invalid_opcodes_are_rejected() {
        assert_eq!(
            verify(&[0x60, 0x00, 0x56]).unwrap_err(),
            VerifyError::InvalidInstruction {
                pc: 2,
                opcode: 0x56
            }
        );
        assert_eq!(
            verify(&[0xFE]).unwrap_err(),
            VerifyError::InvalidInstruction {
                pc: 0,
                opcode: 0xFE
            }
        );
        // Unreachable garbage after STOP is ignored.
        assert_eq!(validate(&[0x00, 0x56, 0xFE, 0x0C]), Outcome::Accepted);
    }

    #[test]
    fn truncated_displacement_is_an_invalid_instruction() {
        let err = verify(&[0x5C, 0x00]).unwrap_err();
        assert_eq!(err, VerifyError::TruncatedImmediate { pc: 0 });
        assert_eq!(err.kind(), ErrorKind::InvalidInstruction);
        // A truncated PUSH runs off the end.
        assert_eq!(validate(&[0x61, 0x01]), Outcome::Accepted);
    }

    #[test]
    fn return_stack_limit_is_enforced() {
        let cfg = VerifyConfig {
            return_stack_limit: 1,
            ..VerifyConfig::default()
        };
        let code = [
            0x5E, 0x00, 0x04, 0x00, 0x5B, 0x5E, 0x00, 0x04, 0x5D, 0x5B, 0x5D,
        ];
        assert_eq!(
            verify_code(&code, &cfg).unwrap_err(),
            VerifyError::ReturnStackOverflow { pc: 5, limit: 1 }
        );
    }

    #[test]
    fn oversized_code_is_rejected_at_the_cap() {
        let cfg = VerifyConfig {
            max_code_len: 4,
            ..VerifyConfig::default()
        };
        let err = verify_code(&[0x00; 5], &cfg).unwrap_err();
        assert_eq!(err, VerifyError::CodeTooLarge { len: 5, max: 4 });
        assert_eq!(err.pc(), 4);
        assert_eq!(err.kind(), ErrorKind::CodeTooLarge);
        assert!(verify_code(&[0x00; 4], &cfg).is_ok());
    }

    #[test]
    fn shared_subroutine_is_expanded_once() {
        let mut a = Asm::new();
        let sub = a.label();
        a.rjumpsub(sub).rjumpsub(sub).rjumpsub(sub).stop();
        a.place(sub).unwrap();
        a.jumpdest().push_u64(1).pop().returnsub();
        let code = a.finish().unwrap();
        let v = verify(&code).unwrap();
        // 4 caller offsets + 4 subroutine offsets.
        assert_eq!(v.stats().memo_writes, 8);
        assert_eq!(v.stats().return_contexts, 3);
    }

    #[derive(Default)]
    struct Counts {
        mask: TraceMask,
        runs: usize,
        visits: usize,
        prunes: usize,
        edges: usize,
        rejected: Option<ErrorKind>,
    }

    impl TraceSink for Counts {
        fn mask(&self) -> TraceMask {
            self.mask
        }

        fn run_start(&mut self, _code_len: usize) {
            self.runs += 1;
        }

        fn visit(&mut self, _pc: u32, _opcode: u8, _height: u16, _depth: u16) {
            self.visits += 1;
        }

        fn prune(&mut self, _pc: u32, _height: u16) {
            self.prunes += 1;
        }

        fn edge(&mut self, _kind: EdgeKind, _from: u32, _to: u32) {
            self.edges += 1;
        }

        fn run_end(&mut self, outcome: TraceOutcome<'_>) {
            self.runs += 1;
            if let TraceOutcome::Rejected(e) = outcome {
                self.rejected = Some(e.kind());
            }
        }
    }

    #[test]
    fn trace_sink_sees_masked_events() {
        let code = [0x60, 0x04, 0x5E, 0x00, 0x04, 0x00, 0x5B, 0x5D];
        let cfg = VerifyConfig::default();

        let mut all = Counts {
            mask: TraceMask::ALL,
            ..Counts::default()
        };
        let v = verify_code_traced(&code, &cfg, Some(&mut all)).unwrap();
        assert_eq!(all.runs, 2);
        assert_eq!(all.visits, v.stats().memo_writes);
        assert_eq!(all.prunes, 0);
        assert_eq!(all.edges, 2);

        let mut visits_only = Counts {
            mask: TraceMask::VISIT,
            ..Counts::default()
        };
        verify_code_traced(&code, &cfg, Some(&mut visits_only)).unwrap();
        assert_eq!(visits_only.runs, 0);
        assert_eq!(visits_only.prunes, 0);
        assert_eq!(visits_only.visits, 5);

        let mut runs = Counts {
            mask: TraceMask::RUN,
            ..Counts::default()
        };
        verify_code_traced(&[0x5D], &cfg, Some(&mut runs)).unwrap_err();
        assert_eq!(runs.rejected, Some(ErrorKind::ReturnStackUnderflow));
    }

    #[test]
    fn errors_render_with_their_offset() {
        assert_eq!(
            VerifyError::ReturnStackUnderflow { pc: 0 }.to_string(),
            "pc=0 invalid retsub"
        );
        assert_eq!(
            VerifyError::InvalidJumpDestination { pc: 3, target: -2 }.to_string(),
            "pc=3 invalid jump destination -2"
        );
        assert_eq!(ErrorKind::StackHeightMismatch.to_string(), "stack height mismatch");
    }
}
