// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bytecode builder ("assembler").
//!
//! This is a small, public helper for constructing code buffers without manually computing
//! relative displacements. Displacements are measured from the offset of the jump/call opcode.

use alloc::vec::Vec;
use core::fmt;

use crate::opcode::Opcode;
use crate::verifier::{VerifyConfig, VerifyError, verify_code};

/// A label for control-flow targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Label(u32);

/// A label that has not been placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedLabel;

impl fmt::Display for UnresolvedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "label was referenced but never placed")
    }
}

impl core::error::Error for UnresolvedLabel {}

/// A bytecode builder error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AsmError {
    /// A label was referenced but never placed.
    UnresolvedLabel,
    /// A label is too far from the jump/call referencing it for an `i16` displacement.
    DisplacementOutOfRange {
        /// Byte offset of the jump/call.
        pc: u32,
        /// Byte offset of the label.
        target: u32,
    },
    /// The produced bytecode failed validation.
    Verify(VerifyError),
}

impl fmt::Display for AsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedLabel => write!(f, "unresolved label"),
            Self::DisplacementOutOfRange { pc, target } => {
                write!(f, "pc={pc} displacement to {target} does not fit in i16")
            }
            Self::Verify(e) => write!(f, "validation failed: {e}"),
        }
    }
}

impl core::error::Error for AsmError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Verify(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnresolvedLabel> for AsmError {
    fn from(_: UnresolvedLabel) -> Self {
        Self::UnresolvedLabel
    }
}

impl From<VerifyError> for AsmError {
    fn from(e: VerifyError) -> Self {
        Self::Verify(e)
    }
}

#[derive(Copy, Clone, Debug)]
struct Fixup {
    /// Offset of the jump/call opcode (the displacement base).
    base: u32,
    label: Label,
}

/// A code buffer builder.
#[derive(Clone, Debug, Default)]
pub struct Asm {
    bytes: Vec<u8>,
    labels: Vec<Option<u32>>,
    fixups: Vec<Fixup>,
}

impl Asm {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the offset the next instruction will be emitted at.
    #[must_use]
    pub fn pc(&self) -> u32 {
        u32::try_from(self.bytes.len()).unwrap_or(u32::MAX)
    }

    /// Creates a new, unplaced label.
    pub fn label(&mut self) -> Label {
        let id = u32::try_from(self.labels.len()).unwrap_or(u32::MAX);
        self.labels.push(None);
        Label(id)
    }

    /// Places `label` at the current `pc`.
    pub fn place(&mut self, label: Label) -> Result<(), UnresolvedLabel> {
        let pc = self.pc();
        let slot = self
            .labels
            .get_mut(label.0 as usize)
            .ok_or(UnresolvedLabel)?;
        *slot = Some(pc);
        Ok(())
    }

    /// Emits `op`. Any immediate it declares is zero-filled.
    pub fn op(&mut self, op: Opcode) -> &mut Self {
        self.bytes.push(op.byte());
        self.bytes
            .extend(core::iter::repeat_n(0, usize::from(op.immediate_len())));
        self
    }

    /// Emits raw bytes (for hand-crafted or deliberately malformed code).
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// `PUSHn data` with `n = data.len()`.
    ///
    /// Empty data emits `PUSH1 0x00`; data longer than 32 bytes keeps its low 32 bytes.
    pub fn push(&mut self, data: &[u8]) -> &mut Self {
        let data = match data.len() {
            0 => &[0][..],
            n if n > 32 => &data[n - 32..],
            _ => data,
        };
        if let Some(op) = Opcode::push_for_len(data.len()) {
            self.bytes.push(op.byte());
            self.bytes.extend_from_slice(data);
        }
        self
    }

    /// `PUSHn` of `v` using the fewest bytes.
    pub fn push_u64(&mut self, v: u64) -> &mut Self {
        let be = v.to_be_bytes();
        let skip = be.iter().take_while(|&&b| b == 0).count().min(be.len() - 1);
        self.push(&be[skip..])
    }

    /// `JUMPDEST`.
    pub fn jumpdest(&mut self) -> &mut Self {
        self.op(Opcode::Jumpdest)
    }

    /// `STOP`.
    pub fn stop(&mut self) -> &mut Self {
        self.op(Opcode::Stop)
    }

    /// `POP`.
    pub fn pop(&mut self) -> &mut Self {
        self.op(Opcode::Pop)
    }

    /// `RETURNSUB`.
    pub fn returnsub(&mut self) -> &mut Self {
        self.op(Opcode::Returnsub)
    }

    /// `RJUMP target`.
    pub fn rjump(&mut self, target: Label) -> &mut Self {
        self.rel_label(Opcode::Rjump, target)
    }

    /// `RJUMPI target`.
    pub fn rjumpi(&mut self, target: Label) -> &mut Self {
        self.rel_label(Opcode::Rjumpi, target)
    }

    /// `RJUMPSUB target`.
    pub fn rjumpsub(&mut self, target: Label) -> &mut Self {
        self.rel_label(Opcode::Rjumpsub, target)
    }

    /// Emits a relative jump/call with an explicit displacement.
    pub fn rel_raw(&mut self, op: Opcode, displacement: i16) -> &mut Self {
        debug_assert!(op.is_relative(), "{} is not a relative opcode", op.mnemonic());
        self.bytes.push(op.byte());
        self.bytes.extend_from_slice(&displacement.to_be_bytes());
        self
    }

    fn rel_label(&mut self, op: Opcode, target: Label) -> &mut Self {
        self.fixups.push(Fixup {
            base: self.pc(),
            label: target,
        });
        self.rel_raw(op, 0)
    }

    /// Finalizes and returns the code buffer.
    pub fn finish(mut self) -> Result<Vec<u8>, AsmError> {
        for f in &self.fixups {
            let Some(target) = self.labels.get(f.label.0 as usize).and_then(|x| *x) else {
                return Err(AsmError::UnresolvedLabel);
            };
            let disp = i64::from(target) - i64::from(f.base);
            let disp = i16::try_from(disp).map_err(|_| AsmError::DisplacementOutOfRange {
                pc: f.base,
                target,
            })?;
            let at = f.base as usize + 1;
            self.bytes[at..at + 2].copy_from_slice(&disp.to_be_bytes());
        }
        Ok(self.bytes)
    }

    /// Finalizes, then validates the resulting code under `cfg`.
    pub fn finish_checked(self, cfg: &VerifyConfig) -> Result<Vec<u8>, AsmError> {
        let code = self.finish()?;
        verify_code(&code, cfg)?;
        Ok(code)
    }
}
