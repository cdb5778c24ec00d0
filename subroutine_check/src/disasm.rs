// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disassembler for relative-jump/subroutine bytecode.
//!
//! This module provides:
//! - A structured view (`Disassembly`, `InstrView`) for tooling/tests.
//! - A human-readable text format via [`core::fmt::Display`].
//!
//! Output is one instruction per line in a linear sweep, with `@Ln` labels for in-bounds
//! relative targets. Disassembling [`VerifiedCode`] additionally annotates each reachable
//! instruction with its proven relative stack height.

#![allow(clippy::module_name_repetitions, reason = "public API module")]

use alloc::vec::Vec;
use core::fmt;

use crate::bytecode::{Instr, JumpDestinations, instrs};
use crate::opcode::Opcode;
use crate::verifier::VerifiedCode;

/// Disassembles `code` into a structured view.
///
/// This never fails: undecodable bytes and truncated immediates are shown as such.
#[must_use]
pub fn disassemble(code: &[u8]) -> Disassembly<'_> {
    Disassembly {
        code,
        verified: None,
    }
}

/// Disassembles validated code, annotating proven stack heights.
#[must_use]
pub fn disassemble_verified<'a>(verified: &'a VerifiedCode<'a>) -> Disassembly<'a> {
    Disassembly {
        code: verified.code(),
        verified: Some(verified),
    }
}

/// A code disassembly.
#[derive(Clone, Debug)]
pub struct Disassembly<'a> {
    code: &'a [u8],
    verified: Option<&'a VerifiedCode<'a>>,
}

impl<'a> Disassembly<'a> {
    /// Returns the disassembled code.
    #[must_use]
    pub fn code(&self) -> &'a [u8] {
        self.code
    }

    /// Iterates instructions in a linear sweep from offset 0.
    pub fn instrs(&self) -> impl Iterator<Item = InstrView<'a>> + '_ {
        let verified = self.verified;
        instrs(self.code).map(move |instr| InstrView {
            instr,
            height: verified.and_then(|v| v.height_at(instr.pc())),
        })
    }

    /// Computes label indices from relative jump/call targets.
    ///
    /// Only targets that are instruction starts inside the code get a label.
    #[must_use]
    pub fn labels(&self) -> Labels {
        let owned;
        let dests = match self.verified {
            Some(v) => v.jump_destinations(),
            None => {
                owned = JumpDestinations::analyze(self.code);
                &owned
            }
        };
        let mut pcs: Vec<u32> = self
            .instrs()
            .filter_map(|iv| iv.target())
            .filter(|&t| dests.contains(t))
            .filter_map(|t| u32::try_from(t).ok())
            .collect();
        pcs.sort_unstable();
        pcs.dedup();
        Labels { pcs }
    }
}

/// Label indices for a disassembly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    pcs: Vec<u32>,
}

impl Labels {
    /// Returns the sorted label pcs.
    #[must_use]
    pub fn pcs(&self) -> &[u32] {
        &self.pcs
    }

    /// Returns the label index for `pc` if it is labeled.
    #[must_use]
    pub fn label_index(&self, pc: u32) -> Option<usize> {
        self.pcs.binary_search(&pc).ok()
    }
}

/// A single disassembled instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InstrView<'a> {
    instr: Instr<'a>,
    height: Option<u16>,
}

impl<'a> InstrView<'a> {
    /// Byte offset of the opcode.
    #[must_use]
    pub fn pc(&self) -> u32 {
        self.instr.pc()
    }

    /// Raw opcode byte.
    #[must_use]
    pub fn byte(&self) -> u8 {
        self.instr.byte()
    }

    /// Decoded opcode, or `None` for bytes outside the legal set.
    #[must_use]
    pub fn opcode(&self) -> Option<Opcode> {
        self.instr.opcode()
    }

    /// Immediate bytes present in the buffer.
    #[must_use]
    pub fn immediate(&self) -> &'a [u8] {
        self.instr.immediate()
    }

    /// Returns `true` if the code ends inside this instruction's immediate.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.instr.is_truncated()
    }

    /// Absolute target of a relative jump/call.
    #[must_use]
    pub fn target(&self) -> Option<i64> {
        self.instr.relative_target()
    }

    /// Proven relative stack height, for reachable instructions of verified code.
    #[must_use]
    pub fn height(&self) -> Option<u16> {
        self.height
    }
}

impl fmt::Display for Disassembly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();
        for iv in self.instrs() {
            if let Some(label_ix) = labels.label_index(iv.pc()) {
                writeln!(f, "@L{label_ix}:")?;
            }
            fmt_instr_with_labels(f, &iv, labels.pcs())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn fmt_label_ref(f: &mut fmt::Formatter<'_>, target: i64, label_pcs: &[u32]) -> fmt::Result {
    let ix = u32::try_from(target)
        .ok()
        .and_then(|pc| label_pcs.binary_search(&pc).ok());
    match ix {
        Some(ix) => write!(f, "@L{ix}"),
        None => write!(f, "@{target}"),
    }
}

fn fmt_instr_with_labels(
    f: &mut fmt::Formatter<'_>,
    iv: &InstrView<'_>,
    label_pcs: &[u32],
) -> fmt::Result {
    let Some(op) = iv.opcode() else {
        return write!(f, "{:06}: 0x{:02x} (unknown)", iv.pc(), iv.byte());
    };
    write!(f, "{:06}: {}", iv.pc(), op.mnemonic())?;
    if let Some(target) = iv.target() {
        write!(f, " ")?;
        fmt_label_ref(f, target, label_pcs)?;
    } else if !iv.immediate().is_empty() && !op.is_relative() {
        write!(f, " 0x")?;
        for b in iv.immediate() {
            write!(f, "{b:02x}")?;
        }
    }
    if iv.is_truncated() {
        write!(f, " <truncated>")?;
    }
    if let Some(h) = iv.height() {
        write!(f, " ; h={h}")?;
    }
    Ok(())
}
