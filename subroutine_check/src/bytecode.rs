// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bytecode decoding.
//!
//! Instructions are borrowed views over the code buffer: an opcode byte followed by a fixed-width
//! immediate (`PUSHn` data, or the big-endian `i16` displacement of a relative jump/call).
//! Decoding never fails outright; bytes outside the legal opcode set decode as one-byte
//! instructions without an [`Opcode`], and the validator rejects them only when reached.

use crate::analysis::bitset::BitSet;
use crate::opcode::Opcode;

/// Deployed-code size limit, in bytes.
pub const MAX_CODE_LEN: usize = 0x6000;

/// A decoded instruction at a byte offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Instr<'a> {
    pc: u32,
    byte: u8,
    immediate: &'a [u8],
    declared_len: u8,
}

impl<'a> Instr<'a> {
    /// Byte offset of the opcode.
    #[must_use]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Raw opcode byte.
    #[must_use]
    pub fn byte(&self) -> u8 {
        self.byte
    }

    /// The opcode, or `None` if the byte is outside the legal set.
    #[must_use]
    pub fn opcode(&self) -> Option<Opcode> {
        Opcode::from_u8(self.byte)
    }

    /// Immediate bytes present in the buffer (shorter than declared if truncated).
    #[must_use]
    pub fn immediate(&self) -> &'a [u8] {
        self.immediate
    }

    /// Returns `true` if the buffer ends before the declared immediate width.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.immediate.len() < usize::from(self.declared_len)
    }

    /// Offset of the next sequential instruction.
    ///
    /// May exceed the code length when the immediate is truncated.
    #[must_use]
    pub fn next_pc(&self) -> u32 {
        self.pc + 1 + u32::from(self.declared_len)
    }

    /// The signed displacement of a relative jump/call, if this is one and it is complete.
    #[must_use]
    pub fn displacement(&self) -> Option<i16> {
        if !self.opcode().is_some_and(Opcode::is_relative) {
            return None;
        }
        match *self.immediate {
            [hi, lo] => Some(i16::from_be_bytes([hi, lo])),
            _ => None,
        }
    }

    /// The absolute target of a relative jump/call, widened so out-of-range results are visible.
    #[must_use]
    pub fn relative_target(&self) -> Option<i64> {
        self.displacement()
            .map(|d| i64::from(self.pc) + i64::from(d))
    }
}

/// Decodes the instruction starting at `pc`, or `None` if `pc` is at or past the end.
///
/// `code.len()` must fit in a `u32`.
#[must_use]
pub fn decode_at(code: &[u8], pc: u32) -> Option<Instr<'_>> {
    let start = pc as usize;
    let &byte = code.get(start)?;
    let declared_len = Opcode::from_u8(byte).map_or(0, Opcode::immediate_len);
    let imm_start = start + 1;
    let imm_end = (imm_start + usize::from(declared_len)).min(code.len());
    Some(Instr {
        pc,
        byte,
        immediate: &code[imm_start..imm_end],
        declared_len,
    })
}

/// Iterates instructions in a linear sweep from offset 0.
#[must_use]
pub fn instrs(code: &[u8]) -> Instrs<'_> {
    Instrs { code, pc: 0 }
}

/// Iterator returned by [`instrs`].
#[derive(Clone, Debug)]
pub struct Instrs<'a> {
    code: &'a [u8],
    pc: u32,
}

impl<'a> Iterator for Instrs<'a> {
    type Item = Instr<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let instr = decode_at(self.code, self.pc)?;
        self.pc = instr.next_pc();
        Some(instr)
    }
}

/// The set of offsets that begin an instruction (never immediate data).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JumpDestinations {
    starts: BitSet,
}

impl JumpDestinations {
    /// Computes the set with a single linear sweep over `code`.
    #[must_use]
    pub fn analyze(code: &[u8]) -> Self {
        let mut starts = BitSet::new_empty(code.len());
        for instr in instrs(code) {
            starts.set(instr.pc() as usize);
        }
        Self { starts }
    }

    /// Returns `true` if `target` is an in-bounds instruction start.
    #[must_use]
    pub fn contains(&self, target: i64) -> bool {
        usize::try_from(target).is_ok_and(|t| self.starts.get(t))
    }

    /// Number of instruction starts.
    #[must_use]
    pub fn count(&self) -> usize {
        self.starts.count_ones()
    }

    /// Length of the analyzed code buffer.
    #[must_use]
    pub fn code_len(&self) -> usize {
        self.starts.len()
    }

    /// Iterates instruction-start offsets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.starts
            .iter_ones()
            .map(|pc| u32::try_from(pc).unwrap_or(u32::MAX))
    }
}
