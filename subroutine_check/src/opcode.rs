// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opcode byte values for the relative-jump/subroutine instruction set.
//!
//! This module is a small wrapper around generated opcode tables (see `opcodes.json`).

include!("opcodes_gen.rs");

impl Opcode {
    /// Returns the opcode byte value.
    #[must_use]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Parses an opcode from its byte value.
    #[must_use]
    pub fn from_byte(b: u8) -> Option<Self> {
        Self::from_u8(b)
    }

    /// Returns `true` if this opcode ends a path successfully.
    #[must_use]
    pub const fn is_terminator(self) -> bool {
        matches!(self.flow(), Flow::Terminator)
    }

    /// Returns `true` if this opcode carries a two-byte signed relative displacement.
    #[must_use]
    pub const fn is_relative(self) -> bool {
        matches!(self.flow(), Flow::Jump | Flow::JumpIf | Flow::Call)
    }

    /// Returns the `PUSHn` opcode for an immediate of `len` bytes (`1..=32`).
    #[must_use]
    pub fn push_for_len(len: usize) -> Option<Self> {
        let len = u8::try_from(len).ok().filter(|n| (1..=32).contains(n))?;
        Self::from_u8(Self::Push1.byte() + (len - 1))
    }
}
