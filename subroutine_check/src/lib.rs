// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `subroutine_check`: static validation of bytecode with relative jumps and subroutines.
//!
//! Code using only statically known control flow (`RJUMP`, `RJUMPI`, `RJUMPSUB`, `RETURNSUB`)
//! can be proven free of invalid instructions, invalid jump destinations, stack underflow and
//! overflow, and return-stack misuse in a single linear-time pass, before it is ever executed.
//!
//! ## Example
//!
//! ```
//! use subroutine_check::asm::Asm;
//! use subroutine_check::verifier::{VerifyConfig, verify_code};
//!
//! let mut a = Asm::new();
//! let sub = a.label();
//! a.push_u64(4).rjumpsub(sub).stop();
//! a.place(sub)?;
//! a.jumpdest().returnsub();
//! let code = a.finish()?;
//!
//! let verified = verify_code(&code, &VerifyConfig::default())?;
//! assert_eq!(verified.height_at(6), Some(0));
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```

#![no_std]

extern crate alloc;

pub(crate) mod analysis;
pub mod asm;
pub mod bytecode;
pub mod disasm;
pub mod opcode;
pub mod trace;
pub mod verifier;
