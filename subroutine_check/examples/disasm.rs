// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disassembler example.
//!
//! Run with:
//! `cargo run -p subroutine_check --example disasm`

use subroutine_check::asm::Asm;
use subroutine_check::disasm::disassemble_verified;
use subroutine_check::opcode::Opcode;
use subroutine_check::verifier::{VerifyConfig, verify_code};

fn main() {
    let mut a = Asm::new();
    let store = a.label();
    let skip = a.label();

    // if calldata[0] == 0 { store() }
    a.push_u64(0).op(Opcode::Calldataload);
    a.rjumpi(skip);
    a.rjumpsub(store);
    a.place(skip).unwrap();
    a.jumpdest().stop();

    // store: sstore(0, 2)
    a.place(store).unwrap();
    a.jumpdest().push_u64(2).push_u64(0).op(Opcode::Sstore).returnsub();

    let code = a.finish().unwrap();
    let verified = verify_code(&code, &VerifyConfig::default()).unwrap();
    println!("{}", disassemble_verified(&verified));
}
