// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![allow(missing_docs, reason = "integration test crate")]

use subroutine_check::asm::Asm;
use subroutine_check::bytecode::{decode_at, instrs};
use subroutine_check::opcode::Opcode;
use subroutine_check::trace::{EdgeKind, TraceMask, TraceSink};
use subroutine_check::verifier::{
    ErrorKind, Outcome, VerifyConfig, VerifyError, validate, verify_code, verify_code_traced,
};

const PUSH1: u8 = Opcode::Push1 as u8;
const STOP: u8 = Opcode::Stop as u8;
const JUMPDEST: u8 = Opcode::Jumpdest as u8;
const RJUMP: u8 = Opcode::Rjump as u8;
const RJUMPI: u8 = Opcode::Rjumpi as u8;
const RJUMPSUB: u8 = Opcode::Rjumpsub as u8;
const RETURNSUB: u8 = Opcode::Returnsub as u8;

#[test]
fn scenario_a_simple_call_is_accepted() {
    let code = [PUSH1, 0x04, RJUMPSUB, 0x00, 0x04, STOP, JUMPDEST, RETURNSUB];
    assert_eq!(validate(&code), Outcome::Accepted);
}

#[test]
fn scenario_b_nested_calls_are_accepted() {
    let code = [
        RJUMPSUB, 0x00, 0x04, // -> 4
        STOP, //
        JUMPDEST, RJUMPSUB, 0x00, 0x04, // -> 9
        RETURNSUB, //
        JUMPDEST, RETURNSUB,
    ];
    assert_eq!(validate(&code), Outcome::Accepted);
}

#[test]
fn scenario_c_call_past_the_end_is_rejected() {
    let code = [PUSH1, 0x04, RJUMPSUB, 0x00, 0x06, STOP, JUMPDEST, RETURNSUB];
    assert_eq!(
        validate(&code),
        Outcome::Rejected {
            pc: 2,
            kind: ErrorKind::InvalidJumpDestination
        }
    );
}

#[test]
fn scenario_d_leading_returnsub_is_rejected() {
    assert_eq!(
        validate(&[RETURNSUB]),
        Outcome::Rejected {
            pc: 0,
            kind: ErrorKind::ReturnStackUnderflow
        }
    );
}

#[test]
fn scenario_e_resume_at_end_is_accepted() {
    let code = [RJUMP, 0x00, 0x04, RETURNSUB, RJUMPSUB, 0xFF, 0xFF];
    assert_eq!(validate(&code), Outcome::Accepted);
}

#[test]
fn code_after_a_non_returning_call_is_never_validated() {
    let pop = Opcode::Pop as u8;
    for bad in [0xFE, pop] {
        let code = [RJUMPSUB, 0x00, 0x04, bad, JUMPDEST, STOP];
        assert_eq!(validate(&code), Outcome::Accepted);
    }
}

#[test]
fn failing_taken_branch_rejects_the_run() {
    let code = [PUSH1, 0x01, RJUMPI, 0x00, 0x04, STOP, Opcode::Invalid as u8];
    assert_eq!(
        validate(&code),
        Outcome::Rejected {
            pc: 6,
            kind: ErrorKind::InvalidInstruction
        }
    );
}

#[test]
fn failing_fallthrough_branch_rejects_the_run() {
    let code = [PUSH1, 0x01, RJUMPI, 0x00, 0x04, Opcode::Pop as u8, STOP];
    assert_eq!(
        validate(&code),
        Outcome::Rejected {
            pc: 5,
            kind: ErrorKind::StackUnderflow
        }
    );
}

#[test]
fn dynamic_jumps_are_rejected_when_reachable() {
    let code = [PUSH1, 0x04, 0x56, STOP, JUMPDEST, STOP];
    assert_eq!(
        verify_code(&code, &VerifyConfig::default()).unwrap_err(),
        VerifyError::InvalidInstruction {
            pc: 2,
            opcode: 0x56
        }
    );
}

#[test]
fn pushed_constants_are_never_destinations() {
    // A 9-byte pushed value is plain data; only the relative displacement is a target.
    let mut a = Asm::new();
    a.push(&[0xFF; 9]).pop().stop();
    let code = a.finish().unwrap();
    assert_eq!(validate(&code), Outcome::Accepted);
}

#[test]
fn validation_is_deterministic() {
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    for _ in 0..200 {
        let code = random_code(&mut rng, 48);
        let first = verify_code(&code, &VerifyConfig::default()).map(|v| *v.stats());
        let second = verify_code(&code, &VerifyConfig::default()).map(|v| *v.stats());
        assert_eq!(first, second);
    }
}

#[test]
fn reconverging_branches_are_linear() {
    for k in [1_usize, 8, 64, 512] {
        let mut a = Asm::new();
        for _ in 0..k {
            let join = a.label();
            a.push_u64(1).rjumpi(join).push_u64(0).pop();
            a.place(join).unwrap();
            a.jumpdest();
        }
        a.stop();
        let code = a.finish().unwrap();

        let v = verify_code(&code, &VerifyConfig::default()).unwrap();
        let stats = v.stats();
        assert!(stats.memo_writes <= code.len());
        assert_eq!(stats.memo_hits, k);
        assert_eq!(stats.frames_pushed, k + 1);
    }
}

#[test]
fn targets_inside_immediates_are_rejected() {
    // PUSH2 0x5b5b, then an RJUMP back into each immediate byte.
    for back in [1_i16, 2] {
        let mut a = Asm::new();
        a.push(&[JUMPDEST, JUMPDEST]);
        a.rel_raw(Opcode::Rjump, -back);
        let code = a.finish().unwrap();
        let target = 3 - i64::from(back);
        assert_eq!(
            verify_code(&code, &VerifyConfig::default()).unwrap_err(),
            VerifyError::InvalidJumpDestination { pc: 3, target }
        );
    }
}

#[test]
fn accepted_code_is_aligned_and_jumps_are_sound() {
    let mut rng = XorShift(0xD1B5_4A32_D192_ED03);
    let mut accepted = 0;
    for _ in 0..2000 {
        let code = random_code(&mut rng, 40);
        let Ok(v) = verify_code(&code, &VerifyConfig::default()) else {
            continue;
        };
        accepted += 1;

        let starts: Vec<u32> = instrs(&code).map(|i| i.pc()).collect();
        assert_eq!(v.jump_destinations().iter().collect::<Vec<_>>(), starts);

        for pc in 0..u32::try_from(code.len()).unwrap() {
            if !v.is_reachable(pc) {
                continue;
            }
            assert!(starts.contains(&pc), "reachable pc {pc} is not an instruction start");
            let instr = decode_at(&code, pc).unwrap();
            if let Some(target) = instr.relative_target() {
                assert!(v.jump_destinations().contains(target));
                assert!(v.is_reachable(u32::try_from(target).unwrap()));
            }
        }
    }
    assert!(accepted > 0);
}

#[derive(Default)]
struct Counting {
    visits: usize,
    prunes: usize,
    calls: usize,
    returns: usize,
}

impl TraceSink for Counting {
    fn mask(&self) -> TraceMask {
        TraceMask::VISIT | TraceMask::PRUNE | TraceMask::EDGE
    }

    fn visit(&mut self, _pc: u32, _opcode: u8, _height: u16, _depth: u16) {
        self.visits += 1;
    }

    fn prune(&mut self, _pc: u32, _height: u16) {
        self.prunes += 1;
    }

    fn edge(&mut self, kind: EdgeKind, _from: u32, _to: u32) {
        match kind {
            EdgeKind::Call => self.calls += 1,
            EdgeKind::Return => self.returns += 1,
            _ => {}
        }
    }
}

#[test]
fn trace_counts_match_stats() {
    let mut rng = XorShift(0x2545_F491_4F6C_DD1D);
    for _ in 0..500 {
        let code = random_code(&mut rng, 40);
        let mut sink = Counting::default();
        let Ok(v) = verify_code_traced(&code, &VerifyConfig::default(), Some(&mut sink)) else {
            continue;
        };
        assert_eq!(sink.visits, v.stats().memo_writes);
        assert_eq!(sink.prunes, v.stats().memo_hits);
        assert_eq!(sink.calls, v.stats().return_contexts);
    }
}

/// Deterministic pseudo-random generator for property sweeps.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

/// Emits short, mostly well-formed programs biased toward control flow.
fn random_code(rng: &mut XorShift, len: usize) -> Vec<u8> {
    let mut code = Vec::with_capacity(len + 3);
    while code.len() < len {
        match rng.below(10) {
            0 | 1 => code.extend_from_slice(&[PUSH1, rng.below(256) as u8]),
            2 => code.push(Opcode::Pop as u8),
            3 => code.push(JUMPDEST),
            4 => code.push(STOP),
            5 => code.push(RETURNSUB),
            op @ 6..=8 => {
                let op = [RJUMP, RJUMPI, RJUMPSUB][(op - 6) as usize];
                let disp = rng.below(len as u64) as i16 - (len / 2) as i16;
                code.push(op);
                code.extend_from_slice(&disp.to_be_bytes());
            }
            _ => code.push(rng.below(256) as u8),
        }
    }
    code
}
