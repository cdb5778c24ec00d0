// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// @generated by subroutine_check_codegen. Do not edit by hand.

/// Control-flow class of an opcode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Continues at the next sequential instruction.
    Next,
    /// Ends the current path successfully.
    Terminator,
    /// Rejected whenever it is reached.
    Invalid,
    /// Unconditional relative jump.
    Jump,
    /// Conditional relative jump.
    JumpIf,
    /// Relative subroutine call.
    Call,
    /// Return from the innermost subroutine.
    Return,
}

/// Opcode byte values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `STOP` (0x00): Halts execution.
    Stop = 0x00,
    /// `ADD` (0x01).
    Add = 0x01,
    /// `MUL` (0x02).
    Mul = 0x02,
    /// `SUB` (0x03).
    Sub = 0x03,
    /// `DIV` (0x04).
    Div = 0x04,
    /// `SDIV` (0x05).
    Sdiv = 0x05,
    /// `MOD` (0x06).
    Mod = 0x06,
    /// `SMOD` (0x07).
    Smod = 0x07,
    /// `ADDMOD` (0x08).
    Addmod = 0x08,
    /// `MULMOD` (0x09).
    Mulmod = 0x09,
    /// `EXP` (0x0A).
    Exp = 0x0A,
    /// `SIGNEXTEND` (0x0B).
    Signextend = 0x0B,
    /// `LT` (0x10).
    Lt = 0x10,
    /// `GT` (0x11).
    Gt = 0x11,
    /// `SLT` (0x12).
    Slt = 0x12,
    /// `SGT` (0x13).
    Sgt = 0x13,
    /// `EQ` (0x14).
    Eq = 0x14,
    /// `ISZERO` (0x15).
    Iszero = 0x15,
    /// `AND` (0x16).
    And = 0x16,
    /// `OR` (0x17).
    Or = 0x17,
    /// `XOR` (0x18).
    Xor = 0x18,
    /// `NOT` (0x19).
    Not = 0x19,
    /// `BYTE` (0x1A).
    Byte = 0x1A,
    /// `SHL` (0x1B).
    Shl = 0x1B,
    /// `SHR` (0x1C).
    Shr = 0x1C,
    /// `SAR` (0x1D).
    Sar = 0x1D,
    /// `KECCAK256` (0x20).
    Keccak256 = 0x20,
    /// `ADDRESS` (0x30).
    Address = 0x30,
    /// `BALANCE` (0x31).
    Balance = 0x31,
    /// `ORIGIN` (0x32).
    Origin = 0x32,
    /// `CALLER` (0x33).
    Caller = 0x33,
    /// `CALLVALUE` (0x34).
    Callvalue = 0x34,
    /// `CALLDATALOAD` (0x35).
    Calldataload = 0x35,
    /// `CALLDATASIZE` (0x36).
    Calldatasize = 0x36,
    /// `CALLDATACOPY` (0x37).
    Calldatacopy = 0x37,
    /// `CODESIZE` (0x38).
    Codesize = 0x38,
    /// `CODECOPY` (0x39).
    Codecopy = 0x39,
    /// `GASPRICE` (0x3A).
    Gasprice = 0x3A,
    /// `EXTCODESIZE` (0x3B).
    Extcodesize = 0x3B,
    /// `EXTCODECOPY` (0x3C).
    Extcodecopy = 0x3C,
    /// `RETURNDATASIZE` (0x3D).
    Returndatasize = 0x3D,
    /// `RETURNDATACOPY` (0x3E).
    Returndatacopy = 0x3E,
    /// `EXTCODEHASH` (0x3F).
    Extcodehash = 0x3F,
    /// `BLOCKHASH` (0x40).
    Blockhash = 0x40,
    /// `COINBASE` (0x41).
    Coinbase = 0x41,
    /// `TIMESTAMP` (0x42).
    Timestamp = 0x42,
    /// `NUMBER` (0x43).
    Number = 0x43,
    /// `DIFFICULTY` (0x44).
    Difficulty = 0x44,
    /// `GASLIMIT` (0x45).
    Gaslimit = 0x45,
    /// `CHAINID` (0x46).
    Chainid = 0x46,
    /// `SELFBALANCE` (0x47).
    Selfbalance = 0x47,
    /// `BASEFEE` (0x48).
    Basefee = 0x48,
    /// `POP` (0x50): Discards the top stack item.
    Pop = 0x50,
    /// `MLOAD` (0x51).
    Mload = 0x51,
    /// `MSTORE` (0x52).
    Mstore = 0x52,
    /// `MSTORE8` (0x53).
    Mstore8 = 0x53,
    /// `SLOAD` (0x54).
    Sload = 0x54,
    /// `SSTORE` (0x55).
    Sstore = 0x55,
    /// `PC` (0x58).
    Pc = 0x58,
    /// `MSIZE` (0x59).
    Msize = 0x59,
    /// `GAS` (0x5A).
    Gas = 0x5A,
    /// `JUMPDEST` (0x5B): Marks a subroutine or jump entry; no effect.
    Jumpdest = 0x5B,
    /// `RJUMP` (0x5C): Jumps to `pc + imm16`.
    Rjump = 0x5C,
    /// `RETURNSUB` (0x5D): Returns from the innermost subroutine.
    Returnsub = 0x5D,
    /// `RJUMPSUB` (0x5E): Calls the subroutine at `pc + imm16`.
    Rjumpsub = 0x5E,
    /// `RJUMPI` (0x5F): Jumps to `pc + imm16` if the popped condition is non-zero.
    Rjumpi = 0x5F,
    /// `PUSH1` (0x60).
    Push1 = 0x60,
    /// `PUSH2` (0x61).
    Push2 = 0x61,
    /// `PUSH3` (0x62).
    Push3 = 0x62,
    /// `PUSH4` (0x63).
    Push4 = 0x63,
    /// `PUSH5` (0x64).
    Push5 = 0x64,
    /// `PUSH6` (0x65).
    Push6 = 0x65,
    /// `PUSH7` (0x66).
    Push7 = 0x66,
    /// `PUSH8` (0x67).
    Push8 = 0x67,
    /// `PUSH9` (0x68).
    Push9 = 0x68,
    /// `PUSH10` (0x69).
    Push10 = 0x69,
    /// `PUSH11` (0x6A).
    Push11 = 0x6A,
    /// `PUSH12` (0x6B).
    Push12 = 0x6B,
    /// `PUSH13` (0x6C).
    Push13 = 0x6C,
    /// `PUSH14` (0x6D).
    Push14 = 0x6D,
    /// `PUSH15` (0x6E).
    Push15 = 0x6E,
    /// `PUSH16` (0x6F).
    Push16 = 0x6F,
    /// `PUSH17` (0x70).
    Push17 = 0x70,
    /// `PUSH18` (0x71).
    Push18 = 0x71,
    /// `PUSH19` (0x72).
    Push19 = 0x72,
    /// `PUSH20` (0x73).
    Push20 = 0x73,
    /// `PUSH21` (0x74).
    Push21 = 0x74,
    /// `PUSH22` (0x75).
    Push22 = 0x75,
    /// `PUSH23` (0x76).
    Push23 = 0x76,
    /// `PUSH24` (0x77).
    Push24 = 0x77,
    /// `PUSH25` (0x78).
    Push25 = 0x78,
    /// `PUSH26` (0x79).
    Push26 = 0x79,
    /// `PUSH27` (0x7A).
    Push27 = 0x7A,
    /// `PUSH28` (0x7B).
    Push28 = 0x7B,
    /// `PUSH29` (0x7C).
    Push29 = 0x7C,
    /// `PUSH30` (0x7D).
    Push30 = 0x7D,
    /// `PUSH31` (0x7E).
    Push31 = 0x7E,
    /// `PUSH32` (0x7F).
    Push32 = 0x7F,
    /// `DUP1` (0x80).
    Dup1 = 0x80,
    /// `DUP2` (0x81).
    Dup2 = 0x81,
    /// `DUP3` (0x82).
    Dup3 = 0x82,
    /// `DUP4` (0x83).
    Dup4 = 0x83,
    /// `DUP5` (0x84).
    Dup5 = 0x84,
    /// `DUP6` (0x85).
    Dup6 = 0x85,
    /// `DUP7` (0x86).
    Dup7 = 0x86,
    /// `DUP8` (0x87).
    Dup8 = 0x87,
    /// `DUP9` (0x88).
    Dup9 = 0x88,
    /// `DUP10` (0x89).
    Dup10 = 0x89,
    /// `DUP11` (0x8A).
    Dup11 = 0x8A,
    /// `DUP12` (0x8B).
    Dup12 = 0x8B,
    /// `DUP13` (0x8C).
    Dup13 = 0x8C,
    /// `DUP14` (0x8D).
    Dup14 = 0x8D,
    /// `DUP15` (0x8E).
    Dup15 = 0x8E,
    /// `DUP16` (0x8F).
    Dup16 = 0x8F,
    /// `SWAP1` (0x90).
    Swap1 = 0x90,
    /// `SWAP2` (0x91).
    Swap2 = 0x91,
    /// `SWAP3` (0x92).
    Swap3 = 0x92,
    /// `SWAP4` (0x93).
    Swap4 = 0x93,
    /// `SWAP5` (0x94).
    Swap5 = 0x94,
    /// `SWAP6` (0x95).
    Swap6 = 0x95,
    /// `SWAP7` (0x96).
    Swap7 = 0x96,
    /// `SWAP8` (0x97).
    Swap8 = 0x97,
    /// `SWAP9` (0x98).
    Swap9 = 0x98,
    /// `SWAP10` (0x99).
    Swap10 = 0x99,
    /// `SWAP11` (0x9A).
    Swap11 = 0x9A,
    /// `SWAP12` (0x9B).
    Swap12 = 0x9B,
    /// `SWAP13` (0x9C).
    Swap13 = 0x9C,
    /// `SWAP14` (0x9D).
    Swap14 = 0x9D,
    /// `SWAP15` (0x9E).
    Swap15 = 0x9E,
    /// `SWAP16` (0x9F).
    Swap16 = 0x9F,
    /// `LOG0` (0xA0).
    Log0 = 0xA0,
    /// `LOG1` (0xA1).
    Log1 = 0xA1,
    /// `LOG2` (0xA2).
    Log2 = 0xA2,
    /// `LOG3` (0xA3).
    Log3 = 0xA3,
    /// `LOG4` (0xA4).
    Log4 = 0xA4,
    /// `CREATE` (0xF0).
    Create = 0xF0,
    /// `CALL` (0xF1).
    Call = 0xF1,
    /// `CALLCODE` (0xF2).
    Callcode = 0xF2,
    /// `RETURN` (0xF3): Halts, returning memory output.
    Return = 0xF3,
    /// `DELEGATECALL` (0xF4).
    Delegatecall = 0xF4,
    /// `CREATE2` (0xF5).
    Create2 = 0xF5,
    /// `STATICCALL` (0xFA).
    Staticcall = 0xFA,
    /// `REVERT` (0xFD): Halts, reverting state changes.
    Revert = 0xFD,
    /// `INVALID` (0xFE): Designated invalid instruction.
    Invalid = 0xFE,
    /// `SELFDESTRUCT` (0xFF): Halts and schedules account deletion.
    Selfdestruct = 0xFF,
}

impl Opcode {
    /// Decodes an opcode byte; returns `None` for bytes outside the legal set.
    #[must_use]
    pub const fn from_u8(b: u8) -> Option<Self> {
        match b {
            0x00 => Some(Self::Stop),
            0x01 => Some(Self::Add),
            0x02 => Some(Self::Mul),
            0x03 => Some(Self::Sub),
            0x04 => Some(Self::Div),
            0x05 => Some(Self::Sdiv),
            0x06 => Some(Self::Mod),
            0x07 => Some(Self::Smod),
            0x08 => Some(Self::Addmod),
            0x09 => Some(Self::Mulmod),
            0x0A => Some(Self::Exp),
            0x0B => Some(Self::Signextend),
            0x10 => Some(Self::Lt),
            0x11 => Some(Self::Gt),
            0x12 => Some(Self::Slt),
            0x13 => Some(Self::Sgt),
            0x14 => Some(Self::Eq),
            0x15 => Some(Self::Iszero),
            0x16 => Some(Self::And),
            0x17 => Some(Self::Or),
            0x18 => Some(Self::Xor),
            0x19 => Some(Self::Not),
            0x1A => Some(Self::Byte),
            0x1B => Some(Self::Shl),
            0x1C => Some(Self::Shr),
            0x1D => Some(Self::Sar),
            0x20 => Some(Self::Keccak256),
            0x30 => Some(Self::Address),
            0x31 => Some(Self::Balance),
            0x32 => Some(Self::Origin),
            0x33 => Some(Self::Caller),
            0x34 => Some(Self::Callvalue),
            0x35 => Some(Self::Calldataload),
            0x36 => Some(Self::Calldatasize),
            0x37 => Some(Self::Calldatacopy),
            0x38 => Some(Self::Codesize),
            0x39 => Some(Self::Codecopy),
            0x3A => Some(Self::Gasprice),
            0x3B => Some(Self::Extcodesize),
            0x3C => Some(Self::Extcodecopy),
            0x3D => Some(Self::Returndatasize),
            0x3E => Some(Self::Returndatacopy),
            0x3F => Some(Self::Extcodehash),
            0x40 => Some(Self::Blockhash),
            0x41 => Some(Self::Coinbase),
            0x42 => Some(Self::Timestamp),
            0x43 => Some(Self::Number),
            0x44 => Some(Self::Difficulty),
            0x45 => Some(Self::Gaslimit),
            0x46 => Some(Self::Chainid),
            0x47 => Some(Self::Selfbalance),
            0x48 => Some(Self::Basefee),
            0x50 => Some(Self::Pop),
            0x51 => Some(Self::Mload),
            0x52 => Some(Self::Mstore),
            0x53 => Some(Self::Mstore8),
            0x54 => Some(Self::Sload),
            0x55 => Some(Self::Sstore),
            0x58 => Some(Self::Pc),
            0x59 => Some(Self::Msize),
            0x5A => Some(Self::Gas),
            0x5B => Some(Self::Jumpdest),
            0x5C => Some(Self::Rjump),
            0x5D => Some(Self::Returnsub),
            0x5E => Some(Self::Rjumpsub),
            0x5F => Some(Self::Rjumpi),
            0x60 => Some(Self::Push1),
            0x61 => Some(Self::Push2),
            0x62 => Some(Self::Push3),
            0x63 => Some(Self::Push4),
            0x64 => Some(Self::Push5),
            0x65 => Some(Self::Push6),
            0x66 => Some(Self::Push7),
            0x67 => Some(Self::Push8),
            0x68 => Some(Self::Push9),
            0x69 => Some(Self::Push10),
            0x6A => Some(Self::Push11),
            0x6B => Some(Self::Push12),
            0x6C => Some(Self::Push13),
            0x6D => Some(Self::Push14),
            0x6E => Some(Self::Push15),
            0x6F => Some(Self::Push16),
            0x70 => Some(Self::Push17),
            0x71 => Some(Self::Push18),
            0x72 => Some(Self::Push19),
            0x73 => Some(Self::Push20),
            0x74 => Some(Self::Push21),
            0x75 => Some(Self::Push22),
            0x76 => Some(Self::Push23),
            0x77 => Some(Self::Push24),
            0x78 => Some(Self::Push25),
            0x79 => Some(Self::Push26),
            0x7A => Some(Self::Push27),
            0x7B => Some(Self::Push28),
            0x7C => Some(Self::Push29),
            0x7D => Some(Self::Push30),
            0x7E => Some(Self::Push31),
            0x7F => Some(Self::Push32),
            0x80 => Some(Self::Dup1),
            0x81 => Some(Self::Dup2),
            0x82 => Some(Self::Dup3),
            0x83 => Some(Self::Dup4),
            0x84 => Some(Self::Dup5),
            0x85 => Some(Self::Dup6),
            0x86 => Some(Self::Dup7),
            0x87 => Some(Self::Dup8),
            0x88 => Some(Self::Dup9),
            0x89 => Some(Self::Dup10),
            0x8A => Some(Self::Dup11),
            0x8B => Some(Self::Dup12),
            0x8C => Some(Self::Dup13),
            0x8D => Some(Self::Dup14),
            0x8E => Some(Self::Dup15),
            0x8F => Some(Self::Dup16),
            0x90 => Some(Self::Swap1),
            0x91 => Some(Self::Swap2),
            0x92 => Some(Self::Swap3),
            0x93 => Some(Self::Swap4),
            0x94 => Some(Self::Swap5),
            0x95 => Some(Self::Swap6),
            0x96 => Some(Self::Swap7),
            0x97 => Some(Self::Swap8),
            0x98 => Some(Self::Swap9),
            0x99 => Some(Self::Swap10),
            0x9A => Some(Self::Swap11),
            0x9B => Some(Self::Swap12),
            0x9C => Some(Self::Swap13),
            0x9D => Some(Self::Swap14),
            0x9E => Some(Self::Swap15),
            0x9F => Some(Self::Swap16),
            0xA0 => Some(Self::Log0),
            0xA1 => Some(Self::Log1),
            0xA2 => Some(Self::Log2),
            0xA3 => Some(Self::Log3),
            0xA4 => Some(Self::Log4),
            0xF0 => Some(Self::Create),
            0xF1 => Some(Self::Call),
            0xF2 => Some(Self::Callcode),
            0xF3 => Some(Self::Return),
            0xF4 => Some(Self::Delegatecall),
            0xF5 => Some(Self::Create2),
            0xFA => Some(Self::Staticcall),
            0xFD => Some(Self::Revert),
            0xFE => Some(Self::Invalid),
            0xFF => Some(Self::Selfdestruct),
            _ => None,
        }
    }

    /// Returns the assembly mnemonic.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Stop => "STOP",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Sub => "SUB",
            Self::Div => "DIV",
            Self::Sdiv => "SDIV",
            Self::Mod => "MOD",
            Self::Smod => "SMOD",
            Self::Addmod => "ADDMOD",
            Self::Mulmod => "MULMOD",
            Self::Exp => "EXP",
            Self::Signextend => "SIGNEXTEND",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Slt => "SLT",
            Self::Sgt => "SGT",
            Self::Eq => "EQ",
            Self::Iszero => "ISZERO",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Byte => "BYTE",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
            Self::Sar => "SAR",
            Self::Keccak256 => "KECCAK256",
            Self::Address => "ADDRESS",
            Self::Balance => "BALANCE",
            Self::Origin => "ORIGIN",
            Self::Caller => "CALLER",
            Self::Callvalue => "CALLVALUE",
            Self::Calldataload => "CALLDATALOAD",
            Self::Calldatasize => "CALLDATASIZE",
            Self::Calldatacopy => "CALLDATACOPY",
            Self::Codesize => "CODESIZE",
            Self::Codecopy => "CODECOPY",
            Self::Gasprice => "GASPRICE",
            Self::Extcodesize => "EXTCODESIZE",
            Self::Extcodecopy => "EXTCODECOPY",
            Self::Returndatasize => "RETURNDATASIZE",
            Self::Returndatacopy => "RETURNDATACOPY",
            Self::Extcodehash => "EXTCODEHASH",
            Self::Blockhash => "BLOCKHASH",
            Self::Coinbase => "COINBASE",
            Self::Timestamp => "TIMESTAMP",
            Self::Number => "NUMBER",
            Self::Difficulty => "DIFFICULTY",
            Self::Gaslimit => "GASLIMIT",
            Self::Chainid => "CHAINID",
            Self::Selfbalance => "SELFBALANCE",
            Self::Basefee => "BASEFEE",
            Self::Pop => "POP",
            Self::Mload => "MLOAD",
            Self::Mstore => "MSTORE",
            Self::Mstore8 => "MSTORE8",
            Self::Sload => "SLOAD",
            Self::Sstore => "SSTORE",
            Self::Pc => "PC",
            Self::Msize => "MSIZE",
            Self::Gas => "GAS",
            Self::Jumpdest => "JUMPDEST",
            Self::Rjump => "RJUMP",
            Self::Returnsub => "RETURNSUB",
            Self::Rjumpsub => "RJUMPSUB",
            Self::Rjumpi => "RJUMPI",
            Self::Push1 => "PUSH1",
            Self::Push2 => "PUSH2",
            Self::Push3 => "PUSH3",
            Self::Push4 => "PUSH4",
            Self::Push5 => "PUSH5",
            Self::Push6 => "PUSH6",
            Self::Push7 => "PUSH7",
            Self::Push8 => "PUSH8",
            Self::Push9 => "PUSH9",
            Self::Push10 => "PUSH10",
            Self::Push11 => "PUSH11",
            Self::Push12 => "PUSH12",
            Self::Push13 => "PUSH13",
            Self::Push14 => "PUSH14",
            Self::Push15 => "PUSH15",
            Self::Push16 => "PUSH16",
            Self::Push17 => "PUSH17",
            Self::Push18 => "PUSH18",
            Self::Push19 => "PUSH19",
            Self::Push20 => "PUSH20",
            Self::Push21 => "PUSH21",
            Self::Push22 => "PUSH22",
            Self::Push23 => "PUSH23",
            Self::Push24 => "PUSH24",
            Self::Push25 => "PUSH25",
            Self::Push26 => "PUSH26",
            Self::Push27 => "PUSH27",
            Self::Push28 => "PUSH28",
            Self::Push29 => "PUSH29",
            Self::Push30 => "PUSH30",
            Self::Push31 => "PUSH31",
            Self::Push32 => "PUSH32",
            Self::Dup1 => "DUP1",
            Self::Dup2 => "DUP2",
            Self::Dup3 => "DUP3",
            Self::Dup4 => "DUP4",
            Self::Dup5 => "DUP5",
            Self::Dup6 => "DUP6",
            Self::Dup7 => "DUP7",
            Self::Dup8 => "DUP8",
            Self::Dup9 => "DUP9",
            Self::Dup10 => "DUP10",
            Self::Dup11 => "DUP11",
            Self::Dup12 => "DUP12",
            Self::Dup13 => "DUP13",
            Self::Dup14 => "DUP14",
            Self::Dup15 => "DUP15",
            Self::Dup16 => "DUP16",
            Self::Swap1 => "SWAP1",
            Self::Swap2 => "SWAP2",
            Self::Swap3 => "SWAP3",
            Self::Swap4 => "SWAP4",
            Self::Swap5 => "SWAP5",
            Self::Swap6 => "SWAP6",
            Self::Swap7 => "SWAP7",
            Self::Swap8 => "SWAP8",
            Self::Swap9 => "SWAP9",
            Self::Swap10 => "SWAP10",
            Self::Swap11 => "SWAP11",
            Self::Swap12 => "SWAP12",
            Self::Swap13 => "SWAP13",
            Self::Swap14 => "SWAP14",
            Self::Swap15 => "SWAP15",
            Self::Swap16 => "SWAP16",
            Self::Log0 => "LOG0",
            Self::Log1 => "LOG1",
            Self::Log2 => "LOG2",
            Self::Log3 => "LOG3",
            Self::Log4 => "LOG4",
            Self::Create => "CREATE",
            Self::Call => "CALL",
            Self::Callcode => "CALLCODE",
            Self::Return => "RETURN",
            Self::Delegatecall => "DELEGATECALL",
            Self::Create2 => "CREATE2",
            Self::Staticcall => "STATICCALL",
            Self::Revert => "REVERT",
            Self::Invalid => "INVALID",
            Self::Selfdestruct => "SELFDESTRUCT",
        }
    }

    /// Returns the number of immediate bytes following the opcode byte.
    #[must_use]
    pub const fn immediate_len(self) -> u8 {
        match self {
            Self::Rjump => 2,
            Self::Rjumpsub => 2,
            Self::Rjumpi => 2,
            Self::Push1 => 1,
            Self::Push2 => 2,
            Self::Push3 => 3,
            Self::Push4 => 4,
            Self::Push5 => 5,
            Self::Push6 => 6,
            Self::Push7 => 7,
            Self::Push8 => 8,
            Self::Push9 => 9,
            Self::Push10 => 10,
            Self::Push11 => 11,
            Self::Push12 => 12,
            Self::Push13 => 13,
            Self::Push14 => 14,
            Self::Push15 => 15,
            Self::Push16 => 16,
            Self::Push17 => 17,
            Self::Push18 => 18,
            Self::Push19 => 19,
            Self::Push20 => 20,
            Self::Push21 => 21,
            Self::Push22 => 22,
            Self::Push23 => 23,
            Self::Push24 => 24,
            Self::Push25 => 25,
            Self::Push26 => 26,
            Self::Push27 => 27,
            Self::Push28 => 28,
            Self::Push29 => 29,
            Self::Push30 => 30,
            Self::Push31 => 31,
            Self::Push32 => 32,
            _ => 0,
        }
    }

    /// Returns the number of data-stack items consumed.
    #[must_use]
    pub const fn stack_inputs(self) -> u16 {
        match self {
            Self::Add => 2,
            Self::Mul => 2,
            Self::Sub => 2,
            Self::Div => 2,
            Self::Sdiv => 2,
            Self::Mod => 2,
            Self::Smod => 2,
            Self::Addmod => 3,
            Self::Mulmod => 3,
            Self::Exp => 2,
            Self::Signextend => 2,
            Self::Lt => 2,
            Self::Gt => 2,
            Self::Slt => 2,
            Self::Sgt => 2,
            Self::Eq => 2,
            Self::Iszero => 1,
            Self::And => 2,
            Self::Or => 2,
            Self::Xor => 2,
            Self::Not => 1,
            Self::Byte => 2,
            Self::Shl => 2,
            Self::Shr => 2,
            Self::Sar => 2,
            Self::Keccak256 => 2,
            Self::Balance => 1,
            Self::Calldataload => 1,
            Self::Calldatacopy => 3,
            Self::Codecopy => 3,
            Self::Extcodesize => 1,
            Self::Extcodecopy => 4,
            Self::Returndatacopy => 3,
            Self::Extcodehash => 1,
            Self::Blockhash => 1,
            Self::Pop => 1,
            Self::Mload => 1,
            Self::Mstore => 2,
            Self::Mstore8 => 2,
            Self::Sload => 1,
            Self::Sstore => 2,
            Self::Rjumpi => 1,
            Self::Dup1 => 1,
            Self::Dup2 => 2,
            Self::Dup3 => 3,
            Self::Dup4 => 4,
            Self::Dup5 => 5,
            Self::Dup6 => 6,
            Self::Dup7 => 7,
            Self::Dup8 => 8,
            Self::Dup9 => 9,
            Self::Dup10 => 10,
            Self::Dup11 => 11,
            Self::Dup12 => 12,
            Self::Dup13 => 13,
            Self::Dup14 => 14,
            Self::Dup15 => 15,
            Self::Dup16 => 16,
            Self::Swap1 => 2,
            Self::Swap2 => 3,
            Self::Swap3 => 4,
            Self::Swap4 => 5,
            Self::Swap5 => 6,
            Self::Swap6 => 7,
            Self::Swap7 => 8,
            Self::Swap8 => 9,
            Self::Swap9 => 10,
            Self::Swap10 => 11,
            Self::Swap11 => 12,
            Self::Swap12 => 13,
            Self::Swap13 => 14,
            Self::Swap14 => 15,
            Self::Swap15 => 16,
            Self::Swap16 => 17,
            Self::Log0 => 2,
            Self::Log1 => 3,
            Self::Log2 => 4,
            Self::Log3 => 5,
            Self::Log4 => 6,
            Self::Create => 3,
            Self::Call => 7,
            Self::Callcode => 7,
            Self::Return => 2,
            Self::Delegatecall => 6,
            Self::Create2 => 4,
            Self::Staticcall => 6,
            Self::Revert => 2,
            Self::Selfdestruct => 1,
            _ => 0,
        }
    }

    /// Returns the number of data-stack items produced.
    #[must_use]
    pub const fn stack_outputs(self) -> u16 {
        match self {
            Self::Add => 1,
            Self::Mul => 1,
            Self::Sub => 1,
            Self::Div => 1,
            Self::Sdiv => 1,
            Self::Mod => 1,
            Self::Smod => 1,
            Self::Addmod => 1,
            Self::Mulmod => 1,
            Self::Exp => 1,
            Self::Signextend => 1,
            Self::Lt => 1,
            Self::Gt => 1,
            Self::Slt => 1,
            Self::Sgt => 1,
            Self::Eq => 1,
            Self::Iszero => 1,
            Self::And => 1,
            Self::Or => 1,
            Self::Xor => 1,
            Self::Not => 1,
            Self::Byte => 1,
            Self::Shl => 1,
            Self::Shr => 1,
            Self::Sar => 1,
            Self::Keccak256 => 1,
            Self::Address => 1,
            Self::Balance => 1,
            Self::Origin => 1,
            Self::Caller => 1,
            Self::Callvalue => 1,
            Self::Calldataload => 1,
            Self::Calldatasize => 1,
            Self::Codesize => 1,
            Self::Gasprice => 1,
            Self::Extcodesize => 1,
            Self::Returndatasize => 1,
            Self::Extcodehash => 1,
            Self::Blockhash => 1,
            Self::Coinbase => 1,
            Self::Timestamp => 1,
            Self::Number => 1,
            Self::Difficulty => 1,
            Self::Gaslimit => 1,
            Self::Chainid => 1,
            Self::Selfbalance => 1,
            Self::Basefee => 1,
            Self::Mload => 1,
            Self::Sload => 1,
            Self::Pc => 1,
            Self::Msize => 1,
            Self::Gas => 1,
            Self::Push1 => 1,
            Self::Push2 => 1,
            Self::Push3 => 1,
            Self::Push4 => 1,
            Self::Push5 => 1,
            Self::Push6 => 1,
            Self::Push7 => 1,
            Self::Push8 => 1,
            Self::Push9 => 1,
            Self::Push10 => 1,
            Self::Push11 => 1,
            Self::Push12 => 1,
            Self::Push13 => 1,
            Self::Push14 => 1,
            Self::Push15 => 1,
            Self::Push16 => 1,
            Self::Push17 => 1,
            Self::Push18 => 1,
            Self::Push19 => 1,
            Self::Push20 => 1,
            Self::Push21 => 1,
            Self::Push22 => 1,
            Self::Push23 => 1,
            Self::Push24 => 1,
            Self::Push25 => 1,
            Self::Push26 => 1,
            Self::Push27 => 1,
            Self::Push28 => 1,
            Self::Push29 => 1,
            Self::Push30 => 1,
            Self::Push31 => 1,
            Self::Push32 => 1,
            Self::Dup1 => 2,
            Self::Dup2 => 3,
            Self::Dup3 => 4,
            Self::Dup4 => 5,
            Self::Dup5 => 6,
            Self::Dup6 => 7,
            Self::Dup7 => 8,
            Self::Dup8 => 9,
            Self::Dup9 => 10,
            Self::Dup10 => 11,
            Self::Dup11 => 12,
            Self::Dup12 => 13,
            Self::Dup13 => 14,
            Self::Dup14 => 15,
            Self::Dup15 => 16,
            Self::Dup16 => 17,
            Self::Swap1 => 2,
            Self::Swap2 => 3,
            Self::Swap3 => 4,
            Self::Swap4 => 5,
            Self::Swap5 => 6,
            Self::Swap6 => 7,
            Self::Swap7 => 8,
            Self::Swap8 => 9,
            Self::Swap9 => 10,
            Self::Swap10 => 11,
            Self::Swap11 => 12,
            Self::Swap12 => 13,
            Self::Swap13 => 14,
            Self::Swap14 => 15,
            Self::Swap15 => 16,
            Self::Swap16 => 17,
            Self::Create => 1,
            Self::Call => 1,
            Self::Callcode => 1,
            Self::Delegatecall => 1,
            Self::Create2 => 1,
            Self::Staticcall => 1,
            _ => 0,
        }
    }

    /// Returns the control-flow class.
    #[must_use]
    pub const fn flow(self) -> Flow {
        match self {
            Self::Stop => Flow::Terminator,
            Self::Rjump => Flow::Jump,
            Self::Returnsub => Flow::Return,
            Self::Rjumpsub => Flow::Call,
            Self::Rjumpi => Flow::JumpIf,
            Self::Return => Flow::Terminator,
            Self::Revert => Flow::Terminator,
            Self::Invalid => Flow::Invalid,
            Self::Selfdestruct => Flow::Terminator,
            _ => Flow::Next,
        }
    }
}
