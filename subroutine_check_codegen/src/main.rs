// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![doc = "Code generator for `subroutine_check` opcode tables.\n\n\
          This is a std-only build tool crate. It is not shipped as part of the validator.\n"]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

#[derive(Deserialize, Clone)]
struct Spec {
    version: u32,
    opcodes: Vec<OpcodeSpec>,
}

#[derive(Deserialize, Clone)]
struct OpcodeSpec {
    name: String,
    mnemonic: String,
    byte: String,
    #[serde(default)]
    immediate: u8,
    inputs: u16,
    outputs: u16,
    flow: String,
    #[serde(default)]
    doc: Option<String>,
}

fn parse_u8_hex(s: &str) -> Result<u8> {
    let s = s.trim();
    let raw = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u8::from_str_radix(raw, 16).with_context(|| format!("invalid opcode byte '{s}'"))
}

fn fmt_hex_u8(b: u8) -> String {
    format!("0x{b:02X}")
}

fn sort_and_validate_ops(ops: &mut [(u8, OpcodeSpec)]) -> Result<()> {
    ops.sort_by(|(b0, o0), (b1, o1)| b0.cmp(b1).then_with(|| o0.name.cmp(&o1.name)));

    for w in ops.windows(2) {
        let (b0, o0) = &w[0];
        let (b1, o1) = &w[1];
        if b0 == b1 {
            bail!(
                "duplicate opcode byte {}: {} and {}",
                fmt_hex_u8(*b0),
                o0.name,
                o1.name
            );
        }
    }

    let mut names: Vec<&str> = ops.iter().map(|(_, o)| o.name.as_str()).collect();
    names.sort_unstable();
    for w in names.windows(2) {
        if w[0] == w[1] {
            bail!("duplicate opcode name '{}'", w[0]);
        }
    }
    Ok(())
}

fn flow_rust(flow: &str) -> Result<&'static str> {
    Ok(match flow {
        "next" => "Flow::Next",
        "terminator" => "Flow::Terminator",
        "invalid" => "Flow::Invalid",
        "jump" => "Flow::Jump",
        "jump_if" => "Flow::JumpIf",
        "call" => "Flow::Call",
        "return" => "Flow::Return",
        other => bail!("unknown flow '{other}'"),
    })
}

fn validate_op_shapes(ops: &[(u8, OpcodeSpec)]) -> Result<()> {
    for (_, op) in ops {
        let flow = flow_rust(&op.flow)?;
        let relative = matches!(flow, "Flow::Jump" | "Flow::JumpIf" | "Flow::Call");
        if relative && op.immediate != 2 {
            bail!(
                "opcode {} is a relative control transfer but has a {}-byte immediate (expected 2)",
                op.name,
                op.immediate
            );
        }
        if op.immediate > 32 {
            bail!("opcode {} immediate width {} exceeds 32", op.name, op.immediate);
        }
        if op.inputs > 1024 || op.outputs > 1024 {
            bail!("opcode {} has an absurd stack effect", op.name);
        }
    }
    Ok(())
}

fn generate(spec: Spec, src: &Path) -> Result<String> {
    if spec.version != 1 {
        bail!("unsupported opcodes.json version {}", spec.version);
    }

    let mut ops: Vec<(u8, OpcodeSpec)> = Vec::with_capacity(spec.opcodes.len());
    for op in spec.opcodes {
        let b = parse_u8_hex(&op.byte)?;
        ops.push((b, op));
    }

    sort_and_validate_ops(&mut ops)?;
    validate_op_shapes(&ops)?;

    let mut out = String::new();
    out.push_str("// Copyright 2026 the Subroutine Check Authors\n");
    out.push_str("// SPDX-License-Identifier: Apache-2.0 OR MIT\n\n");
    out.push_str("// @generated by subroutine_check_codegen. Do not edit by hand.\n");
    let _ = src;
    out.push('\n');

    out.push_str("/// Control-flow class of an opcode.\n");
    out.push_str("#[derive(Copy, Clone, Debug, PartialEq, Eq)]\n");
    out.push_str("pub enum Flow {\n");
    out.push_str("    /// Continues at the next sequential instruction.\n");
    out.push_str("    Next,\n");
    out.push_str("    /// Ends the current path successfully.\n");
    out.push_str("    Terminator,\n");
    out.push_str("    /// Rejected whenever it is reached.\n");
    out.push_str("    Invalid,\n");
    out.push_str("    /// Unconditional relative jump.\n");
    out.push_str("    Jump,\n");
    out.push_str("    /// Conditional relative jump.\n");
    out.push_str("    JumpIf,\n");
    out.push_str("    /// Relative subroutine call.\n");
    out.push_str("    Call,\n");
    out.push_str("    /// Return from the innermost subroutine.\n");
    out.push_str("    Return,\n");
    out.push_str("}\n\n");

    out.push_str("/// Opcode byte values.\n");
    out.push_str("#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]\n");
    out.push_str("#[repr(u8)]\n");
    out.push_str("pub enum Opcode {\n");
    for (b, op) in &ops {
        match &op.doc {
            Some(doc) => out.push_str(&format!(
                "    /// `{}` ({}): {}\n",
                op.mnemonic,
                fmt_hex_u8(*b),
                doc
            )),
            None => out.push_str(&format!(
                "    /// `{}` ({}).\n",
                op.mnemonic,
                fmt_hex_u8(*b)
            )),
        }
        out.push_str(&format!("    {} = {},\n", op.name, fmt_hex_u8(*b)));
    }
    out.push_str("}\n\n");

    out.push_str("impl Opcode {\n");

    out.push_str("    /// Decodes an opcode byte; returns `None` for bytes outside the legal set.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub const fn from_u8(b: u8) -> Option<Self> {\n");
    out.push_str("        match b {\n");
    for (b, op) in &ops {
        out.push_str(&format!(
            "            {} => Some(Self::{}),\n",
            fmt_hex_u8(*b),
            op.name
        ));
    }
    out.push_str("            _ => None,\n");
    out.push_str("        }\n");
    out.push_str("    }\n\n");

    out.push_str("    /// Returns the assembly mnemonic.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub const fn mnemonic(self) -> &'static str {\n");
    out.push_str("        match self {\n");
    for (_, op) in &ops {
        out.push_str(&format!(
            "            Self::{} => \"{}\",\n",
            op.name, op.mnemonic
        ));
    }
    out.push_str("        }\n");
    out.push_str("    }\n\n");

    push_sparse_u16_table(
        &mut out,
        "Returns the number of immediate bytes following the opcode byte.",
        "immediate_len",
        "u8",
        ops.iter().map(|(_, op)| (op.name.as_str(), u16::from(op.immediate))),
    );
    push_sparse_u16_table(
        &mut out,
        "Returns the number of data-stack items consumed.",
        "stack_inputs",
        "u16",
        ops.iter().map(|(_, op)| (op.name.as_str(), op.inputs)),
    );
    push_sparse_u16_table(
        &mut out,
        "Returns the number of data-stack items produced.",
        "stack_outputs",
        "u16",
        ops.iter().map(|(_, op)| (op.name.as_str(), op.outputs)),
    );

    out.push_str("    /// Returns the control-flow class.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub const fn flow(self) -> Flow {\n");
    out.push_str("        match self {\n");
    for (_, op) in &ops {
        let flow = flow_rust(&op.flow)?;
        if flow == "Flow::Next" {
            continue;
        }
        out.push_str(&format!("            Self::{} => {},\n", op.name, flow));
    }
    out.push_str("            _ => Flow::Next,\n");
    out.push_str("        }\n");
    out.push_str("    }\n");

    out.push_str("}\n");

    Ok(out)
}

fn push_sparse_u16_table<'a>(
    out: &mut String,
    doc: &str,
    fn_name: &str,
    ret_ty: &str,
    entries: impl Iterator<Item = (&'a str, u16)>,
) {
    out.push_str(&format!("    /// {doc}\n"));
    out.push_str("    #[must_use]\n");
    out.push_str(&format!("    pub const fn {fn_name}(self) -> {ret_ty} {{\n"));
    out.push_str("        match self {\n");
    for (name, v) in entries {
        if v == 0 {
            continue;
        }
        out.push_str(&format!("            Self::{name} => {v},\n"));
    }
    out.push_str("            _ => 0,\n");
    out.push_str("        }\n");
    out.push_str("    }\n\n");
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let spec_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("subroutine_check/opcodes.json"));
    let opcode_out_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("subroutine_check/src/opcodes_gen.rs"));
    if args.next().is_some() {
        bail!("usage: subroutine_check_codegen [spec.json] [opcodes_out.rs]");
    }

    let json =
        fs::read_to_string(&spec_path).with_context(|| format!("read {}", spec_path.display()))?;
    let spec: Spec =
        serde_json::from_str(&json).with_context(|| format!("parse {}", spec_path.display()))?;

    let opcode_rendered = generate(spec, &spec_path)?;

    if let Some(parent) = opcode_out_path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(&opcode_out_path, opcode_rendered.as_bytes())
        .with_context(|| format!("write {}", opcode_out_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{OpcodeSpec, Spec, generate};
    use std::fs;
    use std::path::{Path, PathBuf};

    fn normalize_newlines(s: &str) -> String {
        // On Windows, git autocrlf can check in generated `.rs` files with `\r\n` line endings.
        s.replace("\r\n", "\n").replace('\r', "\n")
    }

    fn op(name: &str, byte: &str, flow: &str, immediate: u8) -> OpcodeSpec {
        OpcodeSpec {
            name: name.into(),
            mnemonic: name.to_uppercase(),
            byte: byte.into(),
            immediate,
            inputs: 0,
            outputs: 0,
            flow: flow.into(),
            doc: None,
        }
    }

    #[test]
    fn generated_file_is_up_to_date() {
        let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let workspace_root = workspace_root.parent().expect("workspace root");

        let spec_path = workspace_root.join("subroutine_check/opcodes.json");
        let opcode_out_path = workspace_root.join("subroutine_check/src/opcodes_gen.rs");

        let json = fs::read_to_string(&spec_path).expect("read opcodes.json");
        let spec: Spec = serde_json::from_str(&json).expect("parse opcodes.json");

        let rendered = generate(spec, &spec_path).expect("render opcodes_gen.rs");
        let existing = fs::read_to_string(&opcode_out_path).expect("read opcodes_gen.rs");

        assert_eq!(
            normalize_newlines(&rendered),
            normalize_newlines(&existing),
            "opcodes_gen.rs is out of date; re-run: cargo run -p subroutine_check_codegen"
        );
    }

    #[test]
    fn rejects_duplicate_opcode_bytes() {
        let spec = Spec {
            version: 1,
            opcodes: vec![op("Stop", "0x00", "terminator", 0), op("Halt", "0x00", "terminator", 0)],
        };
        let err = generate(spec, Path::new("opcodes.json")).unwrap_err();
        assert!(err.to_string().contains("duplicate opcode byte 0x00"));
    }

    #[test]
    fn rejects_relative_jump_without_two_byte_immediate() {
        let spec = Spec {
            version: 1,
            opcodes: vec![op("Rjump", "0x5c", "jump", 1)],
        };
        let err = generate(spec, Path::new("opcodes.json")).unwrap_err();
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn rejects_unknown_flow() {
        let spec = Spec {
            version: 1,
            opcodes: vec![op("Jump", "0x56", "dynamic", 0)],
        };
        let err = generate(spec, Path::new("opcodes.json")).unwrap_err();
        assert!(err.to_string().contains("unknown flow 'dynamic'"));
    }
}
