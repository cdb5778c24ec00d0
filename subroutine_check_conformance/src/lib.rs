// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conformance suite for `subroutine_check`.
//!
//! The tests live in `tests/conformance.rs`. Run with:
//! `cargo test -p subroutine_check_conformance`
