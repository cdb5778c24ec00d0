// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `subroutine_check`.
//!
//! Run with:
//! `cargo bench -p subroutine_check_wind_tunnel`
