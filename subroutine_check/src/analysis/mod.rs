// Copyright 2026 the Subroutine Check Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Internal analysis utilities shared by the decoder and the validator.

pub(crate) mod bitset;
pub(crate) mod height_memo;
