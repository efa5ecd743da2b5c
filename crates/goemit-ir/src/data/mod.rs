// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

pub mod imports;
pub mod module;
pub mod nodes;
pub mod types;
