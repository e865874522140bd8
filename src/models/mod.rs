// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: set records, the set-list store and exercise drafts.

pub mod draft;
pub mod set_list;
pub mod set_record;
