// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI panels. Each `show` function draws its panel and reports what the
//! user did; none of them mutate application state.

pub mod form;
pub mod sets;
pub mod toolbar;
