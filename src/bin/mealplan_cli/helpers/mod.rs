// ABOUTME: Helper modules for mealplan-cli
// ABOUTME: Output formatting for plans and shopping lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
