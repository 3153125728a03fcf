// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for recipe-cli
// ABOUTME: Provides text and JSON output formatting

pub mod display;
