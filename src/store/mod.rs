// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory entity storage.

pub mod memory;

pub use memory::{MemoryStore, StoreInner};
