//! WebAssembly bindings for the cyc6502 core.
//!
//! This module provides a JavaScript-callable wrapper that owns a CPU and its
//! address space, so browser code can load a program image and run it by
//! cycle budget.

pub mod api;

pub use api::Emulator6502;
