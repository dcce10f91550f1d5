// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process syscall tracing for ARM64 XNU targets.
//!
//! The crate sits on top of a dynamic instrumentation host and turns the
//! kernel entries of selected threads into readable records: the selector
//! register is resolved against the BSD and Mach tables, the prototype
//! from the table drives argument decoding, and every record goes to a
//! [`LogSink`]. Tracing is scoped by a loader gate that waits for a
//! target module to appear and follows exactly the thread running its
//! initializer.
//!
//! The host is abstracted behind a handful of traits ([`InstrumentationEngine`],
//! [`SymbolResolver`], [`ProcessMemory`], [`FaultHook`]); [`Tracer`] wires
//! the pieces together against one [`Platform`].

pub mod config;
pub mod engine;
pub mod events;
pub mod faults;
pub mod gate;
pub mod memory;
pub mod policy;
pub mod signature;
pub mod sink;
pub mod symbols;
pub mod tracer;
pub mod tracing;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::Config;
pub use engine::{
    BacktraceStyle, Callout, CpuContext, EngineError, Instruction, InstructionStream,
    InstructionTransform, InstrumentationEngine, InvocationListener,
};
pub use events::SyscallEventHandler;
pub use faults::{FaultDetails, FaultDisposition, FaultHandler, FaultHook};
pub use gate::ModuleLoadGate;
pub use memory::{MemoryError, ProcessMemory, ReadString, STRING_READ_SIZE};
pub use policy::{ArgumentPolicy, PathRewritePolicy, PolicyError, PolicyOutcome, PolicyRegistry};
pub use sink::{LogSink, WriterSink};
pub use symbols::{ResolvedSymbol, SymbolInfo, SymbolResolver};
pub use tracer::{Platform, Tracer};
pub use tracing::{FollowMap, ThreadFollowController, KERNEL_ENTRY_MNEMONIC};
