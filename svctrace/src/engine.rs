// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seams for the host's instrumentation primitives.
//!
//! The engine itself lives in the host process (whatever rewrites code and
//! delivers callouts); everything here is the surface this crate needs from
//! it: following threads with an instruction-stream transform, attaching
//! enter/leave listeners at addresses, and walking stacks.

use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("thread {0} is not instrumentable")]
    ThreadNotInstrumentable(u64),
    #[error("cannot attach at 0x{0:x}")]
    AttachRejected(u64),
    #[error("{0}")]
    Backend(String),
}

/// How stack walks trade accuracy for coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BacktraceStyle {
    #[default]
    Accurate,
    Fuzzy,
}

/// Register window of the thread a callout or listener runs on.
///
/// Argument registers are indexed from zero (`x0` upward on ARM64); the
/// syscall selector is `x16`.
pub trait CpuContext {
    fn thread_id(&self) -> u64;
    fn syscall_register(&self) -> u64;
    fn arg(&self, index: usize) -> u64;
    fn set_arg(&mut self, index: usize, value: u64);
}

/// One decoded instruction out of a relocated basic block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction<'a> {
    pub address: u64,
    pub mnemonic: &'a str,
    pub operands: &'a str,
}

/// Invoked on the traced thread at the instruction it was planted on.
pub type Callout = Arc<dyn Fn(&mut dyn CpuContext) + Send + Sync>;

/// The engine's view of a basic block being instrumented.
///
/// `next_instruction` returns `None` once the block is exhausted. Every
/// fetched instruction must be either kept or dropped; this crate always
/// keeps.
pub trait InstructionStream {
    fn next_instruction(&mut self) -> Option<Instruction<'_>>;
    fn keep(&mut self);
    fn put_callout(&mut self, callout: Callout);
}

/// Applied to every basic block a followed thread executes.
pub trait InstructionTransform: Send + Sync {
    fn transform(&self, stream: &mut dyn InstructionStream);
}

/// Enter/leave hooks for one attached address. Both default to no-ops so
/// listeners only implement the side they care about.
pub trait InvocationListener: Send + Sync {
    fn on_enter(&self, _cpu: &mut dyn CpuContext) {}
    fn on_leave(&self, _cpu: &mut dyn CpuContext) {}
}

pub trait InstrumentationEngine: Send + Sync {
    /// Routes the thread's execution through `transform` until unfollowed.
    fn follow_thread(
        &self,
        tid: u64,
        transform: Box<dyn InstructionTransform>,
    ) -> Result<(), EngineError>;

    fn unfollow_thread(&self, tid: u64) -> Result<(), EngineError>;

    /// Releases instrumentation state for threads no longer followed.
    fn garbage_collect(&self);

    /// Plants an enter/leave listener on the function at `address`.
    fn attach(
        &self,
        address: u64,
        listener: Arc<dyn InvocationListener>,
    ) -> Result<(), EngineError>;

    /// Return addresses above the given context, innermost first.
    fn backtrace(&self, cpu: &dyn CpuContext, style: BacktraceStyle) -> Vec<u64>;
}
