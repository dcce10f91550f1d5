// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-crate doubles for the platform seams. Everything here records what
//! was done to it so tests assert on sequences, not just end states.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::engine::{
    BacktraceStyle, Callout, CpuContext, EngineError, Instruction, InstructionStream,
    InstructionTransform, InstrumentationEngine, InvocationListener,
};
use crate::faults::{FaultDetails, FaultDisposition, FaultHandler, FaultHook};
use crate::memory::{MemoryError, ProcessMemory};
use crate::sink::LogSink;
use crate::symbols::{ResolvedSymbol, SymbolInfo, SymbolResolver};

// Test Memory
//
// A flat 64 KiB region mapped at address zero. Anything outside it is
// unreadable and unwritable, which doubles as the "bad pointer" fixture.

const TEST_REGION_LEN: usize = 64 * 1024;

pub(crate) struct TestMemory {
    bytes: Mutex<Vec<u8>>,
}

impl TestMemory {
    pub(crate) fn new() -> Self {
        Self {
            bytes: Mutex::new(vec![0; TEST_REGION_LEN]),
        }
    }

    /// Plants `text` plus its terminator at `address`.
    pub(crate) fn place_str(&self, address: u64, text: &str) {
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(0);
        self.write(address, &bytes).unwrap();
    }

    pub(crate) fn snapshot(&self, address: u64, len: usize) -> Vec<u8> {
        let start = address as usize;
        self.bytes.lock()[start..start + len].to_vec()
    }

    fn span(address: u64, len: usize) -> Option<std::ops::Range<usize>> {
        let start = usize::try_from(address).ok()?;
        let end = start.checked_add(len)?;
        (end <= TEST_REGION_LEN).then_some(start..end)
    }
}

impl ProcessMemory for TestMemory {
    fn read(&self, address: u64, out: &mut [u8]) -> Result<(), MemoryError> {
        let span = Self::span(address, out.len()).ok_or(MemoryError::Unreadable(address))?;
        out.copy_from_slice(&self.bytes.lock()[span]);
        Ok(())
    }

    fn write(&self, address: u64, bytes: &[u8]) -> Result<(), MemoryError> {
        let span = Self::span(address, bytes.len()).ok_or(MemoryError::Unwritable(address))?;
        self.bytes.lock()[span].copy_from_slice(bytes);
        Ok(())
    }
}

// Test Cpu
//
// Eight argument registers and the selector register, nothing else.

pub(crate) struct TestCpu {
    tid: u64,
    syscall: u64,
    args: [u64; 8],
}

impl TestCpu {
    pub(crate) fn new(tid: u64) -> Self {
        Self {
            tid,
            syscall: 0,
            args: [0; 8],
        }
    }

    /// A context as the kernel entry callout would see it: selector in the
    /// selector register, arguments from `x0` up.
    pub(crate) fn with_syscall(tid: u64, nr: i64, args: &[u64]) -> Self {
        let mut cpu = Self::new(tid);
        cpu.syscall = nr as u64;
        for (slot, value) in cpu.args.iter_mut().zip(args) {
            *slot = *value;
        }
        cpu
    }

    /// Sets the raw selector register, without sign extension.
    pub(crate) fn set_syscall_register(&mut self, raw: u64) {
        self.syscall = raw;
    }
}

impl CpuContext for TestCpu {
    fn thread_id(&self) -> u64 {
        self.tid
    }

    fn syscall_register(&self) -> u64 {
        self.syscall
    }

    fn arg(&self, index: usize) -> u64 {
        self.args.get(index).copied().unwrap_or(0)
    }

    fn set_arg(&mut self, index: usize, value: u64) {
        if let Some(slot) = self.args.get_mut(index) {
            *slot = value;
        }
    }
}

// Memory Sink

pub(crate) struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub(crate) fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl LogSink for MemorySink {
    fn line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

// Recording Engine
//
// follows() records every call, including rejected ones; attached
// listeners and stored transforms exist only for calls that succeeded.

pub(crate) struct RecordingEngine {
    follows: Mutex<Vec<u64>>,
    unfollows: Mutex<Vec<u64>>,
    collects: AtomicUsize,
    attaches: Mutex<Vec<(u64, Arc<dyn InvocationListener>)>>,
    transforms: Mutex<Vec<(u64, Box<dyn InstructionTransform>)>>,
    fail_follow: AtomicBool,
    fail_attach: AtomicBool,
    frames: Mutex<Vec<u64>>,
}

impl RecordingEngine {
    pub(crate) fn new() -> Self {
        Self {
            follows: Mutex::new(Vec::new()),
            unfollows: Mutex::new(Vec::new()),
            collects: AtomicUsize::new(0),
            attaches: Mutex::new(Vec::new()),
            transforms: Mutex::new(Vec::new()),
            fail_follow: AtomicBool::new(false),
            fail_attach: AtomicBool::new(false),
            frames: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn follows(&self) -> Vec<u64> {
        self.follows.lock().clone()
    }

    pub(crate) fn unfollows(&self) -> Vec<u64> {
        self.unfollows.lock().clone()
    }

    pub(crate) fn collect_count(&self) -> usize {
        self.collects.load(Ordering::SeqCst)
    }

    pub(crate) fn attach_addresses(&self) -> Vec<u64> {
        self.attaches.lock().iter().map(|(a, _)| *a).collect()
    }

    pub(crate) fn listener_at(&self, address: u64) -> Arc<dyn InvocationListener> {
        self.attaches
            .lock()
            .iter()
            .find(|(a, _)| *a == address)
            .map(|(_, listener)| listener.clone())
            .expect("no listener attached at address")
    }

    pub(crate) fn take_transform(&self, tid: u64) -> Box<dyn InstructionTransform> {
        let mut transforms = self.transforms.lock();
        let index = transforms
            .iter()
            .position(|(t, _)| *t == tid)
            .expect("no transform recorded for thread");
        transforms.remove(index).1
    }

    pub(crate) fn fail_next_follow(&self) {
        self.fail_follow.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_next_attach(&self) {
        self.fail_attach.store(true, Ordering::SeqCst);
    }

    pub(crate) fn set_backtrace(&self, frames: &[u64]) {
        *self.frames.lock() = frames.to_vec();
    }
}

impl InstrumentationEngine for RecordingEngine {
    fn follow_thread(
        &self,
        tid: u64,
        transform: Box<dyn InstructionTransform>,
    ) -> Result<(), EngineError> {
        self.follows.lock().push(tid);
        if self.fail_follow.swap(false, Ordering::SeqCst) {
            return Err(EngineError::ThreadNotInstrumentable(tid));
        }
        self.transforms.lock().push((tid, transform));
        Ok(())
    }

    fn unfollow_thread(&self, tid: u64) -> Result<(), EngineError> {
        self.unfollows.lock().push(tid);
        Ok(())
    }

    fn garbage_collect(&self) {
        self.collects.fetch_add(1, Ordering::SeqCst);
    }

    fn attach(
        &self,
        address: u64,
        listener: Arc<dyn InvocationListener>,
    ) -> Result<(), EngineError> {
        if self.fail_attach.swap(false, Ordering::SeqCst) {
            return Err(EngineError::AttachRejected(address));
        }
        self.attaches.lock().push((address, listener));
        Ok(())
    }

    fn backtrace(&self, _cpu: &dyn CpuContext, _style: BacktraceStyle) -> Vec<u64> {
        self.frames.lock().clone()
    }
}

// Scripted Stream
//
// Plays back a fixed instruction sequence and remembers where callouts
// were planted, by instruction position.

pub(crate) struct ScriptedStream {
    instructions: Vec<(u64, String, String)>,
    cursor: usize,
    kept: usize,
    callouts: Vec<(usize, Callout)>,
}

impl ScriptedStream {
    pub(crate) fn new(script: &[(u64, &str, &str)]) -> Self {
        Self {
            instructions: script
                .iter()
                .map(|(address, mnemonic, operands)| {
                    (*address, mnemonic.to_string(), operands.to_string())
                })
                .collect(),
            cursor: 0,
            kept: 0,
            callouts: Vec::new(),
        }
    }

    pub(crate) fn kept(&self) -> usize {
        self.kept
    }

    pub(crate) fn callout_positions(&self) -> Vec<usize> {
        self.callouts.iter().map(|(position, _)| *position).collect()
    }

    pub(crate) fn fire_callouts(&self, cpu: &mut dyn CpuContext) {
        for (_, callout) in &self.callouts {
            callout(cpu);
        }
    }
}

impl InstructionStream for ScriptedStream {
    fn next_instruction(&mut self) -> Option<Instruction<'_>> {
        if self.cursor >= self.instructions.len() {
            return None;
        }
        self.cursor += 1;
        let (address, mnemonic, operands) = &self.instructions[self.cursor - 1];
        Some(Instruction {
            address: *address,
            mnemonic: mnemonic.as_str(),
            operands: operands.as_str(),
        })
    }

    fn keep(&mut self) {
        self.kept += 1;
    }

    fn put_callout(&mut self, callout: Callout) {
        // Attributed to the most recently fetched instruction.
        self.callouts.push((self.cursor - 1, callout));
    }
}

// Static Resolver

#[derive(Default)]
pub(crate) struct StaticResolver {
    symbols: HashMap<String, Vec<SymbolInfo>>,
    bases: HashMap<String, u64>,
    resolutions: HashMap<u64, ResolvedSymbol>,
}

impl StaticResolver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_symbol(&mut self, module: &str, symbol: SymbolInfo) {
        self.symbols.entry(module.to_string()).or_default().push(symbol);
    }

    pub(crate) fn add_base(&mut self, module: &str, base: u64) {
        self.bases.insert(module.to_string(), base);
    }

    pub(crate) fn add_resolution(&mut self, address: u64, symbol: ResolvedSymbol) {
        self.resolutions.insert(address, symbol);
    }
}

impl SymbolResolver for StaticResolver {
    fn resolve(&self, address: u64) -> Option<ResolvedSymbol> {
        self.resolutions.get(&address).cloned()
    }

    fn find_base_address(&self, module: &str) -> Option<u64> {
        self.bases.get(module).copied()
    }

    fn enumerate_symbols(&self, module: &str) -> Vec<SymbolInfo> {
        self.symbols.get(module).cloned().unwrap_or_default()
    }
}

// Manual Fault Hook

pub(crate) struct ManualFaultHook {
    handler: Mutex<Option<FaultHandler>>,
}

impl ManualFaultHook {
    pub(crate) fn new() -> Self {
        Self {
            handler: Mutex::new(None),
        }
    }

    /// Delivers a fault to the installed handler.
    pub(crate) fn fire(&self, details: &FaultDetails, cpu: &dyn CpuContext) -> FaultDisposition {
        let handler = self.handler.lock();
        let handler = handler.as_ref().expect("no fault handler installed");
        handler(details, cpu)
    }
}

impl FaultHook for ManualFaultHook {
    fn set_handler(&self, handler: FaultHandler) {
        *self.handler.lock() = Some(handler);
    }
}
