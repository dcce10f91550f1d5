// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared doubles for the integration tests, built purely on the crate's
//! public seams.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use svctrace::{
    BacktraceStyle, Callout, Config, CpuContext, EngineError, FaultDetails, FaultDisposition,
    FaultHandler, FaultHook, Instruction, InstructionStream, InstructionTransform,
    InstrumentationEngine, InvocationListener, LogSink, MemoryError, Platform, PolicyRegistry,
    ProcessMemory, ResolvedSymbol, SymbolInfo, SymbolResolver, Tracer,
};

pub const PAYLOAD_MODULE: &str = "payload.dylib";
pub const PAYLOAD_BASE: u64 = 0x4_0000;
pub const INITIALIZER: u64 = 0x4_2000;
pub const MARKER_EXPORT: u64 = 0x7000_1000;

pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

// A resolver that knows the linker's containment probe and the payload's
// initializer, which is all the loader gate needs.
pub fn payload_resolver() -> TableResolver {
    let mut resolver = TableResolver::default();
    resolver.add_symbol(
        "dyld",
        SymbolInfo {
            name: "__ZNK11ImageLoader15containsAddressEPKv".into(),
            address: MARKER_EXPORT,
        },
    );
    resolver.add_base(PAYLOAD_MODULE, PAYLOAD_BASE);
    resolver.add_resolution(
        INITIALIZER,
        ResolvedSymbol {
            module: Some(PAYLOAD_MODULE.into()),
            name: Some("_payload_init".into()),
            address: INITIALIZER,
        },
    );
    resolver
}

pub struct Harness {
    pub tracer: Tracer,
    pub engine: Arc<RecordingEngine>,
    pub memory: Arc<RegionMemory>,
    pub sink: Arc<CapturedSink>,
    pub faults: Arc<HookCell>,
}

pub fn harness(config: Config, policies: PolicyRegistry, resolver: TableResolver) -> Harness {
    let engine = Arc::new(RecordingEngine::default());
    let memory = Arc::new(RegionMemory::new());
    let sink = Arc::new(CapturedSink::default());
    let faults = Arc::new(HookCell::default());

    let platform = Platform {
        engine: engine.clone(),
        resolver: Arc::new(resolver),
        memory: memory.clone(),
        faults: faults.clone(),
        sink: sink.clone(),
    };
    let tracer = Tracer::with_policies(platform, config, policies);

    Harness {
        tracer,
        engine,
        memory,
        sink,
        faults,
    }
}

/// Fires the linker's containment probe with `probed` in the address
/// argument, as dyld would during image bookkeeping.
pub fn probe_image(harness: &Harness, probed: u64) {
    let listener = harness.engine.listener_at(MARKER_EXPORT);
    let mut cpu = FakeCpu::new(1);
    cpu.set_arg(1, probed);
    listener.on_enter(&mut cpu);
}

// Captured Sink

#[derive(Default)]
pub struct CapturedSink {
    lines: Mutex<Vec<String>>,
}

impl CapturedSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl LogSink for CapturedSink {
    fn line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

// Region Memory
//
// 64 KiB mapped at address zero; everything else faults.

pub struct RegionMemory {
    bytes: Mutex<Vec<u8>>,
}

impl RegionMemory {
    const LEN: usize = 64 * 1024;

    pub fn new() -> Self {
        Self {
            bytes: Mutex::new(vec![0; Self::LEN]),
        }
    }

    pub fn place_str(&self, address: u64, text: &str) {
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(0);
        self.write(address, &bytes).unwrap();
    }

    pub fn snapshot(&self, address: u64, len: usize) -> Vec<u8> {
        let start = address as usize;
        self.bytes.lock()[start..start + len].to_vec()
    }

    fn span(address: u64, len: usize) -> Option<std::ops::Range<usize>> {
        let start = usize::try_from(address).ok()?;
        let end = start.checked_add(len)?;
        (end <= Self::LEN).then_some(start..end)
    }
}

impl ProcessMemory for RegionMemory {
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

// Fake Cpu

pub struct FakeCpu {
    tid: u64,
    syscall: u64,
    args: [u64; 8],
}

impl FakeCpu {
    pub fn new(tid: u64) -> Self {
        Self {
            tid,
            syscall: 0,
            args: [0; 8],
        }
    }

    pub fn with_syscall(tid: u64, nr: i64, args: &[u64]) -> Self {
        let mut cpu = Self::new(tid);
        cpu.syscall = nr as u64;
        for (slot, value) in cpu.args.iter_mut().zip(args) {
            *slot = *value;
        }
        cpu
    }
}

impl CpuContext for FakeCpu {
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

// Recording Engine

#[derive(Default)]
pub struct RecordingEngine {
    follows: Mutex<Vec<u64>>,
    unfollows: Mutex<Vec<u64>>,
    collects: AtomicUsize,
    attaches: Mutex<Vec<(u64, Arc<dyn InvocationListener>)>>,
    transforms: Mutex<Vec<(u64, Box<dyn InstructionTransform>)>>,
    frames: Mutex<Vec<u64>>,
}

impl RecordingEngine {
    pub fn follows(&self) -> Vec<u64> {
        self.follows.lock().clone()
    }

    pub fn unfollows(&self) -> Vec<u64> {
        self.unfollows.lock().clone()
    }

    pub fn collect_count(&self) -> usize {
        self.collects.load(Ordering::SeqCst)
    }

    pub fn attach_addresses(&self) -> Vec<u64> {
        self.attaches.lock().iter().map(|(a, _)| *a).collect()
    }

    pub fn listener_at(&self, address: u64) -> Arc<dyn InvocationListener> {
        self.attaches
            .lock()
            .iter()
            .find(|(a, _)| *a == address)
            .map(|(_, listener)| listener.clone())
            .expect("no listener attached at address")
    }

    pub fn take_transform(&self, tid: u64) -> Box<dyn InstructionTransform> {
        let mut transforms = self.transforms.lock();
        let index = transforms
            .iter()
            .position(|(t, _)| *t == tid)
            .expect("no transform recorded for thread");
        transforms.remove(index).1
    }

    pub fn set_backtrace(&self, frames: &[u64]) {
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
        self.attaches.lock().push((address, listener));
        Ok(())
    }

    fn backtrace(&self, _cpu: &dyn CpuContext, _style: BacktraceStyle) -> Vec<u64> {
        self.frames.lock().clone()
    }
}

// Scripted Stream

pub struct ScriptedStream {
    instructions: Vec<(u64, String, String)>,
    cursor: usize,
    kept: usize,
    callouts: Vec<(usize, Callout)>,
}

impl ScriptedStream {
    pub fn new(script: &[(u64, &str, &str)]) -> Self {
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

    pub fn kept(&self) -> usize {
        self.kept
    }

    pub fn callout_positions(&self) -> Vec<usize> {
        self.callouts.iter().map(|(position, _)| *position).collect()
    }

    pub fn fire_callouts(&self, cpu: &mut dyn CpuContext) {
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
        self.callouts.push((self.cursor - 1, callout));
    }
}

// Table Resolver

#[derive(Default)]
pub struct TableResolver {
    symbols: HashMap<String, Vec<SymbolInfo>>,
    bases: HashMap<String, u64>,
    resolutions: HashMap<u64, ResolvedSymbol>,
}

impl TableResolver {
    pub fn add_symbol(&mut self, module: &str, symbol: SymbolInfo) {
        self.symbols.entry(module.to_string()).or_default().push(symbol);
    }

    pub fn add_base(&mut self, module: &str, base: u64) {
        self.bases.insert(module.to_string(), base);
    }

    pub fn add_resolution(&mut self, address: u64, symbol: ResolvedSymbol) {
        self.resolutions.insert(address, symbol);
    }
}

impl SymbolResolver for TableResolver {
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

// Hook Cell

#[derive(Default)]
pub struct HookCell {
    handler: Mutex<Option<FaultHandler>>,
}

impl HookCell {
    pub fn fire(&self, details: &FaultDetails, cpu: &dyn CpuContext) -> FaultDisposition {
        let handler = self.handler.lock();
        let handler = handler.as_ref().expect("no fault handler installed");
        handler(details, cpu)
    }
}

impl FaultHook for HookCell {
    fn set_handler(&self, handler: FaultHandler) {
        *self.handler.lock() = Some(handler);
    }
}
