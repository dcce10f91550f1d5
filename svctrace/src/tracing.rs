//! Follows threads through the instrumentation engine and plants a
//! callout on every kernel entry they execute.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::engine::{InstructionStream, InstructionTransform, InstrumentationEngine};
use crate::events::SyscallEventHandler;
use crate::sink::LogSink;

/// Threads currently followed, keyed by thread id. The value is the base
/// address of the module whose initializer pulled the thread in, so call
/// sites can be printed relative to it. Shared with whoever constructed
/// the controller so an embedding can inspect or drain it.
pub type FollowMap = Arc<Mutex<HashMap<u64, u64>>>;

/// Mnemonic of the AArch64 instruction that enters the kernel.
pub const KERNEL_ENTRY_MNEMONIC: &str = "svc";

// Thread Follow Controller
//
// start() and stop() are idempotent per thread and safe to race: the map
// insert decides which caller wins, and everything after the insert
// happens exactly once per transition.

pub struct ThreadFollowController {
    engine: Arc<dyn InstrumentationEngine>,
    handler: Arc<SyscallEventHandler>,
    sink: Arc<dyn LogSink>,
    followed: FollowMap,
}

impl ThreadFollowController {
    pub fn new(
        engine: Arc<dyn InstrumentationEngine>,
        handler: Arc<SyscallEventHandler>,
        sink: Arc<dyn LogSink>,
        followed: FollowMap,
    ) -> Self {
        Self {
            engine,
            handler,
            sink,
            followed,
        }
    }

    /// Begins following `tid`. Call sites are rendered relative to
    /// `module_base`. A thread that is already followed is left alone.
    pub fn start(&self, tid: u64, module_base: u64) {
        {
            let mut followed = self.followed.lock();
            if followed.contains_key(&tid) {
                return;
            }
            followed.insert(tid, module_base);
        }

        self.sink.line(&format!("[+] Following thread {tid}"));

        let transform = KernelEntryTransform {
            handler: self.handler.clone(),
            sink: self.sink.clone(),
            module_base,
        };
        if let Err(e) = self.engine.follow_thread(tid, Box::new(transform)) {
            log::warn!("could not follow thread {tid}: {e}");
            self.followed.lock().remove(&tid);
        }
    }

    /// Stops following `tid` and releases the engine's bookkeeping for
    /// it. A thread that is not followed is left alone.
    pub fn stop(&self, tid: u64) {
        if self.followed.lock().remove(&tid).is_none() {
            return;
        }

        self.sink.line(&format!("[+] Unfollowing thread {tid}"));

        if let Err(e) = self.engine.unfollow_thread(tid) {
            log::warn!("could not unfollow thread {tid}: {e}");
        }
        self.engine.garbage_collect();
    }

    pub fn is_followed(&self, tid: u64) -> bool {
        self.followed.lock().contains_key(&tid)
    }
}

// Kernel Entry Transform
//
// Walks the instruction stream of a followed thread. Every instruction is
// kept as-is; kernel entries additionally get their site printed and a
// callout planted so the event handler runs with the caller's registers.

struct KernelEntryTransform {
    handler: Arc<SyscallEventHandler>,
    sink: Arc<dyn LogSink>,
    module_base: u64,
}

impl InstructionTransform for KernelEntryTransform {
    fn transform(&self, stream: &mut dyn InstructionStream) {
        loop {
            let site = match stream.next_instruction() {
                Some(ins) if ins.mnemonic == KERNEL_ENTRY_MNEMONIC => Some(format!(
                    "0x{:x}   {} {}",
                    ins.address.wrapping_sub(self.module_base),
                    ins.mnemonic,
                    ins.operands
                )),
                Some(_) => None,
                None => break,
            };

            if let Some(site) = site {
                self.sink.line(&site);
                let handler = self.handler.clone();
                stream.put_callout(Arc::new(move |cpu| handler.handle(cpu)));
            }
            stream.keep();
        }
    }
}
