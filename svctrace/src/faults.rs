// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reports faults the traced code trips over, with a symbolized
//! backtrace, then lets the process's own handling take over.

use std::sync::Arc;

use crate::engine::{BacktraceStyle, CpuContext, InstrumentationEngine};
use crate::sink::LogSink;
use crate::symbols::SymbolResolver;

/// What the process-level fault hook should do after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultDisposition {
    /// The fault was fixed up; resume the faulting thread.
    Handled,
    /// Pass the fault on to the next handler in line.
    NotHandled,
}

/// A fault as delivered by the platform hook.
#[derive(Debug, Clone)]
pub struct FaultDetails {
    /// Platform name for the fault kind, for example "access-violation".
    pub kind: String,
    /// Address the faulting access touched.
    pub address: u64,
}

pub type FaultHandler =
    Box<dyn Fn(&FaultDetails, &dyn CpuContext) -> FaultDisposition + Send + Sync>;

/// Process-wide fault hook. At most one handler is active at a time;
/// installing a new one replaces the old.
pub trait FaultHook: Send + Sync {
    fn set_handler(&self, handler: FaultHandler);
}

/// Installs a handler that writes the fault and a backtrace of the
/// faulting thread to `sink`. The handler never claims the fault, so
/// crash reporting behaves as if it were not there.
pub fn install_fault_logger(
    hook: &dyn FaultHook,
    engine: Arc<dyn InstrumentationEngine>,
    resolver: Arc<dyn SymbolResolver>,
    sink: Arc<dyn LogSink>,
    style: BacktraceStyle,
) {
    hook.set_handler(Box::new(move |details, cpu| {
        sink.line(&format!("{} @ 0x{:x}", details.kind, details.address));
        for frame in engine.backtrace(cpu, style) {
            sink.line(&describe_frame(frame, resolver.as_ref()));
        }
        FaultDisposition::NotHandled
    }));
}

fn describe_frame(address: u64, resolver: &dyn SymbolResolver) -> String {
    let Some(symbol) = resolver.resolve(address) else {
        return format!("0x{address:x}");
    };
    match (symbol.module, symbol.name) {
        (Some(module), Some(name)) => format!("0x{address:x} {module}!{name}"),
        (Some(module), None) => format!("0x{address:x} {module}"),
        (None, Some(name)) => format!("0x{address:x} {name}"),
        (None, None) => format!("0x{address:x}"),
    }
}
