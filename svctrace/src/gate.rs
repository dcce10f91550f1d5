// SPDX-License-Identifier: MIT OR Apache-2.0

//! Arms tracing when the dynamic linker first touches the target module.
//!
//! The linker has no stable "module loaded" export to hook, but its image
//! bookkeeping does: every mapped image is probed through a containment
//! check that takes the image record and a candidate address. Hooking
//! those probe exports and resolving the address argument tells us which
//! module the linker is working on, and the first sighting of the target
//! is the moment to hook its initializer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context as _;

use crate::engine::{CpuContext, InstrumentationEngine, InvocationListener};
use crate::symbols::SymbolResolver;
use crate::tracing::ThreadFollowController;

/// Module name the marker exports are searched in.
pub const DYNAMIC_LINKER: &str = "dyld";

/// Name fragments an export must carry to be a containment probe.
const MARKER_FRAGMENTS: [&str; 2] = ["ImageLoader", "containsAddress"];

pub struct ModuleLoadGate {
    engine: Arc<dyn InstrumentationEngine>,
    resolver: Arc<dyn SymbolResolver>,
    controller: Arc<ThreadFollowController>,
    target_module: String,
    armed: Arc<AtomicBool>,
}

impl ModuleLoadGate {
    pub fn new(
        engine: Arc<dyn InstrumentationEngine>,
        resolver: Arc<dyn SymbolResolver>,
        controller: Arc<ThreadFollowController>,
        target_module: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            resolver,
            controller,
            target_module: target_module.into(),
            armed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Hooks every containment probe the linker exports and returns how
    /// many were hooked. Zero is not an error, but it means the gate will
    /// never arm, so it is logged.
    pub fn install(&self) -> anyhow::Result<usize> {
        let mut hooked = 0;

        for symbol in self.resolver.enumerate_symbols(DYNAMIC_LINKER) {
            if !MARKER_FRAGMENTS.iter().all(|f| symbol.name.contains(f)) {
                continue;
            }
            log::trace!("loader marker {} at 0x{:x}", symbol.name, symbol.address);

            let listener = MarkerListener {
                engine: self.engine.clone(),
                resolver: self.resolver.clone(),
                controller: self.controller.clone(),
                target_module: self.target_module.clone(),
                armed: self.armed.clone(),
            };
            self.engine
                .attach(symbol.address, Arc::new(listener))
                .with_context(|| format!("hooking loader export {}", symbol.name))?;
            hooked += 1;
        }

        if hooked == 0 {
            log::warn!("no loader marker export found in {DYNAMIC_LINKER}");
        }
        Ok(hooked)
    }

    /// True once the target's initializer has been hooked.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }
}

// Marker Listener
//
// Runs on every containment probe. Probes are hot linker paths, so the
// non-target cases bail as early as possible and only the first sighting
// of the target pays for the initializer hook.

struct MarkerListener {
    engine: Arc<dyn InstrumentationEngine>,
    resolver: Arc<dyn SymbolResolver>,
    controller: Arc<ThreadFollowController>,
    target_module: String,
    armed: Arc<AtomicBool>,
}

impl InvocationListener for MarkerListener {
    fn on_enter(&self, cpu: &mut dyn CpuContext) {
        if self.armed.load(Ordering::Acquire) {
            return;
        }

        let probed = cpu.arg(1);
        let Some(symbol) = self.resolver.resolve(probed) else {
            return;
        };
        if symbol.module.as_deref() != Some(self.target_module.as_str()) {
            return;
        }
        let Some(module_base) = self.resolver.find_base_address(&self.target_module) else {
            return;
        };

        // Concurrent probes can sight the target at the same time; the
        // swap picks one to do the hooking.
        if self.armed.swap(true, Ordering::AcqRel) {
            return;
        }

        log::info!(
            "{}: initializer {} at 0x{:x}",
            self.target_module,
            symbol.name.as_deref().unwrap_or("<unnamed>"),
            symbol.address
        );

        let listener = InitializerListener {
            controller: self.controller.clone(),
            module_base,
        };
        if let Err(e) = self.engine.attach(symbol.address, Arc::new(listener)) {
            log::warn!(
                "could not hook initializer of {}: {e}",
                self.target_module
            );
            self.armed.store(false, Ordering::Release);
        }
    }
}

// Initializer Listener
//
// Brackets the target's initializer: the calling thread is followed for
// exactly the initializer's extent.

struct InitializerListener {
    controller: Arc<ThreadFollowController>,
    module_base: u64,
}

impl InvocationListener for InitializerListener {
    fn on_enter(&self, cpu: &mut dyn CpuContext) {
        self.controller.start(cpu.thread_id(), self.module_base);
    }

    fn on_leave(&self, cpu: &mut dyn CpuContext) {
        self.controller.stop(cpu.thread_id());
    }
}
