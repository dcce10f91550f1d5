// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wires the pieces together against a concrete platform.

use std::sync::Arc;

use crate::config::Config;
use crate::engine::InstrumentationEngine;
use crate::events::SyscallEventHandler;
use crate::faults::{install_fault_logger, FaultHook};
use crate::gate::ModuleLoadGate;
use crate::memory::ProcessMemory;
use crate::policy::PolicyRegistry;
use crate::sink::LogSink;
use crate::symbols::SymbolResolver;
use crate::tracing::{FollowMap, ThreadFollowController};

/// The platform services a tracer runs on. Embeddings construct this
/// from whatever instrumentation backend they sit on.
pub struct Platform {
    pub engine: Arc<dyn InstrumentationEngine>,
    pub resolver: Arc<dyn SymbolResolver>,
    pub memory: Arc<dyn ProcessMemory>,
    pub faults: Arc<dyn FaultHook>,
    pub sink: Arc<dyn LogSink>,
}

pub struct Tracer {
    platform: Platform,
    config: Config,
    controller: Arc<ThreadFollowController>,
    gate: ModuleLoadGate,
}

impl Tracer {
    pub fn new(platform: Platform, config: Config) -> Self {
        Self::with_policies(platform, config, PolicyRegistry::new())
    }

    pub fn with_policies(platform: Platform, config: Config, policies: PolicyRegistry) -> Self {
        let handler = Arc::new(SyscallEventHandler::new(
            config.clone(),
            platform.memory.clone(),
            platform.sink.clone(),
            policies,
        ));
        let controller = Arc::new(ThreadFollowController::new(
            platform.engine.clone(),
            handler,
            platform.sink.clone(),
            FollowMap::default(),
        ));
        let gate = ModuleLoadGate::new(
            platform.engine.clone(),
            platform.resolver.clone(),
            controller.clone(),
            config.target_module.clone(),
        );

        Self {
            platform,
            config,
            controller,
            gate,
        }
    }

    /// Installs the fault logger and the loader gate. Fails only on
    /// hook installation; everything past this point degrades instead
    /// of erroring.
    pub fn install(&self) -> anyhow::Result<()> {
        install_fault_logger(
            self.platform.faults.as_ref(),
            self.platform.engine.clone(),
            self.platform.resolver.clone(),
            self.platform.sink.clone(),
            self.config.backtrace_style,
        );

        if self.config.target_module.is_empty() {
            log::info!("no target module configured, loader gate disabled");
            return Ok(());
        }

        let hooked = self.gate.install()?;
        log::info!(
            "watching for {} through {hooked} loader hook(s)",
            self.config.target_module
        );
        Ok(())
    }

    pub fn controller(&self) -> &Arc<ThreadFollowController> {
        &self.controller
    }

    pub fn gate(&self) -> &ModuleLoadGate {
        &self.gate
    }
}
