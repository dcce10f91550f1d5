//! Turns kernel entries into log records.

use std::sync::Arc;

use svctrace_common::{resolve, SyscallDesc, SyscallSpace};

use crate::config::Config;
use crate::engine::CpuContext;
use crate::memory::ProcessMemory;
use crate::policy::{PolicyOutcome, PolicyRegistry};
use crate::signature;
use crate::sink::LogSink;

pub struct SyscallEventHandler {
    config: Config,
    memory: Arc<dyn ProcessMemory>,
    sink: Arc<dyn LogSink>,
    policies: PolicyRegistry,
}

impl SyscallEventHandler {
    pub fn new(
        config: Config,
        memory: Arc<dyn ProcessMemory>,
        sink: Arc<dyn LogSink>,
        policies: PolicyRegistry,
    ) -> Self {
        Self {
            config,
            memory,
            sink,
            policies,
        }
    }

    /// Callout target for every kernel entry a followed thread executes.
    ///
    /// Never fails: a bad signature or unreadable argument degrades the
    /// record, and a failing policy is logged and skipped. The record is
    /// emitted before any policy runs so it shows the caller's values.
    pub fn handle(&self, cpu: &mut dyn CpuContext) {
        // The selector is written as a 32-bit value; take the signed low
        // word no matter how the host widened the register.
        let nr = cpu.syscall_register() as u32 as i32 as i64;
        let (space, desc) = resolve(nr);

        if space == SyscallSpace::Mach && !self.config.log_mach_calls {
            return;
        }

        let arguments = self.render_arguments(desc, cpu);
        self.sink.line(&format!("{}({arguments})", desc.name));

        if let Some(policy) = self.policies.get(desc.name) {
            match policy.apply(cpu, self.memory.as_ref()) {
                Ok(PolicyOutcome::Rewritten { address, len }) => {
                    log::trace!("{}: rewrote {len} bytes at 0x{address:x}", desc.name);
                }
                Ok(PolicyOutcome::Unchanged) => {}
                Err(e) => log::warn!("policy for {} skipped: {e}", desc.name),
            }
        }
    }

    fn render_arguments(&self, desc: &SyscallDesc, cpu: &dyn CpuContext) -> String {
        if desc.signature.is_empty() {
            return String::new();
        }

        let params = match signature::parse(desc.signature) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("invalid signature for syscall {}: {e}", desc.name);
                return String::new();
            }
        };

        let mut rendered = Vec::with_capacity(params.len());
        for (index, param) in params.iter().enumerate() {
            let value = signature::decode(
                cpu.arg(index),
                &param.ty,
                self.memory.as_ref(),
                self.config.verbose,
            );
            rendered.push(format!("{}={value}", param.name));
        }

        rendered.join(", ")
    }
}
