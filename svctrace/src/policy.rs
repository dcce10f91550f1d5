// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pluggable per-syscall argument policies.
//!
//! A policy runs right after a record is emitted, so the record always shows
//! the values the caller passed. Policies are registered against exact
//! syscall names and resolved once per event.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::engine::CpuContext;
use crate::memory::{MemoryError, ProcessMemory, ReadString};

/// Cap when a policy needs a string's true length. Larger than the display
/// cap, since a rewrite must know where the original allocation ends.
const REWRITE_READ_CAP: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyOutcome {
    Unchanged,
    Rewritten { address: u64, len: usize },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolicyError {
    #[error("replacement is {replacement} bytes but the original only holds {original}")]
    ReplacementTooLong { replacement: usize, original: usize },
    #[error("original string at 0x{0:x} has no terminator within the read cap")]
    UnterminatedOriginal(u64),
    #[error(transparent)]
    Memory(#[from] MemoryError),
}

pub trait ArgumentPolicy: Send + Sync {
    fn apply(
        &self,
        cpu: &mut dyn CpuContext,
        memory: &dyn ProcessMemory,
    ) -> Result<PolicyOutcome, PolicyError>;
}

/// Policies keyed by exact syscall name.
#[derive(Default)]
pub struct PolicyRegistry {
    policies: HashMap<String, Arc<dyn ArgumentPolicy>>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, syscall: impl Into<String>, policy: Arc<dyn ArgumentPolicy>) {
        self.policies.insert(syscall.into(), policy);
    }

    pub fn get(&self, syscall: &str) -> Option<&Arc<dyn ArgumentPolicy>> {
        self.policies.get(syscall)
    }
}

/// Overwrites a string argument in place with a fixed replacement, leaving
/// excluded path prefixes alone.
///
/// The kernel only sees the rewrite because the write lands before the
/// trapping instruction resumes. The replacement plus terminator must fit
/// inside the original string's allocation; anything longer is refused
/// without touching memory.
pub struct PathRewritePolicy {
    arg_index: usize,
    replacement: String,
    exclude_prefixes: Vec<String>,
}

impl PathRewritePolicy {
    pub fn new(
        arg_index: usize,
        replacement: impl Into<String>,
        exclude_prefixes: Vec<String>,
    ) -> Self {
        Self {
            arg_index,
            replacement: replacement.into(),
            exclude_prefixes,
        }
    }
}

impl Default for PathRewritePolicy {
    /// Stock path rewrite: first argument, fixed replacement, system
    /// paths left untouched.
    fn default() -> Self {
        Self::new(
            0,
            "ModifiedString",
            vec![
                "/sbin/mount".to_string(),
                "/cores".to_string(),
                "/sbin".to_string(),
            ],
        )
    }
}

impl ArgumentPolicy for PathRewritePolicy {
    fn apply(
        &self,
        cpu: &mut dyn CpuContext,
        memory: &dyn ProcessMemory,
    ) -> Result<PolicyOutcome, PolicyError> {
        let address = cpu.arg(self.arg_index);

        let original = match memory.read_cstring(address, REWRITE_READ_CAP)? {
            ReadString::Terminated(bytes) => bytes,
            ReadString::Truncated(_) => return Err(PolicyError::UnterminatedOriginal(address)),
        };

        let text = String::from_utf8_lossy(&original);
        if self
            .exclude_prefixes
            .iter()
            .any(|prefix| text.starts_with(prefix.as_str()))
        {
            return Ok(PolicyOutcome::Unchanged);
        }

        if self.replacement.len() > original.len() {
            return Err(PolicyError::ReplacementTooLong {
                replacement: self.replacement.len(),
                original: original.len(),
            });
        }

        let mut patched = Vec::with_capacity(self.replacement.len() + 1);
        patched.extend_from_slice(self.replacement.as_bytes());
        patched.push(0);
        memory.write(address, &patched)?;

        Ok(PolicyOutcome::Rewritten {
            address,
            len: patched.len(),
        })
    }
}
