// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared syscall-registry data for the svctrace engine.
//!
//! XNU on ARM64 dispatches two numbering spaces through the same selector
//! register: Mach traps carry negative numbers, BSD syscalls non-negative
//! ones. Lookups here are total; a number without an entry resolves to
//! [`UNKNOWN_SYSCALL`] rather than an error.

pub mod tables;

pub use tables::{MACH_TRAPS, POSIX_SYSCALLS};

/// One registry entry: syscall name plus its C-like prototype. The prototype
/// string may be empty when none is on record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyscallDesc {
    pub name: &'static str,
    pub signature: &'static str,
}

/// Descriptor returned for numbers that have no table entry.
pub const UNKNOWN_SYSCALL: SyscallDesc = SyscallDesc {
    name: "Unknown syscall",
    signature: "",
};

/// Which numbering space a raw selector value addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyscallSpace {
    /// Non-negative numbers, the BSD table.
    Posix,
    /// Negative numbers, the Mach trap table, keyed by magnitude.
    Mach,
}

fn search(table: &'static [(i64, SyscallDesc)], nr: i64) -> &'static SyscallDesc {
    match table.binary_search_by_key(&nr, |entry| entry.0) {
        Ok(idx) => &table[idx].1,
        Err(_) => &UNKNOWN_SYSCALL,
    }
}

/// Looks up a BSD syscall by number.
pub fn posix_syscall(nr: i64) -> &'static SyscallDesc {
    search(POSIX_SYSCALLS, nr)
}

/// Looks up a Mach trap by the magnitude of its negative number.
pub fn mach_trap(nr: i64) -> &'static SyscallDesc {
    search(MACH_TRAPS, nr)
}

/// Resolves a raw selector value to its numbering space and descriptor.
///
/// `i64::MIN` has no representable magnitude and resolves to the sentinel.
pub fn resolve(raw: i64) -> (SyscallSpace, &'static SyscallDesc) {
    if raw < 0 {
        let desc = i64::try_from(raw.unsigned_abs())
            .map(mach_trap)
            .unwrap_or(&UNKNOWN_SYSCALL);
        (SyscallSpace::Mach, desc)
    } else {
        (SyscallSpace::Posix, posix_syscall(raw))
    }
}
