// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static descriptor tables, one per numbering space, sorted by number so
//! lookups can binary search.

macro_rules! desc {
    ($nr:expr, $name:literal) => {
        ($nr, SyscallDesc { name: $name, signature: "" })
    };
    ($nr:expr, $name:literal, $sig:literal) => {
        (
            $nr,
            SyscallDesc {
                name: $name,
                signature: $sig,
            },
        )
    };
}

pub(crate) use desc;

mod mach;
mod posix;

pub use mach::MACH_TRAPS;
pub use posix::POSIX_SYSCALLS;
