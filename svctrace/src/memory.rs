// SPDX-License-Identifier: MIT OR Apache-2.0

//! Access to the traced process's address space.

use thiserror::Error;

/// Cap on string reads done for display purposes.
pub const STRING_READ_SIZE: usize = 128;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    #[error("unreadable memory at 0x{0:x}")]
    Unreadable(u64),
    #[error("unwritable memory at 0x{0:x}")]
    Unwritable(u64),
}

/// Outcome of a capped C-string read. The bytes never include the
/// terminator; `Truncated` means the cap was hit before one was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadString {
    Terminated(Vec<u8>),
    Truncated(Vec<u8>),
}

impl ReadString {
    pub fn bytes(&self) -> &[u8] {
        match self {
            ReadString::Terminated(bytes) | ReadString::Truncated(bytes) => bytes,
        }
    }
}

pub trait ProcessMemory: Send + Sync {
    fn read(&self, address: u64, out: &mut [u8]) -> Result<(), MemoryError>;

    fn write(&self, address: u64, bytes: &[u8]) -> Result<(), MemoryError>;

    /// Reads a NUL-terminated string byte by byte, stopping at `max_len`
    /// bytes. Byte-wise reads keep a terminator just before an unmapped page
    /// from turning into a spurious failure.
    fn read_cstring(&self, address: u64, max_len: usize) -> Result<ReadString, MemoryError> {
        let mut bytes = Vec::new();
        let mut byte = [0u8; 1];

        for offset in 0..max_len as u64 {
            self.read(address.wrapping_add(offset), &mut byte)?;

            if byte[0] == 0 {
                return Ok(ReadString::Terminated(bytes));
            }

            bytes.push(byte[0]);
        }

        Ok(ReadString::Truncated(bytes))
    }
}
