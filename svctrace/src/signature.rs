// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prototype parsing and argument decoding.
//!
//! Registry signatures look like `int open(char* path, int flags, int mode)`.
//! The table was scraped from kernel headers and carries the occasional typo,
//! so parsing has to fail usefully rather than assume well-formed input: a
//! bad signature costs the record its arguments, nothing more.

use std::fmt;

use thiserror::Error;

use crate::memory::{ProcessMemory, ReadString, STRING_READ_SIZE};

/// One formal parameter: declared type and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: String,
    pub name: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("missing parameter list")]
    MissingParameterList,
    #[error("unterminated parameter list")]
    UnterminatedParameterList,
    #[error("trailing text after parameter list: {0:?}")]
    TrailingText(String),
    #[error("missing return type or function name")]
    MissingPrototype,
    #[error("malformed parameter: {0:?}")]
    MalformedParameter(String),
}

/// Parses a prototype into its ordered parameter list.
///
/// Empty input is a valid prototype with no parameters, as is an empty list
/// between the parens. The return type and function name are validated but
/// not kept; only the parameters matter for rendering.
pub fn parse(signature: &str) -> Result<Vec<Parameter>, SignatureError> {
    let signature = signature.trim();
    if signature.is_empty() {
        return Ok(Vec::new());
    }

    let open = signature
        .find('(')
        .ok_or(SignatureError::MissingParameterList)?;
    let close = signature
        .rfind(')')
        .ok_or(SignatureError::UnterminatedParameterList)?;
    if close < open {
        return Err(SignatureError::UnterminatedParameterList);
    }

    let trailing = signature[close + 1..].trim();
    if !trailing.is_empty() {
        return Err(SignatureError::TrailingText(trailing.to_string()));
    }

    // Return type plus function name; a star stuck to the name still counts
    // as part of the same token here.
    if signature[..open].split_whitespace().count() < 2 {
        return Err(SignatureError::MissingPrototype);
    }

    let params = signature[open + 1..close].trim();
    if params.is_empty() {
        return Ok(Vec::new());
    }

    params.split(',').map(parse_parameter).collect()
}

fn parse_parameter(piece: &str) -> Result<Parameter, SignatureError> {
    let piece = piece.trim();
    let malformed = || SignatureError::MalformedParameter(piece.to_string());

    if piece == "..." {
        return Err(malformed());
    }

    let tokens: Vec<&str> = piece.split_whitespace().collect();
    let (name_token, type_tokens) = match tokens.split_last() {
        Some((last, rest)) if !rest.is_empty() => (*last, rest),
        _ => return Err(malformed()),
    };

    // `sem_t *sem` declares a pointer type; the star belongs to the type,
    // not the name.
    let name = name_token.trim_start_matches('*');
    if name.is_empty() {
        return Err(malformed());
    }

    let mut ty = type_tokens.join(" ");
    for _ in 0..name_token.len() - name.len() {
        ty.push('*');
    }

    Ok(Parameter {
        ty,
        name: name.to_string(),
    })
}

/// Decoded view of one argument register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    Int(i32),
    Uint(u32),
    Long(i64),
    Ulong(u64),
    Str { text: String, truncated: bool },
    Ptr(u64),
    Raw(u64),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Int(v) => write!(f, "{v}"),
            DisplayValue::Uint(v) => write!(f, "{v}"),
            DisplayValue::Long(v) => write!(f, "{v}"),
            DisplayValue::Ulong(v) => write!(f, "{v}"),
            DisplayValue::Str {
                text,
                truncated: false,
            } => write!(f, "{text:?}"),
            DisplayValue::Str {
                text,
                truncated: true,
            } => write!(f, "{text:?} ... (truncated)"),
            DisplayValue::Ptr(v) => write!(f, "0x{v:x}"),
            DisplayValue::Raw(v) => write!(f, "0x{v:x}"),
        }
    }
}

/// Decodes a register value according to its declared type.
///
/// `int` and `size_t` take the 32-bit signed view of the register, `uint`
/// the unsigned one; `long`/`ulong` use the full register width. `char*`
/// dereferences, capped at [`STRING_READ_SIZE`]; the remaining pointer
/// types render as addresses. Unknown types fall back to the raw register,
/// with a diagnostic when verbose.
pub fn decode(value: u64, ty: &str, memory: &dyn ProcessMemory, verbose: bool) -> DisplayValue {
    match ty {
        "int" | "size_t" => DisplayValue::Int(value as u32 as i32),
        "uint" => DisplayValue::Uint(value as u32),
        "long" => DisplayValue::Long(value as i64),
        "ulong" => DisplayValue::Ulong(value),
        "char*" => match memory.read_cstring(value, STRING_READ_SIZE) {
            Ok(ReadString::Terminated(bytes)) => DisplayValue::Str {
                text: String::from_utf8_lossy(&bytes).into_owned(),
                truncated: false,
            },
            Ok(ReadString::Truncated(bytes)) => DisplayValue::Str {
                text: String::from_utf8_lossy(&bytes).into_owned(),
                truncated: true,
            },
            Err(e) => {
                log::warn!("string argument at 0x{value:x} is unreadable: {e}");
                DisplayValue::Ptr(value)
            }
        },
        "int*" | "uint*" | "void*" => DisplayValue::Ptr(value),
        _ => {
            if verbose {
                log::warn!("unknown argument type {ty:?}");
            }
            DisplayValue::Raw(value)
        }
    }
}
