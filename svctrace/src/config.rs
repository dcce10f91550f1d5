// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::engine::BacktraceStyle;

/// Runtime knobs, normally injected by the host; `from_env` exists for
/// hosts that just want environment-driven setup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether Mach traps (negative numbers) produce records at all.
    pub log_mach_calls: bool,
    /// Emit diagnostics for argument types the decoder does not know.
    pub verbose: bool,
    /// Stack-walk flavor used by fault reports.
    pub backtrace_style: BacktraceStyle,
    /// Module whose initializer opens the tracing window. Empty disables
    /// the loader gate.
    pub target_module: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_mach_calls: true,
            verbose: false,
            backtrace_style: BacktraceStyle::default(),
            target_module: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_mach_calls: bool_from_env("SVCTRACE_LOG_MACH", true),
            verbose: bool_from_env("SVCTRACE_VERBOSE", false),
            backtrace_style: backtrace_style_from_env(),
            target_module: std::env::var("SVCTRACE_TARGET_MODULE").unwrap_or_default(),
        }
    }
}

fn bool_from_env(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => value == "1" || value.eq_ignore_ascii_case("true"),
        Err(_) => default,
    }
}

fn backtrace_style_from_env() -> BacktraceStyle {
    match std::env::var("SVCTRACE_BACKTRACE") {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "" | "accurate" => BacktraceStyle::Accurate,
            "fuzzy" => BacktraceStyle::Fuzzy,
            other => {
                log::warn!("unrecognized backtrace style {other:?}, using accurate");
                BacktraceStyle::Accurate
            }
        },
        Err(_) => BacktraceStyle::Accurate,
    }
}
