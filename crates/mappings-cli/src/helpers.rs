use mappings_core::canonical::stable_json_bytes;
use serde_json::Value;

#[derive(Debug, Clone, Copy)]
pub(crate) struct OutputMode {
    pub json: bool,
    pub quiet: bool,
    pub verbose: u8,
}

/// Prints a command payload. `--quiet` suppresses success output only;
/// failure payloads always reach stdout so CI logs carry the violations.
pub(crate) fn emit_payload(output_mode: OutputMode, ok: bool, payload: Value) {
    if ok && output_mode.quiet {
        return;
    }
    let rendered = if output_mode.json {
        stable_json_bytes(&payload)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
    } else {
        serde_json::to_string_pretty(&payload).ok()
    };
    if let Some(text) = rendered {
        println!("{text}");
    }
}
