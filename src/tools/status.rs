//! CupCount Status Tool
//!
//! Provides runtime status information about the CupCount service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage instructions for AI assistants
pub const USAGE_INSTRUCTIONS: &str = r#"
# CupCount Usage Instructions

CupCount answers "how many containers of this ingredient is my amount?"
(for example: how many shot glasses is 34 g of sugar).

## The Screen

The server holds one calculator screen with four inputs:

| Input | Tool | Default |
|-------|------|---------|
| Phase (solid / liquid) | `toggle_phase`, `set_phase` | liquid |
| Ingredient (solid only) | `select_ingredient`, `clear_ingredient` | none |
| Container | `select_container` | option1 (Bottle Cap) |
| Amount | `set_amount` | empty |

Then call `calculate`. The result replaces the previous one. `get_form` shows
the whole screen, `reset_form` restores the defaults.

## Units

- **Solid**: the amount is in **grams**. An ingredient is required, its
  density converts grams to milliliters.
- **Liquid**: the amount is in **milliliters**. The ingredient is ignored.

## Containers

| Id | Alias | Label | Volume |
|----|-------|-------|--------|
| option1 | bottle-cap | Bottle Cap | 5 ml |
| option2 | shot-glass | Shot Glass | 40 ml |
| option3 | plastic-cup | Plastic Cup | 200 ml |

## Ingredients

Call `list_ingredients` for ids and densities (sugar, flour, butter, yeast).

## Results

A number with one decimal (e.g. `1.0`), or one of:

- `Invalid amount!` - amount empty, not a number, or zero
- `No measurement selected!` - container id not recognised
- `No ingredient selected!` - solid phase without a known ingredient

These are normal results, not tool errors. Report them to the user verbatim.

## One-shot Conversion

`convert` takes all four inputs at once and does not touch the screen.
"#;

/// Runtime status of the CupCount service
#[derive(Debug, Clone, Serialize)]
pub struct CupcountStatus {
    pub version: &'static str,
    pub catalog: String,
    /// RFC 3339 time the server started
    pub started_at: String,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn get_status(&self) -> CupcountStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        CupcountStatus {
            version: build_info.version,
            catalog: build_info.summary(),
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
