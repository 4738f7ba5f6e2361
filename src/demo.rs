use std::io::Write;

use serde::Serialize;

use crate::data_structures::{HeapSnapshot, LinkedMinHeap};
use crate::generators::{random_bounded, seeded_rng};

/// Configuration for the demo driver
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub count: usize,
    pub upper_bound: i64,
    pub seed: Option<u64>,
    pub json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: 64,
            upper_bound: 100,
            seed: None,
            json: false,
        }
    }
}

impl DemoConfig {
    /// Reads `[count] [upper_bound] [seed]` positionally; `--json` anywhere
    /// switches the output format
    ///
    /// Values that fail to parse keep their defaults.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = DemoConfig::default();
        let mut positional = Vec::new();
        for arg in args {
            if arg == "--json" {
                config.json = true;
            } else {
                positional.push(arg);
            }
        }

        if let Some(count) = positional.first() {
            config.count = count.parse().unwrap_or(config.count);
        }
        if let Some(bound) = positional.get(1) {
            config.upper_bound = bound
                .parse()
                .ok()
                .filter(|b: &i64| *b > 0)
                .unwrap_or(config.upper_bound);
        }
        if let Some(seed) = positional.get(2) {
            config.seed = seed.parse().ok();
        }
        config
    }
}

/// What the demo did, for `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub before: HeapSnapshot<i64>,
    pub extracted: i64,
    pub after: HeapSnapshot<i64>,
}

/// Fills a heap with random values, prints it, extracts the minimum and
/// prints it again
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<i64, Box<dyn std::error::Error>> {
    let mut rng = seeded_rng(config.seed);
    let values = random_bounded(config.count, config.upper_bound, &mut rng);

    let mut heap = LinkedMinHeap::with_capacity(values.len());
    heap.extend(values);
    log::info!("built heap of {} values ({} levels)", heap.len(), heap.height());

    if config.json {
        let before = heap.snapshot();
        let extracted = heap.extract_min()?;
        let report = DemoReport {
            before,
            extracted,
            after: heap.snapshot(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(extracted);
    }

    writeln!(out, "Min heap:")?;
    heap.write_tree(out)?;
    writeln!(out)?;

    let extracted = heap.extract_min()?;
    writeln!(out, "Extracted minimum: {}", extracted)?;

    writeln!(out, "Min heap after extraction:")?;
    heap.write_tree(out)?;

    Ok(extracted)
}
