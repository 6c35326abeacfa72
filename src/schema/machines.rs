use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Schema for the canonical machine naming table.
#[derive(Debug, Deserialize)]
pub struct MachinesSchema {
    pub machines: HashMap<String, MachineEntry>,
}

impl MachinesSchema {
    pub fn schema() -> &'static MachinesSchema {
        static SCHEMA: OnceLock<MachinesSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            serde_json::from_str(include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/json/arch/machines.json"
            )))
            .expect("Failed to load machines.json")
        })
    }
}

/// Defines one canonical machine architecture.
#[derive(Debug, Deserialize)]
pub struct MachineEntry {
    /// The architecture family this machine belongs to, e.g. `x86` for
    /// both `x86` and `x86_64`.
    pub family: String,

    /// Pointer width of the architecture in bits.
    pub bits: u32,

    /// Other identifiers operating systems report for this machine.
    #[serde(default, deserialize_with = "super::zero_one_many_string")]
    pub aliases: Vec<String>,
}
