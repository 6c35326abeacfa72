use crate::schema::MachinesSchema;
use itertools::Itertools;
use std::fmt;

/// The architecture of a host machine.
///
/// Carries both the identifier exactly as the operating system reported it
/// and the canonical spelling from the bundled naming table. The two differ
/// on systems that use their own names for an architecture, e.g. macOS
/// reports `arm64` for what the table calls `aarch64`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Machine {
    name: String,
    reported: String,
    family: Option<String>,
    bits: Option<u32>,
    pub(crate) translated: bool,
}

impl Machine {
    /// Resolves an OS-reported machine identifier against the naming table.
    ///
    /// A string the table does not know passes through as a generic machine
    /// rather than an error.
    pub fn from_reported(reported: &str) -> Machine {
        let schema = MachinesSchema::schema();

        if let Some(entry) = schema.machines.get(reported) {
            return Machine {
                name: reported.to_string(),
                reported: reported.to_string(),
                family: Some(entry.family.clone()),
                bits: Some(entry.bits),
                translated: false,
            };
        }

        let alias_match = schema
            .machines
            .iter()
            .find(|(_, entry)| entry.aliases.iter().any(|alias| alias == reported));
        if let Some((name, entry)) = alias_match {
            return Machine {
                name: name.clone(),
                reported: reported.to_string(),
                family: Some(entry.family.clone()),
                bits: Some(entry.bits),
                translated: false,
            };
        }

        Machine::generic(reported)
    }

    /// Constructs a machine the naming table knows nothing about.
    pub fn generic(name: &str) -> Machine {
        Machine {
            name: name.to_string(),
            reported: name.to_string(),
            family: None,
            bits: None,
            translated: false,
        }
    }

    /// The canonical architecture name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The identifier exactly as the operating system reported it.
    pub fn reported(&self) -> &str {
        &self.reported
    }

    /// The architecture family, if the naming table knows this machine.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Pointer width in bits, if the naming table knows this machine.
    pub fn bits(&self) -> Option<u32> {
        self.bits
    }

    /// Whether the reported identifier describes an emulated machine
    /// (Rosetta 2 translation on macOS).
    pub fn is_translated(&self) -> bool {
        self.translated
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The canonical architecture names from the bundled table, sorted.
pub fn known_architectures() -> Vec<&'static str> {
    MachinesSchema::schema()
        .machines
        .keys()
        .map(String::as_str)
        .sorted()
        .collect()
}
