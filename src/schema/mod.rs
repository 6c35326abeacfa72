//! Types and functions to manipulate the contents of the machine naming
//! data file.
//!
//! These are encoding the rules of the corresponding schema as Rust data
//! types with the help of `serde` deserialization.

use serde::de;
use serde::Deserializer;

mod machines;

pub use machines::*;

/// Deserialization helper to map {null, string, [string]} to a sequence of strings.
fn zero_one_many_string<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct Vtor;

    impl<'de> de::Visitor<'de> for Vtor {
        type Value = Vec<String>;

        fn expecting(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
            fmt.write_str("a null or a loose element or a sequence")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![])
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut v = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(a) = access.next_element()? {
                v.push(a);
            }

            Ok(v)
        }
    }

    deserializer.deserialize_any(Vtor)
}

#[cfg(test)]
mod tests {
    use crate::schema::machines::MachinesSchema;

    #[test]
    fn show_machines_json() {
        println!("{:#?}", MachinesSchema::schema());
    }

    #[test]
    fn every_alias_resolves_to_one_machine() {
        let schema = MachinesSchema::schema();
        for (name, entry) in &schema.machines {
            for alias in &entry.aliases {
                assert!(
                    !schema.machines.contains_key(alias),
                    "alias {} of {} shadows a canonical machine",
                    alias,
                    name
                );
                let owners = schema
                    .machines
                    .values()
                    .filter(|other| other.aliases.iter().any(|a| a == alias))
                    .count();
                assert_eq!(owners, 1, "alias {} is claimed by {} machines", alias, owners);
            }
        }
    }
}
