//! # typestep Bench
//!
//! Benchmarking utilities for typestep lattice generation and rendering.

use typestep_schema::{EntitySpec, FieldSpec, SchemaError};

/// Field counts measured by the benchmarks.
pub const FIELD_COUNTS: [usize; 5] = [2, 4, 6, 8, 10];

/// Builds an entity with `n` fields where every `required_every`th field is
/// required and the rest are optional.
///
/// # Errors
/// Returns `SchemaError` if `n` exceeds the field cap.
pub fn synthetic_entity(n: usize, required_every: usize) -> Result<EntitySpec, SchemaError> {
    let fields = (0..n)
        .map(|i| {
            let name = format!("field_{:02}", i);
            if required_every != 0 && i % required_every == 0 {
                FieldSpec::required(name, "u64")
            } else {
                FieldSpec::optional(name, "Option<String>")
            }
        })
        .collect();

    EntitySpec::new("Synthetic", fields)
}

/// Source text of a file declaring one tagged struct with `n` fields.
#[must_use]
pub fn synthetic_source(n: usize) -> String {
    let mut source = String::from("pub struct Synthetic {\n");
    for i in 0..n {
        let marker = if i % 2 == 0 { "#[builder]" } else { "#[builder(opt)]" };
        source.push_str(&format!("    {}\n    field_{:02}: u64,\n", marker, i));
    }
    source.push_str("}\n");
    source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_entity() {
        let entity = synthetic_entity(5, 2).expect("valid entity");
        assert_eq!(entity.len(), 5);
        assert_eq!(entity.required_indices().collect::<Vec<_>>(), vec![0, 2, 4]);
    }

    #[test]
    fn test_synthetic_source_parses() {
        let extraction = typestep_schema::describe_tagged_structs(
            &synthetic_source(4),
            &typestep_schema::ExtractConfig::default(),
        )
        .expect("parses");
        assert_eq!(extraction.entities.len(), 1);
        assert_eq!(extraction.entities[0].len(), 4);
    }
}
