//! Entity validation.
//!
//! The lattice generator treats its input as valid and has no error path, so
//! everything it relies on is checked here, once, when an [`EntitySpec`] is
//! constructed.

use crate::error::SchemaError;
use crate::types::{EntitySpec, MAX_FIELDS};
use std::collections::{HashSet, VecDeque};

/// Validates an entity description.
///
/// # Errors
/// Returns `SchemaError` if the entity name or a field name is empty, if a
/// field name is duplicated, if the entity has more than [`MAX_FIELDS`]
/// fields, or if two different field subsets would share a canonical name.
pub fn validate_entity(entity: &EntitySpec) -> Result<(), SchemaError> {
    if entity.name().is_empty() {
        return Err(SchemaError::EmptyEntityName);
    }

    if entity.len() > MAX_FIELDS {
        return Err(SchemaError::TooManyFields {
            entity: entity.name().to_string(),
            count: entity.len(),
            limit: MAX_FIELDS,
        });
    }

    validate_field_names(entity)?;
    validate_state_names(entity)?;
    Ok(())
}

/// Checks that field names are non-empty and unique.
fn validate_field_names(entity: &EntitySpec) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for field in entity.fields() {
        if field.name.is_empty() {
            return Err(SchemaError::EmptyFieldName {
                entity: entity.name().to_string(),
            });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                entity: entity.name().to_string(),
                field: field.name.clone(),
            });
        }
    }

    Ok(())
}

/// Checks that canonical state names are injective.
///
/// Two distinct subsets can only collide if their smallest members differ and
/// the display name of one is a prefix of the other's. Each such pair seeds a
/// search over the finite space of (last index on each side, pending suffix).
fn validate_state_names(entity: &EntitySpec) -> Result<(), SchemaError> {
    let names: Vec<String> = entity.fields().iter().map(|f| f.display_name()).collect();

    for (short, short_name) in names.iter().enumerate() {
        for (long, long_name) in names.iter().enumerate() {
            if short == long || !long_name.starts_with(short_name.as_str()) {
                continue;
            }
            if names_collide(&names, short, long) {
                return Err(SchemaError::AmbiguousStateName {
                    entity: entity.name().to_string(),
                    first: entity.fields()[short].name.clone(),
                    second: entity.fields()[long].name.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Searches for two increasing index sequences, one starting at `short` and
/// one at `long`, whose concatenated names are equal.
fn names_collide(names: &[String], short: usize, long: usize) -> bool {
    let rest = &names[long][names[short].len()..];
    if rest.is_empty() {
        return true;
    }

    // (last index of the side that is ahead, last index of the side behind, unmatched text)
    let mut seen: HashSet<(usize, usize, String)> = HashSet::new();
    let mut queue = VecDeque::from([(long, short, rest.to_string())]);

    while let Some((ahead, behind, pending)) = queue.pop_front() {
        if !seen.insert((ahead, behind, pending.clone())) {
            continue;
        }

        for (next, word) in names.iter().enumerate().skip(behind + 1) {
            if *word == pending {
                return true;
            }
            if let Some(tail) = pending.strip_prefix(word.as_str()) {
                queue.push_back((ahead, next, tail.to_string()));
            } else if let Some(tail) = word.strip_prefix(pending.as_str()) {
                queue.push_back((next, ahead, tail.to_string()));
            }
        }
    }

    false
}
