//! Validation rules for fetched entities.

use crate::core::Entity;
use crate::validation::violations::PayloadViolation;
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of validating one entity.
pub type PayloadValidation = Validation<(), NonEmptyVec<PayloadViolation>>;

/// Validate an entity, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if every rule passes, otherwise a
/// `Validation::Failure` holding every violation found.
pub fn validate_entity(entity: &Entity) -> PayloadValidation {
    let mut checks: Vec<PayloadValidation> = Vec::new();

    checks.push(if entity.name.trim().is_empty() {
        Validation::fail(PayloadViolation::EmptyName)
    } else {
        Validation::success(())
    });

    for (index, stat) in entity.stats.iter().enumerate() {
        if stat.name().trim().is_empty() {
            checks.push(Validation::fail(PayloadViolation::EmptyStatName { index }));
        }
    }

    // Report each repeated name once
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    for stat in &entity.stats {
        let name = stat.name();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name) && reported.insert(name) {
            checks.push(Validation::fail(PayloadViolation::DuplicateStat {
                name: name.to_string(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Validate an entity and flatten the outcome into a plain `Result`.
pub fn check_entity(entity: &Entity) -> Result<(), Vec<PayloadViolation>> {
    match validate_entity(entity) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(violations) => Err(violations.iter().cloned().collect()),
    }
}
