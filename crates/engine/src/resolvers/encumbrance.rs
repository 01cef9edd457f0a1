//! Variant encumbrance tiers from carried weight and strength.

use sheetforge_domain::{
    Ability, AbilityScores, CarryingCapacity, EncumbranceLevel, EncumbranceResult, FeatureResult,
    SpeedPenalty,
};

use super::Resolved;
use crate::context::ResolutionContext;

const POWERFUL_BUILD_STRENGTH_CAP: i32 = 29;

const DISADVANTAGED_WHEN_HEAVY: [Ability; 3] =
    [Ability::Strength, Ability::Dexterity, Ability::Constitution];

pub fn resolve_encumbrance(
    total_weight: f64,
    abilities: &AbilityScores,
    features: &FeatureResult,
    context: &ResolutionContext,
) -> Resolved<EncumbranceResult> {
    let strength = abilities.total(Ability::Strength).max(0);
    let powerful_build = features
        .racial_traits
        .iter()
        .any(|t| context.rules().is_powerful_build(&t.name));
    // Only carrying capacity sees the doubled score; ability modifiers never do.
    let effective_strength = if powerful_build {
        (strength * 2).min(POWERFUL_BUILD_STRENGTH_CAP)
    } else {
        strength
    };

    let score = f64::from(effective_strength);
    let tiers = CarryingCapacity {
        unencumbered_max: score * 5.0,
        encumbered_max: score * 10.0,
        heavily_encumbered_max: score * 15.0,
        push_drag_lift: score * 30.0,
    };

    let (encumbrance_level, speed_penalty) = if total_weight <= tiers.unencumbered_max {
        (EncumbranceLevel::Unencumbered, SpeedPenalty::None)
    } else if total_weight <= tiers.encumbered_max {
        (EncumbranceLevel::Encumbered, SpeedPenalty::Reduced { feet: 10 })
    } else if total_weight <= tiers.heavily_encumbered_max {
        (
            EncumbranceLevel::HeavilyEncumbered,
            SpeedPenalty::Reduced { feet: 20 },
        )
    } else {
        (EncumbranceLevel::Overloaded, SpeedPenalty::Immobile)
    };
    let disadvantage_on_checks = encumbrance_level >= EncumbranceLevel::HeavilyEncumbered;

    Resolved::clean(EncumbranceResult {
        total_weight,
        effective_strength,
        powerful_build,
        carrying_capacity_tiers: tiers,
        encumbrance_level,
        speed_penalty,
        disadvantage_on_checks,
        disadvantaged_abilities: if disadvantage_on_checks {
            DISADVANTAGED_WHEN_HEAVY.to_vec()
        } else {
            Vec::new()
        },
    })
}
