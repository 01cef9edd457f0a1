//! The ordered resolution steps.
//!
//! Each step reads the record and what earlier steps produced, writes its
//! own part, and reports how it went. Only record validation can stop a run.

use sheetforge_domain::{
    Biography, CalculationEngine, CharacterRecord, ClassSummary, ResolutionStep, ResolvedParts,
    MAX_LEVEL,
};

use crate::context::ResolutionContext;
use crate::error::ConversionError;
use crate::modifier_index::ModifierIndex;
use crate::resolvers::{
    resolve_abilities, resolve_defenses, resolve_encumbrance, resolve_features,
    resolve_inventory, resolve_languages, resolve_proficiencies, resolve_skills,
    resolve_spellcasting, Resolved, ResolverIssue,
};

pub const UNNAMED_CHARACTER: &str = "Unnamed Character";

/// What a step reports back to the reducer.
#[derive(Debug)]
pub enum StepOutcome {
    Success,
    /// The step finished with defaults or omissions worth reporting.
    Warning(Vec<ResolverIssue>),
    /// The run cannot continue.
    Fatal(ConversionError),
}

impl StepOutcome {
    pub fn from_issues(issues: Vec<ResolverIssue>) -> Self {
        if issues.is_empty() {
            Self::Success
        } else {
            Self::Warning(issues)
        }
    }
}

/// Working state threaded through the steps of one run.
pub struct PipelineState<'r> {
    pub record: &'r CharacterRecord,
    pub context: &'r ResolutionContext,
    pub index: ModifierIndex<'r>,
    pub parts: ResolvedParts,
}

impl<'r> PipelineState<'r> {
    pub fn new(record: &'r CharacterRecord, context: &'r ResolutionContext) -> Self {
        Self {
            record,
            context,
            index: ModifierIndex::default(),
            parts: ResolvedParts::new(record.id, UNNAMED_CHARACTER),
        }
    }
}

pub type StepFn = fn(&mut PipelineState<'_>) -> StepOutcome;

/// Every step in execution order.
pub const STEPS: &[(ResolutionStep, StepFn)] = &[
    (ResolutionStep::ValidateRecord, validate_record),
    (ResolutionStep::IndexModifiers, index_modifiers),
    (ResolutionStep::Abilities, abilities),
    (ResolutionStep::Spellcasting, spellcasting),
    (ResolutionStep::Proficiencies, proficiencies),
    (ResolutionStep::SavingThrowsAndSkills, saving_throws_and_skills),
    (ResolutionStep::Features, features),
    (ResolutionStep::Languages, languages),
    (ResolutionStep::Defenses, defenses),
    (ResolutionStep::Inventory, inventory),
    (ResolutionStep::Encumbrance, encumbrance),
];

fn store<T>(resolved: Resolved<T>, slot: &mut T) -> StepOutcome {
    *slot = resolved.value;
    StepOutcome::from_issues(resolved.issues)
}

fn validate_record(state: &mut PipelineState<'_>) -> StepOutcome {
    let record = state.record;
    let classes = match record.classes.as_deref() {
        None => {
            return StepOutcome::Fatal(ConversionError::validation(
                ResolutionStep::ValidateRecord,
                "character has no class list",
            ))
        }
        Some([]) => {
            return StepOutcome::Fatal(ConversionError::validation(
                ResolutionStep::ValidateRecord,
                "character class list is empty",
            ))
        }
        Some(classes) => classes,
    };

    let mut issues = Vec::new();
    let parts = &mut state.parts;

    match record.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => parts.name = name.to_string(),
        None => issues.push(ResolverIssue::warning(format!(
            "Character has no name; using '{}'",
            UNNAMED_CHARACTER
        ))),
    }

    if let Some(race) = &record.race {
        parts.race = Some(race.full_name.trim().to_string());
        parts.subrace = race
            .subrace_definition
            .as_ref()
            .map(|s| s.full_name.trim().to_string());
    }

    parts.classes = classes
        .iter()
        .map(|c| ClassSummary {
            name: c.definition.name.trim().to_string(),
            subclass: c
                .subclass_definition
                .as_ref()
                .map(|s| s.name.trim().to_string()),
            level: c.level,
            is_starting_class: c.is_starting_class,
        })
        .collect();
    for class in parts.classes.iter().filter(|c| c.level == 0) {
        issues.push(ResolverIssue::warning(format!(
            "Class {} has level 0",
            class.name
        )));
    }

    let total_level: u32 = classes.iter().map(|c| u32::from(c.level)).sum();
    if total_level > u32::from(MAX_LEVEL) {
        issues.push(ResolverIssue::warning(format!(
            "Total level {} exceeds {}",
            total_level, MAX_LEVEL
        )));
    }
    parts.total_level = u8::try_from(total_level).unwrap_or(u8::MAX);
    parts.proficiency_bonus = state.context.system().proficiency_bonus(parts.total_level);

    parts.currencies = record.currencies;
    let personality = record.traits.clone().unwrap_or_default();
    let notes = record.notes.clone().unwrap_or_default();
    parts.biography = Biography {
        background: record
            .background
            .as_ref()
            .and_then(|b| b.definition.as_ref())
            .map(|d| d.name.clone()),
        personality_traits: personality.personality_traits,
        ideals: personality.ideals,
        bonds: personality.bonds,
        flaws: personality.flaws,
        appearance: personality.appearance,
        backstory: notes.backstory,
        allies: notes.allies,
        organizations: notes.organizations,
        other_notes: notes.other_notes,
    };

    StepOutcome::from_issues(issues)
}

fn index_modifiers(state: &mut PipelineState<'_>) -> StepOutcome {
    let record = state.record;
    state.index = ModifierIndex::build(&record.modifiers);
    tracing::debug!(
        character_id = %record.id,
        modifiers = state.index.len(),
        kinds = ?state.index.kind_counts(),
        "Indexed modifiers"
    );
    StepOutcome::Success
}

fn abilities(state: &mut PipelineState<'_>) -> StepOutcome {
    let resolved = resolve_abilities(state.record, &state.index, state.context);
    store(resolved, &mut state.parts.abilities)
}

fn spellcasting(state: &mut PipelineState<'_>) -> StepOutcome {
    let classes = state.record.classes.as_deref().unwrap_or_default();
    let resolved = resolve_spellcasting(
        classes,
        &state.parts.abilities,
        state.parts.proficiency_bonus,
        state.context,
    );
    store(resolved, &mut state.parts.spellcasting)
}

fn proficiencies(state: &mut PipelineState<'_>) -> StepOutcome {
    let resolved = resolve_proficiencies(&state.index, state.context);
    store(resolved, &mut state.parts.proficiencies)
}

fn saving_throws_and_skills(state: &mut PipelineState<'_>) -> StepOutcome {
    let resolved = resolve_skills(
        &state.index,
        &state.parts.abilities,
        state.parts.proficiency_bonus,
        state.context,
    );
    store(resolved, &mut state.parts.skills)
}

fn features(state: &mut PipelineState<'_>) -> StepOutcome {
    let resolved = resolve_features(state.record, state.context);
    store(resolved, &mut state.parts.features)
}

fn languages(state: &mut PipelineState<'_>) -> StepOutcome {
    let resolved = resolve_languages(&state.index, state.context);
    store(resolved, &mut state.parts.languages)
}

fn defenses(state: &mut PipelineState<'_>) -> StepOutcome {
    let resolved = resolve_defenses(&state.index);
    store(resolved, &mut state.parts.defenses)
}

fn inventory(state: &mut PipelineState<'_>) -> StepOutcome {
    let resolved = resolve_inventory(state.record, state.context);
    store(resolved, &mut state.parts.inventory)
}

fn encumbrance(state: &mut PipelineState<'_>) -> StepOutcome {
    let resolved = resolve_encumbrance(
        state.parts.inventory.total_weight,
        &state.parts.abilities,
        &state.parts.features,
        state.context,
    );
    store(resolved, &mut state.parts.encumbrance)
}
