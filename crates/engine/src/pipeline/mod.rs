//! Conversion orchestrator.
//!
//! Runs the ordered step list over one record and folds every outcome into
//! the run's processing metadata. A fatal outcome ends the run with its
//! error; warnings and recoverable errors are collected and the run goes on.

mod step;

use std::sync::Arc;

use sheetforge_domain::{
    CharacterId, CharacterRecord, PipelineMessage, ProcessingMetadata, ResolutionId,
    ResolutionStep, ResolvedCharacter, ResolverSettings, StepRecord, StepStatus,
};

use crate::context::ResolutionContext;
use crate::error::ConversionError;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::ports::ClockPort;
use crate::resolvers::IssueSeverity;

pub use step::{PipelineState, StepFn, StepOutcome, STEPS, UNNAMED_CHARACTER};

/// Resolves character records into `ResolvedCharacter`s.
///
/// Holds no per-run state, so one orchestrator can serve many threads.
#[derive(Clone)]
pub struct ConversionOrchestrator {
    context: ResolutionContext,
    clock: Arc<dyn ClockPort>,
}

impl Default for ConversionOrchestrator {
    fn default() -> Self {
        Self::with_settings(ResolverSettings::default())
    }
}

impl ConversionOrchestrator {
    pub fn new(context: ResolutionContext, clock: Arc<dyn ClockPort>) -> Self {
        Self { context, clock }
    }

    pub fn with_settings(settings: ResolverSettings) -> Self {
        Self::new(
            ResolutionContext::new(settings),
            Arc::new(SystemClock::new()),
        )
    }

    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    pub fn resolve(&self, record: &CharacterRecord) -> Result<ResolvedCharacter, ConversionError> {
        let run_id = ResolutionId::new();
        let started_at = self.clock.now();
        tracing::debug!(character_id = %record.id, run_id = %run_id, "Starting resolution");

        let mut state = PipelineState::new(record, &self.context);
        let mut reducer = Reducer::new(record.id);
        for (step, run) in STEPS {
            tracing::debug!(character_id = %record.id, step = %step, "Running step");
            let outcome = run(&mut state);
            reducer.apply(*step, outcome)?;
        }

        let metadata = ProcessingMetadata {
            run_id,
            started_at,
            completed_at: self.clock.now(),
            steps: reducer.steps,
            warnings: reducer.warnings,
            errors: reducer.errors,
        };
        tracing::info!(
            character_id = %record.id,
            run_id = %run_id,
            warnings = metadata.warnings.len(),
            errors = metadata.errors.len(),
            "Resolved character"
        );
        Ok(ResolvedCharacter::assemble(state.parts, metadata))
    }

    /// Parse the service's JSON export, then resolve it.
    pub fn resolve_json(&self, json: &str) -> Result<ResolvedCharacter, ConversionError> {
        let record: CharacterRecord = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "Rejected character JSON");
            ConversionError::InvalidInput(e)
        })?;
        self.resolve(&record)
    }
}

/// Resolve one record with the given settings and the system clock.
pub fn resolve(
    record: &CharacterRecord,
    settings: ResolverSettings,
) -> Result<ResolvedCharacter, ConversionError> {
    ConversionOrchestrator::with_settings(settings).resolve(record)
}

/// Parse and resolve one JSON record with the given settings.
pub fn resolve_json(
    json: &str,
    settings: ResolverSettings,
) -> Result<ResolvedCharacter, ConversionError> {
    ConversionOrchestrator::with_settings(settings).resolve_json(json)
}

/// Folds step outcomes into step records and messages.
struct Reducer {
    character_id: CharacterId,
    steps: Vec<StepRecord>,
    warnings: Vec<PipelineMessage>,
    errors: Vec<PipelineMessage>,
}

impl Reducer {
    fn new(character_id: CharacterId) -> Self {
        Self {
            character_id,
            steps: Vec::with_capacity(STEPS.len()),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn apply(&mut self, step: ResolutionStep, outcome: StepOutcome) -> Result<(), ConversionError> {
        match outcome {
            StepOutcome::Success => {
                self.steps.push(StepRecord {
                    step,
                    status: StepStatus::Succeeded,
                    issue_count: 0,
                });
                Ok(())
            }
            StepOutcome::Warning(issues) => {
                self.steps.push(StepRecord {
                    step,
                    status: StepStatus::CompletedWithWarnings,
                    issue_count: issues.len(),
                });
                for issue in issues {
                    tracing::warn!(
                        character_id = %self.character_id,
                        step = %step,
                        severity = ?issue.severity,
                        "{}",
                        issue.message
                    );
                    let message = PipelineMessage {
                        step,
                        message: issue.message,
                    };
                    match issue.severity {
                        IssueSeverity::Warning => self.warnings.push(message),
                        IssueSeverity::Error => self.errors.push(message),
                    }
                }
                Ok(())
            }
            StepOutcome::Fatal(error) => {
                self.steps.push(StepRecord {
                    step,
                    status: StepStatus::Failed,
                    issue_count: 1,
                });
                tracing::warn!(
                    character_id = %self.character_id,
                    step = %step,
                    error = %error,
                    "Resolution aborted"
                );
                Err(error)
            }
        }
    }
}
