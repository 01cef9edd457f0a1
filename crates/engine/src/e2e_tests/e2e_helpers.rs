//! Shared helpers for the end-to-end tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use sheetforge_domain::{
    CharacterRecord, PipelineMessage, ResolutionStep, ResolvedCharacter, ResolverSettings,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::context::ResolutionContext;
use crate::infrastructure::clock::FixedClock;
use crate::pipeline::ConversionOrchestrator;

/// Install a test-writer subscriber once. Later calls are no-ops.
pub fn init_test_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sheetforge_engine=warn")),
        )
        .with(fmt::layer().with_test_writer())
        .try_init();
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Orchestrator whose clock always reads `fixed_time()`.
pub fn orchestrator(settings: ResolverSettings) -> ConversionOrchestrator {
    ConversionOrchestrator::new(
        ResolutionContext::new(settings),
        Arc::new(FixedClock(fixed_time())),
    )
}

pub fn resolve_with(record: &CharacterRecord, settings: ResolverSettings) -> ResolvedCharacter {
    init_test_logging();
    orchestrator(settings)
        .resolve(record)
        .unwrap_or_else(|e| panic!("resolution of character {} failed: {}", record.id, e))
}

pub fn resolve_default(record: &CharacterRecord) -> ResolvedCharacter {
    resolve_with(record, ResolverSettings::default())
}

/// Messages reported by one step.
pub fn messages_from(messages: &[PipelineMessage], step: ResolutionStep) -> Vec<&str> {
    messages
        .iter()
        .filter(|m| m.step == step)
        .map(|m| m.message.as_str())
        .collect()
}
