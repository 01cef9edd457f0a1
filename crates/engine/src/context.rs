//! Per-run resolution context.
//!
//! Everything a resolver may consult besides the record itself. Passed by
//! reference into every resolver call; nothing in it changes during a run.

use sheetforge_domain::{Dnd5eSystem, ResolverSettings, RuleTables};

#[derive(Debug, Clone)]
pub struct ResolutionContext {
    settings: ResolverSettings,
    rules: &'static RuleTables,
    system: Dnd5eSystem,
}

impl Default for ResolutionContext {
    fn default() -> Self {
        Self::new(ResolverSettings::default())
    }
}

impl ResolutionContext {
    /// Context over the process-wide rule tables.
    pub fn new(settings: ResolverSettings) -> Self {
        Self {
            settings,
            rules: RuleTables::shared(),
            system: Dnd5eSystem::new(),
        }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    pub fn rules(&self) -> &'static RuleTables {
        self.rules
    }

    pub fn system(&self) -> &Dnd5eSystem {
        &self.system
    }
}
