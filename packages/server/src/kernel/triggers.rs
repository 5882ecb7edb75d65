//! Reactive trigger dispatch.
//!
//! Each change event is an independent, stateless unit of work: the
//! machine decides whether a command is warranted, the effect executes it,
//! and the resulting fact event is routed back through the machine for
//! observation. There is no locking anywhere in this path - correctness
//! under concurrent or redelivered events for the same document rests on
//! the materializer's deterministic-identity check.

use anyhow::Result;
use serde::Deserialize;

use crate::common::{RequirementId, TimeSlotId};
use crate::domains::matching::{
    effects::MatchingEffect, events::StaffingEvent, machines::MatchingMachine,
};
use crate::domains::shifts::models::ShiftRequirement;
use crate::kernel::ServerDeps;

// =============================================================================
// Change-event payloads
// =============================================================================

/// Wire payload for a requirement create/update: a value-level diff of two
/// optional snapshots.
#[derive(Debug, Deserialize)]
pub struct RequirementWritePayload {
    pub id: RequirementId,
    #[serde(default)]
    pub before: Option<ShiftRequirement>,
    #[serde(default)]
    pub after: Option<ShiftRequirement>,
}

/// Wire payload for a requirement delete.
#[derive(Debug, Deserialize)]
pub struct RequirementDeletePayload {
    pub id: RequirementId,
}

/// Wire payload for a time-slot delete.
#[derive(Debug, Deserialize)]
pub struct TimeSlotDeletePayload {
    pub id: TimeSlotId,
}

// =============================================================================
// Trigger router
// =============================================================================

/// Routes staffing events through machine decide -> effect execute.
pub struct TriggerRouter {
    machine: MatchingMachine,
    effect: MatchingEffect,
    deps: ServerDeps,
}

impl TriggerRouter {
    pub fn new(deps: ServerDeps) -> Self {
        Self {
            machine: MatchingMachine::new(),
            effect: MatchingEffect::new(),
            deps,
        }
    }

    /// Dispatch one event. Returns the fact event produced by the effect,
    /// or `None` when the machine decided no work was needed.
    ///
    /// Effect errors propagate to the caller, which logs them and relies
    /// on the transport's at-least-once redelivery; nothing is retried
    /// here.
    pub async fn dispatch(&self, event: StaffingEvent) -> Result<Option<StaffingEvent>> {
        let Some(command) = self.machine.decide(&event) else {
            return Ok(None);
        };
        let fact = self.effect.execute(command, &self.deps).await?;
        // Fact events go back through the machine for observation.
        let _ = self.machine.decide(&fact);
        Ok(Some(fact))
    }
}
