//! NATS change-feed consumer.
//!
//! Upstream writers publish document change events to the staffing
//! subjects; this consumer deserializes the explicit before/after payloads
//! and dispatches them through the trigger router. Delivery is
//! at-least-once and possibly concurrent across different documents;
//! failed invocations are logged with the triggering document id and left
//! to redelivery (the materializer's deterministic ids make that safe).

use std::sync::Arc;

use anyhow::{Context, Result};
use futures::StreamExt;
use tracing::{debug, error, info, warn};

use crate::domains::matching::events::StaffingEvent;
use crate::kernel::triggers::{
    RequirementDeletePayload, RequirementWritePayload, TimeSlotDeletePayload, TriggerRouter,
};

/// Subject for requirement create/update events.
pub const REQUIREMENT_WRITE_SUBJECT: &str = "staffing.requirements.write";
/// Subject for requirement delete events.
pub const REQUIREMENT_DELETE_SUBJECT: &str = "staffing.requirements.delete";
/// Subject for time-slot delete events.
pub const TIME_SLOT_DELETE_SUBJECT: &str = "staffing.time_slots.delete";

/// Wildcard covering every staffing change subject.
const STAFFING_WILDCARD: &str = "staffing.>";

/// Consumes the staffing change feed and dispatches trigger invocations.
pub struct ChangeFeedConsumer {
    router: Arc<TriggerRouter>,
}

impl ChangeFeedConsumer {
    pub fn new(router: Arc<TriggerRouter>) -> Self {
        Self { router }
    }

    /// Subscribe and process events until the connection closes.
    pub async fn run(self, client: async_nats::Client) -> Result<()> {
        let mut subscriber = client
            .subscribe(STAFFING_WILDCARD)
            .await
            .context("Failed to subscribe to staffing change feed")?;
        info!(subject = STAFFING_WILDCARD, "Change feed consumer subscribed");

        while let Some(message) = subscriber.next().await {
            let subject = message.subject.as_str().to_string();
            if let Err(error) = self.handle(&subject, &message.payload).await {
                // No internal retry: the transport redelivers.
                error!(subject = %subject, error = %error, "Trigger invocation failed");
            }
        }

        warn!("Change feed subscription ended");
        Ok(())
    }

    /// Decode one message into a staffing event and dispatch it.
    async fn handle(&self, subject: &str, payload: &[u8]) -> Result<()> {
        let event = match subject {
            REQUIREMENT_WRITE_SUBJECT => {
                let payload: RequirementWritePayload = serde_json::from_slice(payload)
                    .context("Malformed requirement write payload")?;
                // Boundary validation: a snapshot without identity fields
                // cannot participate in matching and is dropped here.
                if let Some(after) = &payload.after {
                    if let Err(error) = after.validate() {
                        warn!(requirement_id = %payload.id, error = %error, "Rejecting invalid requirement snapshot");
                        return Ok(());
                    }
                }
                StaffingEvent::RequirementWritten {
                    id: payload.id,
                    before: payload.before,
                    after: payload.after,
                }
            }
            REQUIREMENT_DELETE_SUBJECT => {
                let payload: RequirementDeletePayload = serde_json::from_slice(payload)
                    .context("Malformed requirement delete payload")?;
                StaffingEvent::RequirementDeleted { id: payload.id }
            }
            TIME_SLOT_DELETE_SUBJECT => {
                let payload: TimeSlotDeletePayload = serde_json::from_slice(payload)
                    .context("Malformed time slot delete payload")?;
                StaffingEvent::TimeSlotDeleted { id: payload.id }
            }
            other => {
                debug!(subject = %other, "Ignoring unrecognized staffing subject");
                return Ok(());
            }
        };

        self.router.dispatch(event).await?;
        Ok(())
    }
}
