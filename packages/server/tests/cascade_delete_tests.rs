//! Integration tests for cascade deletion of pending matches.
//!
//! Deleting a requirement or a time slot removes its still-pending
//! matches; anything that progressed past pending review survives.

mod common;

use crate::common::{available_slot, date, open_requirement, requirement_written, TestHarness};
use server_core::common::{RequirementId, TimeSlotId};
use server_core::domains::matching::events::StaffingEvent;
use server_core::domains::matching::models::{MatchOwner, MatchStatus};
use test_context::test_context;

/// Deleting a requirement removes its pending match.
#[test_context(TestHarness)]
#[tokio::test]
async fn requirement_delete_removes_pending_match(ctx: &TestHarness) {
    let d = date(2024, 3, 18);
    ctx.store.insert_slot(available_slot("slot1", d));
    ctx.router
        .dispatch(requirement_written(None, open_requirement("req1", vec![d])))
        .await
        .unwrap();
    assert_eq!(ctx.store.match_count(), 1);

    let fact = ctx
        .router
        .dispatch(StaffingEvent::RequirementDeleted {
            id: RequirementId::new("req1"),
        })
        .await
        .unwrap();

    assert!(matches!(
        fact,
        Some(StaffingEvent::MatchesCleaned {
            owner: MatchOwner::Requirement(_),
            deleted_count: 1,
        })
    ));
    assert_eq!(ctx.store.match_count(), 0);
}

/// A match already approved before the requirement is deleted survives
/// the cascade.
#[test_context(TestHarness)]
#[tokio::test]
async fn approved_match_survives_requirement_delete(ctx: &TestHarness) {
    let d = date(2024, 3, 18);
    ctx.store.insert_slot(available_slot("slot1", d));
    ctx.router
        .dispatch(requirement_written(None, open_requirement("req1", vec![d])))
        .await
        .unwrap();

    let match_id = ctx.store.all_matches()[0].id.clone();
    ctx.store.set_match_status(&match_id, MatchStatus::Approved);

    let fact = ctx
        .router
        .dispatch(StaffingEvent::RequirementDeleted {
            id: RequirementId::new("req1"),
        })
        .await
        .unwrap();

    assert!(matches!(
        fact,
        Some(StaffingEvent::MatchesCleaned {
            deleted_count: 0,
            ..
        })
    ));
    assert_eq!(ctx.store.match_count(), 1);
    assert_eq!(
        ctx.store.get_match(&match_id).unwrap().status,
        MatchStatus::Approved
    );
}

/// Deleting a time slot removes only the matches referencing that slot.
#[test_context(TestHarness)]
#[tokio::test]
async fn time_slot_delete_removes_only_its_matches(ctx: &TestHarness) {
    let d = date(2024, 3, 18);
    ctx.store.insert_slot(available_slot("slot1", d));
    ctx.store.insert_slot(available_slot("slot2", d));
    ctx.router
        .dispatch(requirement_written(None, open_requirement("req1", vec![d])))
        .await
        .unwrap();
    assert_eq!(ctx.store.match_count(), 2);

    ctx.store.remove_slot(&TimeSlotId::new("slot1"));
    let fact = ctx
        .router
        .dispatch(StaffingEvent::TimeSlotDeleted {
            id: TimeSlotId::new("slot1"),
        })
        .await
        .unwrap();

    assert!(matches!(
        fact,
        Some(StaffingEvent::MatchesCleaned {
            owner: MatchOwner::TimeSlot(_),
            deleted_count: 1,
        })
    ));

    let remaining = ctx.store.all_matches();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].time_slot_id.as_str(), "slot2");
}

/// Slot deletion does not re-run matching for the affected requirement.
#[test_context(TestHarness)]
#[tokio::test]
async fn slot_delete_does_not_retrigger_matching(ctx: &TestHarness) {
    let d = date(2024, 3, 18);
    ctx.store.insert_slot(available_slot("slot1", d));
    ctx.router
        .dispatch(requirement_written(None, open_requirement("req1", vec![d])))
        .await
        .unwrap();

    ctx.store.remove_slot(&TimeSlotId::new("slot1"));
    ctx.router
        .dispatch(StaffingEvent::TimeSlotDeleted {
            id: TimeSlotId::new("slot1"),
        })
        .await
        .unwrap();

    // Only the cleanup ran; no new matches appeared for req1.
    assert_eq!(ctx.store.match_count(), 0);
}

/// Cascade against a document with no matches is a no-op.
#[test_context(TestHarness)]
#[tokio::test]
async fn delete_with_no_matches_is_noop(ctx: &TestHarness) {
    let fact = ctx
        .router
        .dispatch(StaffingEvent::RequirementDeleted {
            id: RequirementId::new("ghost"),
        })
        .await
        .unwrap();

    assert!(matches!(
        fact,
        Some(StaffingEvent::MatchesCleaned {
            deleted_count: 0,
            ..
        })
    ));
}
