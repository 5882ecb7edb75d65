//! Postgres-backed document store.
//!
//! Each staffing collection is a two-column table: an opaque `id` key and
//! a `doc` JSONB column holding the serialized document. The candidate
//! query pushes every equality/range/membership predicate of
//! `CandidateFilter` into SQL so only the surviving set is deserialized;
//! the time-of-day overlap check stays in application code.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{PgPool, Row};
use tracing::debug;

use crate::common::{ContractId, MatchId, ProfileId};
use crate::domains::contracts::models::{Contract, PartyProfile};
use crate::domains::matching::models::{CandidateFilter, MatchOwner, PotentialMatch};
use crate::domains::shifts::models::DoctorTimeSlot;

use super::BaseStaffingStore;

/// Postgres implementation of the staffing store.
pub struct PgStaffingStore {
    pool: PgPool,
}

impl PgStaffingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Serialize a timestamp the way serde writes it into the JSONB documents,
/// so string equality in SQL matches value equality in code.
fn canonical_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[async_trait]
impl BaseStaffingStore for PgStaffingStore {
    async fn find_available_slots(&self, filter: &CandidateFilter) -> Result<Vec<DoctorTimeSlot>> {
        let dates: Vec<String> = filter.dates.iter().map(canonical_timestamp).collect();

        let mut sql = String::from(
            "SELECT doc FROM doctor_time_slots
             WHERE doc->>'status' = 'AVAILABLE'
               AND doc->>'state' = $1
               AND doc->>'city' = $2
               AND doc->>'service_type' = $3
               AND (doc->>'desired_rate')::double precision <= $4
               AND doc->>'date' = ANY($5)",
        );
        if !filter.required_specialties.is_empty() {
            sql.push_str(" AND jsonb_exists_any(doc->'specialties', $6)");
        }

        let mut query = sqlx::query(&sql)
            .bind(&filter.state)
            .bind(&filter.city)
            .bind(&filter.service_type)
            .bind(filter.max_desired_rate)
            .bind(&dates);
        if !filter.required_specialties.is_empty() {
            query = query.bind(&filter.required_specialties);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .context("Candidate slot query failed")?;

        let mut slots = Vec::with_capacity(rows.len());
        for row in rows {
            let doc: serde_json::Value = row.try_get("doc")?;
            slots.push(
                serde_json::from_value(doc).context("Malformed doctor_time_slots document")?,
            );
        }
        debug!(candidates = slots.len(), "Candidate slot query complete");
        Ok(slots)
    }

    async fn potential_match_exists(&self, id: &MatchId) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM potential_matches WHERE id = $1)",
        )
        .bind(id.as_str())
        .fetch_one(&self.pool)
        .await
        .context("Match existence check failed")?;
        Ok(exists)
    }

    async fn insert_potential_matches(&self, batch: Vec<PotentialMatch>) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }
        // All-or-nothing: a single transaction per invocation. ON CONFLICT
        // DO NOTHING keeps a racing redelivery from failing the batch - the
        // ids are deterministic, so a collision is the same logical record.
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin match insert transaction")?;
        for record in &batch {
            let doc = serde_json::to_value(record)
                .context("Failed to serialize potential match")?;
            sqlx::query(
                "INSERT INTO potential_matches (id, doc) VALUES ($1, $2)
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(record.id.as_str())
            .bind(doc)
            .execute(&mut *tx)
            .await
            .context("Failed to stage potential match insert")?;
        }
        tx.commit()
            .await
            .context("Failed to commit match insert batch")?;
        Ok(())
    }

    async fn find_pending_match_ids(&self, owner: &MatchOwner, limit: u32) -> Result<Vec<MatchId>> {
        let (column, id) = match owner {
            MatchOwner::Requirement(id) => ("requirement_id", id.as_str()),
            MatchOwner::TimeSlot(id) => ("time_slot_id", id.as_str()),
        };
        let sql = format!(
            "SELECT id FROM potential_matches
             WHERE doc->>'status' = 'PENDING_REVIEW'
               AND doc->>'{}' = $1
             LIMIT $2",
            column
        );
        let ids: Vec<String> = sqlx::query_scalar(&sql)
            .bind(id)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .context("Pending match query failed")?;
        Ok(ids.into_iter().map(MatchId::from).collect())
    }

    async fn delete_potential_matches(&self, ids: &[MatchId]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let raw: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();
        let result = sqlx::query("DELETE FROM potential_matches WHERE id = ANY($1)")
            .bind(&raw)
            .execute(&self.pool)
            .await
            .context("Match delete failed")?;
        Ok(result.rows_affected())
    }

    async fn find_contract(&self, id: &ContractId) -> Result<Option<Contract>> {
        let row = sqlx::query("SELECT doc FROM contracts WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .context("Contract query failed")?;
        match row {
            Some(row) => {
                let doc: serde_json::Value = row.try_get("doc")?;
                Ok(Some(
                    serde_json::from_value(doc).context("Malformed contracts document")?,
                ))
            }
            None => Ok(None),
        }
    }

    async fn find_party_profile(&self, id: &ProfileId) -> Result<Option<PartyProfile>> {
        let row = sqlx::query("SELECT doc FROM party_profiles WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .context("Party profile query failed")?;
        match row {
            Some(row) => {
                let doc: serde_json::Value = row.try_get("doc")?;
                Ok(Some(
                    serde_json::from_value(doc).context("Malformed party_profiles document")?,
                ))
            }
            None => Ok(None),
        }
    }

    async fn set_contract_pdf_url(&self, id: &ContractId, url: &str) -> Result<()> {
        sqlx::query(
            "UPDATE contracts
             SET doc = jsonb_set(
                 jsonb_set(doc, '{pdf_url}', to_jsonb($2::text)),
                 '{updated_at}', to_jsonb($3::text))
             WHERE id = $1",
        )
        .bind(id.as_str())
        .bind(url)
        .bind(canonical_timestamp(&Utc::now()))
        .execute(&self.pool)
        .await
        .context("Contract pdf_url update failed")?;
        Ok(())
    }
}
