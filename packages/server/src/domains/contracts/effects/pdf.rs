//! On-demand contract PDF generation.
//!
//! Synchronous callable flow: load the contract and both parties'
//! profiles, lay out fixed-position text on a single A4 page, persist the
//! bytes to blob storage, mint a long-lived signed URL and write it back
//! onto the contract. Re-invocation regenerates and overwrites - this path
//! is user-initiated, not event-driven, so identity-based idempotency is
//! not needed here.

use anyhow::{anyhow, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;
use tracing::{error, info};

use crate::common::ContractId;
use crate::domains::contracts::models::{Contract, PartyProfile};
use crate::kernel::ServerDeps;

/// Errors returned to the callable's caller.
///
/// Everything that is not one of the explicit cases wraps into `Internal`
/// so callers never see raw internals.
#[derive(Error, Debug)]
pub enum CallableError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// Generate (or regenerate) the PDF for a contract and return its signed
/// URL.
pub async fn generate_contract_pdf(
    deps: &ServerDeps,
    contract_id: &ContractId,
) -> Result<String, CallableError> {
    if contract_id.is_empty() {
        return Err(CallableError::InvalidArgument(
            "contract id is required".to_string(),
        ));
    }

    let contract = deps
        .store
        .find_contract(contract_id)
        .await
        .map_err(|e| internal(contract_id, e))?
        .ok_or_else(|| CallableError::NotFound(format!("contract {}", contract_id)))?;

    let hospital = deps
        .store
        .find_party_profile(&contract.hospital_id)
        .await
        .map_err(|e| internal(contract_id, e))?;
    let doctor = deps
        .store
        .find_party_profile(&contract.doctor_id)
        .await
        .map_err(|e| internal(contract_id, e))?;

    let bytes = render_contract(&contract, hospital.as_ref(), doctor.as_ref())
        .map_err(|e| internal(contract_id, e))?;

    let path = format!("contracts/{}.pdf", contract.id);
    deps.blob_storage
        .put(&path, bytes, "application/pdf")
        .await
        .map_err(|e| internal(contract_id, e))?;

    let url = deps
        .blob_storage
        .signed_url(&path, deps.pdf_url_ttl)
        .await
        .map_err(|e| internal(contract_id, e))?;

    deps.store
        .set_contract_pdf_url(&contract.id, &url)
        .await
        .map_err(|e| internal(contract_id, e))?;

    info!(contract_id = %contract.id, "Contract PDF generated");
    Ok(url)
}

fn internal(contract_id: &ContractId, error: anyhow::Error) -> CallableError {
    error!(contract_id = %contract_id, error = %error, "Contract PDF generation failed");
    CallableError::Internal(error)
}

/// Lay out the single-page contract document.
fn render_contract(
    contract: &Contract,
    hospital: Option<&PartyProfile>,
    doctor: Option<&PartyProfile>,
) -> Result<Vec<u8>> {
    let (doc, page, layer) =
        PdfDocument::new("Contrato de Plantao Medico", Mm(210.0), Mm(297.0), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow!("Failed to load base font: {}", e))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow!("Failed to load bold font: {}", e))?;
    let layer = doc.get_page(page).get_layer(layer);

    // Profiles may lag behind the contract snapshot; fall back to the
    // names copied onto the contract at approval time.
    let hospital_name = hospital
        .map(|p| p.display_name.as_str())
        .unwrap_or(&contract.hospital_name);
    let doctor_name = doctor
        .map(|p| p.display_name.as_str())
        .unwrap_or(&contract.doctor_name);
    let hospital_registry = hospital
        .and_then(|p| p.registry_number.as_deref())
        .unwrap_or("-");
    let doctor_registry = doctor
        .and_then(|p| p.registry_number.as_deref())
        .unwrap_or("-");

    layer.use_text("CONTRATO DE PLANTAO MEDICO", 16.0, Mm(40.0), Mm(270.0), &bold);
    layer.use_text(
        format!("Contrato: {}", contract.id),
        9.0,
        Mm(20.0),
        Mm(258.0),
        &font,
    );

    layer.use_text("CONTRATANTE", 12.0, Mm(20.0), Mm(240.0), &bold);
    layer.use_text(hospital_name, 11.0, Mm(20.0), Mm(232.0), &font);
    layer.use_text(
        format!("CNPJ: {}", hospital_registry),
        10.0,
        Mm(20.0),
        Mm(225.0),
        &font,
    );
    layer.use_text(
        format!("{} - {}", contract.city, contract.state),
        10.0,
        Mm(20.0),
        Mm(218.0),
        &font,
    );

    layer.use_text("CONTRATADO(A)", 12.0, Mm(20.0), Mm(200.0), &bold);
    layer.use_text(doctor_name, 11.0, Mm(20.0), Mm(192.0), &font);
    layer.use_text(
        format!("CRM: {}", doctor_registry),
        10.0,
        Mm(20.0),
        Mm(185.0),
        &font,
    );

    layer.use_text("PLANTAO", 12.0, Mm(20.0), Mm(165.0), &bold);
    layer.use_text(
        format!("Data: {}", contract.date.format("%d/%m/%Y")),
        10.0,
        Mm(20.0),
        Mm(157.0),
        &font,
    );
    layer.use_text(
        format!(
            "Horario: {} as {}{}",
            contract.start_time,
            contract.end_time,
            if contract.overnight { " (noturno)" } else { "" }
        ),
        10.0,
        Mm(20.0),
        Mm(150.0),
        &font,
    );
    layer.use_text(
        format!("Servico: {}", contract.service_type),
        10.0,
        Mm(20.0),
        Mm(143.0),
        &font,
    );
    layer.use_text(
        format!("Valor hora: R$ {:.2}", contract.hourly_rate),
        10.0,
        Mm(20.0),
        Mm(136.0),
        &font,
    );

    layer.use_text(
        "_________________________________",
        10.0,
        Mm(20.0),
        Mm(60.0),
        &font,
    );
    layer.use_text("Contratante", 9.0, Mm(20.0), Mm(54.0), &font);
    layer.use_text(
        "_________________________________",
        10.0,
        Mm(115.0),
        Mm(60.0),
        &font,
    );
    layer.use_text("Contratado(a)", 9.0, Mm(115.0), Mm(54.0), &font);

    doc.save_to_bytes()
        .map_err(|e| anyhow!("Failed to serialize contract PDF: {}", e))
}
