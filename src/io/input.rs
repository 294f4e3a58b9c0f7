//! Decoding of org-listing documents.
//!
//! Accepts either the API payload `{"procedure_name": ..., "orgs": [...]}` or
//! a bare JSON array of price records.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::{Error, PriceRecord, ProcedureOrgs, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum OrgsDocument {
    Listing(ProcedureOrgs),
    Records(Vec<PriceRecord>),
}

impl From<OrgsDocument> for ProcedureOrgs {
    fn from(document: OrgsDocument) -> Self {
        match document {
            OrgsDocument::Listing(listing) => listing,
            OrgsDocument::Records(orgs) => ProcedureOrgs {
                procedure_name: None,
                orgs,
            },
        }
    }
}

/// Decode an org-listing document from JSON text.
pub fn parse_orgs_document(contents: &str) -> Result<ProcedureOrgs> {
    let document: OrgsDocument = serde_json::from_str(contents)?;
    Ok(document.into())
}

/// Read and decode an org-listing document from disk.
pub fn read_procedure_orgs(path: &Path) -> Result<ProcedureOrgs> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io_at(path, e))?;
    let listing = parse_orgs_document(&contents).map_err(|e| match e {
        Error::Json(json) => Error::input(path, json.to_string()),
        other => other,
    })?;
    log::debug!(
        "Loaded {} price records from {}",
        listing.orgs.len(),
        path.display()
    );
    Ok(listing)
}
