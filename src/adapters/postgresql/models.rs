//! SQL text and row mapping for the place table

use crate::domain::{PriorPlace, Result, StoreError, TargetTable};
use tokio_postgres::Row;

/// Finds which candidate place tables exist in `public`
pub const TABLE_PROBE_SQL: &str = "SELECT table_name::text AS table_name \
     FROM information_schema.tables \
     WHERE table_schema = 'public' AND table_name::text = ANY($1::text[])";

/// UPDATE for one place id, returning the untouched name and status columns
///
/// Parameters: `$1` status, `$2` likelihood, `$3` type, `$4` confidence,
/// `$5` note, `$6` raw reasoning, `$7` zabiha flag, `$8` certifier, `$9` id.
pub fn update_statement(table: TargetTable) -> String {
    format!(
        "UPDATE public.{table} SET \
         cc_halal_status = $1::text, \
         cc_halal_likelihood = $2::text, \
         cc_halal_type = $3::text, \
         cc_halal_confidence = $4::int4, \
         cc_note = $5::text, \
         cc_reasoning_raw = $6::text, \
         cc_is_zabiha = $7::bool, \
         cc_certifier_org = $8::text \
         WHERE id::text = $9::text \
         RETURNING name::text AS name, halal_status::text AS halal_status"
    )
}

/// Prior state of one updated place
pub fn prior_from_row(row: &Row) -> Result<PriorPlace> {
    let name: Option<String> = row
        .try_get("name")
        .map_err(|e| StoreError::InvalidResponse(format!("Unreadable name column: {}", e)))?;
    let halal_status: Option<String> = row
        .try_get("halal_status")
        .map_err(|e| StoreError::InvalidResponse(format!("Unreadable halal_status column: {}", e)))?;

    Ok(PriorPlace { name, halal_status })
}

/// Pick the preferred table among those found
pub fn preferred_table(found: &[String]) -> Option<TargetTable> {
    TargetTable::CANDIDATES
        .into_iter()
        .find(|table| found.iter().any(|name| name == table.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_statement_targets_table() {
        let sql = update_statement(TargetTable::Places);
        assert!(sql.starts_with("UPDATE public.places SET"));
        assert!(sql.contains("WHERE id::text = $9::text"));
        assert!(sql.contains("RETURNING name::text AS name"));
    }

    #[test]
    fn test_preferred_table_prefers_singular() {
        let found = vec!["places".to_string(), "place".to_string()];
        assert_eq!(preferred_table(&found), Some(TargetTable::Place));
    }

    #[test]
    fn test_preferred_table_plural_only() {
        assert_eq!(
            preferred_table(&["places".to_string()]),
            Some(TargetTable::Places)
        );
        assert_eq!(preferred_table(&[]), None);
    }
}
