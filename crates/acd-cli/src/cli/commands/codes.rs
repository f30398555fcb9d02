//! `acd codes` – print the error taxonomy.

use anyhow::Result;
use acd_core::request::{ReservedCode, OK_CODES, RETRY_CODES};
use serde_json::json;

pub fn run_codes(as_json: bool) -> Result<()> {
    if as_json {
        let reserved: Vec<_> = ReservedCode::ALL
            .iter()
            .map(|r| json!({ "name": r, "code": r.code() }))
            .collect();
        let doc = json!({
            "ok_codes": OK_CODES,
            "retry_codes": RETRY_CODES,
            "reserved": reserved,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{:<6} {}", "CODE", "NAME");
    for r in ReservedCode::ALL {
        println!("{:<6} {}", r.code(), r.name());
    }
    println!("ok:    {:?}", OK_CODES);
    println!("retry: {:?}", RETRY_CODES);
    Ok(())
}
