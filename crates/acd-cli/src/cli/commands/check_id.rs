//! `acd check-id` – validate node ids locally.

use anyhow::{bail, Result};
use acd_core::node_id::NodeId;

pub fn run_check_id(ids: &[String]) -> Result<()> {
    let mut invalid = 0usize;
    for id in ids {
        match id.parse::<NodeId>() {
            Ok(node) => println!("valid    {}", node),
            Err(e) => {
                println!("invalid  {}", id);
                tracing::debug!("{}", e);
                invalid += 1;
            }
        }
    }
    if invalid > 0 {
        bail!("{} of {} ids invalid", invalid, ids.len());
    }
    Ok(())
}
