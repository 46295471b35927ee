use anyhow::Result;
use std::path::PathBuf;

pub fn run(payload: PathBuf, json: bool) -> Result<()> {
    let change_set = super::load_change_set(&payload)?;
    let causing = change_set.causing_parameters()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&change_set)?);
        return Ok(());
    }

    println!("change set {}", change_set.change_set_name);
    println!("Stack:     {}", change_set.stack_name);
    println!("Status:    {}", change_set.status);
    if let Some(exec) = change_set.execution_status {
        println!("Execution: {}", exec);
    }
    if let Some(reason) = &change_set.status_reason {
        println!("Reason:    {}", reason);
    }
    println!(
        "Created:   {}",
        change_set.creation_time.format("%Y-%m-%d %H:%M:%S %Z")
    );
    if !change_set.capabilities.is_empty() {
        let caps: Vec<_> = change_set
            .capabilities
            .iter()
            .map(|c| c.as_str())
            .collect();
        println!("Capabilities: {}", caps.join(", "));
    }

    println!();
    println!("Changes:");
    for (action, count) in change_set.action_counts() {
        if count > 0 {
            println!("  {:<7} {}", action.as_str(), count);
        }
    }
    for change in &change_set.changes {
        let rc = &change.resource_change;
        match rc.replacement {
            Some(replacement) => println!(
                "  - {} {} ({}, replacement: {})",
                rc.action, rc.logical_resource_id, rc.resource_type, replacement
            ),
            None => println!(
                "  - {} {} ({})",
                rc.action, rc.logical_resource_id, rc.resource_type
            ),
        }
    }

    if !causing.is_empty() {
        println!();
        let keys: Vec<_> = causing.iter().map(|p| p.parameter_key.as_str()).collect();
        println!("Causing parameters: {}", keys.join(", "));
    }
    Ok(())
}
