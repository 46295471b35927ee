use anyhow::Result;
use std::path::PathBuf;

pub fn run(payload: PathBuf, json: bool) -> Result<()> {
    let change_set = super::load_change_set(&payload)?;
    let params = change_set.causing_parameters()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&params)?);
        return Ok(());
    }

    if params.is_empty() {
        println!("No parameter causes any change");
        return Ok(());
    }
    for p in params {
        println!("{} = {}", p.parameter_key, p.display_value());
    }
    Ok(())
}
