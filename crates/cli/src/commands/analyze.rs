use anyhow::{bail, Context, Result};

use crate::printing;
use crate::utils::{read_input, write_output};
use crate::CommonArgs;

pub fn run(common: &CommonArgs, format: &str) -> Result<()> {
    let dna = read_input(common)?;
    let report = helix_analysis::analyze(&dna, common.ell, common.epsilon)?;

    match format {
        "pretty" => {
            printing::print_report(&report);
            Ok(())
        }
        "json" => {
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialize report")?;
            write_output(&json, common.output.as_ref())
        }
        other => bail!("unknown format '{other}' (expected pretty or json)"),
    }
}
