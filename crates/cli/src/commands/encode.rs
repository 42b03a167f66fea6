use anyhow::Result;

use crate::printing;
use crate::utils::{codec_from_args, read_input, text_to_bits, write_output};
use crate::CommonArgs;

pub fn run(common: &CommonArgs, analyze: bool, text_mode: bool) -> Result<()> {
    let codec = codec_from_args(common)?;
    let input = read_input(common)?;
    let bits = if text_mode {
        text_to_bits(&input)
    } else {
        input
    };

    let dna = codec.encode(&bits)?;

    if analyze {
        let report = helix_analysis::analyze(&dna, common.ell, common.epsilon)?;
        printing::print_report(&report);
    }
    write_output(&dna, common.output.as_ref())
}
