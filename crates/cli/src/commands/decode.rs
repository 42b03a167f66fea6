use anyhow::Result;

use crate::utils::{bits_to_text, codec_from_args, read_input, write_output};
use crate::CommonArgs;

pub fn run(common: &CommonArgs, text_mode: bool) -> Result<()> {
    let codec = codec_from_args(common)?;
    let dna = read_input(common)?;

    let bits = codec.decode(&dna)?;
    let output = if text_mode { bits_to_text(&bits) } else { bits };
    write_output(&output, common.output.as_ref())
}
