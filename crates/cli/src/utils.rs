use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use helix_codec::{CodecParams, HelixCodec};

use crate::CommonArgs;

/// Build a codec from the shared command-line parameters.
pub fn codec_from_args(args: &CommonArgs) -> Result<HelixCodec> {
    let codec = HelixCodec::new(CodecParams {
        ell: args.ell,
        epsilon: args.epsilon,
        use_ec: !args.no_ec,
    })?;
    Ok(codec)
}

/// Read the payload from `--input` or `--file`, trimming trailing whitespace.
pub fn read_input(args: &CommonArgs) -> Result<String> {
    if let Some(input) = &args.input {
        return Ok(input.trim().to_string());
    }
    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Ok(contents.trim().to_string());
    }
    bail!("provide an input with -i/--input or -f/--file");
}

/// Write `data` to `--output` or stdout.
pub fn write_output(data: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, format!("{data}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Output written to: {}", path.display());
        }
        None => println!("{data}"),
    }
    Ok(())
}

/// Pack text into a binary string, eight bits per byte.
pub fn text_to_bits(text: &str) -> String {
    text.bytes().map(|b| format!("{b:08b}")).collect()
}

/// Unpack a binary string into text, ignoring a trailing partial byte.
pub fn bits_to_text(bits: &str) -> String {
    let bytes: Vec<u8> = bits
        .as_bytes()
        .chunks_exact(8)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u8, |acc, &b| (acc << 1) | u8::from(b == b'1'))
        })
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_bits_round_trip() {
        let text = "HELLO, helix!";
        assert_eq!(bits_to_text(&text_to_bits(text)), text);
    }

    #[test]
    fn test_text_to_bits_width() {
        assert_eq!(text_to_bits("A"), "01000001");
        assert_eq!(text_to_bits("").len(), 0);
    }
}
