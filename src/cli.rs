use std::io::Write;

use adguid_core::{GuidFilterEncoder, config::filter_attribute_from_env_value, decode_filter};
use adguid_uuid::ObjectGuid;
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "adguid")]
#[command(about = "Encode directory object GUIDs as LDAP search filters")]
pub struct Cli {
    /// Attribute name used in the filter (overrides ADGUID_FILTER_ATTRIBUTE)
    #[arg(long, global = true)]
    pub attribute: Option<String>,
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Encode a dashed GUID (8-4-4-4-12 hex digits, any case)
    Text {
        /// GUID text, e.g. a2b9312c-f112-44e0-bbb1-22e1fdb6f5c3
        guid: String,
    },
    /// Encode 16 bytes already in directory byte order
    Bytes {
        /// 32 hex digits; '\', ':', '-' and whitespace are ignored
        hex: String,
    },
    /// Encode a base64 objectGUID value
    Base64 {
        /// Standard padded base64 of the 16 stored bytes
        value: String,
    },
    /// Decode a filter back into a GUID
    Decode {
        /// Filter such as (objectGUID=\2c\31...)
        filter: String,
    },
    /// Encode a GUID through both the text and byte paths and compare the results
    Check {
        /// GUID text
        guid: String,
    },
    /// Generate a random GUID and its filter
    New,
}

#[derive(Serialize)]
struct Encoded {
    guid: ObjectGuid,
    base64: String,
    filter: String,
}

#[derive(Serialize)]
struct Decoded {
    guid: ObjectGuid,
    base64: String,
}

#[derive(Serialize)]
struct Checked {
    from_text: String,
    from_bytes: String,
    matches: bool,
}

/// Runs the parsed command, writing results to `out`.
pub fn run<W: Write>(cli: Cli, encoder: &GuidFilterEncoder, out: &mut W) -> anyhow::Result<()> {
    let json = cli.json;

    match cli.command {
        Some(Commands::Text { guid }) => {
            let guid = ObjectGuid::parse(&guid)
                .with_context(|| format!("failed to encode GUID text '{}'", guid))?;
            let filter = encoder.encode_guid(&guid);
            write_encoded(out, json, guid, filter)?;
        }
        Some(Commands::Bytes { hex }) => {
            let bytes = parse_hex_bytes(&hex)?;
            let filter = encoder.encode_bytes(&bytes)?;
            let guid = ObjectGuid::from_bytes_le(&bytes)?;
            write_encoded(out, json, guid, filter)?;
        }
        Some(Commands::Base64 { value }) => {
            let guid = ObjectGuid::from_base64(&value)
                .with_context(|| format!("failed to decode base64 GUID '{}'", value))?;
            let filter = encoder.encode_guid(&guid);
            write_encoded(out, json, guid, filter)?;
        }
        Some(Commands::Decode { filter }) => {
            let guid = decode_filter(&filter)?;
            let decoded = Decoded {
                guid,
                base64: guid.to_base64(),
            };
            if json {
                writeln!(out, "{}", serde_json::to_string(&decoded)?)?;
            } else {
                writeln!(out, "GUID: {}", decoded.guid)?;
                writeln!(out, "Base64: {}", decoded.base64)?;
            }
        }
        Some(Commands::Check { guid }) => {
            let from_text = encoder.encode_text(&guid)?;
            let bytes = ObjectGuid::parse(&guid)?.to_bytes_le();
            let from_bytes = encoder.encode_bytes(&bytes)?;
            let checked = Checked {
                matches: from_text == from_bytes,
                from_text,
                from_bytes,
            };
            if json {
                writeln!(out, "{}", serde_json::to_string(&checked)?)?;
            } else {
                writeln!(out, "Original GUID: {}", guid)?;
                writeln!(out, "From text: {}", checked.from_text)?;
                writeln!(out, "From bytes: {}", checked.from_bytes)?;
                writeln!(out, "Filters match: {}", checked.matches)?;
            }
            if !checked.matches {
                anyhow::bail!("text and byte encodings differ for '{}'", guid);
            }
        }
        Some(Commands::New) => {
            let guid = ObjectGuid::new();
            let filter = encoder.encode_guid(&guid);
            if json {
                write_encoded(out, json, guid, filter)?;
            } else {
                writeln!(out, "GUID: {}", guid)?;
                writeln!(out, "Filter: {}", filter)?;
            }
        }
        None => {
            writeln!(out, "Use 'adguid --help' for commands")?;
        }
    }

    Ok(())
}

fn write_encoded<W: Write>(
    out: &mut W,
    json: bool,
    guid: ObjectGuid,
    filter: String,
) -> anyhow::Result<()> {
    if json {
        let encoded = Encoded {
            guid,
            base64: guid.to_base64(),
            filter,
        };
        writeln!(out, "{}", serde_json::to_string(&encoded)?)?;
    } else {
        writeln!(out, "{}", filter)?;
    }
    Ok(())
}

/// Picks the filter attribute: the `--attribute` flag, then the environment value, then
/// `objectGUID`. Blank values count as absent at each step.
pub fn resolve_attribute(flag: Option<String>, env: Option<String>) -> String {
    let non_blank = |v: &String| !v.trim().is_empty();
    filter_attribute_from_env_value(flag.filter(non_blank).or_else(|| env.filter(non_blank)))
}

/// Parses a hex byte string, ignoring common separators.
///
/// Length is not checked here; the encoder reports a wrong byte count.
pub fn parse_hex_bytes(input: &str) -> anyhow::Result<Vec<u8>> {
    let digits: String = input
        .chars()
        .filter(|&c| !matches!(c, '\\' | ':' | '-') && !c.is_whitespace())
        .collect();
    hex::decode(&digits).with_context(|| format!("'{}' is not a hex byte string", input))
}
