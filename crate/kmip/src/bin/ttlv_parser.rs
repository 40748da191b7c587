use std::io::{BufRead, stdin};

use clap::Parser;
use cosmian_kmip_core::{
    KmipResult, KmipSpec, ProtocolVersion, SpecContext,
    ttlv::{TTLV, TTLVXMLSerializer, TtlvRecord},
};
use cosmian_logger::{debug, log_init};

/// Decode hex encoded TTLV messages and print them.
///
/// Each input is printed as a structured TTLV dump. With `--json` or
/// `--xml` the tags are also resolved and the tree is printed in that format.
#[derive(Parser, Debug)]
#[command(name = "ttlv_parser", version, about)]
struct Cli {
    /// KMIP version used to resolve tags, e.g. `1.2` or `V2_1`.
    /// Read from the message's ProtocolVersion when absent.
    #[arg(long, env = "KMIP_SPEC")]
    spec: Option<KmipSpec>,

    /// Print the JSON tree
    #[arg(long, conflicts_with = "xml")]
    json: bool,

    /// Print the XML tree
    #[arg(long)]
    xml: bool,

    /// Hex encoded messages; stdin lines are read when none are given
    inputs: Vec<String>,
}

impl Cli {
    fn spec_for(&self, bytes: &[u8]) -> KmipSpec {
        if let Some(spec) = self.spec {
            return spec;
        }
        match ProtocolVersion::find_in_bytes(bytes) {
            Ok(Some(version)) => version.spec().unwrap_or_default(),
            _ => KmipSpec::UnknownVersion,
        }
    }

    fn process(&self, input: &str) -> KmipResult<()> {
        let bytes = hex::decode(input.trim())?;
        for record in TtlvRecord::decode_all(&bytes)? {
            println!("{}", record.structured_string());
        }
        if !self.json && !self.xml {
            return Ok(());
        }
        let spec = self.spec_for(&bytes);
        debug!("resolving tags under {spec}");
        let _guard = SpecContext::enter(spec);
        for ttlv in TTLV::from_bytes_all(&bytes)? {
            if self.json {
                println!("{}", serde_json::to_string_pretty(&ttlv)?);
            } else {
                println!("{}", TTLVXMLSerializer::to_xml(&ttlv)?);
            }
        }
        Ok(())
    }
}

fn main() -> KmipResult<()> {
    log_init(None);
    let cli = Cli::parse();
    let handle = |input: &str| {
        if input.trim().is_empty() {
            return;
        }
        if let Err(e) = cli.process(input) {
            println!("ERROR: {e}");
        }
    };
    if cli.inputs.is_empty() {
        for line in stdin().lock().lines() {
            handle(&line?);
        }
    } else {
        for input in &cli.inputs {
            handle(input);
        }
    }
    Ok(())
}
