//! Environment configuration model for local docker devnets.
//!
//! The generated document is read back by existing tooling, so the
//! serialized field names, the order of the environment keys, and the
//! separator style are all fixed and must not drift between releases.

use std::io;

use serde::Serialize;

/// Virtual chain id baked into every generated environment.
pub const VIRTUAL_CHAIN_ID: u32 = 42;

/// Port the local devnet server listens on.
pub const DEVNET_PORT: u16 = 8080;

/// A single named deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    #[serde(rename = "VirtualChain")]
    pub virtual_chain: u32,
    #[serde(rename = "Endpoints")]
    pub endpoints: Vec<String>,
    /// Only the experimental variant carries this field; the stable one
    /// omits it entirely rather than writing `false`.
    #[serde(rename = "Experimental", skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,
}

/// The two fixed environments. Modeled as a struct instead of a map so
/// that key order is a compile-time property, not a runtime accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environments {
    #[serde(rename = "docker")]
    pub docker: Environment,
    #[serde(rename = "docker-experimental")]
    pub docker_experimental: Environment,
}

/// Root of the generated configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    #[serde(rename = "Environments")]
    pub environments: Environments,
}

/// Builds the devnet endpoint URL for `ip`. Plain concatenation, any
/// string is accepted verbatim.
pub fn build_endpoint(ip: &str) -> String {
    format!("http://{}:{}", ip, DEVNET_PORT)
}

/// Builds the full two-environment configuration for `ip`. Pure and
/// deterministic, same structure and key order on every call.
pub fn build_config(ip: &str) -> Config {
    let endpoint = build_endpoint(ip);
    Config {
        environments: Environments {
            docker: Environment {
                virtual_chain: VIRTUAL_CHAIN_ID,
                endpoints: vec![endpoint.clone()],
                experimental: None,
            },
            docker_experimental: Environment {
                virtual_chain: VIRTUAL_CHAIN_ID,
                endpoints: vec![endpoint],
                experimental: Some(true),
            },
        },
    }
}

/// Single-line JSON with `", "` / `": "` separators. The consumers of
/// this document compare it as a string, and `serde_json`'s compact
/// formatter writes no spaces at all, so we carry our own formatter.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes `config` to the canonical single-line form.
pub fn to_json_string(config: &Config) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(256);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    config.serialize(&mut ser)?;
    Ok(String::from_utf8(buf).expect("serde_json output is valid UTF-8"))
}
