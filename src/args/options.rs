//! Resolved configuration handed to command handlers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::args::registry::{
    DEFAULT_EXTENSION, DEFAULT_METHOD, DEFAULT_PRT_METHOD, DEFAULT_RESOURCE, DEFAULT_RETRIES,
    DEFAULT_VERBOSITY, DEFAULT_WAIT,
};

/// Strongly typed view of one invocation's arguments.
///
/// Every declared field always carries a value: either what the user passed
/// or the declared default. Keys that match no declared field are kept
/// verbatim in [`overflow`](Self::overflow).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedArgs {
    // Global options
    pub database_path: Option<String>,
    pub help: bool,
    pub verbosity: i32,

    // Command path
    pub command: String,
    pub subcommands: Vec<String>,

    // Common options
    pub id: Option<String>,
    pub name: Option<String>,
    pub properties: Vec<String>,
    pub access_token: Option<String>,
    pub prt_cookie: Option<String>,
    pub refresh_token: Option<String>,
    pub prt_method: i32,
    pub reauth: bool,
    pub tenant_id: Option<String>,

    // Command specific options
    /// Mirrors `--name`; there is no flag of its own.
    pub app_name: Option<String>,
    pub path: Option<String>,
    pub run_as_user: bool,
    pub query: Option<String>,
    pub retries: i32,
    pub wait: i32,
    pub script: Option<String>,
    pub extension: String,
    pub method: i32,
    pub resource: String,

    /// Unrecognized options, keyed by the flag exactly as typed.
    pub overflow: BTreeMap<String, String>,
}

impl ResolvedArgs {
    /// Look up an option that no declared field consumed.
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.overflow.get(key).map(String::as_str)
    }

    /// Command followed by its subcommands, e.g. `["apps", "list"]`.
    pub fn command_path(&self) -> Vec<&str> {
        std::iter::once(self.command.as_str())
            .filter(|c| !c.is_empty())
            .chain(self.subcommands.iter().map(String::as_str))
            .collect()
    }
}

impl Default for ResolvedArgs {
    fn default() -> Self {
        Self {
            database_path: None,
            help: false,
            verbosity: DEFAULT_VERBOSITY,
            command: String::new(),
            subcommands: Vec::new(),
            id: None,
            name: None,
            properties: Vec::new(),
            access_token: None,
            prt_cookie: None,
            refresh_token: None,
            prt_method: DEFAULT_PRT_METHOD,
            reauth: false,
            tenant_id: None,
            app_name: None,
            path: None,
            run_as_user: false,
            query: None,
            retries: DEFAULT_RETRIES,
            wait: DEFAULT_WAIT,
            script: None,
            extension: DEFAULT_EXTENSION.to_string(),
            method: DEFAULT_METHOD,
            resource: DEFAULT_RESOURCE.to_string(),
            overflow: BTreeMap::new(),
        }
    }
}
