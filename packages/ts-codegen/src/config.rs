//! The configuration handed to `@cosmwasm/ts-codegen`.
//!
//! Field names serialize to the camelCase keys the generator expects.

use std::path::PathBuf;

use serde::Serialize;

/// Name of the contract in the generated bindings (`TradeClient`, `useTradeOfferQuery`, ...)
pub const CONTRACT_NAME: &str = "Trade";
/// Schema directory, relative to the `ts/` directory the generator runs in
pub const SCHEMA_DIR: &str = "../schema";
pub const OUT_PATH: &str = "./types/";

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodegenConfig {
    pub contracts: Vec<ContractSource>,
    pub out_path: PathBuf,
    pub options: Options,
}

/// A contract whose schema files live in `dir`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ContractSource {
    pub name: String,
    pub dir: PathBuf,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub bundle: Toggle,
    pub types: Toggle,
    pub client: Toggle,
    pub react_query: ReactQueryOptions,
    pub recoil: Toggle,
    pub message_composer: Toggle,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub enabled: bool,
}

impl Toggle {
    pub const ON: Toggle = Toggle { enabled: true };
    pub const OFF: Toggle = Toggle { enabled: false };
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReactQueryVersion {
    V3,
    V4,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReactQueryOptions {
    pub enabled: bool,
    pub optional_client: bool,
    pub version: ReactQueryVersion,
    pub mutations: bool,
    pub query_keys: bool,
}

impl CodegenConfig {
    /// The bindings shipped with the trade contract: types, client, react-query v4 hooks
    /// and message composers, one file per kind (no bundle), no recoil.
    pub fn trade() -> Self {
        CodegenConfig {
            contracts: vec![ContractSource {
                name: CONTRACT_NAME.to_string(),
                dir: PathBuf::from(SCHEMA_DIR),
            }],
            out_path: PathBuf::from(OUT_PATH),
            options: Options {
                bundle: Toggle::OFF,
                types: Toggle::ON,
                client: Toggle::ON,
                react_query: ReactQueryOptions {
                    enabled: true,
                    optional_client: true,
                    version: ReactQueryVersion::V4,
                    mutations: true,
                    query_keys: true,
                },
                recoil: Toggle::OFF,
                message_composer: Toggle::ON,
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trade_has_single_contract() {
        let config = CodegenConfig::trade();
        assert_eq!(
            config.contracts,
            vec![ContractSource {
                name: "Trade".to_string(),
                dir: PathBuf::from("../schema"),
            }]
        );
    }

    #[test]
    fn serializes_to_generator_keys() {
        let value = serde_json::to_value(CodegenConfig::trade()).unwrap();
        assert_eq!(
            value,
            json!({
                "contracts": [{ "name": "Trade", "dir": "../schema" }],
                "outPath": "./types/",
                "options": {
                    "bundle": { "enabled": false },
                    "types": { "enabled": true },
                    "client": { "enabled": true },
                    "reactQuery": {
                        "enabled": true,
                        "optionalClient": true,
                        "version": "v4",
                        "mutations": true,
                        "queryKeys": true
                    },
                    "recoil": { "enabled": false },
                    "messageComposer": { "enabled": true }
                }
            })
        );
    }

    #[test]
    fn toggles_pass_through() {
        let mut config = CodegenConfig::trade();
        config.options.types = Toggle::OFF;
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["options"]["types"]["enabled"], json!(false));

        // everything else untouched
        assert_eq!(value["options"]["client"]["enabled"], json!(true));
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(
            CodegenConfig::trade().to_json().unwrap(),
            CodegenConfig::trade().to_json().unwrap()
        );
    }
}
