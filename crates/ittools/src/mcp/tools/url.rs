use super::{json_content, JsonRpcError, INVALID_PARAMS};
use crate::prelude::eprintln;
use ittools_core::url::{parse_url, process_codec, CodecRequest, ParseRequest};
use serde::de::DeserializeOwned;

fn parse_arguments<T: DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::new(INVALID_PARAMS, format!("Invalid arguments: {e}")))
}

pub async fn handle_url_parse(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let request: ParseRequest = parse_arguments(arguments)?;

    if global.verbose {
        eprintln!("Calling url_parse: url={}", request.url);
    }

    let response = parse_url(&request)?;

    json_content(&response)
}

pub async fn handle_url_encode(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let request: CodecRequest = parse_arguments(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling url_encode: mode={}, text={}",
            request.mode, request.text
        );
    }

    let response = process_codec(&request)?;

    json_content(&response)
}
