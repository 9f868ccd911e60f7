// SPDX-License-Identifier: MIT OR Apache-2.0
use anyhow::{Context, Result, bail};
use rest_error::{Classification, RestError};
use rest_logger::Logger;
use std::io::Read;
use std::path::Path;

/// Free-form cause text supplied on the command line.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct CauseText(String);

pub fn new_error(
    classification: Classification,
    message: String,
    cause: Option<String>,
) -> Result<String> {
    let err = match (classification, cause) {
        (Classification::InternalServerError, cause) => {
            let cause = cause.map(CauseText);
            RestError::internal_server_error(
                message,
                cause.as_ref().map(|c| c as &dyn std::error::Error),
            )
        }
        (_, Some(_)) => bail!("--cause is only accepted for internal errors"),
        (classification, None) => RestError::from_classification(classification, message),
    };
    Ok(err.to_json())
}

pub fn custom_error(status: u16, kind: String, message: String, causes: Vec<String>) -> String {
    RestError::new(message, status, kind, Some(causes)).to_json()
}

pub fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

pub fn render(input: &[u8], lossy: bool, logger: &dyn Logger) -> Result<String> {
    let err = match RestError::from_bytes(input) {
        Ok(err) => err,
        Err(decode) if lossy => {
            logger.info(&format!("wrapping raw payload as bad_request: {decode}"));
            RestError::bad_request(String::from_utf8_lossy(input).into_owned())
        }
        Err(decode) => {
            logger.error("failed to decode error payload", &decode);
            return Err(decode.into());
        }
    };
    Ok(err.render())
}

pub fn schema() -> Result<String> {
    serde_json::to_string_pretty(&rest_error::wire_schema()).context("serialize schema")
}
