// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! MCP server over stdio.
//!
//! One JSON-RPC message per line on stdin, one response per line on stdout.
//! Stdout carries nothing but protocol frames.

pub mod protocol;

use crate::error::Result;
use crate::git::VersionControl;
use crate::tools::{tool_definitions, ToolDispatcher};
use serde_json::{json, Value};
use std::io::{BufRead, Write};

use protocol::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, ServerCapabilities, ServerInfo,
    ToolCallParams, ToolCallResult, ToolsCapability, INVALID_PARAMS, METHOD_NOT_FOUND,
    PARSE_ERROR, PROTOCOL_VERSION,
};

/// Serves tool calls for MCP clients.
pub struct McpServer<V> {
    tools: ToolDispatcher<V>,
}

impl<V: VersionControl> McpServer<V> {
    /// Create a server around a dispatcher.
    pub fn new(tools: ToolDispatcher<V>) -> Self {
        Self { tools }
    }

    /// Serve stdin/stdout until stdin closes.
    pub fn run(&self) -> Result<()> {
        tracing::info!("Starting MCP server on stdio");
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.serve(stdin.lock(), stdout.lock())?;
        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Serve line-delimited JSON-RPC from `reader`, answering on `writer`.
    ///
    /// Lines that are not UTF-8 or not JSON get a parse error; only I/O
    /// failures end the loop.
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        for line in reader.split(b'\n') {
            let response = match String::from_utf8(line?) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => match serde_json::from_str::<JsonRpcRequest>(line.trim()) {
                    Ok(request) => self.handle_request(request),
                    Err(e) => {
                        tracing::warn!("Unparseable message: {}", e);
                        Some(parse_error(format!("Parse error: {}", e)))
                    }
                },
                Err(e) => {
                    tracing::warn!("Message is not UTF-8: {}", e);
                    Some(parse_error(format!("Parse error: {}", e)))
                }
            };

            if let Some(response) = response {
                serde_json::to_writer(&mut writer, &response)?;
                writer.write_all(b"\n")?;
                writer.flush()?;
            }
        }

        Ok(())
    }

    /// Handle one request. Notifications produce no response.
    pub fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!("Received {}", request.method);

        let Some(id) = request.id else {
            if request.method != "notifications/initialized" {
                tracing::debug!("Ignoring notification {}", request.method);
            }
            return None;
        };

        let response = match request.method.as_str() {
            "initialize" => {
                let result = InitializeResult {
                    protocol_version: PROTOCOL_VERSION,
                    capabilities: ServerCapabilities {
                        tools: ToolsCapability {},
                    },
                    server_info: ServerInfo {
                        name: "gmc",
                        version: crate::version::VERSION,
                    },
                };
                JsonRpcResponse::success(id, json!(result))
            }
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, json!({ "tools": tool_definitions() })),
            "tools/call" => match serde_json::from_value::<ToolCallParams>(request.params) {
                Ok(params) => {
                    let result = ToolCallResult::from(self.tools.call(&params.name, &params.arguments));
                    JsonRpcResponse::success(id, json!(result))
                }
                Err(e) => {
                    JsonRpcResponse::failure(id, INVALID_PARAMS, format!("Invalid params: {}", e))
                }
            },
            other => JsonRpcResponse::failure(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        };

        Some(response)
    }
}

fn parse_error(message: String) -> JsonRpcResponse {
    JsonRpcResponse::failure(Value::Null, PARSE_ERROR, message)
}
