//! Request Processor Bridge
//!
//! QuickBooks の Request Processor を外部のブリッジプロセス経由で呼び出す実装。
//! 1行1メッセージのJSONを標準入出力でやり取りする。
//!
//! ```text
//! -> {"op":"open_connection","app_id":"","app_name":"Payment Terms Import"}
//! <- {"ok":true}
//! -> {"op":"begin_session","company_file":"","mode":2}
//! <- {"ok":true,"value":"{ticket}"}
//! -> {"op":"process_request","ticket":"{ticket}","request":"<?xml ..."}
//! <- {"ok":true,"value":"<?xml ..."}
//! <- {"ok":false,"error":"..."}
//! ```

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};

use super::processor::{FileOpenMode, ProcessorFactory, RequestProcessor, SessionTicket};

#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum BridgeCommand<'a> {
    OpenConnection { app_id: &'a str, app_name: &'a str },
    BeginSession { company_file: &'a str, mode: u8 },
    ProcessRequest { ticket: &'a str, request: &'a str },
    EndSession { ticket: &'a str },
    CloseConnection,
}

#[derive(Debug, Deserialize)]
struct BridgeReply {
    ok: bool,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Request processor backed by a bridge child process
pub struct BridgeProcessor {
    _child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl BridgeProcessor {
    /// Spawn the bridge executable
    pub fn spawn(command: &str, args: &[String]) -> Result<Self> {
        let program = shellexpand::tilde(command).to_string();
        let mut child = Command::new(&program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to start request processor bridge: {}", program))?;

        let stdin = child
            .stdin
            .take()
            .context("Bridge process has no stdin")?;
        let stdout = child
            .stdout
            .take()
            .context("Bridge process has no stdout")?;

        Ok(Self {
            _child: child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }

    async fn call(&mut self, command: &BridgeCommand<'_>) -> Result<Option<String>> {
        let mut line = serde_json::to_string(command).context("Failed to encode bridge command")?;
        line.push('\n');
        debug!("bridge <- {} bytes", line.len());

        self.stdin
            .write_all(line.as_bytes())
            .await
            .context("Failed to write to bridge process")?;
        self.stdin.flush().await.context("Failed to flush bridge stdin")?;

        let mut reply = String::new();
        let read = self
            .stdout
            .read_line(&mut reply)
            .await
            .context("Failed to read from bridge process")?;
        if read == 0 {
            bail!("Bridge process closed its output");
        }
        debug!("bridge -> {} bytes", read);

        parse_reply(&reply)
    }
}

fn parse_reply(line: &str) -> Result<Option<String>> {
    let reply: BridgeReply = serde_json::from_str(line.trim_end())
        .with_context(|| format!("Invalid bridge reply: {}", line.trim_end()))?;

    if reply.ok {
        Ok(reply.value)
    } else {
        Err(anyhow!(reply
            .error
            .unwrap_or_else(|| "Unknown bridge error".to_string())))
    }
}

#[async_trait]
impl RequestProcessor for BridgeProcessor {
    async fn open_connection(&mut self, app_id: &str, app_name: &str) -> Result<()> {
        self.call(&BridgeCommand::OpenConnection { app_id, app_name })
            .await
            .context("OpenConnection failed")?;
        Ok(())
    }

    async fn begin_session(
        &mut self,
        company_file: &str,
        mode: FileOpenMode,
    ) -> Result<SessionTicket> {
        let ticket = self
            .call(&BridgeCommand::BeginSession {
                company_file,
                mode: mode.code(),
            })
            .await
            .context("BeginSession failed")?
            .context("BeginSession returned no ticket")?;
        Ok(SessionTicket(ticket))
    }

    async fn process_request(&mut self, ticket: &SessionTicket, request: &str) -> Result<String> {
        self.call(&BridgeCommand::ProcessRequest {
            ticket: ticket.as_str(),
            request,
        })
        .await
        .context("ProcessRequest failed")?
        .context("ProcessRequest returned no response")
    }

    async fn end_session(&mut self, ticket: &SessionTicket) -> Result<()> {
        self.call(&BridgeCommand::EndSession {
            ticket: ticket.as_str(),
        })
        .await
        .context("EndSession failed")?;
        Ok(())
    }

    async fn close_connection(&mut self) -> Result<()> {
        self.call(&BridgeCommand::CloseConnection)
            .await
            .context("CloseConnection failed")?;
        Ok(())
    }
}

/// Production implementation of ProcessorFactory
pub struct BridgeProcessorFactory {
    command: String,
    args: Vec<String>,
}

impl BridgeProcessorFactory {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }
}

#[async_trait]
impl ProcessorFactory for BridgeProcessorFactory {
    async fn create_processor(&self) -> Result<Box<dyn RequestProcessor>> {
        let processor = BridgeProcessor::spawn(&self.command, &self.args)?;
        Ok(Box::new(processor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_encoding() {
        let json = serde_json::to_string(&BridgeCommand::BeginSession {
            company_file: "",
            mode: 2,
        })
        .unwrap();
        assert_eq!(json, r#"{"op":"begin_session","company_file":"","mode":2}"#);

        let json = serde_json::to_string(&BridgeCommand::CloseConnection).unwrap();
        assert_eq!(json, r#"{"op":"close_connection"}"#);
    }

    #[test]
    fn test_request_payload_stays_on_one_line() {
        let json = serde_json::to_string(&BridgeCommand::ProcessRequest {
            ticket: "t",
            request: "<QBXML>\n<A/>\n</QBXML>\n",
        })
        .unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_parse_reply() {
        assert_eq!(parse_reply("{\"ok\":true}\n").unwrap(), None);
        assert_eq!(
            parse_reply("{\"ok\":true,\"value\":\"ticket-1\"}\n").unwrap(),
            Some("ticket-1".to_string())
        );

        let err = parse_reply("{\"ok\":false,\"error\":\"QuickBooks not running\"}").unwrap_err();
        assert_eq!(err.to_string(), "QuickBooks not running");

        assert!(parse_reply("not json").is_err());
    }

    #[tokio::test]
    async fn test_spawn_missing_executable() {
        let factory = BridgeProcessorFactory::new("/nonexistent/qbxmlrp-bridge".to_string(), vec![]);
        let err = factory.create_processor().await.err().unwrap();
        assert!(err.to_string().contains("Failed to start request processor bridge"));
    }

    #[cfg(unix)]
    fn script_bridge(script: &str) -> BridgeProcessor {
        BridgeProcessor::spawn("sh", &["-c".to_string(), script.to_string()]).unwrap()
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_bridge_full_session() {
        let mut bridge = script_bridge(
            r#"read l; echo '{"ok":true}'
read l; echo '{"ok":true,"value":"ticket-1"}'
read l; echo '{"ok":true,"value":"<QBXML/>"}'
read l; echo '{"ok":true}'
read l; echo '{"ok":true}'"#,
        );

        bridge.open_connection("", "Payment Terms Import").await.unwrap();
        let ticket = bridge
            .begin_session("", FileOpenMode::DoNotCare)
            .await
            .unwrap();
        assert_eq!(ticket.as_str(), "ticket-1");
        let response = bridge.process_request(&ticket, "<QBXML/>").await.unwrap();
        assert_eq!(response, "<QBXML/>");
        bridge.end_session(&ticket).await.unwrap();
        bridge.close_connection().await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_bridge_error_reply() {
        let mut bridge = script_bridge(
            r#"read l; echo '{"ok":false,"error":"Could not start QuickBooks."}'"#,
        );

        let err = bridge.open_connection("", "Payment Terms Import").await.unwrap_err();
        assert!(format!("{:#}", err).contains("Could not start QuickBooks."));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_bridge_exited() {
        let mut bridge = script_bridge("exit 0");

        let err = bridge.open_connection("", "Payment Terms Import").await.unwrap_err();
        assert!(format!("{:#}", err).contains("OpenConnection failed"));
    }
}
