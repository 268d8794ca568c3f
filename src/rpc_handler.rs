//! RPC method handler for the Transcript Bridge JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` turns loosely typed request params into records, runs the
//! requested operation and answers with the records' wire representation.

use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::record::Record;
use crate::services::formatter;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::file_item::{is_supported_media, FileItem};
use crate::types::transcript::TranscriptionResult;
use crate::types::transcription_config::{OutputFormat, TranscriptionConfig};

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Listings ───
        "languages.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.catalog().options()).map_err(|e| e.to_string())
        }
        "formats.list" => {
            let arr: Vec<Value> = OutputFormat::all()
                .iter()
                .map(|f| json!({"code": f.as_str(), "name": f.label(), "extension": format!(".{}", f.extension())}))
                .collect();
            Ok(json!(arr))
        }

        // ─── Config ───
        "config.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(&a.settings_engine.get_settings().transcription)
                .map_err(|e| e.to_string())
        }
        "config.set" => {
            let source = params.get("config").ok_or("missing config")?;
            let config = TranscriptionConfig::from_value(source).map_err(|e| e.to_string())?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine
                .set_transcription(config.clone())
                .map_err(|e| e.to_string())?;
            serde_json::to_value(config).map_err(|e| e.to_string())
        }
        "config.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            serde_json::to_value(&a.settings_engine.get_settings().transcription)
                .map_err(|e| e.to_string())
        }

        // ─── Files ───
        "files.inspect" => {
            let paths = params.get("paths").and_then(|v| v.as_array()).ok_or("missing paths")?;
            let media = paths
                .iter()
                .filter_map(|p| p.as_str())
                .map(PathBuf::from)
                .filter(|p| {
                    let supported = is_supported_media(p);
                    if !supported {
                        log::debug!("skipping unsupported input: {}", p.display());
                    }
                    supported
                });
            let items = FileItem::scan(media);
            serde_json::to_value(items).map_err(|e| e.to_string())
        }
        "file.transition" => {
            let item = FileItem::from_value(params.get("item").ok_or("missing item")?)
                .map_err(|e| e.to_string())?;
            let action = params.get("action").and_then(|v| v.as_str()).ok_or("missing action")?;
            let next = match action {
                "start" => item.start_processing(),
                "progress" => {
                    let progress = params.get("progress").and_then(|v| v.as_f64()).ok_or("missing progress")?;
                    item.with_progress(progress)
                }
                "complete" => item.complete(),
                "fail" => {
                    let message = params.get("error").and_then(|v| v.as_str()).ok_or("missing error")?;
                    item.fail(message)
                }
                "cancel" => item.cancel(),
                "reset" => Ok(item.reset()),
                other => return Err(format!("unknown action: {}", other)),
            }
            .map_err(|e| e.to_string())?;
            serde_json::to_value(next).map_err(|e| e.to_string())
        }
        "file.check" => {
            let item = FileItem::from_value(params.get("item").ok_or("missing item")?)
                .map_err(|e| e.to_string())?;
            item.check_invariants().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Output ───
        "result.render" => {
            let result = TranscriptionResult::from_value(params.get("result").ok_or("missing result")?)
                .map_err(|e| e.to_string())?;
            let format = parse_format(params)?;
            let content = formatter::render(&result, format).map_err(|e| e.to_string())?;
            Ok(json!({"content": content}))
        }
        "result.write" => {
            let result = TranscriptionResult::from_value(params.get("result").ok_or("missing result")?)
                .map_err(|e| e.to_string())?;
            let format = parse_format(params)?;
            let source = params
                .get("sourcePath")
                .and_then(|v| v.as_str())
                .unwrap_or(result.file_path.as_str())
                .to_string();
            if source.is_empty() {
                return Err("missing sourcePath".to_string());
            }
            let path = formatter::write_output(&result, &PathBuf::from(source), format)
                .map_err(|e| e.to_string())?;
            Ok(json!({"path": path.to_string_lossy()}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

fn parse_format(params: &Value) -> Result<OutputFormat, String> {
    let raw = params.get("format").and_then(|v| v.as_str()).ok_or("missing format")?;
    raw.parse::<OutputFormat>().map_err(|e| e.to_string())
}
