//! Transcript Bridge RPC Server — JSON-RPC over stdin/stdout for the desktop UI.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"config.set", "params":{"config":{"language":"en","outputFormat":"srt"}}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use transcript_bridge::app::App;
use transcript_bridge::logging;
use transcript_bridge::platform;
use transcript_bridge::rpc_handler::handle_method;
use transcript_bridge::services::settings_engine::SettingsEngineTrait;

use log::LevelFilter;
use serde_json::{json, Value};

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn respond(out: &mut impl Write, response: &Value) -> io::Result<()> {
    writeln!(out, "{}", response)?;
    out.flush()
}

fn main() {
    // Installed before settings load; the configured level applies after.
    let log_file = platform::get_log_dir().join("transcript-bridge.log");
    if let Err(e) = logging::init_logger(LevelFilter::Trace, Some(&log_file)) {
        eprintln!("logger setup failed: {}", e);
    }
    log::set_max_level(logging::resolve_level(LevelFilter::Info));

    let app = match App::new(None) {
        Ok(app) => app,
        Err(e) => {
            log::error!("failed to initialize: {}", e);
            std::process::exit(1);
        }
    };

    log::set_max_level(logging::resolve_level(app.settings_engine.get_settings().log_level_filter()));
    log::info!("settings: {}", app.settings_engine.get_config_path());

    let app = Mutex::new(app);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    if respond(&mut out, &ready).is_err() {
        return;
    }

    let mut rate_limiter = RateLimiter::new(200);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log::error!("stdin read failed: {}", e);
                break;
            }
        };
        if line.trim().is_empty() { continue; }

        let response = match serde_json::from_str::<Value>(&line) {
            Err(e) => {
                log::warn!("unparsable request: {}", e);
                json!({"id":null,"error":format!("parse error: {}",e)})
            }
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                if !rate_limiter.check() {
                    json!({"id": id, "error": "rate limit exceeded"})
                } else {
                    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                    let params = req.get("params").cloned().unwrap_or(json!({}));
                    log::debug!("-> {}", method);

                    match handle_method(&app, method, &params) {
                        Ok(val) => json!({"id": id, "result": val}),
                        Err(err) => {
                            log::warn!("{} failed: {}", method, err);
                            json!({"id": id, "error": err})
                        }
                    }
                }
            }
        };

        if respond(&mut out, &response).is_err() {
            break;
        }
    }
    log::info!("stdin closed, exiting");
}
