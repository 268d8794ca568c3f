//! Output Formatter for Transcript Bridge.
//!
//! Renders a transcription result as plain text, SubRip subtitles, JSON or
//! Markdown, and writes the rendering next to the source file.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::errors::FormatError;
use crate::types::transcript::{Segment, TranscriptionResult};
use crate::types::transcription_config::OutputFormat;

/// Renders `result` in the requested format.
pub fn render(result: &TranscriptionResult, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Txt => Ok(render_txt(&result.segments)),
        OutputFormat::Srt => Ok(render_srt(&result.segments)),
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .map_err(|e| FormatError::Serialization(e.to_string())),
        OutputFormat::Markdown => Ok(render_markdown(&result.segments)),
    }
}

/// The source path with its extension replaced by the format's extension.
pub fn output_path(source: &Path, format: OutputFormat) -> PathBuf {
    source.with_extension(format.extension())
}

/// Renders `result` and writes it next to `source`, returning the written path.
pub fn write_output(
    result: &TranscriptionResult,
    source: &Path,
    format: OutputFormat,
) -> Result<PathBuf, FormatError> {
    let content = render(result, format)?;
    let path = output_path(source, format);
    fs::write(&path, content)
        .map_err(|e| FormatError::Io(format!("{}: {}", path.display(), e)))?;
    log::info!(
        "wrote {} segments to {}",
        result.segments.len(),
        path.display()
    );
    Ok(path)
}

fn render_txt(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        let _ = writeln!(out, "[{}] {}", minute_stamp(seg.start), seg.text.trim());
    }
    out
}

fn render_srt(segments: &[Segment]) -> String {
    let mut out = String::new();
    for (i, seg) in segments.iter().enumerate() {
        let _ = writeln!(out, "{}", i + 1);
        let _ = writeln!(out, "{} --> {}", srt_time(seg.start), srt_time(seg.end));
        let _ = writeln!(out, "{}", seg.text.trim());
        out.push('\n');
    }
    out
}

fn render_markdown(segments: &[Segment]) -> String {
    let mut out = String::from("# Transcription\n\n");
    for seg in segments {
        let _ = write!(out, "**[{}]** {}\n\n", minute_stamp(seg.start), seg.text.trim());
    }
    out
}

/// `MM:SS`; minutes keep counting past the hour.
pub fn minute_stamp(seconds: f64) -> String {
    let whole = whole_seconds(seconds);
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

/// `HH:MM:SS,mmm` with milliseconds truncated.
pub fn srt_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let whole = whole_seconds(seconds);
    let millis = ((seconds - whole as f64) * 1000.0) as u64;
    format!(
        "{:02}:{:02}:{:02},{:03}",
        whole / 3600,
        (whole % 3600) / 60,
        whole % 60,
        millis.min(999)
    )
}

fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    }
}
