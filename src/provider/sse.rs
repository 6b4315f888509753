//! Event-stream decoding: byte chunks to lines, lines to fragments.

use futures::stream::BoxStream;
use futures::{Stream, StreamExt};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::SonarError;
use crate::types::StreamFragment;

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

/// Reassemble newline-delimited lines from arbitrarily split byte chunks.
///
/// A trailing `\r` is dropped from each line and an unterminated final line
/// is flushed when the body ends. Lines that are not valid UTF-8 are logged
/// and dropped. A read error is yielded once and ends the stream.
pub fn sse_lines<S, B, E>(bytes: S) -> impl Stream<Item = Result<String, SonarError>> + Send + 'static
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Into<SonarError> + Send + 'static,
{
    async_stream::stream! {
        let mut buffer: Vec<u8> = Vec::new();
        let mut failed = false;
        futures::pin_mut!(bytes);

        while let Some(chunk) = bytes.next().await {
            match chunk {
                Ok(chunk) => buffer.extend_from_slice(chunk.as_ref()),
                Err(e) => {
                    let err: SonarError = e.into();
                    yield Err(err);
                    failed = true;
                    break;
                }
            }

            while let Some(pos) = buffer.iter().position(|b| *b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=pos).collect();
                if let Some(line) = decode_line(&line) {
                    yield Ok(line);
                }
            }
        }

        if !failed && !buffer.is_empty() {
            if let Some(line) = decode_line(&buffer) {
                yield Ok(line);
            }
        }
    }
}

fn decode_line(raw: &[u8]) -> Option<String> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    match std::str::from_utf8(raw) {
        Ok(line) => Some(line.to_string()),
        Err(e) => {
            warn!(error = %e, len = raw.len(), "skipping stream line that is not valid UTF-8");
            None
        }
    }
}

/// Turn event-stream lines into fragments.
///
/// Ends after `[DONE]` (emitting [`StreamFragment::Done`]) or when the lines
/// run out. Lines that fail to decode are logged and skipped; they never end
/// the stream.
pub fn parse_stream<S>(lines: S) -> BoxStream<'static, Result<StreamFragment, SonarError>>
where
    S: Stream<Item = Result<String, SonarError>> + Send + 'static,
{
    let stream = async_stream::stream! {
        futures::pin_mut!(lines);

        while let Some(line) = lines.next().await {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    yield Err(e);
                    break;
                }
            };

            match parse_line(&line) {
                LineEvent::Skip => continue,
                LineEvent::Delta(text) => yield Ok(StreamFragment::Delta(text)),
                LineEvent::Done => {
                    debug!("stream completed");
                    yield Ok(StreamFragment::Done);
                    break;
                }
            }
        }
    };

    Box::pin(stream)
}

#[derive(Debug, PartialEq, Eq)]
enum LineEvent {
    Skip,
    Delta(String),
    Done,
}

fn parse_line(line: &str) -> LineEvent {
    if line.is_empty() {
        return LineEvent::Skip;
    }

    let data = line.strip_prefix(DATA_PREFIX).unwrap_or(line);
    if data.trim() == DONE_SENTINEL {
        return LineEvent::Done;
    }

    let chunk: StreamChunk = match serde_json::from_str(data) {
        Ok(chunk) => chunk,
        Err(e) => {
            warn!(error = %e, line = data, "skipping undecodable stream chunk");
            return LineEvent::Skip;
        }
    };

    chunk
        .choices
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|choice| choice.delta)
        .and_then(|delta| delta.content)
        .filter(|text| !text.is_empty())
        .map_or(LineEvent::Skip, LineEvent::Delta)
}

// Wire chunk shape (internal)

#[derive(Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Option<Vec<StreamChoice>>,
}

#[derive(Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Option<StreamDelta>,
}

#[derive(Deserialize)]
struct StreamDelta {
    #[serde(default)]
    content: Option<String>,
}
