//! Response decoding
//!
//! Turns either shape of `ResponseBody` into the same sequence of UTF-8 text
//! fragments. Both `AgentClient::invoke` and `AgentClient::invoke_stream`
//! go through `text_fragments`, so the buffered result is always the
//! concatenation of the streamed fragments.

use futures::{stream, StreamExt};

use crate::logging::SharedLogger;

use super::error::{InvocationError, InvocationResult};
use super::types::{EventStream, ResponseBody, TextStream};

/// Incremental UTF-8 decoder
///
/// Holds back an incomplete multi-byte sequence at the end of one event and
/// completes it with the bytes of the next.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next piece of input
    ///
    /// Returns the text that is complete so far; may be empty.
    pub fn push(&mut self, data: &[u8]) -> InvocationResult<String> {
        let mut buf = std::mem::take(&mut self.pending);
        buf.extend_from_slice(data);

        match std::str::from_utf8(&buf) {
            Ok(_) => String::from_utf8(buf).map_err(|e| InvocationError::Decode(e.to_string())),
            Err(e) if e.error_len().is_some() => Err(InvocationError::Decode(e.to_string())),
            Err(e) => {
                self.pending = buf.split_off(e.valid_up_to());
                String::from_utf8(buf).map_err(|e| InvocationError::Decode(e.to_string()))
            }
        }
    }

    /// Signal end of input; fails if a sequence was left incomplete
    pub fn finish(&mut self) -> InvocationResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let dangling = std::mem::take(&mut self.pending).len();
        Err(InvocationError::Decode(format!(
            "incomplete UTF-8 sequence of {} byte(s) at end of response",
            dangling
        )))
    }
}

struct EventDecodeState {
    events: EventStream,
    decoder: Utf8Decoder,
    logger: SharedLogger,
    finished: bool,
}

/// Normalize a response body into text fragments in arrival order
///
/// A complete body yields exactly one fragment. Events that carry no
/// recognizable payload are skipped. The first error ends the stream.
pub fn text_fragments(body: ResponseBody, logger: SharedLogger) -> TextStream {
    match body {
        ResponseBody::Complete(data) => {
            let mut decoder = Utf8Decoder::new();
            let result = decoder
                .push(&data)
                .and_then(|text| decoder.finish().map(|_| text));
            Box::pin(stream::once(async move { result }))
        }
        ResponseBody::Events(events) => {
            let state = EventDecodeState {
                events,
                decoder: Utf8Decoder::new(),
                logger,
                finished: false,
            };
            Box::pin(stream::unfold(state, |mut state| async move {
                if state.finished {
                    return None;
                }
                loop {
                    match state.events.next().await {
                        Some(Ok(event)) => {
                            let data = match event.into_bytes() {
                                Ok(data) => data,
                                Err(shape) => {
                                    state.logger.debug(&format!(
                                        "Skipping unrecognized response event: {}",
                                        shape
                                    ));
                                    continue;
                                }
                            };
                            let result = state.decoder.push(&data);
                            state.finished = result.is_err();
                            return Some((result, state));
                        }
                        Some(Err(e)) => {
                            state.finished = true;
                            return Some((Err(e), state));
                        }
                        None => {
                            state.finished = true;
                            return match state.decoder.finish() {
                                Ok(()) => None,
                                Err(e) => Some((Err(e), state)),
                            };
                        }
                    }
                }
            }))
        }
    }
}
