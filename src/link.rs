//! Shared command dispatcher.
//!
//! A [`CommLink`] owns the transport capability and is the single path
//! every command takes to the device: format, send, decode the reply
//! framing, surface device errors as typed failures. Controllers hold it
//! in an [`Arc`]; axes hold a `Weak` back-reference to it.

use std::sync::Mutex;

use tracing::debug;

use crate::codes::ErrorCode;
use crate::error::{SmaractError, SmaractResult};
use crate::transport::Transport;

/// First byte of a reply that may be an error report.
const ERROR_MARKER: u8 = b'E';

/// Second byte distinguishing valid status frames (`ES...`) from error
/// reports. Some status replies begin with the error marker; only the
/// second byte tells them apart.
const STATUS_SENTINEL: u8 = b'S';

/// Dispatcher shared by a controller and its axes.
///
/// The transport sits behind a mutex so commands issued through one
/// controller, including through axis back-references, are serialized.
/// Callers sharing one physical transport across several controllers
/// must still serialize across those controllers themselves.
pub struct CommLink {
    transport: Mutex<Box<dyn Transport>>,
}

impl CommLink {
    pub(crate) fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport: Mutex::new(transport),
        }
    }

    /// Send one command and decode the reply framing.
    ///
    /// Returns the raw reply line on success. A reply flagged as an
    /// error report fails with [`SmaractError::Controller`] for
    /// documented codes or [`SmaractError::UnknownErrorCode`] otherwise;
    /// code 0 in an error-shaped frame means "No Error" and the reply is
    /// returned unchanged.
    pub fn send_cmd(&self, cmd: &str) -> SmaractResult<String> {
        let reply = {
            let mut transport = self
                .transport
                .lock()
                .map_err(|_| std::io::Error::other("transport mutex poisoned"))?;
            transport.send_cmd(cmd)?
        };
        debug!("send_cmd: {cmd} -> {reply}");
        decode_reply(reply)
    }
}

/// Apply the two-byte error-frame rule and resolve the error code.
fn decode_reply(reply: String) -> SmaractResult<String> {
    let bytes = reply.as_bytes();
    let is_error_frame =
        bytes.first() == Some(&ERROR_MARKER) && bytes.get(1) != Some(&STATUS_SENTINEL);
    if !is_error_frame {
        return Ok(reply);
    }

    // The error code is the field after the last comma.
    let field = match reply.rfind(',') {
        Some(pos) => &reply[pos + 1..],
        None => {
            return Err(SmaractError::Parse(format!(
                "error report without code field: {reply:?}"
            )))
        }
    };
    let code: u16 = field.trim().parse().map_err(|_| {
        SmaractError::Parse(format!("non-numeric error code in report: {reply:?}"))
    })?;

    if code == 0 {
        return Ok(reply);
    }
    match ErrorCode::from_code(code) {
        Some(kind) => Err(SmaractError::Controller { code, kind }),
        None => Err(SmaractError::UnknownErrorCode(code)),
    }
}
