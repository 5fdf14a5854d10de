//! Transport capability consumed by the protocol layer.
//!
//! Opening the physical connection (serial port, TCP socket), byte-level
//! framing and timeouts all live behind this trait. The protocol layer
//! performs exactly one `send_cmd` round trip per command and imposes no
//! timeout of its own.

use crate::error::SmaractResult;

/// One synchronous write/read cycle against the controller.
///
/// Implementations return the reply line already stripped of framing and
/// line terminators, and never return an empty string for a successful
/// exchange.
pub trait Transport: Send {
    fn send_cmd(&mut self, cmd: &str) -> SmaractResult<String>;
}

pub mod mock {
    //! Scripted transport for exercising the protocol layer without
    //! hardware.

    use std::collections::VecDeque;
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::Transport;
    use crate::error::SmaractResult;

    /// Shared log of every command a [`MockTransport`] has been asked to
    /// send, in order. Clone the handle before handing the transport to a
    /// controller.
    pub type SentLog = Arc<Mutex<Vec<String>>>;

    /// Transport double that replays a scripted reply sequence.
    ///
    /// Replies are consumed front to back; once the script is exhausted
    /// the optional fixed reply is repeated indefinitely. Running dry
    /// with no fixed reply yields an I/O error, which in practice means
    /// the test sent more commands than it scripted.
    pub struct MockTransport {
        script: VecDeque<String>,
        fixed: Option<String>,
        sent: SentLog,
    }

    impl MockTransport {
        /// Transport answering with `replies` in order.
        pub fn with_replies<I, S>(replies: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                script: replies.into_iter().map(Into::into).collect(),
                fixed: None,
                sent: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Transport answering every command with the same reply.
        pub fn with_fixed_reply(reply: &str) -> Self {
            Self {
                script: VecDeque::new(),
                fixed: Some(reply.to_string()),
                sent: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Handle to the log of sent commands.
        pub fn sent_log(&self) -> SentLog {
            Arc::clone(&self.sent)
        }
    }

    impl Transport for MockTransport {
        fn send_cmd(&mut self, cmd: &str) -> SmaractResult<String> {
            if let Ok(mut log) = self.sent.lock() {
                log.push(cmd.to_string());
            }
            if let Some(reply) = self.script.pop_front() {
                return Ok(reply);
            }
            match &self.fixed {
                Some(reply) => Ok(reply.clone()),
                None => Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("mock transport has no reply scripted for {cmd:?}"),
                )
                .into()),
            }
        }
    }

}
