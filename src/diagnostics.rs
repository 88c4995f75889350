//! Uniform wording for messages that end up on stderr.
//!
//! Recoverable parse anomalies go through `log::warn!` with a location prefix;
//! fatal errors carry the same prefix in their anyhow chain.

use std::fmt::Display;

/// Where in the input a message applies: file name plus run/client when known.
#[derive(Debug, Clone, Copy)]
pub struct Location<'a> {
    pub source: &'a str,
    pub iteration: Option<u64>,
    pub client: Option<&'a str>,
    pub thread_id: Option<&'a str>,
}

impl<'a> Location<'a> {
    pub fn file(source: &'a str) -> Self {
        Self {
            source,
            iteration: None,
            client: None,
            thread_id: None,
        }
    }

    pub fn run(mut self, iteration: u64) -> Self {
        self.iteration = Some(iteration);
        self
    }

    pub fn thread(mut self, client: &'a str, thread_id: &'a str) -> Self {
        self.client = Some(client);
        self.thread_id = Some(thread_id);
        self
    }
}

impl Display for Location<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)?;
        if let Some(it) = self.iteration {
            write!(f, " run {}", it)?;
        }
        if let (Some(client), Some(tid)) = (self.client, self.thread_id) {
            write!(f, " client {} id {}", client, tid)?;
        }
        Ok(())
    }
}

pub fn error_message(msg: impl Display) -> String {
    format!("error: {}", msg)
}

pub fn warn_message(at: Option<&Location<'_>>, msg: impl Display) -> String {
    match at {
        Some(at) => format!("{}: {}", at, msg),
        None => msg.to_string(),
    }
}
