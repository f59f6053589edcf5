//! Execution context: the interpreter's view of the outside world.
//!
//! The interpreter only ever talks to an [`ExecutionContext`]: it writes
//! output through it and reads or changes parameters through it. The
//! concrete [`RequestContext`] models one request: read-only request
//! parameters, a persistent (session) parameter map shared between
//! requests, a per-request temporary map, and a response header that is
//! emitted before the first body byte when enabled.

use std::fmt::Write as _;
use std::io::{self, Write};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::shared::PersistentParameters;

/// Failure reported by an execution context.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("output error: {0}")]
    Io(#[from] io::Error),
    /// Response properties cannot change once the header is out.
    #[error("cannot change `{property}`: the response header was already sent")]
    HeaderAlreadyGenerated { property: &'static str },
    #[error("unsupported output encoding `{0}`; only UTF-8 is supported")]
    UnsupportedEncoding(String),
}

/// Capabilities the interpreter needs from its environment.
pub trait ExecutionContext {
    /// Write raw bytes to the output sink.
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), ContextError>;

    /// Write text to the output sink.
    fn write(&mut self, text: &str) -> Result<(), ContextError> {
        self.write_bytes(text.as_bytes())
    }

    fn set_mime_type(&mut self, mime_type: &str) -> Result<(), ContextError>;

    /// Request parameter lookup. Request parameters are read-only.
    fn get_parameter(&self, name: &str) -> Option<String>;

    fn get_persistent_parameter(&self, name: &str) -> Option<String>;
    fn set_persistent_parameter(&mut self, name: &str, value: String);
    fn remove_persistent_parameter(&mut self, name: &str);

    fn get_temporary_parameter(&self, name: &str) -> Option<String>;
    fn set_temporary_parameter(&mut self, name: &str, value: String);
    fn remove_temporary_parameter(&mut self, name: &str);
}

/// An output cookie, sent as a `Set-Cookie` header line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: Option<String>,
    /// Lifetime in seconds.
    pub max_age: Option<u32>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Cookie {
            name: name.into(),
            value: value.into(),
            domain: None,
            path: None,
            max_age: None,
        }
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_max_age(mut self, seconds: u32) -> Self {
        self.max_age = Some(seconds);
        self
    }
}

const DEFAULT_MIME_TYPE: &str = "text/html";
const DEFAULT_ENCODING: &str = "UTF-8";

/// Execution context for one request, writing to `W`.
pub struct RequestContext<W: Write> {
    output: W,
    parameters: FxHashMap<String, String>,
    persistent: PersistentParameters,
    temporary: FxHashMap<String, String>,
    mime_type: String,
    encoding: String,
    status_code: u16,
    status_text: String,
    cookies: Vec<Cookie>,
    emit_header: bool,
    header_generated: bool,
}

impl<W: Write> RequestContext<W> {
    /// A context with no parameters, no header, and default response
    /// properties (`200 OK`, `text/html`, UTF-8).
    pub fn new(output: W) -> Self {
        RequestContext {
            output,
            parameters: FxHashMap::default(),
            persistent: PersistentParameters::new(),
            temporary: FxHashMap::default(),
            mime_type: DEFAULT_MIME_TYPE.to_owned(),
            encoding: DEFAULT_ENCODING.to_owned(),
            status_code: 200,
            status_text: "OK".to_owned(),
            cookies: Vec::new(),
            emit_header: false,
            header_generated: false,
        }
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: FxHashMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Share a persistent parameter map, typically one per session.
    #[must_use]
    pub fn with_persistent(mut self, persistent: PersistentParameters) -> Self {
        self.persistent = persistent;
        self
    }

    #[must_use]
    pub fn with_temporary(mut self, temporary: FxHashMap<String, String>) -> Self {
        self.temporary = temporary;
        self
    }

    /// Emit a response header before the first body write.
    #[must_use]
    pub fn with_header(mut self, emit_header: bool) -> Self {
        self.emit_header = emit_header;
        self
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn persistent(&self) -> &PersistentParameters {
        &self.persistent
    }

    pub fn header_generated(&self) -> bool {
        self.header_generated
    }

    /// Set the output encoding. Only UTF-8 (any spelling) is accepted.
    pub fn set_encoding(&mut self, encoding: &str) -> Result<(), ContextError> {
        self.check_header("encoding")?;
        if !is_utf8_label(encoding) {
            return Err(ContextError::UnsupportedEncoding(encoding.to_owned()));
        }
        self.encoding = encoding.to_owned();
        Ok(())
    }

    pub fn set_status_code(&mut self, code: u16) -> Result<(), ContextError> {
        self.check_header("status code")?;
        self.status_code = code;
        Ok(())
    }

    pub fn set_status_text(&mut self, text: &str) -> Result<(), ContextError> {
        self.check_header("status text")?;
        text.clone_into(&mut self.status_text);
        Ok(())
    }

    pub fn add_cookie(&mut self, cookie: Cookie) -> Result<(), ContextError> {
        self.check_header("cookies")?;
        self.cookies.push(cookie);
        Ok(())
    }

    /// Consume the context and hand back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn check_header(&self, property: &'static str) -> Result<(), ContextError> {
        if self.header_generated {
            Err(ContextError::HeaderAlreadyGenerated { property })
        } else {
            Ok(())
        }
    }

    /// Status line, content type, cookies, blank line.
    fn header(&self) -> String {
        let mut header = String::new();
        let _ = write!(
            header,
            "HTTP/1.1 {} {}\r\n",
            self.status_code, self.status_text
        );
        if self.mime_type.starts_with("text/") {
            let _ = write!(
                header,
                "Content-Type: {}; charset={}\r\n",
                self.mime_type, self.encoding
            );
        } else {
            let _ = write!(header, "Content-Type: {}\r\n", self.mime_type);
        }
        for cookie in &self.cookies {
            let _ = write!(header, "Set-Cookie: {}=\"{}\"", cookie.name, cookie.value);
            if let Some(domain) = &cookie.domain {
                let _ = write!(header, "; Domain={domain}");
            }
            if let Some(path) = &cookie.path {
                let _ = write!(header, "; Path={path}");
            }
            if let Some(max_age) = cookie.max_age {
                let _ = write!(header, "; Max-Age={max_age}");
            }
            header.push_str("\r\n");
        }
        header.push_str("\r\n");
        header
    }
}

fn is_utf8_label(encoding: &str) -> bool {
    encoding.eq_ignore_ascii_case("utf-8") || encoding.eq_ignore_ascii_case("utf8")
}

impl<W: Write> ExecutionContext for RequestContext<W> {
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), ContextError> {
        if self.emit_header && !self.header_generated {
            let header = self.header();
            debug!(status = self.status_code, mime = %self.mime_type, "response header");
            self.output.write_all(header.as_bytes())?;
            self.header_generated = true;
        }
        self.output.write_all(data)?;
        Ok(())
    }

    fn set_mime_type(&mut self, mime_type: &str) -> Result<(), ContextError> {
        self.check_header("mime type")?;
        mime_type.clone_into(&mut self.mime_type);
        Ok(())
    }

    fn get_parameter(&self, name: &str) -> Option<String> {
        self.parameters.get(name).cloned()
    }

    fn get_persistent_parameter(&self, name: &str) -> Option<String> {
        self.persistent.get(name)
    }

    fn set_persistent_parameter(&mut self, name: &str, value: String) {
        self.persistent.set(name, value);
    }

    fn remove_persistent_parameter(&mut self, name: &str) {
        self.persistent.remove(name);
    }

    fn get_temporary_parameter(&self, name: &str) -> Option<String> {
        self.temporary.get(name).cloned()
    }

    fn set_temporary_parameter(&mut self, name: &str, value: String) {
        self.temporary.insert(name.to_owned(), value);
    }

    fn remove_temporary_parameter(&mut self, name: &str) {
        self.temporary.remove(name);
    }
}
