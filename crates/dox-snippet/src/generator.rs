//! Comment generation over a host text buffer.
//!
//! [`Generator::generate`] looks at the line under the cursor and the lines
//! after it, and decides what to insert after the `/**` opener:
//!
//! | Situation                                   | Outcome          |
//! |---------------------------------------------|------------------|
//! | generation switched off                     | `Disabled`       |
//! | cursor past the end of the buffer           | `Unavailable`    |
//! | no `/**` on the cursor line, nothing after  | `Closing`        |
//! | opener on the first line of the document    | `FileHeader`     |
//! | next line already starts with `*`           | `Continuation`   |
//! | declaration recognized                      | `Documented`     |
//! | declaration not recognized                  | `Closing`        |

use chrono::{Local, NaiveDate};
use dox_config::DoxConfig;
use dox_core::{Declaration, TextBuffer};
use dox_parser::{Classifier, ParserError};
use serde::Serialize;
use tracing::{debug, warn};

use crate::assemble::assemble;
use crate::header::{file_header, render_file_header};
use crate::snippet::{CLOSING_BODY, CONTINUATION, Snippet};

pub const UNAVAILABLE_MESSAGE: &str = "Unable to retrieve snippet";

/// What to insert at the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Disabled,
    Unavailable {
        message: String,
    },
    Closing {
        text: String,
    },
    Continuation {
        text: String,
    },
    FileHeader {
        snippet: Snippet,
        text: String,
    },
    Documented {
        declaration: Declaration,
        snippet: Snippet,
        text: String,
    },
}

impl Outcome {
    fn closing() -> Self {
        Self::Closing {
            text: CLOSING_BODY.to_string(),
        }
    }

    /// Snippet text to insert, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Disabled | Self::Unavailable { .. } => None,
            Self::Closing { text }
            | Self::Continuation { text }
            | Self::FileHeader { text, .. }
            | Self::Documented { text, .. } => Some(text.as_str()),
        }
    }

    /// Informational message for the host's status bar.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        match self {
            Self::Unavailable { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Produces documentation comment bodies using one configuration.
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    config: &'a DoxConfig,
    classifier: Classifier,
    today: NaiveDate,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(config: &'a DoxConfig) -> Self {
        Self {
            config,
            classifier: Classifier::new(config.parser.max_lines),
            today: Local::now().date_naive(),
        }
    }

    /// Use `today` for the file header date instead of the local date.
    #[must_use]
    pub const fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Generate the text to insert for a cursor at byte offset `cursor`.
    pub fn generate<B: TextBuffer>(&self, buffer: &B, cursor: usize) -> Outcome {
        if !self.config.general.enabled {
            debug!("comment generation is disabled");
            return Outcome::Disabled;
        }

        if cursor > buffer.len() {
            let error = ParserError::NoInputAvailable { offset: cursor };
            warn!(%error, len = buffer.len(), "cursor outside the buffer");
            return Outcome::Unavailable {
                message: UNAVAILABLE_MESSAGE.to_string(),
            };
        }

        let Some(line) = buffer.line_at(cursor) else {
            debug!(cursor, "no line under the cursor");
            return Outcome::closing();
        };
        if !line.text.contains("/**") {
            return Outcome::closing();
        }

        if line.start == 0 {
            let snippet = file_header(&self.config.header, self.today);
            let text = render_file_header(
                &snippet,
                line.text,
                &self.config.header,
                self.config.tag_sigil(),
            );
            return Outcome::FileHeader { snippet, text };
        }

        let lookahead = self
            .classifier
            .max_lines()
            .saturating_add(1)
            .saturating_mul(2);
        let following: Vec<&str> = buffer
            .lines_from(line.next)
            .take(lookahead)
            .map(|l| l.text)
            .collect();

        match following.first() {
            None => {
                let error = ParserError::NoInputAvailable { offset: line.next };
                debug!(%error, "nothing follows the opener");
                return Outcome::closing();
            }
            Some(next) if next.trim().is_empty() => return Outcome::closing(),
            Some(next) if next.trim_start().starts_with('*') => {
                return Outcome::Continuation {
                    text: CONTINUATION.to_string(),
                };
            }
            Some(_) => {}
        }

        match self.classifier.classify(&following) {
            Ok(declaration) => {
                let snippet = assemble(&declaration);
                let text = snippet.render(self.config.tag_sigil());
                Outcome::Documented {
                    declaration,
                    snippet,
                    text,
                }
            }
            Err(error) => {
                debug!(%error, "falling back to an empty comment body");
                Outcome::closing()
            }
        }
    }
}
