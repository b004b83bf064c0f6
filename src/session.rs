//! Session state for one host-driven input field.
//!
//! [`KeyboardSession`] is the processing-thread owner of everything mutable:
//! the active configuration, the text validator, the authoritative field
//! state, and the consumer end of the update queue. It is an explicitly
//! constructed object handed to the entry points by the caller — there is no
//! ambient global instance.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::KeyboardConfig;
use crate::error::Result;
use crate::queue::{Stamped, UpdateQueue};
use crate::validate::{TextValidator, ValidatedText};

/// Authoritative text-field state as last applied on the processing thread.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current field content.
    pub text: String,
    /// Selection start, in characters (equals `selection_end` when there is
    /// no selection).
    pub selection_start: usize,
    /// Selection end, in characters.
    pub selection_end: usize,
}

/// A text-edit request queued from a host thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEditRequest {
    pub text: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

/// Producer-side handle to a session's update queue.
///
/// Cheap to clone and safe to use from any thread; the session drains the
/// queue on its own thread.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    queue: Arc<UpdateQueue<TextEditRequest>>,
}

impl SessionHandle {
    /// Queue a text edit. Returns the request's sequence stamp.
    ///
    /// If several edits are queued before the session drains them, only the
    /// most recent one is applied; the intermediates are dropped unseen.
    pub fn update_text_edit(
        &self,
        text: impl Into<String>,
        selection_start: usize,
        selection_end: usize,
    ) -> u64 {
        self.queue.push(TextEditRequest {
            text: text.into(),
            selection_start,
            selection_end,
        })
    }
}

/// One on-screen keyboard session.
///
/// # Examples
///
/// ```
/// use oskbridge::KeyboardSession;
///
/// let mut session = KeyboardSession::new();
/// let handle = session.handle();
///
/// // Host thread pushes the field state...
/// handle.update_text_edit("123", 3, 3);
///
/// // ...processing thread drains and edits.
/// session.process_pending();
/// let state = session.insert_text("4");
/// assert_eq!(state.text, "1234");
/// ```
#[derive(Debug)]
pub struct KeyboardSession {
    config: KeyboardConfig,
    validator: TextValidator,
    queue: Arc<UpdateQueue<TextEditRequest>>,
    field: FieldState,
}

impl KeyboardSession {
    /// Create a session with validation disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: KeyboardConfig::default(),
            validator: TextValidator::default(),
            queue: Arc::new(UpdateQueue::new()),
            field: FieldState::default(),
        }
    }

    /// Apply a keyboard-show configuration document.
    ///
    /// On success the session's validation mode, line handling and custom
    /// policy follow the document. On failure the session falls back to
    /// validation disabled and the error is returned so the caller can react;
    /// the failure is never fatal.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Config`] or [`crate::Error::CustomValidator`] when the
    /// document (or its nested custom-validator document) is malformed.
    pub fn configure(&mut self, json: &str) -> Result<()> {
        match KeyboardConfig::from_json(json) {
            Ok(config) => {
                self.validator = TextValidator::new(config.character_validation, config.line_type);
                self.validator.set_custom(config.custom_validator().cloned());
                self.config = config;
                Ok(())
            }
            Err(err) => {
                warn!("keyboard configuration rejected, validation disabled: {err}");
                self.config = KeyboardConfig::default();
                self.validator = TextValidator::default();
                Err(err)
            }
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }

    /// The authoritative field state.
    #[must_use]
    pub fn field(&self) -> &FieldState {
        &self.field
    }

    /// A producer handle for host threads.
    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            queue: Arc::clone(&self.queue),
        }
    }

    /// Drain queued text edits in arrival order and apply the newest one as
    /// the authoritative field state.
    ///
    /// Returns the applied state, or `None` when nothing (or only superseded
    /// requests) was queued.
    pub fn process_pending(&mut self) -> Option<&FieldState> {
        let mut applied = false;
        while let Some(Stamped { seq, value }) = self.queue.pop() {
            if !self.queue.is_newest(seq) {
                debug!(seq, "skipping superseded text edit");
                continue;
            }
            self.apply_text_edit(value);
            applied = true;
        }
        applied.then_some(&self.field)
    }

    /// Insert host-entered text at the current caret, running the validation
    /// pipeline.
    ///
    /// Pending host updates are drained first (latest wins). An active
    /// selection is replaced by the insertion. When the configuration allows
    /// emojis, per-character validation is skipped entirely so multi-char
    /// emoji sequences are not torn apart; otherwise the insertion is
    /// pre-truncated against the character limit, validated, and the limit is
    /// enforced again on the result.
    pub fn insert_text(&mut self, input: &str) -> &FieldState {
        self.process_pending();

        let mut chars: Vec<char> = self.field.text.chars().collect();
        let selection_start = self.field.selection_start.min(chars.len());
        let selection_end = self.field.selection_end.min(chars.len());
        if selection_end > selection_start {
            chars.drain(selection_start..selection_end);
        }
        let caret = selection_start;
        let text: String = chars.iter().collect();

        if self.config.emojis_allowed {
            let mut result = chars;
            let inserted: Vec<char> = input.chars().collect();
            let new_caret = caret + inserted.len();
            result.splice(caret..caret, inserted);
            self.field = FieldState {
                text: result.into_iter().collect(),
                selection_start: new_caret,
                selection_end: new_caret,
            };
            return &self.field;
        }

        let limit = self.config.character_limit as usize;
        let input_len = input.chars().count();
        let mut insertion = input;
        let truncated;
        if limit > 0 && chars.len() + input_len > limit {
            if chars.len() < limit {
                let allowed = limit - chars.len();
                truncated = input.chars().take(allowed).collect::<String>();
                insertion = &truncated;
            } else {
                // Field already full; refuse further input.
                return &self.field;
            }
        }

        let ValidatedText { text, caret } =
            self.validator.validate(&text, insertion, caret, Some(caret));
        let (text, caret) = apply_character_limit(text, caret, limit);

        self.field = FieldState {
            text,
            selection_start: caret,
            selection_end: caret,
        };
        &self.field
    }

    /// Run one validation pass directly, without touching session state.
    ///
    /// This is the narrow inbound contract for external collaborators that
    /// manage the field buffer themselves.
    #[must_use]
    pub fn validate(
        &self,
        text: &str,
        insertion: &str,
        caret: usize,
        selection_start: Option<usize>,
    ) -> ValidatedText {
        self.validator.validate(text, insertion, caret, selection_start)
    }

    fn apply_text_edit(&mut self, request: TextEditRequest) {
        let len = request.text.chars().count();
        // Platform selections occasionally arrive swapped.
        let (start, end) = if request.selection_start <= request.selection_end {
            (request.selection_start, request.selection_end)
        } else {
            (request.selection_end, request.selection_start)
        };
        self.field = FieldState {
            text: request.text,
            selection_start: start.min(len),
            selection_end: end.min(len),
        };
    }
}

impl Default for KeyboardSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate `text` to `limit` characters (0: unlimited) and clamp the caret.
fn apply_character_limit(text: String, caret: usize, limit: usize) -> (String, usize) {
    if limit == 0 {
        return (text, caret);
    }
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= limit {
        return (text, caret);
    }
    let truncated: String = chars[..limit].iter().collect();
    let caret = caret.min(limit);
    (truncated, caret)
}
