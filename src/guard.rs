//! Change guard: decides whether the rendered descriptor needs writing.
//!
//! Skipping unchanged output keeps the file's timestamp stable so downstream
//! steps that watch it are not forced to redo work.

/// Whether the descriptor file should be (re)written.
///
/// `always_generate` forces a write. Otherwise the new text is compared with
/// the previous file content; a missing previous file counts as changed.
pub fn should_write(new_text: &str, previous_text: Option<&str>, always_generate: bool) -> bool {
    if always_generate {
        return true;
    }
    match previous_text {
        Some(previous) => new_text != previous,
        None => true,
    }
}
