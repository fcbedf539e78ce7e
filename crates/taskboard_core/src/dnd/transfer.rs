//! Host-neutral stand-in for a drag event's data transfer object.

/// MIME type carrying the dragged item id.
pub const MIME_TEXT_PLAIN: &str = "text/plain";

/// Operation a drag source allows on its payload.
///
/// Board drags only ever move items, so copy/link are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Move,
}

/// Typed entries attached to one drag gesture.
///
/// Entry order is the order of first `set_data` per type, which is what
/// `types()` reports to drop targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `data` for `mime`, replacing any previous value of that type.
    pub fn set_data(&mut self, mime: &str, data: impl Into<String>) {
        let mime = mime.trim().to_ascii_lowercase();
        let data = data.into();
        match self.entries.iter_mut().find(|(entry_mime, _)| *entry_mime == mime) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((mime, data)),
        }
    }

    pub fn get_data(&self, mime: &str) -> Option<&str> {
        let mime = mime.trim().to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(entry_mime, _)| *entry_mime == mime)
            .map(|(_, data)| data.as_str())
    }

    /// Declared types in insertion order.
    pub fn types(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(mime, _)| mime.as_str())
    }

    pub fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    pub fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = effect;
    }
}
