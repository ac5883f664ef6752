pub enum Msg {
    /// The browser changed the content (typing, deleting, cutting, dropping).
    Input,
    CompositionStart,
    CompositionEnd,
    /// Text to insert at the selection in place of the browser default
    /// (line breaks, plain-text paste).
    InsertText(String),
}
