use serde::Serialize;

/// One reply produced by the dialog engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    Text {
        text: String,
        quick_replies: Vec<QuickReply>,
    },
    Attachment {
        url: String,
        kind: AttachmentKind,
    },
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            quick_replies: Vec::new(),
        }
    }

    pub fn text_with_replies(text: impl Into<String>, quick_replies: Vec<QuickReply>) -> Self {
        Self::Text {
            text: text.into(),
            quick_replies,
        }
    }

    pub fn file(url: impl Into<String>) -> Self {
        Self::Attachment {
            url: url.into(),
            kind: AttachmentKind::File,
        }
    }

    /// Short label for logs.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Attachment { kind, .. } => kind.as_str(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Attachment { .. } => None,
        }
    }
}

/// A button-style reply option; tapping it sends `payload` back as input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickReply {
    pub content_type: &'static str,
    pub title: String,
    pub payload: String,
}

impl QuickReply {
    pub fn text(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            content_type: "text",
            title: title.into(),
            payload: payload.into(),
        }
    }
}

/// Send API attachment type. Materials are always sent as files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    File,
}

impl AttachmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
        }
    }
}
