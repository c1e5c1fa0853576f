/// Author label attached to messages typed on this machine.
pub const LOCAL_AUTHOR: &str = "Me";

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    author: String,
    body: String,
}

impl Message {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns true when the body holds no text at all.
    pub fn is_blank(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_author_and_body_verbatim() {
        let message = Message::new("Me", "  hello  ");

        assert_eq!(message.author(), "Me");
        assert_eq!(message.body(), "  hello  ");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Message::new("Me", "hi"), Message::new("Me", "hi"));
        assert_ne!(Message::new("Me", "hi"), Message::new("You", "hi"));
    }

    #[test]
    fn empty_body_is_blank() {
        assert!(Message::new(LOCAL_AUTHOR, "").is_blank());
        assert!(!Message::new(LOCAL_AUTHOR, " ").is_blank());
    }
}
