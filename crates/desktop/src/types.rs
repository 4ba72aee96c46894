//! Outcomes handed from command handlers to whatever renders them.

use serde::Serialize;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Error,
}

/// A short titled message (a pop-up in a graphical shell).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Notification(Notification),
    Report { text: String },
}

impl Outcome {
    pub fn report(text: impl Into<String>) -> Self {
        Outcome::Report { text: text.into() }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Outcome::Notification(Notification {
                level: Level::Error,
                ..
            })
        )
    }
}

impl From<Notification> for Outcome {
    fn from(value: Notification) -> Self {
        Outcome::Notification(value)
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Notification(n) => writeln!(f, "[{}] {}", n.title, n.message),
            Outcome::Report { text } => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_serializes_with_kind_tag() {
        let outcome = Outcome::from(Notification::info("Item Added", "done"));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "notification",
                "level": "info",
                "title": "Item Added",
                "message": "done",
            })
        );
    }

    #[test]
    fn report_displays_text_verbatim() {
        assert_eq!(Outcome::report("a\nb\n").to_string(), "a\nb\n");
    }
}
