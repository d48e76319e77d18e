//! Signup form and notice state

/// Values currently entered in the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Selected activity; empty while the placeholder option is selected
    pub activity: String,
    pub email: String,
}

impl SignupForm {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }

    /// Both required fields are filled in
    pub fn is_complete(&self) -> bool {
        !self.activity.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn reset(&mut self) {
        self.activity.clear();
        self.email.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS class of the message area
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Transient message shown after a signup attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub visible: bool,
}

impl Default for Notice {
    fn default() -> Self {
        Self {
            message: String::new(),
            kind: NoticeKind::Success,
            visible: false,
        }
    }
}

impl Notice {
    /// Replace the text and make the notice visible
    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.kind = kind;
        self.message = message.into();
        self.visible = true;
    }

    /// Hide the notice, keeping the last text
    pub fn hide(&mut self) {
        self.visible = false;
    }
}
