use chrono::{DateTime, Duration, Local};

/// How long a notice stays on screen.
pub const NOTICE_LIFETIME: Duration = Duration::seconds(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Rejected,
}

/// Transient status text produced by the last command.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    posted_at: DateTime<Local>,
}

impl Notice {
    pub fn new(text: impl Into<String>, kind: NoticeKind, posted_at: DateTime<Local>) -> Self {
        Self {
            text: text.into(),
            kind,
            posted_at,
        }
    }

    pub fn visible_at(&self, now: DateTime<Local>) -> bool {
        now - self.posted_at < NOTICE_LIFETIME
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};

    use super::{Notice, NoticeKind};

    #[test]
    fn test_notice_expires() {
        let posted = Local::now();
        let notice = Notice::new("Weight added.", NoticeKind::Info, posted);
        assert!(notice.visible_at(posted));
        assert!(notice.visible_at(posted + Duration::milliseconds(3999)));
        assert!(!notice.visible_at(posted + Duration::seconds(4)));
        assert!(!notice.visible_at(posted + Duration::minutes(1)));
    }
}
