//! Transient activity feed shown on the dashboard. Every workflow outcome
//! lands here; entries optionally carry an explorer link.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// How many notifications stay visible before the oldest falls off.
pub const FEED_CAPACITY: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    pub link: Option<String>,
    pub at: DateTime<Local>,
}

#[derive(Default)]
pub struct Notifications {
    items: VecDeque<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>, link: Option<String>) {
        if self.items.len() == FEED_CAPACITY {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            kind,
            text: text.into(),
            link,
            at: Local::now(),
        });
    }

    pub fn success(&mut self, text: impl Into<String>, link: Option<String>) {
        self.push(ToastKind::Success, text, link);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Error, text, None);
    }

    pub fn info(&mut self, text: impl Into<String>, link: Option<String>) {
        self.push(ToastKind::Info, text, link);
    }

    /// Newest entry first, the order the feed renders in.
    pub fn latest_first(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter().rev()
    }

    /// Link of the most recent notification that carries one.
    pub fn latest_link(&self) -> Option<&str> {
        self.items
            .iter()
            .rev()
            .find_map(|toast| toast.link.as_deref())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_caps_at_capacity_dropping_oldest() {
        let mut feed = Notifications::new();
        for i in 0..FEED_CAPACITY + 3 {
            feed.push(ToastKind::Info, format!("event {i}"), None);
        }
        assert_eq!(feed.len(), FEED_CAPACITY);
        let newest = feed.latest_first().next().map(|t| t.text.clone());
        assert_eq!(newest.as_deref(), Some("event 8"));
        let oldest = feed.latest_first().last().map(|t| t.text.clone());
        assert_eq!(oldest.as_deref(), Some("event 3"));
    }

    #[test]
    fn latest_link_skips_linkless_entries() {
        let mut feed = Notifications::new();
        feed.success("confirmed", Some("https://example.com/tx/1".into()));
        feed.error("send tokens failed");
        assert_eq!(feed.latest_link(), Some("https://example.com/tx/1"));
    }

    #[test]
    fn latest_link_prefers_most_recent() {
        let mut feed = Notifications::new();
        feed.success("first", Some("https://example.com/tx/1".into()));
        feed.info("second", Some("https://example.com/tx/2".into()));
        assert_eq!(feed.latest_link(), Some("https://example.com/tx/2"));
    }
}
