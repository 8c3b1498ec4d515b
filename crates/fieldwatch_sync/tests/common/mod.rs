//! Shared fakes for sync tests.

#![allow(dead_code)]

use async_trait::async_trait;
use fieldwatch_core::{ServerStatus, StatusReport};
use fieldwatch_error::{ChannelError, ChannelErrorKind, FetchError, FetchErrorKind};
use fieldwatch_status::{FetchOutcome, StatusSource};
use fieldwatch_sync::{AuthorId, ChannelMessage, ChannelResult, MessageId, ReportChannel};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub const BOT: AuthorId = AuthorId(1);
pub const HUMAN: AuthorId = AuthorId(2);

pub fn online(players: u32) -> ServerStatus {
    ServerStatus::online(
        "Valley Co-op",
        Some("Elmcreek".to_string()),
        players,
        16,
        vec!["Seasons".to_string(), "Courseplay".to_string()],
    )
}

pub fn offline() -> FetchOutcome {
    FetchOutcome::Offline(FetchError::new(FetchErrorKind::Timeout(10)))
}

/// Status source that replays scripted outcomes, repeating the last one.
#[derive(Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<FetchOutcome>>,
    last: Mutex<Option<FetchOutcome>>,
    fetches: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(outcomes: impl IntoIterator<Item = FetchOutcome>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(outcomes.into_iter().collect()),
            ..Self::default()
        })
    }

    pub fn push(&self, outcome: FetchOutcome) {
        self.script.lock().push_back(outcome);
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn fetch(&self) -> FetchOutcome {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().pop_front();
        let mut last = self.last.lock();
        if let Some(outcome) = next {
            *last = Some(outcome);
        }
        last.clone().unwrap_or_else(offline)
    }

    fn describe(&self) -> &str {
        "scripted"
    }
}

#[derive(Debug, Clone)]
pub struct StoredMessage {
    pub id: MessageId,
    pub author: AuthorId,
    pub report: Option<StatusReport>,
}

#[derive(Default)]
struct ChannelInner {
    messages: Mutex<Vec<StoredMessage>>,
    next_id: AtomicUsize,
    sends: AtomicUsize,
    edits: AtomicUsize,
    fail_writes: AtomicBool,
}

/// In-memory channel; clones share the same messages.
#[derive(Clone, Default)]
pub struct MemoryChannel {
    inner: Arc<ChannelInner>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        let channel = Self::default();
        channel.inner.next_id.store(100, Ordering::SeqCst);
        channel
    }

    /// Adds a message as if someone else posted it.
    pub fn post(&self, author: AuthorId, report: Option<StatusReport>) -> MessageId {
        let id = MessageId(self.inner.next_id.fetch_add(1, Ordering::SeqCst) as u64);
        self.inner.messages.lock().push(StoredMessage { id, author, report });
        id
    }

    pub fn messages(&self) -> Vec<StoredMessage> {
        self.inner.messages.lock().clone()
    }

    pub fn reports(&self) -> Vec<StoredMessage> {
        self.messages()
            .into_iter()
            .filter(|m| m.author == BOT && m.report.is_some())
            .collect()
    }

    pub fn sends(&self) -> usize {
        self.inner.sends.load(Ordering::SeqCst)
    }

    pub fn edits(&self) -> usize {
        self.inner.edits.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.sends() + self.edits()
    }

    pub fn set_failing(&self, failing: bool) {
        self.inner.fail_writes.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl ReportChannel for MemoryChannel {
    async fn recent_messages(&self, limit: u8) -> ChannelResult<Vec<ChannelMessage>> {
        Ok(self
            .inner
            .messages
            .lock()
            .iter()
            .rev()
            .take(limit as usize)
            .map(|m| ChannelMessage {
                id: m.id,
                author: m.author,
                has_report: m.report.is_some(),
            })
            .collect())
    }

    async fn send_report(&self, report: &StatusReport) -> ChannelResult<MessageId> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(ChannelError::new(ChannelErrorKind::SendFailed(
                "503 Service Unavailable".to_string(),
            )));
        }
        self.inner.sends.fetch_add(1, Ordering::SeqCst);
        Ok(self.post(BOT, Some(report.clone())))
    }

    async fn edit_report(&self, id: MessageId, report: &StatusReport) -> ChannelResult<()> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(ChannelError::new(ChannelErrorKind::EditFailed {
                message_id: id.0,
                reason: "503 Service Unavailable".to_string(),
            }));
        }
        let mut messages = self.inner.messages.lock();
        let message = messages.iter_mut().find(|m| m.id == id).ok_or_else(|| {
            ChannelError::new(ChannelErrorKind::EditFailed {
                message_id: id.0,
                reason: "Unknown Message".to_string(),
            })
        })?;
        message.report = Some(report.clone());
        self.inner.edits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn own_identity(&self) -> ChannelResult<AuthorId> {
        Ok(BOT)
    }
}
