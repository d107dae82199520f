//! Chat client state machine: submit, settle, reset.
//!
//! ```rust
//! use tchat::{ChatClient, SettleOutcome, SubmitOutcome};
//!
//! let mut client = ChatClient::new();
//! let ticket = match client.submit("What do you build?") {
//!     SubmitOutcome::Dispatched(ticket) => ticket,
//!     other => panic!("unexpected outcome: {other:?}"),
//! };
//!
//! assert!(client.is_awaiting_reply());
//! assert_eq!(client.settle(ticket, "Quality-first systems."), SettleOutcome::Replied);
//! assert_eq!(client.messages().len(), 3);
//! ```

use futures_util::future::{Either, select};
use futures_util::StreamExt;
use tcommon::Generation;
use tgateway::{Message, ReplyGateway, TwinPersona};

use crate::status::{ROTATION_INTERVAL, StatusRotation, StatusTicker};
use crate::types::Conversation;

/// Receipt for one dispatched turn. Carries the generation observed at
/// dispatch time so a reply that arrives after a reset is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnTicket {
    generation: Generation,
    user_text: String,
}

impl TurnTicket {
    pub fn user_text(&self) -> &str {
        &self.user_text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The user message was appended and a reply is now owed.
    Dispatched(TurnTicket),
    /// Blank or whitespace-only input; nothing changed.
    IgnoredEmpty,
    /// A reply is already pending; nothing changed.
    IgnoredBusy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The reply was appended as an assistant message.
    Replied,
    /// The conversation was reset after dispatch; the reply was dropped.
    DiscardedStale,
}

/// Outcome of one full [`run_turn`] round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Replied,
    DiscardedStale,
    IgnoredEmpty,
    IgnoredBusy,
}

/// Conversation state for one chat widget instance.
///
/// At most one turn is in flight at a time. While a turn is pending the
/// client exposes a rotating status phrase; submitting again is a no-op
/// until the pending turn settles.
#[derive(Debug, Clone)]
pub struct ChatClient {
    conversation: Conversation,
    pending_input: String,
    in_flight: Option<Generation>,
    status: StatusRotation,
    reset_requested: bool,
}

impl ChatClient {
    /// Client seeded with the default persona greeting.
    pub fn new() -> Self {
        Self::with_seed(Message::assistant(TwinPersona::default().seed_greeting))
    }

    pub fn with_seed(seed: Message) -> Self {
        Self {
            conversation: Conversation::seeded(seed),
            pending_input: String::new(),
            in_flight: None,
            status: StatusRotation::new(),
            reset_requested: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_pending_input(&mut self, input: impl Into<String>) {
        self.pending_input = input.into();
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Current thinking phrase. Only meaningful while a reply is pending.
    pub fn status_phrase(&self) -> &'static str {
        self.status.current()
    }

    /// Steps the status rotation. No-op unless a reply is pending.
    pub fn advance_status(&mut self) {
        if self.in_flight.is_some() {
            self.status.advance();
        }
    }

    /// Appends the trimmed input as a user message and marks a reply as
    /// owed. Blank input and concurrent submits are ignored.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        if self.in_flight.is_some() {
            return SubmitOutcome::IgnoredBusy;
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::IgnoredEmpty;
        }

        self.conversation.push(Message::user(trimmed));
        self.pending_input.clear();
        self.status.reset();

        let generation = self.conversation.generation();
        self.in_flight = Some(generation);
        SubmitOutcome::Dispatched(TurnTicket {
            generation,
            user_text: trimmed.to_string(),
        })
    }

    /// Resolves a dispatched turn with the reply text. A ticket issued
    /// before a reset no longer matches the conversation generation and
    /// is discarded without touching the transcript.
    pub fn settle(&mut self, ticket: TurnTicket, reply: impl Into<String>) -> SettleOutcome {
        if ticket.generation != self.conversation.generation() {
            return SettleOutcome::DiscardedStale;
        }

        self.in_flight = None;
        self.status.reset();
        self.conversation.push(Message::assistant(reply));
        SettleOutcome::Replied
    }

    /// First phase of the reset gate: arm it. State is untouched until
    /// [`ChatClient::confirm_reset`].
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    pub fn is_reset_requested(&self) -> bool {
        self.reset_requested
    }

    pub fn cancel_reset(&mut self) {
        self.reset_requested = false;
    }

    /// Second phase of the reset gate. Returns `false` if no reset was
    /// requested. Otherwise restores the seed transcript, clears the
    /// draft input, and drops any pending turn so its eventual reply is
    /// recognized as stale.
    pub fn confirm_reset(&mut self) -> bool {
        if !self.reset_requested {
            return false;
        }

        self.reset_requested = false;
        self.in_flight = None;
        self.pending_input.clear();
        self.status.reset();
        self.conversation.reset_to_seed();
        true
    }
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives one full turn: submit, await the gateway reply while stepping
/// the status rotation every [`ROTATION_INTERVAL`], then settle.
///
/// The ticker lives exactly as long as the pending reply; it is dropped
/// before the settle so no further rotation can fire.
pub async fn run_turn(client: &mut ChatClient, gateway: &ReplyGateway, text: &str) -> TurnOutcome {
    let ticket = match client.submit(text) {
        SubmitOutcome::Dispatched(ticket) => ticket,
        SubmitOutcome::IgnoredEmpty => return TurnOutcome::IgnoredEmpty,
        SubmitOutcome::IgnoredBusy => return TurnOutcome::IgnoredBusy,
    };

    let mut ticker = StatusTicker::new(ROTATION_INTERVAL);
    let user_text = ticket.user_text().to_string();
    let mut reply = std::pin::pin!(gateway.reply(&user_text));

    let reply_text = loop {
        match select(reply.as_mut(), ticker.next()).await {
            Either::Left((text, _)) => break text,
            Either::Right((_, _)) => client.advance_status(),
        }
    };
    drop(ticker);

    match client.settle(ticket, reply_text) {
        SettleOutcome::Replied => TurnOutcome::Replied,
        SettleOutcome::DiscardedStale => TurnOutcome::DiscardedStale,
    }
}
