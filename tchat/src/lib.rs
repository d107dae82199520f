//! Chat client for the digital twin widget: a seeded transcript, an
//! at-most-one-in-flight turn lifecycle, rotating status phrases, and a
//! two-phase reset gate.
//!
//! ```rust
//! use tchat::{ChatClient, SettleOutcome, SubmitOutcome};
//!
//! let mut client = ChatClient::new();
//! assert_eq!(client.messages().len(), 1);
//!
//! let SubmitOutcome::Dispatched(ticket) = client.submit("Tell me about your AI work.") else {
//!     panic!("submit should dispatch");
//! };
//! assert_eq!(client.settle(ticket, "I build evaluation systems."), SettleOutcome::Replied);
//! assert_eq!(client.messages().len(), 3);
//! ```

pub mod client;
pub mod status;
pub mod types;

pub use client::{
    ChatClient, SettleOutcome, SubmitOutcome, TurnOutcome, TurnTicket, run_turn,
};
pub use status::{ROTATION_INTERVAL, THINKING_STATUSES, StatusRotation, StatusTicker};
pub use types::Conversation;

pub mod prelude {
    //! Convenience re-exports for chat client consumers.

    pub use crate::client::{
        ChatClient, SettleOutcome, SubmitOutcome, TurnOutcome, TurnTicket, run_turn,
    };
    pub use crate::status::{ROTATION_INTERVAL, THINKING_STATUSES, StatusRotation, StatusTicker};
    pub use crate::types::Conversation;
}
