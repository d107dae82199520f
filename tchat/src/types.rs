//! Conversation transcript with generation tagging.

use tcommon::Generation;
use tgateway::Message;

/// Append-only transcript seeded with a fixed greeting.
///
/// The transcript always starts with its seed message and never shrinks
/// except through [`Conversation::reset_to_seed`], which also advances
/// the generation so in-flight work dispatched before the reset can be
/// recognized as stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    seed: Message,
    messages: Vec<Message>,
    generation: Generation,
}

impl Conversation {
    pub fn seeded(seed: Message) -> Self {
        Self {
            messages: vec![seed.clone()],
            seed,
            generation: Generation::new(),
        }
    }

    pub fn seed(&self) -> &Message {
        &self.seed
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Discards everything but the seed and advances the generation.
    pub fn reset_to_seed(&mut self) {
        self.messages.clear();
        self.messages.push(self.seed.clone());
        self.generation.advance();
    }
}
