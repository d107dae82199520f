//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use tcommon::{ConversationId, Generation, SamplingOptions};
//!
//! let conversation = ConversationId::from("widget-1");
//! let generation = Generation::new();
//!
//! let options = SamplingOptions::default().with_temperature(0.7);
//! assert_eq!(conversation.as_str(), "widget-1");
//! assert_eq!(generation.value(), 0);
//! assert_eq!(options.temperature, Some(0.7));
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use tcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Conversation identity and generation tagging.
    //!
    //! ```rust
    //! use tcommon::{ConversationId, Generation};
    //!
    //! let id = ConversationId::new("chat-widget");
    //! let mut generation = Generation::new();
    //! let issued = generation;
    //! generation.advance();
    //!
    //! assert_eq!(id.to_string(), "chat-widget");
    //! assert!(generation > issued);
    //! ```

    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ConversationId(String);

    impl ConversationId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for ConversationId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for ConversationId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for ConversationId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }

    /// Monotonic counter used to detect stale in-flight work after a
    /// conversation reset. A value captured at dispatch time compares
    /// unequal once the conversation has been reset underneath it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Generation(u64);

    impl Generation {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn value(&self) -> u64 {
            self.0
        }

        pub fn advance(&mut self) {
            self.0 += 1;
        }
    }

    impl Display for Generation {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }
}

pub mod model {
    //! Shared sampling settings used by request types.
    //!
    //! ```rust
    //! use tcommon::SamplingOptions;
    //!
    //! let options = SamplingOptions::default()
    //!     .with_temperature(0.7)
    //!     .with_max_output_tokens(256);
    //!
    //! assert_eq!(options.temperature, Some(0.7));
    //! assert_eq!(options.max_output_tokens, Some(256));
    //! ```

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct SamplingOptions {
        pub temperature: Option<f32>,
        pub max_output_tokens: Option<u32>,
    }

    impl SamplingOptions {
        pub fn with_temperature(mut self, temperature: f32) -> Self {
            self.temperature = Some(temperature);
            self
        }

        pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
            self.max_output_tokens = Some(max_output_tokens);
            self
        }
    }
}

pub use context::{ConversationId, Generation};
pub use future::BoxFuture;
pub use model::SamplingOptions;
