//! System prompt for a conversational digital twin of a real person.
//!
//! A [`PromptBuilder`] combines the persona's [`Facts`], summary, profile and
//! style notes (supplied by a [`ContextProvider`]) with the current time from a
//! [`Clock`] and a fixed instruction template.
//!
//! ```
//! use persona::{Facts, FixedClock, PersonaContext, PromptBuilder};
//!
//! let facts: Facts = [("full_name", "Ada Lovelace"), ("name", "Ada")].into_iter().collect();
//! let ctx = PersonaContext::new(facts, "summary", "profile", "style");
//! let clock = FixedClock::parse("1843-07-01 09:00:00").unwrap();
//! let prompt = PromptBuilder::with_clock(ctx, clock).build_system_prompt().unwrap();
//! assert!(prompt.contains("1843-07-01 09:00:00"));
//! ```

pub mod clock;
pub mod context;
pub mod facts;
pub mod prompt_builder;
pub mod template;

pub use clock::{Clock, FixedClock, SystemClock};
pub use context::{ContextProvider, LoadError, PersonaContext, ResourcePaths};
pub use facts::Facts;
pub use prompt_builder::{BuildError, PromptBuilder};
