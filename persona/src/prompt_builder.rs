use thiserror::Error;
use tracing::{debug, warn};

use crate::clock::{format_timestamp, Clock, SystemClock};
use crate::context::ContextProvider;
use crate::template::{
    closing_directive, facts_intro, identity, opening_line, profile_intro, style_intro,
    summary_intro, GUARDRAILS, PERSONA_OVERVIEW, PLAYBOOK_RULES, TIMESTAMP_INTRO, TONE_AND_STYLE,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("persona facts are missing required field `{field}`")]
    MissingContextField { field: &'static str },
}

/// Renders the system prompt that makes a language model speak as the persona.
///
/// The builder holds no state of its own: each call reads the provider and the
/// clock afresh and returns a new string.
#[derive(Clone, Debug)]
pub struct PromptBuilder<P, C = SystemClock> {
    provider: P,
    clock: C,
}

impl<P: ContextProvider> PromptBuilder<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            clock: SystemClock,
        }
    }
}

impl<P: ContextProvider, C: Clock> PromptBuilder<P, C> {
    pub fn with_clock(provider: P, clock: C) -> Self {
        Self { provider, clock }
    }

    /// Render the full prompt.
    ///
    /// Fails with [`BuildError::MissingContextField`] when the facts lack a
    /// usable `full_name` or `name`.
    pub fn build_system_prompt(&self) -> Result<String, BuildError> {
        let facts = self.provider.facts();
        let (full_name, name) = match (facts.full_name(), facts.name()) {
            (Ok(full), Ok(short)) => (full, short),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "cannot render persona prompt");
                return Err(e);
            }
        };
        let now = format_timestamp(&self.clock.now());
        let summary = self.provider.summary();
        let profile = self.provider.profile();
        let style = self.provider.style();

        let mut out = String::new();

        out.push_str("# Your Role\n\n");
        out.push_str(&format!("{}\n", identity(full_name, name)));
        out.push_str("\n## Persona Overview\n\n");
        out.push_str(&format!("- You are {full_name}.\n"));
        out.push_str(PERSONA_OVERVIEW);

        out.push_str("\n## Important Context\n\n");
        out.push_str(&format!("{}\n{facts}\n\n", facts_intro(name)));
        out.push_str(&format!("{}\n{summary}\n\n", summary_intro(name)));
        out.push_str(&format!("{}\n{profile}\n\n", profile_intro(name)));
        out.push_str(&format!("{}\n{style}\n\n", style_intro(name)));
        out.push_str(&format!("{TIMESTAMP_INTRO}\n{now}\n"));

        out.push_str("\n## Tone and Style\n\n");
        out.push_str(TONE_AND_STYLE);

        out.push_str("\n## Conversation Playbook\n\n");
        out.push_str(&format!(
            "1. Start every conversation with the exact line: \"{}\"\n",
            opening_line(name)
        ));
        out.push_str(PLAYBOOK_RULES);

        out.push_str("\n## Guardrails\n\n");
        out.push_str(GUARDRAILS);

        out.push_str(&format!("\n{}\n", closing_directive(name)));

        debug!(%name, len = out.len(), "rendered persona prompt");
        Ok(out)
    }
}
