use crate::faq_service::FaqService;
use domain::messages::{is_exit_command, FAREWELL, GREETING};
use domain::{Speaker, Transcript};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank input, or the session already ended.
    Ignored,
    Reply(String),
    /// The user asked to leave; the caller should close after showing this.
    Farewell(String),
}

pub struct ChatSession<'a> {
    service: &'a FaqService,
    transcript: Transcript,
    closed: bool,
}

impl<'a> ChatSession<'a> {
    /// Starts a conversation with the greeting already on record.
    pub fn new(service: &'a FaqService) -> Self {
        let mut transcript = Transcript::new();
        transcript.add_message(Speaker::Bot, GREETING);
        Self {
            service,
            transcript,
            closed: false,
        }
    }

    pub fn submit(&mut self, raw: &str) -> TurnOutcome {
        let input = raw.trim();
        if self.closed || input.is_empty() {
            return TurnOutcome::Ignored;
        }

        self.transcript.add_message(Speaker::User, input);

        if is_exit_command(input) {
            self.closed = true;
            self.transcript.add_message(Speaker::Bot, FAREWELL);
            return TurnOutcome::Farewell(FAREWELL.to_string());
        }

        let answer = self.service.get_response(input);
        self.transcript.add_message(Speaker::Bot, &answer);
        TurnOutcome::Reply(answer)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
