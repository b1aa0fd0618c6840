/// Seeded assistant greeting shown before the user says anything.
pub const GREETING: &str =
    "Olá! Sou o assistente Habilit. Tem alguma dúvida sobre como revolucionar sua jornada para a CNH?";

/// Shown when the call succeeds but carries no usable text.
pub const FALLBACK_UNAVAILABLE: &str =
    "Estou com instabilidade, me chame novamente em um minuto.";

/// Shown when the outbound call fails for any reason.
pub const FALLBACK_CONNECTION: &str = "Erro na conexão. Tente novamente mais tarde.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// Append-only message history plus the single in-flight guard.
///
/// The widget component owns one of these per instance; everything here is
/// plain state so the submit/settle lifecycle can be exercised without a
/// browser.
pub struct Transcript {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Transcript {
    pub fn new(greeting: &str) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Assistant,
                text: greeting.to_string(),
            }],
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Gate a submit. Rejected while a reply is outstanding or when the
    /// input trims to nothing; otherwise the raw input is appended as a
    /// user message and the in-flight guard is raised.
    pub fn begin(&mut self, input: &str) -> bool {
        if self.pending || input.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            role: Role::User,
            text: input.to_string(),
        });
        self.pending = true;
        true
    }

    /// Record the reply of the outstanding call. `None` means the call
    /// succeeded but returned no usable text.
    pub fn settle(&mut self, reply: Option<String>) {
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            text: reply.unwrap_or_else(|| FALLBACK_UNAVAILABLE.to_string()),
        });
        self.pending = false;
    }

    /// Record a failed call. Failures are not classified or retried; the
    /// user sees one generic message.
    pub fn fail(&mut self) {
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            text: FALLBACK_CONNECTION.to_string(),
        });
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript() -> Transcript {
        Transcript::new(GREETING)
    }

    #[test]
    fn starts_with_greeting_only() {
        let t = transcript();
        assert_eq!(t.messages().len(), 1);
        assert_eq!(t.messages()[0].role, Role::Assistant);
        assert_eq!(t.messages()[0].text, GREETING);
        assert!(!t.is_pending());
    }

    #[test]
    fn begin_appends_raw_input_and_raises_guard() {
        let mut t = transcript();
        assert!(t.begin("  Quanto custa? "));
        assert!(t.is_pending());
        let last = t.messages().last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.text, "  Quanto custa? ");
    }

    #[test]
    fn empty_and_whitespace_input_is_a_no_op() {
        let mut t = transcript();
        assert!(!t.begin(""));
        assert!(!t.begin("   "));
        assert_eq!(t.messages().len(), 1);
        assert!(!t.is_pending());
    }

    #[test]
    fn begin_while_pending_is_a_no_op() {
        let mut t = transcript();
        assert!(t.begin("primeira"));
        assert!(!t.begin("segunda"));
        assert_eq!(t.messages().len(), 2);
        assert!(t.is_pending());
    }

    #[test]
    fn settle_appends_reply_verbatim() {
        let mut t = transcript();
        t.begin("Quanto custa?");
        t.settle(Some("R".to_string()));
        let last = t.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.text, "R");
        assert!(!t.is_pending());
    }

    #[test]
    fn settle_without_text_uses_unavailable_fallback() {
        let mut t = transcript();
        t.begin("Oi");
        t.settle(None);
        assert_eq!(t.messages().last().unwrap().text, FALLBACK_UNAVAILABLE);
        assert!(!t.is_pending());
    }

    #[test]
    fn fail_uses_connection_fallback_and_clears_guard() {
        let mut t = transcript();
        t.begin("Oi");
        t.fail();
        assert_eq!(t.messages().last().unwrap().text, FALLBACK_CONNECTION);
        assert!(!t.is_pending());
    }

    #[test]
    fn each_round_trip_grows_history_by_two_in_order() {
        let mut t = transcript();
        for (i, question) in ["a", "b", "c"].iter().enumerate() {
            let before = t.messages().len();
            assert!(t.begin(question));
            t.settle(Some(format!("resposta {i}")));
            assert_eq!(t.messages().len(), before + 2);
            let pair = &t.messages()[before..];
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[0].text, *question);
            assert_eq!(pair[1].role, Role::Assistant);
        }
    }

    #[test]
    fn guard_reopens_after_failure() {
        let mut t = transcript();
        t.begin("Oi");
        t.fail();
        assert!(t.begin("de novo"));
    }
}
