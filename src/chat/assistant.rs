use log::warn;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::chat::gemini;
use crate::chat::transcript::{Role, Transcript, GREETING};
use crate::config::AssistantConfig;

/// Widget state behind the component: panel visibility, draft input and
/// the transcript. Kept free of web types so the open/close/submit
/// lifecycle can be exercised without a browser.
pub struct AssistantState {
    open: bool,
    draft: String,
    transcript: Transcript,
}

impl AssistantState {
    pub fn new() -> Self {
        Self {
            open: false,
            draft: String::new(),
            transcript: Transcript::new(GREETING),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Visibility only; the transcript is never touched by open/close.
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    /// Run the submit gate against the current draft. On acceptance the
    /// draft is cleared and the question to send is returned.
    pub fn submit(&mut self) -> Option<String> {
        if !self.transcript.begin(&self.draft) {
            return None;
        }
        Some(std::mem::take(&mut self.draft))
    }

    pub fn settle(&mut self, reply: Option<String>) {
        self.transcript.settle(reply);
    }

    pub fn fail(&mut self) {
        self.transcript.fail();
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatAssistantProps {
    pub config: AssistantConfig,
}

pub enum ChatAssistantMsg {
    Open,
    Close,
    SetDraft(String),
    Submit,
    Settled(Result<Option<String>, gloo_net::Error>),
}

/// Floating chat overlay. Mounts closed with a seeded greeting; one call
/// may be in flight at a time and closing the panel neither cancels it nor
/// clears the history.
pub struct ChatAssistant {
    state: AssistantState,
    list_ref: NodeRef,
}

impl Component for ChatAssistant {
    type Message = ChatAssistantMsg;
    type Properties = ChatAssistantProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: AssistantState::new(),
            list_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatAssistantMsg::Open => {
                self.state.open();
                true
            }
            ChatAssistantMsg::Close => {
                self.state.close();
                true
            }
            ChatAssistantMsg::SetDraft(draft) => {
                self.state.set_draft(draft);
                true
            }
            ChatAssistantMsg::Submit => {
                let Some(question) = self.state.submit() else {
                    return false;
                };
                let config = ctx.props().config.clone();
                ctx.link().send_future(async move {
                    ChatAssistantMsg::Settled(gemini::generate(&config, &question).await)
                });
                true
            }
            ChatAssistantMsg::Settled(outcome) => {
                match outcome {
                    Ok(reply) => self.state.settle(reply),
                    Err(err) => {
                        warn!("assistant request failed: {err}");
                        self.state.fail();
                    }
                }
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // Keep the newest message visible.
        if let Some(list) = self.list_ref.cast::<web_sys::Element>() {
            list.set_scroll_top(list.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.state.is_open() {
            return html! {
                <div class="chat-widget">
                    <button
                        class="chat-toggle"
                        onclick={ctx.link().callback(|_| ChatAssistantMsg::Open)}
                    >
                        { "💬 Dúvidas?" }
                    </button>
                </div>
            };
        }

        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(ChatAssistantMsg::Submit)
        });

        html! {
            <div class="chat-widget">
                <div class="chat-panel">
                    <div class="chat-header">
                        <div class="chat-header-title">
                            <span class="chat-header-name">{ "Suporte VIP" }</span>
                            <span class="chat-header-tag">{ "IA Powered" }</span>
                        </div>
                        <button
                            class="chat-close"
                            onclick={ctx.link().callback(|_| ChatAssistantMsg::Close)}
                        >
                            { "✕" }
                        </button>
                    </div>
                    <div class="chat-messages" ref={self.list_ref.clone()}>
                        {
                            for self.state.transcript().messages().iter().map(|message| {
                                let bubble = match message.role {
                                    Role::User => "chat-bubble user",
                                    Role::Assistant => "chat-bubble assistant",
                                };
                                html! {
                                    <div class={bubble}>{ &message.text }</div>
                                }
                            })
                        }
                        if self.state.transcript().is_pending() {
                            <div class="chat-typing">{ "Digitando..." }</div>
                        }
                    </div>
                    <div class="chat-input-row">
                        <input
                            type="text"
                            class="chat-input"
                            placeholder="Sua dúvida aqui..."
                            value={self.state.draft().to_string()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                ChatAssistantMsg::SetDraft(input.value())
                            })}
                            {onkeydown}
                        />
                        <button
                            class="chat-send"
                            onclick={ctx.link().callback(|_| ChatAssistantMsg::Submit)}
                        >
                            { "➤" }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_closed_with_seeded_greeting() {
        let state = AssistantState::new();
        assert!(!state.is_open());
        assert_eq!(state.transcript().messages().len(), 1);
        assert_eq!(state.transcript().messages()[0].text, GREETING);
    }

    #[test]
    fn submit_clears_draft_and_returns_raw_question() {
        let mut state = AssistantState::new();
        state.open();
        state.set_draft(" Quanto custa? ".to_string());
        assert_eq!(state.submit().as_deref(), Some(" Quanto custa? "));
        assert_eq!(state.draft(), "");
    }

    #[test]
    fn rejected_submit_keeps_draft() {
        let mut state = AssistantState::new();
        state.set_draft("   ".to_string());
        assert!(state.submit().is_none());
        assert_eq!(state.draft(), "   ");
    }

    #[test]
    fn close_and_reopen_keep_the_transcript() {
        let mut state = AssistantState::new();
        state.open();
        state.set_draft("Quanto custa?".to_string());
        state.submit().unwrap();
        state.settle(Some("A partir de R$ 80 por aula.".to_string()));

        state.close();
        state.open();

        let messages = state.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].text, "Quanto custa?");
        assert_eq!(messages[2].text, "A partir de R$ 80 por aula.");
    }

    #[test]
    fn reply_arriving_while_closed_still_lands_in_history() {
        let mut state = AssistantState::new();
        state.open();
        state.set_draft("Oi".to_string());
        state.submit().unwrap();

        // Panel closed mid-flight; the call is not cancelled.
        state.close();
        assert!(state.transcript().is_pending());

        state.settle(Some("Olá!".to_string()));
        assert!(!state.is_open());
        assert!(!state.transcript().is_pending());
        assert_eq!(state.transcript().messages().len(), 3);
        assert_eq!(state.transcript().messages()[2].text, "Olá!");
    }

    #[test]
    fn failure_while_closed_settles_the_history_too() {
        let mut state = AssistantState::new();
        state.open();
        state.set_draft("Oi".to_string());
        state.submit().unwrap();
        state.close();

        state.fail();
        assert!(!state.transcript().is_pending());
        assert_eq!(state.transcript().messages().len(), 3);
    }
}
