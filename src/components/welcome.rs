//! Welcome block with suggested questions, shown until the first message.

use leptos::prelude::*;

#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

#[derive(Clone, Copy)]
struct SuggestedQuestion {
    label: &'static str,
    question: &'static str,
}

const SUGGESTED_QUESTIONS: &[SuggestedQuestion] = &[
    SuggestedQuestion { label: "What are the best markets?", question: "What are the best markets right now?" },
    SuggestedQuestion { label: "How does quality scoring work?", question: "How does quality scoring work?" },
    SuggestedQuestion { label: "Show high volume markets", question: "Show me high volume markets" },
    SuggestedQuestion { label: "Explain prediction markets", question: "Explain prediction market basics" },
];

#[component]
pub fn Welcome(on_pick: Callback<String>) -> impl IntoView {
    view! {
        <div class="chat-welcome">
            <div class="welcome-icon">"✨"</div>
            <h4>"Ask me anything about prediction markets"</h4>
            <div class="suggested-questions">
                {SUGGESTED_QUESTIONS
                    .iter()
                    .map(|suggestion| {
                        let question = suggestion.question;
                        view! {
                            <button
                                class="suggested-q"
                                data-question=question
                                on:click=move |_| on_pick.run(question.to_owned())
                            >
                                {suggestion.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
