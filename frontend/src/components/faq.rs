use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{section, FaqEntry, FAQ_ENTRIES};
use crate::state::accordion::{AccordionAction, AccordionState};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    index: usize,
    is_open: bool,
    on_activate: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_activate = props.on_activate.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_activate.emit(index);
        })
    };

    let answer_id = format!("faq-answer-{}", props.index);

    html! {
        <div class={classes!("faq-item", if props.is_open { "open" } else { "" })}>
            <button class="faq-question" aria-expanded={props.is_open.to_string()} aria-controls={answer_id.clone()} onclick={toggle}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div id={answer_id} class="faq-answer" hidden={!props.is_open}>
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_reducer(|| AccordionState::new(FAQ_ENTRIES.len()));

    let on_activate = {
        let accordion = accordion.dispatcher();
        Callback::from(move |index: usize| accordion.dispatch(AccordionAction::Activate(index)))
    };

    html! {
        <section id={section::FAQ} class="page-section">
            <div class="section-heading">
                <h2>{"Frequently asked questions"}</h2>
                <p>{"Common questions about our approach and services."}</p>
            </div>
            <div class="faq-list">
                { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| html! {
                    <FaqItem
                        key={entry.question}
                        entry={*entry}
                        index={index}
                        is_open={accordion.is_expanded(index)}
                        on_activate={on_activate.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
