use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// At most one answer is open; clicking the open one closes it.
pub fn toggle_open(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub items: &'static [FaqEntry],
    #[prop_or("Frequently Asked Questions".into())]
    pub title: AttrValue,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section class="faq-section">
            <h2>{props.title.clone()}</h2>
            { for props.items.iter().enumerate().map(|(index, item)| {
                let is_open = *open == Some(index);
                let toggle = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(toggle_open(*open, index));
                    })
                };
                html! {
                    <div class={classes!("faq-item", is_open.then_some("open"))}>
                        <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                            <span class="question-text">{item.question}</span>
                            <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        <div class="faq-answer">
                            <p>{item.answer}</p>
                        </div>
                    </div>
                }
            }) }
            <style>
                {r#"
                    .faq-section {
                        max-width: 800px;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .faq-section h2 {
                        text-align: center;
                        font-size: 2.25rem;
                        margin-bottom: 2rem;
                        color: #fff;
                    }
                    .faq-item {
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 12px;
                        margin-bottom: 1rem;
                        background: rgba(255, 255, 255, 0.03);
                        overflow: hidden;
                        transition: border-color 0.3s ease;
                    }
                    .faq-item.open {
                        border-color: rgba(239, 68, 68, 0.5);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.25rem 1.5rem;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.1rem;
                        text-align: left;
                        cursor: pointer;
                    }
                    .toggle-icon {
                        color: #ef4444;
                        font-size: 1.5rem;
                        margin-left: 1rem;
                    }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease, padding 0.3s ease;
                        padding: 0 1.5rem;
                        color: #9ca3af;
                        line-height: 1.6;
                    }
                    .faq-item.open .faq-answer {
                        max-height: 400px;
                        padding: 0 1.5rem 1.25rem;
                    }
                "#}
            </style>
        </section>
    }
}
