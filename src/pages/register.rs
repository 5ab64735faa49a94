use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::motion::{use_scroll_to_top, warn_on_err};
use crate::config::EmailJsConfig;
use crate::intake::email::send_email;
use crate::intake::form::{
    IntakeField, IntakeWizard, Section, StepStatus, WizardAction, ACTIVITY_LEVELS, ALCOHOL_FREQUENCIES,
    FITNESS_GOALS, GENDERS, SLEEP_DURATIONS, SMOKING_STATUSES, TIMELINES, YES_NO,
};

const SUBMITTED_MESSAGE: &str = "Fitness Assessment Submitted Successfully!";
const SUBMIT_FAILED_MESSAGE: &str = "Error sending form, please try again.";

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        warn_on_err("show alert", window.alert_with_message(message));
    }
}

fn field_label(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}

#[derive(Properties, PartialEq)]
struct InputFieldProps {
    field: IntakeField,
    label: AttrValue,
    value: AttrValue,
    #[prop_or("text".into())]
    kind: AttrValue,
    placeholder: AttrValue,
    onchange: Callback<(IntakeField, String)>,
}

#[function_component(InputField)]
fn input_field(props: &InputFieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            onchange.emit((field, input.value()));
        })
    };

    html! {
        <div class="field">
            <label>{field_label(&props.label, true)}</label>
            <input
                type={props.kind.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                required={true}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TextAreaFieldProps {
    field: IntakeField,
    label: AttrValue,
    value: AttrValue,
    placeholder: AttrValue,
    #[prop_or(3)]
    rows: u32,
    onchange: Callback<(IntakeField, String)>,
}

#[function_component(TextAreaField)]
fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            onchange.emit((field, area.value()));
        })
    };

    html! {
        <div class="field">
            <label>{field_label(&props.label, true)}</label>
            <textarea
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                rows={props.rows.to_string()}
                required={true}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SelectFieldProps {
    field: IntakeField,
    label: AttrValue,
    value: AttrValue,
    options: &'static [&'static str],
    placeholder: AttrValue,
    #[prop_or(true)]
    required: bool,
    onchange: Callback<(IntakeField, String)>,
}

#[function_component(SelectField)]
fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let field = props.field;
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            onchange.emit((field, select.value()));
        })
    };

    html! {
        <div class="field">
            <label>{field_label(&props.label, props.required)}</label>
            <select required={props.required} {onchange}>
                <option value="" selected={props.value.is_empty()}>{props.placeholder.clone()}</option>
                { for props.options.iter().map(|option| html! {
                    <option value={*option} selected={*option == props.value.as_str()}>{*option}</option>
                }) }
            </select>
        </div>
    }
}

#[function_component(Register)]
pub fn register() -> Html {
    use_scroll_to_top();

    let wizard = use_reducer(IntakeWizard::default);
    let submitting = use_state(|| false);

    let on_field = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |(field, value): (IntakeField, String)| {
            dispatcher.dispatch(WizardAction::SetField(field, value));
        })
    };

    let on_back = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WizardAction::Back))
    };

    let on_next = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WizardAction::Next))
    };

    let on_submit = {
        let wizard = wizard.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !wizard.can_submit() || *submitting {
                return;
            }
            submitting.set(true);

            let payload = wizard.payload();
            let dispatcher = wizard.dispatcher();
            let submitting = submitting.clone();
            spawn_local(async move {
                let config = EmailJsConfig::from_env();
                match send_email(&config, &payload).await {
                    Ok(()) => {
                        info!("Fitness assessment sent");
                        alert(SUBMITTED_MESSAGE);
                        dispatcher.dispatch(WizardAction::Reset);
                    }
                    Err(err) => {
                        gloo_console::error!(format!("Failed to send fitness assessment: {}", err));
                        alert(SUBMIT_FAILED_MESSAGE);
                    }
                }
                submitting.set(false);
            });
        })
    };

    let form = &wizard.form;
    let value = |field: IntakeField| AttrValue::from(form.get(field).to_string());
    let section = wizard.section();

    let fields = match section {
        Section::PersonalInformation => html! {
            <div class="field-grid">
                <InputField field={IntakeField::FullName} label="Full Name" value={value(IntakeField::FullName)} placeholder="Enter your full name" onchange={on_field.clone()} />
                <InputField field={IntakeField::Age} label="Age" kind="number" value={value(IntakeField::Age)} placeholder="Your age" onchange={on_field.clone()} />
                <SelectField field={IntakeField::Gender} label="Gender" value={value(IntakeField::Gender)} options={GENDERS} placeholder="Select gender" onchange={on_field.clone()} />
                <InputField field={IntakeField::Height} label="Height" value={value(IntakeField::Height)} placeholder="e.g., 5'8 or 172cm" onchange={on_field.clone()} />
                <InputField field={IntakeField::Weight} label="Weight" value={value(IntakeField::Weight)} placeholder="e.g., 150 lbs or 68 kg" onchange={on_field.clone()} />
                <InputField field={IntakeField::Occupation} label="Occupation" value={value(IntakeField::Occupation)} placeholder="Your profession" onchange={on_field.clone()} />
                <InputField field={IntakeField::Email} label="Email Address" kind="email" value={value(IntakeField::Email)} placeholder="Enter your email address" onchange={on_field.clone()} />
                <InputField field={IntakeField::ContactNumber} label="Contact Number" kind="tel" value={value(IntakeField::ContactNumber)} placeholder="Enter your phone number" onchange={on_field.clone()} />
            </div>
        },
        Section::MedicalHistory => html! {
            <div class="field-stack">
                <TextAreaField field={IntakeField::MedicalConditions} label="Do you have any existing medical conditions? (e.g., diabetes, hypertension, asthma)" value={value(IntakeField::MedicalConditions)} placeholder="List any medical conditions or 'None'" onchange={on_field.clone()} />
                <TextAreaField field={IntakeField::Medications} label="Are you currently taking any medications or supplements?" value={value(IntakeField::Medications)} placeholder="List medications/supplements or 'None'" onchange={on_field.clone()} />
                <TextAreaField field={IntakeField::Injuries} label="Have you had any injuries or surgeries in the past year?" value={value(IntakeField::Injuries)} placeholder="Describe any injuries or surgeries, or 'None'" onchange={on_field.clone()} />
                <TextAreaField field={IntakeField::JointPain} label="Do you have any joint pain or mobility issues?" value={value(IntakeField::JointPain)} placeholder="Describe any joint pain or mobility issues, or 'None'" onchange={on_field.clone()} />
                <TextAreaField field={IntakeField::DoctorAdvice} label="Has a doctor ever advised you not to exercise?" value={value(IntakeField::DoctorAdvice)} placeholder="Any doctor's advice regarding exercise, or 'None'" onchange={on_field.clone()} />
            </div>
        },
        Section::Lifestyle => html! {
            <div class="field-stack">
                <SelectField field={IntakeField::SleepHours} label="How many hours do you sleep per night?" value={value(IntakeField::SleepHours)} options={SLEEP_DURATIONS} placeholder="Select sleep duration" onchange={on_field.clone()} />
                <SelectField field={IntakeField::Smoking} label="Do you smoke?" value={value(IntakeField::Smoking)} options={SMOKING_STATUSES} placeholder="Select smoking status" onchange={on_field.clone()} />
                <div class="field-grid">
                    <SelectField field={IntakeField::Alcohol} label="Do you consume alcohol?" value={value(IntakeField::Alcohol)} options={YES_NO} placeholder="Select option" onchange={on_field.clone()} />
                    if form.asks_alcohol_frequency() {
                        <SelectField field={IntakeField::AlcoholFrequency} label="How often?" value={value(IntakeField::AlcoholFrequency)} options={ALCOHOL_FREQUENCIES} placeholder="Select frequency" required={false} onchange={on_field.clone()} />
                    }
                </div>
                <SelectField field={IntakeField::ActivityLevel} label="Activity Level" value={value(IntakeField::ActivityLevel)} options={ACTIVITY_LEVELS} placeholder="Select your activity level" onchange={on_field.clone()} />
            </div>
        },
        Section::CurrentActivity => html! {
            <div class="field-stack">
                <TextAreaField field={IntakeField::CurrentlyExercising} label="Are you currently exercising?" value={value(IntakeField::CurrentlyExercising)} placeholder="Describe your current exercise routine, frequency, and types of activities. If not exercising, please write 'No' or 'None'." rows={5} onchange={on_field.clone()} />
            </div>
        },
        Section::FitnessGoals => html! {
            <div class="field-stack">
                <div class="field">
                    <label>{"What are your primary goals? (Choose all that apply) *"}</label>
                    <div class="goal-grid">
                        { for FITNESS_GOALS.iter().map(|goal| {
                            let selected = form.has_goal(goal);
                            let toggle = {
                                let dispatcher = wizard.dispatcher();
                                let goal = goal.to_string();
                                Callback::from(move |_: Event| dispatcher.dispatch(WizardAction::ToggleGoal(goal.clone())))
                            };
                            html! {
                                <label class={classes!("goal-option", selected.then_some("selected"))}>
                                    <input type="checkbox" checked={selected} onchange={toggle} />
                                    <span>{*goal}</span>
                                </label>
                            }
                        }) }
                    </div>
                </div>
                <SelectField field={IntakeField::Timeline} label="Desired timeline to reach your goals" value={value(IntakeField::Timeline)} options={TIMELINES} placeholder="Select your timeline" onchange={on_field.clone()} />
            </div>
        },
    };

    let step_label = format!("{} of {}", wizard.step + 1, wizard.step_count());

    html! {
        <div class="register-page">
            <header class="register-header">
                <span class="register-badge">{"FITNESS ASSESSMENT"}</span>
                <h1>{"Complete Your Fitness Profile"}</h1>
                <p>{"Help us create your personalized fitness plan by completing this detailed assessment"}</p>
            </header>

            <div class="progress">
                <div class="progress-dots">
                    { for Section::ALL.iter().enumerate().map(|(index, step)| {
                        let status = match wizard.step_status(index) {
                            StepStatus::Completed => "completed",
                            StepStatus::Current => "current",
                            StepStatus::Upcoming => "upcoming",
                        };
                        html! {
                            <>
                                <div class={classes!("progress-dot", status)} title={step.title()}>
                                    { if index < wizard.step { "✓".to_string() } else { (index + 1).to_string() } }
                                </div>
                                if index + 1 < wizard.step_count() {
                                    <div class={classes!("progress-connector", (index < wizard.step).then_some("completed"))}></div>
                                }
                            </>
                        }
                    }) }
                </div>
                <div class="progress-title">{section.title()}</div>
                <div class="progress-subtitle">
                    {format!("Step {} • {}", step_label, section.subtitle())}
                </div>
            </div>

            <form class="register-form" onsubmit={on_submit}>
                {fields}
                <div class="form-nav">
                    <button type="button" class="nav-back" disabled={!wizard.can_go_back()} onclick={on_back}>
                        {"Back"}
                    </button>
                    <div class="form-nav-right">
                        if !wizard.is_section_complete() {
                            <span class="incomplete">{"Please complete all required fields"}</span>
                        }
                        <span class="step-count">{step_label.clone()}</span>
                        if wizard.is_last_step() {
                            <button type="submit" class="nav-next" disabled={!wizard.can_submit() || *submitting}>
                                { if *submitting { "Sending..." } else { "Complete Assessment" } }
                            </button>
                        } else {
                            <button type="button" class="nav-next" disabled={!wizard.can_advance()} onclick={on_next}>
                                {"Continue"}
                            </button>
                        }
                    </div>
                </div>
            </form>

            <style>
                {r#"
                    .register-page {
                        min-height: 100vh;
                        background: linear-gradient(135deg, #111827, #000, #1f2937);
                        color: #fff;
                        padding: 7rem 1.5rem 4rem;
                    }
                    .register-header {
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto 2rem;
                    }
                    .register-badge {
                        display: inline-block;
                        padding: 0.4rem 1rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #3b82f6, #06b6d4);
                        font-size: 0.8rem;
                        font-weight: 600;
                    }
                    .register-header h1 {
                        font-size: 3rem;
                        margin: 1rem 0;
                    }
                    .register-header p {
                        color: #9ca3af;
                        font-size: 1.15rem;
                    }
                    .progress {
                        max-width: 56rem;
                        margin: 0 auto 2rem;
                        text-align: center;
                    }
                    .progress-dots {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        margin-bottom: 1.5rem;
                        overflow-x: auto;
                    }
                    .progress-dot {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border: 2px solid #4b5563;
                        color: #9ca3af;
                        flex-shrink: 0;
                    }
                    .progress-dot.current {
                        border-color: #3b82f6;
                        color: #fff;
                        box-shadow: 0 0 12px rgba(59, 130, 246, 0.6);
                    }
                    .progress-dot.completed {
                        background: #3b82f6;
                        border-color: #3b82f6;
                        color: #fff;
                    }
                    .progress-connector {
                        width: 3rem;
                        height: 2px;
                        background: #4b5563;
                    }
                    .progress-connector.completed {
                        background: #3b82f6;
                    }
                    .progress-title {
                        color: #60a5fa;
                        font-weight: 600;
                        font-size: 1.1rem;
                    }
                    .progress-subtitle {
                        color: #9ca3af;
                        font-size: 0.9rem;
                        margin-top: 0.25rem;
                    }
                    .register-form {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: rgba(31, 41, 55, 0.5);
                        border: 1px solid rgba(75, 85, 99, 0.5);
                    }
                    .field-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }
                    .field-stack {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .field label {
                        color: #d1d5db;
                        font-size: 0.9rem;
                        font-weight: 500;
                    }
                    .field input,
                    .field select,
                    .field textarea {
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid #4b5563;
                        background: rgba(17, 24, 39, 0.6);
                        color: #fff;
                        font-size: 1rem;
                        resize: none;
                    }
                    .goal-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 0.75rem;
                    }
                    .goal-option {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        background: rgba(31, 41, 55, 0.3);
                        cursor: pointer;
                    }
                    .goal-option.selected {
                        background: rgba(59, 130, 246, 0.2);
                    }
                    .form-nav {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        margin-top: 3rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(75, 85, 99, 0.5);
                    }
                    .form-nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .incomplete {
                        color: #facc15;
                        font-size: 0.9rem;
                    }
                    .step-count {
                        color: #9ca3af;
                        font-size: 0.9rem;
                    }
                    .nav-back,
                    .nav-next {
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.75rem;
                        color: #fff;
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    .nav-back {
                        background: rgba(55, 65, 81, 0.5);
                        border: 1px solid #4b5563;
                    }
                    .nav-next {
                        background: linear-gradient(90deg, #3b82f6, #06b6d4);
                        border: none;
                    }
                    .nav-back:disabled,
                    .nav-next:disabled {
                        opacity: 0.4;
                        cursor: not-allowed;
                    }
                    @media (max-width: 768px) {
                        .register-header h1 {
                            font-size: 2rem;
                        }
                        .field-grid,
                        .goal-grid {
                            grid-template-columns: 1fr;
                        }
                        .form-nav,
                        .form-nav-right {
                            flex-direction: column-reverse;
                            width: 100%;
                        }
                        .step-count {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
