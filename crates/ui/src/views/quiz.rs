use dioxus::document::eval;
use dioxus::prelude::*;
use services::{SessionEffect, SessionPhase};
use tracing::debug;

use crate::context::AppContext;
use crate::views::{SummaryView, ViewError};
use crate::vm::{OptionVm, QuizIntent, QuizOutcome, QuizScreen, QuizVm, SummaryVm, start_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const QUIZ_ROOT_ID: &str = "quiz-root";

/// Map a key press to an intent: digits pick the matching displayed option,
/// Enter submits. Nothing fires once the card is scored.
fn intent_for_key(key: &Key, screen: &QuizScreen) -> Option<QuizIntent> {
    if !screen.can_submit {
        return None;
    }
    match key {
        Key::Enter => Some(QuizIntent::Submit),
        Key::Character(value) => value
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| screen.options.get(index))
            .map(|option| QuizIntent::Select(option.text.clone())),
        _ => None,
    }
}

fn complete_quiz(
    mut vm: Signal<Option<QuizVm>>,
    mut summary: Signal<Option<SummaryVm>>,
    mut error: Signal<Option<ViewError>>,
) {
    let Some(finished) = vm.write().take() else {
        return;
    };
    match finished.finish() {
        Ok(done) => {
            debug!(correct = done.correct(), wrong = done.wrong(), "quiz finished");
            summary.set(Some(SummaryVm::from(&done)));
            error.set(None);
        }
        Err(err) => error.set(Some(err)),
    }
}

/// Keep the feedback up for the effect's delay, then hand the ticket back.
fn schedule_advance(
    effect: SessionEffect,
    mut vm: Signal<Option<QuizVm>>,
    summary: Signal<Option<SummaryVm>>,
    mut error: Signal<Option<ViewError>>,
) {
    let SessionEffect::ScheduleAdvance { ticket, delay } = effect;
    spawn(async move {
        tokio::time::sleep(delay).await;
        let outcome = vm
            .write()
            .as_mut()
            .map(|quiz| quiz.dispatch(QuizIntent::Advance(ticket)));
        match outcome {
            Some(Ok(QuizOutcome::Completed)) => complete_quiz(vm, summary, error),
            Some(Ok(_)) | None => {}
            Some(Err(err)) => error.set(Some(err)),
        }
    });
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let session_loop = ctx.session_loop();

    let vm = use_signal(|| Some(start_quiz(&session_loop)));
    let summary = use_signal(|| None::<SummaryVm>);
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut error = error;
        let mut vm = vm;

        let outcome = {
            let mut guard = vm.write();
            let Some(quiz) = guard.as_mut() else {
                error.set(Some(ViewError::SessionClosed));
                return;
            };
            quiz.dispatch(intent)
        };

        match outcome {
            Ok(QuizOutcome::Continue) => error.set(None),
            Ok(QuizOutcome::Schedule(effect)) => {
                error.set(None);
                schedule_advance(effect, vm, summary, error);
            }
            Ok(QuizOutcome::Completed) => complete_quiz(vm, summary, error),
            Err(err) => error.set(Some(err)),
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    // Keys only reach `quiz-root` while it holds focus, and a disabled Next
    // button drops focus to the body. Reclaim it on every phase change.
    let mut focused_phase = use_signal(|| None::<SessionPhase>);
    use_effect(move || {
        let phase = vm.read().as_ref().map(QuizVm::phase);
        if phase.is_none() || *focused_phase.peek() == phase {
            return;
        }
        focused_phase.set(phase);
        let _ = eval(&format!("document.getElementById({QUIZ_ROOT_ID:?})?.focus();"));
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let Some(screen) = vm.read().as_ref().map(QuizVm::screen) else {
            return;
        };
        if let Some(intent) = intent_for_key(&evt.data.key(), &screen) {
            evt.prevent_default();
            dispatch_intent.call(intent);
        }
    });

    if let Some(done) = summary.read().clone() {
        return rsx! {
            SummaryView { summary: done }
        };
    }

    let screen = vm.read().as_ref().map(QuizVm::screen);
    let error_message = (*error.read()).map(ViewError::message);

    rsx! {
        div { class: "page quiz-page", id: QUIZ_ROOT_ID, tabindex: "0", onkeydown: on_key,
            if let Some(screen) = screen {
                div { class: "score-counter",
                    span { class: "score-counter__correct", "{screen.score.correct}" }
                    span { class: "score-counter__slash", " / " }
                    span { class: "score-counter__wrong", "{screen.score.wrong}" }
                }
                div { class: "quiz-progress",
                    div { class: "quiz-progress__track",
                        div {
                            class: "quiz-progress__fill",
                            style: "width: {screen.progress_percent}%;",
                        }
                    }
                    p { class: "quiz-progress__label", "{screen.progress_label}" }
                }
                h2 { class: "quiz-question", "{screen.question}" }
                div { class: "quiz-options", role: "radiogroup",
                    for (index, option) in screen.options.iter().enumerate() {
                        OptionRow {
                            key: "{option.text}",
                            index,
                            option: option.clone(),
                            enabled: screen.can_submit,
                            on_intent: dispatch_intent,
                        }
                    }
                }
                if let Some(feedback) = screen.feedback.as_ref() {
                    p { class: "{feedback.class()}", id: "quiz-result", "{feedback.message}" }
                }
                if let Some(message) = error_message {
                    p { class: "quiz-error", "{message}" }
                }
                div { class: "quiz-actions",
                    button {
                        class: "btn btn-next",
                        id: "quiz-next",
                        r#type: "button",
                        disabled: !screen.can_submit,
                        onclick: move |_| dispatch_intent.call(QuizIntent::Submit),
                        "Next"
                    }
                }
            } else if let Some(message) = error_message {
                p { class: "quiz-error", "{message}" }
            }
        }
    }
}

#[component]
fn OptionRow(
    index: usize,
    option: OptionVm,
    enabled: bool,
    on_intent: Callback<QuizIntent>,
) -> Element {
    let id = format!("quiz-option-{}", index + 1);
    let class = if option.selected {
        "quiz-option quiz-option--selected"
    } else {
        "quiz-option"
    };
    let text = option.text.clone();

    rsx! {
        label { class: "{class}", r#for: "{id}",
            input {
                id: "{id}",
                r#type: "radio",
                name: "quiz-option",
                value: "{option.text}",
                checked: option.selected,
                disabled: !enabled,
                onchange: move |_| on_intent.call(QuizIntent::Select(text.clone())),
            }
            span { class: "quiz-option__text", "{option.text}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
