mod quiz_vm;
mod summary_vm;
mod time_fmt;

pub use quiz_vm::{
    FeedbackVm, OptionVm, QuizIntent, QuizOutcome, QuizScreen, QuizVm, feedback_for, start_quiz,
};
pub use summary_vm::SummaryVm;
pub use time_fmt::{format_datetime, format_elapsed};
