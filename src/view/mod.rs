//! Lapisan tampilan
//!
//! `ViewModel` adalah gambaran murni dari (isi form, state submit); `render`
//! mengubahnya menjadi teks untuk terminal. Tidak ada logika bisnis di sini.

use std::fmt::Write;

use crate::models::{Field, FormRecord, SubmissionState};

pub const PAGE_TITLE: &str = "Prediksi Diabetes";
pub const SUBMIT_LABEL_IDLE: &str = "Send";
pub const SUBMIT_LABEL_PENDING: &str = "Processing...";
pub const RESULT_HEADING: &str = "Result";

/// Satu baris input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub label: &'static str,
    pub value: String,
}

/// Region hasil (hanya saat sukses)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub sentence: &'static str,
    pub dump: String,
}

/// Semua yang perlu digambar untuk satu frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub inputs: Vec<InputView>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub error: Option<String>,
    pub result: Option<ResultView>,
}

impl ViewModel {
    pub fn build(record: &FormRecord, state: &SubmissionState) -> Self {
        let inputs = record
            .iter()
            .map(|(field, text)| InputView {
                label: field.name(),
                value: text.to_string(),
            })
            .collect();

        let pending = state.is_pending();

        Self {
            inputs,
            submit_label: if pending {
                SUBMIT_LABEL_PENDING
            } else {
                SUBMIT_LABEL_IDLE
            },
            submit_enabled: !pending,
            error: state.error_message().map(str::to_string),
            result: state.prediction().map(|prediction| ResultView {
                sentence: prediction.sentence(),
                dump: prediction.to_pretty_json(),
            }),
        }
    }
}

/// Gambar frame sebagai teks
pub fn render(view: &ViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", PAGE_TITLE);
    let _ = writeln!(out, "{}", "=".repeat(PAGE_TITLE.len()));

    let width = Field::ALL
        .iter()
        .map(|field| field.name().len())
        .max()
        .unwrap_or(0);
    for input in &view.inputs {
        let _ = writeln!(out, "  {:<width$} : {}", input.label, input.value, width = width);
    }

    if view.submit_enabled {
        let _ = writeln!(out, "\n[ {} ]", view.submit_label);
    } else {
        let _ = writeln!(out, "\n[ {} ] (menunggu respons)", view.submit_label);
    }

    if let Some(error) = &view.error {
        let _ = writeln!(out, "\n! {}", error);
    }

    if let Some(result) = &view.result {
        let _ = writeln!(out, "\n{}", RESULT_HEADING);
        let _ = writeln!(out, "{}", "-".repeat(RESULT_HEADING.len()));
        let _ = writeln!(out, "{}", result.sentence);
        let _ = writeln!(out, "{}", result.dump);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prediction::{HIGH_LIKELIHOOD_SENTENCE, LOW_LIKELIHOOD_SENTENCE};
    use crate::models::Prediction;
    use serde_json::json;

    fn succeeded(body: serde_json::Value) -> SubmissionState {
        SubmissionState::Succeeded(Prediction::from_value(body).unwrap())
    }

    #[test]
    fn test_inputs_in_declared_order() {
        let record = FormRecord::from_pairs([(Field::Bmi, "22.1")]);
        let view = ViewModel::build(&record, &SubmissionState::Idle);

        let labels: Vec<&str> = view.inputs.iter().map(|i| i.label).collect();
        assert_eq!(labels, Field::ALL.map(Field::name).to_vec());
        assert_eq!(view.inputs[Field::Bmi.index()].value, "22.1");
    }

    #[test]
    fn test_idle_state() {
        let view = ViewModel::build(&FormRecord::new(), &SubmissionState::Idle);
        assert_eq!(view.submit_label, SUBMIT_LABEL_IDLE);
        assert!(view.submit_enabled);
        assert!(view.error.is_none());
        assert!(view.result.is_none());
    }

    #[test]
    fn test_pending_disables_submit() {
        let view = ViewModel::build(&FormRecord::new(), &SubmissionState::Pending);
        assert_eq!(view.submit_label, SUBMIT_LABEL_PENDING);
        assert!(!view.submit_enabled);
        assert!(view.error.is_none());
        assert!(view.result.is_none());
    }

    #[test]
    fn test_error_region_only_when_failed() {
        let state = SubmissionState::Failed("Server 500: oops".to_string());
        let view = ViewModel::build(&FormRecord::new(), &state);
        assert_eq!(view.error.as_deref(), Some("Server 500: oops"));
        assert!(view.result.is_none());

        let text = render(&view);
        assert!(text.contains("Server 500: oops"));
        assert!(!text.contains(RESULT_HEADING));
    }

    #[test]
    fn test_result_region_high_likelihood() {
        let state = succeeded(json!({"prediction": 1, "probability": 0.81}));
        let view = ViewModel::build(&FormRecord::new(), &state);
        let result = view.result.as_ref().unwrap();
        assert_eq!(result.sentence, HIGH_LIKELIHOOD_SENTENCE);
        assert!(result.dump.contains("\"probability\": 0.81"));
        assert!(view.error.is_none());

        let text = render(&view);
        assert!(text.contains(HIGH_LIKELIHOOD_SENTENCE));
        assert!(text.contains("{\n  \"prediction\": 1,"));
    }

    #[test]
    fn test_result_region_low_likelihood() {
        let view = ViewModel::build(&FormRecord::new(), &succeeded(json!({"prediction": 0})));
        assert_eq!(view.result.unwrap().sentence, LOW_LIKELIHOOD_SENTENCE);
    }

    #[test]
    fn test_render_lists_every_field() {
        let text = render(&ViewModel::build(&FormRecord::new(), &SubmissionState::Idle));
        assert!(text.starts_with(PAGE_TITLE));
        for field in Field::ALL {
            assert!(text.contains(field.name()));
        }
        assert!(text.contains("[ Send ]"));
    }
}
