//! Page shells. Askama escapes every field; the fragments produced by
//! `render` are already escaped and are inserted with `|safe`.

use askama::Template;

use crate::input::NumericInputPair;
use crate::render::html::Element;
use crate::render::render_result_line;
use crate::ui::controller::{CalculatorView, ResumeOutput, ResumeView};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub api_base_url: &'a str,
}

#[derive(Template)]
#[template(path = "resume.html")]
pub struct ResumePage {
    pub has_file: bool,
    pub file_name: String,
    pub file_size: String,
    pub can_parse: bool,
    pub parse_label: &'static str,
    pub notice: String,
    pub output_html: String,
}

impl ResumePage {
    pub fn new(view: &ResumeView, busy: bool, notice: Option<String>) -> Self {
        let (file_name, file_size) = view
            .selected
            .as_ref()
            .map(|f| (f.name().to_string(), f.size_label()))
            .unwrap_or_default();

        let output_html = match &view.output {
            ResumeOutput::Empty => String::new(),
            ResumeOutput::Rendered(html) => html.clone(),
            ResumeOutput::Failed(msg) => Element::new("div")
                .class("error")
                .text(msg.as_str())
                .render(),
        };

        Self {
            has_file: view.selected.is_some(),
            file_name,
            file_size,
            can_parse: view.selected.is_some() && !busy,
            parse_label: if busy { "Parsing..." } else { "Parse Resume" },
            notice: notice.unwrap_or_default(),
            output_html,
        }
    }
}

#[derive(Template)]
#[template(path = "calculator.html")]
pub struct CalculatorPage {
    pub number1: String,
    pub number2: String,
    pub can_submit: bool,
    pub submit_label: &'static str,
    pub result_html: String,
}

impl CalculatorPage {
    pub fn new(view: &CalculatorView, busy: bool) -> Self {
        let NumericInputPair { number1, number2 } = view.fields.clone();
        Self {
            can_submit: view.fields.submit_enabled() && !busy,
            number1,
            number2,
            submit_label: if busy { "Calculating..." } else { "Calculate" },
            result_html: render_result_line(&view.result),
        }
    }
}
