use crate::ai::client::LessonModel;
use crate::ai::prompt::build_lesson_prompt;
use crate::error::{GenerationError, ParseError};
use crate::logger;
use crate::models::{LessonInput, LessonOutput, QaPair};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_EXPLANATION: &str = "AI will create engaging visual explanations for this topic.";
pub const DEFAULT_ACTIVITY: &str = "Interactive activities will be generated based on the content.";
pub const DEFAULT_QUESTION: &str = "What did you learn today?";
pub const DEFAULT_ANSWER: &str = "Students will share their understanding of the topic.";

impl LessonOutput {
    /// Canonical pack used wherever the model leaves a field out.
    pub fn defaults_for(input: &LessonInput) -> Self {
        Self {
            explanation: DEFAULT_EXPLANATION.to_string(),
            activity: DEFAULT_ACTIVITY.to_string(),
            questions: vec![QaPair::new(DEFAULT_QUESTION, DEFAULT_ANSWER)],
            module_used: input.global_module.clone(),
        }
    }
}

/// Fields recovered from the model's JSON. `None` means missing or unusable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialLessonOutput {
    pub explanation: Option<String>,
    pub activity: Option<String>,
    pub questions: Option<Vec<QaPair>>,
    pub module_used: Option<String>,
}

#[derive(Deserialize)]
struct RawQaPair {
    #[serde(alias = "question")]
    q: String,
    #[serde(alias = "answer")]
    a: String,
}

impl PartialLessonOutput {
    pub fn from_value(value: &Value) -> Self {
        Self {
            explanation: text_field(value.get("simplified_explanation")),
            activity: text_field(value.get("practical_activity")),
            questions: qa_field(value.get("questions_and_answers")),
            module_used: text_field(value.get("global_module_used")),
        }
    }

    pub fn merge_over(self, defaults: LessonOutput) -> LessonOutput {
        LessonOutput {
            explanation: self.explanation.unwrap_or(defaults.explanation),
            activity: self.activity.unwrap_or(defaults.activity),
            questions: self.questions.unwrap_or(defaults.questions),
            module_used: self.module_used.unwrap_or(defaults.module_used),
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.explanation.is_none() {
            missing.push("simplified_explanation");
        }
        if self.activity.is_none() {
            missing.push("practical_activity");
        }
        if self.questions.is_none() {
            missing.push("questions_and_answers");
        }
        if self.module_used.is_none() {
            missing.push("global_module_used");
        }
        missing
    }
}

fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let lines: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .collect();
            (!lines.is_empty()).then(|| lines.join("\n"))
        }
        _ => None,
    }
}

fn qa_field(value: Option<&Value>) -> Option<Vec<QaPair>> {
    let items = value?.as_array()?;
    if items.is_empty() {
        return Some(Vec::new());
    }

    let pairs: Vec<QaPair> = items
        .iter()
        .filter_map(|item| serde_json::from_value::<RawQaPair>(item.clone()).ok())
        .map(|raw| QaPair { q: raw.q, a: raw.a })
        .collect();

    (!pairs.is_empty()).then_some(pairs)
}

/// Index of the `}` closing the object opened at `start`, skipping braces inside strings.
fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in text.as_bytes()[start..].iter().copied().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Keys a lesson pack object carries on the wire.
const LESSON_KEYS: [&str; 4] = [
    "simplified_explanation",
    "practical_activity",
    "questions_and_answers",
    "global_module_used",
];

fn has_lesson_key(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| LESSON_KEYS.iter().any(|key| map.contains_key(*key)))
}

/// Locate the JSON object inside a free-text reply.
///
/// Prefers the first balanced `{...}` span that parses and carries a lesson key,
/// so example objects and stray braces in the model's prose are skipped. Falls
/// back to the first span that parses at all, then to the first balanced span
/// (or the widest `{...}` span) for the parser to reject.
pub fn extract_json_object(text: &str) -> Result<&str, ParseError> {
    let mut first_parsed: Option<&str> = None;
    let mut first_balanced: Option<&str> = None;

    for (start, _) in text.match_indices('{') {
        let Some(end) = balanced_end(text, start) else {
            continue;
        };
        let candidate = &text[start..=end];
        first_balanced.get_or_insert(candidate);
        if let Ok(value) = serde_json::from_str::<Value>(candidate) {
            if has_lesson_key(&value) {
                return Ok(candidate);
            }
            first_parsed.get_or_insert(candidate);
        }
    }

    if let Some(span) = first_parsed.or(first_balanced) {
        return Ok(span);
    }

    if let Some(start) = text.find('{')
        && let Some(end) = text.rfind('}')
        && end > start
    {
        return Ok(&text[start..=end]);
    }

    Err(ParseError::NoJson)
}

/// Turn the model's reply into a lesson pack, filling gaps with defaults.
pub fn parse_lesson_response(response: &str, input: &LessonInput) -> Result<LessonOutput, ParseError> {
    let json = extract_json_object(response)?;
    let value: Value =
        serde_json::from_str(json).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    let partial = PartialLessonOutput::from_value(&value);
    let missing = partial.missing_fields();
    if !missing.is_empty() {
        logger::log(&format!(
            "Model response missing {}; using defaults",
            missing.join(", ")
        ));
    }

    Ok(partial.merge_over(LessonOutput::defaults_for(input)))
}

/// Generate a lesson pack with a single model call bounded by `timeout`.
pub async fn generate_lesson_pack<M>(
    model: &M,
    input: &LessonInput,
    timeout: Duration,
) -> Result<LessonOutput, GenerationError>
where
    M: LessonModel + ?Sized,
{
    logger::log(&format!(
        "Generating lesson pack: class {}, module {}, origin {}",
        input.grade,
        input.global_module,
        input.origin.label()
    ));
    let prompt = build_lesson_prompt(input);

    let response = tokio::time::timeout(timeout, model.complete(&prompt))
        .await
        .map_err(|_| GenerationError::Timeout(timeout))??;

    logger::log(&format!("Raw model response: {}", response));

    let output = parse_lesson_response(&response, input)?;
    logger::log(&format!(
        "Lesson pack ready: {} questions, module {}",
        output.questions.len(),
        output.module_used
    ));
    Ok(output)
}

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use std::collections::VecDeque;
#[cfg(test)]
use std::sync::Mutex;

/// Scripted model for tests: replays responses in order after an optional delay.
#[cfg(test)]
pub struct MockLessonModel {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    delay: Duration,
    prompts: Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockLessonModel {
    pub fn with_responses(responses: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            delay: Duration::ZERO,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with_responses(vec![Ok(text.to_string())])
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl LessonModel for MockLessonModel {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GradeLevel;

    const JAPAN_RESPONSE: &str = r#"{"simplified_explanation":"X","practical_activity":"Y","questions_and_answers":[{"q":"Q1","a":"A1"}],"global_module_used":"japan"}"#;

    fn input(module: &str) -> LessonInput {
        LessonInput::new("Light and shadow.", GradeLevel::new(3).unwrap(), module)
    }

    #[test]
    fn test_extract_plain_object() {
        assert_eq!(extract_json_object(JAPAN_RESPONSE).unwrap(), JAPAN_RESPONSE);
    }

    #[test]
    fn test_extract_from_markdown_fence() {
        let text = format!("```json\n{}\n```", JAPAN_RESPONSE);
        assert_eq!(extract_json_object(&text).unwrap(), JAPAN_RESPONSE);
    }

    #[test]
    fn test_extract_skips_unrelated_brace_pair_in_prose() {
        let text = format!(
            "Use sets like {{1, 2, 3}} in class. Here is the pack: {} Enjoy!",
            JAPAN_RESPONSE
        );
        assert_eq!(extract_json_object(&text).unwrap(), JAPAN_RESPONSE);
    }

    #[test]
    fn test_extract_skips_example_object_before_lesson() {
        let text = format!(
            "Each Q&A item looks like {{\"q\": \"...\", \"a\": \"...\"}}. Here is the pack:\n{}",
            JAPAN_RESPONSE
        );
        assert_eq!(extract_json_object(&text).unwrap(), JAPAN_RESPONSE);

        let output = parse_lesson_response(&text, &input("japan")).unwrap();
        assert_eq!(output.explanation, "X");
        assert_eq!(output.questions, vec![QaPair::new("Q1", "A1")]);
    }

    #[test]
    fn test_extract_falls_back_to_first_parsed_object() {
        let text = r#"Nothing useful: {"note": "empty"} and {"other": 1}"#;
        assert_eq!(extract_json_object(text).unwrap(), r#"{"note": "empty"}"#);
    }

    #[test]
    fn test_extract_ignores_braces_inside_strings() {
        let text = r#"{"simplified_explanation":"Draw a { on the board","practical_activity":"}"}"#;
        assert_eq!(extract_json_object(text).unwrap(), text);
    }

    #[test]
    fn test_extract_without_braces_is_no_json() {
        assert_eq!(
            extract_json_object("Sorry, I cannot help with that."),
            Err(ParseError::NoJson)
        );
        assert_eq!(extract_json_object("} backwards {"), Err(ParseError::NoJson));
    }

    #[test]
    fn test_parse_full_response_reproduces_fields() {
        let output = parse_lesson_response(JAPAN_RESPONSE, &input("japan")).unwrap();
        assert_eq!(output.explanation, "X");
        assert_eq!(output.activity, "Y");
        assert_eq!(output.questions, vec![QaPair::new("Q1", "A1")]);
        assert_eq!(output.module_used, "japan");
    }

    #[test]
    fn test_parse_invalid_json_fails() {
        let result = parse_lesson_response("{\"simplified_explanation\": oops}", &input("auto"));
        assert!(matches!(result, Err(ParseError::InvalidJson(_))));
    }

    #[test]
    fn test_missing_questions_get_default_pair() {
        let response = r#"{"simplified_explanation":"X","practical_activity":"Y","global_module_used":"us"}"#;
        let output = parse_lesson_response(response, &input("us")).unwrap();
        assert_eq!(
            output.questions,
            vec![QaPair::new(DEFAULT_QUESTION, DEFAULT_ANSWER)]
        );
    }

    #[test]
    fn test_missing_module_echoes_requested_selector() {
        let response = r#"{"simplified_explanation":"X","practical_activity":"Y","questions_and_answers":[]}"#;
        let output = parse_lesson_response(response, &input("europe")).unwrap();
        assert_eq!(output.module_used, "europe");
        assert!(output.questions.is_empty());
    }

    #[test]
    fn test_empty_object_is_all_defaults() {
        let output = parse_lesson_response("{}", &input("none")).unwrap();
        assert_eq!(output, LessonOutput::defaults_for(&input("none")));
    }

    #[test]
    fn test_empty_strings_and_nulls_are_missing() {
        let value: Value = serde_json::from_str(
            r#"{"simplified_explanation":"","practical_activity":null,"questions_and_answers":null,"global_module_used":"  "}"#,
        )
        .unwrap();
        let partial = PartialLessonOutput::from_value(&value);
        assert_eq!(partial, PartialLessonOutput::default());
        assert_eq!(partial.missing_fields().len(), 4);
    }

    #[test]
    fn test_lenient_field_shapes() {
        let value: Value = serde_json::from_str(
            r#"{
                "simplified_explanation": ["Line one", "Line two"],
                "questions_and_answers": [
                    {"question": "Why?", "answer": "Because."},
                    "not a pair",
                    {"q": "How?"}
                ]
            }"#,
        )
        .unwrap();
        let partial = PartialLessonOutput::from_value(&value);
        assert_eq!(partial.explanation.as_deref(), Some("Line one\nLine two"));
        assert_eq!(partial.questions, Some(vec![QaPair::new("Why?", "Because.")]));
        assert_eq!(partial.activity, None);
    }

    #[test]
    fn test_unusable_question_list_falls_back() {
        let value: Value =
            serde_json::from_str(r#"{"questions_and_answers": [1, 2, 3]}"#).unwrap();
        assert_eq!(PartialLessonOutput::from_value(&value).questions, None);
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_parses_reply() {
        let model = MockLessonModel::replying(&format!("Here you go:\n{}", JAPAN_RESPONSE));
        let output = generate_lesson_pack(&model, &input("japan"), Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(output.explanation, "X");
        let prompts = model.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Include mindful activities, group harmony"));
    }

    #[tokio::test]
    async fn test_generate_without_json_fails() {
        let model = MockLessonModel::replying("I'd love to help with this lesson!");
        let err = generate_lesson_pack(&model, &input("auto"), Duration::from_secs(5))
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::Parse(ParseError::NoJson));
    }

    #[tokio::test]
    async fn test_generate_propagates_network_error() {
        let model = MockLessonModel::with_responses(vec![Err(GenerationError::Network(
            "401 Unauthorized".to_string(),
        ))]);
        let err = generate_lesson_pack(&model, &input("auto"), Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Network(_)));
    }

    #[tokio::test]
    async fn test_generate_times_out() {
        let model = MockLessonModel::replying(JAPAN_RESPONSE).with_delay(Duration::from_millis(500));
        let timeout = Duration::from_millis(20);
        let err = generate_lesson_pack(&model, &input("japan"), timeout)
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::Timeout(timeout));
    }
}
