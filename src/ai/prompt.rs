use crate::content::{GlobalModule, character_by_key};
use crate::models::LessonInput;

pub const SYSTEM_PROMPT: &str = "You are ASman Learning's AI assistant helping teachers create engaging NCERT lessons. Respond only with the requested JSON.";

/// Instruction fragment for the requested global module, auto for anything unrecognized.
pub fn module_fragment(selector: &str) -> &'static str {
    GlobalModule::resolve(selector).prompt_fragment
}

pub fn build_lesson_prompt(input: &LessonInput) -> String {
    let class = input.grade;
    let persona = input
        .character
        .as_deref()
        .and_then(character_by_key)
        .map(|c| {
            format!(
                "\nAI CHARACTER: Speak as the {} ({}). Teaching style: {}.\n",
                c.label, c.description, c.teaching_style
            )
        })
        .unwrap_or_default();

    format!(
        r#"You are ASman Learning's AI assistant helping teachers create engaging NCERT lessons for Class {class} students.

TEACHER'S CONTENT: {text}

GLOBAL MICRO-MODULE: {fragment}
{persona}
Create a comprehensive lesson pack that:

1. SIMPLIFIED EXPLANATION (Age-appropriate for Class {class})
   - Use simple, clear language for {ages} year olds
   - Include [AI DRAWS: description] markers where whiteboard animations appear
   - Make concepts visual and interactive
   - Keep sentences short and engaging

2. PRACTICAL ACTIVITY
   - Create 3-4 hands-on activities that teachers can do in class
   - Include both digital whiteboard interactions and physical activities
   - Make activities fun and educational
   - Include the global micro-module approach if selected

3. QUESTIONS & ANSWERS (5-6 pairs)
   - Create questions that encourage thinking and participation
   - Provide clear, simple answers with examples
   - Include follow-up activities or discussions

4. GLOBAL MODULE INTEGRATION
   - Show how this lesson connects to {module} learning style
   - Provide specific examples and activities
   - Maintain NCERT alignment while adding global perspective

Return as JSON with keys: simplified_explanation, practical_activity, questions_and_answers (array of {{q, a}}), global_module_used.

Focus on helping teachers save prep time while making lessons more engaging for students.
"#,
        class = class,
        text = input.text,
        fragment = module_fragment(&input.global_module),
        persona = persona,
        ages = class.age_group(),
        module = input.global_module,
    )
}
