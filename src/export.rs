use crate::content::GlobalModule;
use crate::error::ExportError;
use crate::logger;
use crate::models::{LessonInput, LessonOutput};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Render a lesson pack as a standalone markdown document.
pub fn render_markdown_document(
    input: &LessonInput,
    output: &LessonOutput,
    generated_at: DateTime<Local>,
) -> String {
    let module = GlobalModule::resolve(&output.module_used);
    let mut doc = String::new();

    doc.push_str(&format!("# Lesson Pack - Class {}\n\n", input.grade));
    doc.push_str(&format!(
        "**Generated:** {}\n",
        generated_at.format("%Y-%m-%d %H:%M")
    ));
    doc.push_str(&format!(
        "**Students:** ages {}\n",
        input.grade.age_group()
    ));
    if module.selector == output.module_used {
        doc.push_str(&format!("**Global module:** {}\n", module.label));
    } else {
        doc.push_str(&format!("**Global module:** {}\n", output.module_used));
    }
    doc.push_str(&format!("**Source:** {}\n\n", input.origin.label()));

    doc.push_str("## Teacher's Content\n\n");
    doc.push_str(input.text.trim());
    doc.push_str("\n\n## Simplified Explanation\n\n");
    doc.push_str(output.explanation.trim());
    doc.push_str("\n\n## Practical Activity\n\n");
    doc.push_str(output.activity.trim());
    doc.push_str("\n\n## Questions & Answers\n\n");

    for (i, pair) in output.questions.iter().enumerate() {
        doc.push_str(&format!("{}. **{}**\n", i + 1, pair.q.trim()));
        doc.push_str(&format!("   {}\n", pair.a.trim()));
    }
    if output.questions.is_empty() {
        doc.push_str("_No questions were generated._\n");
    }

    doc
}

pub fn export_file_name(input: &LessonInput, generated_at: DateTime<Local>) -> String {
    format!(
        "lesson-class{}-{}.md",
        input.grade,
        generated_at.format("%Y%m%d-%H%M%S")
    )
}

/// Write the pack into `dir`, creating it if needed. Returns the file written.
pub fn export_markdown(
    dir: &Path,
    input: &LessonInput,
    output: &LessonOutput,
) -> Result<PathBuf, ExportError> {
    let generated_at = Local::now();

    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(export_file_name(input, generated_at));
    let doc = render_markdown_document(input, output, generated_at);
    fs::write(&path, doc).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    logger::log(&format!("Exported lesson pack to {}", path.display()));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentOrigin, GradeLevel, QaPair};
    use chrono::TimeZone;

    fn sample() -> (LessonInput, LessonOutput) {
        let input = LessonInput::new("Levers and pulleys.", GradeLevel::new(5).unwrap(), "us")
            .with_origin(ContentOrigin::Pdf);
        let output = LessonOutput {
            explanation: "A lever helps lift heavy things. [AI DRAWS: a seesaw]".to_string(),
            activity: "Build a lever with a ruler and a pencil.".to_string(),
            questions: vec![
                QaPair::new("What is a lever?", "A bar that turns on a point."),
                QaPair::new("Name a pulley you have seen.", "A flagpole rope."),
            ],
            module_used: "us".to_string(),
        };
        (input, output)
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_render_document_sections() {
        let (input, output) = sample();
        let doc = render_markdown_document(&input, &output, fixed_time());

        assert!(doc.starts_with("# Lesson Pack - Class 5\n"));
        assert!(doc.contains("**Generated:** 2024-06-01 09:30"));
        assert!(doc.contains("**Students:** ages 10-11"));
        assert!(doc.contains("**Global module:** USA Focus (Curiosity)"));
        assert!(doc.contains("**Source:** pdf"));
        assert!(doc.contains("[AI DRAWS: a seesaw]"));
        assert!(doc.contains("1. **What is a lever?**\n   A bar that turns on a point.\n"));
        assert!(doc.contains("2. **Name a pulley you have seen.**"));
    }

    #[test]
    fn test_render_unknown_module_keeps_raw_name() {
        let (input, mut output) = sample();
        output.module_used = "Finland (play-based)".to_string();
        output.questions.clear();
        let doc = render_markdown_document(&input, &output, fixed_time());
        assert!(doc.contains("**Global module:** Finland (play-based)"));
        assert!(doc.contains("_No questions were generated._"));
    }

    #[test]
    fn test_file_name() {
        let (input, _) = sample();
        assert_eq!(
            export_file_name(&input, fixed_time()),
            "lesson-class5-20240601-093000.md"
        );
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("packs");
        let (input, output) = sample();

        let path = export_markdown(&target, &input, &output).unwrap();
        assert!(path.starts_with(&target));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("## Practical Activity"));
        assert!(written.contains("Build a lever with a ruler and a pencil."));
    }
}
