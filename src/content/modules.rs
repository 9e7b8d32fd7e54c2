pub const AUTO_SELECTOR: &str = "auto";
/// Sent when the teacher switches global modules off. Has no fragment of its own.
pub const NONE_SELECTOR: &str = "none";

/// A global micro-module: a cultural teaching style injected into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalModule {
    pub selector: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub prompt_fragment: &'static str,
}

pub static GLOBAL_MODULES: [GlobalModule; 5] = [
    GlobalModule {
        selector: AUTO_SELECTOR,
        label: "Auto-Suggest",
        description: "AI will choose the best cultural learning approach for this topic",
        prompt_fragment: "Automatically select the most appropriate global learning approach",
    },
    GlobalModule {
        selector: "china",
        label: "China Focus (Drills)",
        description: "Structured drills, repetition exercises, and disciplined learning practices",
        prompt_fragment: "Include structured drills, repetition exercises, and disciplined learning approaches",
    },
    GlobalModule {
        selector: "japan",
        label: "Japan Focus (Discipline)",
        description: "Mindful activities, group harmony, and respectful learning methods",
        prompt_fragment: "Include mindful activities, group harmony, and respectful learning practices",
    },
    GlobalModule {
        selector: "us",
        label: "USA Focus (Curiosity)",
        description: "Curiosity-driven experiments, hands-on exploration, and creative problem-solving",
        prompt_fragment: "Include curiosity-driven experiments, hands-on exploration, and creative problem-solving",
    },
    GlobalModule {
        selector: "europe",
        label: "Europe Focus (Creativity)",
        description: "Artistic expression, creative storytelling, and imaginative learning approaches",
        prompt_fragment: "Include artistic expression, creative storytelling, and imaginative activities",
    },
];

pub fn module_by_selector(selector: &str) -> Option<&'static GlobalModule> {
    GLOBAL_MODULES.iter().find(|m| m.selector == selector)
}

impl GlobalModule {
    pub fn auto() -> &'static GlobalModule {
        &GLOBAL_MODULES[0]
    }

    /// Module whose fragment is used for `selector`; anything unrecognized gets auto.
    pub fn resolve(selector: &str) -> &'static GlobalModule {
        module_by_selector(selector).unwrap_or_else(Self::auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_selectors() {
        for module in GLOBAL_MODULES.iter() {
            assert_eq!(GlobalModule::resolve(module.selector), module);
        }
    }

    #[test]
    fn test_resolve_unknown_and_none_fall_back_to_auto() {
        assert_eq!(GlobalModule::resolve(NONE_SELECTOR).selector, AUTO_SELECTOR);
        assert_eq!(GlobalModule::resolve("atlantis").selector, AUTO_SELECTOR);
        assert_eq!(GlobalModule::resolve("").selector, AUTO_SELECTOR);
    }

    #[test]
    fn test_selectors_are_case_sensitive() {
        assert!(module_by_selector("Japan").is_none());
    }
}
