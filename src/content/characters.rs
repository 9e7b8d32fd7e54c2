/// An AI character profile that sets the voice of the generated lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub teaching_style: &'static str,
}

pub static CHARACTERS: [Character; 4] = [
    Character {
        key: "friendly",
        label: "Friendly Guide",
        description: "Warm, encouraging, and supportive teaching assistant",
        teaching_style: "Patient and nurturing, celebrates every small achievement",
    },
    Character {
        key: "curious",
        label: "Curious Explorer",
        description: "Asks questions and encourages discovery",
        teaching_style: "Inquiry-based learning, \"What do you think?\" approach",
    },
    Character {
        key: "playful",
        label: "Playful Buddy",
        description: "Fun-loving and energetic learning companion",
        teaching_style: "Game-based learning, songs, and interactive play",
    },
    Character {
        key: "wise",
        label: "Wise Mentor",
        description: "Knowledgeable guide with stories and wisdom",
        teaching_style: "Story-based teaching, cultural connections, life lessons",
    },
];

pub fn character_by_key(key: &str) -> Option<&'static Character> {
    let key = key.trim();
    CHARACTERS.iter().find(|c| c.key.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_lookup() {
        assert_eq!(character_by_key("wise").unwrap().label, "Wise Mentor");
        assert_eq!(character_by_key(" Playful ").unwrap().key, "playful");
        assert!(character_by_key("grumpy").is_none());
    }
}
