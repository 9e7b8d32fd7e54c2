//! NCERT curriculum content for classes 1 to 5, as grade -> subject -> topic -> text.

use crate::models::GradeLevel;
use lazy_static::lazy_static;
use std::collections::HashMap;

type RawGrade = (u8, &'static [(&'static str, &'static [(&'static str, &'static str)])]);

const RAW_CURRICULUM: &[RawGrade] = &[
    (
        1,
        &[
            (
                "Mathematics",
                &[
                    ("Numbers", "Learning numbers 1 to 20. Understanding counting, more and less, addition and subtraction with objects."),
                    ("Shapes", "Identifying basic shapes - circle, square, triangle, rectangle. Finding shapes in our environment."),
                    ("Patterns", "Creating and continuing simple patterns with colors, shapes, and objects."),
                ],
            ),
            (
                "Environmental Studies",
                &[
                    ("My Family", "Understanding family members, their roles, and how families care for each other."),
                    ("Animals Around Us", "Identifying domestic and wild animals, their sounds, homes, and what they eat."),
                    ("Plants", "Learning about different plants, trees, flowers, and how they grow."),
                ],
            ),
            (
                "Hindi",
                &[
                    ("Letters", "Learning Hindi alphabets, vowels and consonants with examples."),
                    ("Simple Words", "Reading and writing simple Hindi words and their meanings."),
                    ("Stories", "Listening to simple stories and understanding their moral values."),
                ],
            ),
        ],
    ),
    (
        2,
        &[
            (
                "Mathematics",
                &[
                    ("Numbers up to 100", "Understanding place value, tens and ones, comparing numbers, and simple addition/subtraction."),
                    ("Measurement", "Learning about length, weight, and capacity using everyday objects."),
                    ("Time", "Reading time on clocks, understanding days, weeks, months, and seasons."),
                ],
            ),
            (
                "Environmental Studies",
                &[
                    ("Our Body", "Learning about body parts, senses, and keeping our body healthy and clean."),
                    ("Food", "Understanding different types of food, healthy eating habits, and where food comes from."),
                    ("Water", "Importance of water, sources of water, and how to save water."),
                ],
            ),
            (
                "English",
                &[
                    ("Reading", "Reading simple sentences and short stories with comprehension."),
                    ("Writing", "Writing simple sentences, describing pictures, and basic grammar."),
                    ("Poems", "Reciting poems, understanding rhythm, and expressing through actions."),
                ],
            ),
        ],
    ),
    (
        3,
        &[
            (
                "Mathematics",
                &[
                    ("Numbers up to 1000", "Place value, addition and subtraction with regrouping, multiplication tables."),
                    ("Geometry", "Lines, angles, 2D and 3D shapes, symmetry in nature and art."),
                    ("Data Handling", "Collecting data, making simple graphs and charts, interpreting information."),
                ],
            ),
            (
                "Environmental Studies",
                &[
                    ("Living and Non-living", "Characteristics of living things, life cycles, and interdependence in nature."),
                    ("Our Environment", "Understanding pollution, conservation, and our responsibility towards nature."),
                    ("Means of Transport", "Different modes of transport, their uses, and evolution over time."),
                ],
            ),
            (
                "Science",
                &[
                    ("Matter", "States of matter, properties of solids, liquids, and gases with examples."),
                    ("Light and Shadow", "Sources of light, how shadows are formed, and uses of light."),
                    ("Sound", "How sound is produced, different types of sounds, and noise pollution."),
                ],
            ),
        ],
    ),
    (
        4,
        &[
            (
                "Mathematics",
                &[
                    ("Large Numbers", "Numbers up to 10,000, place value, operations, and word problems."),
                    ("Fractions", "Understanding parts of a whole, comparing fractions, and simple operations."),
                    ("Decimals", "Introduction to decimal numbers and their use in daily life."),
                ],
            ),
            (
                "Science",
                &[
                    ("Food and Nutrition", "Balanced diet, nutrients, food groups, and malnutrition."),
                    ("Animals and Plants", "Adaptation, habitats, food chains, and biodiversity."),
                    ("Materials and Objects", "Properties of materials, changes in materials, and their uses."),
                ],
            ),
            (
                "Social Science",
                &[
                    ("Our Past", "Introduction to history, sources of history, and early human life."),
                    ("Maps and Directions", "Understanding maps, symbols, directions, and scale."),
                    ("Government", "Local government, democracy, and citizen responsibilities."),
                ],
            ),
        ],
    ),
    (
        5,
        &[
            (
                "Mathematics",
                &[
                    ("Numbers and Operations", "Large numbers, factors, multiples, prime numbers, and problem solving."),
                    ("Geometry and Measurement", "Perimeter, area, volume, and geometric constructions."),
                    ("Data and Probability", "Data collection, analysis, graphs, and introduction to probability."),
                ],
            ),
            (
                "Science",
                &[
                    ("Human Body", "Digestive system, respiratory system, circulatory system, and health."),
                    ("Natural Resources", "Air, water, soil, forests, and their conservation."),
                    ("Simple Machines", "Levers, pulleys, inclined planes, and their applications."),
                ],
            ),
            (
                "Social Science",
                &[
                    ("Indian History", "Ancient civilizations, medieval period, and freedom struggle."),
                    ("Geography", "Physical features of India, climate, natural vegetation, and resources."),
                    ("Civics", "Constitution, fundamental rights, duties, and democratic processes."),
                ],
            ),
        ],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub name: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub name: &'static str,
    pub topics: Vec<Topic>,
}

lazy_static! {
    static ref CURRICULUM: HashMap<u8, Vec<Subject>> = RAW_CURRICULUM
        .iter()
        .map(|(grade, subjects)| {
            let subjects = subjects
                .iter()
                .map(|(name, topics)| Subject {
                    name: *name,
                    topics: topics
                        .iter()
                        .map(|(name, text)| Topic { name: *name, text: *text })
                        .collect(),
                })
                .collect();
            (*grade, subjects)
        })
        .collect();
}

/// Grades that have content, lowest first.
pub fn grades() -> Vec<GradeLevel> {
    let mut grades: Vec<GradeLevel> = CURRICULUM.keys().filter_map(|g| GradeLevel::new(*g)).collect();
    grades.sort();
    grades
}

pub fn subjects(grade: GradeLevel) -> &'static [Subject] {
    CURRICULUM
        .get(&grade.value())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn topics(grade: GradeLevel, subject: &str) -> &'static [Topic] {
    subjects(grade)
        .iter()
        .find(|s| s.name == subject)
        .map(|s| s.topics.as_slice())
        .unwrap_or(&[])
}

pub fn topic_text(grade: GradeLevel, subject: &str, topic: &str) -> Option<&'static str> {
    topics(grade, subject)
        .iter()
        .find(|t| t.name == topic)
        .map(|t| t.text)
}
