use serde::Serialize;

use crate::constants::LESSON_DESCRIPTION_CHARS;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub title: String,
    pub description: String,
    pub content: String,
    pub author: Option<String>,
    pub date_posted: Option<String>,
}

impl Lesson {
    /// Creates a lesson whose description is the opening of its content.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let description = content.chars().take(LESSON_DESCRIPTION_CHARS).collect();
        Self {
            title: title.into(),
            description,
            content,
            author: None,
            date_posted: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn date_posted(mut self, date_posted: impl Into<String>) -> Self {
        self.date_posted = Some(date_posted.into());
        self
    }
}

/// Ordered, read-only collection of lessons.
#[derive(Debug, Clone, Default)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }

    /// The introductory lessons shipped with the server.
    pub fn default_catalog() -> Self {
        Self::new(vec![
            Lesson::new("Introduction to Stock Trading", "Content for lesson 1...")
                .description("Start with the basics of markets, brokers, and order types.")
                .author("Author Name")
                .date_posted("Date"),
            Lesson::new(
                "Understanding Stock Market Trends",
                "Content for lesson 2...",
            )
            .description("Learn how to interpret price action and identify long-term trends.")
            .author("Author Name")
            .date_posted("Date"),
        ])
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }
}
