//! Data-quality checks over a loaded catalog
//!
//! Browsing tolerates all of these; validation lists them so authors can
//! fix the data file.

use crate::catalog::Catalog;
use crate::error::ContentError;
use crate::text::body_of;
use crate::types::Story;
use serde::Serialize;

/// One data-quality finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub story: String,

    #[serde(serialize_with = "serialize_display")]
    pub problem: ContentError,
}

fn serialize_display<S: serde::Serializer>(
    problem: &ContentError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(problem)
}

/// Check every story in catalog order, then report dropped duplicates
pub fn validate_catalog(catalog: &Catalog) -> Vec<Issue> {
    let duplicates = catalog.duplicate_ids().iter().map(|id| Issue {
        story: id.clone(),
        problem: ContentError::DuplicateId(id.clone()),
    });

    let issues: Vec<Issue> = catalog
        .stories()
        .iter()
        .flat_map(|story| validate_story(catalog, story))
        .chain(duplicates)
        .collect();

    tracing::debug!("Validated {} stories, {} issues", catalog.len(), issues.len());
    issues
}

/// Problems with a single story
pub fn validate_story(catalog: &Catalog, story: &Story) -> Vec<Issue> {
    let mut problems = Vec::new();

    if let Err(e) = body_of(story) {
        problems.push(e);
    }

    if let Err(e) = catalog.parser().parse(&story.level) {
        problems.push(e);
    }

    for (quiz, q) in story.quizzes.iter().enumerate() {
        let choices = q.choices().len();
        if choices == 0 {
            problems.push(ContentError::QuizWithoutChoices {
                story: story.id.clone(),
                quiz,
            });
        } else if q.answer().is_none() {
            problems.push(match q.answer_index {
                Some(index) => ContentError::QuizIndexOutOfRange {
                    story: story.id.clone(),
                    quiz,
                    index,
                    choices,
                },
                None => ContentError::QuizAnswerUnreadable {
                    story: story.id.clone(),
                    quiz,
                },
            });
        }
    }

    problems
        .into_iter()
        .map(|problem| Issue {
            story: story.id.clone(),
            problem,
        })
        .collect()
}
