use std::collections::HashSet;

use serde_json::Value;

use crate::error::GraderError;
use crate::traits::parser::Parser;
use crate::types::Question;

const REQUIRED_FIELDS: [&str; 3] = ["id", "type", "points"];

/// Parses a JSON array of question objects.
///
/// Rejects missing required fields, unknown question types, zero points and duplicate ids.
pub struct QuestionParser;

impl<'a> Parser<&'a Value, Vec<Question>> for QuestionParser {
    fn parse(&self, raw: &'a Value) -> Result<Vec<Question>, GraderError> {
        let items = raw
            .as_array()
            .ok_or_else(|| GraderError::InvalidJson("questions must be an array".to_string()))?;

        let mut seen = HashSet::new();
        let mut questions = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let obj = item.as_object().ok_or_else(|| {
                GraderError::InvalidJson(format!("question {index} is not an object"))
            })?;
            if let Some(field) = REQUIRED_FIELDS.iter().find(|f| !obj.contains_key(**f)) {
                return Err(GraderError::MissingField(format!("question {index}: {field}")));
            }

            let question: Question = serde_json::from_value(item.clone())
                .map_err(|e| GraderError::InvalidJson(format!("question {index}: {e}")))?;

            if question.points == 0 {
                return Err(GraderError::InvalidPoints(question.id));
            }
            if !seen.insert(question.id.clone()) {
                return Err(GraderError::DuplicateQuestionId(question.id));
            }
            questions.push(question);
        }

        Ok(questions)
    }
}
