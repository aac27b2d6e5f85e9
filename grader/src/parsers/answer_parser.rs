use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::error::GraderError;
use crate::traits::parser::Parser;
use crate::types::{AnswerSheet, Question, QuestionType, SubmittedAnswer};

/// Parses a learner's answers, keyed by question id.
///
/// Individual answers are coerced rather than rejected:
/// strings are kept, numbers and booleans are stringified, arrays are joined with `,`,
/// objects become pairs, and `null` is dropped. A matching answer stored as a JSON-encoded
/// object string is decoded into pairs. Answers for unknown question ids are ignored.
pub struct AnswerParser;

impl<'a> Parser<(&'a Value, &'a [Question]), AnswerSheet> for AnswerParser {
    fn parse(&self, (raw, questions): (&'a Value, &'a [Question])) -> Result<AnswerSheet, GraderError> {
        let entries = raw
            .as_object()
            .ok_or_else(|| GraderError::InvalidJson("answers must be an object".to_string()))?;

        let types: HashMap<&str, QuestionType> = questions
            .iter()
            .map(|q| (q.id.as_str(), q.question_type))
            .collect();

        let mut sheet = AnswerSheet::new();
        for (id, value) in entries {
            let Some(question_type) = types.get(id.as_str()) else {
                tracing::debug!(question_id = %id, "ignoring answer for unknown question");
                continue;
            };
            if let Some(answer) = coerce_answer(*question_type, value) {
                sheet.insert(id.clone(), answer);
            }
        }

        Ok(sheet)
    }
}

fn coerce_answer(question_type: QuestionType, value: &Value) -> Option<SubmittedAnswer> {
    match value {
        Value::Null => None,
        Value::Object(map) => Some(SubmittedAnswer::Pairs(
            map.iter()
                .map(|(k, v)| (k.clone(), stringify(v)))
                .collect::<BTreeMap<_, _>>(),
        )),
        Value::String(s) if question_type == QuestionType::Matching => {
            match serde_json::from_str::<Value>(s) {
                Ok(decoded @ Value::Object(_)) => coerce_answer(question_type, &decoded),
                _ => Some(SubmittedAnswer::Text(s.clone())),
            }
        }
        other => Some(SubmittedAnswer::Text(stringify(other))),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}
