use crate::domain::message::MessageBatch;
use crate::error::{EvaluatorError, Result};
use std::io::BufRead;

/// Reads queue batches delivered as JSON lines, one batch envelope per line.
///
/// Blank lines are skipped. A line that is not a valid envelope yields an
/// error without stopping the stream.
pub struct BatchReader<R: BufRead> {
    source: R,
}

impl<R: BufRead> BatchReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Returns an iterator that lazily reads and deserializes batches.
    pub fn batches(self) -> impl Iterator<Item = Result<MessageBatch>> {
        self.source.lines().filter_map(|line| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(
                serde_json::from_str::<MessageBatch>(&line).map_err(EvaluatorError::from),
            ),
            Err(e) => Some(Err(EvaluatorError::from(e))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = concat!(
            r#"{"Records":[{"messageId":"m-1","body":"{}"},{"messageId":"m-2","body":"{}"}]}"#,
            "\n\n",
            r#"{"Records":[{"messageId":"m-3","body":"{}"}]}"#,
            "\n"
        );
        let reader = BatchReader::new(data.as_bytes());
        let results: Vec<Result<MessageBatch>> = reader.batches().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.records.len(), 2);
        assert_eq!(first.records[1].message_id, "m-2");
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "not an envelope\n{\"Records\":[]}\n";
        let reader = BatchReader::new(data.as_bytes());
        let results: Vec<Result<MessageBatch>> = reader.batches().collect();

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Err(EvaluatorError::MalformedMessage(_))));
        assert!(results[1].as_ref().unwrap().records.is_empty());
    }
}
