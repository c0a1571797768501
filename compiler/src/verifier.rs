use std::fmt;

use crate::{
    error::MetricsError,
    types::ParsedMetrics,
    utils::{quote, upper_first},
};

/// A reference that will be rendered as the placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Unresolved {
    /// No field anywhere has this block's type, so the metric has no name.
    Tag { block: String, line: usize },
    /// The aggregate has no field of this block's type.
    AggregateField { block: String, line: usize },
    /// No `type X struct {` header was seen.
    MissingAggregate,
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unresolved::Tag { block, line } => {
                write!(f, "no metric name for block {} at line {}", quote(block), line)
            }
            Unresolved::AggregateField { block, line } => write!(
                f,
                "aggregate has no field for block {} at line {}",
                quote(block),
                line
            ),
            Unresolved::MissingAggregate => write!(f, "no aggregate block was defined"),
        }
    }
}

/// Lists every lookup the metrics generator will fail, in block order.
pub fn find_unresolved(parsed: &ParsedMetrics) -> Vec<Unresolved> {
    let mut unresolved = Vec::new();

    if parsed.aggregate.is_none() {
        unresolved.push(Unresolved::MissingAggregate);
    }

    for block in parsed.metric_blocks() {
        if parsed.resolve_tag(block).is_none() {
            unresolved.push(Unresolved::Tag {
                block: block.type_name.clone(),
                line:  block.line,
            });
        }
        if !parsed.field_names.contains_key(&upper_first(&block.name)) {
            unresolved.push(Unresolved::AggregateField {
                block: block.type_name.clone(),
                line:  block.line,
            });
        }
    }

    unresolved
}

/// Returns `Ok(())` if every reference resolves, or
/// `Err(MetricsError::Unresolved(_))` for the first one that does not.
pub fn verify_metrics(parsed: &ParsedMetrics) -> Result<(), MetricsError> {
    match find_unresolved(parsed).into_iter().next() {
        Some(first) => Err(MetricsError::Unresolved(first.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parser::parse_metrics, tokenizer::tokenize_lines};

    fn parse(text: &str) -> ParsedMetrics {
        parse_metrics(&tokenize_lines(text)).unwrap()
    }

    #[test]
    fn test_fully_resolved() {
        let parsed = parse(
            "/// All\ntype Fm struct {\n    pub net: NetMetrics,\n}\n\
             /// Net\npub struct NetMetrics {\n    pub rx: SharedMetric,\n}\n",
        );
        assert!(find_unresolved(&parsed).is_empty());
        assert!(verify_metrics(&parsed).is_ok());
    }

    #[test]
    fn test_missing_aggregate_and_tag() {
        let parsed = parse("/// Net\npub struct NetMetrics {\n    pub rx: SharedMetric,\n}\n");
        assert_eq!(
            find_unresolved(&parsed),
            vec![
                Unresolved::MissingAggregate,
                Unresolved::Tag { block: "NetMetrics".into(), line: 2 },
                Unresolved::AggregateField { block: "NetMetrics".into(), line: 2 },
            ]
        );
    }

    #[test]
    fn test_tag_resolved_from_later_aggregate() {
        let parsed = parse(
            "/// Net\npub struct NetMetrics {\n    pub rx: SharedMetric,\n}\n\
             /// All\ntype Fm struct {\n    pub net: NetMetrics,\n}\n",
        );
        assert!(find_unresolved(&parsed).is_empty());
    }

    #[test]
    fn test_verify_reports_first() {
        let parsed = parse("/// Net\npub struct NetMetrics {\n}\n");
        let err = verify_metrics(&parsed).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unresolved reference: no aggregate block was defined"
        );
    }
}
