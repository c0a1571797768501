use tracing::{debug, warn};

use crate::{
    error::MetricsError,
    tokenizer::{Line, LineKind},
    types::{MetricBlock, MetricItem, ParsedMetrics},
    utils::{lower_first, to_camel_case, UINT64},
};

enum ParseState {
    NoBlockOpen,
    BlockOpen(MetricBlock),
}

fn open_block(help: Option<String>, line: usize) -> MetricBlock {
    MetricBlock {
        name:         String::new(),
        type_name:    String::new(),
        help,
        tag:          None,
        items:        Vec::new(),
        is_aggregate: false,
        line,
    }
}

/// Single forward pass over classified lines.
///
/// A doc-comment opens a block and seeds its help text, a header names it, field
/// lines append items and `}` seals it. Field types are recorded in the tag
/// table as they are met; blocks only capture a tag if their type was already
/// seen as a field, the rest is resolved at emission time.
///
/// Returns `Err(MetricsError::TruncatedInput)` if the input ends with a block
/// still open.
pub fn parse_metrics(lines: &[Line]) -> Result<ParsedMetrics, MetricsError> {
    let mut parsed = ParsedMetrics::default();
    let mut state  = ParseState::NoBlockOpen;

    for line in lines {
        state = match (state, &line.kind) {
            (state, LineKind::Skip | LineKind::Comment | LineKind::Other) => state,

            (ParseState::NoBlockOpen, LineKind::DocComment { help }) => {
                ParseState::BlockOpen(open_block(Some(help.clone()), line.number))
            }
            // Doc-comments inside a block belong to its fields.
            (state @ ParseState::BlockOpen(_), LineKind::DocComment { .. }) => state,

            (ParseState::NoBlockOpen, LineKind::BlockEnd) => {
                warn!(line = line.number, "closing brace outside of any block, ignored");
                ParseState::NoBlockOpen
            }
            (ParseState::BlockOpen(block), LineKind::BlockEnd) => {
                debug!(name = %block.name, items = block.items.len(), "sealed block");
                parsed.blocks.push(block);
                ParseState::NoBlockOpen
            }

            (state, LineKind::Header { type_name, is_aggregate }) => {
                let mut block = match state {
                    ParseState::BlockOpen(block) => block,
                    ParseState::NoBlockOpen      => open_block(None, line.number),
                };
                block.name         = lower_first(type_name);
                block.type_name    = type_name.clone();
                block.tag          = parsed.type_tags.get(type_name).cloned();
                block.is_aggregate = *is_aggregate;
                block.line         = line.number;
                if *is_aggregate {
                    parsed.aggregate = Some(type_name.clone());
                }
                ParseState::BlockOpen(block)
            }

            (ParseState::NoBlockOpen, LineKind::Field { name, .. }) => {
                warn!(line = line.number, field = %name, "field outside of any block, ignored");
                ParseState::NoBlockOpen
            }
            (ParseState::BlockOpen(mut block), LineKind::Field { name, type_name }) => {
                let field = to_camel_case(name);
                if type_name != UINT64 {
                    if let Some(previous) = parsed.type_tags.insert(type_name.clone(), name.clone()) {
                        debug!(type_name = %type_name, %previous, tag = %name, "tag overwritten");
                    }
                }
                if block.is_aggregate {
                    parsed.field_names.insert(type_name.clone(), field.clone());
                }
                block.items.push(MetricItem {
                    field,
                    label: name.clone(),
                });
                ParseState::BlockOpen(block)
            }
        };
    }

    match state {
        ParseState::NoBlockOpen => Ok(parsed),
        ParseState::BlockOpen(block) => Err(MetricsError::TruncatedInput {
            name: block.type_name,
            line: block.line,
        }),
    }
}
