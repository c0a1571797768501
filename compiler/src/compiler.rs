use tracing::{debug, warn};

use crate::{
    error::MetricsError,
    gen_metrics::{generate_metrics, GeneratorConfig},
    gen_types::translate_types,
    parser::parse_metrics,
    tokenizer::tokenize_lines,
    types::ParsedMetrics,
    verifier::find_unresolved,
};

/// Compile a metric description into `(ParsedMetrics, Go source)`.
/// Unresolved references are logged and rendered as placeholders; returns
/// `Err(MetricsError)` only if the input ends inside a block.
pub fn compile_metrics(text: &str, config: &GeneratorConfig) -> Result<(ParsedMetrics, String), MetricsError> {
    let lines  = tokenize_lines(text);
    let parsed = parse_metrics(&lines)?;
    debug!(
        blocks = parsed.blocks.len(),
        tags = parsed.type_tags.len(),
        accessors = parsed.field_names.len(),
        "parsed metric description"
    );

    for unresolved in find_unresolved(&parsed) {
        warn!("{}", unresolved);
    }

    let go_code = generate_metrics(&parsed, config).render();
    Ok((parsed, go_code))
}

/// Translate the struct descriptions in `text` into Go structs.
pub fn compile_types(text: &str) -> String {
    translate_types(&tokenize_lines(text))
}

/// Metrics code followed by the translated structs, each pass reading `text`
/// on its own.
pub fn compile_all(text: &str, config: &GeneratorConfig) -> Result<(ParsedMetrics, String), MetricsError> {
    let (parsed, metrics) = compile_metrics(text, config)?;
    let types = compile_types(text);
    Ok((parsed, metrics + &types))
}
