use crate::{
    tokenizer::{Line, LineKind},
    utils::{json_tag, to_camel_case},
};

/// Rewrites the struct descriptions as Go structs with JSON tags.
///
/// Purely line-local: attributes are dropped, headers and fields are
/// translated, everything else (comments included) is copied verbatim.
pub fn translate_types(lines: &[Line]) -> String {
    let mut go_code: Vec<String> = Vec::new();

    for line in lines {
        match &line.kind {
            LineKind::Skip => {}
            LineKind::Header { type_name, .. } => {
                go_code.push(format!("type {} struct {{", type_name));
            }
            LineKind::Field { name, type_name } => {
                go_code.push(format!("   {} {} {}", to_camel_case(name), type_name, json_tag(name)));
            }
            LineKind::DocComment { .. } | LineKind::Comment | LineKind::BlockEnd | LineKind::Other => {
                go_code.push(line.text.clone());
            }
        }
    }

    go_code.iter().map(|line| format!("{}\n", line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize_lines;

    #[test]
    fn test_translate_block() {
        let input = "\
// Metrics for the MMDS.
pub struct MmdsMetrics {
    pub rx_accepted: SharedMetric,
}
";
        let output = translate_types(&tokenize_lines(input));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "// Metrics for the MMDS.",
                "type MmdsMetrics struct {",
                "   RxAccepted uint64 `json:\"rx_accepted\"`",
                "}",
            ]
        );
    }

    #[test]
    fn test_translate_drops_attributes_and_keeps_comments() {
        let input = "\
/// Api server metrics
#[derive(Default, Serialize)]
type FirecrackerMetrics struct {
    /// API server related metrics.
    pub api_server: ApiServerMetrics,

}
";
        let output = translate_types(&tokenize_lines(input));
        assert_eq!(
            output,
            "/// Api server metrics\n\
             type FirecrackerMetrics struct {\n\
             \x20   /// API server related metrics.\n\
             \x20  ApiServer ApiServerMetrics `json:\"api_server\"`\n\
             \n\
             }\n"
        );
    }

    #[test]
    fn test_translate_passes_through_other_lines() {
        let output = translate_types(&tokenize_lines("impl Default for X {\n        Self { count: 0 }\n"));
        assert_eq!(output, "impl Default for X {\n        Self { count: 0 }\n");
    }
}
