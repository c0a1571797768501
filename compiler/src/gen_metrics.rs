use crate::{
    types::{MetricBlock, ParsedMetrics},
    utils::{lower_first, quote, upper_first, PLACEHOLDER},
};

/// Names used in the generated Go code that do not come from the input.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Go constant passed as `Namespace:` to every gauge.
    pub namespace:    String,
    /// Parameter name of the aggregate in the update function.
    pub instance_var: String,
    /// Label name every gauge is partitioned by.
    pub label_name:   String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace:    "namespaceFirecracker".to_string(),
            instance_var: "fm".to_string(),
            label_name:   "item".to_string(),
        }
    }
}

/// The three Go fragments, one entry per statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratedMetrics {
    pub aggregate:     String,
    pub instance_var:  String,
    pub declarations:  Vec<String>,
    pub registrations: Vec<String>,
    pub updates:       Vec<String>,
}

impl GeneratedMetrics {
    /// Lays the fragments out as a `var` block, a register function and an
    /// update function.
    pub fn render(&self) -> String {
        let mut go_code: Vec<String> = Vec::new();

        go_code.push("var (".to_string());
        for declaration in &self.declarations {
            go_code.push(declaration.clone());
            go_code.push("".to_string());
        }
        go_code.push(")".to_string());
        go_code.push("".to_string());
        go_code.push("".to_string());

        go_code.push(format!("func register{}() {{", self.aggregate));
        go_code.extend(self.registrations.iter().cloned());
        go_code.push("}".to_string());
        go_code.push("".to_string());
        go_code.push("".to_string());

        go_code.push(format!(
            "func update{}({} *{}) {{",
            self.aggregate, self.instance_var, self.aggregate
        ));
        go_code.extend(self.updates.iter().cloned());
        go_code.push("}".to_string());

        go_code.join("\n") + "\n"
    }
}

fn generate_declaration(parsed: &ParsedMetrics, block: &MetricBlock, config: &GeneratorConfig) -> String {
    let tag  = parsed.resolve_tag(block).unwrap_or(PLACEHOLDER);
    let help = block.help.as_deref().unwrap_or("");

    let lines = [
        format!("{} = prometheus.NewGaugeVec(prometheus.GaugeOpts{{", lower_first(&block.name)),
        format!("        Namespace: {},", config.namespace),
        format!("        Name:      {},", quote(tag)),
        format!("        Help:      {},", quote(help)),
        "    },".to_string(),
        format!("        []string{{{}}},", quote(&config.label_name)),
        "    )".to_string(),
    ];
    lines.join("\n")
}

fn generate_updates(parsed: &ParsedMetrics, block: &MetricBlock, config: &GeneratorConfig) -> Vec<String> {
    let accessor = parsed
        .field_names
        .get(&upper_first(&block.name))
        .map(String::as_str)
        .unwrap_or(PLACEHOLDER);
    let instance = format!("{}.{}", config.instance_var, upper_first(accessor));

    let mut updates = vec!["".to_string(), format!("// set metrics for {}", block.name)];
    for item in &block.items {
        updates.push(format!(
            "{}.WithLabelValues({}).Set(float64({}.{}))",
            block.name,
            quote(&item.label),
            instance,
            item.field
        ));
    }
    updates
}

/// Builds declaration, registration and update statements for every block
/// except the aggregate, in input order. Failed lookups are written as
/// `FIXME` rather than reported.
pub fn generate_metrics(parsed: &ParsedMetrics, config: &GeneratorConfig) -> GeneratedMetrics {
    let mut generated = GeneratedMetrics {
        aggregate:    parsed.aggregate.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        instance_var: config.instance_var.clone(),
        ..Default::default()
    };

    for block in parsed.metric_blocks() {
        generated.declarations.push(generate_declaration(parsed, block, config));
        generated.registrations.push(format!("    prometheus.MustRegister({})", block.name));
        generated.updates.extend(generate_updates(parsed, block, config));
    }

    generated
}
