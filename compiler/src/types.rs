use serde::Serialize;
use std::collections::BTreeMap;

/// One field of a metric block: the Go accessor and the original field name,
/// which doubles as the Prometheus label value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricItem {
    pub field: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricBlock {
    /// Type name with the first letter lowered, used as the Go variable name.
    pub name:         String,
    pub type_name:    String,
    pub help:         Option<String>,
    pub tag:          Option<String>,
    pub items:        Vec<MetricItem>,
    pub is_aggregate: bool,
    pub line:         usize,
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct ParsedMetrics {
    /// Every sealed block in input order, aggregate included.
    pub blocks:      Vec<MetricBlock>,
    /// Declared field type → name of the field holding it in its parent block.
    pub type_tags:   BTreeMap<String, String>,
    /// Declared field type → Go accessor on the aggregate struct.
    pub field_names: BTreeMap<String, String>,
    /// Type name of the aggregate block, if one was seen.
    pub aggregate:   Option<String>,
}

impl ParsedMetrics {
    /// Blocks that become Prometheus gauges, i.e. everything but the aggregate.
    pub fn metric_blocks(&self) -> impl Iterator<Item = &MetricBlock> {
        self.blocks.iter().filter(|block| !block.is_aggregate)
    }

    /// Label used as the metric name: the header-time tag if there was one,
    /// otherwise whatever the tag table holds after the whole input was read.
    pub fn resolve_tag<'a>(&'a self, block: &'a MetricBlock) -> Option<&'a str> {
        block
            .tag
            .as_deref()
            .or_else(|| self.type_tags.get(&block.type_name).map(String::as_str))
    }
}
