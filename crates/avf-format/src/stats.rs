//! Statistics rendering.

use crate::sink::{Render, TextSink};
use avf_types::{EthStats, StatField, ETH_STATS_FIELDS};

/// Width the statistic name is padded to.
const NAME_WIDTH: usize = 20;

/// Renders `current - baseline` for every field whose delta is non-zero.
///
/// Output is a `stats:` header followed by one `name = delta` line per
/// changed field, indented one step under the header. Nothing at all is
/// rendered if no field changed.
pub struct StatDeltas<'a, S = EthStats> {
    fields: &'a [StatField<S>],
    current: &'a S,
    baseline: &'a S,
}

impl<'a, S> StatDeltas<'a, S> {
    pub fn new(fields: &'a [StatField<S>], current: &'a S, baseline: &'a S) -> Self {
        StatDeltas {
            fields,
            current,
            baseline,
        }
    }

    /// Returns the non-zero deltas in field order.
    pub fn deltas(&self) -> Vec<(&'static str, i128)> {
        self.fields
            .iter()
            .map(|field| {
                let current = i128::from((field.get)(self.current));
                let baseline = i128::from((field.get)(self.baseline));
                (field.name, current - baseline)
            })
            .filter(|(_, delta)| *delta != 0)
            .collect()
    }
}

impl<'a> StatDeltas<'a, EthStats> {
    /// Deltas over every virtchnl ethernet statistic.
    pub fn eth(current: &'a EthStats, baseline: &'a EthStats) -> Self {
        Self::new(ETH_STATS_FIELDS, current, baseline)
    }
}

impl<S> Render for StatDeltas<'_, S> {
    fn render(&self, out: &mut TextSink) {
        let deltas = self.deltas();
        if deltas.is_empty() {
            return;
        }

        let indent = out.indent();
        out.push_str("stats:");
        for (name, delta) in deltas {
            out.newline(indent + 2);
            write!(out, "{:<width$} = {}", name, delta, width = NAME_WIDTH);
        }
    }
}

/// Renders every field of one snapshot, zero or not, one per line.
pub struct StatValues<'a, S = EthStats> {
    fields: &'a [StatField<S>],
    stats: &'a S,
}

impl<'a, S> StatValues<'a, S> {
    pub fn new(fields: &'a [StatField<S>], stats: &'a S) -> Self {
        StatValues { fields, stats }
    }
}

impl<'a> StatValues<'a, EthStats> {
    pub fn eth(stats: &'a EthStats) -> Self {
        Self::new(ETH_STATS_FIELDS, stats)
    }
}

impl<S> Render for StatValues<'_, S> {
    fn render(&self, out: &mut TextSink) {
        let indent = out.indent();
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                out.newline(indent);
            }
            write!(
                out,
                "{:<width$} = {}",
                field.name,
                (field.get)(self.stats),
                width = NAME_WIDTH
            );
        }
    }
}
