//! Packet trace rendering for the AVF input node.

use crate::registry::{InterfaceNames, NodeGraph};
use crate::sink::{Render, TextSink};
use avf_types::DescriptorTrace;
use tracing::debug;

/// Shown when a collaborator cannot resolve a name.
const UNRESOLVED: &str = "<unknown>";

/// One traced packet with its interface and next-node names resolved.
#[derive(Debug, Clone, Copy)]
pub struct InputTrace<'a> {
    trace: &'a DescriptorTrace,
    if_name: &'a str,
    next_node: &'a str,
}

impl<'a> InputTrace<'a> {
    pub fn new(trace: &'a DescriptorTrace, if_name: &'a str, next_node: &'a str) -> Self {
        InputTrace {
            trace,
            if_name,
            next_node,
        }
    }

    /// Resolves the header names through the interface registry and the
    /// processing graph of the input node `node_index`.
    pub fn resolve<I, G>(
        trace: &'a DescriptorTrace,
        node_index: u32,
        interfaces: &'a I,
        graph: &'a G,
    ) -> Self
    where
        I: InterfaceNames + ?Sized,
        G: NodeGraph + ?Sized,
    {
        let if_name = interfaces.hw_if_name(trace.hw_if_index).unwrap_or_else(|| {
            debug!(hw_if_index = trace.hw_if_index, "trace for unknown interface");
            UNRESOLVED
        });
        let next_node = graph
            .next_node_name(node_index, trace.next_index)
            .unwrap_or_else(|| {
                debug!(node_index, next_index = trace.next_index, "unknown next node");
                UNRESOLVED
            });
        Self::new(trace, if_name, next_node)
    }
}

impl Render for InputTrace<'_> {
    fn render(&self, out: &mut TextSink) {
        let indent = out.indent();
        let t = self.trace;

        write!(
            out,
            "avf: {} ({}) qid {} next-node {} flow-id {}",
            self.if_name, t.hw_if_index, t.qid, self.next_node, t.flow_id
        );

        let chain = t.chain();
        for (i, qw1) in chain.iter().enumerate() {
            out.newline(indent + 2);
            write!(
                out,
                "desc {}: status 0x{:x} error 0x{:x} ptype 0x{:x} len {}",
                i,
                qw1.status(),
                qw1.error(),
                qw1.ptype(),
                qw1.pkt_len()
            );
        }

        if runs_past_bound(t) {
            debug!(
                hw_if_index = t.hw_if_index,
                qid = t.qid,
                words = t.qw1s.len(),
                "descriptor chain has no EOP within bound"
            );
        }
    }
}

/// True when the chain fills every slot without reaching an EOP.
fn runs_past_bound(trace: &DescriptorTrace) -> bool {
    !trace.is_complete() && trace.chain().len() == DescriptorTrace::MAX_DESC_IN_CHAIN
}
