use retrace_api::{ReplayOp, ReplaySink};

/// Retains every emitted operation in program order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    ops: Vec<ReplayOp>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[ReplayOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<ReplayOp> {
        self.ops
    }
}

impl ReplaySink for RecordingSink {
    fn emit(&mut self, op: ReplayOp) {
        self.ops.push(op);
    }
}

/// Discards every emitted operation.
#[derive(Debug, Default)]
pub struct NullSink;

impl ReplaySink for NullSink {
    fn emit(&mut self, _op: ReplayOp) {}
}
