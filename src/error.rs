//! Error taxonomy for control-net operations.
//!
//! Every failure is a synchronous, local contract violation: the offending
//! call returns the error and leaves the net in its prior state. Nothing is
//! retried and nothing is partially applied.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NetError {
    #[error("control net requires at least one control point")]
    EmptyControlNet,
    #[error("control point index {index} out of range (net has {count} points)")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("grid index ({u}, {v}) out of range for orders ({order_u}, {order_v})")]
    GridIndexOutOfRange {
        u: usize,
        v: usize,
        order_u: usize,
        order_v: usize,
    },
    #[error("cannot lower the order of a degree-zero curve")]
    DegreeUnderflow,
}
