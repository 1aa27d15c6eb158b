/// Errors raised when a drop cannot be applied to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// A source or destination index points outside the list.
    #[error("index {index} is out of bounds for a list of {len} items")]
    InvalidIndex { index: usize, len: usize },
}
