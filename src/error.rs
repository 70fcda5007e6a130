use thiserror::Error;

/// Errors produced while assembling a [Store](crate::Store).
///
/// Dispatching never fails: an action which no reducer handles is
/// dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A [ReducerTable](crate::ReducerTable) holds at most one reducer
    /// per action kind.
    #[error("a reducer is already registered for action kind `{kind}`")]
    DuplicateReducer { kind: String },
}
