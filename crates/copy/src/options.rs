/// What to do when a source field can be neither assigned nor converted into
/// its destination field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Leave the destination field unmodified and log.
    #[default]
    Skip,
    /// Fail the whole copy.
    Error,
}

/// Matching and skip behavior for one copy invocation.
#[derive(Clone, Copy, Debug)]
pub struct CopyOptions {
    /// Do not copy source fields whose value is the zero value of their type.
    pub skip_empty: bool,
    /// Match field names case-insensitively.
    pub ignore_case: bool,
    pub on_mismatch: MismatchPolicy,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            skip_empty: true,
            ignore_case: true,
            on_mismatch: MismatchPolicy::Skip,
        }
    }
}
