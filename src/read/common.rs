/// Arguments shared by read operations (GetItem, Scan).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ReadArgs {
    /// Whether to use a consistent read.
    ///
    /// `true` for strongly consistent reads, `false` or `None` for eventually consistent reads.
    /// Consistent reads consume more capacity units but guarantee you see the latest data.
    pub consistent_read: Option<bool>,
    /// The name of the table to read from.
    pub table_name: String,
}

/// apply common read settings to a builder
#[macro_export]
macro_rules! apply_read_args {
    ($builder:expr, $read_args:expr) => {
        $builder
            .set_consistent_read($read_args.consistent_read)
            .table_name($read_args.table_name)
    };
}
