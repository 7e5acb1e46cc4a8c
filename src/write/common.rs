/// Arguments common to all write operations (Put, Update, Delete).
///
/// None of the writes carry a condition expression or ask for return values:
/// the store applies them unconditionally and re-reads when it needs the item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteArgs {
    /// The name of the table to write to.
    pub table_name: String,
}

/// apply common write settings to a builder
#[macro_export]
macro_rules! apply_write_args {
    ($builder:expr, $write_args:expr) => {
        $builder.table_name($write_args.table_name)
    };
}
