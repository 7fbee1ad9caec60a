//! Error macros for digraph

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::DigraphError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a vertex outside `1..=$count`
#[macro_export]
macro_rules! ensure_vertex {
    ($vertex:expr, $count:expr) => {
        if $vertex < 1 || $vertex > $count {
            return Err($crate::error::DigraphError::vertex_out_of_range(
                $vertex, $count,
            ));
        }
    };
}
