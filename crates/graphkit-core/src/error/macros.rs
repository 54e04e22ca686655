//! Error macros for graphkit

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Return `NodeOutOfRange` unless `$node < $count`
#[macro_export]
macro_rules! ensure_node {
    ($node:expr, $count:expr) => {
        if $node >= $count {
            return Err($crate::error::GraphError::out_of_range($node, $count));
        }
    };
}
