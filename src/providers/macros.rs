//! Operation Definition Macros
//!
//! Cuts the boilerplate of declaring operation metadata and pulling typed
//! arguments out of a JSON argument object.

/// Define operation metadata using a declarative syntax
///
/// # Example
/// ```
/// let metadata = agenthub::operation_metadata! {
///     name: "resolve_issue",
///     description: "Resolve a maintenance issue",
///     parameters: [
///         {
///             name: "issue",
///             type: "string",
///             description: "Short description of the issue",
///             required: true
///         }
///     ]
/// };
/// assert_eq!(metadata.parameters.len(), 1);
/// ```
#[macro_export]
macro_rules! operation_metadata {
    (
        name: $name:expr,
        description: $description:expr,
        parameters: [
            $(
                {
                    name: $param_name:expr,
                    type: $param_type:expr,
                    description: $param_desc:expr,
                    required: $param_required:expr
                }
            ),* $(,)?
        ]
    ) => {
        $crate::providers::OperationMetadata {
            name: $name.to_string(),
            description: $description.to_string(),
            parameters: vec![
                $(
                    $crate::providers::OperationParameter {
                        name: $param_name.to_string(),
                        param_type: $param_type.to_string(),
                        description: $param_desc.to_string(),
                        required: $param_required,
                    }
                ),*
            ],
        }
    };
}

/// Extract a required string argument or bail with `InvalidArguments`
#[macro_export]
macro_rules! required_string {
    ($args:expr, $operation:expr, $param:expr) => {
        $args
            .get($param)
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                $crate::error::DispatchError::InvalidArguments {
                    operation: $operation.to_string(),
                    reason: format!("'{}' parameter is required and must be a string", $param),
                }
            })?
    };
}

/// Extract a required object argument or bail with `InvalidArguments`
#[macro_export]
macro_rules! required_object {
    ($args:expr, $operation:expr, $param:expr) => {
        $args
            .get($param)
            .and_then(|value| value.as_object())
            .cloned()
            .ok_or_else(|| {
                $crate::error::DispatchError::InvalidArguments {
                    operation: $operation.to_string(),
                    reason: format!("'{}' parameter is required and must be an object", $param),
                }
            })?
    };
}
