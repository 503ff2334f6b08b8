//! Macros for declaring a namespace's handlers in one place.

/// Declare handlers and derive their creators, types and reducer.
///
/// Each handler is written like a function. One parameter means it takes only
/// the state and gets a zero-argument creator; a second parameter makes it
/// take a payload of that type. Expands to
/// `Result<CombinedHandlers<_>, BuildError>`.
///
/// # Example
///
/// ```
/// use instant_reducer::combine_handlers;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Counter {
///     count: i64,
///     title: String,
/// }
///
/// #[derive(Serialize, Deserialize)]
/// struct Delta {
///     delta: i64,
/// }
///
/// let counter = combine_handlers! {
///     namespace: "TestCounter",
///     initial: || Counter { count: 0, title: "Counter".to_string() },
///     handlers: {
///         increment(state: Counter, payload: Delta) {
///             Counter { count: state.count + payload.delta, ..state }
///         },
///         reset(state: Counter) {
///             Counter { count: 0, ..state }
///         },
///     }
/// }
/// .unwrap();
///
/// assert!(counter.actions.bare("reset").is_some());
/// assert!(counter.actions.payload("increment").is_some());
/// ```
#[macro_export]
macro_rules! combine_handlers {
    (
        namespace: $namespace:expr,
        initial: $initial:expr,
        handlers: {
            $(
                $key:ident ( $($params:tt)* ) $body:block
            ),* $(,)?
        } $(,)?
    ) => {{
        let builder = $crate::HandlerMap::builder();
        $(
            let builder = $crate::combine_handlers!(@on builder, $key, ($($params)*), $body);
        )*
        builder
            .build()
            .map(|handlers| $crate::combine_handlers($namespace, $initial, handlers))
    }};

    (@on $builder:ident, $key:ident, ($state:ident : $state_ty:ty $(,)?), $body:block) => {
        $builder.on(stringify!($key), move |$state: $state_ty| -> $state_ty { $body })
    };

    (@on $builder:ident, $key:ident, ($state:ident : $state_ty:ty, $payload:ident : $payload_ty:ty $(,)?), $body:block) => {
        $builder.on_payload(
            stringify!($key),
            move |$state: $state_ty, $payload: $payload_ty| -> $state_ty { $body },
        )
    };
}
