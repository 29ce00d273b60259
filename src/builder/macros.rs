//! Macros for ergonomic state definitions.

/// Generate a State trait implementation for simple enums.
///
/// Variant names are used as state names unless a display name is given
/// with `=> "NAME"`.
///
/// # Example
///
/// ```
/// use signalbox::state_enum;
/// use signalbox::core::State;
///
/// state_enum! {
///     pub enum Phase {
///         Idle => "IDLE",
///         Busy,
///     }
/// }
///
/// assert_eq!(Phase::Idle.name(), "IDLE");
/// assert_eq!(Phase::Busy.name(), "Busy");
/// ```
#[macro_export]
macro_rules! state_enum {
    (@name $variant:ident $display:literal) => {
        $display
    };

    (@name $variant:ident) => {
        stringify!($variant)
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $display:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@name $variant $($display)?)),*
                }
            }
        }
    };
}
