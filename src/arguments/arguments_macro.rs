//! The `arguments!` macro for building [`Arguments`](crate::Arguments).

/// Builds an [`Arguments`](crate::Arguments) value.
///
/// Positional arguments come first, separated by commas. Named arguments
/// follow a semicolon as `name = value` pairs.
///
/// # Examples
///
/// ```
/// use curried::{arguments, Arguments};
///
/// let empty: Arguments<i32> = arguments![];
/// assert!(empty.is_empty());
///
/// let positional = arguments![1, 2];
/// assert_eq!(positional.positional(), &[1, 2]);
///
/// let mixed = arguments![1; b = 10];
/// assert_eq!(mixed.positional(), &[1]);
/// assert_eq!(mixed.named("b"), Some(&10));
///
/// let named_only = arguments![; b = 10, c = 20];
/// assert_eq!(named_only.positional_len(), 0);
/// assert_eq!(named_only.named_len(), 2);
/// ```
#[macro_export]
macro_rules! arguments {
    () => {
        $crate::Arguments::new()
    };
    ($($value:expr),* ; $($name:ident = $named:expr),* $(,)?) => {
        $crate::Arguments::new()
            $(.with_positional($value))*
            $(.with_named(::std::stringify!($name), $named))*
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Arguments::new()
            $(.with_positional($value))+
    };
}
