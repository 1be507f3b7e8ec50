use log::error;
use std::fmt::Debug;

/// Log an error along with a context message and return the given value in
/// its place.
pub(crate) fn log_message_and_return<E: Debug, T>(
    message: &'static str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |error| {
        error!("{message}\n{error:#?}");
        value_to_return
    }
}
