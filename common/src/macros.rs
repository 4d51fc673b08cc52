/// Emits an `INFO` event that the terminal formatter renders as a success line.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "carebook::success", $($arg)*)
    };
}
