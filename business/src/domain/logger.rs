/// Logging port used by every use case.
///
/// Messages are plain one-liners; adapters decide level filtering and sinks.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
