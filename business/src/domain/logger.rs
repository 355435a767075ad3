/// Logging port used by the cart and catalog use cases.
///
/// Implementations must never panic: cart mutations log after the state
/// change has been committed.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
