/// A type that can perform an action and expose a read-only attribute.
///
/// Implementors must provide both members.
pub trait Capability {
    /// Runs the action. Any effect is the implementor's own.
    fn perform(&self);

    /// Read-only string attribute.
    fn attribute(&self) -> &str;
}
