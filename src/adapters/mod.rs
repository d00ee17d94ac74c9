/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the file system, the
/// console, the network and the report serializers.
pub mod outbound;
