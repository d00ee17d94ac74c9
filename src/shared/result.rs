/// Crate-wide Result alias.
///
/// Every fallible operation outside the pure scoring and sanitizing code returns this,
/// with typed failures carried as `AuditError` inside the `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
