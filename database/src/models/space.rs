/// The well-known default space, seeded by migration and always present.
pub const DEFAULT_SPACE: &str = "default";
