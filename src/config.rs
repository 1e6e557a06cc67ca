/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Entity name used by the binary when none is given on the command line.
pub const DEFAULT_ENTITY_NAME: &str = "Alice";

/// Identifier assigned to the showcase entity after construction.
pub const DEFAULT_ENTITY_ID: i32 = 1;

/// Text of the showcase description.
pub const DEFAULT_DESCRIPTION: &str = "A plain description with no link to its entity";

/// Coordinates of the showcase vector.
pub const DEFAULT_POINT: (i32, i32) = (3, 4);

/// Title and description of the showcase record.
pub const DEFAULT_RECORD: (&str, &str) = ("Title", "Body");
