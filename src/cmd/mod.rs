/// Field path query command.
pub mod get;
/// Node census command.
pub mod inspect;
/// Parse check command.
pub mod validate;
