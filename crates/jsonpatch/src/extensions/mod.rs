//! The six RFC 6902 operations.

mod add;
mod copy;
mod move_op;
mod remove;
mod replace;
mod test_op;

pub use add::AddExtension;
pub use copy::CopyExtension;
pub use move_op::MoveExtension;
pub use remove::RemoveExtension;
pub use replace::ReplaceExtension;
pub use test_op::TestExtension;
