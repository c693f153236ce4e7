// Route handlers, one module per endpoint.

pub mod feedback;
pub mod meta;
pub mod predict;
