pub(crate) mod convert;
mod policy;

pub use convert::*;
pub use policy::*;
