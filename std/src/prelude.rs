pub use crate::customer;
pub use crate::driver;
pub use crate::{standard_catalog, standard_plan};
