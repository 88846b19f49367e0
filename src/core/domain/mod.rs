pub(crate) mod domain_api;
pub(crate) mod error;
pub(crate) mod model;
pub(crate) mod schema;
pub(crate) mod value_object;
