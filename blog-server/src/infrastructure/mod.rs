pub(crate) mod database;
pub(crate) mod logging;
pub(crate) mod schema;
pub(crate) mod settings;
