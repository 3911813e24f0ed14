pub(crate) mod logging;

pub(crate) mod mem_db;

pub(crate) mod validators;
