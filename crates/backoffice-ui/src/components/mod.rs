pub(crate) mod catalog;
pub(crate) mod dashboard;
pub(crate) mod entity_table;
pub(crate) mod login;
pub(crate) mod posts;
pub(crate) mod shell;
pub(crate) mod users;
