pub mod competitions;
pub mod competitors;
pub mod cube_types;
pub mod invoices;
pub mod records;
pub mod results;
pub mod rounds;
pub mod scrambles;
pub mod users;
