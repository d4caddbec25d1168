pub mod errors;
pub mod db;
pub mod support_query;
