pub mod blog_post;
pub mod option_fields;
pub mod project;
pub mod resource;
pub mod token;
pub mod user;
