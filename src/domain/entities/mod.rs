pub mod blog_post;
pub mod contact;
pub mod project;
