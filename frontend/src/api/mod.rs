pub mod attachments;
pub mod fonts;
pub mod google_fonts;
mod graphql;
