pub mod api;
pub mod models;
pub mod validate;

pub use models::{
    ContactForm, ContactMessage, ContactSubmission, NewUser, Portfolio, PortfolioData, Project,
    SocialMedia, User,
};
pub use validate::{FieldError, ValidationError};
