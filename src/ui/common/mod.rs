//! Common reusable UI components
//!
//! Form inputs, banners and buttons shared by the auth flow and the checkout
//! wizard.

pub mod form;
pub mod message;
pub mod redirect;
pub mod spinner;
pub mod task;

pub use form::{CheckboxField, FieldMessage, FormField, PasswordField, SelectField, field_error};
pub use message::{ErrorBanner, SuccessMessage};
pub use redirect::use_navigate_callback;
pub use spinner::{InlineSpinner, SubmitButton};
pub use task::OwnedTask;
