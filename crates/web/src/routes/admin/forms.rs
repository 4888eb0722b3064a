//! Admin "add store" and "add user" tabs.
//!
//! Invalid input re-renders the form with a message under each failed
//! field. Valid input goes to the mock backend; on success the browser is
//! redirected to an empty form, on failure the form is shown again with
//! the entered values and an error notification.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use store_rating_core::{
    Email, FieldErrors, NewStoreForm, NewUserForm, Role,
    validation::{fields, validate_new_store, validate_new_user},
};

use crate::{
    error::AppError,
    filters,
    models::{NewStore, NewUser, Toast, session},
    state::AppState,
};

use super::super::types::{StatsView, TabLink};
use super::{AdminTab, DASHBOARD_PATH, admin_tabs, page_frame};

// =============================================================================
// Form View Types
// =============================================================================

/// How a form field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    TextArea,
}

impl FieldKind {
    /// Value of the `type` attribute; text areas have none.
    #[must_use]
    pub const fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::TextArea => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    #[must_use]
    pub const fn is_textarea(&self) -> bool {
        matches!(self, Self::TextArea)
    }
}

/// One labelled input with its current value and error.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub hint: &'static str,
    pub value: String,
    pub error: Option<String>,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            placeholder: "",
            hint: "",
            value: String::new(),
            error: None,
        }
    }

    const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    const fn hint(mut self, hint: &'static str) -> Self {
        self.hint = hint;
        self
    }

    fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    fn error_from(mut self, errors: &FieldErrors) -> Self {
        self.error = errors.get(self.name).map(str::to_string);
        self
    }
}

const ADDRESS_HINT: &str = "Maximum 400 characters";
const PASSWORD_HINT: &str =
    "8-16 characters, must include at least one uppercase letter and one special character";

/// Password inputs, never pre-filled.
fn credential_fields(errors: &FieldErrors) -> Vec<FormField> {
    vec![
        FormField::new(fields::PASSWORD, "Password", FieldKind::Password)
            .hint(PASSWORD_HINT)
            .error_from(errors),
        FormField::new(fields::CONFIRM_PASSWORD, "Confirm Password", FieldKind::Password)
            .error_from(errors),
    ]
}

/// An entry in the role picker.
#[derive(Debug, Clone)]
pub struct RoleOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

fn role_options(selected: Role) -> Vec<RoleOption> {
    Role::ALL
        .iter()
        .map(|role| RoleOption {
            value: role.as_str(),
            label: role.option_label(),
            selected: *role == selected,
        })
        .collect()
}

// =============================================================================
// Add Store
// =============================================================================

/// Admin dashboard with the add-store tab open.
#[derive(Template, WebTemplate)]
#[template(path = "admin/add_store.html")]
pub struct AddStoreTemplate {
    pub current_path: &'static str,
    pub toasts: Vec<Toast>,
    pub stats: StatsView,
    pub tabs: Vec<TabLink>,
    pub details: Vec<FormField>,
    pub credentials: Vec<FormField>,
}

impl AddStoreTemplate {
    /// The form showing `form`'s values (except passwords) and `errors`.
    #[must_use]
    pub fn new(toasts: Vec<Toast>, stats: StatsView, form: &NewStoreForm, errors: &FieldErrors) -> Self {
        let details = vec![
            FormField::new(fields::NAME, "Store Name", FieldKind::Text)
                .placeholder("Store name")
                .value(&form.name)
                .error_from(errors),
            FormField::new(fields::EMAIL, "Email", FieldKind::Email)
                .placeholder("store@example.com")
                .value(&form.email)
                .error_from(errors),
            FormField::new(fields::ADDRESS, "Address", FieldKind::TextArea)
                .placeholder("Store address")
                .hint(ADDRESS_HINT)
                .value(&form.address)
                .error_from(errors),
        ];

        Self {
            current_path: DASHBOARD_PATH,
            toasts,
            stats,
            tabs: admin_tabs(AdminTab::AddStore),
            details,
            credentials: credential_fields(errors),
        }
    }

    /// An empty form.
    #[must_use]
    pub fn empty(toasts: Vec<Toast>, stats: StatsView) -> Self {
        Self::new(toasts, stats, &NewStoreForm::default(), &FieldErrors::new())
    }
}

/// Create a store.
///
/// POST /admin/stores
#[instrument(skip(state, session, form), fields(store_name = %form.name))]
pub async fn create_store(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NewStoreForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = validate_new_store(&form) {
        tracing::debug!(failed_fields = errors.len(), "Add store form rejected");
        let (toasts, stats) = page_frame(&state, &session).await;
        let page = AddStoreTemplate::new(toasts, stats, &form, &errors);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    let store = NewStore {
        name: form.name.clone(),
        email: Email::parse(&form.email).map_err(|e| AppError::BadRequest(e.to_string()))?,
        address: form.address.clone(),
    };

    match state.api().create_store(&store).await {
        Ok(()) => {
            let toast = Toast::new(
                "Store created",
                format!("{} has been successfully created.", store.name),
            );
            session::push_toast(&session, toast).await?;
            Ok(Redirect::to(&AdminTab::AddStore.href()).into_response())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Store creation failed");
            let toast = Toast::destructive(
                "Error",
                "There was an error creating the store. Please try again.",
            );
            session::push_toast(&session, toast).await?;
            let (toasts, stats) = page_frame(&state, &session).await;
            Ok(AddStoreTemplate::new(toasts, stats, &form, &FieldErrors::new()).into_response())
        }
    }
}

// =============================================================================
// Add User
// =============================================================================

/// Admin dashboard with the add-user tab open.
#[derive(Template, WebTemplate)]
#[template(path = "admin/add_user.html")]
pub struct AddUserTemplate {
    pub current_path: &'static str,
    pub toasts: Vec<Toast>,
    pub stats: StatsView,
    pub tabs: Vec<TabLink>,
    pub details: Vec<FormField>,
    pub roles: Vec<RoleOption>,
    pub credentials: Vec<FormField>,
}

impl AddUserTemplate {
    /// The form showing `form`'s values (except passwords) and `errors`.
    #[must_use]
    pub fn new(toasts: Vec<Toast>, stats: StatsView, form: &NewUserForm, errors: &FieldErrors) -> Self {
        let details = vec![
            FormField::new(fields::NAME, "Full Name", FieldKind::Text)
                .placeholder("Full name")
                .value(&form.name)
                .error_from(errors),
            FormField::new(fields::EMAIL, "Email", FieldKind::Email)
                .placeholder("user@example.com")
                .value(&form.email)
                .error_from(errors),
            FormField::new(fields::ADDRESS, "Address", FieldKind::TextArea)
                .placeholder("User address")
                .hint(ADDRESS_HINT)
                .value(&form.address)
                .error_from(errors),
        ];

        Self {
            current_path: DASHBOARD_PATH,
            toasts,
            stats,
            tabs: admin_tabs(AdminTab::AddUser),
            details,
            roles: role_options(form.role),
            credentials: credential_fields(errors),
        }
    }

    /// An empty form with the normal user role selected.
    #[must_use]
    pub fn empty(toasts: Vec<Toast>, stats: StatsView) -> Self {
        Self::new(toasts, stats, &NewUserForm::default(), &FieldErrors::new())
    }
}

/// Create a user account.
///
/// POST /admin/users
#[instrument(skip(state, session, form), fields(user_name = %form.name, role = %form.role))]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NewUserForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = validate_new_user(&form) {
        tracing::debug!(failed_fields = errors.len(), "Add user form rejected");
        let (toasts, stats) = page_frame(&state, &session).await;
        let page = AddUserTemplate::new(toasts, stats, &form, &errors);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    let user = NewUser {
        name: form.name.clone(),
        email: Email::parse(&form.email).map_err(|e| AppError::BadRequest(e.to_string()))?,
        address: form.address.clone(),
        role: form.role,
    };

    match state.api().create_user(&user).await {
        Ok(()) => {
            let toast = Toast::new(
                "User created",
                format!(
                    "{} has been successfully created as a {}.",
                    user.name,
                    user.role.as_str()
                ),
            );
            session::push_toast(&session, toast).await?;
            Ok(Redirect::to(&AdminTab::AddUser.href()).into_response())
        }
        Err(e) => {
            tracing::warn!(error = %e, "User creation failed");
            let toast = Toast::destructive(
                "Error",
                "There was an error creating the user. Please try again.",
            );
            session::push_toast(&session, toast).await?;
            let (toasts, stats) = page_frame(&state, &session).await;
            Ok(AddUserTemplate::new(toasts, stats, &form, &FieldErrors::new()).into_response())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::fixtures;
    use store_rating_core::validation::{
        CONFIRM_PASSWORD_MESSAGE, EMAIL_MESSAGE, STORE_NAME_MESSAGE,
    };

    fn stats() -> StatsView {
        StatsView::from(fixtures::platform_stats())
    }

    #[test]
    fn test_store_form_echoes_values_but_not_passwords() {
        let form = NewStoreForm {
            name: "AB".to_string(),
            email: "not-an-email".to_string(),
            address: "1 Market St".to_string(),
            password: "Secret#123".to_string(),
            confirm_password: "Secret#124".to_string(),
        };
        let errors = validate_new_store(&form).unwrap_err();
        let page = AddStoreTemplate::new(vec![], stats(), &form, &errors);

        assert_eq!(page.details[0].value, "AB");
        assert_eq!(page.details[0].error.as_deref(), Some(STORE_NAME_MESSAGE));
        assert_eq!(page.details[1].error.as_deref(), Some(EMAIL_MESSAGE));
        assert_eq!(page.details[2].error, None);
        assert!(page.credentials.iter().all(|f| f.value.is_empty()));
        assert_eq!(page.credentials[0].error, None);
        assert_eq!(
            page.credentials[1].error.as_deref(),
            Some(CONFIRM_PASSWORD_MESSAGE)
        );

        let html = page.render().unwrap();
        assert!(html.contains(STORE_NAME_MESSAGE));
        assert!(!html.contains("Secret#123"));
    }

    #[test]
    fn test_user_form_keeps_selected_role() {
        let form = NewUserForm {
            role: Role::Admin,
            ..NewUserForm::default()
        };
        let page = AddUserTemplate::new(vec![], stats(), &form, &FieldErrors::new());
        let selected: Vec<&str> = page
            .roles
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.value)
            .collect();
        assert_eq!(selected, vec!["admin"]);

        let empty = AddUserTemplate::empty(vec![], stats());
        assert!(empty.roles[0].selected);
        assert_eq!(empty.roles[0].label, "Normal User");
    }

    #[test]
    fn test_field_kind() {
        assert_eq!(FieldKind::Email.input_type(), "email");
        assert!(FieldKind::TextArea.is_textarea());
        assert!(!FieldKind::Password.is_textarea());
    }
}
