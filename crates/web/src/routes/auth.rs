//! Authentication route handlers.
//!
//! Sign-up, login (with a preserved `next` destination), and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::Result;
use crate::filters;
use crate::forms::{FormErrors, LoginForm, SignUpForm};
use crate::middleware::{OptionalAuth, RequireAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Query parameters for the login page.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    /// Destination captured by the redirect-to-login.
    pub next: Option<String>,
}

/// Sign-up page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub current: Option<CurrentUser>,
    pub form: SignUpForm,
    pub errors: FormErrors,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub current: Option<CurrentUser>,
    pub form: LoginForm,
    pub errors: FormErrors,
}

/// Display the sign-up page.
pub async fn signup_page(OptionalAuth(current): OptionalAuth) -> SignupTemplate {
    SignupTemplate {
        current,
        form: SignUpForm::default(),
        errors: FormErrors::default(),
    }
}

/// Handle sign-up form submission.
///
/// A duplicate username is a validation outcome, not an error: it re-renders
/// the form with a field message. Success redirects to the login page.
pub async fn signup(
    State(state): State<AppState>,
    OptionalAuth(current): OptionalAuth,
    Form(form): Form<SignUpForm>,
) -> Result<Response> {
    let mut errors = form.field_errors();

    if errors.is_empty() {
        match AuthService::new(state.pool())
            .sign_up(&form.username, &form.password)
            .await
        {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "account created");
                return Ok(Redirect::to("/login").into_response());
            }
            Err(AuthError::UserAlreadyExists) => {
                errors.add("username", "That username is already taken.");
            }
            Err(AuthError::InvalidUsername(e)) => {
                errors.add("username", e.to_string());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(SignupTemplate {
        current,
        form,
        errors,
    }
    .into_response())
}

/// Display the login page.
pub async fn login_page(
    OptionalAuth(current): OptionalAuth,
    Query(query): Query<LoginQuery>,
) -> LoginTemplate {
    let form = LoginForm {
        next: query.next.unwrap_or_default(),
        ..LoginForm::default()
    };

    LoginTemplate {
        current,
        form,
        errors: FormErrors::default(),
    }
}

/// Handle login form submission.
///
/// Establishes the session on success and redirects to the preserved `next`
/// destination (when it is a local path) or the home page. Unknown username
/// and wrong password both re-render with the same message.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    OptionalAuth(current): OptionalAuth,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let mut errors = form.field_errors();

    if errors.is_empty() {
        match AuthService::new(state.pool())
            .login(&form.username, &form.password)
            .await
        {
            Ok(user) => {
                let current_user = CurrentUser {
                    id: user.id,
                    username: user.username.clone(),
                };
                // Fresh session ID on privilege change
                session.cycle_id().await?;
                set_current_user(&session, &current_user).await?;
                tracing::info!(user_id = %user.id, "logged in");
                return Ok(Redirect::to(safe_next(&form.next)).into_response());
            }
            Err(AuthError::InvalidCredentials) => {
                errors.add_form("Invalid username or password.");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(LoginTemplate {
        current,
        form,
        errors,
    }
    .into_response())
}

/// Handle logout.
///
/// Clears the current user and destroys the session.
pub async fn logout(RequireAuth(user): RequireAuth, session: Session) -> Result<Redirect> {
    clear_current_user(&session).await?;
    session.flush().await?;
    tracing::info!(user_id = %user.id, "logged out");

    Ok(Redirect::to("/"))
}

/// Only honour `next` when it is a local path; anything else goes home.
fn safe_next(next: &str) -> &str {
    if next.starts_with('/') && !next.starts_with("//") {
        next
    } else {
        "/"
    }
}

#[cfg(test)]
mod tests {
    use super::safe_next;

    #[test]
    fn test_safe_next_accepts_local_paths() {
        assert_eq!(safe_next("/new_store"), "/new_store");
        assert_eq!(safe_next("/store/3?edit=1"), "/store/3?edit=1");
    }

    #[test]
    fn test_safe_next_rejects_external_destinations() {
        assert_eq!(safe_next(""), "/");
        assert_eq!(safe_next("https://evil.example"), "/");
        assert_eq!(safe_next("//evil.example"), "/");
    }
}
