use serde_json::json;

use crate::error::CoreError;
use crate::model::{ProfileForm, User};
use crate::storage::RoundStore;

#[must_use]
pub fn load_profile(store: &dyn RoundStore) -> Option<User> {
    store.fetch_primary_user().unwrap_or_else(|e| {
        eprintln!(
            "{}",
            json!({"profile":"fetch_primary_user","error": e.to_string()})
        );
        None
    })
}

/// Validates the form and updates the stored user in place, or creates it on first save.
///
/// # Errors
///
/// Will return `Err` if a name is blank or the email is malformed
pub fn save_profile(store: &dyn RoundStore, form: &ProfileForm) -> Result<User, CoreError> {
    let profile = form.validate()?;
    let user = match load_profile(store) {
        Some(mut existing) => {
            existing.apply(profile);
            existing
        }
        None => User::new(profile),
    };
    if let Err(e) = store.save_primary_user(&user) {
        eprintln!(
            "{}",
            json!({"profile":"save_primary_user","user": user.id.to_string(),"error": e.to_string()})
        );
    }
    Ok(user)
}
