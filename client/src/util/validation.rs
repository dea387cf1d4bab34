//! Form validation helpers.
//!
//! Pages validate before submitting so obviously-bad input never reaches
//! the network layer; the backend remains the real validator.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Whether `raw` is plausibly an email address.
///
/// Deliberately loose: one `@` with non-empty local part and a dotted
/// domain. The backend owns real address verification.
#[must_use]
pub fn looks_like_email(raw: &str) -> bool {
    let raw = raw.trim();
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate a login/registration form, returning a user-facing message on
/// the first problem found.
///
/// # Errors
///
/// Returns the message to display when the email or password is unusable.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if !looks_like_email(email) {
        return Err("Enter a valid email address.".to_owned());
    }
    if password.trim().is_empty() {
        return Err("Enter your password.".to_owned());
    }
    Ok(())
}

/// Validate a job posting form.
///
/// # Errors
///
/// Returns the message to display when a required field is missing.
pub fn validate_job_draft(title: &str, location: &str, description: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Give the job a title.".to_owned());
    }
    if location.trim().is_empty() {
        return Err("Give the job a location.".to_owned());
    }
    if description.trim().is_empty() {
        return Err("Describe the job.".to_owned());
    }
    Ok(())
}

/// Validate a marketplace service form.
///
/// # Errors
///
/// Returns the message to display when a required field is missing or the
/// price is not a positive number.
pub fn validate_service_draft(title: &str, price: &str, description: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Give the service a title.".to_owned());
    }
    match price.trim().parse::<f64>() {
        Ok(value) if value > 0.0 => {}
        _ => return Err("Enter a positive price.".to_owned()),
    }
    if description.trim().is_empty() {
        return Err("Describe the service.".to_owned());
    }
    Ok(())
}
