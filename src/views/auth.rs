//! Login and registration pages

use axum::response::Html;

use super::{error_banner, escape, layout};
use crate::domain::Role;

pub fn login_page(email: &str, error: Option<&str>) -> Html<String> {
    layout(
        "Sign In",
        None,
        &format!(
            r#"        <div class="narrow">
            <div class="center">
                <h1>Welcome Back</h1>
                <p class="subtitle">Sign in to your ArtUne account</p>
            </div>
            <div class="card">
                <h2>Sign In</h2>
                <p class="description">Enter your credentials to continue</p>
                <form method="post" action="/login">
                    <label for="email">Email</label>
                    <input id="email" name="email" type="email" placeholder="your@email.com" value="{email}" required>
                    <label for="password">Password</label>
                    <input id="password" name="password" type="password" placeholder="••••••••" required>
                    {error}
                    <div class="actions">
                        <button class="button" type="submit">Sign In</button>
                    </div>
                </form>
                <p class="center muted" style="margin-top: 16px">
                    Don't have an account? <a href="/register">Sign up</a>
                </p>
            </div>
        </div>"#,
            email = escape(email),
            error = error_banner(error),
        ),
    )
}

/// First register step: pick a role
pub fn register_role_page(error: Option<&str>) -> Html<String> {
    layout(
        "Join ArtUne",
        None,
        &format!(
            r#"        <div class="center">
            <h1>Join ArtUne</h1>
            <p class="subtitle">Choose how you want to get started</p>
            {error}
        </div>
        <div class="grid">
            <a class="card" href="/register?role=artist">
                <h2>I'm an Artist</h2>
                <p class="description">Showcase your talent and get hired for gigs</p>
                <ul class="muted">
                    <li>✓ Create a stunning profile</li>
                    <li>✓ Set your own rates</li>
                    <li>✓ Connect with clients</li>
                </ul>
            </a>
            <a class="card" href="/register?role=client">
                <h2>I'm a Client</h2>
                <p class="description">Find and hire talented artists for your events</p>
                <ul class="muted">
                    <li>✓ Browse verified artists</li>
                    <li>✓ Secure payments</li>
                    <li>✓ Easy booking process</li>
                </ul>
            </a>
        </div>
        <p class="center muted" style="margin-top: 32px">
            Already have an account? <a href="/login">Sign in</a>
        </p>"#,
            error = error_banner(error),
        ),
    )
}

/// Second register step: account details for the chosen role
pub fn register_details_page(role: Role, email: &str, error: Option<&str>) -> Html<String> {
    let role_label = match role {
        Role::Artist => "Artist",
        _ => "Client",
    };

    layout(
        "Create Account",
        None,
        &format!(
            r#"        <div class="card narrow">
            <h2>Create your {role_label} Account</h2>
            <p class="description">Enter your details to get started</p>
            <form method="post" action="/register">
                <input type="hidden" name="role" value="{role}">
                <label for="email">Email</label>
                <input id="email" name="email" type="email" placeholder="your@email.com" value="{email}" required>
                <label for="password">Password</label>
                <input id="password" name="password" type="password" placeholder="••••••••" required>
                <label for="confirm_password">Confirm Password</label>
                <input id="confirm_password" name="confirm_password" type="password" placeholder="••••••••" required>
                {error}
                <div class="actions">
                    <a class="button outline" href="/register">Back</a>
                    <button class="button" type="submit">Create Account</button>
                </div>
            </form>
        </div>"#,
            role_label = role_label,
            role = role.as_str(),
            email = escape(email),
            error = error_banner(error),
        ),
    )
}

/// Shown when the auth service wants the address confirmed first
pub fn check_email_page(email: &str) -> Html<String> {
    layout(
        "Check Your Email",
        None,
        &format!(
            r#"        <div class="card narrow center">
            <h2>Check your email</h2>
            <p class="description">We sent a confirmation link to <strong>{email}</strong>.</p>
            <p class="muted">Confirm your address, then sign in to continue.</p>
            <div class="actions">
                <a class="button" href="/login">Go to Sign In</a>
            </div>
        </div>"#,
            email = escape(email),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_page_carries_the_role() {
        let Html(page) = register_details_page(Role::Artist, "jane@example.com", None);
        assert!(page.contains("Create your Artist Account"));
        assert!(page.contains(r#"name="role" value="artist""#));
        assert!(page.contains(r#"value="jane@example.com""#));
    }

    #[test]
    fn login_error_is_escaped() {
        let Html(page) = login_page("", Some("<b>nope</b>"));
        assert!(page.contains("&lt;b&gt;nope&lt;/b&gt;"));
    }
}
