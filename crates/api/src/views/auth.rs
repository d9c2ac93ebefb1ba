//! Login and registration forms.

use super::{escape, layout, BACK_LINK};

/// Message shown when the login form is rejected.
pub const LOGIN_FAILED_MESSAGE: &str = "Identifiant ou mot de passe invalide.";

fn error_block(error: Option<&str>) -> String {
    error
        .map(|msg| format!("<div class=\"flash-error\">&#9888; {}</div>\n", escape(msg)))
        .unwrap_or_default()
}

/// The login form, as embedded in the logged-out landing page.
pub fn login_form(error: Option<&str>) -> String {
    format!(
        "<section>\n<h2>Connexion</h2>\n\
         <form method=\"POST\" action=\"/login\">\n\
         <label for=\"email\">Email</label>\n\
         <input id=\"email\" name=\"email\" type=\"email\" required autocomplete=\"email\" />\n\
         <label for=\"password\">Mot de passe</label>\n\
         <input id=\"password\" name=\"password\" type=\"password\" required autocomplete=\"current-password\" />\n\
         <button type=\"submit\">Se connecter</button>\n\
         </form>\n{}\
         <p>Pas encore de compte ? <a href=\"/register\">Créer un compte</a></p>\n</section>",
        error_block(error)
    )
}

/// Standalone login page shown after a failed attempt.
pub fn login_page(error: Option<&str>) -> String {
    layout("Connexion", &format!("{}\n{BACK_LINK}", login_form(error)))
}

/// Registration page. `username` and `email` are echoed back after a
/// rejected submission; passwords never are.
pub fn register_page(error: Option<&str>, username: &str, email: &str) -> String {
    let body = format!(
        "<h2>Créer un compte</h2>\n\
         <form method=\"POST\" action=\"/users\">\n\
         <label for=\"username\">Nom d'utilisateur</label>\n\
         <input id=\"username\" name=\"username\" required autocomplete=\"username\" value=\"{}\" />\n\
         <label for=\"email\">Email</label>\n\
         <input id=\"email\" name=\"email\" type=\"email\" required autocomplete=\"email\" value=\"{}\" />\n\
         {}\
         <label for=\"password\">Mot de passe</label>\n\
         <input id=\"password\" name=\"password\" type=\"password\" required autocomplete=\"new-password\" />\n\
         <label for=\"confirm\">Confirmer le mot de passe</label>\n\
         <input id=\"confirm\" name=\"confirm\" type=\"password\" required autocomplete=\"new-password\" />\n\
         <button type=\"submit\">S'inscrire</button>\n\
         </form>\n{BACK_LINK}",
        escape(username),
        escape(email),
        error_block(error),
    );
    layout("Créer un compte", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_page_echoes_escaped_values() {
        let page = register_page(Some("Email déjà utilisé"), "Jean \"JJ\"", "jean@ferme.fr");
        assert!(page.contains("value=\"Jean &quot;JJ&quot;\""));
        assert!(page.contains("value=\"jean@ferme.fr\""));
        assert!(page.contains("Email déjà utilisé"));
    }

    #[test]
    fn blank_register_page_has_no_error() {
        let page = register_page(None, "", "");
        assert!(!page.contains("class=\"flash-error\""));
        assert!(page.contains("action=\"/users\""));
    }

    #[test]
    fn login_page_shows_failure_message() {
        let page = login_page(Some(LOGIN_FAILED_MESSAGE));
        assert!(page.contains(LOGIN_FAILED_MESSAGE));
        assert!(page.contains("href=\"/register\""));
    }
}
