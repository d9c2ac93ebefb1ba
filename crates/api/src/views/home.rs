//! Landing page.

use crate::session::{Flash, FlashLevel, FlashModule};

use super::auth::login_form;
use super::{escape, layout};

/// One "add a record" form on the landing page.
struct AddForm {
    module: FlashModule,
    heading: &'static str,
    /// `(field name, label, input type)`.
    fields: &'static [(&'static str, &'static str, &'static str)],
}

const ADD_FORMS: [AddForm; 4] = [
    AddForm {
        module: FlashModule::Livestock,
        heading: "Ajouter un animal",
        fields: &[("type", "Type", "text"), ("name", "Nom", "text")],
    },
    AddForm {
        module: FlashModule::Crops,
        heading: "Ajouter une culture",
        fields: &[("name", "Nom", "text"), ("type", "Type", "text")],
    },
    AddForm {
        module: FlashModule::Equipment,
        heading: "Ajouter un équipement",
        fields: &[("name", "Nom", "text"), ("type", "Type", "text")],
    },
    AddForm {
        module: FlashModule::Finance,
        heading: "Ajouter une opération financière",
        fields: &[("type", "Type", "text"), ("amount", "Montant", "number")],
    },
];

const NAV: &str = "<nav>\n<ul>\n\
<li><a href=\"/crops\">Voir les cultures</a></li>\n\
<li><a href=\"/livestock\">Voir les animaux</a></li>\n\
<li><a href=\"/equipment\">Voir le matériel</a></li>\n\
<li><a href=\"/weather\">Voir la météo</a></li>\n\
<li><a href=\"/finance\">Voir la finance</a></li>\n";

fn render_form(form: &AddForm, flash: Option<&Flash>) -> String {
    // Only the form the flash was raised for shows it.
    let flash = flash.filter(|f| f.module == form.module);

    let banner = match flash {
        Some(f) => {
            let (class, icon) = match f.level {
                FlashLevel::Success => ("flash-success", "&#10003;"),
                FlashLevel::Error => ("flash-error", "&#9888;"),
            };
            format!("<div class=\"{class}\">{icon} {}</div>\n", escape(&f.message))
        }
        None => String::new(),
    };

    let inputs: String = form
        .fields
        .iter()
        .map(|(name, label, kind)| {
            let value = flash.map(|f| f.value(name)).unwrap_or_default();
            let step = if *kind == "number" { " step=\"0.01\"" } else { "" };
            format!(
                "<label>{label}: <input name=\"{name}\" type=\"{kind}\"{step} required value=\"{}\" /></label>\n",
                escape(value)
            )
        })
        .collect();

    format!(
        "<section>\n<h2>{}</h2>\n{banner}<form method=\"POST\" action=\"/{}\">\n{inputs}\
         <button type=\"submit\">Ajouter</button>\n</form>\n</section>\n",
        form.heading,
        form.module.as_str(),
    )
}

/// Render `/`. `username` is `None` for anonymous visitors, who get the
/// login form instead of the add-forms.
pub fn home_page(username: Option<&str>, flash: Option<&Flash>) -> String {
    let mut body = String::from("<h1>Bienvenue sur l'application agricole</h1>\n");
    body.push_str(NAV);
    if username.is_some() {
        body.push_str("<li><a href=\"/logout\">Déconnexion</a></li>\n");
    }
    body.push_str("</ul>\n</nav>\n<main>\n");

    match username {
        Some(name) => {
            body.push_str(&format!(
                "<p>Connecté en tant que <b>{}</b></p>\n",
                escape(name)
            ));
            for form in &ADD_FORMS {
                body.push_str(&render_form(form, flash));
            }
        }
        None => body.push_str(&login_form(None)),
    }

    body.push_str("</main>");
    layout("Application Agricole", &body)
}
