//! Record list pages.

use agri_db::models::animal::Animal;
use agri_db::models::crop::Crop;
use agri_db::models::equipment::Equipment;

use super::{escape, layout, BACK_LINK};

fn list_page(title: &str, items: Vec<String>, empty: &str) -> String {
    let items = if items.is_empty() {
        format!("<li>{empty}</li>")
    } else {
        items.concat()
    };
    let body = format!("<h2>{title}</h2>\n<ul>\n{items}\n</ul>\n{BACK_LINK}");
    layout(title, &body)
}

pub fn crops_page(crops: &[Crop]) -> String {
    let items = crops
        .iter()
        .map(|c| {
            // Kind, else variety, else nothing.
            let detail = [c.kind.as_str(), c.variety.as_str()]
                .into_iter()
                .find(|s| !s.is_empty())
                .unwrap_or_default();
            format!("<li>{} ({})</li>\n", escape(&c.name), escape(detail))
        })
        .collect();
    list_page("Liste des cultures", items, "Aucune culture enregistrée.")
}

pub fn livestock_page(animals: &[Animal]) -> String {
    let items = animals
        .iter()
        .map(|a| format!("<li>{} : {}</li>\n", escape(&a.kind), escape(&a.name)))
        .collect();
    list_page("Liste des animaux", items, "Aucun animal enregistré.")
}

pub fn equipment_page(equipment: &[Equipment]) -> String {
    let items = equipment
        .iter()
        .map(|e| format!("<li>{} ({})</li>\n", escape(&e.name), escape(&e.kind)))
        .collect();
    list_page("Liste du matériel", items, "Aucun matériel enregistré.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_core::types::RecordId;

    #[test]
    fn empty_lists_show_placeholder() {
        assert!(crops_page(&[]).contains("<li>Aucune culture enregistrée.</li>"));
        assert!(livestock_page(&[]).contains("<li>Aucun animal enregistré.</li>"));
        assert!(equipment_page(&[]).contains("<li>Aucun matériel enregistré.</li>"));
    }

    #[test]
    fn crop_falls_back_to_variety() {
        let crop = Crop {
            id: RecordId::now_v7(),
            name: "Blé".into(),
            kind: String::new(),
            variety: "Hiver".into(),
            area: 0.0,
            yield_amount: 0.0,
        };
        assert!(crops_page(&[crop]).contains("<li>Blé (Hiver)</li>"));
    }

    #[test]
    fn animal_names_are_escaped() {
        let animal = Animal {
            id: RecordId::now_v7(),
            kind: "Vache".into(),
            name: "<b>Marguerite</b>".into(),
            breed: None,
            age: None,
            health_status: None,
            head_count: 1,
        };
        let page = livestock_page(&[animal]);
        assert!(page.contains("<li>Vache : &lt;b&gt;Marguerite&lt;/b&gt;</li>"));
    }
}
