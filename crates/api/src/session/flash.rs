//! One-shot notifications carried across a redirect.

use std::collections::BTreeMap;

/// Page section a flash belongs to; the home page shows it next to the
/// matching form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashModule {
    Crops,
    Livestock,
    Equipment,
    Finance,
}

impl FlashModule {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Crops => "crops",
            Self::Livestock => "livestock",
            Self::Equipment => "equipment",
            Self::Finance => "finance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

/// A message for the next render, optionally echoing the submitted values
/// so the form can be pre-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub module: FlashModule,
    pub level: FlashLevel,
    pub message: String,
    pub values: BTreeMap<String, String>,
}

impl Flash {
    pub fn success(module: FlashModule, message: impl Into<String>) -> Self {
        Self {
            module,
            level: FlashLevel::Success,
            message: message.into(),
            values: BTreeMap::new(),
        }
    }

    /// An error flash echoing `values` back into the form.
    pub fn error<'a, I>(module: FlashModule, message: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        Self {
            module,
            level: FlashLevel::Error,
            message: message.into(),
            values: values
                .into_iter()
                .map(|(field, value)| (field.to_string(), value.unwrap_or_default().to_string()))
                .collect(),
        }
    }

    /// Echoed value for `field`, or `""`.
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_flash_echoes_missing_values_as_empty() {
        let flash = Flash::error(
            FlashModule::Finance,
            "Veuillez remplir tous les champs correctement.",
            [("type", Some("income")), ("amount", None)],
        );
        assert_eq!(flash.level, FlashLevel::Error);
        assert_eq!(flash.value("type"), "income");
        assert_eq!(flash.value("amount"), "");
        assert_eq!(flash.value("unknown"), "");
    }

    #[test]
    fn success_flash_has_no_values() {
        let flash = Flash::success(FlashModule::Crops, "Culture ajoutée avec succès !");
        assert_eq!(flash.level, FlashLevel::Success);
        assert!(flash.values.is_empty());
        assert_eq!(flash.module.as_str(), "crops");
    }
}
