use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub nombre: String,
    pub correo: String,
    pub asunto: String,
    pub mensaje: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Nombre,
    Correo,
    Mensaje,
}

impl ContactField {
    pub fn message(&self) -> &'static str {
        match self {
            ContactField::Nombre => "El nombre debe tener al menos 3 caracteres.",
            ContactField::Correo => "Ingresa un correo electrónico válido.",
            ContactField::Mensaje => "El mensaje debe tener al menos 10 caracteres.",
        }
    }
}

impl ContactForm {
    /// Fields that fail validation. `asunto` is optional and never flagged.
    pub fn invalid_fields(&self) -> Vec<ContactField> {
        let mut invalid = Vec::new();
        if self.nombre.trim().chars().count() < 3 {
            invalid.push(ContactField::Nombre);
        }
        if !EMAIL_RE.is_match(self.correo.trim()) {
            invalid.push(ContactField::Correo);
        }
        if self.mensaje.trim().chars().count() < 10 {
            invalid.push(ContactField::Mensaje);
        }
        invalid
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_fields().is_empty()
    }

    /// Subject line shown in the confirmation overlay.
    pub fn asunto_display(&self) -> &str {
        let asunto = self.asunto.trim();
        if asunto.is_empty() {
            "Sin asunto"
        } else {
            asunto
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            nombre: "Carlos Mora".to_string(),
            correo: "carlos@example.com".to_string(),
            asunto: String::new(),
            mensaje: "Quisiera más información sobre el Plan Total.".to_string(),
        }
    }

    #[test]
    fn a_valid_form_passes() {
        assert!(valid_form().is_valid());
    }

    #[test]
    fn short_name_is_flagged() {
        let mut form = valid_form();
        form.nombre = " Jo ".to_string();
        assert_eq!(form.invalid_fields(), vec![ContactField::Nombre]);
    }

    #[test]
    fn malformed_email_is_flagged() {
        for bad in ["carlos", "carlos@", "@example.com", "car los@example.com", "carlos@example"] {
            let mut form = valid_form();
            form.correo = bad.to_string();
            assert_eq!(form.invalid_fields(), vec![ContactField::Correo], "{bad:?}");
        }
    }

    #[test]
    fn short_message_is_flagged() {
        let mut form = valid_form();
        form.mensaje = "hola".to_string();
        assert_eq!(form.invalid_fields(), vec![ContactField::Mensaje]);
    }

    #[test]
    fn every_failing_field_is_reported() {
        let form = ContactForm::default();
        assert_eq!(
            form.invalid_fields(),
            vec![ContactField::Nombre, ContactField::Correo, ContactField::Mensaje]
        );
    }

    #[test]
    fn empty_subject_gets_a_placeholder() {
        let mut form = valid_form();
        assert_eq!(form.asunto_display(), "Sin asunto");
        form.asunto = "Consulta".to_string();
        assert_eq!(form.asunto_display(), "Consulta");
    }
}
