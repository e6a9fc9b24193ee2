use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid JSON: {0}")]
    Decode(String),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: u32,
    pub nombre: String,
    pub precio_mensual: f64,
    pub precio_anual: f64,
    pub beneficios: Vec<String>,
    #[serde(default)]
    pub destacado: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub titulo: String,
    pub categoria: String,
    pub resumen: String,
    pub contenido_completo: String,
    pub fecha: String,
    #[serde(default)]
    pub imagen_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AboutSection {
    pub id: String,
    pub descripcion_corta: String,
    #[serde(default)]
    pub foto_url: Option<String>,
}

pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, ContentError> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| ContentError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ContentError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ContentError::Decode(e.to_string()))
}

pub async fn fetch_plans() -> Result<Vec<Plan>, ContentError> {
    fetch_json(&config::data_url("planes")).await
}

pub async fn fetch_posts() -> Result<Vec<BlogPost>, ContentError> {
    fetch_json(&config::data_url("blog")).await
}

pub async fn fetch_about() -> Result<Vec<AboutSection>, ContentError> {
    fetch_json(&config::data_url("acerca-de")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_json_contract() {
        let raw = r#"{
            "id": 1,
            "nombre": "Plan Básico",
            "precio_mensual": 10.0,
            "precio_anual": 100.0,
            "beneficios": ["Asistencia en carretera 24/7", "Cambio de llanta"],
            "destacado": true
        }"#;
        let plan: Plan = serde_json::from_str(raw).expect("plan should deserialize");
        assert_eq!(plan.id, 1);
        assert_eq!(plan.nombre, "Plan Básico");
        assert_eq!(plan.precio_mensual, 10.0);
        assert_eq!(plan.beneficios.len(), 2);
        assert!(plan.destacado);
    }

    #[test]
    fn destacado_defaults_to_false_when_absent() {
        let raw = r#"{
            "id": 3,
            "nombre": "Plan Total",
            "precio_mensual": 25.0,
            "precio_anual": 250.0,
            "beneficios": []
        }"#;
        let plan: Plan = serde_json::from_str(raw).expect("plan should deserialize");
        assert!(!plan.destacado);
    }

    #[test]
    fn blog_post_image_is_optional() {
        let raw = r#"{
            "id": 2,
            "titulo": "Cinco revisiones básicas",
            "categoria": "Mantenimiento",
            "resumen": "Quince minutos de revisión.",
            "contenido_completo": "Revisa la presión de las llantas.",
            "fecha": "28 de mayo de 2026"
        }"#;
        let post: BlogPost = serde_json::from_str(raw).expect("post should deserialize");
        assert_eq!(post.imagen_url, None);
    }
}
