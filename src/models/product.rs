use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

use crate::models::Category;

/// Free-form spec entry as entered in the admin form ("Protección IP67" / "IP67").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub model: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub badge: Option<String>,
    pub category_id: Option<i32>,

    pub main_image: Option<String>,
    pub night_vision_image: Option<String>,
    pub app_demo_image: Option<String>,
    pub app_demo_badge: Option<String>,
    pub app_demo_title: Option<String>,
    pub app_demo_description: Option<String>,

    pub ai_section_title: Option<String>,
    pub ai_section_description: Option<String>,
    pub ai_icon: Option<String>,
    pub night_vision_title: Option<String>,
    pub night_vision_description: Option<String>,
    pub night_vision_icon: Option<String>,
    pub specs_title: Option<String>,
    pub specs_description: Option<String>,
    pub specs_icon: Option<String>,

    pub guarantee_icon: Option<String>,
    pub guarantee_text: Option<String>,
    pub support_icon: Option<String>,
    pub support_text: Option<String>,

    pub protection: Option<String>,
    pub compression: Option<String>,
    pub lens: Option<String>,
    pub power: Option<String>,

    pub resolution_options: Vec<String>,
    pub ai_detection: Vec<String>,
    pub specs: Json<Vec<SpecEntry>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductVariant {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub manual_url: Option<String>,
    pub datasheet_url: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantInput {
    pub name: String,
    pub description: Option<String>,
    pub manual_url: Option<String>,
    pub datasheet_url: Option<String>,
}

/// Full product payload as submitted by the admin form. Create and update use
/// the same shape: an update replaces the stored record wholesale
/// (last-write-wins), and a present `variants` list replaces all variants.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub model: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub badge: Option<String>,
    pub category_id: Option<i32>,

    pub main_image: Option<String>,
    pub night_vision_image: Option<String>,
    pub app_demo_image: Option<String>,
    pub app_demo_badge: Option<String>,
    pub app_demo_title: Option<String>,
    pub app_demo_description: Option<String>,

    pub ai_section_title: Option<String>,
    pub ai_section_description: Option<String>,
    pub ai_icon: Option<String>,
    pub night_vision_title: Option<String>,
    pub night_vision_description: Option<String>,
    pub night_vision_icon: Option<String>,
    pub specs_title: Option<String>,
    pub specs_description: Option<String>,
    pub specs_icon: Option<String>,

    pub guarantee_icon: Option<String>,
    pub guarantee_text: Option<String>,
    pub support_icon: Option<String>,
    pub support_text: Option<String>,

    #[serde(default)]
    pub resolution_options: Vec<String>,
    #[serde(default)]
    pub ai_detection: Vec<String>,
    #[serde(default)]
    pub specs: Vec<SpecEntry>,

    pub variants: Option<Vec<VariantInput>>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub data: Product,
    pub category: Option<Category>,
    pub variants: Vec<ProductVariant>,
}

#[derive(Debug, Deserialize)]
pub struct DisplayQuery {
    pub variant: Option<i32>,
}

/// Draft form state for the admin live preview. Every field is present with
/// a default instead of being optional, so the preview handler never probes
/// for missing keys. The two list fields arrive as the raw textarea strings;
/// they are parsed at this boundary only, the rest of the API carries real
/// lists.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreviewRequest {
    pub name: String,
    pub model: String,
    pub subtitle: String,
    pub description: String,
    pub badge: String,

    pub main_image: String,
    pub night_vision_image: String,
    pub app_demo_image: String,
    pub app_demo_badge: String,
    pub app_demo_title: String,
    pub app_demo_description: String,

    pub ai_section_title: String,
    pub ai_section_description: String,
    pub ai_icon: String,
    pub night_vision_title: String,
    pub night_vision_description: String,
    pub night_vision_icon: String,
    pub specs_title: String,
    pub specs_description: String,
    pub specs_icon: String,

    pub guarantee_icon: String,
    pub guarantee_text: String,
    pub support_icon: String,
    pub support_text: String,

    pub resolution_options: String,
    pub ai_detection: String,
    pub specs: Vec<SpecEntry>,

    pub variants: Vec<VariantInput>,
    pub selected_variant: Option<usize>,

    pub category_slug: String,
    pub category_name: String,
}
