use serde::Serialize;

use crate::models::{Category, Product, ProductVariant, SpecEntry, VariantInput};

use super::spec_slots::{SPEC_SLOTS, resolve_slot};

/// Display-relevant product fields, decoupled from the persistence row so the
/// admin preview can feed unsaved form state through the same resolution.
#[derive(Debug, Clone, Default)]
pub struct ProductContent {
    pub name: String,
    pub model: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub badge: Option<String>,

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

    pub resolution_options: Vec<String>,
    pub ai_detection: Vec<String>,
    pub specs: Vec<SpecEntry>,

    pub category_slug: Option<String>,
    pub category_name: Option<String>,
}

impl ProductContent {
    pub fn from_record(product: &Product, category: Option<&Category>) -> Self {
        Self {
            name: product.name.clone(),
            model: product.model.clone(),
            subtitle: product.subtitle.clone(),
            description: product.description.clone(),
            badge: product.badge.clone(),
            main_image: product.main_image.clone(),
            night_vision_image: product.night_vision_image.clone(),
            app_demo_image: product.app_demo_image.clone(),
            app_demo_badge: product.app_demo_badge.clone(),
            app_demo_title: product.app_demo_title.clone(),
            app_demo_description: product.app_demo_description.clone(),
            ai_section_title: product.ai_section_title.clone(),
            ai_section_description: product.ai_section_description.clone(),
            ai_icon: product.ai_icon.clone(),
            night_vision_title: product.night_vision_title.clone(),
            night_vision_description: product.night_vision_description.clone(),
            night_vision_icon: product.night_vision_icon.clone(),
            specs_title: product.specs_title.clone(),
            specs_description: product.specs_description.clone(),
            specs_icon: product.specs_icon.clone(),
            guarantee_icon: product.guarantee_icon.clone(),
            guarantee_text: product.guarantee_text.clone(),
            support_icon: product.support_icon.clone(),
            support_text: product.support_text.clone(),
            resolution_options: product.resolution_options.clone(),
            ai_detection: product.ai_detection.clone(),
            specs: product.specs.0.clone(),
            category_slug: category.map(|c| c.slug.clone()),
            category_name: category.map(|c| c.name.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct VariantContent {
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub manual_url: Option<String>,
    pub datasheet_url: Option<String>,
}

impl From<&ProductVariant> for VariantContent {
    fn from(variant: &ProductVariant) -> Self {
        Self {
            id: Some(variant.id),
            name: variant.name.clone(),
            description: variant.description.clone(),
            manual_url: variant.manual_url.clone(),
            datasheet_url: variant.datasheet_url.clone(),
        }
    }
}

impl From<&VariantInput> for VariantContent {
    fn from(input: &VariantInput) -> Self {
        Self {
            id: None,
            name: input.name.clone(),
            description: input.description.clone(),
            manual_url: input.manual_url.clone(),
            datasheet_url: input.datasheet_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionContent {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecTile {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureHighlight {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantOption {
    pub id: Option<i32>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductDisplay {
    pub name: String,
    pub description: String,
    pub badge: Option<String>,
    pub is_nvr: bool,

    pub main_image: Option<String>,
    pub night_vision_image: Option<String>,
    pub app_demo_image: Option<String>,
    pub app_demo_badge: Option<String>,
    pub app_demo_title: Option<String>,
    pub app_demo_description: Option<String>,

    pub manual_url: Option<String>,
    pub datasheet_url: Option<String>,

    pub ai_section: SectionContent,
    pub night_vision_section: SectionContent,
    pub specs_section: SectionContent,
    pub spec_tiles: Vec<SpecTile>,

    pub guarantee: FeatureHighlight,
    pub support: FeatureHighlight,

    pub ai_detection: Vec<String>,
    pub resolution_tags: Vec<String>,
    pub variant_options: Vec<VariantOption>,
    pub selected_variant_id: Option<i32>,
}

const NVR_AI_SECTION: SectionLiteral = SectionLiteral {
    title: "Analítica de Video Centralizada",
    description: "Detección inteligente de personas y vehículos procesada en el grabador \
                  para todos los canales conectados.",
    icon: "cpu",
};

const NVR_STORAGE_SECTION: SectionLiteral = SectionLiteral {
    title: "Grabación y Almacenamiento",
    description: "Grabación continua 24/7 en discos de vigilancia de alta capacidad con \
                  sobrescritura automática.",
    icon: "hard-drive",
};

const NVR_SPECS_SECTION: SectionLiteral = SectionLiteral {
    title: "Especificaciones del Grabador",
    description: "Canales, capacidad de disco y salidas de video del equipo.",
    icon: "server",
};

struct SectionLiteral {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

impl SectionLiteral {
    fn to_section(&self) -> SectionContent {
        SectionContent {
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
        }
    }
}

/// Resolves what the product page actually shows, in three layers: variant
/// overrides, NVR-class overrides, then spec-alias lookup. Selection defaults
/// to the first variant; an out-of-range index also falls back to the first.
/// Borrows everything, so re-rendering with a different selection can never
/// mutate the underlying records.
pub fn resolve(
    content: &ProductContent,
    variants: &[VariantContent],
    selected: Option<usize>,
) -> ProductDisplay {
    let selected_variant = if variants.is_empty() {
        None
    } else {
        let index = selected.filter(|i| *i < variants.len()).unwrap_or(0);
        Some(&variants[index])
    };

    let is_nvr = is_nvr_category(
        content.category_slug.as_deref(),
        content.category_name.as_deref(),
    );

    let name = match selected_variant {
        Some(variant) => format!("{} ({})", content.name, variant.name),
        None if content.model.is_empty() => content.name.clone(),
        None => format!("{} {}", content.name, content.model),
    };

    let description = selected_variant
        .and_then(|variant| {
            let text = variant.description.as_deref()?.trim();
            if text.is_empty() {
                None
            } else {
                Some(format!("[{}] {}", variant.name, text))
            }
        })
        .unwrap_or_else(|| base_description(content));

    let spec_tiles = SPEC_SLOTS
        .iter()
        .map(|&slot| SpecTile {
            label: slot.label(is_nvr).to_string(),
            value: resolve_slot(slot, &content.specs)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    if is_nvr {
                        slot.nvr_fallback().to_string()
                    } else {
                        "N/A".to_string()
                    }
                }),
        })
        .collect();

    let (ai_section, night_vision_section, specs_section) = if is_nvr {
        (
            NVR_AI_SECTION.to_section(),
            NVR_STORAGE_SECTION.to_section(),
            NVR_SPECS_SECTION.to_section(),
        )
    } else {
        (
            stored_section(
                &content.ai_section_title,
                &content.ai_section_description,
                &content.ai_icon,
            ),
            stored_section(
                &content.night_vision_title,
                &content.night_vision_description,
                &content.night_vision_icon,
            ),
            stored_section(
                &content.specs_title,
                &content.specs_description,
                &content.specs_icon,
            ),
        )
    };

    // Resolution tags replace the variant selector only when no variants
    // exist; the two never render together.
    let resolution_tags = if variants.is_empty() {
        content.resolution_options.clone()
    } else {
        Vec::new()
    };

    ProductDisplay {
        name,
        description,
        badge: content.badge.clone(),
        is_nvr,
        main_image: content.main_image.clone(),
        night_vision_image: content.night_vision_image.clone(),
        app_demo_image: content.app_demo_image.clone(),
        app_demo_badge: content.app_demo_badge.clone(),
        app_demo_title: content.app_demo_title.clone(),
        app_demo_description: content.app_demo_description.clone(),
        manual_url: selected_variant.and_then(|v| v.manual_url.clone()),
        datasheet_url: selected_variant.and_then(|v| v.datasheet_url.clone()),
        ai_section,
        night_vision_section,
        specs_section,
        spec_tiles,
        guarantee: FeatureHighlight {
            icon: content.guarantee_icon.clone().unwrap_or_default(),
            text: content.guarantee_text.clone().unwrap_or_default(),
        },
        support: FeatureHighlight {
            icon: content.support_icon.clone().unwrap_or_default(),
            text: content.support_text.clone().unwrap_or_default(),
        },
        ai_detection: content.ai_detection.clone(),
        resolution_tags,
        variant_options: variants
            .iter()
            .map(|v| VariantOption {
                id: v.id,
                name: v.name.clone(),
            })
            .collect(),
        selected_variant_id: selected_variant.and_then(|v| v.id),
    }
}

fn is_nvr_category(slug: Option<&str>, name: Option<&str>) -> bool {
    let contains_nvr = |s: &str| s.to_lowercase().contains("nvr");
    slug.is_some_and(contains_nvr) || name.is_some_and(contains_nvr)
}

fn base_description(content: &ProductContent) -> String {
    content
        .description
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(content.subtitle.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or_default()
        .to_string()
}

fn stored_section(
    title: &Option<String>,
    description: &Option<String>,
    icon: &Option<String>,
) -> SectionContent {
    SectionContent {
        title: title.clone().unwrap_or_default(),
        description: description.clone().unwrap_or_default(),
        icon: icon.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> ProductContent {
        ProductContent {
            name: "Cámara Bullet Pro".to_string(),
            model: "SV-8420".to_string(),
            subtitle: Some("Vigilancia exterior".to_string()),
            description: Some("Cámara IP de exterior con analítica integrada.".to_string()),
            ai_section_title: Some("Detección AI".to_string()),
            ai_section_description: Some("Personas y vehículos.".to_string()),
            ai_icon: Some("scan-eye".to_string()),
            night_vision_title: Some("Visión Nocturna".to_string()),
            night_vision_description: Some("ColorVu 30m.".to_string()),
            night_vision_icon: Some("moon".to_string()),
            specs_title: Some("Especificaciones Pro".to_string()),
            specs_description: Some("Grado industrial.".to_string()),
            specs_icon: Some("settings".to_string()),
            resolution_options: vec!["4K UHD".to_string(), "2K QHD".to_string()],
            ai_detection: vec!["Personas".to_string(), "Vehículos".to_string()],
            specs: vec![
                spec("Protección IP67", "IP67"),
                spec("Energía PoE", "48V"),
            ],
            ..Default::default()
        }
    }

    fn spec(key: &str, value: &str) -> SpecEntry {
        SpecEntry {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    fn variant(name: &str, description: Option<&str>) -> VariantContent {
        VariantContent {
            id: Some(1),
            name: name.to_string(),
            description: description.map(str::to_string),
            manual_url: Some("https://docs.example.com/manual.pdf".to_string()),
            datasheet_url: Some("https://docs.example.com/datasheet.pdf".to_string()),
        }
    }

    fn nvr_content() -> ProductContent {
        ProductContent {
            category_slug: Some("grabadores-nvr".to_string()),
            category_name: Some("Grabadores NVR".to_string()),
            ..camera()
        }
    }

    #[test]
    fn no_variants_uses_name_and_model() {
        let display = resolve(&camera(), &[], None);

        assert_eq!(display.name, "Cámara Bullet Pro SV-8420");
        assert_eq!(
            display.description,
            "Cámara IP de exterior con analítica integrada."
        );
    }

    #[test]
    fn description_falls_back_to_subtitle_then_empty() {
        let mut content = camera();
        content.description = None;
        assert_eq!(resolve(&content, &[], None).description, "Vigilancia exterior");

        content.subtitle = None;
        assert_eq!(resolve(&content, &[], None).description, "");
    }

    #[test]
    fn selected_variant_overrides_name_and_description() {
        let variants = vec![variant("4MP", Some("Sensor de 4 megapixeles."))];
        let display = resolve(&camera(), &variants, Some(0));

        assert_eq!(display.name, "Cámara Bullet Pro (4MP)");
        assert_eq!(display.description, "[4MP] Sensor de 4 megapixeles.");
    }

    #[test]
    fn variant_without_description_keeps_product_description() {
        let variants = vec![variant("4MP", None), variant("8MP", Some("  "))];

        let display = resolve(&camera(), &variants, Some(0));
        assert_eq!(
            display.description,
            "Cámara IP de exterior con analítica integrada."
        );

        // Whitespace-only variant description is treated as absent.
        let display = resolve(&camera(), &variants, Some(1));
        assert_eq!(
            display.description,
            "Cámara IP de exterior con analítica integrada."
        );
    }

    #[test]
    fn selection_defaults_to_first_variant() {
        let variants = vec![variant("4MP", None), variant("8MP", None)];

        let display = resolve(&camera(), &variants, None);
        assert_eq!(display.name, "Cámara Bullet Pro (4MP)");

        // Out-of-range selection falls back the same way.
        let display = resolve(&camera(), &variants, Some(7));
        assert_eq!(display.name, "Cámara Bullet Pro (4MP)");
    }

    #[test]
    fn document_links_come_only_from_the_selected_variant() {
        let display = resolve(&camera(), &[], None);
        assert_eq!(display.manual_url, None);
        assert_eq!(display.datasheet_url, None);

        let variants = vec![variant("4MP", None)];
        let display = resolve(&camera(), &variants, None);
        assert_eq!(
            display.manual_url.as_deref(),
            Some("https://docs.example.com/manual.pdf")
        );
        assert_eq!(
            display.datasheet_url.as_deref(),
            Some("https://docs.example.com/datasheet.pdf")
        );
    }

    #[test]
    fn resolution_tags_render_only_without_variants() {
        let display = resolve(&camera(), &[], None);
        assert_eq!(display.resolution_tags, vec!["4K UHD", "2K QHD"]);
        assert!(display.variant_options.is_empty());

        let variants = vec![variant("4MP", None)];
        let display = resolve(&camera(), &variants, None);
        assert!(display.resolution_tags.is_empty());
        assert_eq!(display.variant_options.len(), 1);
    }

    #[test]
    fn nvr_class_detected_from_slug_or_name_case_insensitive() {
        assert!(resolve(&nvr_content(), &[], None).is_nvr);

        let mut by_name = camera();
        by_name.category_slug = Some("grabadores".to_string());
        by_name.category_name = Some("Equipos NVR de 16 canales".to_string());
        assert!(resolve(&by_name, &[], None).is_nvr);

        let mut plain = camera();
        plain.category_slug = Some("camaras-ip".to_string());
        plain.category_name = Some("Cámaras IP".to_string());
        assert!(!resolve(&plain, &[], None).is_nvr);

        assert!(!resolve(&camera(), &[], None).is_nvr);
    }

    #[test]
    fn nvr_sections_ignore_stored_titles() {
        let display = resolve(&nvr_content(), &[], None);

        assert_eq!(display.ai_section.title, "Analítica de Video Centralizada");
        assert_eq!(display.night_vision_section.title, "Grabación y Almacenamiento");
        assert_eq!(display.specs_section.title, "Especificaciones del Grabador");
    }

    #[test]
    fn generic_sections_use_stored_fields() {
        let display = resolve(&camera(), &[], None);

        assert_eq!(
            display.ai_section,
            SectionContent {
                title: "Detección AI".to_string(),
                description: "Personas y vehículos.".to_string(),
                icon: "scan-eye".to_string(),
            }
        );
        assert_eq!(display.night_vision_section.title, "Visión Nocturna");
        assert_eq!(display.specs_section.icon, "settings");
    }

    #[test]
    fn spec_tiles_resolve_by_alias_with_na_miss() {
        let display = resolve(&camera(), &[], None);
        let tiles = &display.spec_tiles;

        assert_eq!(tiles[0], SpecTile { label: "Protección".to_string(), value: "IP67".to_string() });
        assert_eq!(tiles[1].value, "N/A");
        assert_eq!(tiles[2].value, "N/A");
        assert_eq!(tiles[3], SpecTile { label: "Alimentación".to_string(), value: "48V".to_string() });
    }

    #[test]
    fn empty_specs_give_na_on_every_tile() {
        let mut content = camera();
        content.specs.clear();

        for tile in resolve(&content, &[], None).spec_tiles {
            assert_eq!(tile.value, "N/A");
        }
    }

    #[test]
    fn nvr_tiles_relabel_and_substitute_literals_on_miss() {
        let mut content = nvr_content();
        content.specs.clear();

        let tiles = resolve(&content, &[], None).spec_tiles;

        assert_eq!(tiles[0], SpecTile { label: "HDD".to_string(), value: "2x HDD".to_string() });
        assert_eq!(tiles[1], SpecTile { label: "Megapixeles".to_string(), value: "8 MP".to_string() });
        assert_eq!(tiles[2], SpecTile { label: "Salida Video".to_string(), value: "4K UHD".to_string() });
        assert_eq!(tiles[3], SpecTile { label: "Alimentación".to_string(), value: "N/A".to_string() });
    }

    #[test]
    fn nvr_tiles_prefer_actual_spec_matches_over_literals() {
        let mut content = nvr_content();
        content.specs = vec![spec("Discos soportados", "2x 8TB")];

        let tiles = resolve(&content, &[], None).spec_tiles;
        assert_eq!(tiles[0].value, "2x 8TB");
        assert_eq!(tiles[1].value, "8 MP");
    }

    #[test]
    fn resolving_never_mutates_inputs() {
        let content = camera();
        let variants = vec![variant("4MP", Some("desc")), variant("8MP", None)];
        let content_before = format!("{:?}", content);
        let variants_before = format!("{:?}", variants);

        let _ = resolve(&content, &variants, None);
        let _ = resolve(&content, &variants, Some(1));
        let _ = resolve(&content, &variants, Some(0));

        assert_eq!(format!("{:?}", content), content_before);
        assert_eq!(format!("{:?}", variants), variants_before);
    }
}
