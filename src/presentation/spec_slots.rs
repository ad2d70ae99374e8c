use crate::models::SpecEntry;

/// The four fixed spec tiles on the product page. Values are looked up in the
/// free-form specs list by alias matching, never read from a fixed field, so
/// the admin preview and the saved product cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecSlot {
    Protection,
    Compression,
    Lens,
    Power,
}

/// Display order of the tiles.
pub const SPEC_SLOTS: [SpecSlot; 4] = [
    SpecSlot::Protection,
    SpecSlot::Compression,
    SpecSlot::Lens,
    SpecSlot::Power,
];

impl SpecSlot {
    /// Alias substrings matched against the normalized spec key. Each slot is
    /// evaluated independently; a key may satisfy more than one slot.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            SpecSlot::Protection => &["protec", "ip", "ancho", "banda", "hdd", "disco", "almacen"],
            SpecSlot::Compression => &[
                "compres",
                "h265",
                "h264",
                "megapixel",
                "megapixeles",
                "resolucion",
                "mp",
            ],
            SpecSlot::Lens => &["lente", "mm", "salida", "hdmi", "video"],
            SpecSlot::Power => &["energ", "alimenta", "poe", "volt"],
        }
    }

    pub fn label(self, nvr: bool) -> &'static str {
        match (self, nvr) {
            (SpecSlot::Protection, false) => "Protección",
            (SpecSlot::Protection, true) => "HDD",
            (SpecSlot::Compression, false) => "Compresión",
            (SpecSlot::Compression, true) => "Megapixeles",
            (SpecSlot::Lens, false) => "Lente",
            (SpecSlot::Lens, true) => "Salida Video",
            (SpecSlot::Power, _) => "Alimentación",
        }
    }

    /// Literal shown for NVR-class products when the alias lookup misses.
    /// Power has no NVR literal and stays at "N/A".
    pub fn nvr_fallback(self) -> &'static str {
        match self {
            SpecSlot::Protection => "2x HDD",
            SpecSlot::Compression => "8 MP",
            SpecSlot::Lens => "4K UHD",
            SpecSlot::Power => "N/A",
        }
    }
}

/// Lowercases and strips the diacritics that show up in Spanish spec keys, so
/// "Protección" matches the "protec" alias.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// First spec whose normalized key contains any of the slot's aliases wins;
/// ties within a slot resolve by stored-list order.
pub fn resolve_slot(slot: SpecSlot, specs: &[SpecEntry]) -> Option<&str> {
    let aliases = slot.aliases();
    specs
        .iter()
        .find(|spec| {
            let key = normalize_key(&spec.key);
            aliases.iter().any(|alias| key.contains(alias))
        })
        .map(|spec| spec.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(key: &str, value: &str) -> SpecEntry {
        SpecEntry {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn normalize_strips_diacritics_and_case() {
        assert_eq!(normalize_key("Protección IP67"), "proteccion ip67");
        assert_eq!(normalize_key("Energía PoE"), "energia poe");
        assert_eq!(normalize_key("Compresión H.265"), "compresion h.265");
    }

    #[test]
    fn slots_resolve_by_alias() {
        let specs = vec![spec("Protección IP67", "IP67"), spec("Energía PoE", "48V")];

        assert_eq!(resolve_slot(SpecSlot::Protection, &specs), Some("IP67"));
        assert_eq!(resolve_slot(SpecSlot::Power, &specs), Some("48V"));
        assert_eq!(resolve_slot(SpecSlot::Compression, &specs), None);
        assert_eq!(resolve_slot(SpecSlot::Lens, &specs), None);
    }

    #[test]
    fn empty_specs_resolve_to_none() {
        for slot in SPEC_SLOTS {
            assert_eq!(resolve_slot(slot, &[]), None);
        }
    }

    #[test]
    fn first_match_wins_within_a_slot() {
        let specs = vec![
            spec("Disco duro", "1x 4TB"),
            spec("Almacenamiento máximo", "8TB"),
        ];

        assert_eq!(resolve_slot(SpecSlot::Protection, &specs), Some("1x 4TB"));
    }

    #[test]
    fn a_key_may_satisfy_more_than_one_slot() {
        // "Salida HDMI" hits the lens slot; "Resolución" hits compression.
        let specs = vec![spec("Salida HDMI", "4K"), spec("Resolución", "8 MP")];

        assert_eq!(resolve_slot(SpecSlot::Lens, &specs), Some("4K"));
        assert_eq!(resolve_slot(SpecSlot::Compression, &specs), Some("8 MP"));
    }

    #[test]
    fn labels_switch_for_nvr_class() {
        assert_eq!(SpecSlot::Protection.label(false), "Protección");
        assert_eq!(SpecSlot::Protection.label(true), "HDD");
        assert_eq!(SpecSlot::Compression.label(true), "Megapixeles");
        assert_eq!(SpecSlot::Lens.label(true), "Salida Video");
        assert_eq!(SpecSlot::Power.label(true), "Alimentación");
        assert_eq!(SpecSlot::Power.label(false), "Alimentación");
    }
}
