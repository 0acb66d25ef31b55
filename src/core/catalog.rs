/// Care profile for one supported species.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub common_name: String,  // Display name and lookup key
    pub species: String,      // Binomial name
    pub base_interval: u32,   // Days between waterings at average sunlight
    pub avg_sunlight: f32,    // Hours of sun per day the species expects
    pub typical_water: f32,   // ml per watering the species expects
    pub image_ref: String,    // Photo URL, presentational only
}

impl CatalogEntry {
    fn new(
        common_name: &str,
        species: &str,
        base_interval: u32,
        avg_sunlight: f32,
        typical_water: f32,
        image_ref: &str,
    ) -> Self {
        CatalogEntry {
            common_name: common_name.to_string(),
            species: species.to_string(),
            base_interval,
            avg_sunlight,
            typical_water,
            image_ref: image_ref.to_string(),
        }
    }
}

/// The fixed set of species the app knows how to care for.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let entries = vec![
            CatalogEntry::new(
                "Snake Plant",
                "Sansevieria trifasciata",
                14,
                6.0,
                200.0,
                "https://indoorgardening.com/wp-content/uploads/2021/02/Vipers-Bowstring-Snake-Plant-150x150.jpg",
            ),
            CatalogEntry::new(
                "Spider Plant",
                "Chlorophytum comosum",
                7,
                6.0,
                250.0,
                "https://indoorgardening.com/wp-content/uploads/2021/03/Bonnie-Spider-Plant.jpg",
            ),
            CatalogEntry::new(
                "Pothos",
                "Epipremnum aureum",
                7,
                6.0,
                250.0,
                "https://indoorgardening.com/wp-content/uploads/2022/08/Global-Green-Pothos-768x432.jpg",
            ),
            CatalogEntry::new(
                "Fiddle Leaf Fig",
                "Ficus lyrata",
                10,
                6.0,
                300.0,
                "https://indoorgardening.com/wp-content/uploads/2022/08/Light-768x432.jpg",
            ),
            CatalogEntry::new(
                "Peace Lily",
                "Spathiphyllum wallisii",
                4,
                4.0,
                200.0,
                "https://indoorgardening.com/wp-content/uploads/2021/03/Peace-Lily-Guide-768x396.jpg",
            ),
        ];

        Catalog { entries }
    }

    pub fn get(&self, common_name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.common_name == common_name)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.common_name.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_lists_all_five_species() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.names().collect();

        assert_eq!(
            names,
            ["Snake Plant", "Spider Plant", "Pothos", "Fiddle Leaf Fig", "Peace Lily"]
        );
    }

    #[test]
    fn lookup_returns_the_full_care_profile() {
        let catalog = Catalog::builtin();
        let entry = catalog.get("Peace Lily").unwrap();

        assert_eq!(entry.species, "Spathiphyllum wallisii");
        assert_eq!(entry.base_interval, 4);
        assert_eq!(entry.avg_sunlight, 4.0);
        assert_eq!(entry.typical_water, 200.0);
    }

    #[test]
    fn lookup_rejects_names_outside_the_catalog() {
        let catalog = Catalog::builtin();

        assert!(catalog.get("Cactus").is_none());
        assert!(catalog.get("peace lily").is_none());
    }
}
