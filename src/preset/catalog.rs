//! Factory preset catalog.
//!
//! Categories are listed in bank order. Each category maps 1:1 to an output
//! folder whose name carries a numeric prefix (`007_Ensemble`).

/// A category folder and the presets it contains.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Output folder name, including the numeric prefix.
    pub folder: &'static str,
    /// (preset number, display name) pairs in bank order.
    pub presets: &'static [(u16, &'static str)],
}

impl Category {
    /// Returns the human-readable label for this category.
    pub fn label(&self) -> &'static str {
        category_label(self.folder)
    }

    /// Returns an iterator over the records in this category.
    pub fn records(&self) -> impl Iterator<Item = PresetRecord> + '_ {
        self.presets.iter().map(move |&(id, name)| PresetRecord {
            id,
            name,
            category_folder: self.folder,
        })
    }
}

/// One preset in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetRecord {
    /// Preset number within the bank.
    pub id: u16,
    /// Display name, spaces allowed.
    pub name: &'static str,
    /// Folder of the owning category.
    pub category_folder: &'static str,
}

impl PresetRecord {
    /// Returns the category label embedded in the preset document.
    pub fn category_label(&self) -> &'static str {
        category_label(self.category_folder)
    }
}

/// Strips the numeric prefix and its underscore from a category folder name.
///
/// `"007_Ensemble"` becomes `"Ensemble"`, `"011_Synth_Lead"` becomes
/// `"Synth_Lead"`. A folder without an underscore is returned unchanged.
pub fn category_label(folder: &str) -> &str {
    folder.split_once('_').map_or(folder, |(_, label)| label)
}

/// Presets 49 through 128. Presets 1-48 ship with the plugin separately.
pub const CATALOG: &[Category] = &[
    Category {
        folder: "007_Ensemble",
        presets: &[
            (49, "Choir Aahs"),
            (50, "Choir Oohs"),
            (51, "Strings 1"),
            (52, "Strings 2"),
            (53, "Synth Strings"),
            (54, "Bright Ensemble"),
            (55, "Warm Ensemble"),
            (56, "Full Ensemble"),
        ],
    },
    Category {
        folder: "008_Brass",
        presets: &[
            (57, "Trumpet"),
            (58, "Trombone"),
            (59, "Tuba"),
            (60, "French Horn"),
            (61, "Brass Section"),
            (62, "Bright Brass"),
            (63, "Warm Brass"),
            (64, "Stab Brass"),
        ],
    },
    Category {
        folder: "009_Reed",
        presets: &[
            (65, "Saxophone"),
            (66, "Oboe"),
            (67, "Clarinet"),
            (68, "English Horn"),
            (69, "Bassoon"),
            (70, "Reed Lead"),
            (71, "Solo Reed"),
            (72, "Reed Pad"),
        ],
    },
    Category {
        folder: "010_Pipe",
        presets: &[
            (73, "Flute"),
            (74, "Piccolo"),
            (75, "Recorder"),
            (76, "Pan Pipes"),
            (77, "Blown Pipe"),
            (78, "Whistling"),
            (79, "Ocarina"),
            (80, "Kazoo"),
        ],
    },
    Category {
        folder: "011_Synth_Lead",
        presets: &[
            (81, "Lead 1 Bright"),
            (82, "Lead 2 Square"),
            (83, "Lead 3 Sawtooth"),
            (84, "Lead 4 Warm"),
            (85, "Lead 5 Growl"),
            (86, "Lead 6 Glide"),
            (87, "Lead 7 Stab"),
            (88, "Lead 8 Vibrato"),
        ],
    },
    Category {
        folder: "012_Synth_Pad",
        presets: &[
            (89, "Pad 1 Soft"),
            (90, "Pad 2 Warm"),
            (91, "Pad 3 Lush"),
            (92, "Pad 4 Rich"),
            (93, "Pad 5 Floating"),
            (94, "Pad 6 Ambient"),
            (95, "Pad 7 Ethereal"),
            (96, "Pad 8 Deep"),
        ],
    },
    Category {
        folder: "013_Synth_FX",
        presets: &[
            (97, "FX 1 Sweep"),
            (98, "FX 2 Bell"),
            (99, "FX 3 Siren"),
            (100, "FX 4 Glitch"),
            (101, "FX 5 Noise"),
            (102, "FX 6 Metallic"),
            (103, "FX 7 Whoosh"),
            (104, "FX 8 Weird"),
        ],
    },
    Category {
        folder: "014_Ethnic",
        presets: &[
            (105, "Sitar"),
            (106, "Bowed Pipa"),
            (107, "Shakuhachi"),
            (108, "Koto"),
            (109, "Oud"),
            (110, "Tamboura"),
            (111, "Sitarop"),
            (112, "Ethnic Pad"),
        ],
    },
    Category {
        folder: "015_Percussive",
        presets: &[
            (113, "Vibraphone"),
            (114, "Mallet Perc"),
            (115, "Timpani"),
            (116, "Bongo"),
            (117, "Conga"),
            (118, "Tom"),
            (119, "Cowbell"),
            (120, "Triangle"),
        ],
    },
    Category {
        folder: "016_Sound_FX",
        presets: &[
            (121, "Helicopter"),
            (122, "Wind"),
            (123, "Ocean"),
            (124, "Thunder"),
            (125, "Laser"),
            (126, "Teleport"),
            (127, "Digital Pop"),
            (128, "Explosion"),
        ],
    },
];

/// Returns every record in the catalog, in bank order.
pub fn records() -> impl Iterator<Item = PresetRecord> {
    CATALOG.iter().flat_map(|category| category.records())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("007_Ensemble"), "Ensemble");
        assert_eq!(category_label("011_Synth_Lead"), "Synth_Lead");
        assert_eq!(category_label("Misc"), "Misc");
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(CATALOG.len(), 10);
        assert!(CATALOG.iter().all(|c| c.presets.len() == 8));
        assert_eq!(records().count(), 80);
    }

    #[test]
    fn test_ids_are_contiguous() {
        let ids: Vec<u16> = records().map(|r| r.id).collect();
        let expected: Vec<u16> = (49..=128).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_record_label() {
        let strings = records().find(|r| r.id == 51).unwrap();
        assert_eq!(strings.name, "Strings 1");
        assert_eq!(strings.category_folder, "007_Ensemble");
        assert_eq!(strings.category_label(), "Ensemble");
    }
}
