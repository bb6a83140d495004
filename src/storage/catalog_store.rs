use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Catalog, Course, Ingredient};

const CATALOG_VERSION: u32 = 1;

/// slot-type -> course name -> record
type TypeMap = BTreeMap<String, BTreeMap<String, CourseRecord>>;

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    version: u32,
    courses: TypeMap,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CourseRecord {
    #[serde(default)]
    description: String,

    // Legacy key spelling, kept for compatibility with existing files.
    #[serde(rename = "ingridients", alias = "ingredients", default)]
    ingredients: BTreeMap<String, Ingredient>,
}

/// Load the course catalog from a JSON file.
///
/// A missing file yields an empty catalog. A file whose top level lacks a
/// `version` key is the legacy format and is re-saved in the versioned
/// format after loading.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Catalog::new());
    }

    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    let (type_map, legacy): (TypeMap, bool) = if value.get("version").is_some() {
        let file: CatalogFile = serde_json::from_value(value)?;
        (file.courses, false)
    } else {
        (serde_json::from_value(value)?, true)
    };

    let catalog = catalog_from_map(type_map);
    if legacy {
        save_catalog(path, &catalog)?;
    }
    Ok(catalog)
}

/// Save the catalog in the versioned format.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let mut type_map = TypeMap::new();
    for (slot_type, courses) in catalog.iter() {
        let dishes = type_map.entry(slot_type.to_string()).or_default();
        for course in courses {
            dishes.insert(
                course.name.clone(),
                CourseRecord {
                    description: course.description.clone(),
                    ingredients: course.ingredients.clone(),
                },
            );
        }
    }

    let file = CatalogFile {
        version: CATALOG_VERSION,
        courses: type_map,
    };
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)?;
    Ok(())
}

fn catalog_from_map(type_map: TypeMap) -> Catalog {
    let mut catalog = Catalog::new();
    for (slot_type, dishes) in type_map {
        for (name, record) in dishes {
            let mut course = Course::new(&name, &slot_type, record.description);
            for (ing_name, ingredient) in record.ingredients {
                course.add_ingredient(&ing_name, ingredient);
            }
            catalog.insert(course);
        }
    }
    catalog
}
