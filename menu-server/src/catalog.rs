//! Static seed catalog
//!
//! Categories are fixed for the process lifetime; menu items are the
//! initial ordered set loaded into the store at startup. Admins can add,
//! replace and delete items at runtime, but those edits are in-memory
//! only and reset on restart.

use shared::models::{Category, MenuItem};

fn category(id: &str, name_ar: &str, name_en: &str, icon: &str) -> Category {
    Category {
        id: id.into(),
        name_ar: name_ar.into(),
        name_en: name_en.into(),
        icon: icon.into(),
    }
}

/// The fixed bilingual category list, in display order
pub fn categories() -> Vec<Category> {
    vec![
        category("saj", "صاج", "Saj", "🫓"),
        category("wraps", "لفائف", "Wraps", "🌯"),
        category("drinks", "مشروبات", "Drinks", "🥤"),
        category("sweets", "حلويات", "Sweets", "🍯"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    category_id: &str,
    name_ar: &str,
    name_en: &str,
    description_ar: &str,
    description_en: &str,
    price: i64,
    is_popular: bool,
    is_veg: bool,
    spice_level: i32,
) -> MenuItem {
    MenuItem {
        id: id.into(),
        category_id: category_id.into(),
        name_ar: name_ar.into(),
        name_en: name_en.into(),
        description_ar: description_ar.into(),
        description_en: description_en.into(),
        price,
        image_url: format!("/images/{id}.jpg"),
        is_popular,
        is_veg,
        spice_level,
        is_available: true,
    }
}

/// The initial menu, in display order (prices in LBP)
pub fn menu_items() -> Vec<MenuItem> {
    vec![
        item(
            "saj-chicken",
            "saj",
            "صاج دجاج",
            "Saj Chicken",
            "دجاج مشوي مع ثوم ومخلل على خبز الصاج",
            "Grilled chicken with garlic sauce and pickles on saj bread",
            100_000,
            true,
            false,
            1,
        ),
        item(
            "saj-zaatar",
            "saj",
            "منقوشة زعتر",
            "Zaatar Manousheh",
            "زعتر بلدي مع زيت زيتون",
            "Wild thyme with olive oil",
            60_000,
            true,
            true,
            0,
        ),
        item(
            "saj-cheese",
            "saj",
            "منقوشة جبنة",
            "Cheese Manousheh",
            "جبنة عكاوي ذائبة",
            "Melted akkawi cheese",
            80_000,
            false,
            true,
            0,
        ),
        item(
            "saj-kafta",
            "saj",
            "صاج كفتة",
            "Saj Kafta",
            "كفتة مشوية مع بقدونس وبصل",
            "Grilled kafta with parsley and onions",
            110_000,
            false,
            false,
            1,
        ),
        item(
            "wrap-chicken",
            "wraps",
            "لفافة دجاج",
            "Chicken Wrap",
            "دجاج مع صلصة ثوم وبطاطا مقلية",
            "Chicken with garlic sauce and fries",
            120_000,
            true,
            false,
            1,
        ),
        item(
            "wrap-falafel",
            "wraps",
            "لفافة فلافل",
            "Falafel Wrap",
            "فلافل مقرمشة مع طرطور وخضار",
            "Crispy falafel with tarator and vegetables",
            70_000,
            false,
            true,
            2,
        ),
        item(
            "drink-ayran",
            "drinks",
            "عيران",
            "Ayran",
            "لبن عيران بارد",
            "Cold salted yogurt drink",
            35_000,
            false,
            true,
            0,
        ),
        item(
            "drink-jallab",
            "drinks",
            "جلاب",
            "Jallab",
            "جلاب مع صنوبر وزبيب",
            "Jallab with pine nuts and raisins",
            50_000,
            false,
            true,
            0,
        ),
        item(
            "sweet-knefeh",
            "sweets",
            "كنافة",
            "Knefeh",
            "كنافة بالجبن مع قطر",
            "Cheese knefeh with sugar syrup",
            90_000,
            true,
            true,
            0,
        ),
        item(
            "sweet-baklava",
            "sweets",
            "بقلاوة",
            "Baklava",
            "بقلاوة مشكلة بالفستق",
            "Assorted pistachio baklava",
            85_000,
            false,
            true,
            0,
        ),
    ]
}
