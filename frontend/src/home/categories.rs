#[derive(Debug, Clone, Copy, PartialEq)]
/// Sidebar entry; `icon` is a glyph rendered as text.
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const HOME_CATEGORY_ID: &str = "0";

pub const CATEGORIES: [Category; 9] = [
    Category { id: HOME_CATEGORY_ID, label: "Home", icon: "\u{1F3E0}" },
    Category { id: "20", label: "Gaming", icon: "\u{1F3AE}" },
    Category { id: "2", label: "Automobiles", icon: "\u{1F697}" },
    Category { id: "17", label: "Sports", icon: "\u{26BD}" },
    Category { id: "24", label: "Entertainment", icon: "\u{1F3AC}" },
    Category { id: "28", label: "Technology", icon: "\u{1F4BB}" },
    Category { id: "10", label: "Music", icon: "\u{1F3B5}" },
    Category { id: "22", label: "Blogs", icon: "\u{1F4DD}" },
    Category { id: "25", label: "News", icon: "\u{1F4F0}" },
];
