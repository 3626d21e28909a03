//! Design tokens and stylesheet for the storefront components.

/// Primary accent color (sale flag, sale price).
pub const COLOR_PRIMARY: &str = "hsl(340deg 65% 47%)";
/// Secondary accent color (new-release flag).
pub const COLOR_SECONDARY: &str = "hsl(240deg 60% 63%)";
pub const COLOR_WHITE: &str = "hsl(0deg 0% 100%)";
pub const COLOR_GRAY_700: &str = "hsl(220deg 5% 40%)";
pub const COLOR_GRAY_900: &str = "hsl(220deg 3% 20%)";

pub const WEIGHT_NORMAL: u16 = 500;
pub const WEIGHT_MEDIUM: u16 = 600;
pub const WEIGHT_BOLD: u16 = 800;

/// CSS for the card classes, for embedding in a page shell.
pub const SHOE_CARD_STYLES: &str = r#"
.shoe-grid { display: flex; flex-wrap: wrap; gap: 32px; }

.shoe-card-link { text-decoration: none; color: inherit; flex: 1 1 340px; }

.shoe-image-wrapper { position: relative; }
.shoe-image { width: 100%; border-radius: 16px 16px 4px 4px; }

.shoe-flag {
    position: absolute;
    top: 12px;
    right: -4px;
    padding: 9px 10px;
    border-radius: 2px;
    font-size: 0.875rem;
    font-weight: 800;
    color: hsl(0deg 0% 100%);
    pointer-events: none;
}

.shoe-row { display: flex; justify-content: space-between; font-size: 1rem; }

.shoe-name { font-weight: 600; color: hsl(220deg 3% 20%); margin: 0; }
.shoe-price--struck { text-decoration: line-through; color: hsl(220deg 5% 40%); }
.shoe-colors { color: hsl(220deg 5% 40%); margin: 0; }
.shoe-sale-price { font-weight: 600; color: hsl(340deg 65% 47%); }

.skeleton { background: hsl(185deg 5% 95%); border-radius: 4px; }
"#;
