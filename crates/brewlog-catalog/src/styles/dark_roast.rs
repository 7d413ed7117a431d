use brewlog_core::models::pairing::Intensity;

use crate::CoffeeStyle;

const LIGHT: &[&str] = &["Bitter chocolate", "Yokan", "Karinto", "Coffee jelly"];
const RICH: &[&str] = &[
    "Gateau au chocolat",
    "Baked cheesecake",
    "Tiramisu",
    "Dorayaki",
    "Brownie",
];

/// Dark-roast black coffee. Heavy bitterness, low acidity.
#[derive(Debug)]
pub struct DarkRoast;

impl CoffeeStyle for DarkRoast {
    fn id(&self) -> &str {
        "dark_roast"
    }

    fn name(&self) -> &str {
        "Black: Dark Roast"
    }

    fn reason(&self) -> &str {
        "Dense chocolate, cream, or sweet bean paste stands up to the strong bitterness."
    }

    fn suggestions(&self, intensity: Intensity) -> &[&str] {
        match intensity {
            Intensity::Light => LIGHT,
            Intensity::Rich => RICH,
        }
    }
}
