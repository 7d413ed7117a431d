use brewlog_core::models::pairing::Intensity;

use crate::CoffeeStyle;

const LIGHT: &[&str] = &["Lemon cake", "Dried fruit", "Fruit jelly", "Macarons"];
const RICH: &[&str] = &[
    "Fruit tart",
    "Apple pie",
    "Strawberry shortcake",
    "No-bake cheesecake",
];

/// Light-roast black coffee. Bright, fruit-forward acidity.
#[derive(Debug)]
pub struct LightRoast;

impl CoffeeStyle for LightRoast {
    fn id(&self) -> &str {
        "light_roast"
    }

    fn name(&self) -> &str {
        "Black: Light Roast"
    }

    fn reason(&self) -> &str {
        "Fruity or lightly sweet pastries play up the bright, fruit-forward acidity."
    }

    fn suggestions(&self, intensity: Intensity) -> &[&str] {
        match intensity {
            Intensity::Light => LIGHT,
            Intensity::Rich => RICH,
        }
    }
}
