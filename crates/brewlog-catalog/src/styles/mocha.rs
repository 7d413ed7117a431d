use brewlog_core::models::pairing::Intensity;

use crate::CoffeeStyle;

const LIGHT: &[&str] = &["Vanilla ice cream", "Salted nuts", "Salted potato chips"];
const RICH: &[&str] = &[
    "Waffles",
    "Crepe with whipped cream",
    "Chocolate chip cookies",
];

/// Caffè mocha or a flavored latte. The cup itself is already sweet.
#[derive(Debug)]
pub struct Mocha;

impl CoffeeStyle for Mocha {
    fn id(&self) -> &str {
        "mocha_flavored"
    }

    fn name(&self) -> &str {
        "Caffe Mocha / Flavored Latte"
    }

    fn reason(&self) -> &str {
        "With sweetness and aroma already in the cup, plain or salty snacks pair surprisingly well."
    }

    fn suggestions(&self, intensity: Intensity) -> &[&str] {
        match intensity {
            Intensity::Light => LIGHT,
            Intensity::Rich => RICH,
        }
    }
}
