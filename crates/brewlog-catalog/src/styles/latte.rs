use brewlog_core::models::pairing::Intensity;

use crate::CoffeeStyle;

const LIGHT: &[&str] = &["Biscotti", "Butter cookies", "Pretzels"];
const RICH: &[&str] = &["Sugar donut", "Croissant", "Scone", "Toasted sandwich"];

/// Caffè latte or cappuccino. Milk-mellowed body.
#[derive(Debug)]
pub struct Latte;

impl CoffeeStyle for Latte {
    fn id(&self) -> &str {
        "latte_cappuccino"
    }

    fn name(&self) -> &str {
        "Caffe Latte / Cappuccino"
    }

    fn reason(&self) -> &str {
        "The mellow milk body likes wheat-forward bakes or something with a little fat."
    }

    fn suggestions(&self, intensity: Intensity) -> &[&str] {
        match intensity {
            Intensity::Light => LIGHT,
            Intensity::Rich => RICH,
        }
    }
}
