use brewlog_core::models::pairing::Intensity;

use crate::CoffeeStyle;

const LIGHT: &[&str] = &["Financier", "Madeleine", "Castella", "Nut cookies"];
const RICH: &[&str] = &["Pound cake", "Pancakes", "Baumkuchen", "Caramel tart"];

/// Medium-roast black coffee. Balanced acidity and bitterness.
#[derive(Debug)]
pub struct MediumRoast;

impl CoffeeStyle for MediumRoast {
    fn id(&self) -> &str {
        "medium_roast"
    }

    fn name(&self) -> &str {
        "Black: Medium Roast"
    }

    fn reason(&self) -> &str {
        "The balance of acidity and bitterness works with nearly any butter or nut baked good."
    }

    fn suggestions(&self, intensity: Intensity) -> &[&str] {
        match intensity {
            Intensity::Light => LIGHT,
            Intensity::Rich => RICH,
        }
    }
}
