use brewlog_core::models::pairing::Intensity;

use crate::CoffeeStyle;

const LIGHT: &[&str] = &["Amaretti", "A square of dark chocolate"];
const RICH: &[&str] = &["Mini tart", "Fondant au chocolat", "Custard pudding"];

/// Espresso. Small volume, concentrated flavor.
#[derive(Debug)]
pub struct Espresso;

impl CoffeeStyle for Espresso {
    fn id(&self) -> &str {
        "espresso"
    }

    fn name(&self) -> &str {
        "Espresso"
    }

    fn reason(&self) -> &str {
        "A small, intense cup calls for one satisfying bite — or an Italian classic."
    }

    fn suggestions(&self, intensity: Intensity) -> &[&str] {
        match intensity {
            Intensity::Light => LIGHT,
            Intensity::Rich => RICH,
        }
    }
}
