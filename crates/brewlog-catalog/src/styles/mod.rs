pub mod dark_roast;
pub mod espresso;
pub mod latte;
pub mod light_roast;
pub mod medium_roast;
pub mod mocha;
