mod catalog;
mod theming;

pub use catalog::CatalogScreen;
pub use theming::ThemingScreen;

use std::collections::HashMap;

use crate::action::LayoutMode;
use crate::component::Component;
use crate::screen::ScreenId;

/// Build the full screen set, one component per screen id.
pub fn create_screens(initial_layout: LayoutMode) -> HashMap<ScreenId, Box<dyn Component>> {
    let mut screens: HashMap<ScreenId, Box<dyn Component>> = HashMap::new();
    screens.insert(
        ScreenId::Catalog,
        Box::new(CatalogScreen::new(initial_layout)),
    );
    screens.insert(ScreenId::Theming, Box::new(ThemingScreen::new()));
    screens
}
