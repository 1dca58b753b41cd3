use super::model::Menu;
use crate::error::Result;

/// Source of the menu for one run.
///
/// Implementations must normalize item names through [`Menu::insert`] and
/// report a missing source as [`crate::TallyError::MenuNotFound`].
pub trait MenuRepository {
    fn load(&self) -> Result<Menu>;
}
