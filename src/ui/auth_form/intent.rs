use crate::ui::auth_form::state::AuthScreen;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AuthFormIntent {
    /// Location moved to another auth screen: start from empty fields.
    Load { screen: AuthScreen },
    Insert(char),
    DeleteBack,
    FocusNext,
    FocusPrev,
    /// Check every field and attach messages to the invalid ones.
    Validate,
    /// Drop typed values, keep the screen. Used after logout.
    Clear,
}

impl Intent for AuthFormIntent {}
